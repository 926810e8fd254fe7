//! Box dimensions from label length

use extrude_theme::{SizeCategory, SizeTokens};

/// Box size in scene units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedDimensions {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
}

/// Fit a box of the given tier around `text`
///
/// The width grows with the estimated label width but never drops below
/// the tier's base width. Height and font size come straight from the tier.
pub fn resolve_dimensions(size: SizeCategory, text: &str, tokens: &SizeTokens) -> ResolvedDimensions {
    let base = tokens.base.get(size);
    let char_width = base.font_size * tokens.char_width_factor;
    let text_len = text.chars().count() as f32;
    let estimated = text_len * char_width * tokens.multiplier.get(size);

    ResolvedDimensions {
        width: base.width.max(estimated),
        height: base.height,
        font_size: base.font_size,
    }
}
