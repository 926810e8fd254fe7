//! Host container sizing, in CSS pixels

use extrude_theme::{ContainerTokens, SizeCategory};

/// `clamp(min, vh%, max)` for the tier
pub fn container_height(size: SizeCategory, viewport_height: f32, tokens: &ContainerTokens) -> f32 {
    let rule = tokens.height.get(size);
    let fluid = viewport_height.max(0.0) * rule.viewport_percent / 100.0;
    fluid.clamp(rule.min_px, rule.max_px.max(rule.min_px))
}

/// Canvas height that keeps the image's aspect ratio at `container_width`
pub fn image_canvas_height(container_width: f32, width: f32, height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    container_width / (width / height)
}
