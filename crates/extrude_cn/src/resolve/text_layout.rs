//! Word wrapping for extruded text
//!
//! Extruded glyphs are far wider than their font size suggests, so lines
//! are broken much earlier than flat text would be.

/// Wrapped text and the block it occupies
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<String>,
    /// Uniform scale applied to the text mesh
    pub scale: f32,
    /// Block size in CSS pixels
    pub width: f32,
    pub height: f32,
}

impl TextLayout {
    /// Lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

const PIXELS_PER_CHAR: f32 = 35.0;
const MAX_LINE_CHARS: usize = 30;
const SCALE_PIXELS_PER_CHAR: f32 = 25.0;
const MAX_SCALE: f32 = 0.8;
const LINE_HEIGHT_PIXELS: f32 = 50.0;
const MIN_BLOCK_HEIGHT: f32 = 100.0;

/// Wrap `content` for a container `container_width` pixels wide
///
/// Before the container is measured (`container_width == 0`) the text is
/// left unwrapped at full scale in a 300×100 block.
pub fn layout_text(content: &str, container_width: f32, font_size: f32) -> TextLayout {
    if container_width <= 0.0 || font_size <= 0.0 {
        return TextLayout {
            lines: vec![content.to_string()],
            scale: 1.0,
            width: 300.0,
            height: MIN_BLOCK_HEIGHT,
        };
    }

    let chars_per_line = (container_width / (font_size * PIXELS_PER_CHAR)).floor() as usize;
    let limit = chars_per_line.min(MAX_LINE_CHARS);

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split(' ') {
        // The joining space counts even for the first word of a line
        let candidate = current.chars().count() + 1 + word.chars().count();
        if candidate <= limit {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let wrapped_len = lines.iter().map(|l| l.chars().count()).sum::<usize>()
        + lines.len().saturating_sub(1);
    let scale = if wrapped_len == 0 {
        MAX_SCALE
    } else {
        MAX_SCALE.min(container_width / (wrapped_len as f32 * font_size * SCALE_PIXELS_PER_CHAR))
    };

    TextLayout {
        height: MIN_BLOCK_HEIGHT.max(lines.len() as f32 * font_size * LINE_HEIGHT_PIXELS),
        width: container_width,
        lines,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmeasured_container() {
        let layout = layout_text("Hello World", 0.0, 1.0);
        assert_eq!(layout.text(), "Hello World");
        assert_eq!(layout.scale, 1.0);
        assert_eq!((layout.width, layout.height), (300.0, 100.0));
    }

    #[test]
    fn test_wraps_at_chars_per_line() {
        // 420 / 35 = 12 chars per line
        let layout = layout_text("Add depth to your web experience", 420.0, 1.0);
        assert_eq!(layout.lines, vec!["Add depth to", "your web", "experience"]);
        assert_eq!(layout.height, 150.0);
    }

    #[test]
    fn test_line_limit_caps_at_thirty() {
        let content = "word ".repeat(20);
        let layout = layout_text(content.trim(), 5000.0, 1.0);
        assert!(layout.lines.iter().all(|l| l.chars().count() <= 30));
        assert!(layout.lines.len() > 1);
    }

    #[test]
    fn test_scale_capped() {
        let layout = layout_text("Hi", 2000.0, 1.0);
        assert_eq!(layout.scale, 0.8);
        let narrow = layout_text("Hello World", 100.0, 1.0);
        assert!(narrow.scale < 0.8);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let layout = layout_text("a extraordinarily b", 210.0, 1.0);
        assert_eq!(layout.lines, vec!["a", "extraordinarily", "b"]);
    }
}
