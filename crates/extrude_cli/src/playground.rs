//! The two buttons of the landing page

use extrude_cn::prelude::*;

/// Translucent flip button and the large metallic call to action
pub fn landing_buttons() -> [Button; 2] {
    let glass = cn::button("Glass Button")
        .opacity(0.3)
        .animation(AnimationKind::Flip)
        .shadow_color("white")
        .shadow_opacity(1.0)
        .gradient("#ff0000", "#003838", 45.0);

    let components = cn::button("View Components")
        .depth(1.0)
        .shape(Shape::Rounded)
        .text_color("whitesmoke")
        .metalness(0.9)
        .roughness(0.7)
        .size(SizeCategory::Large)
        .shadow_color("whitesmoke")
        .shadow_opacity(1.0)
        .gradient("#0a4674", "#60a5fa", 90.0);

    [glass, components]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_buttons() {
        let [glass, components] = landing_buttons();
        assert_eq!(glass.props().animation, AnimationKind::Flip);
        assert_eq!(glass.props().opacity, 0.3);
        assert_eq!(components.props().size, SizeCategory::Large);

        let scene = components.scene(Viewport::new(1280.0, 800.0));
        assert_eq!(scene.label.as_deref(), Some("View Components"));
        let shadow = scene.stage.and_then(|s| s.shadow).unwrap();
        assert_eq!(shadow.opacity, 1.0);
    }
}
