use gpui::Rgba;

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Scales the existing alpha, keeping translucent theme colours translucent.
    fn fade(self, factor: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn fade(mut self, factor: f32) -> Self {
        self.a = (self.a * factor).clamp(0., 1.);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_scales_alpha() {
        let color = Rgba { r: 0.2, g: 0.4, b: 0.6, a: 0.5 };

        assert_eq!(color.fade(0.5).a, 0.25);
        assert_eq!(color.fade(4.).a, 1.);
        assert_eq!(color.fade(0.5).r, color.r);
    }
}
