//! Role-level style tables shared by the styled leaf components.
//!
//! Components describe their look in terms of [`ColorRole`]s. Resolving a
//! [`RoleStyle`] through the palette in scope yields the tokens to paint
//! with, and resolving those against the active theme yields colours.

use gpui::Rgba;
use mixologist_theme::{ColorRole, ColorToken, PaletteResolution, ThemeColors};

use crate::utils::RgbaExt;

/// Pointer state of an interactive element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Rest,
    Hover,
    Active,
}

impl Interaction {
    pub fn from_flags(is_hover: bool, is_active: bool) -> Self {
        if is_active {
            Interaction::Active
        } else if is_hover {
            Interaction::Hover
        } else {
            Interaction::Rest
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleSurface {
    pub background: ColorRole,
    pub background_alpha: f32,
    pub text: ColorRole,
    pub border: ColorRole,
}

impl RoleSurface {
    pub const fn new(background: ColorRole, text: ColorRole, border: ColorRole) -> Self {
        Self {
            background,
            background_alpha: 1.,
            text,
            border,
        }
    }

    pub const fn background_alpha(mut self, alpha: f32) -> Self {
        self.background_alpha = alpha;
        self
    }

    pub fn resolve(&self, palette: &PaletteResolution) -> Surface {
        Surface {
            background: palette.get(self.background),
            background_alpha: self.background_alpha,
            text: palette.get(self.text),
            border: palette.get(self.border),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleStyle {
    pub rest: RoleSurface,
    pub hover: RoleSurface,
    pub active: RoleSurface,
}

impl RoleStyle {
    pub fn resolve(&self, palette: &PaletteResolution) -> InteractionStyle {
        InteractionStyle {
            rest: self.rest.resolve(palette),
            hover: self.hover.resolve(palette),
            active: self.active.resolve(palette),
        }
    }
}

/// Tokens for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub background: ColorToken,
    pub background_alpha: f32,
    pub text: ColorToken,
    pub border: ColorToken,
}

impl Surface {
    pub fn background_color(&self, colors: &ThemeColors) -> Rgba {
        self.background
            .resolve(colors)
            .fade(self.background_alpha)
    }

    pub fn text_color(&self, colors: &ThemeColors) -> Rgba {
        self.text.resolve(colors)
    }

    pub fn border_color(&self, colors: &ThemeColors) -> Rgba {
        self.border.resolve(colors)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionStyle {
    pub rest: Surface,
    pub hover: Surface,
    pub active: Surface,
}

impl InteractionStyle {
    pub fn surface(&self, interaction: Interaction) -> &Surface {
        match interaction {
            Interaction::Rest => &self.rest,
            Interaction::Hover => &self.hover,
            Interaction::Active => &self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixologist_theme::{Theme, ThemeName, VisualMode};

    const SAMPLE: RoleStyle = RoleStyle {
        rest: RoleSurface::new(ColorRole::Main, ColorRole::Contrast, ColorRole::Contrast),
        hover: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast),
        active: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast)
            .background_alpha(0.7),
    };

    #[test]
    fn interaction_prefers_active_over_hover() {
        assert_eq!(Interaction::from_flags(true, true), Interaction::Active);
        assert_eq!(Interaction::from_flags(true, false), Interaction::Hover);
        assert_eq!(Interaction::from_flags(false, false), Interaction::Rest);
    }

    #[test]
    fn resolution_follows_the_palette() {
        let default = SAMPLE.resolve(&PaletteResolution::for_mode(VisualMode::Default));
        let inverted = SAMPLE.resolve(&PaletteResolution::for_mode(VisualMode::Inverted));

        assert_eq!(default.rest.background, ColorToken::Main);
        assert_eq!(inverted.rest.background, ColorToken::Contrast);
        assert_eq!(inverted.surface(Interaction::Hover).text, ColorToken::Contrast);
    }

    #[test]
    fn background_alpha_is_applied_to_theme_colour() {
        let colors = &Theme::builtin(ThemeName::Dark).colors;
        let style = SAMPLE.resolve(&PaletteResolution::DEFAULT);

        assert_eq!(style.active.background_color(colors).a, colors.contrast.a * 0.7);
        assert_eq!(style.rest.background_color(colors), colors.main);
    }
}
