#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use gpui::Rgba;
use serde::{Deserialize, Serialize};

use crate::ThemeColors;

/// Selects which role-to-token mapping is active for a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualMode {
    #[default]
    Default,
    Inverted,
}

impl VisualMode {
    pub const ALL: [VisualMode; 2] = [VisualMode::Default, VisualMode::Inverted];

    pub fn name(&self) -> &'static str {
        match self {
            VisualMode::Default => "default",
            VisualMode::Inverted => "inverted",
        }
    }

    pub fn from_name(name: &str) -> Option<VisualMode> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }
}

impl fmt::Display for VisualMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A semantic colour slot, independent of the value it ends up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Main,
    MainMuted,
    Contrast,
    ContrastMuted,
    Details,
    Highlight,
    Alert,
}

impl ColorRole {
    pub const ALL: [ColorRole; 7] = [
        ColorRole::Main,
        ColorRole::MainMuted,
        ColorRole::Contrast,
        ColorRole::ContrastMuted,
        ColorRole::Details,
        ColorRole::Highlight,
        ColorRole::Alert,
    ];
}

/// A named colour variable of the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn css_var(&self) -> &'static str)]
#[func(pub fn resolve(&self, colors: &ThemeColors) -> Rgba)]
pub enum ColorToken {
    #[assoc(css_var = "--color-main")]
    #[assoc(resolve = colors.main)]
    Main,
    #[assoc(css_var = "--color-main-muted")]
    #[assoc(resolve = colors.main_muted)]
    MainMuted,
    #[assoc(css_var = "--color-contrast")]
    #[assoc(resolve = colors.contrast)]
    Contrast,
    #[assoc(css_var = "--color-contrast-muted")]
    #[assoc(resolve = colors.contrast_muted)]
    ContrastMuted,
    #[assoc(css_var = "--color-details")]
    #[assoc(resolve = colors.details)]
    Details,
    #[assoc(css_var = "--color-highlight")]
    #[assoc(resolve = colors.highlight)]
    Highlight,
    #[assoc(css_var = "--color-alert")]
    #[assoc(resolve = colors.alert)]
    Alert,
}

/// The role-to-token mapping materialised for one [`VisualMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteResolution {
    pub main: ColorToken,
    pub main_muted: ColorToken,
    pub contrast: ColorToken,
    pub contrast_muted: ColorToken,
    pub details: ColorToken,
    pub highlight: ColorToken,
    pub alert: ColorToken,
}

impl PaletteResolution {
    pub const DEFAULT: PaletteResolution = PaletteResolution {
        main: ColorToken::Main,
        main_muted: ColorToken::MainMuted,
        contrast: ColorToken::Contrast,
        contrast_muted: ColorToken::ContrastMuted,
        details: ColorToken::Details,
        highlight: ColorToken::Highlight,
        alert: ColorToken::Alert,
    };

    pub const INVERTED: PaletteResolution = PaletteResolution {
        main: ColorToken::Contrast,
        main_muted: ColorToken::ContrastMuted,
        contrast: ColorToken::Main,
        contrast_muted: ColorToken::MainMuted,
        details: ColorToken::Details,
        highlight: ColorToken::Highlight,
        alert: ColorToken::Alert,
    };

    pub fn for_mode(mode: VisualMode) -> PaletteResolution {
        match mode {
            VisualMode::Default => Self::DEFAULT,
            VisualMode::Inverted => Self::INVERTED,
        }
    }

    pub fn get(&self, role: ColorRole) -> ColorToken {
        match role {
            ColorRole::Main => self.main,
            ColorRole::MainMuted => self.main_muted,
            ColorRole::Contrast => self.contrast,
            ColorRole::ContrastMuted => self.contrast_muted,
            ColorRole::Details => self.details,
            ColorRole::Highlight => self.highlight,
            ColorRole::Alert => self.alert,
        }
    }

    /// Looks the role up and resolves it against concrete theme colours.
    pub fn color(&self, role: ColorRole, colors: &ThemeColors) -> Rgba {
        self.get(role).resolve(colors)
    }
}

impl Default for PaletteResolution {
    fn default() -> Self {
        Self::DEFAULT
    }
}
