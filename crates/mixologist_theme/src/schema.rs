use std::{fmt, fs, path::Path, sync::LazyLock};

use gpui::{AbsoluteLength, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    ThemeError,
    deserializers::{de_abs_length, de_def_length, de_font_family, de_pixels},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub colors: ThemeColors,
}

macro_rules! builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ $(,)? ) => {
        $(
            static $name: LazyLock<Theme> = LazyLock::new(|| {
                Theme::from_json(include_str!($path))
                    .expect(concat!("built-in theme ", $path, " is invalid"))
            });
        )+
    };
}

builtin_themes!(
    ["../themes/light.json", LIGHT],
    ["../themes/dark.json", DARK],
    ["../themes/sepia.json", SEPIA],
);

impl Theme {
    /// Returns one of the themes embedded in the crate.
    pub fn builtin(name: ThemeName) -> &'static Theme {
        match name {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
            ThemeName::Sepia => &SEPIA,
        }
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(json)
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

/// The themes shipped with the crate, in the order the navigation cycles
/// through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Light, ThemeName::Dark, ThemeName::Sepia];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Sepia => "sepia",
        }
    }

    pub fn from_name(name: &str) -> Option<ThemeName> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == name)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub spacing: ThemeSpacing,
    #[serde(deserialize_with = "de_pixels")]
    pub max_content_width: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_font_family")]
    pub family: SmallVec<[SharedString; 2]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_xl: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub heading: f32,
    pub body: f32,
    pub label: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

/// The inner padding scale of page sessions, smallest to largest.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSpacing {
    #[serde(deserialize_with = "de_pixels")]
    pub none: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xxs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xxl: Pixels,
}

/// Concrete values behind the colour tokens. Which token a component uses
/// for a given role is decided by the palette in scope, not here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub main: Rgba,
    pub main_muted: Rgba,
    pub contrast: Rgba,
    pub contrast_muted: Rgba,
    pub details: Rgba,
    pub highlight: Rgba,
    pub alert: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::px;

    #[test]
    fn builtin_themes_parse() {
        for name in ThemeName::ALL {
            let theme = Theme::builtin(name);
            assert!(!theme.name.is_empty(), "{name} should have a name");
            assert!(theme.layout.max_content_width > px(0.));
        }
    }

    #[test]
    fn builtin_spacing_scale_is_ordered() {
        for name in ThemeName::ALL {
            let spacing = &Theme::builtin(name).layout.spacing;
            let scale = [
                spacing.none,
                spacing.xxs,
                spacing.xs,
                spacing.sm,
                spacing.md,
                spacing.lg,
                spacing.xl,
                spacing.xxl,
            ];

            assert_eq!(scale[0], px(0.));
            assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn theme_names_round_trip_through_strings() {
        for name in ThemeName::ALL {
            assert_eq!(ThemeName::from_name(name.as_str()), Some(name));
        }
        assert_eq!(ThemeName::from_name("black_and_white"), None);
        assert_eq!(ThemeName::default(), ThemeName::ALL[0]);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let error = Theme::from_json("{ \"name\": \"broken\" }").unwrap_err();
        assert!(matches!(error, ThemeError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let error = Theme::from_file("/definitely/not/a/theme.json").unwrap_err();
        match error {
            ThemeError::Io { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/a/theme.json"))
            }
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}
