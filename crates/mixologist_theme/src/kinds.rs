#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, Pixels};

use crate::{ThemeExt, ThemeSpacing};

/// Text size variants that resolve to theme-defined values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
pub enum ThemeTextSizeKind {
    /// Page title.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_xl)]
    Xl,
    /// Section headings.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_md)]
    Md,
    /// Standard body text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    Body,
    /// Tags, amounts and other small labels.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    Caption,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> Pixels)]
pub enum ThemeCornerRadiiKind {
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Steps of the session padding scale.
///
/// `pick` reads a step out of an explicit scale, `resolve` out of the
/// global theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Assoc)]
#[func(pub fn pick(&self, scale: &ThemeSpacing) -> Pixels)]
#[func(pub fn key(&self) -> &'static str)]
pub enum ThemeLayoutPaddingKind {
    #[assoc(pick = scale.none)]
    #[assoc(key = "none")]
    None,
    #[assoc(pick = scale.xxs)]
    #[assoc(key = "xxs")]
    Xxs,
    #[assoc(pick = scale.xs)]
    #[assoc(key = "xs")]
    Xs,
    #[assoc(pick = scale.sm)]
    #[assoc(key = "sm")]
    Sm,
    #[default]
    #[assoc(pick = scale.md)]
    #[assoc(key = "md")]
    Md,
    #[assoc(pick = scale.lg)]
    #[assoc(key = "lg")]
    Lg,
    #[assoc(pick = scale.xl)]
    #[assoc(key = "xl")]
    Xl,
    #[assoc(pick = scale.xxl)]
    #[assoc(key = "xxl")]
    Xxl,
}

impl ThemeLayoutPaddingKind {
    pub const ALL: [ThemeLayoutPaddingKind; 8] = [
        ThemeLayoutPaddingKind::None,
        ThemeLayoutPaddingKind::Xxs,
        ThemeLayoutPaddingKind::Xs,
        ThemeLayoutPaddingKind::Sm,
        ThemeLayoutPaddingKind::Md,
        ThemeLayoutPaddingKind::Lg,
        ThemeLayoutPaddingKind::Xl,
        ThemeLayoutPaddingKind::Xxl,
    ];

    /// Parses a scale key. The short aliases `s`, `m` and `l` are accepted.
    pub fn from_key(key: &str) -> Option<ThemeLayoutPaddingKind> {
        match key {
            "s" => Some(Self::Sm),
            "m" => Some(Self::Md),
            "l" => Some(Self::Lg),
            key => Self::ALL.into_iter().find(|kind| kind.key() == key),
        }
    }

    pub fn resolve(&self, cx: &App) -> Pixels {
        self.pick(&cx.get_theme().layout.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Theme, ThemeName};

    #[test]
    fn padding_keys_and_aliases() {
        assert_eq!(
            ThemeLayoutPaddingKind::from_key("xl"),
            Some(ThemeLayoutPaddingKind::Xl)
        );
        assert_eq!(
            ThemeLayoutPaddingKind::from_key("s"),
            ThemeLayoutPaddingKind::from_key("sm")
        );
        assert_eq!(
            ThemeLayoutPaddingKind::from_key("m"),
            Some(ThemeLayoutPaddingKind::Md)
        );
        assert_eq!(ThemeLayoutPaddingKind::from_key("huge"), None);
        assert_eq!(ThemeLayoutPaddingKind::default(), ThemeLayoutPaddingKind::Md);
    }

    #[test]
    fn padding_picks_from_scale() {
        let spacing = &Theme::builtin(ThemeName::Light).layout.spacing;

        assert_eq!(ThemeLayoutPaddingKind::Xl.pick(spacing), spacing.xl);
        assert_eq!(ThemeLayoutPaddingKind::None.pick(spacing), spacing.none);
        assert_eq!(ThemeLayoutPaddingKind::Xxs.pick(spacing), spacing.xxs);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use crate::{Theme, ThemeName};
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_padding_resolves_against_global_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin(ThemeName::Sepia));

            let spacing = cx.get_theme().layout.spacing.clone();
            assert_eq!(ThemeLayoutPaddingKind::Lg.resolve(cx), spacing.lg);
        });
    }

    #[gpui::test]
    fn test_text_and_radius_kinds_resolve(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin(ThemeName::Light));

            let _ = ThemeTextSizeKind::Xl.resolve(cx);
            let _ = ThemeTextSizeKind::Caption.resolve(cx);
            assert!(ThemeCornerRadiiKind::Lg.resolve(cx) > ThemeCornerRadiiKind::Sm.resolve(cx));
        });
    }
}
