use gpui::App;

use crate::{Theme, ThemeName};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }
}

/// The one place a theme change leaves the component tree.
pub trait ThemeSink {
    fn apply_theme(&mut self, name: ThemeName);
}

impl ThemeSink for App {
    fn apply_theme(&mut self, name: ThemeName) {
        tracing::info!(theme = %name, "applying theme");
        self.set_theme(Theme::builtin(name));
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin(ThemeName::Light));
            assert_eq!(cx.get_theme().name.as_ref(), "Light");
        });
    }

    #[gpui::test]
    fn test_apply_theme_replaces_global(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin(ThemeName::Light));
            cx.apply_theme(ThemeName::Sepia);

            let theme = cx.get_theme();
            assert_eq!(theme.name.as_ref(), "Sepia");
            assert_eq!(
                theme.colors.main,
                Theme::builtin(ThemeName::Sepia).colors.main
            );
        });
    }
}
