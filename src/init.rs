use gpui::{App, Window};
use mixologist_theme::{Theme, ThemeExt, ThemeName};

use crate::primitives;

/// Installs the default theme and the text field key bindings. Call once
/// before opening windows.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        cx.set_theme(Theme::builtin(ThemeName::default()));
    }

    primitives::input::init(cx);
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
