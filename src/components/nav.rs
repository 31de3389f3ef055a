use gpui::{
    App, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window, div, px,
};
use mixologist_theme::{ColorRole, ThemeExt, ThemeName, ThemeSink, ThemeTextSizeKind};

use crate::{
    components::{Button, SearchHandler, Searchbar, SearchbarVariant},
    context::ModeContext,
};

pub const NAV_TITLE: &str = "Mixologist";

/// Round-robin position in [`ThemeName::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeCycle {
    index: usize,
}

impl ThemeCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ThemeName {
        ThemeName::ALL[self.index]
    }

    pub fn advance(&mut self) -> ThemeName {
        self.index = (self.index + 1) % ThemeName::ALL.len();
        self.current()
    }

    pub fn apply(&self, sink: &mut impl ThemeSink) {
        sink.apply_theme(self.current());
    }

    pub fn advance_and_apply(&mut self, sink: &mut impl ThemeSink) -> ThemeName {
        let name = self.advance();
        sink.apply_theme(name);
        name
    }
}

/// Top bar with the app title, the theme switcher and a search field.
pub struct GlobalNav {
    cycle: ThemeCycle,
    on_search: Option<SearchHandler>,
}

impl GlobalNav {
    /// Creates the nav and applies the first theme of the cycle.
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let cycle = ThemeCycle::new();
        let app: &mut App = cx;
        cycle.apply(app);

        Self {
            cycle,
            on_search: None,
        }
    }

    pub fn set_on_search(&mut self, on_search: Option<SearchHandler>) {
        self.on_search = on_search;
    }

    pub fn current_theme(&self) -> ThemeName {
        self.cycle.current()
    }

    pub fn cycle_theme(&mut self, cx: &mut Context<Self>) {
        let app: &mut App = cx;
        self.cycle.advance_and_apply(app);
        cx.notify();
    }
}

impl Render for GlobalNav {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let scope = ModeContext::root();
        let palette = scope.palette();
        let theme = cx.get_theme();

        let background = palette.color(ColorRole::Main, &theme.colors);
        let text_color = palette.color(ColorRole::Contrast, &theme.colors);
        let border_color = palette.color(ColorRole::MainMuted, &theme.colors);
        let max_width = theme.layout.max_content_width;
        let title_weight = FontWeight(theme.layout.text.default_font.weights.heading);
        let title_size = ThemeTextSizeKind::Md.resolve(cx);

        div()
            .w_full()
            .bg(background)
            .text_color(text_color)
            .border_b_1()
            .border_color(border_color)
            .child(
                div()
                    .mx_auto()
                    .flex()
                    .items_center()
                    .w_full()
                    .max_w(max_width)
                    .pl(px(48.))
                    .pr(px(48.))
                    .pt(px(16.))
                    .pb(px(16.))
                    .child(
                        div()
                            .flex_none()
                            .text_size(title_size)
                            .font_weight(title_weight)
                            .child(NAV_TITLE),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_1()
                            .items_center()
                            .justify_evenly()
                            .child(
                                Button::new("global_nav:theme")
                                    .text(self.cycle.current().as_str())
                                    .scope(&scope)
                                    .on_click(cx.listener(|this, _event, _window, cx| {
                                        this.cycle_theme(cx)
                                    })),
                            )
                            .child(
                                Searchbar::new("global_nav:search")
                                    .variant(SearchbarVariant::Nav)
                                    .scope(&scope)
                                    .on_search_handler(self.on_search.clone()),
                            ),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<ThemeName>,
    }

    impl ThemeSink for RecordingSink {
        fn apply_theme(&mut self, name: ThemeName) {
            self.applied.push(name);
        }
    }

    #[test]
    fn starts_at_first_theme() {
        assert_eq!(ThemeCycle::new().current(), ThemeName::Light);
    }

    #[test]
    fn advances_in_list_order() {
        let mut cycle = ThemeCycle::new();

        assert_eq!(cycle.advance(), ThemeName::Dark);
        assert_eq!(cycle.advance(), ThemeName::Sepia);
        assert_eq!(cycle.advance(), ThemeName::Light);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut cycle = ThemeCycle::new();
        for _ in 0..ThemeName::ALL.len() {
            cycle.advance();
        }

        assert_eq!(cycle, ThemeCycle::new());
    }

    #[test]
    fn each_click_applies_exactly_one_theme() {
        let mut sink = RecordingSink::default();
        let mut cycle = ThemeCycle::new();

        cycle.apply(&mut sink);
        for _ in 0..4 {
            cycle.advance_and_apply(&mut sink);
        }

        assert_eq!(
            sink.applied,
            [
                ThemeName::Light,
                ThemeName::Dark,
                ThemeName::Sepia,
                ThemeName::Light,
                ThemeName::Dark,
            ]
        );
    }
}
