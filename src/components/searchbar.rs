use std::rc::Rc;

use gpui::{
    App, ElementId, Entity, InteractiveElement, IntoElement, MouseButton, ParentElement,
    RenderOnce, SharedString, Styled, Window, div, prelude::FluentBuilder, px, relative,
};
use mixologist_theme::{ColorRole, ColorToken, PaletteResolution, ThemeExt, ThemeTextSizeKind};

use crate::{
    components::style::{RoleSurface, Surface},
    context::{ModeContext, ModeScoped},
    primitives::input::{Input, InputState, SubmitHandler},
    utils::{ElementIdExt, RgbaExt},
};

/// Receives the unmodified input text once per Enter press.
pub type SearchHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// A single line search field that reports its text when Enter is pressed.
///
/// Editing, selection, clipboard and input method composition come from
/// [`Input`]. Enter is the only key that reaches the caller.
#[derive(IntoElement)]
pub struct Searchbar {
    id: ElementId,
    variant: SearchbarVariant,
    placeholder: SharedString,
    scope: ModeContext,
    state: Option<Entity<InputState>>,
    on_search: Option<SearchHandler>,
}

impl Searchbar {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            variant: SearchbarVariant::default(),
            placeholder: SharedString::from("Search..."),
            scope: ModeContext::root(),
            state: None,
            on_search: None,
        }
    }

    pub fn variant(mut self, variant: SearchbarVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn scope(mut self, scope: &ModeContext) -> Self {
        self.scope = scope.clone();
        self
    }

    /// Uses a caller owned text state instead of one keyed by the id.
    pub fn state(mut self, state: Entity<InputState>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn on_search(mut self, on_search: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_search = Some(Rc::new(on_search));
        self
    }

    pub(crate) fn on_search_handler(mut self, on_search: Option<SearchHandler>) -> Self {
        self.on_search = on_search;
        self
    }

    pub fn resolved_style(&self) -> SearchbarStyle {
        self.variant.style(self.scope.palette())
    }

    fn submit_handler(&self) -> Option<SubmitHandler> {
        let on_search = self.on_search.clone()?;

        Some(Rc::new(move |query: &SharedString, window: &mut Window, cx: &mut App| {
            tracing::debug!(query = %query, "search submitted");
            (on_search)(query, window, cx)
        }))
    }
}

impl ModeScoped for Searchbar {
    fn with_scope(self, scope: &ModeContext) -> Self {
        self.scope(scope)
    }
}

impl RenderOnce for Searchbar {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = self.resolved_style();
        let colors = &cx.get_theme().colors;

        let background = style.surface.background_color(colors);
        let text_color = style.surface.text_color(colors);
        let border_color = style.surface.border_color(colors);
        let ring_color = style.focus_ring.resolve(colors);
        let placeholder_color = style.placeholder.resolve(colors);

        let text_size = match self.variant {
            SearchbarVariant::Default => ThemeTextSizeKind::Body.resolve(cx),
            SearchbarVariant::Nav => ThemeTextSizeKind::Caption.resolve(cx),
        };

        let on_submit = self.submit_handler();
        let state = match self.state {
            Some(state) => state,
            None => window.use_keyed_state(self.id.with_suffix("state:input"), cx, |_window, cx| {
                InputState::new(cx)
            }),
        };

        let focus_handle = state.read(cx).focus_handle.clone();
        let is_focus = focus_handle.is_focused(window);

        div()
            .id(self.id.clone())
            .map(|this| match self.variant {
                SearchbarVariant::Default => this.w_full().max_w(px(448.)).pl(px(20.)).pr(px(20.)),
                SearchbarVariant::Nav => this.w(relative(0.5)).pl(px(16.)).pr(px(16.)),
            })
            .pt(px(8.))
            .pb(px(8.))
            .rounded_full()
            .text_size(text_size)
            .bg(background)
            .text_color(text_color)
            .when(style.bordered, |this| this.border_1().border_color(border_color))
            .when(is_focus, |this| this.border_1().border_color(ring_color))
            .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                focus_handle.focus(window, cx)
            })
            .child(
                Input::new(self.id.with_suffix("input"), state)
                    .w_full()
                    .text_color(text_color)
                    .placeholder(self.placeholder)
                    .placeholder_text_color(placeholder_color)
                    .selection_color(ring_color.fade(0.3))
                    .on_submit(on_submit),
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchbarVariant {
    #[default]
    Default,
    Nav,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchbarStyle {
    pub surface: Surface,
    pub bordered: bool,
    pub focus_ring: ColorToken,
    pub placeholder: ColorToken,
}

impl SearchbarVariant {
    const SURFACE: RoleSurface = RoleSurface::new(
        ColorRole::MainMuted,
        ColorRole::Contrast,
        ColorRole::ContrastMuted,
    );

    pub fn style(&self, palette: &PaletteResolution) -> SearchbarStyle {
        let (bordered, focus_ring) = match self {
            SearchbarVariant::Default => (true, ColorRole::Contrast),
            SearchbarVariant::Nav => (false, ColorRole::ContrastMuted),
        };

        SearchbarStyle {
            surface: Self::SURFACE.resolve(palette),
            bordered,
            focus_ring: palette.get(focus_ring),
            placeholder: palette.get(ColorRole::ContrastMuted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixologist_theme::VisualMode;

    #[test]
    fn colours_follow_the_scope() {
        for mode in VisualMode::ALL {
            let scope = ModeContext::root().provide(mode);
            let palette = PaletteResolution::for_mode(mode);
            let style = Searchbar::new("search").scope(&scope).resolved_style();

            assert_eq!(style.surface.background, palette.main_muted);
            assert_eq!(style.surface.text, palette.contrast);
            assert_eq!(style.focus_ring, palette.contrast);
        }
    }

    #[test]
    fn nav_variant_is_borderless_with_muted_ring() {
        let style = SearchbarVariant::Nav.style(&PaletteResolution::DEFAULT);

        assert!(!style.bordered);
        assert_eq!(style.focus_ring, ColorToken::ContrastMuted);
    }

    #[test]
    fn placeholder_defaults_to_search() {
        let searchbar = Searchbar::new("search");

        assert_eq!(searchbar.placeholder, SharedString::from("Search..."));
        assert!(searchbar.on_search.is_none());
        assert!(searchbar.submit_handler().is_none());
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use std::cell::RefCell;

    use super::*;
    use gpui::{AppContext, Context, Render, TestAppContext, VisualTestContext};
    use mixologist_theme::{Theme, ThemeName};

    use crate::primitives::input::Paste;

    struct SearchTestView {
        state: Entity<InputState>,
        queries: Rc<RefCell<Vec<String>>>,
    }

    impl Render for SearchTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let queries = self.queries.clone();

            div().size_full().child(
                Searchbar::new("search")
                    .state(self.state.clone())
                    .on_search(move |query, _window, _cx| {
                        queries.borrow_mut().push(query.to_owned())
                    }),
            )
        }
    }

    /// Opens a window holding one searchbar and focuses it.
    fn focused_searchbar(
        cx: &mut TestAppContext,
    ) -> (VisualTestContext, Entity<InputState>, Rc<RefCell<Vec<String>>>) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin(ThemeName::Light));
            crate::init(cx);
        });

        let state = cx.update(|cx| cx.new(|cx| InputState::new(cx)));
        let queries = Rc::new(RefCell::new(Vec::new()));

        let window = cx
            .update(|cx| {
                let state = state.clone();
                let queries = queries.clone();
                cx.open_window(Default::default(), |_window, cx| {
                    cx.new(|_cx| SearchTestView { state, queries })
                })
            })
            .unwrap();

        let mut vcx = VisualTestContext::from_window(window.into(), cx);
        let focus_handle = state.read_with(&vcx, |state, _| state.focus_handle.clone());
        vcx.update(|window, cx| focus_handle.focus(window, cx));
        vcx.run_until_parked();

        (vcx, state, queries)
    }

    #[gpui::test]
    fn test_typing_mojito_then_enter_searches_once(cx: &mut TestAppContext) {
        let (mut vcx, state, queries) = focused_searchbar(cx);

        vcx.simulate_keystrokes("m o j i t o enter");

        assert_eq!(*queries.borrow(), vec!["mojito".to_owned()]);
        state.read_with(&vcx, |state, _| {
            assert_eq!(state.value(), SharedString::from("mojito"), "text is kept");
        });
    }

    #[gpui::test]
    fn test_typing_without_enter_does_not_search(cx: &mut TestAppContext) {
        let (mut vcx, state, queries) = focused_searchbar(cx);

        vcx.simulate_keystrokes("g i n backspace");

        assert!(queries.borrow().is_empty());
        state.read_with(&vcx, |state, _| {
            assert_eq!(state.value(), SharedString::from("gi"));
        });
    }

    #[gpui::test]
    fn test_enter_on_empty_field_searches_empty_text(cx: &mut TestAppContext) {
        let (mut vcx, _state, queries) = focused_searchbar(cx);

        vcx.simulate_keystrokes("enter");

        assert_eq!(*queries.borrow(), vec![String::new()]);
    }

    #[gpui::test]
    fn test_each_enter_is_one_search(cx: &mut TestAppContext) {
        let (mut vcx, _state, queries) = focused_searchbar(cx);

        vcx.simulate_keystrokes("enter x enter");

        assert_eq!(*queries.borrow(), vec![String::new(), "x".to_owned()]);
    }

    #[gpui::test]
    fn test_pasted_text_is_searched(cx: &mut TestAppContext) {
        let (mut vcx, _state, queries) = focused_searchbar(cx);

        vcx.update(|window, cx| {
            cx.write_to_clipboard(gpui::ClipboardItem::new_string("white rum".to_owned()));
            window.dispatch_action(Box::new(Paste), cx);
        });
        vcx.simulate_keystrokes("enter");

        assert_eq!(*queries.borrow(), vec!["white rum".to_owned()]);
    }
}
