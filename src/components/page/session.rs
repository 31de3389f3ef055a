use gpui::{
    AnyElement, App, IntoElement, ParentElement, Pixels, RenderOnce, Rgba, Styled, Window, div,
    px,
};
use mixologist_theme::{
    ColorRole, ColorToken, PaletteResolution, ThemeColors, ThemeExt, ThemeLayoutPaddingKind,
    ThemeSpacing, VisualMode,
};
use smallvec::SmallVec;

use crate::context::{ModeContext, ModeScoped};

/// Inner padding of a session: a step of the theme scale or a literal
/// pixel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPadding {
    Scale(ThemeLayoutPaddingKind),
    Pixels(Pixels),
}

impl Default for SessionPadding {
    fn default() -> Self {
        SessionPadding::Scale(ThemeLayoutPaddingKind::default())
    }
}

impl SessionPadding {
    /// Parses a scale key. Unknown keys fall back to the default step.
    pub fn from_key(key: &str) -> SessionPadding {
        match ThemeLayoutPaddingKind::from_key(key) {
            Some(kind) => SessionPadding::Scale(kind),
            None => {
                tracing::debug!(key, "unknown session padding, using the default step");
                SessionPadding::default()
            }
        }
    }

    pub fn pick(&self, scale: &ThemeSpacing) -> Pixels {
        match self {
            SessionPadding::Scale(kind) => kind.pick(scale),
            SessionPadding::Pixels(pixels) => *pixels,
        }
    }

    pub fn resolve(&self, cx: &App) -> Pixels {
        self.pick(&cx.get_theme().layout.spacing)
    }
}

impl From<ThemeLayoutPaddingKind> for SessionPadding {
    fn from(kind: ThemeLayoutPaddingKind) -> Self {
        SessionPadding::Scale(kind)
    }
}

impl From<Pixels> for SessionPadding {
    fn from(pixels: Pixels) -> Self {
        SessionPadding::Pixels(pixels)
    }
}

impl From<f32> for SessionPadding {
    fn from(pixels: f32) -> Self {
        SessionPadding::Pixels(px(pixels))
    }
}

impl From<&str> for SessionPadding {
    fn from(key: &str) -> Self {
        SessionPadding::from_key(key)
    }
}

type SessionChild = Box<dyn FnOnce(&ModeContext) -> AnyElement + 'static>;

/// Colour tokens a session paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStyle {
    pub background: ColorToken,
    pub text: ColorToken,
}

impl SessionStyle {
    pub fn for_palette(palette: &PaletteResolution) -> SessionStyle {
        SessionStyle {
            background: palette.get(ColorRole::Main),
            text: palette.get(ColorRole::Contrast),
        }
    }

    pub fn colors(&self, colors: &ThemeColors) -> (Rgba, Rgba) {
        (self.background.resolve(colors), self.text.resolve(colors))
    }
}

/// A full width band that declares a visual mode for everything built
/// inside it.
///
/// Every child receives the session's [`ModeContext`]. Components go in
/// through [`PageSession::child`]; anything else is built from the context
/// with [`PageSession::child_with`]. A session added as a child of another
/// inherits its mode unless it declares one.
#[derive(IntoElement, Default)]
pub struct PageSession {
    parent: ModeContext,
    mode: Option<VisualMode>,
    padding: SessionPadding,
    children: SmallVec<[SessionChild; 2]>,
}

impl PageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The context this session is nested in.
    pub fn parent(mut self, parent: &ModeContext) -> Self {
        self.parent = parent.clone();
        self
    }

    pub fn mode(mut self, mode: VisualMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn inverted(self, inverted: bool) -> Self {
        self.mode(if inverted {
            VisualMode::Inverted
        } else {
            VisualMode::Default
        })
    }

    pub fn inner_padding(mut self, padding: impl Into<SessionPadding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Adds a component that reads the session's mode.
    pub fn child(mut self, child: impl ModeScoped) -> Self {
        self.children.push(Box::new(move |scope| {
            child.with_scope(scope).into_any_element()
        }));
        self
    }

    pub fn children<C: ModeScoped>(mut self, children: impl IntoIterator<Item = C>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Adds a child built from the session's context.
    pub fn child_with<E: IntoElement>(
        mut self,
        build: impl FnOnce(&ModeContext) -> E + 'static,
    ) -> Self {
        self.children.push(Box::new(move |scope| {
            build(scope).into_any_element()
        }));
        self
    }

    /// The mode this session declares, inheriting the parent's when none
    /// was set.
    pub fn declared_mode(&self) -> VisualMode {
        self.mode.unwrap_or_else(|| self.parent.mode())
    }

    /// Publishes the session's declaration. Each call creates a new scope.
    pub fn scope(&self) -> ModeContext {
        self.parent.provide(self.declared_mode())
    }

    pub fn padding(&self) -> SessionPadding {
        self.padding
    }

    pub fn resolved_style(&self) -> SessionStyle {
        SessionStyle::for_palette(&PaletteResolution::for_mode(self.declared_mode()))
    }

    fn build_children(self) -> (ModeContext, SessionPadding, Vec<AnyElement>) {
        let scope = self.scope();
        let children = self
            .children
            .into_iter()
            .map(|build| build(&scope))
            .collect();

        (scope, self.padding, children)
    }
}

impl ModeScoped for PageSession {
    fn with_scope(self, scope: &ModeContext) -> Self {
        self.parent(scope)
    }
}

impl RenderOnce for PageSession {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = self.resolved_style();
        let (_scope, padding, children) = self.build_children();

        let theme = cx.get_theme();
        let (background, text_color) = style.colors(&theme.colors);
        let max_width = theme.layout.max_content_width;
        let padding = padding.pick(&theme.layout.spacing);

        div()
            .w_full()
            .bg(background)
            .text_color(text_color)
            .child(
                div()
                    .mx_auto()
                    .w_full()
                    .max_w(max_width)
                    .p(padding)
                    .children(children),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixologist_theme::{Theme, ThemeName};

    fn spacing() -> &'static ThemeSpacing {
        &Theme::builtin(ThemeName::Light).layout.spacing
    }

    #[test]
    fn xl_key_picks_xl_step() {
        let padding = SessionPadding::from_key("xl");

        assert_eq!(padding, SessionPadding::Scale(ThemeLayoutPaddingKind::Xl));
        assert_eq!(padding.pick(spacing()), spacing().xl);
    }

    #[test]
    fn unknown_key_matches_md() {
        let huge = SessionPadding::from_key("huge");

        assert_eq!(huge, SessionPadding::from_key("md"));
        assert_eq!(huge.pick(spacing()), spacing().md);
        assert_eq!(PageSession::new().padding(), huge);
    }

    #[test]
    fn short_aliases_resolve() {
        assert_eq!(
            SessionPadding::from("s").pick(spacing()),
            SessionPadding::from("sm").pick(spacing())
        );
        assert_eq!(
            SessionPadding::from("l").pick(spacing()),
            spacing().lg
        );
    }

    #[test]
    fn literal_number_is_pixels() {
        let session = PageSession::new().inner_padding(24.);

        assert_eq!(session.padding().pick(spacing()), px(24.));
    }

    #[test]
    fn session_without_mode_inherits_parent() {
        let outer = ModeContext::root().provide(VisualMode::Inverted);
        let session = PageSession::new().parent(&outer);

        assert_eq!(session.declared_mode(), VisualMode::Inverted);
        assert_eq!(session.scope().depth(), 2);
        assert_eq!(PageSession::new().declared_mode(), VisualMode::Default);
    }

    #[test]
    fn style_is_main_on_contrast_for_the_declared_mode() {
        for mode in VisualMode::ALL {
            let palette = PaletteResolution::for_mode(mode);
            let style = PageSession::new().mode(mode).resolved_style();

            assert_eq!(style.background, palette.main);
            assert_eq!(style.text, palette.contrast);
        }

        let inverted = PageSession::new().inverted(true).resolved_style();
        assert_eq!(inverted.background, ColorToken::Contrast);
        assert_eq!(inverted.text, ColorToken::Main);
    }

    #[test]
    fn nested_session_takes_the_outer_scope_as_parent() {
        let outer = ModeContext::root().provide(VisualMode::Inverted);
        let nested = PageSession::new().with_scope(&outer);

        assert_eq!(nested.declared_mode(), VisualMode::Inverted);
        assert_eq!(
            nested.mode(VisualMode::Default).with_scope(&outer).declared_mode(),
            VisualMode::Default
        );
    }

    #[test]
    fn leaves_adopt_the_scope_they_are_given() {
        use crate::components::{Bubble, Button, Searchbar};

        let inverted = ModeContext::root().provide(VisualMode::Inverted);

        assert_ne!(
            Bubble::new("tag", "lime").with_scope(&inverted).resolved_style(),
            Bubble::new("tag", "lime").resolved_style()
        );
        assert_ne!(
            Button::new("button").with_scope(&inverted).resolved_style(),
            Button::new("button").resolved_style()
        );
        assert_ne!(
            Searchbar::new("search").with_scope(&inverted).resolved_style(),
            Searchbar::new("search").resolved_style()
        );
    }

    #[test]
    fn nested_session_overrides_only_its_subtree() {
        let outer = PageSession::new().inverted(true);
        let outer_scope = outer.scope();

        let inner = PageSession::new().parent(&outer_scope).mode(VisualMode::Default);
        let sibling = PageSession::new().parent(&outer_scope);

        assert_eq!(inner.scope().mode(), VisualMode::Default);
        assert_eq!(sibling.scope().mode(), VisualMode::Inverted);
        assert_eq!(outer_scope.mode(), VisualMode::Inverted);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use gpui::{AppContext, Context, Render, TestAppContext, VisualTestContext};
    use mixologist_theme::{Theme, ThemeName};

    type Seen = Rc<Cell<Option<VisualMode>>>;

    /// Records the mode it was rendered under.
    #[derive(IntoElement)]
    struct ModeRecorder {
        scope: ModeContext,
        seen: Seen,
    }

    impl ModeRecorder {
        fn new(seen: &Seen) -> Self {
            Self {
                scope: ModeContext::root(),
                seen: seen.clone(),
            }
        }
    }

    impl ModeScoped for ModeRecorder {
        fn with_scope(mut self, scope: &ModeContext) -> Self {
            self.scope = scope.clone();
            self
        }
    }

    impl RenderOnce for ModeRecorder {
        fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
            self.seen.set(Some(self.scope.mode()));
            div()
        }
    }

    struct SessionTestView {
        build: Box<dyn Fn() -> PageSession>,
    }

    impl Render for SessionTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().size_full().child((self.build)())
        }
    }

    fn render_session(cx: &mut TestAppContext, build: impl Fn() -> PageSession + 'static) {
        cx.update(|cx| cx.set_theme(Theme::builtin(ThemeName::Light)));

        let window = cx
            .update(|cx| {
                cx.open_window(Default::default(), |_window, cx| {
                    cx.new(|_cx| SessionTestView {
                        build: Box::new(build),
                    })
                })
            })
            .unwrap();

        VisualTestContext::from_window(window.into(), cx).run_until_parked();
    }

    #[gpui::test]
    fn test_unmoded_nested_session_inherits_inverted(cx: &mut TestAppContext) {
        let seen: Seen = Rc::default();

        render_session(cx, {
            let seen = seen.clone();
            move || {
                PageSession::new()
                    .inverted(true)
                    .child(PageSession::new().child(ModeRecorder::new(&seen)))
            }
        });

        assert_eq!(seen.get(), Some(VisualMode::Inverted));
    }

    #[gpui::test]
    fn test_nested_session_override_stays_inside(cx: &mut TestAppContext) {
        let inner: Seen = Rc::default();
        let sibling: Seen = Rc::default();

        render_session(cx, {
            let inner = inner.clone();
            let sibling = sibling.clone();
            move || {
                PageSession::new()
                    .inverted(true)
                    .child(
                        PageSession::new()
                            .mode(VisualMode::Default)
                            .child(ModeRecorder::new(&inner)),
                    )
                    .child(ModeRecorder::new(&sibling))
            }
        });

        assert_eq!(inner.get(), Some(VisualMode::Default));
        assert_eq!(sibling.get(), Some(VisualMode::Inverted));
    }

    #[gpui::test]
    fn test_children_all_read_the_session_mode(cx: &mut TestAppContext) {
        let seen: Vec<Seen> = (0..3).map(|_| Rc::default()).collect();

        render_session(cx, {
            let seen = seen.clone();
            move || {
                PageSession::new()
                    .inverted(true)
                    .children(seen.iter().map(ModeRecorder::new))
            }
        });

        assert!(seen.iter().all(|seen| seen.get() == Some(VisualMode::Inverted)));
    }

    #[gpui::test]
    fn test_session_paints_main_behind_contrast(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin(ThemeName::Light));
            let colors = &cx.get_theme().colors;

            let default = PageSession::new().resolved_style().colors(colors);
            assert_eq!(default, (colors.main, colors.contrast));

            let inverted = PageSession::new().inverted(true).resolved_style().colors(colors);
            assert_eq!(inverted, (colors.contrast, colors.main));

            let inherited = PageSession::new()
                .parent(&ModeContext::root().provide(VisualMode::Inverted))
                .resolved_style()
                .colors(colors);
            assert_eq!(inherited, inverted);
        });
    }

    #[gpui::test]
    fn test_scoped_children_read_the_session_mode(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let seen = Rc::new(Cell::new(None));

            let session = PageSession::new()
                .inverted(true)
                .child_with(|_scope| div())
                .child_with({
                    let seen = seen.clone();
                    move |scope| {
                        seen.set(Some(scope.mode()));
                        div()
                    }
                });

            let (scope, _padding, children) = session.build_children();

            assert_eq!(children.len(), 2);
            assert_eq!(scope.mode(), VisualMode::Inverted);
            assert_eq!(seen.get(), Some(VisualMode::Inverted));
        });
    }

    #[gpui::test]
    fn test_scoped_children_share_one_declaration(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let scopes = Rc::new(std::cell::RefCell::new(Vec::new()));

            let session = PageSession::new().mode(VisualMode::Default);
            let session = (0..2).fold(session, |session, _| {
                let scopes = scopes.clone();
                session.child_with(move |scope| {
                    scopes.borrow_mut().push(scope.clone());
                    div()
                })
            });

            let (scope, _padding, _children) = session.build_children();
            let scopes = scopes.borrow();

            assert!(scopes.iter().all(|seen| seen.same_scope(&scope)));
        });
    }
}
