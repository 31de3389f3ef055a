use gpui::{
    ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, div, prelude::FluentBuilder, px,
};
use mixologist_theme::{ColorRole, PaletteResolution, ThemeExt, ThemeTextSizeKind, VisualMode};

use crate::{
    components::style::{InteractionStyle, RoleStyle, RoleSurface},
    context::{ModeContext, ModeScoped},
};

/// A rounded tag label.
#[derive(IntoElement)]
pub struct Bubble {
    id: ElementId,
    label: SharedString,
    variant: BubbleVariant,
    with_border: bool,
    scope: ModeContext,
}

impl Bubble {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: BubbleVariant::default(),
            with_border: true,
            scope: ModeContext::root(),
        }
    }

    pub fn variant(mut self, variant: BubbleVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_border(mut self, with_border: bool) -> Self {
        self.with_border = with_border;
        self
    }

    pub fn scope(mut self, scope: &ModeContext) -> Self {
        self.scope = scope.clone();
        self
    }

    pub fn resolved_style(&self) -> InteractionStyle {
        self.variant.style(self.scope.palette())
    }
}

impl ModeScoped for Bubble {
    fn with_scope(self, scope: &ModeContext) -> Self {
        self.scope(scope)
    }
}

impl RenderOnce for Bubble {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let style = self.resolved_style();
        let colors = &cx.get_theme().colors;
        let (rest, hover, active) = (style.rest, style.hover, style.active);

        let rest_bg = rest.background_color(colors);
        let rest_text = rest.text_color(colors);
        let border = rest.border_color(colors);
        let (hover_bg, hover_text) = (hover.background_color(colors), hover.text_color(colors));
        let (active_bg, active_text) = (active.background_color(colors), active.text_color(colors));

        let text_size = ThemeTextSizeKind::Caption.resolve(cx);
        let font_weight = FontWeight(cx.get_theme().layout.text.default_font.weights.label);

        div()
            .id(self.id)
            .flex_none()
            .mr(px(8.))
            .pl(px(12.))
            .pr(px(12.))
            .pt(px(4.))
            .pb(px(6.))
            .rounded_full()
            .shadow_md()
            .cursor_default()
            .text_size(text_size)
            .font_weight(font_weight)
            .bg(rest_bg)
            .text_color(rest_text)
            .when(self.with_border, |this| this.border_1().border_color(border))
            .hover(move |style| style.bg(hover_bg).text_color(hover_text))
            .active(move |style| style.bg(active_bg).text_color(active_text))
            .child(self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BubbleVariant {
    #[default]
    Default,
    Muted,
    Highlight,
}

impl BubbleVariant {
    const DEFAULT: RoleStyle = RoleStyle {
        rest: RoleSurface::new(ColorRole::MainMuted, ColorRole::Contrast, ColorRole::Contrast),
        hover: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast),
        active: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast),
    };

    const MUTED: RoleStyle = RoleStyle {
        rest: RoleSurface::new(
            ColorRole::MainMuted,
            ColorRole::ContrastMuted,
            ColorRole::ContrastMuted,
        ),
        hover: RoleSurface::new(
            ColorRole::ContrastMuted,
            ColorRole::Main,
            ColorRole::ContrastMuted,
        ),
        active: RoleSurface::new(
            ColorRole::ContrastMuted,
            ColorRole::Main,
            ColorRole::ContrastMuted,
        ),
    };

    const HIGHLIGHT: RoleStyle = RoleStyle {
        rest: RoleSurface::new(ColorRole::Details, ColorRole::Contrast, ColorRole::Contrast),
        hover: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast),
        active: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast),
    };

    pub fn roles(&self) -> &'static RoleStyle {
        match self {
            BubbleVariant::Default => &Self::DEFAULT,
            BubbleVariant::Muted => &Self::MUTED,
            BubbleVariant::Highlight => &Self::HIGHLIGHT,
        }
    }

    pub fn style(&self, palette: &PaletteResolution) -> InteractionStyle {
        self.roles().resolve(palette)
    }

    pub fn style_for(&self, mode: VisualMode) -> InteractionStyle {
        self.style(&PaletteResolution::for_mode(mode))
    }
}
