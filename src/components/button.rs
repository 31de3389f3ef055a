use gpui::{
    App, ClickEvent, CursorStyle, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;
use mixologist_theme::{
    ColorRole, PaletteResolution, ThemeCornerRadiiKind, ThemeExt, ThemeTextSizeKind, VisualMode,
};

use crate::{
    components::style::{Interaction, InteractionStyle, RoleStyle, RoleSurface},
    conditional_transition,
    context::{ModeContext, ModeScoped},
    primitives::FocusRing,
    utils::{ElementIdExt, TRANSITION_DURATION, disabled_transition},
};

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    scope: ModeContext,
    on_hover: Option<Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: SharedString::from("Button"),
            variant: ButtonVariant::default(),
            disabled: false,
            scope: ModeContext::root(),
            on_hover: None,
            on_click: None,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = text.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn scope(mut self, scope: &ModeContext) -> Self {
        self.scope = scope.clone();
        self
    }

    pub fn on_hover(mut self, on_hover: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn resolved_style(&self) -> InteractionStyle {
        self.variant.style(self.scope.palette())
    }
}

impl ModeScoped for Button {
    fn with_scope(self, scope: &ModeContext) -> Self {
        self.scope(scope)
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = self.resolved_style();

        let colors = cx.get_theme().colors.clone();
        let text_size = ThemeTextSizeKind::Body.resolve(cx);
        let corner_radius = ThemeCornerRadiiKind::Sm.resolve(cx);
        let ring_color = self
            .scope
            .palette()
            .color(ColorRole::Contrast, &colors);

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let is_click_down_state = window.use_keyed_state(
            self.id.with_suffix("state:click_down"),
            cx,
            |_window, _cx| false,
        );
        let is_click_down = *is_click_down_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();

        let is_disabled = self.disabled;
        if is_disabled && focus_handle.is_focused(window) {
            window.blur();
        }

        let disabled_state = disabled_transition(self.id.clone(), window, cx, is_disabled);

        let surface = *style.surface(Interaction::from_flags(is_hover, is_click_down));

        let bg_color_state = conditional_transition!(
            self.id.with_suffix("state:transition:bg_color"),
            window,
            cx,
            TRANSITION_DURATION,
            surface.background_color(&colors)
        );

        let border_color_state = conditional_transition!(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            TRANSITION_DURATION,
            surface.border_color(&colors)
        );

        let text_color_state = conditional_transition!(
            self.id.with_suffix("state:transition:text_color"),
            window,
            cx,
            TRANSITION_DURATION,
            surface.text_color(&colors)
        );

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .flex_none()
            .pl(px(16.))
            .pr(px(16.))
            .pt(px(8.))
            .pb(px(8.))
            .with_transitions(disabled_state, |_cx, this, opacity| this.opacity(opacity))
            .child(
                FocusRing::new(
                    self.id.with_suffix("focus_ring"),
                    focus_handle.clone(),
                    ring_color,
                )
                .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .border(px(1.))
                    .border_inside()
                    .with_transitions(
                        (bg_color_state, border_color_state),
                        move |_cx, this, (bg_color, border_color)| {
                            this.bg(bg_color).border_color(border_color)
                        },
                    ),
            )
            .child(
                div()
                    .flex()
                    .justify_center()
                    .items_center()
                    .text_size(text_size)
                    .font_weight(FontWeight::MEDIUM)
                    .child(self.text)
                    .with_transitions(text_color_state, |_cx, this, text_color| {
                        this.text_color(text_color)
                    }),
            )
            .when(!is_disabled, |this| {
                let on_hover = self.on_hover;

                this.on_hover(move |hover, window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state.entity_id());

                    if let Some(on_hover) = on_hover.as_ref() {
                        (on_hover)(hover, window, cx);
                    }
                })
                .map(|this| {
                    let is_click_down_state = is_click_down_state.clone();

                    this.on_mouse_down(gpui::MouseButton::Left, move |_, window, cx| {
                        // Keeps the focus ring hidden for pointer presses.
                        window.prevent_default();

                        is_click_down_state.update(cx, |this, _cx| *this = true);
                        cx.notify(is_click_down_state.entity_id());
                    })
                })
                .on_click({
                    let on_click = self.on_click;

                    move |event, window, cx| {
                        window.prevent_default();

                        is_click_down_state.update(cx, |this, _cx| *this = false);
                        cx.notify(is_click_down_state.entity_id());

                        if let Some(on_click) = on_click.as_ref() {
                            (on_click)(event, window, cx);
                        }
                    }
                })
                .track_focus(&focus_handle)
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Secondary,
}

impl ButtonVariant {
    const DEFAULT: RoleStyle = RoleStyle {
        rest: RoleSurface::new(ColorRole::Main, ColorRole::Contrast, ColorRole::Contrast),
        hover: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast),
        active: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast)
            .background_alpha(0.7),
    };

    const PRIMARY: RoleStyle = RoleStyle {
        rest: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast),
        hover: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast)
            .background_alpha(0.85),
        active: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::Contrast)
            .background_alpha(0.7),
    };

    const SECONDARY: RoleStyle = RoleStyle {
        rest: RoleSurface::new(ColorRole::MainMuted, ColorRole::Contrast, ColorRole::MainMuted),
        hover: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::MainMuted),
        active: RoleSurface::new(ColorRole::Contrast, ColorRole::Main, ColorRole::MainMuted)
            .background_alpha(0.8),
    };

    pub fn roles(&self) -> &'static RoleStyle {
        match self {
            ButtonVariant::Default => &Self::DEFAULT,
            ButtonVariant::Primary => &Self::PRIMARY,
            ButtonVariant::Secondary => &Self::SECONDARY,
        }
    }

    pub fn style(&self, palette: &PaletteResolution) -> InteractionStyle {
        self.roles().resolve(palette)
    }

    pub fn style_for(&self, mode: VisualMode) -> InteractionStyle {
        self.style(&PaletteResolution::for_mode(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixologist_theme::ColorToken;

    #[test]
    fn default_button_under_each_mode() {
        for (mode, rest_bg, rest_text) in [
            (VisualMode::Default, ColorToken::Main, ColorToken::Contrast),
            (VisualMode::Inverted, ColorToken::Contrast, ColorToken::Main),
        ] {
            let scope = ModeContext::root().provide(mode);
            let style = Button::new("button").scope(&scope).resolved_style();

            assert_eq!(style.rest.background, rest_bg);
            assert_eq!(style.rest.text, rest_text);
            assert_eq!(style.hover.background, rest_text);
            assert_eq!(style.active.background, rest_text);
            assert_eq!(style.active.background_alpha, 0.7);
        }
    }

    #[test]
    fn primary_dims_on_hover_and_press() {
        let style = ButtonVariant::Primary.style_for(VisualMode::Default);

        assert_eq!(style.rest.background_alpha, 1.);
        assert_eq!(style.hover.background_alpha, 0.85);
        assert_eq!(style.active.background_alpha, 0.7);
        assert_eq!(style.surface(Interaction::Hover).background, ColorToken::Contrast);
    }

    #[test]
    fn secondary_border_follows_muted_main() {
        for mode in VisualMode::ALL {
            let palette = PaletteResolution::for_mode(mode);
            let style = ButtonVariant::Secondary.style(&palette);

            assert_eq!(style.rest.border, palette.main_muted);
            assert_eq!(style.hover.border, palette.main_muted);
        }
    }

    #[test]
    fn builder_defaults() {
        let button = Button::new("button");

        assert_eq!(button.text, SharedString::from("Button"));
        assert_eq!(button.variant, ButtonVariant::Default);
        assert!(!button.disabled);
        assert!(button.on_click.is_none());
    }
}
