use std::time::Duration;

use gpui::{
    CornersRefinement, ElementId, FocusHandle, IntoElement, Pixels, RenderOnce, Rgba,
    ease_out_quint, prelude::*, px,
};
use gpui_squircle::{SquircleStyleRefinement, SquircleStyled, squircle};
use gpui_transitions::{Transition, TransitionExt};

use crate::utils::RgbaExt;

const GROW_DISTANCE: f32 = 6.;

/// Outline drawn around a focused control, growing in as focus arrives.
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    color: Rgba,
    style: SquircleStyleRefinement,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle, color: Rgba) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            color,
            style: SquircleStyleRefinement::default(),
        }
    }
}

impl SquircleStyled for FocusRing {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style.inner
    }

    fn outer_style(&mut self) -> &mut SquircleStyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let color = self.color;
        let is_focused = self.focus_handle.is_focused(window) as u8 as f32;

        let progress = Transition::new(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(250),
            |_window, _cx| is_focused,
        )
        .with_easing(ease_out_quint());

        if progress.set(cx, is_focused) {
            cx.notify(progress.entity_id());
        }

        squircle()
            .absolute()
            .top_0()
            .bottom_0()
            .left_0()
            .right_0()
            .border(px(2.))
            .border_outside()
            .with_transitions(progress, move |_cx, this, delta| {
                let distance = (1. - delta) * GROW_DISTANCE;

                this.inset(px(-distance))
                    .border_color(color.fade(delta * 0.5))
                    .map(|mut this| {
                        this.outer_style().corner_radii =
                            grow_corner_radii(&self.style.corner_radii, px(distance + 1.));
                        this
                    })
            })
    }
}

fn grow_corner_radii(
    corner_radii: &CornersRefinement<Pixels>,
    by: Pixels,
) -> CornersRefinement<Pixels> {
    let grow = |radius: Option<Pixels>| Some(radius.unwrap_or(px(4.)) + by);

    CornersRefinement {
        top_left: grow(corner_radii.top_left),
        top_right: grow(corner_radii.top_right),
        bottom_right: grow(corner_radii.bottom_right),
        bottom_left: grow(corner_radii.bottom_left),
    }
}
