use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::Transition;

use crate::ElementIdExt;

pub(crate) const TRANSITION_DURATION: Duration = Duration::from_millis(150);

/// Keyed transition whose goal is picked from a list of `condition => value`
/// branches ending in `_ => value`, or from a single expression.
#[macro_export]
macro_rules! conditional_transition {
    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, $($rest:tt)+
    ) => {{
        use gpui_transitions::WindowUseTransition;

        let goal = $crate::transition_goal!(@condition [ $($rest)+ ]);

        let transition = $window
            .use_keyed_transition($id, $cx, $duration, |_window, _cx| goal)
            .with_easing(gpui::ease_out_quint());

        if transition.read_goal($cx) != &goal {
            transition.update($cx, |this, _cx| *this = goal);
            $cx.notify(transition.entity_id());
        }

        transition
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! transition_goal {
    (@branches [ _ => $value:expr, $($rest:tt)+ ]) => {{
        compile_error!("`_ => value` must be the last branch.");
    }};

    (@condition [ { $cond:expr => $value:expr, $($rest:tt)+ } ]) => {{
        if $cond { $value } else { $crate::transition_goal!(@branches [ $($rest)+ ]) }
    }};

    (@branches [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {{
        if $cond { $value } else { $crate::transition_goal!(@branches [ $($rest)+ ]) }
    }};

    (@branches [ _ => $value:expr ]) => {{
        $value
    }};

    (@branches [ $cond:expr => $value:expr ]) => {{
        compile_error!("The last branch must be `_ => value`");
    }};

    (@condition [ $($rest:tt)+ ]) => {{
        $($rest)+
    }};
}

/// Opacity transition shared by every control that can be disabled.
pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    conditional_transition!(
        base_id.into().with_suffix("state:transition:disabled"),
        window,
        cx,
        TRANSITION_DURATION,
        {
            is_disabled => 0.45_f32,
            _ => 1.
        }
    )
    .with_easing(ease_out_quint())
}
