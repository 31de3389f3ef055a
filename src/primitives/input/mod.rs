use std::rc::Rc;

use gpui::{
    App, Bounds, CursorStyle, DispatchPhase, Element, ElementId, ElementInputHandler, Entity,
    GlobalElementId, Hsla, InspectorElementId, InteractiveElement, IntoElement, KeyBinding,
    LayoutId, MouseButton, MouseMoveEvent, PaintQuad, ParentElement, Pixels, Refineable,
    RenderOnce, ShapedLine, SharedString, Style, StyleRefinement, Styled, TextRun,
    UnderlineStyle, Window, div, fill, hsla, point, prelude::FluentBuilder, px, relative, size,
};

mod cursor_blink;
mod state;

pub use cursor_blink::CursorBlink;
pub use state::*;

/// Key context that scopes the editing bindings to focused fields.
pub const KEY_CONTEXT: &str = "SearchInput";

/// Receives the field's text when [`Submit`] is dispatched.
pub type SubmitHandler = Rc<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>;

/// Unstyled single line text field backed by an [`InputState`] entity.
#[derive(IntoElement)]
pub struct Input {
    id: ElementId,
    state: Entity<InputState>,
    placeholder: SharedString,
    placeholder_text_color: Option<Hsla>,
    selection_color: Option<Hsla>,
    on_submit: Option<SubmitHandler>,
    style: StyleRefinement,
}

impl Styled for Input {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl Input {
    pub fn new(id: impl Into<ElementId>, state: Entity<InputState>) -> Self {
        Self {
            id: id.into(),
            state,
            placeholder: SharedString::default(),
            placeholder_text_color: None,
            selection_color: None,
            on_submit: None,
            style: StyleRefinement::default(),
        }
    }

    pub fn placeholder(mut self, text: impl Into<SharedString>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn placeholder_text_color(mut self, color: impl Into<Hsla>) -> Self {
        self.placeholder_text_color = Some(color.into());
        self
    }

    pub fn selection_color(mut self, color: impl Into<Hsla>) -> Self {
        self.selection_color = Some(color.into());
        self
    }

    /// Called with the unmodified text on every [`Submit`]. The text is
    /// left in place.
    pub fn on_submit(mut self, on_submit: Option<SubmitHandler>) -> Self {
        self.on_submit = on_submit;
        self
    }
}

struct TextElement {
    input: Entity<InputState>,
    placeholder: SharedString,
    text_color: Hsla,
    placeholder_text_color: Hsla,
    highlight_text_color: Hsla,
    line_height: Pixels,
    cursor_visible: bool,
}

struct PrepaintState {
    line: Option<ShapedLine>,
    cursor: Option<PaintQuad>,
    selection: Option<PaintQuad>,
}

impl IntoElement for TextElement {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for TextElement {
    type RequestLayoutState = ();
    type PrepaintState = PrepaintState;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static core::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = relative(1.).into();
        style.size.height = self.line_height.into();

        (window.request_layout(style, [], cx), ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        let input = self.input.read(cx);
        let content = input.value();
        let selected_range = input.selected_range.clone();
        let cursor = input.cursor_offset();
        let style = window.text_style();

        let (display_text, text_color) = if content.is_empty() {
            (self.placeholder.clone(), self.placeholder_text_color)
        } else {
            (content, self.text_color)
        };

        let run = TextRun {
            len: display_text.len(),
            font: style.font(),
            color: text_color,
            background_color: None,
            underline: None,
            strikethrough: None,
        };

        // Composition text from an input method is underlined.
        let runs = match input.marked_range.as_ref() {
            Some(marked_range) => [
                TextRun {
                    len: marked_range.start,
                    ..run.clone()
                },
                TextRun {
                    len: marked_range.end - marked_range.start,
                    underline: Some(UnderlineStyle {
                        color: Some(run.color),
                        thickness: px(1.0),
                        wavy: false,
                    }),
                    ..run.clone()
                },
                TextRun {
                    len: display_text.len() - marked_range.end,
                    ..run
                },
            ]
            .into_iter()
            .filter(|run| run.len > 0)
            .collect(),
            None => vec![run],
        };

        let font_size = style.font_size.to_pixels(window.rem_size());
        let line = window
            .text_system()
            .shape_line(display_text, font_size, &runs, None);

        let (selection, cursor) = if selected_range.is_empty() {
            let height = bounds.bottom() - bounds.top();
            let caret_height = height * 0.8;
            let inset = (height - caret_height) / 2.;

            (
                None,
                Some(fill(
                    Bounds::new(
                        point(bounds.left() + line.x_for_index(cursor), bounds.top() + inset),
                        size(px(1.), caret_height),
                    ),
                    self.text_color,
                )),
            )
        } else {
            (
                Some(fill(
                    Bounds::from_corners(
                        point(
                            bounds.left() + line.x_for_index(selected_range.start),
                            bounds.top(),
                        ),
                        point(
                            bounds.left() + line.x_for_index(selected_range.end),
                            bounds.bottom(),
                        ),
                    ),
                    self.highlight_text_color,
                )),
                None,
            )
        };

        PrepaintState {
            line: Some(line),
            cursor,
            selection,
        }
    }

    fn paint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let focus_handle = self.input.read(cx).focus_handle.clone();

        // Keeps extending a drag selection after the pointer leaves the field.
        let input = self.input.clone();
        window.on_mouse_event(move |event: &MouseMoveEvent, phase, _window, cx| {
            if phase == DispatchPhase::Capture {
                return;
            }

            input.update(cx, |input, cx| {
                if input.is_selecting {
                    input.select_to(input.index_for_mouse_position(event.position), cx);
                }
            });
        });

        window.handle_input(
            &focus_handle,
            ElementInputHandler::new(bounds, self.input.clone()),
            cx,
        );

        if let Some(selection) = prepaint.selection.take() {
            window.paint_quad(selection)
        }

        let Some(line) = prepaint.line.take() else {
            return;
        };

        if let Err(error) = line.paint(
            bounds.origin,
            self.line_height,
            gpui::TextAlign::Left,
            None,
            window,
            cx,
        ) {
            tracing::warn!(%error, "failed to paint input text");
        }

        if focus_handle.is_focused(window)
            && self.cursor_visible
            && let Some(cursor) = prepaint.cursor.take()
        {
            window.paint_quad(cursor);
        }

        self.input.update(cx, |input, _cx| {
            input.last_layout = Some(line);
            input.last_bounds = Some(bounds);
        });
    }
}

impl RenderOnce for Input {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let text_style = &self.style.text;
        let line_height = text_style
            .line_height
            .map(|this| {
                this.to_pixels(
                    text_style
                        .font_size
                        .unwrap_or_else(|| window.text_style().font_size),
                    window.rem_size(),
                )
            })
            .unwrap_or_else(|| window.line_height());

        self.state
            .update(cx, |state, cx| state.update_focus_state(window, cx));

        let state = self.state.read(cx);
        let focus_handle = state.focus_handle.clone();
        let cursor_visible = state.cursor_visible(cx);

        let text_color = self
            .style
            .text
            .color
            .unwrap_or_else(|| window.text_style().color);
        let placeholder_text_color = self
            .placeholder_text_color
            .unwrap_or_else(|| text_color.opacity(0.5));
        let highlight_text_color = self
            .selection_color
            .unwrap_or_else(|| hsla(0.6, 1., 0.64, 0.3));

        let on_submit = self.on_submit;
        let submit_state = self.state.clone();

        div()
            .id(self.id.clone())
            .map(|mut this| {
                this.style().refine(&self.style);
                this
            })
            .tab_index(0)
            .key_context(KEY_CONTEXT)
            .track_focus(&focus_handle)
            .cursor(CursorStyle::IBeam)
            .on_action(window.listener_for(&self.state, InputState::backspace))
            .on_action(window.listener_for(&self.state, InputState::delete))
            .on_action(window.listener_for(&self.state, InputState::left))
            .on_action(window.listener_for(&self.state, InputState::right))
            .on_action(window.listener_for(&self.state, InputState::select_left))
            .on_action(window.listener_for(&self.state, InputState::select_right))
            .on_action(window.listener_for(&self.state, InputState::select_all))
            .on_action(window.listener_for(&self.state, InputState::home))
            .on_action(window.listener_for(&self.state, InputState::end))
            .on_action(window.listener_for(&self.state, InputState::show_character_palette))
            .on_action(window.listener_for(&self.state, InputState::paste))
            .on_action(window.listener_for(&self.state, InputState::cut))
            .on_action(window.listener_for(&self.state, InputState::copy))
            .on_action(move |_: &Submit, window, cx| {
                let value = submit_state.read(cx).value();
                if let Some(on_submit) = on_submit.as_ref() {
                    (on_submit)(&value, window, cx);
                }
            })
            .on_mouse_down(
                MouseButton::Left,
                window.listener_for(&self.state, InputState::on_mouse_down),
            )
            .on_mouse_up(
                MouseButton::Left,
                window.listener_for(&self.state, InputState::on_mouse_up),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                window.listener_for(&self.state, InputState::on_mouse_up),
            )
            .on_mouse_move(window.listener_for(&self.state, InputState::on_mouse_move))
            .child(TextElement {
                input: self.state.clone(),
                placeholder: self.placeholder,
                text_color,
                placeholder_text_color,
                highlight_text_color,
                line_height,
                cursor_visible,
            })
    }
}

/// Binds the editing keys inside [`KEY_CONTEXT`]. Call once per app.
pub fn init(cx: &mut App) {
    let context = Some(KEY_CONTEXT);

    cx.bind_keys([
        KeyBinding::new("backspace", Backspace, context),
        KeyBinding::new("delete", Delete, context),
        KeyBinding::new("left", Left, context),
        KeyBinding::new("right", Right, context),
        KeyBinding::new("shift-left", SelectLeft, context),
        KeyBinding::new("shift-right", SelectRight, context),
        KeyBinding::new("home", Home, context),
        KeyBinding::new("end", End, context),
        KeyBinding::new("enter", Submit, context),
        KeyBinding::new("ctrl-cmd-space", ShowCharacterPalette, context),
    ]);

    #[cfg(target_os = "macos")]
    cx.bind_keys([
        KeyBinding::new("cmd-a", SelectAll, context),
        KeyBinding::new("cmd-v", Paste, context),
        KeyBinding::new("cmd-c", Copy, context),
        KeyBinding::new("cmd-x", Cut, context),
    ]);

    #[cfg(not(target_os = "macos"))]
    cx.bind_keys([
        KeyBinding::new("ctrl-a", SelectAll, context),
        KeyBinding::new("ctrl-v", Paste, context),
        KeyBinding::new("ctrl-c", Copy, context),
        KeyBinding::new("ctrl-x", Cut, context),
    ]);
}
