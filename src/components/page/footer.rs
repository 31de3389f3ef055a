use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px,
};
use mixologist_theme::{ThemeExt, ThemeTextSizeKind};
use smallvec::SmallVec;

#[derive(IntoElement, Default)]
pub struct PageFooter {
    children: SmallVec<[AnyElement; 2]>,
}

impl PageFooter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParentElement for PageFooter {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for PageFooter {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let text_size = ThemeTextSizeKind::Caption.resolve(cx);
        let max_width = cx.get_theme().layout.max_content_width;

        div().w_full().child(
            div()
                .mx_auto()
                .flex()
                .w_full()
                .max_w(max_width)
                .items_center()
                .justify_center()
                .pl(px(48.))
                .pr(px(48.))
                .pt(px(32.))
                .pb(px(16.))
                .text_size(text_size)
                .children(self.children),
        )
    }
}
