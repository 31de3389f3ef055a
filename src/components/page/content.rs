use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div,
};
use smallvec::SmallVec;

/// Vertical stack of the sessions that make up a page body.
#[derive(IntoElement, Default)]
pub struct PageContent {
    children: SmallVec<[AnyElement; 4]>,
}

impl PageContent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParentElement for PageContent {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for PageContent {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div().flex().flex_col().w_full().children(self.children)
    }
}
