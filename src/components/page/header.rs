use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use mixologist_theme::{ThemeExt, ThemeTextSizeKind};
use smallvec::SmallVec;

/// Page title area.
#[derive(IntoElement, Default)]
pub struct PageHeader {
    title: Option<SharedString>,
    children: SmallVec<[AnyElement; 2]>,
}

impl PageHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl ParentElement for PageHeader {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for PageHeader {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let title_size = ThemeTextSizeKind::Xl.resolve(cx);
        let max_width = cx.get_theme().layout.max_content_width;

        div()
            .mx_auto()
            .w_full()
            .max_w(max_width)
            .pl(px(48.))
            .pr(px(48.))
            .pt(px(32.))
            .pb(px(16.))
            .when_some(self.title, |this, title| {
                this.child(div().text_size(title_size).child(title))
            })
            .children(self.children)
    }
}
