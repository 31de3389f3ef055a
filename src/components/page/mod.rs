mod content;
pub use content::*;

mod footer;
pub use footer::*;

mod header;
pub use header::*;

mod session;
pub use session::*;

use std::rc::Rc;

use gpui::{
    AnyElement, App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::FluentBuilder,
};
use smallvec::SmallVec;

use crate::{
    components::{GlobalNav, SearchHandler},
    utils::ElementIdExt,
};

/// A whole screen: optional global nav, header, body and footer.
#[derive(IntoElement)]
pub struct Page {
    id: ElementId,
    title: Option<SharedString>,
    with_nav: bool,
    header: Option<AnyElement>,
    footer: Option<AnyElement>,
    on_search: Option<SearchHandler>,
    children: SmallVec<[AnyElement; 2]>,
}

impl Page {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            with_nav: false,
            header: None,
            footer: None,
            on_search: None,
            children: SmallVec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_nav(mut self, with_nav: bool) -> Self {
        self.with_nav = with_nav;
        self
    }

    /// Replaces the title header.
    pub fn header(mut self, header: impl IntoElement) -> Self {
        self.header = Some(header.into_any_element());
        self
    }

    /// Replaces the default, empty footer.
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    /// Receives queries from the nav's search field.
    pub fn on_search(mut self, on_search: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_search = Some(Rc::new(on_search));
        self
    }

    fn resolved_header(&mut self) -> Option<AnyElement> {
        self.header.take().or_else(|| {
            self.title
                .take()
                .map(|title| PageHeader::new().title(title).into_any_element())
        })
    }
}

impl ParentElement for Page {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Page {
    fn render(mut self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let nav = self.with_nav.then(|| {
            let nav = window.use_keyed_state(self.id.with_suffix("state:nav"), cx, GlobalNav::new);
            let on_search = self.on_search.take();
            nav.update(cx, |nav, _cx| nav.set_on_search(on_search));
            nav
        });

        let header = self.resolved_header();
        let footer = self
            .footer
            .take()
            .unwrap_or_else(|| PageFooter::new().into_any_element());

        div()
            .flex()
            .flex_col()
            .size_full()
            .when_some(nav, |this, nav| this.child(nav))
            .when_some(header, |this, header| this.child(header))
            .children(self.children)
            .child(footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_title_no_header() {
        let mut page = Page::new("page");

        assert!(page.resolved_header().is_none());
    }

    #[test]
    fn nav_is_opt_in() {
        assert!(!Page::new("page").with_nav);
        assert!(Page::new("page").with_nav(true).with_nav);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_title_becomes_the_header(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let mut page = Page::new("page").title("Welcome to Mixologist");

            assert!(page.resolved_header().is_some());
            assert!(page.title.is_none());
        });
    }

    #[gpui::test]
    fn test_custom_header_wins_over_title(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let mut page = Page::new("page")
                .title("Welcome")
                .header(PageHeader::new().title("Custom"));

            assert!(page.resolved_header().is_some());
            assert!(page.title.is_some(), "title is unused when a header is set");
        });
    }
}
