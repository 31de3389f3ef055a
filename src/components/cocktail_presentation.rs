use gpui::{
    App, ElementId, IntoElement, ObjectFit, ParentElement, RenderOnce, SharedString, Styled,
    StyledImage, Window, div, img, prelude::FluentBuilder, px, relative,
};
use mixologist_theme::{ColorRole, ThemeCornerRadiiKind, ThemeExt, ThemeTextSizeKind};

use crate::{
    components::Bubble,
    context::{ModeContext, ModeScoped},
    models::Cocktail,
    utils::ElementIdExt,
};

/// Hero block for one cocktail: image, name, tags and description.
#[derive(IntoElement)]
pub struct CocktailPresentation {
    id: ElementId,
    cocktail: Cocktail,
    scope: ModeContext,
}

impl CocktailPresentation {
    pub fn new(id: impl Into<ElementId>, cocktail: Cocktail) -> Self {
        Self {
            id: id.into(),
            cocktail,
            scope: ModeContext::root(),
        }
    }

    pub fn scope(mut self, scope: &ModeContext) -> Self {
        self.scope = scope.clone();
        self
    }

    /// Labels of the tag bubbles, or `None` when the row is left out.
    ///
    /// An empty tag list is treated like a missing one. Laying out an empty
    /// row for `[]` would only add its gap below the name, so the row is
    /// dropped instead.
    pub fn tag_labels(&self) -> Option<&[SharedString]> {
        self.cocktail
            .tags
            .as_deref()
            .filter(|tags| !tags.is_empty())
    }

    fn tag_bubbles(&self) -> Option<Vec<Bubble>> {
        let labels = self.tag_labels()?;

        Some(
            labels
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    Bubble::new(self.id.with_suffix(format!("tag:{index}")), label.clone())
                        .scope(&self.scope)
                })
                .collect(),
        )
    }
}

impl ModeScoped for CocktailPresentation {
    fn with_scope(self, scope: &ModeContext) -> Self {
        self.scope(scope)
    }
}

impl RenderOnce for CocktailPresentation {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let bubbles = self.tag_bubbles();
        let palette = self.scope.palette();
        let colors = &cx.get_theme().colors;

        let divider_color = palette.color(ColorRole::ContrastMuted, colors);
        let description_color = palette.color(ColorRole::ContrastMuted, colors);

        let heading_size = ThemeTextSizeKind::Lg.resolve(cx);
        let corner_radius = ThemeCornerRadiiKind::Lg.resolve(cx);

        let Cocktail {
            name,
            description,
            image_url,
            ..
        } = self.cocktail;

        div()
            .flex()
            .flex_row()
            .w_full()
            .child(
                div().flex_none().child(
                    img(image_url)
                        .size(px(256.))
                        .rounded(corner_radius)
                        .object_fit(ObjectFit::Cover),
                ),
            )
            .child(
                div()
                    .ml(px(40.))
                    .flex()
                    .flex_1()
                    .flex_col()
                    .justify_start()
                    .child(div().text_size(heading_size).child(name))
                    .when_some(bubbles, |this, bubbles| {
                        this.child(div().mb(px(8.)).flex().flex_wrap().children(bubbles))
                    })
                    .child(
                        div()
                            .mt(px(8.))
                            .mb(px(16.))
                            .w(relative(1. / 3.))
                            .h(px(1.))
                            .bg(divider_color),
                    )
                    .child(div().text_color(description_color).child(description)),
            )
    }
}
