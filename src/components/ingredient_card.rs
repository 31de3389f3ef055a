use gpui::{
    App, FontWeight, IntoElement, ObjectFit, ParentElement, RenderOnce, SharedString, Styled,
    StyledImage, Window, div, img, px,
};
use mixologist_theme::{
    ColorRole, ColorToken, ThemeCornerRadiiKind, ThemeExt, ThemeTextSizeKind, VisualMode,
};

use crate::{
    context::{ModeContext, ModeScoped},
    models::Ingredient,
};

/// Shown in place of a missing ingredient image.
pub const FALLBACK_GLYPH: &str = "🥃";

/// What fills the top of an ingredient card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Image(SharedString),
    Glyph(SharedString),
}

impl Thumbnail {
    pub fn for_ingredient(ingredient: &Ingredient) -> Self {
        match &ingredient.image_url {
            Some(url) if !url.is_empty() => Thumbnail::Image(url.clone()),
            _ => Thumbnail::Glyph(SharedString::new_static(FALLBACK_GLYPH)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientCardStyle {
    pub accent: ColorToken,
    pub thumbnail_background: ColorToken,
    pub amount: ColorToken,
}

impl IngredientCardStyle {
    pub fn for_scope(scope: &ModeContext) -> Self {
        let palette = scope.palette();
        let accent = match scope.mode() {
            VisualMode::Default => ColorRole::Highlight,
            VisualMode::Inverted => ColorRole::Details,
        };

        Self {
            accent: palette.get(accent),
            thumbnail_background: palette.get(ColorRole::MainMuted),
            amount: palette.get(ColorRole::ContrastMuted),
        }
    }
}

/// A single ingredient with its thumbnail, name and amount.
#[derive(IntoElement)]
pub struct IngredientCard {
    ingredient: Ingredient,
    scope: ModeContext,
}

impl IngredientCard {
    pub fn new(ingredient: Ingredient) -> Self {
        Self {
            ingredient,
            scope: ModeContext::root(),
        }
    }

    pub fn scope(mut self, scope: &ModeContext) -> Self {
        self.scope = scope.clone();
        self
    }

    pub fn thumbnail(&self) -> Thumbnail {
        Thumbnail::for_ingredient(&self.ingredient)
    }

    pub fn resolved_style(&self) -> IngredientCardStyle {
        IngredientCardStyle::for_scope(&self.scope)
    }
}

impl ModeScoped for IngredientCard {
    fn with_scope(self, scope: &ModeContext) -> Self {
        self.scope(scope)
    }
}

impl RenderOnce for IngredientCard {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = self.resolved_style();
        let thumbnail = self.thumbnail();
        let theme = cx.get_theme();
        let colors = &theme.colors;

        let accent = style.accent.resolve(colors);
        let thumbnail_background = style.thumbnail_background.resolve(colors);
        let amount_color = style.amount.resolve(colors);
        let name_weight = FontWeight(theme.layout.text.default_font.weights.label);

        let glyph_size = ThemeTextSizeKind::Xl.resolve(cx);
        let caption_size = ThemeTextSizeKind::Caption.resolve(cx);
        let corner_radius = ThemeCornerRadiiKind::Lg.resolve(cx);

        let Ingredient { name, amount, .. } = self.ingredient;

        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_start()
            .min_w(px(120.))
            .overflow_hidden()
            .rounded(corner_radius)
            .border_t_1()
            .border_color(accent)
            .shadow_md()
            .child(
                div()
                    .flex()
                    .h(px(112.))
                    .w_full()
                    .items_center()
                    .justify_center()
                    .overflow_hidden()
                    .bg(thumbnail_background)
                    .child(match thumbnail {
                        Thumbnail::Image(url) => img(url)
                            .size_full()
                            .object_fit(ObjectFit::Cover)
                            .into_any_element(),
                        Thumbnail::Glyph(glyph) => div()
                            .text_size(glyph_size)
                            .child(glyph)
                            .into_any_element(),
                    }),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .w_full()
                    .items_center()
                    .justify_center()
                    .p(px(12.))
                    .child(div().mb(px(4.)).font_weight(name_weight).child(name))
                    .child(
                        div()
                            .text_size(caption_size)
                            .text_color(amount_color)
                            .child(amount),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_falls_back_to_glyph() {
        let card = IngredientCard::new(Ingredient::new("1", "Cachaça", "50ml"));

        assert_eq!(card.thumbnail(), Thumbnail::Glyph("🥃".into()));
    }

    #[test]
    fn image_url_is_referenced() {
        let card = IngredientCard::new(Ingredient::new("3", "Lime", "1, juiced").image_url("x.png"));

        assert_eq!(card.thumbnail(), Thumbnail::Image("x.png".into()));
    }

    #[test]
    fn empty_image_url_counts_as_missing() {
        let ingredient = Ingredient::new("2", "Sugar", "2 tsp").image_url("");

        assert_eq!(
            Thumbnail::for_ingredient(&ingredient),
            Thumbnail::Glyph(FALLBACK_GLYPH.into())
        );
    }

    #[test]
    fn accent_follows_the_scope() {
        let default = ModeContext::root().provide(VisualMode::Default);
        let inverted = ModeContext::root().provide(VisualMode::Inverted);
        let ingredient = Ingredient::new("1", "Cachaça", "50ml");

        let default_style = IngredientCard::new(ingredient.clone())
            .scope(&default)
            .resolved_style();
        let inverted_style = IngredientCard::new(ingredient).scope(&inverted).resolved_style();

        assert_eq!(default_style.accent, ColorToken::Highlight);
        assert_eq!(default_style.thumbnail_background, ColorToken::MainMuted);
        assert_eq!(inverted_style.accent, ColorToken::Details);
        assert_eq!(inverted_style.thumbnail_background, ColorToken::ContrastMuted);
        assert_eq!(inverted_style.amount, ColorToken::MainMuted);
    }
}
