use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px,
};
use indexmap::IndexMap;
use mixologist_theme::ThemeTextSizeKind;

use crate::{
    components::IngredientCard,
    context::{ModeContext, ModeScoped},
    models::Ingredient,
};

pub const INGREDIENTS_HEADING: &str = "Ingredients";

/// A headed, wrapping grid of ingredient cards keyed by ingredient id.
#[derive(IntoElement)]
pub struct IngredientList {
    ingredients: IndexMap<SharedString, Ingredient>,
    scope: ModeContext,
}

impl IngredientList {
    pub fn new(ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        let mut by_id = IndexMap::new();

        for ingredient in ingredients {
            if let Some(previous) = by_id.insert(ingredient.id.clone(), ingredient) {
                tracing::warn!(
                    id = %previous.id,
                    name = %previous.name,
                    "duplicate ingredient id, keeping the later record"
                );
            }
        }

        Self {
            ingredients: by_id,
            scope: ModeContext::root(),
        }
    }

    pub fn scope(mut self, scope: &ModeContext) -> Self {
        self.scope = scope.clone();
        self
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl ModeScoped for IngredientList {
    fn with_scope(self, scope: &ModeContext) -> Self {
        self.scope(scope)
    }
}

impl RenderOnce for IngredientList {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let heading_size = ThemeTextSizeKind::Lg.resolve(cx);
        let scope = self.scope;

        div()
            .flex()
            .flex_col()
            .w_full()
            .items_center()
            .child(
                div()
                    .mb(px(16.))
                    .text_size(heading_size)
                    .child(INGREDIENTS_HEADING),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .w_full()
                    .items_center()
                    .justify_center()
                    .gap(px(40.))
                    .children(
                        self.ingredients
                            .into_values()
                            .map(|ingredient| IngredientCard::new(ingredient).scope(&scope)),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caipirinha() -> Vec<Ingredient> {
        vec![
            Ingredient::new("1", "Cachaça", "50ml"),
            Ingredient::new("2", "Sugar", "2 tsp"),
            Ingredient::new("3", "Lime", "1, juiced"),
        ]
    }

    #[test]
    fn keeps_input_order() {
        let list = IngredientList::new(caipirinha());
        let names: Vec<_> = list.ingredients().map(|i| i.name.as_ref()).collect();

        assert_eq!(names, ["Cachaça", "Sugar", "Lime"]);
    }

    #[test]
    fn repeated_id_replaces_in_place() {
        let mut ingredients = caipirinha();
        ingredients.push(Ingredient::new("1", "Cachaça Prata", "60ml"));

        let list = IngredientList::new(ingredients);
        let names: Vec<_> = list.ingredients().map(|i| i.name.as_ref()).collect();

        assert_eq!(list.len(), 3);
        assert_eq!(names, ["Cachaça Prata", "Sugar", "Lime"]);
    }

    #[test]
    fn empty_list_has_no_cards() {
        let list = IngredientList::new(Vec::new());

        assert!(list.is_empty());
    }
}
