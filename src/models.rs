//! Records displayed by the cocktail components.

use gpui::SharedString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: SharedString,
    pub name: SharedString,
    pub amount: SharedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<SharedString>,
}

impl Ingredient {
    pub fn new(
        id: impl Into<SharedString>,
        name: impl Into<SharedString>,
        amount: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount: amount.into(),
            image_url: None,
        }
    }

    pub fn image_url(mut self, image_url: impl Into<SharedString>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    pub name: SharedString,
    pub description: SharedString,
    pub image_url: SharedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<SharedString>>,
}

/// A cocktail together with what goes into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub cocktail: Cocktail,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
