//! Domain DTOs for the food API.
//!
//! # Design
//! These mirror the mock-server schema but are defined independently so the
//! core never depends on Axum. The integration tests catch schema drift.

use serde::{Deserialize, Serialize};

use crate::form::FormData;

/// A single food record as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl Food {
    /// Copy of `self` with every field present in `patch` overriding the
    /// existing value. `id` and `available` are never touched.
    pub fn merged(&self, patch: &FoodPatch) -> Food {
        let mut food = self.clone();
        if let Some(name) = &patch.name {
            food.name = name.clone();
        }
        if let Some(image) = &patch.image {
            food.image = image.clone();
        }
        if let Some(price) = &patch.price {
            food.price = price.clone();
        }
        if let Some(description) = &patch.description {
            food.description = description.clone();
        }
        food
    }
}

/// Field values collected from a food form. Only fields the form carries
/// are present; absent fields are left out of the JSON entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&FormData> for FoodPatch {
    fn from(data: &FormData) -> Self {
        Self {
            name: data.get("name").cloned(),
            image: data.get("image").cloned(),
            price: data.get("price").cloned(),
            description: data.get("description").cloned(),
        }
    }
}

/// Request payload for creating a food: the form payload plus the
/// availability flag, which new records always start with set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateFood {
    #[serde(flatten)]
    pub fields: FoodPatch,
    pub available: bool,
}

impl From<FoodPatch> for CreateFood {
    fn from(fields: FoodPatch) -> Self {
        Self {
            fields,
            available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> Food {
        Food {
            id: 1,
            name: "Pizza".to_string(),
            image: "http://img/pizza.png".to_string(),
            price: "10.00".to_string(),
            description: "Cheese".to_string(),
            available: false,
        }
    }

    #[test]
    fn merged_overrides_only_present_fields() {
        let patch = FoodPatch {
            price: Some("12.00".to_string()),
            ..FoodPatch::default()
        };
        let merged = pizza().merged(&patch);
        assert_eq!(merged.price, "12.00");
        assert_eq!(merged.name, "Pizza");
        assert_eq!(merged.id, 1);
        assert!(!merged.available);
    }

    #[test]
    fn merged_accepts_empty_strings() {
        let patch = FoodPatch {
            description: Some(String::new()),
            ..FoodPatch::default()
        };
        assert_eq!(pizza().merged(&patch).description, "");
    }

    #[test]
    fn patch_skips_absent_fields() {
        let patch = FoodPatch {
            name: Some("B".to_string()),
            ..FoodPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "B" }));
    }

    #[test]
    fn create_food_flattens_fields_and_sets_available() {
        let create = CreateFood::from(FoodPatch {
            name: Some("B".to_string()),
            price: Some("5.00".to_string()),
            ..FoodPatch::default()
        });
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "B", "price": "5.00", "available": true })
        );
    }

    #[test]
    fn patch_from_form_data_ignores_unknown_fields() {
        let mut data = FormData::new();
        data.insert("name".to_string(), "Soup".to_string());
        data.insert("colour".to_string(), "red".to_string());
        let patch = FoodPatch::from(&data);
        assert_eq!(patch.name.as_deref(), Some("Soup"));
        assert!(patch.price.is_none());
    }

    #[test]
    fn food_rejects_missing_id() {
        let result: Result<Food, _> = serde_json::from_str(
            r#"{"name":"A","image":"","price":"1","description":"","available":true}"#,
        );
        assert!(result.is_err());
    }
}
