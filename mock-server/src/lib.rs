use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// Body accepted by create and update. Missing fields default the way a
/// schemaless JSON store would leave them: empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FoodBody {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl FoodBody {
    fn into_food(self, id: u64) -> Food {
        Food {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: self.available,
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    foods: BTreeMap<u64, Food>,
    next_id: u64,
}

impl Store {
    pub fn with_foods(foods: Vec<Food>) -> Self {
        let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0);
        Self {
            foods: foods.into_iter().map(|f| (f.id, f)).collect(),
            next_id,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-seeded with `foods`. New ids continue after the largest one.
pub fn app_with(foods: Vec<Food>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::with_foods(foods)));
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/{id}", get(get_food).put(update_food).delete(delete_food))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, foods: Vec<Food>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(foods)).await
}

async fn list_foods(State(db): State<Db>) -> Json<Vec<Food>> {
    let store = db.read().await;
    Json(store.foods.values().cloned().collect())
}

async fn create_food(
    State(db): State<Db>,
    Json(input): Json<FoodBody>,
) -> (StatusCode, Json<Food>) {
    let mut store = db.write().await;
    let id = store.allocate_id();
    let food = input.into_food(id);
    store.foods.insert(id, food.clone());
    tracing::info!(id, name = %food.name, "food created");
    (StatusCode::CREATED, Json(food))
}

async fn get_food(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Food>, StatusCode> {
    let store = db.read().await;
    store.foods.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Replaces the stored record. The path id wins over any id in the body.
async fn update_food(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<FoodBody>,
) -> Result<Json<Food>, StatusCode> {
    let mut store = db.write().await;
    let slot = store.foods.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *slot = input.into_food(id);
    tracing::info!(id, "food updated");
    Ok(Json(slot.clone()))
}

async fn delete_food(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .foods
        .remove(&id)
        .map(|_| {
            tracing::info!(id, "food deleted");
            StatusCode::NO_CONTENT
        })
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_serializes_with_expected_keys() {
        let food = Food {
            id: 1,
            name: "A".to_string(),
            image: "http://img/a.png".to_string(),
            price: "10.00".to_string(),
            description: "First".to_string(),
            available: true,
        };
        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], "10.00");
        assert_eq!(json["available"], true);
    }

    #[test]
    fn body_fields_default_when_missing() {
        let body: FoodBody = serde_json::from_str(r#"{"name":"B","available":true}"#).unwrap();
        assert_eq!(body.name, "B");
        assert!(body.price.is_empty());
        assert!(body.available);
    }

    #[test]
    fn body_ignores_id() {
        let body: FoodBody = serde_json::from_str(r#"{"id":99,"name":"B"}"#).unwrap();
        assert_eq!(body.into_food(3).id, 3);
    }

    #[test]
    fn body_rejects_wrong_types() {
        let result: Result<FoodBody, _> = serde_json::from_str(r#"{"name":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn seeded_store_continues_ids() {
        let mut store = Store::with_foods(vec![Food {
            id: 5,
            name: "E".to_string(),
            image: String::new(),
            price: "1".to_string(),
            description: String::new(),
            available: true,
        }]);
        assert_eq!(store.allocate_id(), 6);
        assert_eq!(Store::default().allocate_id(), 1);
    }
}
