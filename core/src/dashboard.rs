//! The food list controller.
//!
//! # Design
//! `Dashboard` owns the local `FoodCollection`, the two modal visibility
//! flags and the record currently being edited. It receives the API client
//! and the transport as explicit dependencies. Each operation runs one
//! request-response exchange to completion and then applies the server's
//! answer to the collection:
//!
//! - load replaces the collection and returns failures to the host;
//! - add appends the created record, logging and swallowing failures;
//! - update merges the edited snapshot with the form input, replaces the
//!   acknowledged record in place, logging and swallowing failures;
//! - delete removes the record locally whatever the server answered.
//!
//! Nothing is retried or rolled back.

use crate::client::FoodClient;
use crate::collection::FoodCollection;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::modal::{AddFoodTarget, ModalAddFood, ModalEditFood, UpdateFoodTarget};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Food, FoodPatch};

/// One rendered line of the food list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodRow {
    pub food: Food,
}

impl FoodRow {
    pub fn id(&self) -> u64 {
        self.food.id
    }

    pub fn availability_label(&self) -> &'static str {
        if self.food.available {
            "Available"
        } else {
            "Unavailable"
        }
    }
}

pub struct Dashboard<T> {
    client: FoodClient,
    transport: T,
    foods: FoodCollection,
    mounted: bool,
    modal_open: bool,
    edit_modal_open: bool,
    editing_food: Option<Food>,
}

impl Dashboard<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Dashboard::new(FoodClient::new(&config.base_url), UreqTransport::new(config))
    }
}

impl<T: Transport> Dashboard<T> {
    pub fn new(client: FoodClient, transport: T) -> Self {
        Self {
            client,
            transport,
            foods: FoodCollection::new(),
            mounted: false,
            modal_open: false,
            edit_modal_open: false,
            editing_food: None,
        }
    }

    pub fn foods(&self) -> &[Food] {
        self.foods.as_slice()
    }

    pub fn editing_food(&self) -> Option<&Food> {
        self.editing_food.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }

    /// Loads the initial listing. Runs at most once per dashboard: a failed
    /// load leaves the collection empty and is not retried by later calls.
    pub fn mount(&mut self) -> Result<(), ApiError> {
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;

        let response = self.transport.execute(self.client.build_list_foods())?;
        let foods = self.client.parse_list_foods(response)?;
        tracing::debug!(count = foods.len(), "loaded foods");
        self.foods.replace_all(foods);
        Ok(())
    }

    /// Creates a food with `available: true` and appends the server's record.
    pub fn add_food(&mut self, food: FoodPatch) {
        if let Err(err) = self.try_add_food(&food) {
            tracing::error!(error = %err, "failed to add food");
        }
    }

    fn try_add_food(&mut self, food: &FoodPatch) -> Result<(), ApiError> {
        let request = self.client.build_create_food(food)?;
        let response = self.transport.execute(request)?;
        let created = self.client.parse_create_food(response)?;
        tracing::debug!(id = created.id, "food created");
        self.foods.apply_created(created);
        Ok(())
    }

    /// Sends the edited record merged with `food` and applies the server's
    /// answer. Does nothing when no record is being edited.
    pub fn update_food(&mut self, food: FoodPatch) {
        let Some(editing) = &self.editing_food else {
            return;
        };
        let id = editing.id;
        let merged = editing.merged(&food);
        if let Err(err) = self.try_update_food(id, &merged) {
            tracing::error!(id, error = %err, "failed to update food");
        }
    }

    fn try_update_food(&mut self, id: u64, merged: &Food) -> Result<(), ApiError> {
        let request = self.client.build_update_food(id, merged)?;
        let response = self.transport.execute(request)?;
        let updated = self.client.parse_update_food(response)?;
        let replaced = self.foods.apply_updated(&updated);
        tracing::debug!(id = updated.id, replaced, "food updated");
        Ok(())
    }

    /// Selects `food` for editing and opens the edit modal.
    pub fn edit_food(&mut self, food: &Food) {
        self.editing_food = Some(food.clone());
        self.edit_modal_open = true;
    }

    /// Deletes remotely, then removes locally without looking at the
    /// response. A transport failure is returned after the local removal.
    pub fn delete_food(&mut self, id: u64) -> Result<(), ApiError> {
        let outcome = self.transport.execute(self.client.build_delete_food(id));
        let removed = self.foods.remove(id);
        tracing::debug!(id, removed, "food removed locally");
        outcome.map(|_| ())
    }

    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    pub fn modal_add_food(&self) -> ModalAddFood {
        ModalAddFood::new(self.modal_open)
    }

    /// The edit modal exists only once a record has been selected.
    pub fn modal_edit_food(&self) -> Option<ModalEditFood> {
        self.editing_food
            .as_ref()
            .map(|food| ModalEditFood::new(self.edit_modal_open, food.clone()))
    }

    pub fn rows(&self) -> Vec<FoodRow> {
        self.foods
            .iter()
            .map(|food| FoodRow { food: food.clone() })
            .collect()
    }
}

impl<T: Transport> AddFoodTarget for Dashboard<T> {
    fn is_add_modal_open(&self) -> bool {
        self.modal_open
    }

    fn handle_add_food(&mut self, food: FoodPatch) {
        self.add_food(food);
    }

    fn close_add_modal(&mut self) {
        self.toggle_modal();
    }
}

impl<T: Transport> UpdateFoodTarget for Dashboard<T> {
    fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }

    fn handle_update_food(&mut self, food: FoodPatch) {
        self.update_food(food);
    }

    fn close_edit_modal(&mut self) {
        self.toggle_edit_modal();
    }
}
