//! Local mirror of the remote `/foods` collection.
//!
//! Every mutation here is applied only after the server has acknowledged
//! the corresponding write, and takes the server's record verbatim. The
//! collection never reorders: creates append, updates replace in place.
//! When several requests are in flight, applying responses in arrival order
//! gives last-response-wins semantics.

use crate::types::Food;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodCollection {
    foods: Vec<Food>,
}

impl FoodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Food> {
        self.foods.iter()
    }

    /// Replaces the whole collection with a fresh server listing.
    pub fn replace_all(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    /// Appends a record the server just created.
    pub fn apply_created(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// Replaces every entry sharing the updated record's id. Returns how
    /// many entries were replaced; an unknown id changes nothing.
    pub fn apply_updated(&mut self, food: &Food) -> usize {
        let mut replaced = 0;
        for slot in self.foods.iter_mut().filter(|f| f.id == food.id) {
            *slot = food.clone();
            replaced += 1;
        }
        replaced
    }

    /// Drops every entry with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: u64) -> usize {
        let before = self.foods.len();
        self.foods.retain(|food| food.id != id);
        before - self.foods.len()
    }
}

impl<'a> IntoIterator for &'a FoodCollection {
    type Item = &'a Food;
    type IntoIter = std::slice::Iter<'a, Food>;

    fn into_iter(self) -> Self::IntoIter {
        self.foods.iter()
    }
}

impl From<Vec<Food>> for FoodCollection {
    fn from(foods: Vec<Food>) -> Self {
        Self { foods }
    }
}
