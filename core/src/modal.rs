//! Add/Edit food modals.
//!
//! A modal is a form of four inputs plus a visibility flag owned by the
//! caller. The modal keeps a copy of that flag for rendering, but submit
//! asks the caller, so a modal closed after it was built cannot submit.
//! Submitting hands the current field values to the caller's handler and
//! then closes the modal through the caller's callback. The close happens
//! whether or not the handler's write succeeded.

use crate::form::{Form, FormData, Input};
use crate::types::{Food, FoodPatch};

/// Field names and placeholders, in display order.
const FOOD_FIELDS: [(&str, &str); 4] = [
    ("image", "Paste the image link here"),
    ("name", "Ex: Italian Style"),
    ("price", "Ex: 19.90"),
    ("description", "Description"),
];

/// Caller side of `ModalAddFood`.
pub trait AddFoodTarget {
    fn is_add_modal_open(&self) -> bool;
    fn handle_add_food(&mut self, food: FoodPatch);
    fn close_add_modal(&mut self);
}

/// Caller side of `ModalEditFood`.
pub trait UpdateFoodTarget {
    fn is_edit_modal_open(&self) -> bool;
    fn handle_update_food(&mut self, food: FoodPatch);
    fn close_edit_modal(&mut self);
}

/// Inputs mounted into a fresh form.
#[derive(Debug)]
struct FoodForm {
    form: Form,
    inputs: Vec<Input>,
}

impl FoodForm {
    fn new(initial_data: FormData) -> Self {
        let mut form = Form::with_initial_data(initial_data);
        let inputs = FOOD_FIELDS
            .iter()
            .map(|(name, placeholder)| {
                let mut input = Input::new(*name).with_placeholder(*placeholder);
                input.mount(&mut form);
                input
            })
            .collect();
        Self { form, inputs }
    }

    fn input_mut(&mut self, name: &str) -> Option<&mut Input> {
        self.inputs.iter_mut().find(|input| input.name() == name)
    }

    fn fill(&mut self, name: &str, value: &str) -> bool {
        match self.input_mut(name) {
            Some(input) => {
                input.set_value(value);
                true
            }
            None => false,
        }
    }

    fn payload(&self) -> FoodPatch {
        FoodPatch::from(&self.form.data())
    }
}

#[derive(Debug)]
pub struct ModalAddFood {
    is_open: bool,
    form: FoodForm,
}

impl ModalAddFood {
    pub const TITLE: &'static str = "New Dish";

    pub fn new(is_open: bool) -> Self {
        Self {
            is_open,
            form: FoodForm::new(FormData::new()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn inputs(&self) -> &[Input] {
        &self.form.inputs
    }

    pub fn input_mut(&mut self, name: &str) -> Option<&mut Input> {
        self.form.input_mut(name)
    }

    pub fn form(&self) -> &Form {
        &self.form.form
    }

    /// Types `value` into the field called `name`. False if no such field.
    pub fn fill(&mut self, name: &str, value: &str) -> bool {
        self.form.fill(name, value)
    }

    /// Forwards the field values to `target` and closes. Returns false,
    /// doing nothing, when `target` reports the modal closed.
    pub fn submit<T: AddFoodTarget + ?Sized>(&self, target: &mut T) -> bool {
        if !target.is_add_modal_open() {
            return false;
        }
        target.handle_add_food(self.form.payload());
        target.close_add_modal();
        true
    }
}

#[derive(Debug)]
pub struct ModalEditFood {
    is_open: bool,
    editing_food: Food,
    form: FoodForm,
}

impl ModalEditFood {
    pub const TITLE: &'static str = "Edit Dish";

    /// Builds the modal with every field defaulting to `editing_food`'s value.
    pub fn new(is_open: bool, editing_food: Food) -> Self {
        let initial_data = FormData::from([
            ("name".to_string(), editing_food.name.clone()),
            ("image".to_string(), editing_food.image.clone()),
            ("price".to_string(), editing_food.price.clone()),
            ("description".to_string(), editing_food.description.clone()),
        ]);
        Self {
            is_open,
            editing_food,
            form: FoodForm::new(initial_data),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn editing_food(&self) -> &Food {
        &self.editing_food
    }

    pub fn inputs(&self) -> &[Input] {
        &self.form.inputs
    }

    pub fn input_mut(&mut self, name: &str) -> Option<&mut Input> {
        self.form.input_mut(name)
    }

    pub fn form(&self) -> &Form {
        &self.form.form
    }

    pub fn fill(&mut self, name: &str, value: &str) -> bool {
        self.form.fill(name, value)
    }

    pub fn submit<T: UpdateFoodTarget + ?Sized>(&self, target: &mut T) -> bool {
        if !target.is_edit_modal_open() {
            return false;
        }
        target.handle_update_food(self.form.payload());
        target.close_edit_modal();
        true
    }
}
