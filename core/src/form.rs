//! Form field registry and the labeled text input bound into it.
//!
//! # Design
//! A form does not own its controls. Each `Input` creates its control when
//! mounted and registers an accessor for it with the enclosing form; the
//! form reads values back through those accessors on submit. Controls are
//! `Rc<RefCell<_>>` handles: the UI model is single-threaded.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Field name to current value, as collected on submit.
pub type FormData = BTreeMap<String, String>;

/// Shared handle to a mounted text control's value.
#[derive(Debug, Clone, Default)]
pub struct InputRef(Rc<RefCell<String>>);

impl InputRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(value.into())))
    }

    pub fn value(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = value.into();
    }

    /// True when both handles point at the same control.
    pub fn same_control(&self, other: &InputRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Capability a form offers to the fields rendered inside it.
pub trait FieldRegistry {
    /// Binds `name` to `input`, replacing any previous binding of `name`.
    fn register_field(&mut self, name: &str, input: InputRef);

    /// Current value of the control registered under `name`.
    fn read(&self, name: &str) -> Option<String>;

    /// Value a newly mounted field should start with.
    fn default_value(&self, name: &str) -> Option<String>;
}

/// In-memory field registry with optional initial data.
#[derive(Debug, Default)]
pub struct Form {
    fields: BTreeMap<String, InputRef>,
    initial_data: FormData,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_data(initial_data: FormData) -> Self {
        Self {
            fields: BTreeMap::new(),
            initial_data,
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Snapshot of every registered field's value.
    pub fn data(&self) -> FormData {
        self.fields
            .iter()
            .map(|(name, input)| (name.clone(), input.value()))
            .collect()
    }
}

impl FieldRegistry for Form {
    fn register_field(&mut self, name: &str, input: InputRef) {
        self.fields.insert(name.to_string(), input);
    }

    fn read(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(InputRef::value)
    }

    fn default_value(&self, name: &str) -> Option<String> {
        self.initial_data.get(name).cloned()
    }
}

/// A text input bound into a `FieldRegistry`, tracking focus and fill state.
#[derive(Debug)]
pub struct Input {
    name: String,
    icon: Option<&'static str>,
    placeholder: Option<String>,
    input_ref: Option<InputRef>,
    registered_as: Option<String>,
    is_focused: bool,
    is_filled: bool,
}

impl Input {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            placeholder: None,
            input_ref: None,
            registered_as: None,
            is_focused: false,
            is_filled: false,
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Option<&'static str> {
        self.icon
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn is_filled(&self) -> bool {
        self.is_filled
    }

    /// Renames the field. Takes effect in the registry on the next `mount`.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Creates the control on first call, then registers it under the
    /// current name if that name has not been registered yet. Returns
    /// whether a registration happened.
    pub fn mount<R: FieldRegistry + ?Sized>(&mut self, registry: &mut R) -> bool {
        let input = match &self.input_ref {
            Some(input) => input.clone(),
            None => {
                let input = InputRef::new(registry.default_value(&self.name).unwrap_or_default());
                self.input_ref = Some(input.clone());
                input
            }
        };
        if self.registered_as.as_deref() == Some(self.name.as_str()) {
            return false;
        }
        registry.register_field(&self.name, input);
        self.registered_as = Some(self.name.clone());
        true
    }

    /// Types into the control. Ignored before mount.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Some(input) = &self.input_ref {
            input.set_value(value);
        }
    }

    pub fn value(&self) -> Option<String> {
        self.input_ref.as_ref().map(InputRef::value)
    }

    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    /// Marks the field as filled whenever its control exists, regardless of
    /// the text in it.
    pub fn blur(&mut self) {
        self.is_focused = false;
        self.is_filled = self.input_ref.is_some();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Registry that counts registrations per name.
    #[derive(Default)]
    struct CountingRegistry {
        form: Form,
        registrations: Vec<String>,
    }

    impl FieldRegistry for CountingRegistry {
        fn register_field(&mut self, name: &str, input: InputRef) {
            self.registrations.push(name.to_string());
            self.form.register_field(name, input);
        }

        fn read(&self, name: &str) -> Option<String> {
            self.form.read(name)
        }

        fn default_value(&self, name: &str) -> Option<String> {
            self.form.default_value(name)
        }
    }

    #[test]
    fn mount_registers_once_per_name() {
        let mut registry = CountingRegistry::default();
        let mut input = Input::new("name");

        assert!(input.mount(&mut registry));
        assert!(!input.mount(&mut registry));
        assert_eq!(registry.registrations, vec!["name"]);
    }

    #[test]
    fn rename_re_registers_same_control() {
        let mut registry = CountingRegistry::default();
        let mut input = Input::new("name");
        input.mount(&mut registry);
        input.set_value("Soup");

        input.set_name("title");
        assert!(input.mount(&mut registry));
        assert_eq!(registry.registrations, vec!["name", "title"]);
        assert_eq!(registry.read("title").as_deref(), Some("Soup"));
    }

    #[test]
    fn mount_seeds_control_with_default_value() {
        let mut initial = FormData::new();
        initial.insert("price".to_string(), "19.90".to_string());
        let mut form = Form::with_initial_data(initial);

        let mut price = Input::new("price");
        let mut name = Input::new("name");
        price.mount(&mut form);
        name.mount(&mut form);

        assert_eq!(price.value().as_deref(), Some("19.90"));
        assert_eq!(name.value().as_deref(), Some(""));
    }

    #[test]
    fn form_reads_through_registered_controls() {
        let mut form = Form::new();
        let mut input = Input::new("description");
        input.mount(&mut form);

        input.set_value("Spicy");
        assert_eq!(form.read("description").as_deref(), Some("Spicy"));
        assert_eq!(form.data().get("description").map(String::as_str), Some("Spicy"));
        assert!(form.read("missing").is_none());
    }

    #[test]
    fn focus_and_blur_toggle_is_focused() {
        let mut form = Form::new();
        let mut input = Input::new("name");
        input.mount(&mut form);

        input.focus();
        assert!(input.is_focused());
        input.blur();
        assert!(!input.is_focused());
    }

    #[test]
    fn blur_marks_mounted_field_filled_even_when_empty() {
        let mut form = Form::new();
        let mut input = Input::new("name");
        input.mount(&mut form);

        assert!(!input.is_filled());
        input.focus();
        input.blur();
        assert!(input.is_filled());
        assert_eq!(input.value().as_deref(), Some(""));
    }

    #[test]
    fn blur_before_mount_leaves_field_unfilled() {
        let mut input = Input::new("name");
        input.focus();
        input.blur();
        assert!(!input.is_filled());
        input.set_value("ignored");
        assert!(input.value().is_none());
    }

    #[test]
    fn input_carries_icon_and_placeholder() {
        let input = Input::new("image")
            .with_icon("link")
            .with_placeholder("Paste the image link here");
        assert_eq!(input.icon(), Some("link"));
        assert_eq!(input.placeholder(), Some("Paste the image link here"));
    }

    #[test]
    fn re_registration_replaces_binding() {
        let mut form = Form::new();
        let first = InputRef::new("a");
        let second = InputRef::new("b");
        form.register_field("name", first.clone());
        form.register_field("name", second.clone());
        assert_eq!(form.read("name").as_deref(), Some("b"));
        assert!(!first.same_control(&second));
        assert_eq!(form.field_names().collect::<Vec<_>>(), vec!["name"]);
    }
}
