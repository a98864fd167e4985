//! Headless core of the food menu dashboard.
//!
//! # Overview
//! Lists, creates, edits and deletes food records held by a REST backend
//! under `/foods`, keeping a local collection in step with the server's
//! acknowledgements.
//!
//! # Design
//! - `FoodClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`. A `Transport` performs the I/O.
//! - `Dashboard` owns the collection and the modal state and is handed its
//!   client and transport explicitly.
//! - `Form` / `Input` model the field registry and the inputs bound to it;
//!   `ModalAddFood` / `ModalEditFood` are built on top of them.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod collection;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod http;
pub mod modal;
pub mod transport;
pub mod types;

pub use client::FoodClient;
pub use collection::FoodCollection;
pub use config::ClientConfig;
pub use dashboard::{Dashboard, FoodRow};
pub use error::{ApiError, ConfigError};
pub use form::{FieldRegistry, Form, FormData, Input, InputRef};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use modal::{AddFoodTarget, ModalAddFood, ModalEditFood, UpdateFoodTarget};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateFood, Food, FoodPatch};
