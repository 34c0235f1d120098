//! `gatehouse-core` — protocol foundation building blocks.
//!
//! This crate contains the **pure protocol** primitives (no HTTP concerns):
//! module identity, the binding error taxonomy, and the host application
//! state that capability operations read during registration.

pub mod application;
pub mod error;
pub mod module;

pub use application::Application;
pub use error::{BindingError, BindingResult};
pub use module::ModuleId;
