//! `gatehouse-binding` — the capability-registration protocol.
//!
//! Service modules are opaque, independently-packaged units. Each one may
//! opt into zero or more typed *capabilities*; the host discovers and
//! invokes those capabilities during startup without knowing any module's
//! concrete type. This crate defines the capability contracts
//! ([`ServiceBinding`], [`ServletBinding`]), the module trait the loader
//! produces ([`ServiceModule`]), and the dispatch loop that drives them
//! ([`BindingRegistry`]).

pub mod capability;
pub mod registry;

pub use capability::{ServiceBinding, ServiceModule, ServletBinding};
pub use registry::{BindingRegistry, DispatchError};
