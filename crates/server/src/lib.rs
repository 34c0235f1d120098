//! HTTP registration surface.
//!
//! This crate owns the route table that modules write into during the
//! binding phase and its one-way conversion into the serving router.

pub mod context;

pub use context::ServerContext;
