//! Host application: configuration, module loading, and server bootstrap.
//!
//! The pieces fit together like this:
//! - `config.rs`: deployment configuration (`HostConfig`)
//! - `modules.rs`: the module loader — the one place that knows the
//!   concrete module types and their load order
//! - `bootstrap.rs`: the startup sequence that runs the binding pass and
//!   publishes the router

pub mod bootstrap;
pub mod config;
pub mod modules;
