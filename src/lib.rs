//! Fixed registry of third-party service identifiers.
//!
//! Client code tags credentials and operations with a short lowercase token
//! naming the external service they belong to ("facebook", "dropbox", ...).
//! This crate owns that closed set: [`Service`] is the typed view, and
//! [`tokens`] exposes the same values as flat string constants for callers
//! that work with literals.
//!
//! ```
//! use service_registry::Service;
//!
//! let service: Service = "github".parse().unwrap();
//! assert_eq!(service, Service::GitHub);
//! assert_eq!(service.token(), "github");
//! assert_eq!(service.name(), "GitHub");
//! ```

pub mod service;
pub mod tokens;

pub use service::{Service, UnknownServiceError};
