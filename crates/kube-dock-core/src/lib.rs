//! Core types and configuration for kube-dock.
//!
//! This crate defines the `kube-dock.toml` schema ([`DockConfig`]), the
//! directive vocabulary ([`Directive`]), user edit requests
//! ([`EditRequest`], [`KeyValue`]), and shared error types.

pub mod config;
pub mod error;
pub mod request;

pub use config::{DockConfig, DockerfileConfig};
pub use error::{Error, Result};
pub use request::{Directive, EditRequest, KeyValue};
