//! # Blog Core
//!
//! The domain layer of the blog server.
//! This crate contains the post model, the store port and the body sanitizer,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod sanitize;

pub use error::StoreError;
