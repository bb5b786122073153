//! Contentful Content Delivery API client for the typeful generator.
//!
//! This crate covers the read-only slice of the API the generator needs: the
//! content-type listing of a space, deserialized into the data model consumed
//! by `typeful-codegen`.

mod client;
mod error;
mod schema;

pub use client::{ContentClient, ContentClientBuilder, DEFAULT_ENVIRONMENT, DEFAULT_HOST};
pub use error::{Error, Result};
pub use schema::{ContentType, ContentTypeCollection, Field, FieldKind, LinkKind, Sys, Validation};
