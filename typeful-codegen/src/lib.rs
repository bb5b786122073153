//! TypeScript definition generator for Contentful content models.
//!
//! Turns a fetched content-type listing into a single `.d.ts` source: one
//! exported const and one interface per content type, with field kinds mapped
//! to TypeScript type-strings.
//!
//! ```ignore
//! use typeful_codegen::Generator;
//!
//! let rendered = Generator::new(&content_types).prefix("CMS").render();
//! for warning in &rendered.warnings {
//!     eprintln!("{warning}");
//! }
//! rendered.write_to(Path::new("./contentfulTypes.d.ts"))?;
//! ```

mod code_builder;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use code_builder::CodeBuilder;
pub use generator::{Generator, Rendered};
pub use naming::to_interface_name;
pub use type_mapper::{Warning, field_type};
