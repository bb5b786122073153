//! Data model for the Content Delivery API content-type listing.

use std::fmt;

use serde::Deserialize;

/// One page of the content-type listing as returned by the API.
#[derive(Debug, Deserialize)]
pub struct ContentTypeCollection {
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
    #[serde(default)]
    pub items: Vec<ContentType>,
}

/// A content type: a named schema defining the shape of entries.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentType {
    pub sys: Sys,

    /// Display name shown in the Contentful UI.
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Field descriptors in the order the API returns them.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// System metadata; only the identifier is relevant here.
#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    pub id: String,
}

/// A single field descriptor within a content type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Empty for `Array` element descriptors, which carry no identifier.
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Sub-kind for `Link` fields (`Entry` or `Asset`).
    #[serde(default)]
    pub link_type: Option<LinkKind>,

    #[serde(default)]
    pub required: bool,

    /// Omitted fields are excluded from API responses and from generated
    /// interfaces.
    #[serde(default)]
    pub omitted: bool,

    #[serde(default)]
    pub validations: Vec<Validation>,

    /// Element descriptor for `Array` fields.
    #[serde(default)]
    pub items: Option<Box<Field>>,
}

impl Field {
    /// The allowed literal values of the first `in` validation, if any.
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.validations
            .iter()
            .find_map(|v| v.allowed_values.as_deref())
    }

    /// The allowed linked content-type ids of the first `linkContentType`
    /// validation, if any.
    pub fn linked_content_types(&self) -> Option<&[String]> {
        self.validations
            .iter()
            .find_map(|v| v.link_content_type.as_deref())
    }
}

/// Primitive field kind.
///
/// Kinds this generator does not recognize are preserved as `Other` so
/// diagnostics can name them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldKind {
    Text,
    Symbol,
    Date,
    Number,
    Integer,
    Boolean,
    Location,
    Object,
    RichText,
    Link,
    Array,
    Other(String),
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Text" => Self::Text,
            "Symbol" => Self::Symbol,
            "Date" => Self::Date,
            "Number" => Self::Number,
            "Integer" => Self::Integer,
            "Boolean" => Self::Boolean,
            "Location" => Self::Location,
            "Object" => Self::Object,
            "RichText" => Self::RichText,
            "Link" => Self::Link,
            "Array" => Self::Array,
            _ => Self::Other(s),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "Text",
            Self::Symbol => "Symbol",
            Self::Date => "Date",
            Self::Number => "Number",
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
            Self::Location => "Location",
            Self::Object => "Object",
            Self::RichText => "RichText",
            Self::Link => "Link",
            Self::Array => "Array",
            Self::Other(s) => s,
        };
        f.write_str(name)
    }
}

/// Sub-kind of a `Link` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LinkKind {
    Entry,
    Asset,
    Other(String),
}

impl From<String> for LinkKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Entry" => Self::Entry,
            "Asset" => Self::Asset,
            _ => Self::Other(s),
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry => f.write_str("Entry"),
            Self::Asset => f.write_str("Asset"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// A schema-level constraint attached to a field.
///
/// The API models validations as objects with one significant key each; only
/// the two keys the generator consumes are kept, everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Allowed literal values (`in` validation), in declaration order.
    #[serde(default, rename = "in")]
    pub allowed_values: Option<Vec<String>>,

    /// Allowed linked content-type ids, in declaration order.
    #[serde(default)]
    pub link_content_type: Option<Vec<String>>,
}
