//! Field-kind to TypeScript type-string mapping.

use std::fmt;

use typeful_client::{Field, FieldKind, LinkKind};

use crate::naming::to_interface_name;

/// Non-fatal diagnostic raised while mapping a field.
///
/// Warnings never influence the generated bytes; the offending field degrades
/// to `any` and generation continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    UnknownFieldType { field: String, kind: String },
    UnknownLinkType { field: String, link_type: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFieldType { field, kind } => {
                write!(f, "Unknown field type \"{kind}\" in field {field}")
            }
            Self::UnknownLinkType { field, link_type } => {
                write!(f, "Unknown link type \"{link_type}\" in field {field}")
            }
        }
    }
}

/// Map a field descriptor to its TypeScript type-string.
///
/// The mapping is a pure lookup over the field itself and the configured
/// interface-name prefix. `is_array` wraps the result as `T[]`; it is set by
/// the `Array` recursion and is idempotent for (unsupported) nested arrays.
pub fn field_type(field: &Field, prefix: &str, is_array: bool, warnings: &mut Vec<Warning>) -> String {
    match &field.kind {
        FieldKind::Text | FieldKind::Symbol | FieldKind::Date => {
            match field.allowed_values() {
                Some(values) => {
                    let union = values
                        .iter()
                        .map(|v| format!("'{v}'"))
                        .collect::<Vec<_>>()
                        .join("|");
                    // A multi-member union needs parens before `[]`.
                    let ty = if is_array && values.len() > 1 {
                        format!("({union})")
                    } else {
                        union
                    };
                    format_array(is_array, ty)
                }
                None => format_array(is_array, "string".to_string()),
            }
        }
        FieldKind::Number | FieldKind::Integer => format_array(is_array, "number".to_string()),
        FieldKind::Boolean => format_array(is_array, "boolean".to_string()),
        FieldKind::Location => format_array(is_array, "{ lat:string, lon:string }".to_string()),
        FieldKind::Object => format_array(is_array, "any".to_string()),
        FieldKind::RichText => format_array(
            is_array,
            "{ content: any, data: any, nodeType: string }".to_string(),
        ),
        FieldKind::Link => match &field.link_type {
            Some(LinkKind::Asset) => format_array(is_array, "Asset".to_string()),
            Some(LinkKind::Entry) => match field.linked_content_types() {
                Some(types) => {
                    let names = types
                        .iter()
                        .map(|t| to_interface_name(t, prefix))
                        .collect::<Vec<_>>()
                        .join("|");
                    format_array(is_array, format!("Entry<{names}>"))
                }
                None => format_array(is_array, "any".to_string()),
            },
            other => {
                warnings.push(Warning::UnknownLinkType {
                    field: field.id.clone(),
                    link_type: other
                        .as_ref()
                        .map_or_else(|| "missing".to_string(), ToString::to_string),
                });
                format_array(is_array, "any".to_string())
            }
        },
        FieldKind::Array => match &field.items {
            Some(items) => field_type(items, prefix, true, warnings),
            None => {
                warnings.push(Warning::UnknownFieldType {
                    field: field.id.clone(),
                    kind: FieldKind::Array.to_string(),
                });
                format_array(is_array, "any".to_string())
            }
        },
        FieldKind::Other(kind) => {
            warnings.push(Warning::UnknownFieldType {
                field: field.id.clone(),
                kind: kind.clone(),
            });
            format_array(is_array, "any".to_string())
        }
    }
}

fn format_array(is_array: bool, ty: String) -> String {
    if is_array { format!("{ty}[]") } else { ty }
}
