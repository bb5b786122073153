//! TypeScript const declaration builder.

use crate::CodeBuilder;

/// Builder for exported const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
}

impl Const {
    /// Create a const binding. The value is rendered verbatim; string values
    /// must arrive already quoted.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a const bound to a single-quoted string literal.
    pub fn string(name: impl Into<String>, value: &str) -> Self {
        Self::new(name, format!("'{value}'"))
    }

    /// Render the const declaration to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!("export const {} = {}", self.name, self.value))
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}
