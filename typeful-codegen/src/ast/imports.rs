//! TypeScript import builder.

use crate::CodeBuilder;

/// Builder for named-import statements in the generated definition file.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!(
            "import {{ {} }} from '{}'",
            self.named.join(", "),
            self.from
        ))
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}
