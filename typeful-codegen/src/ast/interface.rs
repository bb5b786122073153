//! TypeScript interface builder.

use crate::CodeBuilder;

/// A field declaration in a generated interface.
///
/// Every declaration is `readonly`; generated definitions describe delivered
/// content, which is never mutated in place.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for exported TypeScript interfaces with leading body comments.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    comments: Vec<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a `//` line comment at the top of the interface body.
    pub fn comment(mut self, text: &str) -> Self {
        self.comments.push(format!("//{text}"));
        self
    }

    /// Add a `/* */` block comment at the top of the interface body.
    pub fn block_comment(mut self, text: &str) -> Self {
        self.comments.push(format!("/* {text} */"));
        self
    }

    /// Add a field declaration.
    pub fn field(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Render the interface to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = builder
            .line(&format!("export interface {} {{", self.name))
            .indent();

        let builder = self
            .comments
            .iter()
            .fold(builder, |b, comment| b.line(comment));

        self.fields
            .iter()
            .fold(builder, |b, field| {
                let optional = if field.optional { "?" } else { "" };
                b.line(&format!("readonly {}{}: {}", field.name, optional, field.ty))
            })
            .dedent()
            .line("}")
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface_keeps_block() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "export interface Empty {\n}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("Post")
            .field(InterfaceField::new("title", "string"))
            .field(InterfaceField::new("draft", "boolean").optional())
            .build();
        assert_eq!(
            i,
            "export interface Post {\n  readonly title: string\n  readonly draft?: boolean\n}\n"
        );
    }

    #[test]
    fn test_comments_come_before_fields() {
        let i = Interface::new("Post")
            .comment("Post")
            .block_comment("A blog post")
            .field(InterfaceField::new("title", "string"))
            .build();
        assert_eq!(
            i,
            "export interface Post {\n  //Post\n  /* A blog post */\n  readonly title: string\n}\n"
        );
    }
}
