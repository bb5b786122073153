//! Definition-file emitter.

use std::path::Path;

use eyre::Result;
use typeful_client::{ContentType, Field};

use crate::{
    CodeBuilder,
    ast::{Const, Import, Interface, InterfaceField},
    naming::to_interface_name,
    type_mapper::{Warning, field_type},
};

/// Emits one `.d.ts` source from a fetched content-type listing.
///
/// For every content type the output contains a const binding the interface
/// name to the raw identifier, followed by the interface itself; blocks are
/// separated by blank lines and preceded by a fixed import of the `Entry` and
/// `Asset` structural types.
pub struct Generator<'a> {
    content_types: &'a [ContentType],
    prefix: &'a str,
    ignored_fields: &'a [String],
    sorted: bool,
}

impl<'a> Generator<'a> {
    pub fn new(content_types: &'a [ContentType]) -> Self {
        Self {
            content_types,
            prefix: "",
            ignored_fields: &[],
            sorted: true,
        }
    }

    /// Prefix every derived interface name.
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Exclude fields with these ids from every interface body.
    pub fn ignore(mut self, field_ids: &'a [String]) -> Self {
        self.ignored_fields = field_ids;
        self
    }

    /// Keep content types and fields in fetch order instead of sorting.
    pub fn fetch_order(mut self) -> Self {
        self.sorted = false;
        self
    }

    /// Render the full definition file.
    pub fn render(&self) -> Rendered {
        let mut warnings = Vec::new();

        let mut builder = Import::new("contentful")
            .named("Entry")
            .named("Asset")
            .render(CodeBuilder::new());

        let mut content_types: Vec<&ContentType> = self.content_types.iter().collect();
        if self.sorted {
            content_types.sort_by_key(|ct| to_interface_name(&ct.sys.id, self.prefix));
        }

        for content_type in content_types {
            builder = self.render_content_type(content_type, builder, &mut warnings);
        }

        Rendered {
            source: builder.build(),
            warnings,
        }
    }

    fn render_content_type(
        &self,
        content_type: &ContentType,
        builder: CodeBuilder,
        warnings: &mut Vec<Warning>,
    ) -> CodeBuilder {
        let name = to_interface_name(&content_type.sys.id, self.prefix);
        let builder = Const::string(&name, &content_type.sys.id).render(builder);

        let mut interface = Interface::new(&name).comment(&content_type.name);
        if let Some(description) = &content_type.description {
            interface = interface.block_comment(description);
        }

        let mut fields: Vec<&Field> = content_type
            .fields
            .iter()
            .filter(|f| !f.omitted && !self.ignored_fields.contains(&f.id))
            .collect();
        if self.sorted {
            fields.sort_by(|a, b| a.id.cmp(&b.id));
        }

        for field in fields {
            let ty = field_type(field, self.prefix, false, warnings);
            let mut declaration = InterfaceField::new(&field.id, ty);
            if !field.required {
                declaration = declaration.optional();
            }
            interface = interface.field(declaration);
        }

        interface.render(builder).blank()
    }
}

/// A rendered definition file plus the diagnostics raised while mapping.
#[derive(Debug)]
pub struct Rendered {
    pub source: String,
    pub warnings: Vec<Warning>,
}

impl Rendered {
    /// Write the buffer to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &self.source)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use typeful_client::{FieldKind, Sys};

    use super::*;

    fn content_type(id: &str, name: &str, fields: Vec<Field>) -> ContentType {
        ContentType {
            sys: Sys { id: id.to_string() },
            name: name.to_string(),
            description: None,
            fields,
        }
    }

    fn symbol_field(id: &str, required: bool) -> Field {
        Field {
            id: id.to_string(),
            kind: FieldKind::Symbol,
            link_type: None,
            required,
            omitted: false,
            validations: Vec::new(),
            items: None,
        }
    }

    #[test]
    fn test_import_line_comes_first() {
        let rendered = Generator::new(&[]).render();
        assert_eq!(rendered.source, "import { Entry, Asset } from 'contentful'\n");
    }

    #[test]
    fn test_content_types_sorted_by_interface_name() {
        let types = vec![
            content_type("zebra", "Zebra", vec![]),
            content_type("apple", "Apple", vec![]),
        ];
        let rendered = Generator::new(&types).render();
        let apple = rendered.source.find("interface Apple").unwrap();
        let zebra = rendered.source.find("interface Zebra").unwrap();
        assert!(apple < zebra);
    }

    #[test]
    fn test_fetch_order_preserved_when_requested() {
        let types = vec![
            content_type("zebra", "Zebra", vec![]),
            content_type("apple", "Apple", vec![]),
        ];
        let rendered = Generator::new(&types).fetch_order().render();
        let apple = rendered.source.find("interface Apple").unwrap();
        let zebra = rendered.source.find("interface Zebra").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn test_omitted_and_ignored_fields_are_excluded() {
        let mut omitted = symbol_field("secret", true);
        omitted.omitted = true;
        let types = vec![content_type(
            "post",
            "Post",
            vec![omitted, symbol_field("internal", true), symbol_field("title", true)],
        )];
        let ignored = vec!["internal".to_string()];
        let rendered = Generator::new(&types).ignore(&ignored).render();
        assert!(!rendered.source.contains("secret"));
        assert!(!rendered.source.contains("internal"));
        assert!(rendered.source.contains("readonly title: string"));
    }

    #[test]
    fn test_optional_marker_tracks_required_flag() {
        let types = vec![content_type(
            "post",
            "Post",
            vec![symbol_field("title", true), symbol_field("subtitle", false)],
        )];
        let rendered = Generator::new(&types).render();
        assert!(rendered.source.contains("readonly title: string"));
        assert!(rendered.source.contains("readonly subtitle?: string"));
    }

    #[test]
    fn test_warnings_surface_from_mapping() {
        let mut blob = symbol_field("blob", true);
        blob.kind = FieldKind::Other("Blob".to_string());
        let types = vec![content_type("post", "Post", vec![blob])];
        let rendered = Generator::new(&types).render();
        assert_eq!(rendered.warnings.len(), 1);
        assert!(rendered.source.contains("readonly blob: any"));
    }
}
