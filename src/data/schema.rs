//! Schema extension: type definitions handed to the host before querying.
//!
//! The dataset's `image` column is empty for most rows, so the host cannot
//! infer its type. Declaring it keeps the links query valid either way.

use std::fmt;

/// Node type backing the dataset rows.
pub const DATASET_NODE: &str = "AirtableData";

/// A GraphQL object type extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: &'static str,
    pub implements: &'static [&'static str],
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: &'static str,
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.name)?;
        if !self.implements.is_empty() {
            write!(f, " implements {}", self.implements.join(" & "))?;
        }
        writeln!(f, " {{")?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.name, field.ty)?;
        }
        write!(f, "}}")
    }
}

/// Type definitions this site adds to the host schema.
pub fn schema_customization() -> Vec<TypeDef> {
    vec![TypeDef {
        name: DATASET_NODE,
        implements: &["Node"],
        fields: vec![FieldDef { name: "image", ty: "String" }],
    }]
}

/// Render type definitions as SDL, one block per type.
pub fn to_sdl(defs: &[TypeDef]) -> String {
    defs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
        + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_optional_image() {
        let defs = schema_customization();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "AirtableData");
        assert_eq!(defs[0].fields, vec![FieldDef { name: "image", ty: "String" }]);
    }

    #[test]
    fn test_sdl_rendering() {
        let sdl = to_sdl(&schema_customization());
        assert_eq!(sdl, "type AirtableData implements Node {\n  image: String\n}\n");
    }

    #[test]
    fn test_sdl_without_interfaces() {
        let def = TypeDef {
            name: "Extra",
            implements: &[],
            fields: vec![],
        };
        assert_eq!(def.to_string(), "type Extra {\n}");
    }
}
