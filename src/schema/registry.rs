use super::{RootType, SchemaError};
use graphql_parser::schema::{Definition, Document, TypeDefinition, TypeExtension};
use graphql_parser::Pos;
use std::collections::HashMap;
use std::fmt;

const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeKind::Scalar => "scalar",
            TypeKind::Object => "object",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
            TypeKind::Enum => "enum",
            TypeKind::InputObject => "input object",
        };
        f.write_str(name)
    }
}

/// Where something was declared
#[derive(Debug, Clone)]
struct Origin {
    source: String,
    pos: Pos,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.pos.line, self.pos.column)
    }
}

#[derive(Debug, Clone)]
struct NamedField {
    name: String,
    origin: Origin,
}

/// Owned summary of a type definition or extension
#[derive(Debug)]
struct TypeShape {
    name: String,
    kind: TypeKind,
    origin: Origin,
    fields: Vec<NamedField>,
}

impl TypeShape {
    fn new(name: &str, kind: TypeKind, source: &str, pos: Pos) -> Self {
        Self {
            name: name.to_string(),
            kind,
            origin: Origin {
                source: source.to_string(),
                pos,
            },
            fields: Vec::new(),
        }
    }

    fn with_fields<'f>(mut self, fields: impl IntoIterator<Item = (&'f String, Pos)>) -> Self {
        let source = self.origin.source.clone();
        self.fields.extend(fields.into_iter().map(|(name, pos)| NamedField {
            name: name.clone(),
            origin: Origin {
                source: source.clone(),
                pos,
            },
        }));
        self
    }

    fn from_definition(definition: &TypeDefinition<'_, String>, source: &str) -> Self {
        match definition {
            TypeDefinition::Scalar(t) => Self::new(&t.name, TypeKind::Scalar, source, t.position),
            TypeDefinition::Object(t) => Self::new(&t.name, TypeKind::Object, source, t.position)
                .with_fields(t.fields.iter().map(|f| (&f.name, f.position))),
            TypeDefinition::Interface(t) => {
                Self::new(&t.name, TypeKind::Interface, source, t.position)
                    .with_fields(t.fields.iter().map(|f| (&f.name, f.position)))
            }
            TypeDefinition::Union(t) => Self::new(&t.name, TypeKind::Union, source, t.position),
            TypeDefinition::Enum(t) => Self::new(&t.name, TypeKind::Enum, source, t.position),
            TypeDefinition::InputObject(t) => {
                Self::new(&t.name, TypeKind::InputObject, source, t.position)
                    .with_fields(t.fields.iter().map(|f| (&f.name, f.position)))
            }
        }
    }

    fn from_extension(extension: &TypeExtension<'_, String>, source: &str) -> Self {
        match extension {
            TypeExtension::Scalar(t) => Self::new(&t.name, TypeKind::Scalar, source, t.position),
            TypeExtension::Object(t) => Self::new(&t.name, TypeKind::Object, source, t.position)
                .with_fields(t.fields.iter().map(|f| (&f.name, f.position))),
            TypeExtension::Interface(t) => {
                Self::new(&t.name, TypeKind::Interface, source, t.position)
                    .with_fields(t.fields.iter().map(|f| (&f.name, f.position)))
            }
            TypeExtension::Union(t) => Self::new(&t.name, TypeKind::Union, source, t.position),
            TypeExtension::Enum(t) => Self::new(&t.name, TypeKind::Enum, source, t.position),
            TypeExtension::InputObject(t) => {
                Self::new(&t.name, TypeKind::InputObject, source, t.position)
                    .with_fields(t.fields.iter().map(|f| (&f.name, f.position)))
            }
        }
    }
}

fn check_reserved(name: &str, origin: &Origin) -> Result<(), SchemaError> {
    if name.starts_with("__") {
        return Err(SchemaError::Invalid(format!(
            "name \"{}\" must not begin with \"__\", which is reserved by GraphQL introspection ({})",
            name, origin
        )));
    }
    Ok(())
}

/// Declared fields of the root operation types, `None` when a root is absent
#[derive(Debug, Default)]
pub(super) struct RootFields {
    pub query: Option<Vec<String>>,
    pub mutation: Option<Vec<String>>,
}

/// Merges schema documents into one logical schema.
///
/// Only the checks that need to know which source a declaration came from
/// live here. Whole-schema rules (type references, root operation types)
/// are checked by `graphql-schema-validation` before [`SchemaRegistry::finish`].
#[derive(Debug, Default)]
pub(super) struct SchemaRegistry {
    types: Vec<TypeShape>,
    index: HashMap<String, usize>,
    extensions: Vec<TypeShape>,
    query_root: Option<String>,
    mutation_root: Option<String>,
    explicit_roots: bool,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(
        &mut self,
        source: &str,
        document: &Document<'_, String>,
    ) -> Result<(), SchemaError> {
        for definition in &document.definitions {
            match definition {
                Definition::SchemaDefinition(schema) if !self.explicit_roots => {
                    self.explicit_roots = true;
                    self.query_root = schema.query.clone();
                    self.mutation_root = schema.mutation.clone();
                }
                Definition::SchemaDefinition(_) | Definition::DirectiveDefinition(_) => {}
                Definition::TypeDefinition(definition) => {
                    self.define(TypeShape::from_definition(definition, source))?
                }
                Definition::TypeExtension(extension) => self
                    .extensions
                    .push(TypeShape::from_extension(extension, source)),
            }
        }
        Ok(())
    }

    fn define(&mut self, mut shape: TypeShape) -> Result<(), SchemaError> {
        check_reserved(&shape.name, &shape.origin)?;

        if BUILTIN_SCALARS.contains(&shape.name.as_str()) {
            return Err(SchemaError::Invalid(format!(
                "cannot redeclare built-in scalar {} ({})",
                shape.name, shape.origin
            )));
        }

        if let Some(&existing) = self.index.get(&shape.name) {
            return Err(SchemaError::Invalid(format!(
                "cannot redeclare type {} ({}, first declared at {})",
                shape.name, shape.origin, self.types[existing].origin
            )));
        }

        let fields = std::mem::take(&mut shape.fields);
        add_fields(&mut shape, fields)?;

        self.index.insert(shape.name.clone(), self.types.len());
        self.types.push(shape);
        Ok(())
    }

    fn extend(&mut self, extension: TypeShape) -> Result<(), SchemaError> {
        let Some(&target) = self.index.get(&extension.name) else {
            return Err(SchemaError::Invalid(format!(
                "cannot extend type {} because it does not exist ({})",
                extension.name, extension.origin
            )));
        };

        let base = &mut self.types[target];
        if base.kind != extension.kind {
            return Err(SchemaError::Invalid(format!(
                "cannot extend {} {} with a {} extension ({})",
                base.kind, base.name, extension.kind, extension.origin
            )));
        }

        add_fields(base, extension.fields)
    }

    fn root(&self, root: RootType) -> Option<&TypeShape> {
        let name = if self.explicit_roots {
            match root {
                RootType::Query => self.query_root.as_deref()?,
                RootType::Mutation => self.mutation_root.as_deref()?,
            }
        } else {
            root.as_str()
        };

        let shape = &self.types[*self.index.get(name)?];
        (shape.kind == TypeKind::Object).then_some(shape)
    }

    /// Apply extensions in source order and resolve the root field lists
    pub fn finish(mut self) -> Result<RootFields, SchemaError> {
        for extension in std::mem::take(&mut self.extensions) {
            self.extend(extension)?;
        }

        let field_names =
            |shape: &TypeShape| -> Vec<String> { shape.fields.iter().map(|f| f.name.clone()).collect() };

        Ok(RootFields {
            query: self.root(RootType::Query).map(field_names),
            mutation: self.root(RootType::Mutation).map(field_names),
        })
    }
}

fn add_fields(target: &mut TypeShape, fields: Vec<NamedField>) -> Result<(), SchemaError> {
    for field in fields {
        check_reserved(&field.name, &field.origin)?;

        if let Some(existing) = target.fields.iter().find(|f| f.name == field.name) {
            return Err(SchemaError::Invalid(format!(
                "field {}.{} can only be defined once ({}, first defined at {})",
                target.name, field.name, field.origin, existing.origin
            )));
        }
        target.fields.push(field);
    }
    Ok(())
}
