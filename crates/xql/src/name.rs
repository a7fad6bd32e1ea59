//! Qualified names.
//!
//! Every part of a name is written as an escaped identifier, so `my schema`
//! renders quoted while `public` stays bare.

use xql_core::primitives::{Ident, Token};
use xql_core::{Either, Node, Renderer};

/// `[catalog.]schema`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaName {
    /// Optional catalog.
    pub catalog: Option<Ident>,
    /// Schema.
    pub schema: Ident,
}

impl SchemaName {
    /// Creates an unqualified schema name.
    #[must_use]
    pub fn new(schema: impl Into<Ident>) -> Self {
        Self {
            catalog: None,
            schema: schema.into(),
        }
    }

    /// Qualifies the schema with a catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: impl Into<Ident>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }
}

impl Node for SchemaName {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.visit(&[&self.catalog, &Token('.')]).visit(&[&self.schema])
    }
}

/// `[[catalog.]schema.]name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaQualifiedName {
    /// Optional schema.
    pub schema: Option<SchemaName>,
    /// Object name.
    pub name: Ident,
}

impl SchemaQualifiedName {
    /// Creates an unqualified name.
    #[must_use]
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    /// Qualifies the name with a schema.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<SchemaName>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Returns a reference to a column of this table.
    #[must_use]
    pub fn column(&self, name: impl Into<Ident>) -> ColumnRef {
        ColumnRef {
            table: Some(self.clone().into()),
            name: name.into(),
        }
    }
}

impl Node for SchemaQualifiedName {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.visit(&[&self.schema, &Token('.')]).visit(&[&self.name])
    }
}

impl From<&'static str> for SchemaName {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SchemaName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&'static str> for SchemaQualifiedName {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SchemaQualifiedName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// `MODULE.name`, a name local to an SQL-client module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalQualifiedName {
    /// Whether the name is prefixed with `MODULE.`.
    pub module: bool,
    /// Local name.
    pub name: Ident,
}

impl LocalQualifiedName {
    /// Creates a module-qualified name.
    #[must_use]
    pub fn module(name: impl Into<Ident>) -> Self {
        Self {
            module: true,
            name: name.into(),
        }
    }

    /// Creates an unqualified local name.
    #[must_use]
    pub fn local(name: impl Into<Ident>) -> Self {
        Self {
            module: false,
            name: name.into(),
        }
    }
}

impl Node for LocalQualifiedName {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        if self.module {
            r.keyword("MODULE").token('.');
        }
        self.name.accept(r)
    }
}

/// Either a module-local or a schema-qualified name.
pub type LocalOrSchemaQualifiedName = Either<LocalQualifiedName, SchemaQualifiedName>;

/// The name of a table.
///
/// Strings convert to the schema-qualified form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub LocalOrSchemaQualifiedName);

impl TableName {
    /// Returns the schema-qualified name, if this is one.
    #[must_use]
    pub const fn qualified(&self) -> Option<&SchemaQualifiedName> {
        self.0.right()
    }

    /// Returns the module-local name, if this is one.
    #[must_use]
    pub const fn local(&self) -> Option<&LocalQualifiedName> {
        self.0.left()
    }

    /// Returns a reference to a column of this table.
    #[must_use]
    pub fn column(&self, name: impl Into<Ident>) -> ColumnRef {
        ColumnRef {
            table: Some(self.clone()),
            name: name.into(),
        }
    }
}

impl Node for TableName {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.0.accept(r)
    }
}

impl From<&'static str> for TableName {
    fn from(name: &'static str) -> Self {
        Self(Either::Right(name.into()))
    }
}

impl From<String> for TableName {
    fn from(name: String) -> Self {
        Self(Either::Right(name.into()))
    }
}

impl From<SchemaQualifiedName> for TableName {
    fn from(name: SchemaQualifiedName) -> Self {
        Self(Either::Right(name))
    }
}

impl From<LocalQualifiedName> for TableName {
    fn from(name: LocalQualifiedName) -> Self {
        Self(Either::Left(name))
    }
}

/// `[table.]column`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Optional table qualifier.
    pub table: Option<TableName>,
    /// Column name.
    pub name: Ident,
}

impl ColumnRef {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }
}

impl Node for ColumnRef {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.visit(&[&self.table, &Token('.')]).visit(&[&self.name])
    }
}

impl From<&'static str> for ColumnRef {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl_display!(SchemaName, SchemaQualifiedName, LocalQualifiedName, TableName, ColumnRef);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_qualified_names() {
        assert_eq!(SchemaQualifiedName::new("t").to_string(), "t");
        assert_eq!(
            SchemaQualifiedName::new("t").schema("public").to_string(),
            "public.t"
        );
        assert_eq!(
            SchemaQualifiedName::new("t")
                .schema(SchemaName::new("s").catalog("c"))
                .to_string(),
            "c.s.t"
        );
        assert_eq!(
            SchemaQualifiedName::new("my table").schema("42").to_string(),
            "`42`.`my table`"
        );
    }

    #[test]
    fn test_local_qualified_names() {
        assert_eq!(LocalQualifiedName::module("tmp").to_string(), "MODULE.tmp");
        assert_eq!(LocalQualifiedName::local("tmp").to_string(), "tmp");
        assert_eq!(
            TableName::from(LocalQualifiedName::module("tmp"))
                .column("id")
                .to_string(),
            "MODULE.tmp.id"
        );
    }

    #[test]
    fn test_table_name_sides() {
        let name = TableName::from("products");
        assert!(name.qualified().is_some());
        assert_eq!(name.local(), None);
        assert_eq!(name.to_string(), "products");

        let name = TableName::from(LocalQualifiedName::module("t"));
        assert_eq!(name.qualified(), None);
        assert_eq!(name.to_string(), "MODULE.t");
    }

    #[test]
    fn test_column_refs() {
        let tbl = SchemaQualifiedName::new("tbl1");
        assert_eq!(tbl.column("a").to_string(), "tbl1.a");
        assert_eq!(ColumnRef::new("a").to_string(), "a");
        assert_eq!(TableName::from("t").column("b b").to_string(), "t.`b b`");
    }
}
