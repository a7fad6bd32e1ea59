//! `CREATE TABLE`.
//!
//! Element lists render as a block, one element per tab-indented line.
//!
//! ```rust
//! use xql::column::{primary_key, not_null, ty};
//! use xql::table::{self, OnCommit};
//! use xql::types::CharType;
//! use xql::{ColumnDef, CreateTable};
//!
//! let t = CreateTable::new("temp_cities", [
//!     table::temporary(),
//!     ColumnDef::new("name", [ty(CharType::varchar(80)), primary_key(), not_null()]).into(),
//!     table::on_commit(OnCommit::DeleteRows),
//! ]);
//! assert_eq!(
//!     t.to_string(),
//!     "CREATE TEMPORARY TABLE temp_cities (\n\tname VARCHAR(80) PRIMARY KEY NOT NULL\n) ON COMMIT DELETE ROWS"
//! );
//! ```

use xql_core::primitives::{Ident, Keyword, Ws};
use xql_core::{build, Either, Node, Opt, Renderer};

use crate::column::{ColumnDef, ColumnOptions};
use crate::constraint::TableConstraint;
use crate::name::{SchemaQualifiedName, TableName};
use crate::types::keyword_enum;

keyword_enum! {
    /// Lifetime scope of a temporary table.
    pub enum TableScope {
        Temporary => "TEMPORARY",
        GlobalTemporary => "GLOBAL TEMPORARY",
        LocalTemporary => "LOCAL TEMPORARY",
    }
}

keyword_enum! {
    /// What happens to a temporary table at commit.
    pub enum OnCommit {
        PreserveRows => "PRESERVE ROWS",
        DeleteRows => "DELETE ROWS",
        Drop => "DROP",
    }
}

/// System versioning clause, written after `WITH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemVersioning {
    /// `SYSTEM VERSIONING`
    Standard,
    /// `(SYSTEM_VERSIONING = ON)`
    On,
}

impl Node for SystemVersioning {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Standard => r.keyword("SYSTEM VERSIONING"),
            Self::On => r.keyword("(SYSTEM_VERSIONING = ON)"),
        }
    }
}

/// The `SYSTEM_TIME` period name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SystemTime;

impl Node for SystemTime {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("SYSTEM_TIME")
    }
}

/// `PERIOD FOR name (begin, end)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period {
    /// Either the system-time period or an application-time period name.
    pub name: Either<SystemTime, Ident>,
    /// Start column.
    pub begin: Ident,
    /// End column.
    pub end: Ident,
}

impl Period {
    /// `PERIOD FOR SYSTEM_TIME (begin, end)`
    #[must_use]
    pub fn system_time(begin: impl Into<Ident>, end: impl Into<Ident>) -> Self {
        Self {
            name: Either::Left(SystemTime),
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// `PERIOD FOR name (begin, end)`
    #[must_use]
    pub fn application_time(
        name: impl Into<Ident>,
        begin: impl Into<Ident>,
        end: impl Into<Ident>,
    ) -> Self {
        Self {
            name: Either::Right(name.into()),
            begin: begin.into(),
            end: end.into(),
        }
    }
}

impl Node for Period {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("PERIOD FOR").ws();
        self.name.accept(r).ws().token('(');
        self.begin.accept(r).sep().ws();
        self.end.accept(r).token(')')
    }
}

keyword_enum! {
    /// Properties copied or skipped by `LIKE`.
    pub enum LikeProperty {
        Comments => "COMMENTS",
        Compression => "COMPRESSION",
        Constraints => "CONSTRAINTS",
        Defaults => "DEFAULTS",
        Generated => "GENERATED",
        Identity => "IDENTITY",
        Indexes => "INDEXES",
        Statistics => "STATISTICS",
        Storage => "STORAGE",
        All => "ALL",
    }
}

/// `INCLUDING property` or `EXCLUDING property`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LikeOption {
    /// Whether the property is included.
    pub including: bool,
    /// Property.
    pub property: LikeProperty,
}

impl LikeOption {
    /// `INCLUDING property`
    #[must_use]
    pub const fn including(property: LikeProperty) -> Self {
        Self {
            including: true,
            property,
        }
    }

    /// `EXCLUDING property`
    #[must_use]
    pub const fn excluding(property: LikeProperty) -> Self {
        Self {
            including: false,
            property,
        }
    }
}

impl Node for LikeOption {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword(if self.including {
            "INCLUDING"
        } else {
            "EXCLUDING"
        })
        .ws();
        self.property.accept(r)
    }
}

/// `LIKE table [options...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Like {
    /// Source table.
    pub table: TableName,
    /// Copy options.
    pub options: Vec<LikeOption>,
}

impl Like {
    /// Creates a `LIKE` clause.
    #[must_use]
    pub fn new(table: impl Into<TableName>, options: impl IntoIterator<Item = LikeOption>) -> Self {
        Self {
            table: table.into(),
            options: options.into_iter().collect(),
        }
    }
}

impl Node for Like {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("LIKE").ws();
        self.table
            .accept(r)
            .visit_if_present(&self.options, &[&Ws])
            .join(&self.options, &Ws)
    }
}

/// An element of a table definition.
#[derive(Debug, Clone, PartialEq)]
pub enum TableElement {
    /// Column definition.
    Column(ColumnDef),
    /// Table constraint.
    Constraint(TableConstraint),
    /// Period definition.
    Period(Period),
    /// `LIKE` clause.
    Like(Like),
}

impl Node for TableElement {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Column(c) => c.accept(r),
            Self::Constraint(c) => c.accept(r),
            Self::Period(p) => p.accept(r),
            Self::Like(l) => l.accept(r),
        }
    }
}

keyword_enum! {
    /// How self-referencing values are generated.
    pub enum RefGeneration {
        SystemGenerated => "SYSTEM GENERATED",
        UserGenerated => "USER GENERATED",
        Derived => "DERIVED",
    }
}

/// `REF IS name [generation]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelfRef {
    /// Self-referencing column.
    pub name: Ident,
    /// Generation.
    pub generation: Option<RefGeneration>,
}

impl SelfRef {
    /// Creates a self-referencing column specification.
    #[must_use]
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            generation: None,
        }
    }

    /// Sets the generation.
    #[must_use]
    pub const fn generation(mut self, generation: RefGeneration) -> Self {
        self.generation = Some(generation);
        self
    }
}

impl Node for SelfRef {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("REF IS").ws();
        self.name.accept(r).visit(&[&Ws, &self.generation])
    }
}

/// An element of a typed table.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedElement {
    /// `name WITH OPTIONS ...`
    Column(ColumnOptions),
    /// Table constraint.
    Constraint(TableConstraint),
    /// `REF IS ...`
    SelfRef(SelfRef),
}

impl Node for TypedElement {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Column(c) => c.accept(r),
            Self::Constraint(c) => c.accept(r),
            Self::SelfRef(s) => s.accept(r),
        }
    }
}

impl From<ColumnOptions> for TypedElement {
    fn from(c: ColumnOptions) -> Self {
        Self::Column(c)
    }
}

impl From<ColumnDef> for TypedElement {
    fn from(c: ColumnDef) -> Self {
        Self::Column(c.with_options())
    }
}

impl From<TableConstraint> for TypedElement {
    fn from(c: TableConstraint) -> Self {
        Self::Constraint(c)
    }
}

impl From<SelfRef> for TypedElement {
    fn from(s: SelfRef) -> Self {
        Self::SelfRef(s)
    }
}

/// `OF type [(elements)]`
#[derive(Debug, Clone, PartialEq)]
pub struct TypedTable {
    /// Structured type.
    pub ty: SchemaQualifiedName,
    /// Elements.
    pub elements: Vec<TypedElement>,
}

impl Node for TypedTable {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("OF").ws();
        self.ty.accept(r);
        if !self.elements.is_empty() {
            r.ws().block(&self.elements);
        }
        r
    }
}

/// The content of a table definition.
#[derive(Debug, Clone, PartialEq)]
pub enum TableContent {
    /// Element list.
    Elements(Vec<TableElement>),
    /// Typed table.
    Typed(TypedTable),
}

impl Default for TableContent {
    fn default() -> Self {
        Self::Elements(Vec::new())
    }
}

impl Node for TableContent {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Elements(elements) => r.block(elements),
            Self::Typed(typed) => typed.accept(r),
        }
    }

    fn is_absent(&self) -> bool {
        matches!(self, Self::Elements(elements) if elements.is_empty())
    }
}

/// `CREATE [scope] TABLE name content [WITH ...] [ON COMMIT ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Temporary scope.
    pub scope: Option<TableScope>,
    /// Table name.
    pub name: TableName,
    /// Elements or typed table.
    pub content: TableContent,
    /// System versioning.
    pub system_versioning: Option<SystemVersioning>,
    /// Commit action of a temporary table.
    pub on_commit: Option<OnCommit>,
}

impl CreateTable {
    /// Creates a table definition.
    #[must_use]
    pub fn new(name: impl Into<TableName>, opts: impl IntoIterator<Item = Opt<Self>>) -> Self {
        build(
            Self {
                scope: None,
                name: name.into(),
                content: TableContent::default(),
                system_versioning: None,
                on_commit: None,
            },
            opts,
        )
    }

    /// Creates a temporary table definition.
    #[must_use]
    pub fn temporary(name: impl Into<TableName>, opts: impl IntoIterator<Item = Opt<Self>>) -> Self {
        let mut t = Self::new(name, opts);
        t.scope = Some(TableScope::Temporary);
        t
    }

    /// Appends an element, replacing typed content.
    pub fn push(&mut self, element: TableElement) {
        match &mut self.content {
            TableContent::Elements(elements) => elements.push(element),
            TableContent::Typed(_) => self.content = TableContent::Elements(vec![element]),
        }
    }
}

impl Node for CreateTable {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("CREATE")
            .visit(&[&Ws, &self.scope])
            .ws()
            .keyword("TABLE")
            .ws();
        self.name
            .accept(r)
            .visit(&[&Ws, &self.content])
            .visit(&[&Ws, &Keyword("WITH"), &Ws, &self.system_versioning])
            .visit(&[&Ws, &Keyword("ON COMMIT"), &Ws, &self.on_commit])
    }
}

/// `CREATE TEMPORARY TABLE`
#[must_use]
pub fn temporary() -> Opt<CreateTable> {
    scope(TableScope::Temporary)
}

/// Sets the temporary scope.
#[must_use]
pub fn scope(scope: TableScope) -> Opt<CreateTable> {
    Opt::new(move |t: &mut CreateTable| t.scope = Some(scope))
}

/// `ON COMMIT action`
#[must_use]
pub fn on_commit(action: OnCommit) -> Opt<CreateTable> {
    Opt::new(move |t: &mut CreateTable| t.on_commit = Some(action))
}

/// `WITH SYSTEM VERSIONING`
#[must_use]
pub fn system_versioning() -> Opt<CreateTable> {
    Opt::new(|t: &mut CreateTable| t.system_versioning = Some(SystemVersioning::Standard))
}

/// `WITH (SYSTEM_VERSIONING = ON)`
#[must_use]
pub fn system_versioning_on() -> Opt<CreateTable> {
    Opt::new(|t: &mut CreateTable| t.system_versioning = Some(SystemVersioning::On))
}

/// `OF type (elements)`, replacing any element list.
#[must_use]
pub fn of(
    ty: impl Into<SchemaQualifiedName>,
    elements: impl IntoIterator<Item = TypedElement>,
) -> Opt<CreateTable> {
    let typed = TypedTable {
        ty: ty.into(),
        elements: elements.into_iter().collect(),
    };
    Opt::new(move |t: &mut CreateTable| t.content = TableContent::Typed(typed))
}

/// Appends a table element.
#[must_use]
pub fn element(element: TableElement) -> Opt<CreateTable> {
    Opt::new(move |t: &mut CreateTable| t.push(element))
}

macro_rules! element_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl From<$ty> for TableElement {
            fn from(e: $ty) -> Self {
                Self::$variant(e)
            }
        }

        impl From<$ty> for Opt<CreateTable> {
            fn from(e: $ty) -> Self {
                element(TableElement::$variant(e))
            }
        }
    )+};
}

element_from!(
    ColumnDef => Column,
    TableConstraint => Constraint,
    Period => Period,
    Like => Like,
);

impl_display!(
    TableScope,
    OnCommit,
    SystemVersioning,
    Period,
    LikeProperty,
    LikeOption,
    Like,
    TableElement,
    SelfRef,
    TypedElement,
    TypedTable,
    CreateTable,
);
