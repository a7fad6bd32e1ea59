//! Data types.
//!
//! ```rust
//! use xql::types::{CharType, CharUnit, DateTimeField, IntType, NumericType};
//! use xql::DataType;
//!
//! assert_eq!(CharType::varchar(16).to_string(), "VARCHAR(16)");
//! assert_eq!(CharType::nchar(16).unit(CharUnit::Characters).to_string(), "NCHAR(16 CHARACTERS)");
//! assert_eq!(NumericType::numeric(3, 1).to_string(), "NUMERIC(3, 1)");
//! assert_eq!(DateTimeField::day().precision(3).to(DateTimeField::day()).to_string(), "INTERVAL DAY(3) TO DAY");
//! assert_eq!(DataType::from(IntType::Integer).array().to_string(), "INTEGER ARRAY[]");
//! ```

use xql_core::primitives::{Ident, Keyword, Token, Uint, Ws};
use xql_core::{Node, Renderer};

use crate::name::SchemaQualifiedName;

/// Declares a unit enum whose variants render as fixed keywords.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $kw:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* #[doc = concat!("`", $kw, "`")] $variant,)+
        }

        impl $name {
            /// Returns the SQL keyword.
            #[must_use]
            pub const fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $kw,)+
                }
            }
        }

        impl Node for $name {
            fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
                r.keyword(self.keyword())
            }
        }
    };
}

pub(crate) use keyword_enum;

/// Writes `(n)` when `n` is present.
fn write_length(r: &mut Renderer, length: Option<u64>) {
    r.visit(&[&Token('('), &length.map(Uint), &Token(')')]);
}

/// `COLLATE name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Collate(pub SchemaQualifiedName);

impl Node for Collate {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("COLLATE").ws().visit(&[&self.0])
    }
}

macro_rules! collate_from {
    ($($ty:ty),+) => {$(
        impl From<$ty> for Collate {
            fn from(name: $ty) -> Self {
                Self(name.into())
            }
        }
    )+};
}

collate_from!(&'static str, String, SchemaQualifiedName);

keyword_enum! {
    /// Character string type names.
    pub enum CharKind {
        Character => "CHARACTER",
        Char => "CHAR",
        CharacterVarying => "CHARACTER VARYING",
        CharVarying => "CHAR VARYING",
        VarChar => "VARCHAR",
        CharacterLargeObject => "CHARACTER LARGE OBJECT",
        CharLargeObject => "CHAR LARGE OBJECT",
        Clob => "CLOB",
        Text => "TEXT",
        NationalCharacter => "NATIONAL CHARACTER",
        NationalChar => "NATIONAL CHAR",
        NChar => "NCHAR",
        NationalCharacterVarying => "NATIONAL CHARACTER VARYING",
        NationalCharVarying => "NATIONAL CHAR VARYING",
        NCharVarying => "NCHAR VARYING",
        NationalCharacterLargeObject => "NATIONAL CHARACTER LARGE OBJECT",
        NCharLargeObject => "NCHAR LARGE OBJECT",
        NClob => "NCLOB",
    }
}

keyword_enum! {
    /// Unit of a character length.
    pub enum CharUnit {
        Characters => "CHARACTERS",
        Octets => "OCTETS",
        CodeUnits32 => "CODEUNITS32",
    }
}

/// A character string type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharType {
    /// Type name.
    pub kind: CharKind,
    /// Maximum length.
    pub length: Option<u64>,
    /// Unit of the length.
    pub unit: Option<CharUnit>,
    /// `CHARACTER SET`
    pub charset: Option<SchemaQualifiedName>,
    /// `COLLATE`
    pub collate: Option<Collate>,
}

impl CharType {
    /// Creates a character string type without length.
    #[must_use]
    pub const fn new(kind: CharKind) -> Self {
        Self {
            kind,
            length: None,
            unit: None,
            charset: None,
            collate: None,
        }
    }

    /// `CHAR`
    #[must_use]
    pub const fn char() -> Self {
        Self::new(CharKind::Char)
    }

    /// `VARCHAR(n)`
    #[must_use]
    pub const fn varchar(length: u64) -> Self {
        Self::new(CharKind::VarChar).length(length)
    }

    /// `NCHAR(n)`
    #[must_use]
    pub const fn nchar(length: u64) -> Self {
        Self::new(CharKind::NChar).length(length)
    }

    /// `TEXT`
    #[must_use]
    pub const fn text() -> Self {
        Self::new(CharKind::Text)
    }

    /// `CLOB`
    #[must_use]
    pub const fn clob() -> Self {
        Self::new(CharKind::Clob)
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the length unit.
    #[must_use]
    pub const fn unit(mut self, unit: CharUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Sets the character set.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<SchemaQualifiedName>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Sets the collation.
    #[must_use]
    pub fn collate(mut self, collate: impl Into<Collate>) -> Self {
        self.collate = Some(collate.into());
        self
    }
}

impl Node for CharType {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.kind.accept(r);
        if let Some(length) = self.length {
            r.token('(')
                .uint(length)
                .visit(&[&Ws, &self.unit])
                .token(')');
        }
        r.visit(&[&Ws, &Keyword("CHARACTER SET"), &Ws, &self.charset])
            .visit(&[&Ws, &self.collate])
    }
}

keyword_enum! {
    /// Binary string type names.
    pub enum BinaryKind {
        Binary => "BINARY",
        BinaryVarying => "BINARY VARYING",
        VarBinary => "VARBINARY",
        BinaryLargeObject => "BINARY LARGE OBJECT",
        Blob => "BLOB",
    }
}

/// A binary string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryType {
    /// Type name.
    pub kind: BinaryKind,
    /// Maximum length.
    pub length: Option<u64>,
}

impl BinaryType {
    /// Creates a binary type without length.
    #[must_use]
    pub const fn new(kind: BinaryKind) -> Self {
        Self { kind, length: None }
    }

    /// `BINARY`
    #[must_use]
    pub const fn binary() -> Self {
        Self::new(BinaryKind::Binary)
    }

    /// `VARBINARY(n)`
    #[must_use]
    pub const fn varbinary(length: u64) -> Self {
        Self::new(BinaryKind::VarBinary).length(length)
    }

    /// `BLOB`
    #[must_use]
    pub const fn blob() -> Self {
        Self::new(BinaryKind::Blob)
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }
}

impl Node for BinaryType {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.kind.accept(r);
        write_length(r, self.length);
        r
    }
}

keyword_enum! {
    /// Exact and approximate numeric type names.
    pub enum NumericKind {
        Numeric => "NUMERIC",
        Decimal => "DECIMAL",
        Dec => "DEC",
        Float => "FLOAT",
        Real => "REAL",
        DoublePrecision => "DOUBLE PRECISION",
        DecFloat => "DECFLOAT",
        SmallSerial => "SMALLSERIAL",
        Serial => "SERIAL",
        BigSerial => "BIGSERIAL",
    }
}

/// A numeric type with optional precision and scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericType {
    /// Type name.
    pub kind: NumericKind,
    /// Precision.
    pub precision: Option<u64>,
    /// Scale, written only with a precision.
    pub scale: Option<u64>,
}

impl NumericType {
    /// Creates a numeric type without precision.
    #[must_use]
    pub const fn new(kind: NumericKind) -> Self {
        Self {
            kind,
            precision: None,
            scale: None,
        }
    }

    /// `NUMERIC(p, s)`
    #[must_use]
    pub const fn numeric(precision: u64, scale: u64) -> Self {
        Self::new(NumericKind::Numeric)
            .precision(precision)
            .scale(scale)
    }

    /// `DECIMAL(p, s)`
    #[must_use]
    pub const fn decimal(precision: u64, scale: u64) -> Self {
        Self::new(NumericKind::Decimal)
            .precision(precision)
            .scale(scale)
    }

    /// `FLOAT(p)`
    #[must_use]
    pub const fn float(precision: u64) -> Self {
        Self::new(NumericKind::Float).precision(precision)
    }

    /// `REAL`
    #[must_use]
    pub const fn real() -> Self {
        Self::new(NumericKind::Real)
    }

    /// `DOUBLE PRECISION`
    #[must_use]
    pub const fn double_precision() -> Self {
        Self::new(NumericKind::DoublePrecision)
    }

    /// Sets the precision.
    #[must_use]
    pub const fn precision(mut self, precision: u64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the scale.
    #[must_use]
    pub const fn scale(mut self, scale: u64) -> Self {
        self.scale = Some(scale);
        self
    }
}

impl Node for NumericType {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.kind.accept(r);
        if let Some(precision) = self.precision {
            r.token('(').uint(precision);
            if let Some(scale) = self.scale {
                r.sep().ws().uint(scale);
            }
            r.token(')');
        }
        r
    }
}

keyword_enum! {
    /// Integer types.
    pub enum IntType {
        TinyInt => "TINYINT",
        SmallInt => "SMALLINT",
        MediumInt => "MEDIUMINT",
        Int => "INT",
        Integer => "INTEGER",
        BigInt => "BIGINT",
    }
}

keyword_enum! {
    /// Boolean types.
    pub enum BoolType {
        Boolean => "BOOLEAN",
        Bit => "BIT",
    }
}

keyword_enum! {
    /// Date and time type names.
    pub enum DateTimeKind {
        Date => "DATE",
        SmallDateTime => "SMALLDATETIME",
        DateTime => "DATETIME",
        DateTime2 => "DATETIME2",
        Year => "YEAR",
        Time => "TIME",
        Timestamp => "TIMESTAMP",
    }
}

/// A date or time type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeType {
    /// Type name.
    pub kind: DateTimeKind,
    /// Fractional seconds precision.
    pub precision: Option<u64>,
    /// `WITH TIME ZONE` (true) or `WITHOUT TIME ZONE` (false).
    pub time_zone: Option<bool>,
}

impl DateTimeType {
    /// Creates a date-time type.
    #[must_use]
    pub const fn new(kind: DateTimeKind) -> Self {
        Self {
            kind,
            precision: None,
            time_zone: None,
        }
    }

    /// `DATE`
    #[must_use]
    pub const fn date() -> Self {
        Self::new(DateTimeKind::Date)
    }

    /// `TIME`
    #[must_use]
    pub const fn time() -> Self {
        Self::new(DateTimeKind::Time)
    }

    /// `TIMESTAMP`
    #[must_use]
    pub const fn timestamp() -> Self {
        Self::new(DateTimeKind::Timestamp)
    }

    /// `DATETIME2`
    #[must_use]
    pub const fn datetime2() -> Self {
        Self::new(DateTimeKind::DateTime2)
    }

    /// Sets the fractional seconds precision.
    #[must_use]
    pub const fn precision(mut self, precision: u64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Adds `WITH TIME ZONE`.
    #[must_use]
    pub const fn with_time_zone(mut self) -> Self {
        self.time_zone = Some(true);
        self
    }

    /// Adds `WITHOUT TIME ZONE`.
    #[must_use]
    pub const fn without_time_zone(mut self) -> Self {
        self.time_zone = Some(false);
        self
    }
}

impl Node for DateTimeType {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.kind.accept(r);
        write_length(r, self.precision);
        match self.time_zone {
            Some(true) => r.ws().keyword("WITH TIME ZONE"),
            Some(false) => r.ws().keyword("WITHOUT TIME ZONE"),
            None => r,
        }
    }
}

keyword_enum! {
    /// Fields of an interval qualifier.
    pub enum FieldKind {
        Year => "YEAR",
        Month => "MONTH",
        Week => "WEEK",
        Day => "DAY",
        Hour => "HOUR",
        Minute => "MINUTE",
        Second => "SECOND",
        Millisecond => "MILLISECOND",
        Microsecond => "MICROSECOND",
    }
}

/// A date-time field with optional precision, e.g. `DAY(3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeField {
    /// Field.
    pub kind: FieldKind,
    /// Leading field precision.
    pub precision: Option<u64>,
}

macro_rules! field_ctor {
    ($($fn:ident => $kind:ident),+) => {$(
        #[doc = concat!("The `", stringify!($kind), "` field.")]
        #[must_use]
        pub const fn $fn() -> Self {
            Self::new(FieldKind::$kind)
        }
    )+};
}

impl DateTimeField {
    /// Creates a field without precision.
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            precision: None,
        }
    }

    field_ctor!(
        year => Year,
        month => Month,
        day => Day,
        hour => Hour,
        minute => Minute,
        second => Second
    );

    /// Sets the precision.
    #[must_use]
    pub const fn precision(mut self, precision: u64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// `INTERVAL self TO end`
    #[must_use]
    pub const fn to(self, end: Self) -> IntervalType {
        IntervalType {
            start: self,
            end: Some(end),
        }
    }
}

impl Node for DateTimeField {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.kind.accept(r);
        write_length(r, self.precision);
        r
    }
}

impl From<FieldKind> for DateTimeField {
    fn from(kind: FieldKind) -> Self {
        Self::new(kind)
    }
}

/// `INTERVAL start [TO end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalType {
    /// Leading field.
    pub start: DateTimeField,
    /// Trailing field.
    pub end: Option<DateTimeField>,
}

impl IntervalType {
    /// `INTERVAL start TO end`
    #[must_use]
    pub fn new(start: impl Into<DateTimeField>, end: impl Into<DateTimeField>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
        }
    }

    /// `INTERVAL field`
    #[must_use]
    pub fn single(field: impl Into<DateTimeField>) -> Self {
        Self {
            start: field.into(),
            end: None,
        }
    }
}

impl Node for IntervalType {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("INTERVAL").ws();
        self.start.accept(r).visit(&[&Ws, &Keyword("TO"), &Ws, &self.end])
    }
}

/// `element ARRAY[capacity]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    /// Element type.
    pub element: Box<DataType>,
    /// Maximum cardinality.
    pub capacity: Option<u64>,
}

impl ArrayType {
    /// Sets the maximum cardinality.
    #[must_use]
    pub const fn capacity(mut self, capacity: u64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Wraps this array type in another array.
    #[must_use]
    pub fn array(self) -> Self {
        DataType::Array(self).array()
    }
}

impl Node for ArrayType {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.element.accept(r).ws().keyword("ARRAY");
        r.bracket(&[&self.capacity.map(Uint)])
    }
}

/// A field of a row type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDef {
    /// Field name.
    pub name: Ident,
    /// Field type.
    pub ty: DataType,
}

impl FieldDef {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<Ident>, ty: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Node for FieldDef {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.name.accept(r).ws();
        self.ty.accept(r)
    }
}

/// `ROW (field type, ...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowType {
    /// Fields.
    pub fields: Vec<FieldDef>,
}

impl RowType {
    /// Creates a row type.
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = FieldDef>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }
}

impl Node for RowType {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("ROW")
            .ws()
            .token('(')
            .require("ROW type", "field", &self.fields)
            .token(')')
    }
}

/// Any data type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Character string.
    Char(CharType),
    /// Binary string.
    Binary(BinaryType),
    /// Exact or approximate numeric.
    Numeric(NumericType),
    /// Integer.
    Int(IntType),
    /// Boolean.
    Bool(BoolType),
    /// Date or time.
    DateTime(DateTimeType),
    /// Interval.
    Interval(IntervalType),
    /// Array.
    Array(ArrayType),
    /// `type MULTISET`
    Multiset(Box<DataType>),
    /// Row.
    Row(RowType),
    /// User-defined type or domain.
    UserDefined(SchemaQualifiedName),
}

impl DataType {
    /// `self ARRAY[]`
    #[must_use]
    pub fn array(self) -> ArrayType {
        ArrayType {
            element: Box::new(self),
            capacity: None,
        }
    }

    /// `self MULTISET`
    #[must_use]
    pub fn multiset(self) -> Self {
        Self::Multiset(Box::new(self))
    }

    /// A user-defined type.
    #[must_use]
    pub fn user_defined(name: impl Into<SchemaQualifiedName>) -> Self {
        Self::UserDefined(name.into())
    }
}

impl Node for DataType {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Char(t) => t.accept(r),
            Self::Binary(t) => t.accept(r),
            Self::Numeric(t) => t.accept(r),
            Self::Int(t) => t.accept(r),
            Self::Bool(t) => t.accept(r),
            Self::DateTime(t) => t.accept(r),
            Self::Interval(t) => t.accept(r),
            Self::Array(t) => t.accept(r),
            Self::Multiset(t) => t.accept(r).ws().keyword("MULTISET"),
            Self::Row(t) => t.accept(r),
            Self::UserDefined(name) => name.accept(r),
        }
    }
}

macro_rules! data_type_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl From<$ty> for DataType {
            fn from(t: $ty) -> Self {
                Self::$variant(t)
            }
        }
    )+};
}

data_type_from!(
    CharType => Char,
    BinaryType => Binary,
    NumericType => Numeric,
    IntType => Int,
    BoolType => Bool,
    DateTimeType => DateTime,
    IntervalType => Interval,
    ArrayType => Array,
    RowType => Row,
    SchemaQualifiedName => UserDefined,
);

impl_display!(
    Collate,
    CharKind,
    CharUnit,
    CharType,
    BinaryKind,
    BinaryType,
    NumericKind,
    NumericType,
    IntType,
    BoolType,
    DateTimeKind,
    DateTimeType,
    FieldKind,
    DateTimeField,
    IntervalType,
    ArrayType,
    FieldDef,
    RowType,
    DataType,
);
