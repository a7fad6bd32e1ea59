//! Sequence generator options and identity columns.

use xql_core::primitives::Sep;
use xql_core::{Node, Renderer};

use crate::types::keyword_enum;

/// An option of a sequence generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceOption {
    /// `START WITH n`
    StartWith(i64),
    /// `INCREMENT BY n`
    IncrementBy(i64),
    /// `MAXVALUE n`, or `NO MAXVALUE` when `None`.
    MaxValue(Option<i64>),
    /// `MINVALUE n`, or `NO MINVALUE` when `None`.
    MinValue(Option<i64>),
    /// `CYCLE` or `NO CYCLE`.
    Cycle(bool),
}

impl Node for SequenceOption {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match *self {
            Self::StartWith(n) => r.keyword("START WITH").ws().int(n),
            Self::IncrementBy(n) => r.keyword("INCREMENT BY").ws().int(n),
            Self::MaxValue(Some(n)) => r.keyword("MAXVALUE").ws().int(n),
            Self::MaxValue(None) => r.keyword("NO MAXVALUE"),
            Self::MinValue(Some(n)) => r.keyword("MINVALUE").ws().int(n),
            Self::MinValue(None) => r.keyword("NO MINVALUE"),
            Self::Cycle(true) => r.keyword("CYCLE"),
            Self::Cycle(false) => r.keyword("NO CYCLE"),
        }
    }
}

keyword_enum! {
    /// When an identity value is generated.
    pub enum Generated {
        Always => "ALWAYS",
        ByDefault => "BY DEFAULT",
    }
}

/// `GENERATED {ALWAYS|BY DEFAULT} AS IDENTITY [(options)]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Generation rule.
    pub generated: Generated,
    /// Sequence generator options.
    pub options: Vec<SequenceOption>,
}

impl Identity {
    /// `GENERATED ALWAYS AS IDENTITY`
    #[must_use]
    pub const fn always() -> Self {
        Self {
            generated: Generated::Always,
            options: Vec::new(),
        }
    }

    /// `GENERATED BY DEFAULT AS IDENTITY`
    #[must_use]
    pub const fn by_default() -> Self {
        Self {
            generated: Generated::ByDefault,
            options: Vec::new(),
        }
    }

    /// Appends a sequence option.
    #[must_use]
    pub fn option(mut self, option: SequenceOption) -> Self {
        self.options.push(option);
        self
    }
}

impl Node for Identity {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("GENERATED").ws();
        self.generated.accept(r).ws().keyword("AS IDENTITY");
        if !self.options.is_empty() {
            r.ws().token('(').join(&self.options, &Sep).token(')');
        }
        r
    }
}

impl_display!(SequenceOption, Identity);
