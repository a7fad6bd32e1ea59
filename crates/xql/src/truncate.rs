//! `TRUNCATE TABLE`.

use xql_core::primitives::Ws;
use xql_core::{Node, RenderError, Renderer};

use crate::name::TableName;
use crate::types::keyword_enum;

keyword_enum! {
    /// What happens to identity sequences of truncated tables.
    pub enum IdentityRestart {
        Continue => "CONTINUE IDENTITY",
        Restart => "RESTART IDENTITY",
    }
}

keyword_enum! {
    /// How dependent tables are treated.
    pub enum DropBehavior {
        Cascade => "CASCADE",
        Restrict => "RESTRICT",
    }
}

/// `TRUNCATE TABLE t, ... [identity] [behavior]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Truncate {
    /// Tables to empty. Must not be empty.
    pub tables: Vec<TableName>,
    /// Identity handling.
    pub identity: Option<IdentityRestart>,
    /// Drop behavior.
    pub behavior: Option<DropBehavior>,
}

impl Truncate {
    /// Truncates `tables`.
    #[must_use]
    pub fn new<I, T>(tables: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TableName>,
    {
        Self {
            tables: tables.into_iter().map(Into::into).collect(),
            identity: None,
            behavior: None,
        }
    }

    /// Truncates a single table.
    #[must_use]
    pub fn table(table: impl Into<TableName>) -> Self {
        Self::new([table.into()])
    }

    /// `CONTINUE IDENTITY`
    #[must_use]
    pub const fn continue_identity(mut self) -> Self {
        self.identity = Some(IdentityRestart::Continue);
        self
    }

    /// `RESTART IDENTITY`
    #[must_use]
    pub const fn restart_identity(mut self) -> Self {
        self.identity = Some(IdentityRestart::Restart);
        self
    }

    /// `CASCADE`
    #[must_use]
    pub const fn cascade(mut self) -> Self {
        self.behavior = Some(DropBehavior::Cascade);
        self
    }

    /// `RESTRICT`
    #[must_use]
    pub const fn restrict(mut self) -> Self {
        self.behavior = Some(DropBehavior::Restrict);
        self
    }
}

impl Node for Truncate {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        if self.tables.is_empty() {
            return r.fail(RenderError::missing("TRUNCATE", "table"));
        }
        r.keyword("TRUNCATE TABLE")
            .ws()
            .list(&self.tables)
            .visit(&[&Ws, &self.identity])
            .visit(&[&Ws, &self.behavior])
    }
}

impl_display!(IdentityRestart, DropBehavior, Truncate);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(Truncate::table("bigtable").to_string(), "TRUNCATE TABLE bigtable");
        assert_eq!(
            Truncate::new(["bigtable", "fattable"]).to_string(),
            "TRUNCATE TABLE bigtable, fattable"
        );
        assert_eq!(
            Truncate::new(["bigtable", "fattable"])
                .restart_identity()
                .to_string(),
            "TRUNCATE TABLE bigtable, fattable RESTART IDENTITY"
        );
    }

    #[test]
    fn test_drop_behavior() {
        assert_eq!(
            Truncate::table("othertable").cascade().to_string(),
            "TRUNCATE TABLE othertable CASCADE"
        );
        assert_eq!(
            Truncate::table("t")
                .continue_identity()
                .restrict()
                .to_string(),
            "TRUNCATE TABLE t CONTINUE IDENTITY RESTRICT"
        );
    }

    #[test]
    fn test_truncate_without_tables_fails() {
        let err = xql_core::render(&Truncate::new(Vec::<TableName>::new())).unwrap_err();
        assert_eq!(err, RenderError::missing("TRUNCATE", "table"));
    }
}
