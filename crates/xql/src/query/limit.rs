//! `LIMIT`, `OFFSET` and `FETCH` clauses.

use xql_core::{Node, Renderer};

/// `ROW` or `ROWS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowsKeyword {
    /// `ROW`
    Row,
    /// `ROWS`
    Rows,
}

impl RowsKeyword {
    /// The keyword agreeing with `count`.
    #[must_use]
    pub const fn for_count(count: u64) -> Self {
        if count > 1 {
            Self::Rows
        } else {
            Self::Row
        }
    }

    const fn keyword(self) -> &'static str {
        match self {
            Self::Row => "ROW",
            Self::Rows => "ROWS",
        }
    }
}

/// `OFFSET n [ROW|ROWS]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Number of rows to skip.
    pub count: u64,
    /// Optional trailing keyword.
    pub suffix: Option<RowsKeyword>,
}

impl Offset {
    /// `OFFSET n`
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self {
            count,
            suffix: None,
        }
    }

    /// `OFFSET n ROWS`
    #[must_use]
    pub const fn rows(count: u64) -> Self {
        Self {
            count,
            suffix: Some(RowsKeyword::Rows),
        }
    }
}

impl Node for Offset {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("OFFSET").ws().uint(self.count);
        if let Some(suffix) = self.suffix {
            r.ws().keyword(suffix.keyword());
        }
        r
    }
}

impl From<u64> for Offset {
    fn from(count: u64) -> Self {
        Self::new(count)
    }
}

/// `FETCH NEXT n [PERCENT] ROW|ROWS ONLY|WITH TIES`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fetch {
    /// Number (or percentage) of rows.
    pub count: u64,
    /// Whether `count` is a percentage.
    pub percent: bool,
    /// Whether rows tied with the last one are kept.
    pub with_ties: bool,
}

impl Fetch {
    /// `FETCH NEXT n ROWS ONLY`
    #[must_use]
    pub const fn next(count: u64) -> Self {
        Self {
            count,
            percent: false,
            with_ties: false,
        }
    }

    /// Treats the count as a percentage.
    #[must_use]
    pub const fn percent(mut self) -> Self {
        self.percent = true;
        self
    }

    /// Keeps rows tied with the last one.
    #[must_use]
    pub const fn with_ties(mut self) -> Self {
        self.with_ties = true;
        self
    }
}

impl Node for Fetch {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("FETCH NEXT").ws().uint(self.count);
        if self.percent {
            r.ws().keyword("PERCENT");
        }
        r.ws()
            .keyword(RowsKeyword::for_count(self.count).keyword())
            .ws()
            .keyword(if self.with_ties { "WITH TIES" } else { "ONLY" })
    }
}

impl_display!(Offset, Fetch);
