//! `GROUP BY` grouping elements.

use xql_core::{Node, Renderer};

use super::SetQuantifier;
use crate::name::ColumnRef;

/// One element of a `GROUP BY` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingElement {
    /// A column, or a parenthesized set of columns.
    Ordinary(Vec<ColumnRef>),
    /// `ROLLUP (columns)`
    Rollup(Vec<ColumnRef>),
    /// `CUBE (columns)`
    Cube(Vec<ColumnRef>),
    /// `GROUPING SETS (elements)`
    Sets(Vec<GroupingElement>),
    /// `()`
    Empty,
}

fn columns<I, C>(cols: I) -> Vec<ColumnRef>
where
    I: IntoIterator<Item = C>,
    C: Into<ColumnRef>,
{
    cols.into_iter().map(Into::into).collect()
}

impl GroupingElement {
    /// A single grouping column.
    #[must_use]
    pub fn column(col: impl Into<ColumnRef>) -> Self {
        Self::Ordinary(vec![col.into()])
    }

    /// A parenthesized set of columns.
    #[must_use]
    pub fn set<I, C>(cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnRef>,
    {
        Self::Ordinary(columns(cols))
    }

    /// `ROLLUP (columns)`
    #[must_use]
    pub fn rollup<I, C>(cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnRef>,
    {
        Self::Rollup(columns(cols))
    }

    /// `CUBE (columns)`
    #[must_use]
    pub fn cube<I, C>(cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnRef>,
    {
        Self::Cube(columns(cols))
    }

    /// `GROUPING SETS (elements)`
    #[must_use]
    pub fn grouping_sets(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Sets(elements.into_iter().collect())
    }
}

impl Node for GroupingElement {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::Ordinary(cols) if cols.len() == 1 => r.visit(&[cols]),
            Self::Ordinary(cols) => {
                r.token('(');
                r.require("grouping set", "column", cols).token(')')
            }
            Self::Rollup(cols) => {
                r.keyword("ROLLUP").ws().token('(');
                r.require("ROLLUP", "column", cols).token(')')
            }
            Self::Cube(cols) => {
                r.keyword("CUBE").ws().token('(');
                r.require("CUBE", "column", cols).token(')')
            }
            Self::Sets(elements) => {
                r.keyword("GROUPING SETS").ws().token('(');
                r.require("GROUPING SETS", "grouping element", elements)
                    .token(')')
            }
            Self::Empty => r.token('(').token(')'),
        }
    }
}

impl From<&'static str> for GroupingElement {
    fn from(col: &'static str) -> Self {
        Self::column(col)
    }
}

impl From<ColumnRef> for GroupingElement {
    fn from(col: ColumnRef) -> Self {
        Self::column(col)
    }
}

/// `GROUP BY [ALL|DISTINCT] elements`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBy {
    /// Set quantifier.
    pub quantifier: Option<SetQuantifier>,
    /// Grouping elements.
    pub elements: Vec<GroupingElement>,
}

impl GroupBy {
    /// Creates a `GROUP BY` clause.
    #[must_use]
    pub fn new<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<GroupingElement>,
    {
        Self {
            quantifier: None,
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// `GROUP BY DISTINCT`
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.quantifier = Some(SetQuantifier::Distinct);
        self
    }
}

impl Node for GroupBy {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("GROUP BY").ws();
        if let Some(quantifier) = self.quantifier {
            quantifier.accept(r).ws();
        }
        r.require("GROUP BY", "grouping element", &self.elements)
    }
}

impl_display!(GroupBy, GroupingElement);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_elements() {
        assert_eq!(GroupBy::new(["a", "b"]).to_string(), "GROUP BY a, b");
        assert_eq!(
            GroupBy::new([GroupingElement::set(["a", "b"]), GroupingElement::Empty]).to_string(),
            "GROUP BY (a, b), ()"
        );
    }

    #[test]
    fn test_rollup_cube_sets() {
        assert_eq!(
            GroupingElement::rollup(["a", "b"]).to_string(),
            "ROLLUP (a, b)"
        );
        assert_eq!(GroupingElement::cube(["a"]).to_string(), "CUBE (a)");
        assert_eq!(
            GroupingElement::grouping_sets([
                GroupingElement::column("brand"),
                GroupingElement::column("size"),
                GroupingElement::Empty,
            ])
            .to_string(),
            "GROUPING SETS (brand, size, ())"
        );
    }

    #[test]
    fn test_distinct() {
        assert_eq!(
            GroupBy::new([GroupingElement::rollup(["a"])])
                .distinct()
                .to_string(),
            "GROUP BY DISTINCT ROLLUP (a)"
        );
    }

    #[test]
    fn test_empty_group_by_fails() {
        let empty = GroupBy::new(Vec::<GroupingElement>::new());
        assert!(crate::ToSql::to_sql(&empty).is_err());
    }
}
