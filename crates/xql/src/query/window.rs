//! `WINDOW` clause definitions.

use xql_core::primitives::Ident;
use xql_core::{Node, RenderError, Renderer};

use super::SortKey;
use crate::expr::Expr;
use crate::name::ColumnRef;
use crate::types::keyword_enum;

keyword_enum! {
    /// Unit of a window frame.
    pub enum FrameUnits {
        Rows => "ROWS",
        Range => "RANGE",
        Groups => "GROUPS",
    }
}

keyword_enum! {
    /// Rows left out of a window frame.
    pub enum FrameExclusion {
        CurrentRow => "EXCLUDE CURRENT ROW",
        Group => "EXCLUDE GROUP",
        Ties => "EXCLUDE TIES",
        NoOthers => "EXCLUDE NO OTHERS",
    }
}

/// One end of a window frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameBound {
    /// `UNBOUNDED PRECEDING`
    UnboundedPreceding,
    /// `n PRECEDING`
    Preceding(Expr),
    /// `CURRENT ROW`
    CurrentRow,
    /// `n FOLLOWING`
    Following(Expr),
    /// `UNBOUNDED FOLLOWING`
    UnboundedFollowing,
}

impl Node for FrameBound {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        match self {
            Self::UnboundedPreceding => r.keyword("UNBOUNDED PRECEDING"),
            Self::Preceding(n) => n.accept(r).ws().keyword("PRECEDING"),
            Self::CurrentRow => r.keyword("CURRENT ROW"),
            Self::Following(n) => n.accept(r).ws().keyword("FOLLOWING"),
            Self::UnboundedFollowing => r.keyword("UNBOUNDED FOLLOWING"),
        }
    }
}

/// `units start` or `units BETWEEN start AND end`, then an optional exclusion.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    /// Frame unit.
    pub units: FrameUnits,
    /// Start bound.
    pub start: FrameBound,
    /// End bound. Present for `BETWEEN` frames.
    pub end: Option<FrameBound>,
    /// Exclusion.
    pub exclusion: Option<FrameExclusion>,
}

impl WindowFrame {
    /// `units start`
    #[must_use]
    pub const fn new(units: FrameUnits, start: FrameBound) -> Self {
        Self {
            units,
            start,
            end: None,
            exclusion: None,
        }
    }

    /// `units BETWEEN start AND end`
    #[must_use]
    pub const fn between(units: FrameUnits, start: FrameBound, end: FrameBound) -> Self {
        Self {
            units,
            start,
            end: Some(end),
            exclusion: None,
        }
    }

    /// Sets the exclusion.
    #[must_use]
    pub const fn exclude(mut self, exclusion: FrameExclusion) -> Self {
        self.exclusion = Some(exclusion);
        self
    }
}

impl Node for WindowFrame {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        if self.start == FrameBound::UnboundedFollowing {
            return r.fail(RenderError::invalid(
                "window frame",
                "a frame cannot start at UNBOUNDED FOLLOWING",
            ));
        }
        if self.end == Some(FrameBound::UnboundedPreceding) {
            return r.fail(RenderError::invalid(
                "window frame",
                "a frame cannot end at UNBOUNDED PRECEDING",
            ));
        }
        if self.end.is_none() && matches!(self.start, FrameBound::Following(_)) {
            return r.fail(RenderError::invalid(
                "window frame",
                "a frame without BETWEEN cannot start at a following row",
            ));
        }

        self.units.accept(r).ws();
        match &self.end {
            Some(end) => {
                r.keyword("BETWEEN").ws();
                self.start.accept(r).ws().keyword("AND").ws();
                end.accept(r)
            }
            None => self.start.accept(r),
        };
        if let Some(exclusion) = self.exclusion {
            exclusion.accept(r.ws());
        }
        r
    }
}

/// The body of a window definition: `[existing] [PARTITION BY ...] [ORDER BY ...] [frame]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowSpec {
    /// Window this one refines.
    pub existing: Option<Ident>,
    /// Partitioning columns.
    pub partition_by: Vec<ColumnRef>,
    /// Ordering inside each partition.
    pub order_by: Vec<SortKey>,
    /// Frame.
    pub frame: Option<WindowFrame>,
}

impl WindowSpec {
    /// An empty window: the whole result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refines an existing window.
    #[must_use]
    pub fn based_on(mut self, window: impl Into<Ident>) -> Self {
        self.existing = Some(window.into());
        self
    }

    /// `PARTITION BY columns`
    #[must_use]
    pub fn partition_by<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnRef>,
    {
        self.partition_by = columns.into_iter().map(Into::into).collect();
        self
    }

    /// `ORDER BY keys`
    #[must_use]
    pub fn order_by<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<SortKey>,
    {
        self.order_by = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the frame.
    #[must_use]
    pub fn frame(mut self, frame: WindowFrame) -> Self {
        self.frame = Some(frame);
        self
    }
}

impl Node for WindowSpec {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        let mut parts: Vec<&dyn Node> = Vec::new();
        if let Some(existing) = &self.existing {
            parts.push(existing);
        }
        let partition = Clause("PARTITION BY", &self.partition_by);
        if !self.partition_by.is_empty() {
            parts.push(&partition);
        }
        let order = Clause("ORDER BY", &self.order_by);
        if !self.order_by.is_empty() {
            parts.push(&order);
        }
        if let Some(frame) = &self.frame {
            parts.push(frame);
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                r.ws();
            }
            part.accept(r);
        }
        r
    }
}

/// `KEYWORD items`
struct Clause<'a, T>(&'static str, &'a [T]);

impl<T: Node> Node for Clause<'_, T> {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword(self.0).ws().list(self.1)
    }
}

/// `name AS (spec)`
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDef {
    /// Window name.
    pub name: Ident,
    /// Window body.
    pub spec: WindowSpec,
}

impl WindowDef {
    /// Declares the window `name`.
    #[must_use]
    pub fn new(name: impl Into<Ident>, spec: WindowSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

impl Node for WindowDef {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        self.name.accept(r).ws().keyword("AS").ws();
        r.token('(');
        self.spec.accept(r).token(')')
    }
}

impl_display!(FrameBound, WindowFrame, WindowSpec, WindowDef);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::col;

    #[test]
    fn test_window_definitions() {
        assert_eq!(WindowDef::new("w", WindowSpec::new()).to_string(), "w AS ()");
        assert_eq!(
            WindowDef::new(
                "w",
                WindowSpec::new()
                    .partition_by(["depname"])
                    .order_by([col("salary").desc()])
            )
            .to_string(),
            "w AS (PARTITION BY depname ORDER BY salary DESC)"
        );
        assert_eq!(
            WindowSpec::new().based_on("w").order_by([col("id")]).to_string(),
            "w ORDER BY id"
        );
    }

    #[test]
    fn test_frames() {
        assert_eq!(
            WindowFrame::new(FrameUnits::Rows, FrameBound::UnboundedPreceding).to_string(),
            "ROWS UNBOUNDED PRECEDING"
        );
        assert_eq!(
            WindowFrame::between(
                FrameUnits::Range,
                FrameBound::Preceding(Expr::from(3)),
                FrameBound::Following(Expr::from(1)),
            )
            .exclude(FrameExclusion::Ties)
            .to_string(),
            "RANGE BETWEEN 3 PRECEDING AND 1 FOLLOWING EXCLUDE TIES"
        );
        assert_eq!(
            WindowSpec::new()
                .order_by([col("id")])
                .frame(WindowFrame::between(
                    FrameUnits::Groups,
                    FrameBound::CurrentRow,
                    FrameBound::UnboundedFollowing,
                ))
                .to_string(),
            "ORDER BY id GROUPS BETWEEN CURRENT ROW AND UNBOUNDED FOLLOWING"
        );
    }

    #[test]
    fn test_impossible_frames_fail() {
        let frame = WindowFrame::new(FrameUnits::Rows, FrameBound::UnboundedFollowing);
        assert!(matches!(
            xql_core::render(&frame),
            Err(RenderError::Invalid { node: "window frame", .. })
        ));

        let frame = WindowFrame::between(
            FrameUnits::Rows,
            FrameBound::CurrentRow,
            FrameBound::UnboundedPreceding,
        );
        assert!(xql_core::render(&frame).is_err());

        let frame = WindowFrame::new(FrameUnits::Rows, FrameBound::Following(Expr::from(1)));
        assert!(xql_core::render(&frame).is_err());
    }
}
