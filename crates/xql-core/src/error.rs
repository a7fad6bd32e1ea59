//! Error types for rendering.

/// Errors raised while rendering a node tree.
///
/// A well-formed tree never produces one of these. They signal a tree whose
/// shape violates the contract of one of its nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A node requires a child that is absent.
    #[error("{node}: required {child} is absent")]
    MissingChild {
        /// Kind of the node that failed.
        node: &'static str,
        /// Name of the missing child.
        child: &'static str,
    },

    /// A node's fields are inconsistent with each other.
    #[error("{node}: {reason}")]
    Invalid {
        /// Kind of the node that failed.
        node: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl RenderError {
    /// Creates a [`RenderError::MissingChild`].
    #[must_use]
    pub const fn missing(node: &'static str, child: &'static str) -> Self {
        Self::MissingChild { node, child }
    }

    /// Creates a [`RenderError::Invalid`].
    #[must_use]
    pub fn invalid(node: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            node,
            reason: reason.into(),
        }
    }

    /// Returns the kind of node that failed.
    #[must_use]
    pub const fn node(&self) -> &'static str {
        match self {
            Self::MissingChild { node, .. } | Self::Invalid { node, .. } => node,
        }
    }
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_node() {
        let err = RenderError::missing("UPDATE", "SET list");
        assert_eq!(err.to_string(), "UPDATE: required SET list is absent");
        assert_eq!(err.node(), "UPDATE");

        let err = RenderError::invalid("INSERT", "row 2 has 3 values, expected 2");
        assert_eq!(err.to_string(), "INSERT: row 2 has 3 values, expected 2");
        assert_eq!(err.node(), "INSERT");
    }
}
