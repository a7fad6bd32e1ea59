#![allow(dead_code)]

use xql_core::{render, render_with, Node, RenderConfig};

pub fn sql<N: Node + ?Sized>(node: &N) -> String {
    render(node).unwrap_or_else(|e| panic!("Failed to render: {e}"))
}

pub fn sql_with<N: Node + ?Sized>(node: &N, config: RenderConfig) -> String {
    render_with(node, config).unwrap_or_else(|e| panic!("Failed to render: {e}"))
}

/// Strips every formatting character so outputs under different
/// configurations can be compared for content.
pub fn content(text: &str, config: RenderConfig) -> String {
    text.chars()
        .filter(|&c| c != config.whitespace && c != config.separator)
        .collect()
}
