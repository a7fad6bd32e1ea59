//! # xql-core
//!
//! The rendering engine behind `xql`: a structured SQL tree goes in,
//! deterministic and correctly escaped SQL text comes out.
//!
//! This crate provides:
//! - An identifier escaper that quotes names only when they need it
//! - The [`Node`] protocol every renderable construct implements
//! - A [`Renderer`] sink with guarded dispatch and composition primitives
//! - [`Either`], a value holding one of two shapes
//! - [`Opt`], the option-fold used by catalog constructors
//!
//! ## Rendering
//!
//! ```rust
//! use xql_core::primitives::{Ident, Keyword, Sep, Ws, bracket};
//! use xql_core::{node_fn, render};
//!
//! let node = node_fn(|r| {
//!     r.visit(&[&Keyword("SELECT"), &Ws, &Ident::new("a"), &Sep, &Ident::new("order by")]);
//! });
//! assert_eq!(render(&node).unwrap(), "SELECT a, `order by`");
//!
//! assert_eq!(render(&bracket(&[])).unwrap(), "[]");
//! ```
//!
//! ## Guarded dispatch
//!
//! A group is written only when all of its members are present:
//!
//! ```rust
//! use xql_core::primitives::{Keyword, Uint, Ws};
//! use xql_core::{node_fn, render};
//!
//! let limit: Option<Uint> = None;
//! let node = node_fn(|r| {
//!     r.keyword("SELECT *").visit(&[&Ws, &Keyword("LIMIT"), &Ws, &limit]);
//! });
//! assert_eq!(render(&node).unwrap(), "SELECT *");
//! ```

pub mod config;
pub mod dialect;
pub mod either;
pub mod error;
pub mod escape;
pub mod node;
pub mod opt;
pub mod primitives;
pub mod renderer;

pub use config::RenderConfig;
pub use dialect::{Dialect, GenericDialect, MySqlDialect, SqliteDialect};
pub use either::Either;
pub use error::{RenderError, Result};
pub use escape::{escape_identifier, needs_quoting, quote_string, unescape_identifier};
pub use node::{node_fn, Absent, Node, NodeFn};
pub use opt::{build, Opt};
pub use renderer::{render, render_with, Renderer};
