//! Syntax-tree boundary with the TypeScript front end.
//!
//! The converter does not parse TypeScript itself: a standards-compliant front
//! end produces the declaration tree through [`TreeBuilder`], and the converter
//! only reads it. Per node the boundary supplies a kind discriminator, a parent
//! link (upward queries only), ordered children, an optional declared type, an
//! optional name identifier, modifier flags, and source-unit identity.
//!
//! [`NodeRef`] is the copyable accessor handle used everywhere downstream;
//! [`types`] holds the shallow type classification the pipeline relies on
//! (union flattening, nullable-arm and string-literal-union detection).

mod builder;
mod node;
mod tree;
pub mod types;

pub use builder::TreeBuilder;
pub use node::{NodeFlags, NodeId, NodeKind, SourceUnitId};
pub use tree::{NodeRef, SourceUnit, SyntaxTree};
