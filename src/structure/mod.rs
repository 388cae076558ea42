//! Output-structure resolution.
//!
//! Decides which logical declarations land in which physical output file:
//! source units are grouped into [`StructureItem`]s according to the
//! configured granularity, package paths and module names are computed from
//! the input layout, and artifacts that resolve to the same output path are
//! merged deterministically.

pub mod bundle;
pub mod conflicts;
pub mod derived;
pub mod imports;
pub mod namespace;
pub mod package;
pub mod prepare;
pub mod source_file;
pub mod target_file;

pub use conflicts::{OutputFile, TargetFile, resolve_conflicts};
pub use prepare::prepare_structure;
pub use target_file::{create_generated_file, create_target_file};

use crate::syntax::NodeId;

/// One planned output container, produced before any body text is rendered.
///
/// Immutable after creation; granularity variants copy rather than mutate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureItem {
    /// Target package path as raw (unescaped) segments.
    pub package: Vec<String>,
    /// Output file name within the package directory.
    pub file_name: String,
    /// Originating module name, used for the foreign-module binding header.
    pub module_name: String,
    /// Namespace qualifier, when the container came from a qualified scope.
    pub qualifier: Option<String>,
    /// Whether the container needs a `@file:JsModule` binding annotation.
    pub has_runtime: bool,
    /// Top-level statements destined for this container, in source order.
    pub statements: Vec<NodeId>,
}
