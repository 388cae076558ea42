//! # ktdecl
//!
//! Core library for converting TypeScript declaration trees into Kotlin/JS
//! external declarations.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generate   → Run orchestration: phases, output writing
//!   ↓
//! structure  → Output planning: granularity, packages, conflict merging
//!   ↓
//! converter  → Plugin pipeline: context, render chain, hoisting, expansion
//!   ↓
//! syntax     → Declaration tree: kinds, flags, builder, type classification
//!   ↓
//! config     → Configuration shape and defaulting
//!   ↓
//! base       → Primitives (string transforms, globs, reserved words)
//! ```

// ============================================================================
// MODULES (dependency order: base → config → syntax → converter → structure →
// generate)
// ============================================================================

/// Foundation utilities: string transforms, glob translation, keyword table
pub mod base;

/// Configuration surface and defaulting
pub mod config;

/// Declaration-tree boundary with the TypeScript front end
pub mod syntax;

/// Conversion pipeline: plugins, services, render chain
pub mod converter;

/// Output-structure resolution and conflict merging
pub mod structure;

/// Run orchestration and file writing
pub mod generate;

/// Error taxonomy for a generation run
pub mod error;

// Re-export the run entry points
pub use generate::{Extensions, convert, generate};

// Re-export commonly needed items
pub use config::{Configuration, Granularity, NamespaceStrategy};
pub use converter::{ConverterContext, ConverterPlugin, Render, create_simple_plugin};
pub use error::GenerateError;
pub use structure::{OutputFile, StructureItem};
pub use syntax::{NodeFlags, NodeId, NodeKind, NodeRef, SyntaxTree, TreeBuilder};
