//! Artifacts emitted by plugins after rendering.

use std::path::PathBuf;

/// File synthesized by a plugin whose path is resolved against the
/// configuration: package chunks plus a relative file name.
#[derive(Clone, Debug)]
pub struct DerivedFile {
    pub package: Vec<String>,
    pub file_name: String,
    pub body: String,
}

/// File synthesized by a plugin that already carries its final path.
#[derive(Clone, Debug)]
pub struct GeneratedFile {
    pub file_name: PathBuf,
    pub body: String,
}

/// Tagged plugin output. Derived files flow through package mapping; free-form
/// files pass straight to conflict resolution.
#[derive(Clone, Debug)]
pub enum GeneratedArtifact {
    Derived(DerivedFile),
    File(GeneratedFile),
}
