//! Output-path conflict resolution.
//!
//! Multiple artifacts may resolve to the same output path: a target file plus
//! hoisted declarations derived from the same source unit, or several
//! plugin-generated files. Collisions are never an error; bodies merge with a
//! blank line in discovery order (targets first, then derived, then
//! generated), and the target file's header envelope wraps the merged body.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::StructureItem;
use super::package::package_to_output_file_name;
use super::target_file::create_target_file;
use crate::config::Configuration;
use crate::converter::generated::{DerivedFile, GeneratedFile};
use crate::error::GenerateError;

/// A rendered structure item, before headers are attached.
#[derive(Clone, Debug)]
pub struct TargetFile {
    pub item: StructureItem,
    pub body: String,
}

/// One file ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    pub file_name: PathBuf,
    pub body: String,
}

enum Envelope {
    /// Merged body goes through [`create_target_file`].
    Target(StructureItem, String),
    /// Body is already complete text.
    Plain(String),
}

impl Envelope {
    fn append(&mut self, body: &str) {
        let existing = match self {
            Envelope::Target(_, existing) => existing,
            Envelope::Plain(existing) => existing,
        };
        existing.push_str("\n\n");
        existing.push_str(body);
    }
}

/// Merge all artifacts of a run by output path.
pub fn resolve_conflicts(
    target_files: Vec<TargetFile>,
    derived_files: Vec<DerivedFile>,
    generated_files: Vec<GeneratedFile>,
    configuration: &Configuration,
) -> Result<Vec<OutputFile>, GenerateError> {
    let output = Path::new(&configuration.output);
    let mut merged: IndexMap<PathBuf, Envelope> = IndexMap::new();

    for target in target_files {
        let path = output.join(package_to_output_file_name(
            &target.item.package,
            &target.item.file_name,
            configuration,
        ));
        match merged.get_mut(&path) {
            Some(envelope) => envelope.append(&target.body),
            None => {
                merged.insert(path, Envelope::Target(target.item, target.body));
            }
        }
    }

    for derived in derived_files {
        let path = output.join(package_to_output_file_name(
            &derived.package,
            &derived.file_name,
            configuration,
        ));
        match merged.get_mut(&path) {
            Some(envelope) => envelope.append(&derived.body),
            None => {
                merged.insert(path, Envelope::Plain(derived.body));
            }
        }
    }

    for generated in generated_files {
        let path = if generated.file_name.is_absolute() {
            generated.file_name
        } else {
            output.join(generated.file_name)
        };
        match merged.get_mut(&path) {
            Some(envelope) => envelope.append(&generated.body),
            None => {
                merged.insert(path, Envelope::Plain(generated.body));
            }
        }
    }

    merged
        .into_iter()
        .map(|(file_name, envelope)| {
            let body = match envelope {
                Envelope::Target(item, body) => create_target_file(&item, &body, configuration)?,
                Envelope::Plain(body) => body,
            };
            Ok(OutputFile { file_name, body })
        })
        .collect()
}
