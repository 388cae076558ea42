//! Configuration surface.
//!
//! Loading is external; this module defines the shape and applies defaults.
//! Mapper tables are ordered: the first matching rule wins, so they are kept
//! in [`IndexMap`]s rather than hash maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::base::common_prefix;
use crate::error::GenerateError;

/// Policy for how declarations are grouped into output files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    /// All declarations collapse into a single container.
    Bundle,
    /// One container per source unit.
    #[default]
    File,
    /// One container per top-level declaration name.
    TopLevel,
}

/// Conversion strategy for a TypeScript namespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamespaceStrategy {
    /// Drop the namespace and everything in it.
    Ignore,
    /// Render as an `external object`.
    #[default]
    Object,
    /// Treat as a nested source unit with its own package suffix.
    Package,
}

/// Full generation configuration, after defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// Directories source-unit paths are made relative to. Defaulted to the
    /// common non-glob prefix of `input` when empty.
    pub input_roots: Vec<String>,

    /// Include glob patterns, first-match-wins per file. Matching itself is an
    /// external concern; the patterns feed input-root inference here.
    pub input: Vec<String>,
    pub ignore_input: Vec<String>,

    /// Output directory. A value ending in `.kt` selects single-file output
    /// and populates `output_file_name`.
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file_name: Option<String>,
    pub ignore_output: Vec<String>,

    pub library_name: String,
    pub library_name_output_prefix: bool,

    pub granularity: Granularity,

    /// Ordered pattern → replacement rules applied to module names.
    pub module_name_mapper: IndexMap<String, String>,
    /// Ordered pattern → replacement rules applied to package paths.
    pub package_name_mapper: IndexMap<String, String>,

    /// Output-path pattern → fully-qualified names to import.
    pub import_injector: IndexMap<String, Vec<String>>,

    /// Namespace-name pattern → conversion strategy.
    pub namespace_strategy: IndexMap<String, NamespaceStrategy>,

    pub verbose: bool,
    pub cwd: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            input_roots: Vec::new(),
            input: Vec::new(),
            ignore_input: Vec::new(),
            output: String::new(),
            output_file_name: None,
            ignore_output: Vec::new(),
            library_name: String::new(),
            library_name_output_prefix: true,
            granularity: Granularity::default(),
            module_name_mapper: IndexMap::new(),
            package_name_mapper: IndexMap::new(),
            import_injector: IndexMap::new(),
            namespace_strategy: IndexMap::new(),
            verbose: false,
            cwd: String::new(),
        }
    }
}

impl Configuration {
    /// Apply defaults and validate required fields.
    ///
    /// Idempotent: defaultizing an already-defaultized configuration is a
    /// no-op.
    pub fn defaultize(mut self) -> Result<Configuration, GenerateError> {
        if self.output.is_empty() {
            return Err(GenerateError::configuration("`output` is required"));
        }

        if self.output.ends_with(".kt") && self.output_file_name.is_none() {
            let path = std::path::Path::new(&self.output);
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("index.kt")
                .to_string();
            self.output_file_name = Some(file_name);
            self.output = path
                .parent()
                .and_then(|parent| parent.to_str())
                .filter(|parent| !parent.is_empty())
                .unwrap_or(".")
                .to_string();
            self.granularity = Granularity::Bundle;
        }

        if self.input_roots.is_empty() {
            self.input_roots = infer_input_roots(&self.input);
        }

        if self.cwd.is_empty() {
            self.cwd = ".".to_string();
        }

        Ok(self)
    }
}

/// Derive input roots from the non-glob prefixes of the input patterns.
fn infer_input_roots(input: &[String]) -> Vec<String> {
    let prefixes: Vec<Vec<String>> = input
        .iter()
        .map(|pattern| {
            pattern
                .split('/')
                .take_while(|segment| !segment.contains(['*', '?']))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|mut segments: Vec<String>| {
            // the last non-glob segment of a file pattern is the file itself
            if segments
                .last()
                .is_some_and(|segment| segment.contains('.'))
            {
                segments.pop();
            }
            segments
        })
        .collect();

    if prefixes.is_empty() {
        return Vec::new();
    }

    let prefix = common_prefix(&prefixes);
    if prefix.is_empty() {
        Vec::new()
    } else {
        vec![prefix.join("/")]
    }
}
