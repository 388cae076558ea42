//! Configured import injection.

use std::path::Path;

use crate::base::glob_to_regex;
use crate::config::Configuration;
use crate::error::GenerateError;

/// Import lines for one output file, from the `importInjector` table.
///
/// Keys are glob patterns matched against the relative output path; values
/// are fully qualified names emitted as `import` statements. All matching
/// entries contribute, in table order.
pub fn generate_imports(
    output_file_name: &Path,
    configuration: &Configuration,
) -> Result<String, GenerateError> {
    let path = output_file_name.to_string_lossy();
    let mut imports = Vec::new();

    for (pattern, names) in &configuration.import_injector {
        let regex = regex::Regex::new(&glob_to_regex(pattern))
            .map_err(|source| GenerateError::pattern(pattern, source))?;
        if regex.is_match(&path) {
            imports.extend(names.iter().map(|name| format!("import {name}")));
        }
    }

    Ok(imports.join("\n"))
}
