//! Bundle-granularity structure item.

use super::StructureItem;
use super::package::{dir_name_to_package, library_name_to_dir};
use crate::base::common_prefix;
use crate::config::Configuration;

/// Single container for the whole input set.
///
/// The package is the longest common prefix of the per-unit packages so the
/// bundle lands beside the files it replaces; when no units share a prefix it
/// falls back to the library directory. A bundle has no single originating
/// module, so it carries no runtime binding.
pub fn create_bundle_info_item(
    packages: &[Vec<String>],
    configuration: &Configuration,
) -> StructureItem {
    let mut package = common_prefix(packages);
    if package.is_empty() {
        package = dir_name_to_package(&library_name_to_dir(&configuration.library_name));
    }

    let file_name = configuration
        .output_file_name
        .clone()
        .unwrap_or_else(|| "index.kt".to_string());

    StructureItem {
        package,
        file_name,
        module_name: configuration.library_name.clone(),
        qualifier: None,
        has_runtime: false,
        statements: Vec::new(),
    }
}
