//! Per-source-unit structure items.

use super::StructureItem;
use super::package::{
    apply_module_name_mapper, apply_package_name_mapper, dir_name_to_package, library_name_to_dir,
};
use crate::base::snake_to_camel_case;
use crate::config::Configuration;

/// Source-unit path relative to the matching input root, without the
/// declaration-file extension.
pub fn relative_source_path(unit_name: &str, configuration: &Configuration) -> String {
    let relative = configuration
        .input_roots
        .iter()
        .find_map(|root| {
            let stripped = unit_name.strip_prefix(root.as_str())?;
            Some(stripped.trim_start_matches('/'))
        })
        .unwrap_or(unit_name);

    relative
        .strip_suffix(".d.ts")
        .or_else(|| relative.strip_suffix(".d.mts"))
        .or_else(|| relative.strip_suffix(".ts"))
        .unwrap_or(relative)
        .to_string()
}

/// Structure item for one source unit under file granularity.
///
/// The package is the library directory plus the unit's relative directory
/// plus its file stem; the module name is `<libraryName>/<relativePath>` after
/// the module-name mapper.
pub fn create_source_file_info_item(
    unit_name: &str,
    configuration: &Configuration,
) -> StructureItem {
    let relative = relative_source_path(unit_name, configuration);

    let module_name = apply_module_name_mapper(
        &format!("{}/{relative}", configuration.library_name),
        configuration,
    );

    let library_dir = library_name_to_dir(&configuration.library_name);
    let mut segments = dir_name_to_package(&library_dir);
    segments.extend(
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(snake_to_camel_case),
    );

    let file_stem = segments.pop().unwrap_or_else(|| "index".to_string());
    let (package, file_name) =
        apply_package_name_mapper(&segments, &format!("{file_stem}.kt"), configuration);

    StructureItem {
        package,
        file_name,
        module_name,
        qualifier: None,
        has_runtime: true,
        statements: Vec::new(),
    }
}
