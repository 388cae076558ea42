//! Package-path computation and mapping.
//!
//! A package is carried as raw path segments; reserved-word escaping happens
//! only when the dotted package name is printed, so mappers and output-path
//! logic always see the unescaped segments.

use std::path::PathBuf;

use crate::base::is_kotlin_keyword;
use crate::config::Configuration;

/// `@remix-run/router` → `remix/run/router`
pub fn library_name_to_dir(library_name: &str) -> String {
    library_name.replace(['-', '/'], "/").replace('@', "")
}

/// Split a directory path into package segments; `.` means the root package.
pub fn dir_name_to_package(dir_name: &str) -> Vec<String> {
    if dir_name == "." {
        return Vec::new();
    }
    dir_name
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Dotted package name with reserved words backtick-escaped.
pub fn create_package_name(package: &[String]) -> String {
    package
        .iter()
        .map(|segment| {
            if is_kotlin_keyword(segment) {
                format!("`{segment}`")
            } else {
                segment.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Relative output path for a package + file name. The library-name prefix is
/// part of the package but is dropped from the path when
/// `libraryNameOutputPrefix` is off.
pub fn package_to_output_file_name(
    package: &[String],
    file_name: &str,
    configuration: &Configuration,
) -> PathBuf {
    let mut segments: Vec<&str> = package.iter().map(String::as_str).collect();

    if !configuration.library_name_output_prefix {
        let library_dir = library_name_to_dir(&configuration.library_name);
        let prefix: Vec<&str> = library_dir.split('/').filter(|it| !it.is_empty()).collect();
        if !prefix.is_empty() && segments.starts_with(&prefix) {
            segments.drain(..prefix.len());
        }
    }

    let mut path = PathBuf::new();
    for segment in segments {
        path.push(segment);
    }
    path.push(file_name);
    path
}

/// Apply the ordered `packageNameMapper` table to a package + file name.
///
/// The first rule whose pattern occurs in the joined `package/fileStem` path
/// rewrites its literal occurrences; later rules are not consulted.
pub fn apply_package_name_mapper(
    package: &[String],
    file_name: &str,
    configuration: &Configuration,
) -> (Vec<String>, String) {
    if configuration.package_name_mapper.is_empty() {
        return (package.to_vec(), file_name.to_string());
    }

    let stem = file_name.strip_suffix(".kt").unwrap_or(file_name);
    let mut joined = package
        .iter()
        .map(String::as_str)
        .chain([stem])
        .collect::<Vec<_>>()
        .join("/");

    for (pattern, replacement) in &configuration.package_name_mapper {
        if joined.contains(pattern.as_str()) {
            joined = joined.replace(pattern.as_str(), replacement);
            break;
        }
    }

    let mut segments = dir_name_to_package(&joined);
    let mapped_stem = segments.pop().unwrap_or_else(|| stem.to_string());
    (segments, format!("{mapped_stem}.kt"))
}

/// Apply the ordered `moduleNameMapper` table to a module name. First
/// matching rule wins.
pub fn apply_module_name_mapper(module_name: &str, configuration: &Configuration) -> String {
    for (pattern, replacement) in &configuration.module_name_mapper {
        if module_name.contains(pattern.as_str()) {
            return module_name.replace(pattern.as_str(), replacement);
        }
    }
    module_name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration() -> Configuration {
        Configuration {
            library_name: "sandbox-base".to_string(),
            ..Configuration::default()
        }
    }

    #[test]
    fn scoped_library_names_flatten_to_directories() {
        assert_eq!(library_name_to_dir("@remix-run/router"), "remix/run/router");
        assert_eq!(library_name_to_dir("sandbox-base"), "sandbox/base");
    }

    #[test]
    fn keyword_segments_are_escaped_in_package_names() {
        let package = vec!["lib".to_string(), "fun".to_string(), "util".to_string()];
        assert_eq!(create_package_name(&package), "lib.`fun`.util");
    }

    #[test]
    fn output_path_drops_library_prefix_when_configured() {
        let package = vec![
            "sandbox".to_string(),
            "base".to_string(),
            "util".to_string(),
        ];

        let prefixed = package_to_output_file_name(&package, "index.kt", &configuration());
        assert_eq!(prefixed, PathBuf::from("sandbox/base/util/index.kt"));

        let mut stripped = configuration();
        stripped.library_name_output_prefix = false;
        let bare = package_to_output_file_name(&package, "index.kt", &stripped);
        assert_eq!(bare, PathBuf::from("util/index.kt"));
    }

    #[test]
    fn package_name_mapper_rewrites_segments() {
        let mut config = configuration();
        config
            .package_name_mapper
            .insert("internal".to_string(), "api".to_string());

        let package = vec!["sandbox".to_string(), "internal".to_string()];
        let (mapped, file_name) = apply_package_name_mapper(&package, "paths.kt", &config);
        assert_eq!(mapped, vec!["sandbox".to_string(), "api".to_string()]);
        assert_eq!(file_name, "paths.kt");
    }

    #[test]
    fn only_the_first_matching_package_rule_applies() {
        let mut config = configuration();
        config
            .package_name_mapper
            .insert("internal".to_string(), "api".to_string());
        config
            .package_name_mapper
            .insert("api".to_string(), "public".to_string());

        let package = vec!["lib".to_string(), "internal".to_string()];
        let (mapped, _) = apply_package_name_mapper(&package, "paths.kt", &config);
        assert_eq!(
            mapped,
            vec!["lib".to_string(), "api".to_string()],
            "rules must not cascade onto each other's output"
        );
    }

    #[test]
    fn only_the_first_matching_module_rule_applies() {
        let mut config = configuration();
        config
            .module_name_mapper
            .insert("internal".to_string(), "api".to_string());
        config
            .module_name_mapper
            .insert("api".to_string(), "public".to_string());

        assert_eq!(
            apply_module_name_mapper("lib/internal/paths", &config),
            "lib/api/paths"
        );
        assert_eq!(
            apply_module_name_mapper("lib/other/paths", &config),
            "lib/other/paths"
        );
    }
}
