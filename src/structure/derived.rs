//! Placement of plugin-synthesized declarations.
//!
//! Hoisted declarations accumulate per source unit during rendering; this
//! module resolves them into files next to the unit they came from, following
//! the same granularity rules as target files.

use indexmap::IndexMap;

use super::bundle::create_bundle_info_item;
use super::package::apply_package_name_mapper;
use super::source_file::create_source_file_info_item;
use super::target_file::create_generated_file;
use crate::config::{Configuration, Granularity};
use crate::converter::generated::DerivedFile;
use crate::error::GenerateError;
use crate::syntax::{SourceUnitId, SyntaxTree};

/// One hoisted declaration block awaiting placement.
#[derive(Clone, Debug)]
pub struct DerivedDeclaration {
    /// Source unit the anonymous construct originated from.
    pub unit: SourceUnitId,
    /// Own file name under top-level granularity; `None` means "merge into
    /// the unit's own file".
    pub file_name: Option<String>,
    pub body: String,
}

/// Resolve hoisted declarations into derived files.
///
/// Same-destination declarations merge with blank-line separation in
/// discovery order; under top-level granularity each file is wrapped into a
/// complete compilation unit since no target file shares its path.
pub fn generate_derived_declarations(
    tree: &SyntaxTree,
    declarations: Vec<DerivedDeclaration>,
    configuration: &Configuration,
) -> Result<Vec<DerivedFile>, GenerateError> {
    let mut merged: IndexMap<(Vec<String>, String), String> = IndexMap::new();

    for declaration in declarations {
        let (package, file_name) = match configuration.granularity {
            Granularity::Bundle => {
                let packages: Vec<Vec<String>> = tree
                    .units()
                    .map(|unit| {
                        create_source_file_info_item(tree.unit_name(unit), configuration).package
                    })
                    .collect();
                let item = create_bundle_info_item(&packages, configuration);
                (item.package, item.file_name)
            }
            Granularity::File | Granularity::TopLevel => {
                let item =
                    create_source_file_info_item(tree.unit_name(declaration.unit), configuration);
                match (configuration.granularity, declaration.file_name.clone()) {
                    (Granularity::TopLevel, Some(file_name)) => {
                        // A per-declaration file name never went through the
                        // source-path mapping, so it is mapped here; segments
                        // a rule introduces extend the unit's package.
                        let (extra, file_name) =
                            apply_package_name_mapper(&[], &file_name, configuration);
                        let mut package = item.package;
                        package.extend(extra);
                        (package, file_name)
                    }
                    _ => (item.package, item.file_name),
                }
            }
        };

        match merged.get_mut(&(package.clone(), file_name.clone())) {
            Some(existing) => {
                existing.push_str("\n\n");
                existing.push_str(&declaration.body);
            }
            None => {
                merged.insert((package, file_name), declaration.body);
            }
        }
    }

    Ok(merged
        .into_iter()
        .map(|((package, file_name), body)| {
            let body = if configuration.granularity == Granularity::TopLevel {
                create_generated_file(&package, &body)
            } else {
                body
            };
            DerivedFile {
                package,
                file_name,
                body,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{NodeKind, TreeBuilder};

    fn sample_tree() -> (SyntaxTree, SourceUnitId) {
        let mut builder = TreeBuilder::new();
        let (unit, root) = builder.source_unit("src/paths.d.ts");
        builder.named_node(NodeKind::InterfaceDecl, root, "Path");
        (builder.finish(), unit)
    }

    fn configuration(granularity: Granularity) -> Configuration {
        Configuration {
            input_roots: vec!["src".to_string()],
            library_name: "sandbox".to_string(),
            granularity,
            ..Configuration::default()
        }
    }

    #[test]
    fn file_granularity_merges_into_the_unit_file() {
        let (tree, unit) = sample_tree();
        let declarations = vec![
            DerivedDeclaration {
                unit,
                file_name: None,
                body: "external interface Temp0 {\n}".to_string(),
            },
            DerivedDeclaration {
                unit,
                file_name: None,
                body: "external interface Temp1 {\n}".to_string(),
            },
        ];

        let derived =
            generate_derived_declarations(&tree, declarations, &configuration(Granularity::File))
                .unwrap();
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].package, vec!["sandbox".to_string()]);
        assert_eq!(derived[0].file_name, "paths.kt");
        assert_eq!(
            derived[0].body,
            "external interface Temp0 {\n}\n\nexternal interface Temp1 {\n}"
        );
    }

    #[test]
    fn top_level_granularity_wraps_each_file() {
        let (tree, unit) = sample_tree();
        let declarations = vec![DerivedDeclaration {
            unit,
            file_name: Some("Temp0.kt".to_string()),
            body: "external interface Temp0 {\n}".to_string(),
        }];

        let derived = generate_derived_declarations(
            &tree,
            declarations,
            &configuration(Granularity::TopLevel),
        )
        .unwrap();
        assert_eq!(derived[0].file_name, "Temp0.kt");
        assert!(derived[0].body.contains("package sandbox"));
        assert!(derived[0].body.contains("external interface Temp0 {\n}"));
    }

    #[test]
    fn top_level_file_names_go_through_the_package_mapper() {
        let (tree, unit) = sample_tree();
        let mut configuration = configuration(Granularity::TopLevel);
        configuration
            .package_name_mapper
            .insert("Temp0".to_string(), "hidden/Temp0".to_string());

        let declarations = vec![DerivedDeclaration {
            unit,
            file_name: Some("Temp0.kt".to_string()),
            body: "external interface Temp0 {\n}".to_string(),
        }];

        let derived =
            generate_derived_declarations(&tree, declarations, &configuration).unwrap();
        assert_eq!(derived[0].file_name, "Temp0.kt");
        assert_eq!(
            derived[0].package,
            vec!["sandbox".to_string(), "hidden".to_string()],
            "segments introduced by a mapping rule extend the unit's package"
        );
    }
}
