//! Output file assembly: headers, package line, imports, body.

use super::StructureItem;
use super::imports::generate_imports;
use super::package::{create_package_name, package_to_output_file_name};
use crate::config::{Configuration, Granularity};
use crate::error::GenerateError;

const SUPPRESS_BLOCK: &str =
    "@file:Suppress(\n    \"NON_EXTERNAL_DECLARATION_IN_INAPPROPRIATE_FILE\",\n)";

/// Complete text of one target output file.
///
/// Header order is fixed: module binding, qualifier, suppression block,
/// package line, injected imports, body. The suppression block is omitted at
/// top-level granularity, where every file holds exactly one declaration.
pub fn create_target_file(
    item: &StructureItem,
    body: &str,
    configuration: &Configuration,
) -> Result<String, GenerateError> {
    let package_name = create_package_name(&item.package);
    let output_file_name =
        package_to_output_file_name(&item.package, &item.file_name, configuration);
    let imports = generate_imports(&output_file_name, configuration)?;

    let mut annotations = Vec::new();
    // A module name mapped to the empty string opts out of runtime binding.
    if item.has_runtime && !item.module_name.is_empty() {
        annotations.push(format!("@file:JsModule(\"{}\")", item.module_name));
        if let Some(qualifier) = &item.qualifier {
            annotations.push(format!("@file:JsQualifier(\"{qualifier}\")"));
        }
    }
    if configuration.granularity != Granularity::TopLevel {
        annotations.push(SUPPRESS_BLOCK.to_string());
    }

    let mut sections = Vec::new();
    let header = annotations.join("\n");
    if !header.is_empty() {
        sections.push(header);
    }
    sections.push(format!("package {package_name}"));
    if !imports.is_empty() {
        sections.push(imports);
    }
    sections.push(body.to_string());

    Ok(format!("{}\n", sections.join("\n\n")))
}

/// Text of a plugin-synthesized file that has no runtime binding of its own.
pub fn create_generated_file(package: &[String], body: &str) -> String {
    let package_name = create_package_name(package);
    format!("{SUPPRESS_BLOCK}\n\npackage {package_name}\n\n{body}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::NodeId;

    fn item() -> StructureItem {
        StructureItem {
            package: vec!["sandbox".to_string(), "function".to_string()],
            file_name: "bindingPattern.kt".to_string(),
            module_name: "sandbox/function/bindingPattern".to_string(),
            qualifier: None,
            has_runtime: true,
            statements: Vec::<NodeId>::new(),
        }
    }

    #[test]
    fn target_file_header_order_is_fixed() {
        let configuration = Configuration {
            library_name: "sandbox".to_string(),
            ..Configuration::default()
        };

        let text = create_target_file(&item(), "external fun f(): Unit", &configuration).unwrap();
        assert_eq!(
            text,
            "@file:JsModule(\"sandbox/function/bindingPattern\")\n\
             @file:Suppress(\n    \"NON_EXTERNAL_DECLARATION_IN_INAPPROPRIATE_FILE\",\n)\n\
             \n\
             package sandbox.function\n\
             \n\
             external fun f(): Unit\n"
        );
    }

    #[test]
    fn qualifier_line_follows_module_binding() {
        let configuration = Configuration::default();
        let mut qualified = item();
        qualified.qualifier = Some("History".to_string());

        let text = create_target_file(&qualified, "", &configuration).unwrap();
        assert!(text.contains("@file:JsModule(\"sandbox/function/bindingPattern\")\n@file:JsQualifier(\"History\")"));
    }

    #[test]
    fn empty_module_name_suppresses_the_binding_annotation() {
        let configuration = Configuration::default();
        let mut unbound = item();
        unbound.module_name = String::new();

        let text = create_target_file(&unbound, "body", &configuration).unwrap();
        assert!(!text.contains("@file:JsModule"));
        assert!(text.starts_with("@file:Suppress"));
    }

    #[test]
    fn top_level_granularity_omits_the_suppression_block() {
        let configuration = Configuration {
            granularity: Granularity::TopLevel,
            ..Configuration::default()
        };

        let text = create_target_file(&item(), "body", &configuration).unwrap();
        assert!(!text.contains("@file:Suppress"));
    }

    #[test]
    fn generated_file_carries_only_package_and_body() {
        let package = vec!["sandbox".to_string()];
        let text = create_generated_file(&package, "external interface Temp0 {\n}");
        assert!(text.starts_with("@file:Suppress"));
        assert!(text.contains("package sandbox\n\nexternal interface Temp0 {\n}"));
    }
}
