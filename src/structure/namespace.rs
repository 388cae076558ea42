//! Namespace classification and package-strategy placement.

use super::StructureItem;
use super::source_file::create_source_file_info_item;
use crate::base::{glob_to_regex, snake_to_camel_case};
use crate::config::{Configuration, NamespaceStrategy};
use crate::error::GenerateError;
use crate::syntax::{NodeId, NodeKind, NodeRef, SyntaxTree};

/// Classification of one namespace declaration for the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceInfo {
    pub node: NodeId,
    pub name: String,
    pub strategy: NamespaceStrategy,
}

/// Match the namespace name against the configured pattern table; the first
/// matching pattern wins, absence means the default strategy.
pub fn resolve_namespace_strategy(
    name: &str,
    configuration: &Configuration,
) -> Result<NamespaceStrategy, GenerateError> {
    for (pattern, &strategy) in &configuration.namespace_strategy {
        let regex = regex::Regex::new(&glob_to_regex(pattern))
            .map_err(|source| GenerateError::pattern(pattern, source))?;
        if regex.is_match(name) {
            return Ok(strategy);
        }
    }
    Ok(NamespaceStrategy::default())
}

/// Classify every namespace declaration in the tree, in traversal order.
pub fn collect_namespace_info(
    tree: &SyntaxTree,
    configuration: &Configuration,
) -> Result<Vec<NamespaceInfo>, GenerateError> {
    let mut info = Vec::new();

    for unit in tree.units() {
        let root = tree.root(unit);
        for node in root.descendants() {
            if node.kind() != NodeKind::ModuleDecl {
                continue;
            }
            let name = node.name_text().unwrap_or_default().to_string();
            let strategy = resolve_namespace_strategy(&name, configuration)?;
            info.push(NamespaceInfo {
                node: node.id(),
                name,
                strategy,
            });
        }
    }

    Ok(info)
}

/// Structure item for a package-strategy namespace: the source unit's item
/// with the namespace name appended to the package and used as qualifier.
pub fn create_namespace_info_item(
    namespace: NodeRef<'_>,
    configuration: &Configuration,
) -> StructureItem {
    let name = namespace.name_text().unwrap_or_default().to_string();
    let mut item = create_source_file_info_item(namespace.unit_name(), configuration);

    let stem = item
        .file_name
        .strip_suffix(".kt")
        .unwrap_or(&item.file_name)
        .to_string();
    item.package.push(stem);
    item.file_name = format!("{}.kt", snake_to_camel_case(&name));
    item.qualifier = Some(name);
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TreeBuilder;

    #[test]
    fn strategy_table_is_matched_in_order() {
        let mut configuration = Configuration::default();
        configuration
            .namespace_strategy
            .insert("Internal*".to_string(), NamespaceStrategy::Ignore);
        configuration
            .namespace_strategy
            .insert("*".to_string(), NamespaceStrategy::Package);

        assert_eq!(
            resolve_namespace_strategy("InternalUtils", &configuration).unwrap(),
            NamespaceStrategy::Ignore
        );
        assert_eq!(
            resolve_namespace_strategy("History", &configuration).unwrap(),
            NamespaceStrategy::Package
        );
    }

    #[test]
    fn unmatched_namespaces_default_to_object() {
        let configuration = Configuration::default();
        assert_eq!(
            resolve_namespace_strategy("History", &configuration).unwrap(),
            NamespaceStrategy::Object
        );
    }

    #[test]
    fn namespace_item_extends_the_source_package() {
        let configuration = Configuration {
            input_roots: vec!["src".to_string()],
            library_name: "lib".to_string(),
            ..Configuration::default()
        };

        let mut builder = TreeBuilder::new();
        let (_, root) = builder.source_unit("src/history.d.ts");
        let namespace = builder.named_node(NodeKind::ModuleDecl, root, "History");
        let tree = builder.finish();

        let item = create_namespace_info_item(tree.node(namespace), &configuration);
        assert_eq!(item.package, vec!["lib".to_string(), "history".to_string()]);
        assert_eq!(item.file_name, "History.kt");
        assert_eq!(item.qualifier, Some("History".to_string()));
    }
}
