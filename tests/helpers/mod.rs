//! Shared fixtures for pipeline tests.

#![allow(dead_code)]

use ktdecl::config::{Configuration, Granularity};
use ktdecl::syntax::{NodeKind, SyntaxTree, TreeBuilder};

/// `interface Path { pathname: string }` plus
/// `function createPath(param: Path): string`, in one source unit.
pub fn sandbox_tree() -> SyntaxTree {
    let mut builder = TreeBuilder::new();
    let (_, root) = builder.source_unit("sandbox/src/function/bindingPattern.d.ts");

    let interface = builder.named_node(NodeKind::InterfaceDecl, root, "Path");
    let pathname = builder.named_node(NodeKind::PropertySignature, interface, "pathname");
    let pathname_ty = builder.node(NodeKind::StringKeyword, pathname);
    builder.set_type(pathname, pathname_ty);

    let function = builder.named_node(NodeKind::FunctionDecl, root, "createPath");
    let parameter = builder.named_node(NodeKind::Parameter, function, "param");
    let parameter_ty = builder.named_node(NodeKind::TypeReference, parameter, "Path");
    builder.set_type(parameter, parameter_ty);
    let return_ty = builder.node(NodeKind::StringKeyword, function);
    builder.set_type(function, return_ty);

    builder.finish()
}

pub fn sandbox_configuration(granularity: Granularity) -> Configuration {
    Configuration {
        input_roots: vec!["sandbox/src".to_string()],
        output: "out".to_string(),
        library_name: "sandbox".to_string(),
        granularity,
        ..Configuration::default()
    }
}
