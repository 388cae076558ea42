//! The default plugin set and its assembly order.
//!
//! Order is load-bearing: comment and annotation plugins must claim nodes
//! before structural converters, hoisters must see anonymous shapes before
//! the fallback union/type renderers, and the terminal type plugin comes
//! last so everything else gets first refusal.

pub mod annotations;
pub mod anonymous_declaration;
pub mod comments;
pub mod configuration;
pub mod coverage;
pub mod declaration_merging;
pub mod declarations;
pub mod inheritance_modifier;
pub mod inherited_type_literal;
pub mod mapped_type;
pub mod members;
pub mod namespace_info;
pub mod nullable_union;
pub mod parameters;
pub mod string_union;
pub mod type_literal;
pub mod types;

pub use annotations::{Annotation, AnnotationService, AnnotationsPlugin};
pub use anonymous_declaration::{
    AnonymousDeclarationPlugin, AnonymousDeclarationRender, AnonymousRendered,
};
pub use comments::CommentsPlugin;
pub use configuration::{ConfigurationPlugin, ConfigurationService, require_configuration};
pub use coverage::{CheckCoveragePlugin, CoverageService, cover, deep_cover};
pub use declaration_merging::{DeclarationMergingPlugin, DeclarationMergingService};
pub use declarations::DeclarationPlugin;
pub use inheritance_modifier::{
    InheritanceModifier, InheritanceModifierPlugin, InheritanceModifierService,
};
pub use inherited_type_literal::inherited_type_literal_plugin;
pub use mapped_type::mapped_type_plugin;
pub use members::MemberPlugin;
pub use namespace_info::{NamespaceInfoPlugin, NamespaceInfoService};
pub use nullable_union::NullableUnionPlugin;
pub use parameters::{
    ParameterDeclarationsConfig, ParameterInfo, ParameterPlugin, ParameterStrategy, Signature,
    convert_parameter_declarations, expand_unions, extract_signature,
};
pub use string_union::string_union_plugin;
pub use type_literal::type_literal_plugin;
pub use types::TypePlugin;

use crate::config::Configuration;
use crate::converter::name_resolver::{NameResolver, default_name_resolvers};
use crate::converter::plugin::ConverterPlugin;
use crate::structure::namespace::NamespaceInfo;

/// Assemble the full plugin list for one run. Custom entries run before the
/// built-ins of the same concern.
pub fn create_plugins(
    configuration: Configuration,
    namespace_info: &[NamespaceInfo],
    custom_plugins: Vec<Box<dyn ConverterPlugin>>,
    custom_annotations: Vec<Annotation>,
    custom_name_resolvers: Vec<NameResolver>,
    custom_inheritance_modifiers: Vec<InheritanceModifier>,
) -> Vec<Box<dyn ConverterPlugin>> {
    let mut name_resolvers = custom_name_resolvers;
    name_resolvers.extend(default_name_resolvers());

    let mut plugins: Vec<Box<dyn ConverterPlugin>> = vec![
        Box::new(ConfigurationPlugin::new(configuration)),
        Box::new(CheckCoveragePlugin::new()),
        Box::new(CommentsPlugin::new()),
        Box::new(AnnotationsPlugin::new(custom_annotations)),
        Box::new(InheritanceModifierPlugin::new(custom_inheritance_modifiers)),
        Box::new(NamespaceInfoPlugin::new(namespace_info)),
        Box::new(DeclarationMergingPlugin::new()),
    ];

    plugins.extend(custom_plugins);

    plugins.extend([
        Box::new(inherited_type_literal_plugin(name_resolvers.clone())) as Box<dyn ConverterPlugin>,
        Box::new(string_union_plugin(name_resolvers.clone())),
        Box::new(type_literal_plugin(name_resolvers.clone())),
        Box::new(mapped_type_plugin(name_resolvers)),
        Box::new(DeclarationPlugin),
        Box::new(MemberPlugin),
        Box::new(ParameterPlugin),
        Box::new(NullableUnionPlugin),
        Box::new(TypePlugin),
    ]);

    plugins
}
