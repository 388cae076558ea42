//! The conversion pipeline: context, plugins, render chain, naming.

pub mod context;
pub mod generated;
pub mod name_resolver;
pub mod plugin;
pub mod plugins;
pub mod render;
pub mod type_parameters;

pub use context::ConverterContext;
pub use generated::{DerivedFile, GeneratedArtifact, GeneratedFile};
pub use name_resolver::{NameResolver, default_name_resolvers};
pub use plugin::{ConverterPlugin, create_simple_plugin};
pub use render::{Render, if_present, render_nullable};
