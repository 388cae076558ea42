//! The generation run: structure, plugin phases, conflict resolution, output.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::base::glob_to_regex;
use crate::config::Configuration;
use crate::converter::context::ConverterContext;
use crate::converter::generated::GeneratedArtifact;
use crate::converter::name_resolver::NameResolver;
use crate::converter::plugin::ConverterPlugin;
use crate::converter::plugins::{Annotation, InheritanceModifier, create_plugins};
use crate::converter::render::Render;
use crate::error::GenerateError;
use crate::structure::conflicts::{TargetFile, resolve_conflicts};
use crate::structure::namespace::collect_namespace_info;
use crate::structure::package::package_to_output_file_name;
use crate::structure::prepare::prepare_structure;
use crate::structure::{OutputFile, StructureItem};
use crate::syntax::SyntaxTree;

/// Statically registered extensions for one run.
///
/// Plugin instances are supplied by the caller instead of being discovered
/// and loaded from the filesystem; the pipeline is agnostic to how they were
/// obtained.
#[derive(Default)]
pub struct Extensions {
    pub plugins: Vec<Box<dyn ConverterPlugin>>,
    pub annotations: Vec<Annotation>,
    pub name_resolvers: Vec<NameResolver>,
    pub inheritance_modifiers: Vec<InheritanceModifier>,
}

/// Run the conversion pipeline without touching the filesystem.
///
/// Phases run strictly in sequence over the full plugin list:
/// setup → traverse → render → generate, then conflict resolution.
pub fn convert(
    tree: &SyntaxTree,
    configuration: Configuration,
    extensions: Extensions,
) -> Result<Vec<OutputFile>, GenerateError> {
    let configuration = configuration.defaultize()?;

    let namespace_info = collect_namespace_info(tree, &configuration)?;
    let structure = prepare_structure(tree, &configuration, &namespace_info);

    let plugins = create_plugins(
        configuration.clone(),
        &namespace_info,
        extensions.plugins,
        extensions.annotations,
        extensions.name_resolvers,
        extensions.inheritance_modifiers,
    );

    let mut context = ConverterContext::new();
    for plugin in &plugins {
        plugin.setup(&mut context);
    }

    for item in &structure {
        for &statement in &item.statements {
            for node in tree.node(statement).descendants() {
                for plugin in &plugins {
                    plugin.traverse(node, &context);
                }
            }
        }
    }

    let ignore_output = compile_ignore_output(&configuration)?;
    let render = Render::new(&plugins, &context);

    let mut target_files = Vec::new();
    for item in structure {
        debug!(
            package = item.package.join("."),
            file = item.file_name,
            "processing structure item"
        );

        let body = item
            .statements
            .iter()
            .map(|&statement| render.render(tree.node(statement)))
            .filter(|statement| !statement.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        if !is_ignored(&item, &configuration, &ignore_output) {
            target_files.push(TargetFile { item, body });
        }
    }

    let mut derived_files = Vec::new();
    let mut generated_files = Vec::new();
    for plugin in &plugins {
        for artifact in plugin.generate(tree, &context)? {
            match artifact {
                GeneratedArtifact::Derived(derived) => {
                    let path =
                        package_to_output_file_name(&derived.package, &derived.file_name, &configuration);
                    if !matches_any(&path.to_string_lossy(), &ignore_output) {
                        derived_files.push(derived);
                    }
                }
                GeneratedArtifact::File(generated) => {
                    if !matches_any(&generated.file_name.to_string_lossy(), &ignore_output) {
                        generated_files.push(generated);
                    }
                }
            }
        }
    }

    resolve_conflicts(target_files, derived_files, generated_files, &configuration)
}

/// Run the full pipeline and write the results under `configuration.output`.
///
/// The output target is removed before writing: runs replace prior output,
/// they do not merge with it.
pub fn generate(
    tree: &SyntaxTree,
    configuration: Configuration,
    extensions: Extensions,
) -> Result<(), GenerateError> {
    let configuration = configuration.defaultize()?;

    for root in &configuration.input_roots {
        info!(root, "source files root");
    }
    info!(count = tree.units().count(), "source units");

    clean_output(&configuration)?;

    let result_files = convert(tree, configuration, extensions)?;

    for file in &result_files {
        if let Some(parent) = file.file_name.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file.file_name, &file.body)?;
        debug!(file = %file.file_name.display(), "wrote output file");
    }

    info!(count = result_files.len(), "output files written");
    Ok(())
}

fn clean_output(configuration: &Configuration) -> Result<(), GenerateError> {
    let target = match &configuration.output_file_name {
        Some(file_name) => Path::new(&configuration.output).join(file_name),
        None => Path::new(&configuration.output).to_path_buf(),
    };

    if target.exists() {
        if target.is_dir() {
            fs::remove_dir_all(&target)?;
        } else {
            fs::remove_file(&target)?;
        }
    }
    fs::create_dir_all(&configuration.output)?;
    Ok(())
}

fn compile_ignore_output(
    configuration: &Configuration,
) -> Result<Vec<regex::Regex>, GenerateError> {
    configuration
        .ignore_output
        .iter()
        .map(|pattern| {
            regex::Regex::new(&glob_to_regex(pattern))
                .map_err(|source| GenerateError::pattern(pattern, source))
        })
        .collect()
}

fn is_ignored(
    item: &StructureItem,
    configuration: &Configuration,
    ignore_output: &[regex::Regex],
) -> bool {
    let relative = package_to_output_file_name(&item.package, &item.file_name, configuration);
    let full = Path::new(&configuration.output).join(&relative);
    matches_any(&relative.to_string_lossy(), ignore_output)
        || matches_any(&full.to_string_lossy(), ignore_output)
}

fn matches_any(path: &str, patterns: &[regex::Regex]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(path))
}
