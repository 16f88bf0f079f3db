//! Reading module source into raw declarations.
//!
//! This is the only place that touches the configuration language. Every
//! `*.tf` file directly inside the module directory is parsed with
//! `hcl-edit`, files in name order and blocks in source order, and the
//! blocks the documentation model cares about are collected into a
//! [`RawModule`]. Expressions are never evaluated, only kept as text.

use crate::constants::SOURCE_FILE_GLOB;
use crate::error::{Error, Result};
use crate::model::Position;
use globset::{Glob, GlobMatcher};
use hcl_edit::expr::{Expression, ObjectKey};
use hcl_edit::structure::{Block, BlockLabel, Body, Structure};
use hcl_edit::Span;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A `variable` block.
#[derive(Debug, Clone, PartialEq)]
pub struct RawVariable {
    pub name: String,
    pub type_expr: Option<String>,
    pub description: Option<String>,
    /// Source text of the default, `None` when undeclared or `null`
    pub default: Option<String>,
    pub position: Position,
}

/// An `output` block.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOutput {
    pub name: String,
    pub description: Option<String>,
    pub sensitive: bool,
    pub position: Position,
}

/// The provider configuration a resource is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderRef {
    pub name: String,
    pub alias: Option<String>,
}

/// A `resource` or `data` block, reduced to its provider binding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResource {
    pub provider: ProviderRef,
    pub position: Position,
}

/// An entry of `terraform { required_providers { ... } }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProviderRequirement {
    pub source: Option<String>,
    pub version_constraints: Vec<String>,
}

/// Declarations collected from every source file of a module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawModule {
    pub path: PathBuf,
    pub variables: Vec<RawVariable>,
    pub outputs: Vec<RawOutput>,
    pub resources: Vec<RawResource>,
    pub required_core: Vec<String>,
    pub required_providers: IndexMap<String, RawProviderRequirement>,
}

/// Turns a module directory into raw declarations.
pub trait ConfigParser {
    /// # Errors
    /// * `Error::PathNotFound` if `dir` is not an existing directory
    /// * `Error::ParseError` if there is no source file or one is malformed
    fn parse_dir(&self, dir: &Path) -> Result<RawModule>;
}

/// [`ConfigParser`] for HCL sources.
pub struct HclParser {
    matcher: GlobMatcher,
}

impl HclParser {
    pub fn new() -> Result<Self> {
        let matcher = Glob::new(SOURCE_FILE_GLOB)
            .map_err(|e| Error::ConfigError(format!("invalid source pattern: {}", e)))?
            .compile_matcher();
        Ok(Self { matcher })
    }

    /// Lists module source files in file name order.
    pub fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::PathNotFound {
                path: e.path().unwrap_or(dir).display().to_string(),
            })?;
            if entry.file_type().is_file() && self.matcher.is_match(entry.file_name()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn parse_file(&self, path: &Path, module: &mut RawModule) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| Error::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let body = hcl_edit::parser::parse_body(&content).map_err(|e| Error::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let source = SourceFile { path, content: &content };
        for block in blocks(&body) {
            match block.ident.as_str() {
                "variable" => source.variable(block, module)?,
                "output" => source.output(block, module)?,
                "resource" | "data" => source.resource(block, module)?,
                "terraform" => source.terraform(block, module),
                _ => {}
            }
        }
        Ok(())
    }
}

impl ConfigParser for HclParser {
    fn parse_dir(&self, dir: &Path) -> Result<RawModule> {
        if !dir.is_dir() {
            return Err(Error::PathNotFound { path: dir.display().to_string() });
        }

        let files = self.source_files(dir)?;
        if files.is_empty() {
            return Err(Error::ParseError {
                path: dir.display().to_string(),
                message: "no configuration files found".to_string(),
            });
        }

        let mut module = RawModule { path: dir.to_path_buf(), ..RawModule::default() };
        for file in &files {
            debug!("Parsing {}", file.display());
            self.parse_file(file, &mut module)?;
        }

        debug!(
            "Parsed {} file(s): {} variable(s), {} output(s), {} resource(s)",
            files.len(),
            module.variables.len(),
            module.outputs.len(),
            module.resources.len()
        );
        Ok(module)
    }
}

/// One file being read, used to attach positions and name errors.
struct SourceFile<'a> {
    path: &'a Path,
    content: &'a str,
}

impl SourceFile<'_> {
    fn variable(&self, block: &Block, module: &mut RawModule) -> Result<()> {
        let name = self.single_label(block)?;
        if module.variables.iter().any(|v| v.name == name) {
            return Err(self.error(format!("duplicate variable \"{}\"", name)));
        }

        let default = attribute(&block.body, "default")
            .filter(|expr| !matches!(expr, Expression::Null(_)))
            .map(source_text);

        module.variables.push(RawVariable {
            type_expr: attribute(&block.body, "type").map(literal_text),
            description: attribute(&block.body, "description").map(literal_text),
            default,
            position: self.position(block),
            name,
        });
        Ok(())
    }

    fn output(&self, block: &Block, module: &mut RawModule) -> Result<()> {
        let name = self.single_label(block)?;
        if module.outputs.iter().any(|o| o.name == name) {
            return Err(self.error(format!("duplicate output \"{}\"", name)));
        }

        let sensitive = matches!(
            attribute(&block.body, "sensitive"),
            Some(Expression::Bool(value)) if *value.value()
        );

        module.outputs.push(RawOutput {
            description: attribute(&block.body, "description").map(literal_text),
            sensitive,
            position: self.position(block),
            name,
        });
        Ok(())
    }

    fn resource(&self, block: &Block, module: &mut RawModule) -> Result<()> {
        let type_name = match block.labels.as_slice() {
            [type_name, _] => label_text(type_name),
            _ => {
                return Err(self.error(format!(
                    "{} block requires a type and a name label",
                    block.ident.as_str()
                )))
            }
        };

        let provider = match attribute(&block.body, "provider") {
            Some(expr) => provider_ref(&literal_text(expr)),
            None => ProviderRef { name: implied_provider(&type_name), alias: None },
        };

        module.resources.push(RawResource {
            provider,
            position: self.position(block),
        });
        Ok(())
    }

    fn terraform(&self, block: &Block, module: &mut RawModule) {
        if let Some(expr) = attribute(&block.body, "required_version") {
            module.required_core.push(literal_text(expr));
        }

        for required in blocks(&block.body).filter(|b| b.ident.as_str() == "required_providers") {
            for structure in required.body.iter() {
                let Structure::Attribute(attr) = structure else {
                    continue;
                };
                let entry =
                    module.required_providers.entry(attr.key.as_str().to_string()).or_default();
                match &attr.value {
                    Expression::Object(object) => {
                        for (key, value) in object.iter() {
                            let key = match key {
                                ObjectKey::Ident(ident) => ident.as_str().to_string(),
                                ObjectKey::Expression(expr) => literal_text(expr),
                            };
                            match key.as_str() {
                                "source" => entry.source = Some(literal_text(value.expr())),
                                "version" => {
                                    entry.version_constraints.push(literal_text(value.expr()))
                                }
                                _ => {}
                            }
                        }
                    }
                    expr => entry.version_constraints.push(literal_text(expr)),
                }
            }
        }
    }

    fn single_label(&self, block: &Block) -> Result<String> {
        match block.labels.as_slice() {
            [label] => Ok(label_text(label)),
            _ => Err(self.error(format!(
                "{} block requires exactly one name label",
                block.ident.as_str()
            ))),
        }
    }

    fn position(&self, block: &Block) -> Position {
        let line = match block.span() {
            Some(span) => keyword_line(self.content, span.start),
            None => search_block_line(self.content, block),
        };
        Position { filename: self.path.to_path_buf(), line }
    }

    fn error(&self, message: String) -> Error {
        Error::ParseError { path: self.path.display().to_string(), message }
    }
}

fn blocks(body: &Body) -> impl Iterator<Item = &Block> {
    body.iter().filter_map(|structure| match structure {
        Structure::Block(block) => Some(block),
        Structure::Attribute(_) => None,
    })
}

fn attribute<'a>(body: &'a Body, key: &str) -> Option<&'a Expression> {
    body.iter().find_map(|structure| match structure {
        Structure::Attribute(attr) if attr.key.as_str() == key => Some(&attr.value),
        _ => None,
    })
}

fn label_text(label: &BlockLabel) -> String {
    match label {
        BlockLabel::String(value) => value.value().to_string(),
        BlockLabel::Ident(ident) => ident.as_str().to_string(),
    }
}

/// Literal text of an expression: string content for plain strings and
/// heredocs, trimmed source text for anything else.
pub fn literal_text(expr: &Expression) -> String {
    match expr {
        Expression::String(value) => value.value().to_string(),
        Expression::HeredocTemplate(_) => heredoc_body(&source_text(expr)),
        other => source_text(other),
    }
}

/// Text between the `<<EOT` line and the closing delimiter of a heredoc.
fn heredoc_body(heredoc: &str) -> String {
    let lines: Vec<&str> = heredoc.lines().collect();
    match lines.as_slice() {
        [_, body @ .., _] => body.join("\n"),
        _ => String::new(),
    }
}

/// Trimmed source text of an expression, strings keeping their quotes.
pub fn source_text(expr: &Expression) -> String {
    expr.to_string().trim().to_string()
}

/// Provider name implied by a resource type, e.g. `aws` for `aws_instance`.
pub fn implied_provider(type_name: &str) -> String {
    type_name.split('_').next().unwrap_or(type_name).to_string()
}

/// Parses a `provider = name.alias` reference.
pub fn provider_ref(reference: &str) -> ProviderRef {
    match reference.split_once('.') {
        Some((name, alias)) => ProviderRef { name: name.to_string(), alias: Some(alias.to_string()) },
        None => ProviderRef { name: reference.to_string(), alias: None },
    }
}

fn is_comment_or_blank(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#') || line.starts_with("//")
}

/// 1-based line of the first code line at or after `offset`.
fn keyword_line(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    let mut line = content[..offset].matches('\n').count() + 1;
    let lines: Vec<&str> = content.lines().collect();
    while line <= lines.len() && is_comment_or_blank(lines[line - 1]) {
        line += 1;
    }
    line
}

fn search_block_line(content: &str, block: &Block) -> usize {
    let ident = block.ident.as_str();
    let label = block.labels.first().map(label_text).unwrap_or_default();
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            line.starts_with(ident) && line.contains(&format!("\"{}\"", label))
        })
        .map(|index| index + 1)
        .unwrap_or(0)
}
