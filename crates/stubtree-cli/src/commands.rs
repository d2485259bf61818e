//! Subcommand implementations.
//!
//! Commands return their output instead of printing it, so the binary decides
//! where it goes and tests can inspect it.

use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use stubtree_core::{
    qualified_name, render_stub_tree, DefaultStubBuilder, StubBuild, StubBuilder, StubConfig,
    StubIndex,
};
use stubtree_syntax::fixture::parse_fixture;
use stubtree_syntax::SyntaxNode;
use tracing::debug;

use crate::cli::Command;

/// What a command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout.
    pub stdout: String,
    /// Lines for stderr.
    pub stderr: Vec<String>,
    /// `false` when the process should exit with a failure status.
    pub success: bool,
}

/// Runs `command`.
///
/// # Errors
///
/// Fails if the fixture or configuration cannot be read or parsed.
pub fn run(command: &Command) -> anyhow::Result<Outcome> {
    match command {
        Command::Build {
            fixture,
            config,
            raw,
            json,
        } => build(fixture, config.as_deref(), *raw, *json),
        Command::Lookup {
            fixture,
            name,
            config,
        } => lookup(fixture, name, config.as_deref()),
    }
}

/// Builds the stub tree of `fixture` and renders it as text or JSON.
///
/// # Errors
///
/// See [`run`].
pub fn build(
    fixture: &Path,
    config: Option<&Path>,
    raw: bool,
    json: bool,
) -> anyhow::Result<Outcome> {
    let file = load_fixture(fixture)?;
    let config = resolve_config(fixture, config)?;
    let build = build_with(&file, &config, raw);

    let stdout = if json {
        let mut text = build
            .tree()
            .to_json()
            .context("failed to serialize stub tree")?;
        text.push('\n');
        text
    } else {
        render_stub_tree(build.tree())
    };

    Ok(Outcome {
        stdout,
        stderr: diagnostic_lines(&build),
        success: !build.has_errors(),
    })
}

/// Lists the stubs declaring `name` with their qualified path, kind and range.
///
/// # Errors
///
/// See [`run`].
pub fn lookup(fixture: &Path, name: &str, config: Option<&Path>) -> anyhow::Result<Outcome> {
    let file = load_fixture(fixture)?;
    let config = resolve_config(fixture, config)?;
    let build = build_with(&file, &config, false);
    let tree = build.tree();
    let index = StubIndex::new(tree);

    let mut stdout = String::new();
    let hits = index.lookup(name);
    for &id in hits {
        let record = &tree[id];
        let range = record.data().range;
        let _ = writeln!(
            stdout,
            "{}  {}  {}..{}",
            qualified_name(tree, id),
            record.kind(),
            u32::from(range.start()),
            u32::from(range.end())
        );
    }

    let mut stderr = diagnostic_lines(&build);
    if hits.is_empty() {
        stderr.push(format!("no stub declares `{name}`"));
    }
    Ok(Outcome {
        stdout,
        stderr,
        success: !hits.is_empty(),
    })
}

/// Resolves the builder configuration: `explicit` if given, otherwise a
/// config file next to the fixture, otherwise defaults.
///
/// # Errors
///
/// Fails if the chosen config file cannot be loaded.
pub fn resolve_config(fixture: &Path, explicit: Option<&Path>) -> anyhow::Result<StubConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => fixture.parent().and_then(StubConfig::discover),
    };
    let Some(path) = path else {
        return Ok(StubConfig::default());
    };
    debug!(path = %path.display(), "loading stubtree config");
    StubConfig::load(&path).with_context(|| format!("invalid config {}", path.display()))
}

fn load_fixture(path: &Path) -> anyhow::Result<SyntaxNode> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_fixture(&text).with_context(|| format!("invalid fixture {}", path.display()))
}

fn build_with(file: &SyntaxNode, config: &StubConfig, raw: bool) -> StubBuild {
    let builder = DefaultStubBuilder::from_config(config);
    if raw {
        builder.build_stub_tree_raw(file)
    } else {
        builder.build_stub_tree(file)
    }
}

fn diagnostic_lines(build: &StubBuild) -> Vec<String> {
    build
        .diagnostics()
        .iter()
        .map(ToString::to_string)
        .collect()
}
