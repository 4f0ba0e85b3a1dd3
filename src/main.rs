//! pipepaint command line: compile graph files into Kedro project artifacts.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pipepaint::config::resolve_config_path;
use pipepaint::{compile_project_with, emit_dot, emit_viz, parser, Compilation, CompilerOptions, Graph, ProjectLayout};

#[derive(Parser)]
#[command(
    name = "pipepaint",
    about = "Compile dataset/function graphs into Kedro pipeline projects",
    version
)]
struct Cli {
    /// Compiler options file (YAML). Falls back to PIPEPAINT_CONFIG, then ./pipepaint.yaml.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a graph and print or write the generated artifacts
    Compile {
        /// Graph file (.yaml, .yml or .json)
        graph: PathBuf,

        /// Write the artifacts into a project under this directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Project name used for the output layout
        #[arg(long, default_value = "pipeline_project")]
        project: String,

        /// Print the compilation result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report diagnostics without printing artifacts
    Check {
        /// Graph file (.yaml, .yml or .json)
        graph: PathBuf,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a graph for external viewers
    Export {
        /// Graph file (.yaml, .yml or .json)
        graph: PathBuf,

        #[arg(long, value_enum, default_value_t = ExportFormat::Dot)]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Graphviz DOT
    Dot,
    /// Kedro-Viz JSON
    Viz,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let options = load_options(cli.config.as_deref())?;

    match cli.command {
        Commands::Compile { graph, out, project, json } => {
            let graph = load_graph(&graph)?;
            let result = compile_project_with(&graph, &options);
            report(&result, json)?;

            let Some(artifacts) = &result.artifacts else {
                return Ok(ExitCode::FAILURE);
            };

            match out {
                Some(dir) => {
                    let layout = ProjectLayout::new(&dir, &project, &options);
                    for (path, text) in artifacts.files(&layout) {
                        write_artifact(&path, text)?;
                        tracing::info!(path = %path.display(), "wrote artifact");
                    }
                    eprintln!("Wrote project '{}' to {}", project, layout.root().display());
                }
                None if json => {}
                None => {
                    println!("# ---- nodes.py ----\n{}", artifacts.functions);
                    println!("# ---- pipeline.py ----\n{}", artifacts.assembly);
                    println!("# ---- {}.yml ----\n{}", options.pipeline_name, artifacts.catalog);
                }
            }

            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { graph, json } => {
            let graph = load_graph(&graph)?;
            let mut result = compile_project_with(&graph, &options);
            result.artifacts = None;
            report(&result, json)?;
            Ok(if result.success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Export { graph, format } => {
            let graph = load_graph(&graph)?;
            let text = match format {
                ExportFormat::Dot => emit_dot(&graph),
                ExportFormat::Viz => emit_viz(&graph).context("Failed to export Kedro-Viz JSON")?,
            };
            print!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_options(explicit: Option<&str>) -> Result<CompilerOptions> {
    match resolve_config_path(explicit) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading compiler options");
            CompilerOptions::from_file(&path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))
        }
        None => Ok(CompilerOptions::default()),
    }
}

fn load_graph(path: &Path) -> Result<Graph> {
    let graph = parser::parse_file(path)
        .with_context(|| format!("Failed to load graph '{}'", path.display()))?;
    tracing::debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "loaded graph");
    Ok(graph)
}

/// Print diagnostics (or the whole result as JSON)
fn report(result: &Compilation, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    for diagnostic in &result.diagnostics {
        eprintln!("{}", diagnostic);
    }
    let errors = result.errors().count();
    let warnings = result.warnings().count();
    if result.success {
        eprintln!("Compiled with {} warning(s)", warnings);
    } else {
        eprintln!("Compilation failed: {} error(s), {} warning(s)", errors, warnings);
    }
    Ok(())
}

fn write_artifact(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("Failed to write '{}'", path.display()))
}
