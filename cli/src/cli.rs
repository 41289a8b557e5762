use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum, ValueHint};
use quadlens_model::Iri;
use quadlens_render::{RenderConfig, DEFAULT_EXPLORE_PATH};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(about, version, name = "quadlens")]
/// QuadLens command line toolkit for inspecting quad documents
pub struct Args {
    /// Maximum level of the log messages written to stderr
    ///
    /// The RUST_LOG environment variable takes precedence if it is set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the entities of an N-Quads document, one table per subject
    Inspect {
        /// File to read
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render a single JSON term object such as {"type": "uri", "value": "http://example.com"}
    Term {
        /// The term to render
        ///
        /// If no term is given, stdin is read.
        json: Option<String>,
        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(ClapArgs)]
pub struct RenderArgs {
    /// The output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
    /// Additional namespace prefix used to abbreviate IRIs
    ///
    /// Can be given multiple times. The rdf, rdfs, xsd and owl prefixes are always known.
    #[arg(long = "prefix", value_name = "NAME=IRI", value_parser = parse_prefix)]
    pub prefixes: Vec<(String, String)>,
    /// The path links in HTML output navigate to
    #[arg(long, default_value = DEFAULT_EXPLORE_PATH)]
    pub explore_path: String,
}

impl RenderArgs {
    pub fn to_config(&self) -> RenderConfig {
        self.prefixes.iter().fold(
            RenderConfig::default().with_explore_path(self.explore_path.as_str()),
            |config, (name, namespace)| config.with_prefix(name.as_str(), namespace.as_str()),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

fn parse_prefix(value: &str) -> Result<(String, String), String> {
    let (name, namespace) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=IRI, found '{value}'"))?;
    if name.is_empty() {
        return Err("the prefix name must not be empty".to_owned());
    }
    Iri::parse(namespace).map_err(|e| format!("invalid namespace IRI <{namespace}>: {e}"))?;
    Ok((name.to_owned(), namespace.to_owned()))
}
