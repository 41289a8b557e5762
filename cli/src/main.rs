#![allow(clippy::print_stdout)]
use crate::cli::{Args, Command, OutputFormat, RenderArgs};
use anyhow::Context;
use clap::Parser;
use prettytable::{row, Table};
use quadlens_nquads::parse_entities;
use quadlens_render::{EntityView, Fragment, TermRenderer};
use std::fs;
use std::io::{self, stdin, stdout, BufWriter, Read, Write};
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level);
    match args.command {
        Command::Inspect { file, render } => inspect(file.as_deref(), &render),
        Command::Term { json, render } => {
            let json = match json {
                Some(json) => json,
                None => read_input(None)?,
            };
            term(&json, &render)
        }
    }
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(file) = file {
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
    } else {
        let mut input = String::new();
        stdin()
            .read_to_string(&mut input)
            .context("Failed to read the standard input")?;
        Ok(input)
    }
}

fn inspect(file: Option<&Path>, render: &RenderArgs) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let entities = parse_entities(&input).context("The quad document is invalid")?;
    info!(
        quads = entities.quad_count(),
        entities = entities.len(),
        "Parsed quad document"
    );

    let renderer = TermRenderer::new(render.to_config());
    let mut out = BufWriter::new(stdout().lock());
    for key in entities.sorted_keys() {
        let Some(entity) = entities.get(key) else {
            continue;
        };
        let view = renderer.render_entity(entity);
        match render.output {
            OutputFormat::Text => write_text_table(&mut out, &view)?,
            OutputFormat::Html => out.write_all(view.to_html().as_bytes())?,
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text_table(out: &mut impl Write, view: &EntityView) -> anyhow::Result<()> {
    writeln!(out, "{} (graph {})", view.subject, view.graph)?;
    let mut table = Table::new();
    table.set_titles(row!["Property", "Value", "Graph"]);
    for entity_row in &view.rows {
        table.add_row(row![entity_row.property, entity_row.value, entity_row.graph]);
    }
    table.print(out)?;
    writeln!(out)?;
    Ok(())
}

fn term(json: &str, render: &RenderArgs) -> anyhow::Result<()> {
    let value = serde_json::from_str(json).context("The term is not valid JSON")?;
    let fragment: Fragment = TermRenderer::new(render.to_config())
        .render_json(&value)
        .context("Cannot render the term")?;
    match render.output {
        OutputFormat::Text => println!("{fragment}"),
        OutputFormat::Html => println!("{}", fragment.to_html()),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;
    use predicates::prelude::*;

    const DOCUMENT: &str = "<http://example.com/s> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.com/C> <http://example.com/g> .\n\
        _:b <http://www.w3.org/2000/01/rdf-schema#label> \"Foo Bar\"@en <http://example.com/g> .\n\
        <http://example.com/s> <http://example.com/knows> _:b <http://example.com/g> .\n";

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command
            .arg("run")
            .arg("--quiet")
            .arg("--bin")
            .arg("quadlens");
        command.arg("--");
        command
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("quadlens"));
    }

    #[test]
    fn cli_inspect_file() -> Result<()> {
        let input_file = NamedTempFile::new("input.nq")?;
        input_file.write_str(DOCUMENT)?;
        cli_command()
            .arg("inspect")
            .arg("--file")
            .arg(input_file.path())
            .assert()
            .success()
            .stdout(
                predicate::str::contains("http://example.com/s (graph http://example.com/g)")
                    .and(predicate::str::contains("rdf:type"))
                    .and(predicate::str::contains("_:b (graph http://example.com/g)"))
                    .and(predicate::str::contains("\"Foo Bar\"@en")),
            );
        Ok(())
    }

    #[test]
    fn cli_inspect_stdin_as_html() {
        cli_command()
            .arg("inspect")
            .arg("--output")
            .arg("html")
            .arg("--prefix")
            .arg("ex=http://example.com/")
            .arg("--explore-path")
            .arg("/explore")
            .write_stdin(DOCUMENT)
            .assert()
            .success()
            .stdout(
                predicate::str::contains("<table class=\"rdf-entity\">")
                    .and(predicate::str::contains(">ex:knows</a>"))
                    .and(predicate::str::contains(
                        "href=\"/explore?iri=http%3A%2F%2Fexample%2Ecom%2Fs\"",
                    )),
            );
    }

    #[test]
    fn cli_inspect_truncated_document() {
        cli_command()
            .arg("inspect")
            .write_stdin("<http://example.com/s> <http://example.com/p> <http://example.com/o> .\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Truncated quad at line 1, column 1"));
    }

    #[test]
    fn cli_inspect_invalid_prefix() {
        cli_command()
            .arg("inspect")
            .arg("--prefix")
            .arg("ex")
            .write_stdin(DOCUMENT)
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected NAME=IRI"));
    }

    #[test]
    fn cli_term() {
        cli_command()
            .arg("term")
            .arg(r#"{"type": "literal", "value": "42", "datatype": "http://www.w3.org/2001/XMLSchema#integer"}"#)
            .assert()
            .success()
            .stdout("\"42\"^^<xsd:integer>\n");
    }

    #[test]
    fn cli_term_from_stdin_as_html() {
        cli_command()
            .arg("term")
            .arg("--output")
            .arg("html")
            .write_stdin(r#"{"type": "bnode", "value": "b0"}"#)
            .assert()
            .success()
            .stdout("<span class=\"rdf-bnode\">_:b0</span>\n");
    }

    #[test]
    fn cli_term_unknown_shape() {
        cli_command()
            .arg("term")
            .arg(r#"{"type": "graph", "value": "x"}"#)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown term type \"graph\""));
    }
}
