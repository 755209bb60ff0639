use anyhow::{Context, Result};
use clap::Parser;
use relation_lattice::{
    assemble, draw_graph, draw_relation, to_dot, to_hasse, write_report, Format, RelationInput,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "relation_lattice")]
#[command(author, version, about = "Classify a binary relation and report its lattice structure")]
struct Cli {
    /// JSON input document; stdin when omitted
    #[arg(long, short, env = "RELATION_INPUT")]
    input: Option<PathBuf>,

    /// Where to write the report
    #[arg(long, short, env = "RELATION_REPORT", default_value = "report.yaml")]
    output: PathBuf,

    /// Report format; inferred from the output extension when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Also write a Graphviz drawing (the Hasse diagram for orders)
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Refuse domains larger than this
    #[arg(long, env = "RELATION_MAX_ELEMENTS", default_value_t = 64)]
    max_elements: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut buf = String::new();
    match &cli.input {
        Some(path) => {
            buf = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
        }
        None => {
            io::stdin().read_to_string(&mut buf)?;
        }
    }

    let graph = RelationInput::parse(buf.trim())
        .context("parsing relation input")?
        .into_graph(cli.max_elements)?;
    info!(elements = graph.len(), pairs = graph.edge_count(), "loaded relation");

    let report = assemble(&graph)?;
    let format = cli.format.unwrap_or_else(|| Format::from_path(&cli.output));
    write_report(&report.render(), &cli.output, format)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    if let Some(dot_path) = &cli.dot {
        // Draw on a fresh graph so the analysed one stays untouched.
        let shown = if report.lattice.is_some() { to_hasse(&graph)? } else { graph.clone() };
        let mut canvas = draw_graph(shown.nodes().cloned(), None);
        let pairs = relation_lattice::relations(&shown);
        draw_relation(&mut canvas, &pairs, false)?;
        fs::write(dot_path, to_dot(&canvas))
            .with_context(|| format!("writing {}", dot_path.display()))?;
        info!(path = %dot_path.display(), "wrote drawing");
    }
    Ok(())
}
