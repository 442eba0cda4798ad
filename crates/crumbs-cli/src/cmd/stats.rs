//! `crumbs stats` — size and content hash of each relation graph.
//!
//! Hosts compare the hashes between runs to tell whether the indexer
//! produced a different snapshot.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use crumbs_core::RelationKind;
use serde::Serialize;

use crate::cmd::load_snapshot;
use crate::output::{OutputMode, field, heading, render};

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// JSON graph snapshot written by the indexer.
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct GraphStatsRow {
    pub kind: RelationKind,
    pub nodes: usize,
    pub edges: usize,
    pub content_hash: String,
}

/// Execute `crumbs stats`.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or output fails.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&args.snapshot, output)?;
    let graphs = snapshot.graph_set();

    let rows: Vec<GraphStatsRow> = RelationKind::ALL
        .iter()
        .map(|&kind| {
            let graph = graphs.get(kind);
            GraphStatsRow {
                kind,
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                content_hash: graph.content_hash(),
            }
        })
        .collect();

    render(
        output,
        &rows,
        |rows, w| {
            for row in rows {
                writeln!(w, "{}\t{}\t{}\t{}", row.kind, row.nodes, row.edges, row.content_hash)?;
            }
            Ok(())
        },
        |rows, w| render_stats_human(rows, w),
    )
}

fn render_stats_human(rows: &[GraphStatsRow], w: &mut dyn Write) -> std::io::Result<()> {
    for row in rows {
        heading(w, &format!("{} graph", row.kind.type_label()))?;
        field(w, "nodes", row.nodes.to_string())?;
        field(w, "edges", row.edges.to_string())?;
        field(w, "hash", &row.content_hash)?;
        writeln!(w)?;
    }
    Ok(())
}
