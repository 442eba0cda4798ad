//! `crumbs show` — the breadcrumb relationship panel of one note.
//!
//! Prints the real and implied parents, siblings and children of the focal
//! note in either matrix or list layout. Unresolved targets (links to notes
//! that do not exist) are suffixed with `?`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use crumbs_core::{InferenceContext, LinkItem, RelationPanel, Square, ViewMode};
use tracing::debug;

use crate::cmd::load_snapshot;
use crate::config::{failure_code, load_config};
use crate::output::{CliError, OutputMode, field, heading, render, rule};

/// Column width of the real items in matrix layout.
const MATRIX_COLUMN_WIDTH: usize = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Matrix,
    List,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Matrix => Self::Matrix,
            ViewArg::List => Self::List,
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Base name of the note to inspect.
    pub focal: String,

    /// JSON graph snapshot written by the indexer.
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Config file (defaults to <config dir>/crumbs/config.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Layout; overrides the configured default.
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Start in the other layout, as if the toggle had been pressed once.
    #[arg(long)]
    pub toggle: bool,
}

/// Execute `crumbs show <focal>`.
///
/// # Errors
///
/// Returns an error if config or snapshot loading fails, if the focal name
/// is rejected, or if output rendering fails.
pub fn run_show(args: &ShowArgs, output: OutputMode) -> anyhow::Result<()> {
    let config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            CliError::new(failure_code(&e), format!("{e:#}")).report(output)?;
            return Err(e);
        }
    };
    let snapshot = load_snapshot(&args.snapshot, output)?;
    let graphs = snapshot.graph_set();

    let mut view = args.view.map_or(config.panel.default_view, ViewMode::from);
    if args.toggle {
        view = view.toggle();
    }

    let ctx = InferenceContext::builder()
        .graphs(&graphs)
        .lookup(&snapshot.unresolved)
        .config(&config.panel)
        .build()?;

    let panel = match ctx.panel(&args.focal, view) {
        Ok(p) => p,
        Err(e) => {
            CliError::new(e.code(), e.to_string()).report(output)?;
            return Err(e.into());
        }
    };
    debug!(focal = %panel.focal, view = %panel.view, "rendering panel");

    render(
        output,
        &panel,
        |panel, w| render_panel_text(panel, w),
        |panel, w| render_panel_human(panel, w),
    )
}

fn display_target(item: &LinkItem) -> String {
    if item.resolved {
        item.target.clone()
    } else {
        format!("{}?", item.target)
    }
}

/// One tab-separated row per item: `kind  side  target  resolution`.
fn render_panel_text(panel: &RelationPanel, w: &mut dyn Write) -> std::io::Result<()> {
    for square in &panel.squares {
        let sides = [("real", &square.real), ("implied", &square.implied)];
        for (side, items) in sides {
            for item in items {
                let state = if item.resolved { "resolved" } else { "unresolved" };
                writeln!(w, "{}\t{side}\t{}\t{state}", square.kind, item.target)?;
            }
        }
    }
    Ok(())
}

fn render_panel_human(panel: &RelationPanel, w: &mut dyn Write) -> std::io::Result<()> {
    field(w, "focal", &panel.focal)?;
    field(
        w,
        "view",
        format!("{} (toggle: {})", panel.view, panel.view.toggle_label()),
    )?;
    rule(w)?;
    writeln!(w)?;

    for square in &panel.squares {
        match panel.view {
            ViewMode::Matrix => render_square_matrix(square, w)?,
            ViewMode::List => render_square_list(square, w)?,
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Real items on the left, implied on the right.
fn render_square_matrix(square: &Square, w: &mut dyn Write) -> std::io::Result<()> {
    heading(w, &square.label)?;
    if square.is_empty() {
        return writeln!(w, "  (none)");
    }

    writeln!(w, "  {:<width$}{}", "real", "implied", width = MATRIX_COLUMN_WIDTH)?;
    let rows = square.real.len().max(square.implied.len());
    for i in 0..rows {
        let left = square.real.get(i).map(display_target).unwrap_or_default();
        let right = square.implied.get(i).map(display_target).unwrap_or_default();
        writeln!(w, "  {left:<width$}{right}", width = MATRIX_COLUMN_WIDTH)?;
    }
    Ok(())
}

/// One bullet per item, implied entries marked.
fn render_square_list(square: &Square, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{}", square.label)?;
    if square.is_empty() {
        return writeln!(w, "  (none)");
    }

    for item in &square.real {
        writeln!(w, "  - {}", display_target(item))?;
    }
    for item in &square.implied {
        writeln!(w, "  - {} (implied)", display_target(item))?;
    }
    Ok(())
}
