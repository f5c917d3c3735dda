//! Plan rendering.
//!
//! Renders the planned-move listing in one of four formats. The renderers
//! return plain strings so they can be unit tested; styling is applied by
//! the writer.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for the planned-move listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Aligned two-column table.
    Table,
    /// One `source -> target` line per move.
    Plain,
    /// JSON array of `{source, target}` records.
    Json,
    /// One JSON record per line.
    Ndjson,
}

#[derive(Serialize)]
struct MoveRecord<'a> {
    source: &'a str,
    target: &'a str,
}

/// Render the planned moves in the requested format.
pub fn render_plan(pairs: &[(String, String)], format: PlanFormat) -> String {
    match format {
        PlanFormat::Table => render_table(pairs),
        PlanFormat::Plain => render_plain(pairs),
        PlanFormat::Json => render_json(pairs),
        PlanFormat::Ndjson => render_ndjson(pairs),
    }
}

fn render_plain(pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (source, target) in pairs {
        out.push_str(&format!("{source} -> {target}\n"));
    }
    out
}

fn render_json(pairs: &[(String, String)]) -> String {
    let records: Vec<MoveRecord> = pairs
        .iter()
        .map(|(source, target)| MoveRecord { source, target })
        .collect();
    let mut out = serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string());
    out.push('\n');
    out
}

fn render_ndjson(pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (source, target) in pairs {
        let record = MoveRecord { source, target };
        if let Ok(line) = serde_json::to_string(&record) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn render_table(pairs: &[(String, String)]) -> String {
    let source_width = pairs
        .iter()
        .map(|(source, _)| source.chars().count())
        .max()
        .unwrap_or(0)
        .max("Source".len());
    let target_width = pairs
        .iter()
        .map(|(_, target)| target.chars().count())
        .max()
        .unwrap_or(0)
        .max("Target".len());

    let mut out = String::new();
    out.push_str(&format!(
        " {:<source_width$} | {:<target_width$}\n",
        "Source", "Target"
    ));
    out.push_str(&format!("{}\n", "-".repeat(source_width + target_width + 4)));
    for (source, target) in pairs {
        out.push_str(&format!(
            " {:<source_width$} | {:<target_width$}\n",
            source, target
        ));
    }
    out
}
