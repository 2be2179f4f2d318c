//! Report assembly and rendering.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::error::WeightError;
use crate::scan::{DependencyMap, ModuleEntry};

/// Everything a run prints.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Every distinct package seen, largest first.
    #[serde(rename = "Summary")]
    pub summary: Vec<ModuleEntry>,
    /// Dependencies of each compiled unit.
    #[serde(rename = "DependencyMap")]
    pub dependency_map: DependencyMap,
}

impl Report {
    /// Builds the report, deriving the summary from `dependency_map`.
    #[must_use]
    pub fn new(dependency_map: DependencyMap) -> Self {
        let summary = summarize(&dependency_map);
        Self { summary, dependency_map }
    }
}

/// One entry per package name across all groups, sorted by size descending
/// then by name.
///
/// When a name occurs more than once the occurrence visited last (groups in
/// key order, entries in list order) is kept.
#[must_use]
pub fn summarize(map: &DependencyMap) -> Vec<ModuleEntry> {
    let mut by_name: HashMap<&str, &ModuleEntry> = HashMap::new();
    for entry in map.values().flatten() {
        by_name.insert(entry.name(), entry);
    }

    let mut summary: Vec<ModuleEntry> = by_name.into_values().cloned().collect();
    summary.sort_by(|a, b| b.size().cmp(&a.size()).then_with(|| a.name().cmp(b.name())));
    summary
}

/// Writes the report as plain text.
///
/// # Errors
///
/// Returns [`WeightError::Render`] if writing fails.
pub fn render_text(report: &Report, mut out: impl Write) -> Result<(), WeightError> {
    write_text(report, &mut out).map_err(|e| WeightError::Render(e.to_string()))
}

fn write_text(report: &Report, out: &mut impl Write) -> std::io::Result<()> {
    for (module, deps) in &report.dependency_map {
        writeln!(out, "{module}")?;
        for dep in deps {
            writeln!(out, "\t{:>8} {}", dep.size_human(), dep.name())?;
        }
    }

    writeln!(out)?;

    for module in &report.summary {
        writeln!(out, "{:>8} {}", module.size_human(), module.name())?;
    }
    out.flush()
}

/// Writes the report as a single line of JSON.
///
/// # Errors
///
/// Returns [`WeightError::Render`] if serialization or writing fails.
pub fn render_json(report: &Report, mut out: impl Write) -> Result<(), WeightError> {
    serde_json::to_writer(&mut out, report).map_err(|e| WeightError::Render(e.to_string()))?;
    out.flush().map_err(|e| WeightError::Render(e.to_string()))
}
