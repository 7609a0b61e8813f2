//! Bulk registration of the chart rows with an outside registry.

use crate::chart::TypeChart;
use crate::model::TypeDefenseRow;
use crate::types::Type;
use log::{info, warn};

/// Receives one full defense row per call. An error skips that row only.
pub trait DefenseRegistry {
    fn apply_defense(&mut self, row: &TypeDefenseRow) -> anyhow::Result<()>;
}

impl<F> DefenseRegistry for F
where
    F: FnMut(&TypeDefenseRow) -> anyhow::Result<()>,
{
    fn apply_defense(&mut self, row: &TypeDefenseRow) -> anyhow::Result<()> {
        self(row)
    }
}

/// Where the loader reports once the pass is over.
pub trait StatusSink {
    fn render_status(&mut self);
    fn show_result(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub attacking: Type,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub failures: Vec<LoadFailure>,
}

impl LoadSummary {
    pub fn status_line(&self) -> String {
        format!("{} tipagens carregadas (dados embarcados).", self.loaded)
    }

    pub fn failed_types(&self) -> Vec<Type> {
        self.failures.iter().map(|f| f.attacking).collect()
    }
}

/// Registers every row of `chart` in order, then renders status and shows
/// the result line. Never stops early.
pub fn load_chart(
    chart: &TypeChart,
    registry: &mut impl DefenseRegistry,
    sink: &mut impl StatusSink,
) -> LoadSummary {
    info!("Carregando tipagens embarcadas...");
    let mut summary = LoadSummary::default();

    for row in chart.rows() {
        match registry.apply_defense(row) {
            Ok(()) => summary.loaded += 1,
            Err(error) => {
                warn!("Erro ao processar tipo {}: {error:#}", row.attacking);
                summary.failures.push(LoadFailure {
                    attacking: row.attacking,
                    message: format!("{error:#}"),
                });
            }
        }
    }

    sink.render_status();
    sink.show_result(&summary.status_line());
    info!("{} tipagens carregadas com sucesso.", summary.loaded);
    summary
}

/// [`load_chart`] over the embedded chart.
pub fn load_embedded(
    registry: &mut impl DefenseRegistry,
    sink: &mut impl StatusSink,
) -> LoadSummary {
    load_chart(TypeChart::embedded(), registry, sink)
}

/// Sink that keeps what it was shown, for callers without a display.
#[derive(Debug, Clone, Default)]
pub struct StatusBuffer {
    pub renders: usize,
    pub result: Option<String>,
}

impl StatusSink for StatusBuffer {
    fn render_status(&mut self) {
        self.renders += 1;
    }

    fn show_result(&mut self, text: &str) {
        self.result = Some(text.to_string());
    }
}
