//! Type-effectiveness chart for the 30 battle types, with a loader that
//! registers each row with an outside registry.

pub mod chart;
pub mod error;
pub mod generate;
pub mod loader;
pub mod model;
pub mod registry;
pub mod types;

pub use crate::chart::TypeChart;
pub use crate::error::ChartError;
pub use crate::loader::{
    load_chart, load_embedded, DefenseRegistry, LoadFailure, LoadSummary, StatusBuffer, StatusSink,
};
pub use crate::model::{EffectivenessEntry, TypeDefenseRow};
pub use crate::registry::DefenseTable;
pub use crate::types::{Type, TYPE_COUNT};

use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Command {
    Load {
        chart_path: Option<PathBuf>,
        reject: Vec<Type>,
    },
    Lookup {
        attacking: Type,
        defenders: Vec<Type>,
    },
    Generate {
        dir: PathBuf,
        output: PathBuf,
    },
    Check {
        chart_path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub command: Command,
}

fn chart_from(path: Option<&PathBuf>) -> anyhow::Result<Cow<'static, TypeChart>> {
    Ok(match path {
        Some(path) => Cow::Owned(TypeChart::load(path)?),
        None => Cow::Borrowed(TypeChart::embedded()),
    })
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    match opts.command {
        Command::Load { chart_path, reject } => {
            let chart = chart_from(chart_path.as_ref())?;
            let mut table = DefenseTable::new();
            for ty in reject {
                table.reject(ty);
            }
            let mut status = StatusBuffer::default();
            let summary = load_chart(&chart, &mut table, &mut status);
            println!("{}/{} tipos registrados", table.len(), TYPE_COUNT);
            if let Some(result) = status.result {
                println!("{result}");
            }
            for failure in &summary.failures {
                eprintln!("{}: {}", failure.attacking, failure.message);
            }
        }
        Command::Lookup {
            attacking,
            defenders,
        } => {
            let chart = TypeChart::embedded();
            let value = chart.effectiveness(attacking, &defenders);
            let names: Vec<&str> = defenders.iter().map(|t| t.as_str()).collect();
            println!("{attacking} -> {}: {value}", names.join("/"));
        }
        Command::Generate { dir, output } => {
            let collected = generate::collect_dir(&dir)?;
            generate::write_chart(&collected.rows, &output)?;
            println!(
                "Wrote {} rows to {} ({} files skipped)",
                collected.processed(),
                output.display(),
                collected.errors.len()
            );
        }
        Command::Check { chart_path } => {
            let chart = chart_from(chart_path.as_ref())?;
            println!("Chart OK: {} rows x {} entries", chart.len(), TYPE_COUNT);
        }
    }
    Ok(())
}
