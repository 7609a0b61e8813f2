//! The complete attacker/defender multiplier matrix.
//!
//! The embedded chart is compiled into the binary from `data/tipagens.json`
//! and parsed on first use. Rows keep the order they were written in, which
//! is the order the loader registers them.

use crate::error::ChartError;
use crate::model::TypeDefenseRow;
use crate::types::{Type, TYPE_COUNT};
use anyhow::Context;
use once_cell::sync::Lazy;
use std::path::Path;

static EMBEDDED: Lazy<TypeChart> = Lazy::new(|| {
    let json_str = include_str!("../data/tipagens.json");
    TypeChart::from_json(json_str).expect("Failed to parse data/tipagens.json")
});

#[derive(Debug, Clone)]
pub struct TypeChart {
    rows: Vec<TypeDefenseRow>,
    grid: [[f32; TYPE_COUNT]; TYPE_COUNT],
}

impl TypeChart {
    /// The chart shipped with the crate.
    pub fn embedded() -> &'static TypeChart {
        &EMBEDDED
    }

    pub fn from_json(text: &str) -> Result<Self, ChartError> {
        let rows: Vec<TypeDefenseRow> = serde_json::from_str(text)?;
        Self::from_rows(rows)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chart file at {}", path.display()))?;
        let chart = Self::from_json(&raw)
            .with_context(|| format!("Invalid chart in {}", path.display()))?;
        Ok(chart)
    }

    /// Builds a chart from rows, requiring exactly one complete row per type.
    pub fn from_rows(rows: Vec<TypeDefenseRow>) -> Result<Self, ChartError> {
        let mut grid = [[0.0; TYPE_COUNT]; TYPE_COUNT];
        let mut present = [false; TYPE_COUNT];
        for row in &rows {
            let idx = row.attacking.index();
            if present[idx] {
                return Err(ChartError::DuplicateRow(row.attacking));
            }
            present[idx] = true;
            grid[idx] = row.multipliers()?;
        }
        if let Some(missing) = Type::ALL.iter().find(|t| !present[t.index()]) {
            return Err(ChartError::MissingRow(*missing));
        }
        Ok(Self { rows, grid })
    }

    /// Rows in chart iteration order.
    pub fn rows(&self) -> &[TypeDefenseRow] {
        &self.rows
    }

    pub fn row(&self, attacking: Type) -> Option<&TypeDefenseRow> {
        self.rows.iter().find(|r| r.attacking == attacking)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn multiplier(&self, attacking: Type, defending: Type) -> f32 {
        self.grid[attacking.index()][defending.index()]
    }

    /// Combined multiplier against a defender holding several types.
    pub fn effectiveness(&self, attacking: Type, defenders: &[Type]) -> f32 {
        if defenders.is_empty() {
            return 1.0;
        }
        let mut multiplier = 1.0;
        for &t in defenders {
            multiplier *= self.multiplier(attacking, t);
        }
        multiplier
    }

    pub fn to_json_pretty(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}
