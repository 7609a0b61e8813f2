use crate::error::ChartError;
use crate::loader::DefenseRegistry;
use crate::model::TypeDefenseRow;
use crate::types::{Type, TYPE_COUNT};
use log::debug;
use std::collections::HashSet;

/// In-memory registry of defense rows, filled one row at a time.
#[derive(Debug, Clone, Default)]
pub struct DefenseTable {
    rows: [Option<[f32; TYPE_COUNT]>; TYPE_COUNT],
    rejected: HashSet<Type>,
}

impl DefenseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later registration of `ty` fail.
    pub fn reject(&mut self, ty: Type) {
        self.rejected.insert(ty);
    }

    pub fn register(&mut self, row: &TypeDefenseRow) -> Result<(), ChartError> {
        if self.rejected.contains(&row.attacking) {
            return Err(ChartError::Rejected(row.attacking));
        }
        let values = row.multipliers()?;
        if self.rows[row.attacking.index()].replace(values).is_some() {
            debug!("replacing defense row for {}", row.attacking);
        }
        Ok(())
    }

    pub fn apply_defense_json(&mut self, text: &str) -> Result<Type, ChartError> {
        let row = TypeDefenseRow::from_json(text)?;
        self.register(&row)?;
        Ok(row.attacking)
    }

    pub fn multiplier(&self, attacking: Type, defending: Type) -> Option<f32> {
        self.rows[attacking.index()].map(|r| r[defending.index()])
    }

    /// `None` when `attacking` has not been registered.
    pub fn effectiveness(&self, attacking: Type, defenders: &[Type]) -> Option<f32> {
        let row = self.rows[attacking.index()]?;
        Some(defenders.iter().map(|d| row[d.index()]).product())
    }

    pub fn registered(&self) -> Vec<Type> {
        Type::ALL
            .iter()
            .copied()
            .filter(|t| self.rows[t.index()].is_some())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == TYPE_COUNT
    }
}

impl DefenseRegistry for DefenseTable {
    fn apply_defense(&mut self, row: &TypeDefenseRow) -> anyhow::Result<()> {
        self.register(row)?;
        Ok(())
    }
}
