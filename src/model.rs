use crate::error::ChartError;
use crate::types::{Type, TYPE_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessEntry {
    #[serde(rename = "tipo")]
    pub defending: Type,
    #[serde(rename = "valor")]
    pub multiplier: f32,
}

/// One attacking type together with its multiplier against every type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefenseRow {
    #[serde(rename = "tipo")]
    pub attacking: Type,
    #[serde(rename = "defesa")]
    pub entries: Vec<EffectivenessEntry>,
}

impl TypeDefenseRow {
    pub fn from_json(text: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks that every type appears exactly once with a finite,
    /// non-negative multiplier.
    pub fn validate(&self) -> Result<(), ChartError> {
        self.multipliers().map(|_| ())
    }

    /// Multipliers indexed by [`Type::index`] of the defending type.
    pub fn multipliers(&self) -> Result<[f32; TYPE_COUNT], ChartError> {
        let mut seen = [None::<f32>; TYPE_COUNT];
        for entry in &self.entries {
            if !entry.multiplier.is_finite() || entry.multiplier < 0.0 {
                return Err(ChartError::InvalidMultiplier {
                    attacking: self.attacking,
                    defending: entry.defending,
                    value: entry.multiplier,
                });
            }
            let slot = &mut seen[entry.defending.index()];
            if slot.is_some() {
                return Err(ChartError::DuplicateEntry {
                    attacking: self.attacking,
                    defending: entry.defending,
                });
            }
            *slot = Some(entry.multiplier);
        }
        let mut out = [0.0; TYPE_COUNT];
        for ty in Type::ALL {
            out[ty.index()] = seen[ty.index()].ok_or(ChartError::MissingEntry {
                attacking: self.attacking,
                defending: ty,
            })?;
        }
        Ok(out)
    }

    pub fn multiplier(&self, defending: Type) -> Option<f32> {
        self.entries
            .iter()
            .find(|e| e.defending == defending)
            .map(|e| e.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_row(attacking: Type) -> TypeDefenseRow {
        TypeDefenseRow {
            attacking,
            entries: Type::ALL
                .iter()
                .map(|&defending| EffectivenessEntry {
                    defending,
                    multiplier: 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn complete_row_validates() {
        let mut row = neutral_row(Type::Fogo);
        row.entries[Type::Agua.index()].multiplier = 0.5;
        let values = row.multipliers().expect("row should be valid");
        assert_eq!(values[Type::Agua.index()], 0.5);
        assert_eq!(values[Type::Fogo.index()], 1.0);
    }

    #[test]
    fn missing_entry_is_reported() {
        let mut row = neutral_row(Type::Gelo);
        row.entries.retain(|e| e.defending != Type::Deus);
        assert!(matches!(
            row.validate(),
            Err(ChartError::MissingEntry {
                attacking: Type::Gelo,
                defending: Type::Deus
            })
        ));
    }

    #[test]
    fn duplicate_entry_is_reported() {
        let mut row = neutral_row(Type::Luz);
        row.entries.push(EffectivenessEntry {
            defending: Type::Trevas,
            multiplier: 2.0,
        });
        assert!(matches!(
            row.validate(),
            Err(ChartError::DuplicateEntry {
                defending: Type::Trevas,
                ..
            })
        ));
    }

    #[test]
    fn negative_multiplier_is_reported() {
        let mut row = neutral_row(Type::Pedra);
        row.entries[0].multiplier = -1.0;
        assert!(matches!(
            row.validate(),
            Err(ChartError::InvalidMultiplier { .. })
        ));
    }

    #[test]
    fn wire_names_match_the_row_format() {
        let row = TypeDefenseRow::from_json(
            r#"{"tipo":"agua","defesa":[{"tipo":"eletrico","valor":3.0}]}"#,
        )
        .unwrap();
        assert_eq!(row.attacking, Type::Agua);
        assert_eq!(row.multiplier(Type::Eletrico), Some(3.0));
        assert_eq!(row.multiplier(Type::Fogo), None);
        let json = row.to_json().unwrap();
        assert!(json.contains("\"defesa\""));
        assert!(json.contains("\"valor\":3.0"));
    }
}
