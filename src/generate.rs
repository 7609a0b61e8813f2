//! Assembles a chart file out of a directory of one-row JSON files.

use crate::model::{EffectivenessEntry, TypeDefenseRow};
use crate::types::Type;
use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct RowFile {
    #[serde(default)]
    tipo: Option<String>,
    #[serde(default)]
    defesa: Vec<EffectivenessEntry>,
}

#[derive(Debug)]
pub struct FileError {
    pub file: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct Collected {
    pub rows: Vec<TypeDefenseRow>,
    pub errors: Vec<FileError>,
}

impl Collected {
    pub fn processed(&self) -> usize {
        self.rows.len()
    }
}

fn read_row(path: &Path) -> Result<TypeDefenseRow> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed: RowFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    let label = parsed
        .tipo
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| anyhow!("sem tipo"))?;
    let attacking: Type = label.parse()?;
    Ok(TypeDefenseRow {
        attacking,
        entries: parsed.defesa,
    })
}

/// Reads every `*.json` in `dir`, sorted by file name. Bad files are
/// reported and skipped; a type seen twice keeps the later file.
pub fn collect_dir(dir: &Path) -> Result<Collected> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    info!("Processando {} arquivos JSON...", files.len());

    let mut collected = Collected::default();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match read_row(&path) {
            Ok(row) => {
                info!("OK {name} -> {}", row.attacking);
                match collected
                    .rows
                    .iter_mut()
                    .find(|r| r.attacking == row.attacking)
                {
                    Some(existing) => *existing = row,
                    None => collected.rows.push(row),
                }
            }
            Err(err) => {
                warn!("ERRO {name} -> {err:#}");
                collected.errors.push(FileError {
                    file: path,
                    reason: format!("{err:#}"),
                });
            }
        }
    }
    Ok(collected)
}

pub fn write_chart(rows: &[TypeDefenseRow], output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(output, json + "\n")
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Arquivo gerado: {}", output.display());
    info!("Total de tipos processados: {}", rows.len());
    Ok(())
}
