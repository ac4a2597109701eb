//! Saved-gradient persistence.
//!
//! The store is a JSON array. New records look like
//! `{ "name", "colors", "mode", "timestamp" }`, but nothing is validated or
//! deduplicated: entries of any shape are kept in the file, and listings
//! show only the ones they can interpret. A missing or empty store reads as
//! an empty list.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use prism_engine::{Color, Mode};

/// One saved gradient.
///
/// Every field is optional on read. Colors stay as text so odd entries
/// written by other tools are listed as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGradient {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_items")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Unix time in milliseconds.
    #[serde(default)]
    pub timestamp: u64,
}

impl SavedGradient {
    pub fn new(name: impl Into<String>, colors: &[Color], mode: Mode) -> Self {
        Self {
            name: name.into(),
            colors: colors.iter().map(Color::to_string).collect(),
            mode: Some(mode.to_string()),
            timestamp: now_millis(),
        }
    }

    /// Colors that parse as hex; anything else is skipped.
    pub fn parsed_colors(&self) -> Vec<Color> {
        self.colors.iter().filter_map(|c| c.parse().ok()).collect()
    }

    /// Stored mode, falling back to linear when absent or unknown.
    pub fn mode(&self) -> Mode {
        self.mode.as_deref().map(Mode::from_name_or_default).unwrap_or_default()
    }
}

/// Keeps the string items of an array and drops everything else.
fn string_items<'de, D>(de: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Value>::deserialize(de)?;
    Ok(items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Append-only list of saved gradients.
pub trait GradientStore {
    fn save(&mut self, name: &str, colors: &[Color], mode: Mode) -> Result<()>;
    fn load(&self) -> Result<Vec<SavedGradient>>;
}

/// Store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw array entries, whatever their shape.
    fn read_entries(&self) -> Result<Vec<Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&text)
            .with_context(|| format!("{} is not a JSON array", self.path.display()))
    }
}

impl GradientStore for JsonFileStore {
    fn save(&mut self, name: &str, colors: &[Color], mode: Mode) -> Result<()> {
        let mut entries = self.read_entries()?;
        let record = SavedGradient::new(name, colors, mode);
        entries.push(serde_json::to_value(&record).context("serializing saved gradient")?);

        let json = serde_json::to_string_pretty(&entries).context("serializing saved gradients")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;

        log::debug!("saved {name:?} to {} ({} entries)", self.path.display(), entries.len());
        Ok(())
    }

    fn load(&self) -> Result<Vec<SavedGradient>> {
        let records = self
            .read_entries()?
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::debug!("skipping saved entry: {e}");
                    None
                }
            })
            .collect();
        Ok(records)
    }
}

/// In-process store, for sessions with no file backing.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<SavedGradient>,
}

impl GradientStore for MemoryStore {
    fn save(&mut self, name: &str, colors: &[Color], mode: Mode) -> Result<()> {
        self.records.push(SavedGradient::new(name, colors, mode));
        Ok(())
    }

    fn load(&self) -> Result<Vec<SavedGradient>> {
        Ok(self.records.clone())
    }
}
