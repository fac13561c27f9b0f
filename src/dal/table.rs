//! Header-addressed CSV tables. Columns are always looked up by name so
//! reordering them in a file never breaks a step.

use std::{collections::HashMap, fs, fs::OpenOptions, path::Path};

use anyhow::{anyhow, Context};
use csv::StringRecord;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open table {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read headers of {}", path.display()))?
            .clone();
        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to read rows of {}", path.display()))?;

        Ok(Table { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    pub fn require_column(&self, name: &str) -> anyhow::Result<usize> {
        self.column(name)
            .ok_or_else(|| anyhow!("Column '{}' not found in table header", name))
    }

    pub fn deserialize<T: DeserializeOwned>(&self) -> anyhow::Result<Vec<T>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.deserialize(Some(&self.headers))
                    .with_context(|| format!("Bad value in data row {}", i + 1))
            })
            .collect()
    }

    /// Writes `values` into column `name`, creating it if needed. Rows are
    /// matched on the trimmed, lower-cased `key_column` cell; unmatched rows
    /// keep their old value. Returns the number of rows updated.
    pub fn upsert_column(
        &mut self,
        name: &str,
        key_column: &str,
        values: &HashMap<String, String>,
    ) -> anyhow::Result<usize> {
        let key_index = self.require_column(key_column)?;
        let value_index = match self.column(name) {
            Some(i) => i,
            None => {
                self.headers.push_field(name);
                self.headers.len() - 1
            }
        };
        let width = self.headers.len();

        let mut matched = 0;
        for row in self.rows.iter_mut() {
            let key = row.get(key_index).unwrap_or_default().trim().to_lowercase();
            let mut fields: Vec<String> = row.iter().map(|f| f.to_string()).collect();
            fields.resize(width, String::new());

            if let Some(value) = values.get(&key) {
                fields[value_index] = value.clone();
                matched += 1;
            }
            *row = StringRecord::from(fields);
        }

        Ok(matched)
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        ensure_parent(path)?;
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}

pub fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Writes a fresh table, header taken from the record's field names.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Appends rows given in `headers` order. A new or empty file gets `headers`
/// as its header line. An existing file keeps its own header and every row is
/// laid out in that column order; columns it lacks are dropped, columns it
/// adds are left empty. All `required` columns must be present.
pub fn append_rows<I>(
    path: &Path,
    headers: &[&str],
    required: &[&str],
    rows: I,
) -> anyhow::Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    ensure_parent(path)?;
    let existing = match path.exists() {
        true => Some(read_headers(path)?).filter(|h| !h.is_empty()),
        false => None,
    };

    let order: Vec<Option<usize>> = match &existing {
        Some(file_headers) => {
            let missing: Vec<&str> = required
                .iter()
                .filter(|r| !file_headers.iter().any(|h| h.trim() == **r))
                .copied()
                .collect();
            if !missing.is_empty() {
                return Err(anyhow!(
                    "Cannot append to {}: header lacks column(s) {}",
                    path.display(),
                    missing.join(", ")
                ));
            }
            file_headers
                .iter()
                .map(|h| headers.iter().position(|name| *name == h.trim()))
                .collect()
        }
        None => (0..headers.len()).map(Some).collect(),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if existing.is_none() {
        writer.write_record(headers)?;
    }
    for row in rows {
        writer.write_record(
            order
                .iter()
                .map(|i| i.and_then(|i| row.get(i)).map_or("", String::as_str)),
        )?;
    }
    writer.flush()?;

    Ok(())
}

fn read_headers(path: &Path) -> anyhow::Result<StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open table {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read headers of {}", path.display()))?
        .clone();
    Ok(headers)
}
