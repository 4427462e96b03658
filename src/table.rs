//! Reading input pairs and writing result tables

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{PubMedError, Result};
use crate::pipeline::{InputPair, ResultRow};

/// Serialization used for the output table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    JsonLines,
    /// A single pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jsonl" | "ndjson" => Ok(OutputFormat::JsonLines),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other} (expected jsonl or json)")),
        }
    }
}

/// Read input pairs from CSV with `active_substance` and `disease_name` columns
///
/// Other columns are ignored.
pub fn read_pairs_csv<R: Read>(reader: R) -> Result<Vec<InputPair>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut pairs = Vec::new();
    for record in reader.deserialize() {
        let pair: InputPair = record?;
        pairs.push(pair);
    }

    debug!(pairs = pairs.len(), "Read input pairs");
    Ok(pairs)
}

/// Load input pairs from a CSV file
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<InputPair>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PubMedError::IoError {
        message: format!("{}: {}", path.display(), e),
    })?;

    let pairs = read_pairs_csv(BufReader::new(file))?;
    info!(path = %path.display(), pairs = pairs.len(), "Loaded input pairs");
    Ok(pairs)
}

/// Write result rows in the given format
pub fn write_rows<W: Write>(writer: W, rows: &[ResultRow], format: OutputFormat) -> Result<()> {
    let mut writer = BufWriter::new(writer);

    match format {
        OutputFormat::JsonLines => {
            for row in rows {
                serde_json::to_writer(&mut writer, row)?;
                writer.write_all(b"\n")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write result rows to a file, replacing any existing content
pub fn save_rows<P: AsRef<Path>>(path: P, rows: &[ResultRow], format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PubMedError::IoError {
        message: format!("{}: {}", path.display(), e),
    })?;

    write_rows(file, rows, format)?;
    info!(path = %path.display(), rows = rows.len(), "Saved result table");
    Ok(())
}
