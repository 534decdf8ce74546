use crate::error::{FfResult, FretForgeError};
use crate::fingering::Fingering;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct FingeringRecord {
    name: String,
    fingering: String,
}

/// Reads `name,fingering` rows. A malformed fingering fails the whole load with its line.
pub fn load_fingerings<R: Read>(reader: R) -> FfResult<Vec<(String, Fingering)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let raw = result?;
        let line = raw.position().map(|p| p.line()).unwrap_or_default();
        let record: FingeringRecord = raw.deserialize(Some(&headers))?;
        let fingering: Fingering = record.fingering.parse().map_err(|e| {
            FretForgeError::Parse(format!("line {} ('{}'): {}", line, record.name, e))
        })?;
        rows.push((record.name, fingering));
    }

    debug!("Loaded {} fingerings", rows.len());
    Ok(rows)
}

pub fn load_fingerings_from_file<P: AsRef<Path>>(path: P) -> FfResult<Vec<(String, Fingering)>> {
    let file = File::open(path)?;
    load_fingerings(file)
}
