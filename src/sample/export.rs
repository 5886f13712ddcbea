//! Export helpers for sample records: JSON, JSON lines, CSV.

use serde_json::Value;

use super::SampleRecord;
use crate::error::RenderError;

/// Pretty-printed JSON array of all records.
pub fn samples_to_json(samples: &[SampleRecord]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(samples)?)
}

/// Line-delimited JSON, one record per line.
pub fn samples_to_jsonl(samples: &[SampleRecord]) -> Result<String, RenderError> {
    let mut out = String::new();
    for record in samples {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Tabular CSV export.
///
/// The header is the union of all field names in first-seen order; rows
/// keep record order and leave blank cells for fields the drawn event does
/// not declare.
pub fn samples_to_csv(samples: &[SampleRecord]) -> Result<String, RenderError> {
    if samples.is_empty() {
        return Ok(String::new());
    }

    let mut columns: Vec<&str> = Vec::new();
    for record in samples {
        for key in record.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(&columns)?;
    for record in samples {
        let row: Vec<String> = columns
            .iter()
            .map(|col| match record.get(*col) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            })
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
