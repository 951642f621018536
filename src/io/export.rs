//! Export fetched records to CSV or JSON.
//!
//! CSV columns follow the record's field order; JSON carries the full fetch
//! output (model, total, diagnostics, records).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{Record, RecordValue};
use crate::error::AppError;
use crate::provider::FetchOutput;

const CSV_HEADER: [&str; 11] = [
    "period",
    "area",
    "area_name",
    "product",
    "product_name",
    "process",
    "process_name",
    "series",
    "series_description",
    "value",
    "units",
];

/// Write records as CSV to any writer.
pub fn write_csv<W: Write>(w: W, records: &[Record]) -> std::io::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(CSV_HEADER)?;
    for r in records {
        let value = match &r.value {
            Some(RecordValue::Number(v)) => v.to_string(),
            Some(RecordValue::Text(s)) => s.clone(),
            None => String::new(),
        };
        let fields: [&str; 11] = [
            r.period.as_str(),
            &r.area,
            &r.area_name,
            &r.product,
            &r.product_name,
            &r.process,
            &r.process_name,
            &r.series,
            &r.series_description,
            &value,
            &r.units,
        ];
        wtr.write_record(fields)?;
    }
    wtr.flush()
}

/// Write records to a CSV file.
pub fn write_records_csv(path: &Path, records: &[Record]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::io("failed to create CSV", path, e))?;
    write_csv(BufWriter::new(file), records).map_err(|e| AppError::io("failed to write CSV", path, e))
}

/// Write the full fetch output as pretty JSON.
pub fn write_output_json(path: &Path, output: &FetchOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::io("failed to create JSON", path, e))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, output)?;
    w.flush().map_err(|e| AppError::io("failed to write JSON", path, e))
}
