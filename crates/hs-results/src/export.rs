//! CSV and JSON export of result frames.

use std::io::Write;

use crate::frame::ResultFrame;
use crate::ResultsResult;

/// One header row of column names, then one row per step.
pub fn write_csv<W: Write>(frame: &ResultFrame, writer: W) -> ResultsResult<()> {
    frame.check_shape()?;
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(frame.column_names())?;
    for row in 0..frame.n_rows() {
        wtr.write_record(frame.columns.iter().map(|c| c.values[row].to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Column-oriented JSON: `{"columns":[{"name":..,"values":[..]},..]}`.
pub fn write_json<W: Write>(frame: &ResultFrame, writer: W) -> ResultsResult<()> {
    frame.check_shape()?;
    serde_json::to_writer_pretty(writer, frame)?;
    Ok(())
}
