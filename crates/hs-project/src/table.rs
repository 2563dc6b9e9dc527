//! Tabular input series (`t_out`, `heat_gain`) read from CSV.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ProjectError, ProjectResult};

pub const T_OUT: &str = "t_out";
pub const HEAT_GAIN: &str = "heat_gain";

/// Column-aligned input series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTable {
    pub t_out: Vec<f64>,
    pub heat_gain: Vec<f64>,
}

impl InputTable {
    /// Row count; assumes both columns are aligned.
    pub fn len(&self) -> usize {
        self.t_out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t_out.is_empty()
    }
}

#[derive(Deserialize)]
struct InputRow {
    t_out: f64,
    heat_gain: f64,
}

/// Read a headed CSV table. Columns may appear in any order; extra columns are ignored.
pub fn read_input_csv<R: Read>(reader: R) -> ProjectResult<InputTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in [T_OUT, HEAT_GAIN] {
        if !headers.iter().any(|h| h == column) {
            return Err(ProjectError::MissingColumn { column });
        }
    }

    let mut table = InputTable::default();
    for row in rdr.deserialize() {
        let row: InputRow = row?;
        table.t_out.push(row.t_out);
        table.heat_gain.push(row.heat_gain);
    }
    Ok(table)
}

pub fn read_input_csv_path(path: &Path) -> ProjectResult<InputTable> {
    let file = std::fs::File::open(path)?;
    let table = read_input_csv(std::io::BufReader::new(file))?;
    tracing::debug!(path = %path.display(), rows = table.len(), "read input table");
    Ok(table)
}
