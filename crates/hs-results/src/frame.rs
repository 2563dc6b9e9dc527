//! Column-ordered result frame.

use hs_model::SimOutput;
use serde::{Deserialize, Serialize};

use crate::{ResultsError, ResultsResult};

pub const T_ROOM: &str = "t_room";
pub const HEAT_LOSS: &str = "heat_loss";
pub const HEAT_CONTENT: &str = "heat_content";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Named columns in a fixed order, all of the same length.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultFrame {
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FrameSummary {
    pub n_rows: usize,
    pub t_room_min: f64,
    pub t_room_max: f64,
    pub t_room_final: f64,
}

impl ResultFrame {
    /// `t_room` first, then `heat_loss` and `heat_content` when the run was expanded.
    pub fn from_output(output: &SimOutput) -> Self {
        let mut columns = vec![Column {
            name: T_ROOM.to_string(),
            values: output.room_temp.clone(),
        }];
        if let Some(detail) = &output.detail {
            columns.push(Column {
                name: HEAT_LOSS.to_string(),
                values: detail.heat_loss.clone(),
            });
            columns.push(Column {
                name: HEAT_CONTENT.to_string(),
                values: detail.heat_content.clone(),
            });
        }
        Self { columns }
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Frames built from outputs are rectangular; deserialized ones may not be.
    pub fn check_shape(&self) -> ResultsResult<()> {
        let expected = self.n_rows();
        for c in &self.columns {
            if c.values.len() != expected {
                return Err(ResultsError::Shape {
                    column: c.name.clone(),
                    len: c.values.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    pub fn summary(&self) -> Option<FrameSummary> {
        let t_room = self.column(T_ROOM)?;
        let t_room_final = *t_room.last()?;
        let (min, max) = t_room
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
                (lo.min(t), hi.max(t))
            });
        Some(FrameSummary {
            n_rows: t_room.len(),
            t_room_min: min,
            t_room_max: max,
            t_room_final,
        })
    }
}
