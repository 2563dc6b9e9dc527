//! Scenario validation logic.

use crate::schema::{InputsDef, SCENARIO_VERSION, Scenario};
use crate::table::InputTable;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input series length mismatch: t_out has {t_out} rows, heat_gain has {heat_gain}")]
    LengthMismatch { t_out: usize, heat_gain: usize },

    #[error("Input series are empty")]
    EmptyInputs,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version != SCENARIO_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.name.trim().is_empty() {
        return Err(invalid("name", &scenario.name, "must not be empty"));
    }

    let model = &scenario.model;
    if !model.hloss.is_finite() {
        return Err(invalid("model.hloss", model.hloss, "must be finite"));
    }
    if !model.sheat.is_finite() || model.sheat == 0.0 {
        return Err(invalid("model.sheat", model.sheat, "must be finite and non-zero"));
    }
    if !scenario.initial.init_t_room.is_finite() {
        return Err(invalid(
            "initial.init_t_room",
            scenario.initial.init_t_room,
            "must be finite",
        ));
    }

    match &scenario.inputs {
        InputsDef::Inline { t_out, heat_gain } => check_series(t_out.len(), heat_gain.len()),
        InputsDef::Csv { path } => {
            if path.as_os_str().is_empty() {
                return Err(invalid("inputs.path", "", "must not be empty"));
            }
            Ok(())
        }
    }
}

pub fn validate_table(table: &InputTable) -> Result<(), ValidationError> {
    check_series(table.t_out.len(), table.heat_gain.len())
}

fn check_series(t_out: usize, heat_gain: usize) -> Result<(), ValidationError> {
    if t_out != heat_gain {
        return Err(ValidationError::LengthMismatch { t_out, heat_gain });
    }
    if t_out == 0 {
        return Err(ValidationError::EmptyInputs);
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
