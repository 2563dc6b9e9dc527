//! hs-project: scenario file format, tabular inputs and validation.

pub mod schema;
pub mod table;
pub mod validate;

pub use schema::*;
pub use table::{InputTable, read_input_csv, read_input_csv_path};
pub use validate::{ValidationError, validate_scenario, validate_table};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Missing input column: {column}")]
    MissingColumn { column: &'static str },

    #[error("Unsupported scenario file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    validate_scenario(&scenario)?;
    tracing::debug!(path = %path.display(), name = %scenario.name, "loaded scenario");
    Ok(scenario)
}

pub fn save_yaml(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    validate_scenario(&scenario)?;
    tracing::debug!(path = %path.display(), name = %scenario.name, "loaded scenario");
    Ok(scenario)
}

pub fn save_json(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a scenario, picking the format from the file extension.
pub fn load_scenario(path: &Path) -> ProjectResult<Scenario> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Materialize the scenario's input series. CSV paths are relative to `base_dir`.
pub fn resolve_inputs(scenario: &Scenario, base_dir: &Path) -> ProjectResult<InputTable> {
    let table = match &scenario.inputs {
        InputsDef::Inline { t_out, heat_gain } => InputTable {
            t_out: t_out.clone(),
            heat_gain: heat_gain.clone(),
        },
        InputsDef::Csv { path } => read_input_csv_path(&base_dir.join(path))?,
    };
    validate_table(&table)?;
    Ok(table)
}

/// Load a scenario file together with its inputs.
pub fn load_with_inputs(path: &Path) -> ProjectResult<(Scenario, InputTable)> {
    let scenario = load_scenario(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let table = resolve_inputs(&scenario, base_dir)?;
    Ok((scenario, table))
}
