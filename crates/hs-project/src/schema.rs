//! Scenario schema definitions.
//!
//! Field names follow the tabular convention of the model's host tools:
//! `t_out`/`heat_gain` columns, a one-row `init_t_room`, and the two
//! building coefficients `hloss`/`sheat`.

use std::path::PathBuf;

use hs_model::{DegeneracyPolicy, HeatModelParams, SimOptions};
use serde::{Deserialize, Serialize};

/// The only scenario format written so far.
pub const SCENARIO_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub model: ModelDef,
    pub initial: InitialDef,
    pub inputs: InputsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDef {
    /// Heat loss coefficient of the building.
    pub hloss: f64,
    /// Specific heat of the building.
    pub sheat: f64,
    #[serde(default)]
    pub expand: bool,
    #[serde(default)]
    pub degeneracy: DegeneracyDef,
}

impl ModelDef {
    pub fn new(hloss: f64, sheat: f64) -> Self {
        Self {
            hloss,
            sheat,
            expand: false,
            degeneracy: DegeneracyDef::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DegeneracyDef {
    #[default]
    Fallback,
    Error,
}

impl From<DegeneracyDef> for DegeneracyPolicy {
    fn from(def: DegeneracyDef) -> Self {
        match def {
            DegeneracyDef::Fallback => DegeneracyPolicy::Fallback,
            DegeneracyDef::Error => DegeneracyPolicy::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InitialDef {
    pub init_t_room: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum InputsDef {
    Inline {
        t_out: Vec<f64>,
        heat_gain: Vec<f64>,
    },
    Csv {
        path: PathBuf,
    },
}

impl Scenario {
    pub fn params(&self) -> HeatModelParams {
        HeatModelParams::new(self.model.hloss, self.model.sheat)
    }

    pub fn sim_options(&self) -> SimOptions {
        SimOptions {
            expand: self.model.expand,
            policy: self.model.degeneracy.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_model_fields_default() {
        let yaml = r#"
version: 1
name: minimal
model:
  hloss: 0.4
  sheat: 12.0
initial:
  init_t_room: 19.5
inputs:
  type: Inline
  t_out: [1.0, 2.0]
  heat_gain: [0.0, 3.0]
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert!(!scenario.model.expand);
        assert_eq!(scenario.model.degeneracy, DegeneracyDef::Fallback);
        assert_eq!(scenario.sim_options(), SimOptions::default());
        assert_eq!(scenario.params(), HeatModelParams::new(0.4, 12.0));
    }

    #[test]
    fn degeneracy_parses_snake_case() {
        let def: DegeneracyDef = serde_yaml::from_str("error").unwrap();
        assert_eq!(DegeneracyPolicy::from(def), DegeneracyPolicy::Error);
    }

    #[test]
    fn csv_inputs_tagged() {
        let json = r#"{"type":"Csv","path":"data/week.csv"}"#;
        let inputs: InputsDef = serde_json::from_str(json).unwrap();
        assert_eq!(
            inputs,
            InputsDef::Csv {
                path: PathBuf::from("data/week.csv")
            }
        );
    }
}
