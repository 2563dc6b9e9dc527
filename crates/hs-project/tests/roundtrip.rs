use hs_project::schema::*;
use hs_project::{load_json, load_yaml, save_json, save_yaml, validate_scenario};

fn inline_scenario(name: &str) -> Scenario {
    Scenario {
        version: 1,
        name: name.to_string(),
        model: ModelDef {
            hloss: 0.25,
            sheat: 8.0,
            expand: true,
            degeneracy: DegeneracyDef::Error,
        },
        initial: InitialDef { init_t_room: 19.0 },
        inputs: InputsDef::Inline {
            t_out: vec![3.0, 2.5, 2.0],
            heat_gain: vec![0.0, 1.5, 4.0],
        },
    }
}

#[test]
fn roundtrip_yaml_inline_scenario() {
    let scenario = inline_scenario("Inline YAML");
    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("hs_project_roundtrip_inline.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_inline_scenario() {
    let scenario = inline_scenario("Inline JSON");

    let path = std::env::temp_dir().join("hs_project_roundtrip_inline.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn save_rejects_invalid_scenario() {
    let mut scenario = inline_scenario("Bad sheat");
    scenario.model.sheat = 0.0;

    let path = std::env::temp_dir().join("hs_project_roundtrip_invalid.yaml");
    assert!(save_yaml(&path, &scenario).is_err());
}
