use std::fs;
use std::path::PathBuf;

use cellular_network_sim::api::scenario_dto::ScenarioDto;
use cellular_network_sim::domain::directory::network_directory::NetworkDirectory;
use cellular_network_sim::domain::utils::id::VertexId;
use cellular_network_sim::error::Error;
use cellular_network_sim::generate_network_directory;
use cellular_network_sim::loader::parser::parse_json_str;

const SCENARIO: &str = r#"{
    "networks": [
        {
            "name": "North",
            "switchingCenter": { "x": 0.0, "y": 0.0 },
            "towers": [
                { "name": "T1", "position": { "x": 0.0, "y": 0.0 }, "height": 1.0 },
                { "name": "T2", "position": { "x": 200.0, "y": 200.0 }, "height": 1.0 }
            ],
            "users": [
                { "name": "Alice", "phone": "5551234", "position": { "x": 10.0, "y": 10.0 } },
                { "name": "Bob", "phone": "5555678", "position": { "x": 1000.0, "y": 1000.0 } }
            ]
        },
        {
            "name": "South",
            "switchingCenter": { "x": 50.0, "y": 50.0 },
            "coverageFactor": 10.0
        }
    ]
}"#;

fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cellular_network_sim_{}_{}.json", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_scenario_file() {
    let path = write_temp_file("scenario", SCENARIO);

    let directory = generate_network_directory(path.to_str().unwrap()).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(directory.len(), 2);

    let north = directory.get_network("North").unwrap();
    assert_eq!(north.tower_count(), 2);
    assert_eq!(north.user_count(), 2);
    assert_eq!(north.get_user("5551234").unwrap().get_current_tower(), Some(&VertexId::new("T1")));
    assert!(north.get_user("5555678").unwrap().get_current_tower().is_none());

    let south = directory.get_network("South").unwrap();
    assert_eq!(south.get_coverage_factor(), 10.0);
    assert_eq!(south.tower_count(), 0);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = generate_network_directory("/definitely/not/here/scenario.json");
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_malformed_json_is_deserialization_error() {
    let path = write_temp_file("malformed", "{ \"networks\": [ { \"name\": ");

    let result = generate_network_directory(path.to_str().unwrap());
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(Error::DeserializationError(_))));
}

#[test]
fn test_invalid_scenario_content_aborts_build() {
    let overlapping = r#"{
        "networks": [
            {
                "name": "North",
                "switchingCenter": { "x": 0.0, "y": 0.0 },
                "towers": [
                    { "name": "T1", "position": { "x": 0.0, "y": 0.0 }, "height": 1.0 },
                    { "name": "T3", "position": { "x": 30.0, "y": 30.0 }, "height": 1.0 }
                ]
            }
        ]
    }"#;

    let dto: ScenarioDto = parse_json_str(overlapping).unwrap();
    let result = NetworkDirectory::from_dto(dto);

    assert!(matches!(result, Err(Error::CoverageOverlap { .. })));
}
