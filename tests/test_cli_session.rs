use std::io::Cursor;

use cellular_network_sim::cli::menu::Session;
use cellular_network_sim::domain::directory::network_directory::NetworkDirectory;
use cellular_network_sim::domain::user::CallStatus;
use cellular_network_sim::domain::utils::id::VertexId;

fn run_script(script: &str) -> (NetworkDirectory, String) {
    let mut session = Session::new(NetworkDirectory::new(), Cursor::new(script.to_string()), Vec::new());
    session.create_networks().unwrap();
    session.run().unwrap();

    let (directory, output) = session.into_parts();
    (directory, String::from_utf8(output).unwrap())
}

#[test]
fn test_scripted_session_builds_network_and_places_call() {
    let script = [
        "1", "North", "0", "0", // one network
        "1", "T1", "0,0", "1", // add tower
        "2", "Alice", "5551234", "10,10", // register
        "2", "Carol", "5559999", "-5,5", // register
        "4", "5551234", "5559999", // call
        "7", // display
        "9",
    ]
    .join("\n");

    let (directory, output) = run_script(&script);

    let north = directory.get_network("North").unwrap();
    assert_eq!(north.get_user("5551234").unwrap().get_current_tower(), Some(&VertexId::new("T1")));
    assert_eq!(north.get_user("5551234").unwrap().get_call_status(), CallStatus::Calling);
    assert_eq!(north.get_user("5559999").unwrap().get_call_status(), CallStatus::Receiving);

    assert!(output.contains("Network 'North' created."));
    assert!(output.contains("Tower 'T1' added with coverage radius 50.00m in network 'North'"));
    assert!(output.contains("Call established from 5551234 to 5559999. Routing path: T1 -> North_MSC -> T1"));
    assert!(output.contains("--- Network: North ---"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_core_errors_do_not_end_the_session() {
    let script = [
        "1", "North", "0", "0",
        "1", "T1", "0,0", "1",
        "1", "T3", "30,30", "1", // overlaps T1
        "4", "5550000", "5551234", // unknown users
        "3", "5550000", "1,1", // unknown user move
        "8",
        "9",
    ]
    .join("\n");

    let (directory, output) = run_script(&script);

    assert_eq!(directory.get_network("North").unwrap().tower_count(), 1);
    assert!(output.contains("overlaps with tower 'T1'"));
    assert!(output.contains("User with phone number 5550000 not found"));
    assert!(output.contains("- Network: North, Towers: 1, Users: 0"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_malformed_input_is_reprompted() {
    let script = [
        "x", "1", // bad count, then 1
        "North", "zero", "0", "0",
        "2", "Bob", "12ab", // bad phone precheck
        "1", "T1", "0;0", "0,0", "abc", "2", // bad position and height, then valid
        "6", "Nowhere",
        "5", "5551234",
        "42",
        "9",
    ]
    .join("\n");

    let (directory, output) = run_script(&script);

    let north = directory.get_network("North").unwrap();
    assert_eq!(north.tower_count(), 1);
    assert_eq!(north.get_tower("T1").unwrap().get_coverage_radius(), 100.0);
    assert_eq!(north.user_count(), 0);

    assert!(output.contains("Invalid input. Please enter a number."));
    assert!(output.contains("Invalid phone number."));
    assert!(output.contains("Invalid format."));
    assert!(output.contains("Network 'Nowhere' not found."));
    assert!(output.contains("User with phone number 5551234 not found"));
    assert!(output.contains("Invalid choice."));
}

#[test]
fn test_end_of_input_stops_cleanly() {
    let (directory, output) = run_script("1\nNorth\n0\n0\n");

    assert_eq!(directory.len(), 1);
    assert!(output.contains("--- Main Menu ---"));
}

#[test]
fn test_no_networks_exits() {
    let (_, output) = run_script("0\n");
    assert!(output.contains("No networks created. Exiting."));
}
