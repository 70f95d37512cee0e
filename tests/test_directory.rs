use cellular_network_sim::api::snapshot_dto::NetworkSummary;
use cellular_network_sim::domain::directory::network_directory::NetworkDirectory;
use cellular_network_sim::domain::geometry::Position;
use cellular_network_sim::domain::graph::vertex::GraphVertex;
use cellular_network_sim::domain::utils::id::ZoneId;
use cellular_network_sim::error::Error;

#[test]
fn test_add_and_get_network() {
    let mut directory = NetworkDirectory::new();

    let zone = directory.add_network("North", Position::new(5.0, 5.0)).unwrap();
    assert_eq!(zone.get_id(), &ZoneId::new("North"));
    assert_eq!(zone.get_switching_center().get_position(), Position::new(5.0, 5.0));

    assert!(directory.get_network("North").is_some());
    assert!(directory.get_network("South").is_none());
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_duplicate_network_name_is_rejected() {
    let mut directory = NetworkDirectory::new();
    directory.add_network("North", Position::new(0.0, 0.0)).unwrap();

    let result = directory.add_network("North", Position::new(100.0, 100.0));

    assert!(matches!(result, Err(Error::DuplicateName(name)) if name == "North"));
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.get_network("North").unwrap().get_switching_center().get_position(), Position::new(0.0, 0.0));
}

#[test]
fn test_empty_network_name_is_rejected() {
    let mut directory = NetworkDirectory::new();
    assert!(matches!(directory.add_network("   ", Position::new(0.0, 0.0)), Err(Error::InvalidInput(_))));
    assert!(directory.is_empty());
}

#[test]
fn test_zones_are_independent() {
    let mut directory = NetworkDirectory::new();
    directory.add_network("North", Position::new(0.0, 0.0)).unwrap();
    directory.add_network("South", Position::new(0.0, 0.0)).unwrap();

    let north = directory.get_network_mut("North").unwrap();
    north.add_tower("T1", Position::new(0.0, 0.0), 1.0).unwrap();
    north.register_user("Alice", "5551234", Position::new(1.0, 1.0)).unwrap();

    // Same tower name and phone number are fine in another zone.
    let south = directory.get_network_mut("South").unwrap();
    south.add_tower("T1", Position::new(0.0, 0.0), 1.0).unwrap();
    south.register_user("Alice", "5551234", Position::new(1.0, 1.0)).unwrap();

    assert_eq!(directory.get_network("North").unwrap().user_count(), 1);
    assert_eq!(directory.get_network("South").unwrap().user_count(), 1);
}

#[test]
fn test_summaries_follow_creation_order() {
    let mut directory = NetworkDirectory::new();
    directory.add_network("Zulu", Position::new(0.0, 0.0)).unwrap();
    let alpha = directory.add_network("Alpha", Position::new(0.0, 0.0)).unwrap();
    alpha.add_tower("A1", Position::new(0.0, 0.0), 1.0).unwrap();
    alpha.register_user("Ann", "7000001", Position::new(3.0, 4.0)).unwrap();
    alpha.register_user("Ari", "7000002", Position::new(900.0, 0.0)).unwrap();

    let summaries = directory.list_network_summaries();

    assert_eq!(
        summaries,
        vec![
            NetworkSummary { name: ZoneId::new("Zulu"), tower_count: 0, user_count: 0 },
            NetworkSummary { name: ZoneId::new("Alpha"), tower_count: 1, user_count: 2 },
        ]
    );
    assert_eq!(directory.first_network_name(), Some(&ZoneId::new("Zulu")));
}
