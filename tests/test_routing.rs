use cellular_network_sim::domain::geometry::Position;
use cellular_network_sim::domain::utils::id::VertexId;
use cellular_network_sim::domain::zone::network_zone::NetworkZone;

fn ids(names: &[&str]) -> Vec<VertexId> {
    names.iter().map(|n| VertexId::new(*n)).collect()
}

#[test]
fn test_path_from_tower_to_switching_center() {
    let mut zone = NetworkZone::new("North", Position::new(50.0, -40.0)).unwrap();
    zone.add_tower("T1", Position::new(0.0, 0.0), 1.0).unwrap();
    zone.add_tower("T2", Position::new(400.0, 0.0), 2.0).unwrap();

    assert_eq!(zone.find_path_to_switching_center(&VertexId::new("T1")), Some(ids(&["T1", "North_MSC"])));
    assert_eq!(zone.find_path_to_switching_center(&VertexId::new("T2")), Some(ids(&["T2", "North_MSC"])));
}

#[test]
fn test_path_from_unknown_vertex_is_none() {
    let mut zone = NetworkZone::new("North", Position::new(0.0, 0.0)).unwrap();
    zone.add_tower("T1", Position::new(0.0, 0.0), 1.0).unwrap();

    assert_eq!(zone.find_path_to_switching_center(&VertexId::new("T7")), None);
    // The switching center is not a tower.
    assert_eq!(zone.find_path_to_switching_center(&VertexId::new("North_MSC")), None);
}

#[test]
fn test_paths_do_not_cross_zones() {
    let mut north = NetworkZone::new("North", Position::new(0.0, 0.0)).unwrap();
    let mut south = NetworkZone::new("South", Position::new(0.0, 0.0)).unwrap();
    north.add_tower("T1", Position::new(0.0, 0.0), 1.0).unwrap();
    south.add_tower("S1", Position::new(0.0, 0.0), 1.0).unwrap();

    assert_eq!(north.find_path_to_switching_center(&VertexId::new("S1")), None);
    assert_eq!(south.find_path_to_switching_center(&VertexId::new("S1")), Some(ids(&["S1", "South_MSC"])));
}
