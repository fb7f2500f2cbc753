use campus_core::config::NavigationConfig;
use campus_core::storage::{BuildingInfo, CampusMap, RouteRecord};
use campus_nav::navigator::CampusNavigator;

fn make_map() -> CampusMap {
    let mut map = CampusMap::default();
    for (name, description) in [
        ("CS Department", "Computer Science Department"),
        ("Library", "Central Library"),
        ("Cafeteria", "Main Cafeteria"),
        ("Auditorium", "Main Auditorium"),
        ("Parking", "Visitor parking"),
    ] {
        map.buildings.insert(
            name.to_string(),
            BuildingInfo {
                description: description.to_string(),
                location: "Main Campus".to_string(),
            },
        );
    }
    for (from, to, distance) in [
        ("CS Department", "Library", 150.0),
        ("CS Department", "Cafeteria", 200.0),
        ("Library", "Cafeteria", 100.0),
        ("Library", "Auditorium", 300.0),
        ("Cafeteria", "Auditorium", 250.0),
    ] {
        map.routes.push(RouteRecord {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
    }
    map
}

fn make_navigator() -> CampusNavigator {
    CampusNavigator::from_map(&make_map(), &NavigationConfig::default())
}

#[test]
fn test_no_location_means_no_answers() {
    let nav = make_navigator();
    assert_eq!(nav.current_location(), None);
    assert!(nav.shortest_path("Library").is_none());
    assert!(nav.reachable_buildings().is_empty());
    assert!(nav.explore_dfs().is_empty());
    assert!(nav.routes_to("Library").is_empty());
    assert!(nav.distances_from_current().is_empty());
}

#[test]
fn test_shortest_path_from_current() {
    let mut nav = make_navigator();
    assert!(nav.set_current_location("CS Department"));

    let route = nav.shortest_path("Auditorium").unwrap();
    assert_eq!(route.path, vec!["CS Department", "Library", "Auditorium"]);
    assert_eq!(route.distance, 450.0);

    let missing = nav.shortest_path("Parking").unwrap();
    assert!(!missing.is_reachable());
}

#[test]
fn test_reachable_excludes_isolated_building() {
    let mut nav = make_navigator();
    nav.set_current_location("Library");
    let reachable = nav.reachable_buildings();
    assert_eq!(reachable[0], "Library");
    assert_eq!(reachable.len(), 4);
    assert!(!reachable.contains(&"Parking".to_string()));
    assert_eq!(nav.explore_dfs().len(), 4);
}

#[test]
fn test_routes_to_shortest_first() {
    let mut nav = make_navigator();
    nav.set_current_location("CS Department");
    let routes = nav.routes_to("Auditorium");
    assert!(routes.len() >= 2);
    assert_eq!(routes[0].distance, 450.0);
    assert!(routes.windows(2).all(|w| w[0].distance <= w[1].distance));
    assert!(nav.routes_to("Nowhere").is_empty());
}

#[test]
fn test_routes_respect_max_paths() {
    let config = NavigationConfig {
        max_paths: 1,
        ..NavigationConfig::default()
    };
    let mut nav = CampusNavigator::from_map(&make_map(), &config);
    nav.set_current_location("CS Department");
    assert_eq!(nav.routes_to("Auditorium").len(), 1);
}

#[test]
fn test_distances_from_current() {
    let mut nav = make_navigator();
    nav.set_current_location("CS Department");
    let distances = nav.distances_from_current();
    assert_eq!(distances.len(), 3);
    let cafeteria = distances
        .iter()
        .find(|d| d.building == "Cafeteria")
        .unwrap();
    assert_eq!(cafeteria.distance, 200.0);
}

#[test]
fn test_building_info_and_campus_info() {
    let nav = make_navigator();
    assert_eq!(
        nav.building_info("Library").map(|b| b.description.as_str()),
        Some("Central Library")
    );
    assert!(nav.building_info("Moon Base").is_none());

    let info = nav.campus_info();
    assert_eq!(info.vertices, 5);
    assert_eq!(info.edges, 5);
    assert!(!info.connected);
    assert_eq!(nav.buildings().len(), 5);
}
