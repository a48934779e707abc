use std::path::PathBuf;

use robot_grid::{Coord, GridConfig, RobotGrid};

fn small_grid() -> RobotGrid {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs/small_grid.json");
    let config = GridConfig::load(&path).expect("failed to load small grid config");
    RobotGrid::from_config(&config).expect("small grid config is valid")
}

#[test]
fn default_grid_has_345165_reachable_cells() {
    let robot = RobotGrid::new();
    let total = robot.total_safe_squares();
    assert_eq!(total, 345_165);
    assert_eq!(robot.total_safe_squares(), total);
    assert_eq!(robot.try_total_safe_squares().unwrap(), total);
}

#[test]
fn reachable_set_is_safe_and_connected_to_origin() {
    let robot = RobotGrid::new();
    let set = robot.reachable_from_origin();
    assert_eq!(set.len(), 345_165);
    assert!(set.contains(&Coord::ORIGIN));
    for c in &set {
        assert!(robot.is_safe(c.x, c.y));
    }
    // Safe, but walled off from the origin.
    assert!(robot.is_safe(32, 57));
    assert!(!set.contains(&Coord::new(32, 57)));
}

#[test]
fn small_grid_from_file_has_33_reachable_cells() {
    let robot = small_grid();
    assert_eq!(robot.total_safe_squares(), 33);
    // 49 cells fit inside the configured limits.
    assert_eq!(robot.try_total_safe_squares().unwrap(), 33);
}

#[test]
fn small_grid_journeys_detour_around_unsafe_cells() {
    let robot = small_grid();
    assert!(!robot.is_safe(2, 2));
    assert_eq!(robot.shortest_safe_journey(0, 0, 1, 1), 2);
    assert_eq!(robot.shortest_safe_journey(0, 0, 3, 1), 4);
    assert_eq!(robot.shortest_safe_journey(1, 1, 3, 1), 2);
    assert_eq!(robot.shortest_safe_journey(0, 0, 2, 2), -1);
}

#[test]
fn default_grid_journeys() {
    let robot = RobotGrid::new();
    assert_eq!(robot.shortest_safe_journey(0, 0, 1, 0), 1);
    assert_eq!(robot.shortest_safe_journey(0, 0, 2, 2), 4);
    assert_eq!(robot.shortest_safe_journey(0, 0, 3, 3), 6);
    assert_eq!(robot.shortest_safe_journey(3, 4, -3, -4), 14);
    assert_eq!(robot.shortest_safe_journey(0, 0, 50, 50), 100);
    assert_eq!(robot.shortest_safe_journey(99, 99, 0, 0), 198);
    assert_eq!(robot.shortest_safe_journey(0, 0, 999, 0), 999);
}
