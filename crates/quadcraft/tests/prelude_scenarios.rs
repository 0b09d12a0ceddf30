use quadcraft::prelude::*;

#[test]
fn size_three_grid_scenario() {
    assert_eq!(generate_grid(3).len(), 81);
    assert_eq!(DIRECTIONS.len(), 12);

    let centre = Quadray::new(1.0, 1.0, 1.0, 1.0);
    for n in neighbors(1, 1, 1, 1) {
        let mut offset: Vec<i64> = (n - centre).components().iter().map(|v| *v as i64).collect();
        offset.sort_unstable();
        assert_eq!(offset, vec![0, 1, 1, 2]);
    }

    let report = verify_geometric_identities();
    assert_eq!(report.checks.len(), 8);
    assert!(report.all_passed());
}

#[test]
fn cartesian_origin_is_quadray_origin() {
    let q = Quadray::from_cartesian(0.0, 0.0, 0.0);
    assert_eq!(q.normalized(), Quadray::ORIGIN);
    assert_eq!(q.to_key().to_string(), "0,0,0,0");
}

#[test]
fn board_path_and_sight_compose() {
    let config = BoardConfig {
        size: 5,
        players: 2,
        ..Default::default()
    };
    let mut state: GridState<u8> = GridState::new(&config).unwrap();
    let wall = Quadray::new(0.0, 1.0, 1.0, 2.0);
    state.set_cell(&wall, 1);

    let goal = Quadray::new(0.0, 0.0, 2.0, 2.0);
    let path = bfs_in(state.grid(), &Quadray::ORIGIN, &goal, |c| !state.is_occupied(c)).unwrap();
    assert_eq!(path.len(), 3);
    assert!(!path.contains(&wall));

    let fast = astar(state.grid(), &Quadray::ORIGIN, &goal, |c| !state.is_occupied(c)).unwrap();
    assert_eq!(fast.len(), path.len());

    assert!(flood_fill(state.grid(), &Quadray::ORIGIN, |c| !state.is_occupied(c)).contains(&goal));
}
