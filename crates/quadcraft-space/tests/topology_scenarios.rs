use quadcraft_core::Quadray;
use quadcraft_space::{
    bounded_neighbors, cell_type, generate_grid, is_interior, key, neighbors, shuffle, CellType,
    EdgeBehavior, GridError, IvmGrid, Topology, DIRECTIONS,
};

#[test]
fn size_three_grid_has_81_cells() {
    assert_eq!(generate_grid(3).len(), 81);
    let grid = IvmGrid::new(3, EdgeBehavior::Absorb).unwrap();
    assert_eq!(grid.cell_count(), 81);
    assert_eq!(grid.canonical_ordering(), generate_grid(3));
}

#[test]
fn neighbours_of_1111_are_0112_permutations() {
    let origin = Quadray::new(1.0, 1.0, 1.0, 1.0);
    let n = neighbors(1, 1, 1, 1);
    assert_eq!(n.len(), 12);
    for cell in n {
        let offset = cell - origin;
        let mut parts = offset.to_cell().unwrap();
        parts.sort_unstable();
        assert_eq!(parts, [0, 1, 1, 2], "{cell}");
    }
}

#[test]
fn directions_constant_has_twelve_entries() {
    assert_eq!(DIRECTIONS.len(), 12);
}

#[test]
fn max_neighbour_degree_covers_absorb_and_wrap() {
    let small = IvmGrid::new(2, EdgeBehavior::Absorb).unwrap();
    assert_eq!(small.max_neighbour_degree(), 0);
    assert!(small
        .canonical_ordering()
        .iter()
        .all(|c| small.neighbours(c).is_empty()));

    let absorb = IvmGrid::new(3, EdgeBehavior::Absorb).unwrap();
    assert_eq!(absorb.max_neighbour_degree(), 12);

    let wrap = IvmGrid::new(2, EdgeBehavior::Wrap).unwrap();
    assert_eq!(wrap.max_neighbour_degree(), 12);
}

#[test]
fn grid_and_free_functions_agree() {
    let grid = IvmGrid::new(4, EdgeBehavior::Absorb).unwrap();
    for cell in grid.canonical_ordering() {
        let [a, b, c, d] = cell.to_cell().unwrap();
        let free = bounded_neighbors(a, b, c, d, 4);
        assert_eq!(grid.neighbours(&cell), free);
        assert_eq!(free.len() == 12, is_interior(a, b, c, d, 4));
    }
}

#[test]
fn keys_and_cell_types() {
    assert_eq!(key(1, 1, 1, 1), key(0, 0, 0, 0));
    assert_eq!(key(0, 1, 1, 2).to_string(), "0,1,1,2");
    assert_eq!(cell_type(0, 1, 1, 2), CellType::Tetra);
    assert_eq!(cell_type(0, 0, 0, 1), CellType::Octa);
}

#[test]
fn invalid_construction_is_an_error() {
    assert_eq!(IvmGrid::new(0, EdgeBehavior::Absorb), Err(GridError::EmptyGrid));
}

#[test]
fn shuffled_grid_keeps_every_cell() {
    let mut cells = generate_grid(3);
    shuffle(&mut cells);
    let mut keys: Vec<_> = cells.iter().map(|c| c.to_cell().unwrap()).collect();
    keys.sort_unstable();
    let expected: Vec<_> = generate_grid(3).iter().map(|c| c.to_cell().unwrap()).collect();
    assert_eq!(keys, expected);
}

#[test]
fn edge_behavior_round_trips_through_json() {
    for edge in [EdgeBehavior::Absorb, EdgeBehavior::Wrap] {
        let json = serde_json::to_string(&edge).unwrap();
        let back: EdgeBehavior = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }
    assert_eq!(serde_json::to_string(&CellType::Octa).unwrap(), "\"Octa\"");
}
