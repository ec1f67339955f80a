use super::*;

fn labels(arcs: &[Arc]) -> Vec<Move> {
    arcs.iter().map(|arc| arc.label).collect()
}

const OPEN: &str = "
XXXXX
X   X
X F X
X  SX
XG  X
XXXXX
";

#[test]
fn moves_consume_fuel() {
    let grid = Grid::parse(OPEN).unwrap();
    let tail = State::new(1, 2, Fuel::Limited(4));
    let arcs = grid.outgoing_arcs(&tail);
    // North is a wall
    assert_eq!(labels(&arcs), vec![Move::East, Move::South, Move::West]);
    assert_eq!(
        arcs[0],
        Arc::new(tail, State::new(1, 3, Fuel::Limited(3)), Move::East, 5)
    );
    assert_eq!(arcs[1].head, State::new(2, 2, Fuel::Limited(3)));
    assert_eq!(arcs[2].head, State::new(1, 1, Fuel::Limited(3)));
    assert!(arcs.iter().all(|arc| arc.cost == MOVE_COST));
}

#[test]
fn refuel_on_station() {
    let grid = Grid::parse(OPEN).unwrap();
    let tail = State::new(2, 2, Fuel::Limited(3));
    let arcs = grid.outgoing_arcs(&tail);
    assert_eq!(
        labels(&arcs),
        vec![Move::North, Move::East, Move::South, Move::West, Move::FuelUp]
    );
    assert_eq!(
        arcs[4],
        Arc::new(tail, State::new(2, 2, Fuel::Limited(9)), Move::FuelUp, 15)
    );
}

#[test]
fn full_tank_does_not_refuel() {
    let grid = Grid::parse(OPEN).unwrap();
    let arcs = grid.outgoing_arcs(&State::new(2, 2, Fuel::Limited(9)));
    assert_eq!(arcs.len(), 4);
    assert!(!labels(&arcs).contains(&Move::FuelUp));
}

#[test]
fn empty_tank_on_station() {
    let grid = Grid::parse(OPEN).unwrap();
    let tail = State::new(2, 2, Fuel::Limited(0));
    let arcs = grid.outgoing_arcs(&tail);
    assert_eq!(
        arcs,
        vec![Arc::new(
            tail,
            State::new(2, 2, Fuel::Limited(9)),
            Move::FuelUp,
            15
        )]
    );
}

#[test]
fn empty_tank_elsewhere_is_dead_end() {
    let grid = Grid::parse(OPEN).unwrap();
    assert!(grid.outgoing_arcs(&State::new(1, 1, Fuel::Limited(0))).is_empty());
    assert!(grid.outgoing_arcs(&State::new(4, 1, Fuel::Limited(0))).is_empty());
}

#[test]
fn unlimited_fuel_never_refuels() {
    let grid = Grid::parse(OPEN).unwrap();
    let tail = State::new(2, 2, Fuel::Unlimited);
    let arcs = grid.outgoing_arcs(&tail);
    assert_eq!(
        labels(&arcs),
        vec![Move::North, Move::East, Move::South, Move::West]
    );
    assert!(arcs.iter().all(|arc| arc.head.fuel == Fuel::Unlimited));
}

#[test]
fn grid_edges_are_impassable() {
    // No surrounding walls, the map edge limits the moves.
    let grid = Grid::parse("S G\nF  ").unwrap();
    let arcs = grid.outgoing_arcs(&State::new(0, 0, Fuel::Unlimited));
    assert_eq!(labels(&arcs), vec![Move::East, Move::South]);
    let arcs = grid.outgoing_arcs(&State::new(1, 2, Fuel::Limited(1)));
    assert_eq!(labels(&arcs), vec![Move::North, Move::West]);
    assert_eq!(arcs[0].head.fuel, Fuel::Limited(0));
}

#[test]
fn heuristic_uses_nearest_goal() {
    let grid = Grid::parse("G    S  G").unwrap();
    // Goals at columns 0 and 8
    assert_eq!(grid.estimated_cost_to_goal(&State::new(0, 5, Fuel::Unlimited)), 15);
    assert_eq!(grid.estimated_cost_to_goal(&State::new(0, 2, Fuel::Limited(1))), 10);
    assert_eq!(grid.estimated_cost_to_goal(&State::new(0, 8, Fuel::Limited(0))), 0);
}

#[test]
fn labels_and_costs() {
    assert_eq!(Move::North.to_string(), "N");
    assert_eq!(Move::FuelUp.to_string(), "Fuel up");
    assert_eq!(Move::West.cost(), 5);
    assert_eq!(Move::FuelUp.cost(), 15);
    assert_eq!(serde_json::to_string(&Move::FuelUp).unwrap(), "\"Fuel up\"");
}
