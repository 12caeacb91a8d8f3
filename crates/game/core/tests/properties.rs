use game_core::{
    Command, Direction, GameConfig, GameEngine, Grid, Level, LevelId, Position, SightShape,
    TurnOutcome, World, compute_visibility, find_path,
};

const MAZE: &[&str] = &[
    "##########",
    "#..~~.../#",
    "#.##.##..#",
    "#.#...#~.#",
    "#.#.#.#..#",
    "#...#...|#",
    "##/####..#",
    "#.....~..#",
    "##########",
];

fn maze_grid() -> Grid {
    Level::from_symbols("maze", MAZE, &GameConfig::default())
        .expect("maze decodes")
        .level
        .grid
}

fn passable_cells(grid: &Grid) -> Vec<Position> {
    grid.positions().filter(|&p| grid.is_passable(p)).collect()
}

#[test]
fn every_found_path_is_a_valid_walk() {
    let grid = maze_grid();
    let cells = passable_cells(&grid);

    for &from in &cells {
        for &to in &cells {
            let Some(path) = find_path(&grid, from, to) else {
                continue;
            };
            assert_eq!(path.steps.first(), Some(&from));
            assert_eq!(path.steps.last(), Some(&to));

            let mut total = 0;
            for pair in path.steps.windows(2) {
                assert!(pair[0].is_adjacent(pair[1]), "{from} -> {to}: {pair:?}");
                assert!(grid.is_passable(pair[1]));
                total += grid.tile(pair[1]).movement_cost();
            }
            assert_eq!(total, path.cost, "{from} -> {to}");
        }
    }
}

#[test]
fn connected_cells_always_find_each_other() {
    let grid = maze_grid();
    let start = Position::new(1, 1);
    // The open door at (2, 6) and the gap at (7, 6) join every room; the
    // closed door at (8, 5) is impassable but bypassed.
    for to in passable_cells(&grid) {
        assert!(
            find_path(&grid, start, to).is_some(),
            "{to} should be reachable"
        );
    }
}

#[test]
fn reverse_route_between_floor_cells_costs_the_same() {
    let grid = maze_grid();
    let a = Position::new(1, 1);
    let b = Position::new(5, 5);
    let there = find_path(&grid, a, b).expect("route exists");
    let back = find_path(&grid, b, a).expect("route exists");
    // Costs are charged on entry, so the two directions differ only by the
    // endpoints' own costs, which are both floor here.
    assert_eq!(there.cost, back.cost);
}

#[test]
fn visibility_is_idempotent() {
    let mut first = maze_grid();
    let observer = Position::new(5, 3);
    compute_visibility(&mut first, observer, 4, SightShape::Square);
    let mut second = first.clone();
    compute_visibility(&mut second, observer, 4, SightShape::Square);

    let lit = |grid: &Grid| -> Vec<Position> {
        grid.iter()
            .filter(|(_, tile)| tile.is_visible())
            .map(|(position, _)| position)
            .collect()
    };
    assert_eq!(lit(&first), lit(&second));
}

#[test]
fn seen_is_monotonic() {
    let mut grid = maze_grid();
    let mut seen_before: Vec<Position> = Vec::new();

    for observer in passable_cells(&grid) {
        compute_visibility(&mut grid, observer, 3, SightShape::Disc);
        for position in &seen_before {
            assert!(grid.tile(*position).is_seen(), "{position} forgotten");
        }
        seen_before = grid
            .iter()
            .filter(|(_, tile)| tile.is_seen())
            .map(|(position, _)| position)
            .collect();
    }
}

#[test]
fn action_points_never_go_negative() {
    let config = GameConfig::default();
    let rows = [
        "#########",
        "#@..R..S#",
        "#.~~.|..#",
        "#...R...#",
        "#########",
    ];
    let decoded = Level::from_symbols("arena", &rows, &config).expect("arena decodes");
    let mut world = World::new([decoded], &LevelId::new("arena"), &config).expect("world builds");
    let commands = [
        Command::Move(Direction::Right),
        Command::Move(Direction::Down),
        Command::NoOp,
        Command::Interact {
            target: Position::new(5, 2),
        },
        Command::Move(Direction::Right),
        Command::Move(Direction::Up),
        Command::Move(Direction::Left),
    ];

    let mut engine = GameEngine::new(&mut world, &config);
    for command in commands.iter().cycle().take(60) {
        let report = engine.execute(command);
        let world = engine.world();
        assert!(world.player().action_points.value() >= 0.0);
        for monster in world.current_level().monsters.values() {
            assert!(monster.action_points.value() >= 0.0, "{}", monster.name);
            assert_ne!(monster.position, world.player().position);
        }
        if report.outcome == TurnOutcome::PlayerDead {
            break;
        }
    }
}
