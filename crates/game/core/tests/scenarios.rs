use game_core::{
    ActionPoints, Command, Direction, GameConfig, GameEngine, GameEvent, Grid, Level, LevelId,
    MonsterKind, Position, SightShape, TileKind, TurnOutcome, World, compute_visibility,
};

fn world_from(rows: &[&str]) -> (World, GameConfig) {
    let config = GameConfig::default();
    let decoded = Level::from_symbols("scenario", rows, &config).expect("level should decode");
    let world = World::new([decoded], &LevelId::new("scenario"), &config)
        .expect("world should assemble");
    (world, config)
}

/// 5x5 open floor, observer in the middle with sight range 2: every cell is lit.
#[test]
fn open_room_is_fully_visible() {
    let mut grid = Grid::filled(5, 5, TileKind::Floor);
    compute_visibility(&mut grid, Position::new(2, 2), 2, SightShape::Square);

    let visible = grid.iter().filter(|(_, tile)| tile.is_visible()).count();
    assert_eq!(visible, 25);
}

/// A wall in a 1-wide corridor is seen, the cells behind it are not.
#[test]
fn corridor_wall_stops_the_sweep() {
    let (world, _) = world_from(&[
        "#######", //
        "#######",
        "@..#..",
        "#######",
    ]);
    let grid = &world.current_level().grid;

    assert!(grid.tile(Position::new(2, 2)).is_visible());
    assert!(grid.tile(Position::new(3, 2)).is_visible());
    assert!(grid.tile(Position::new(3, 2)).is_seen());
    assert!(!grid.tile(Position::new(4, 2)).is_seen());
    assert!(!grid.tile(Position::new(5, 2)).is_seen());
}

/// A rat three cells away closes in by floor(1.5) = 1 step on its first update.
#[test]
fn monster_moves_floor_speed_steps_toward_player() {
    let (mut world, config) = world_from(&["R..@"]);
    let mut engine = GameEngine::new(&mut world, &config);

    let report = engine.execute(&Command::NoOp);

    assert_eq!(report.outcome, TurnOutcome::Advanced);
    let level = world.current_level();
    let rat = level
        .monster_at(Position::new(1, 0))
        .expect("rat should have stepped once");
    assert_eq!(rat.action_points.value(), 0.5);
    assert!(level.monster_at(Position::ORIGIN).is_none());
}

/// A faster monster covers more ground per update.
#[test]
fn fast_monster_takes_multiple_steps() {
    let (mut world, config) = world_from(&["@....."]);
    let id = world
        .spawn_monster(MonsterKind::Rat, Position::new(3, 0))
        .expect("cell is free");
    if let Some(rat) = world.current_level_mut().monsters.get_mut(&Position::new(3, 0)) {
        assert_eq!(rat.id, id);
        rat.speed = 2.0;
    }

    GameEngine::new(&mut world, &config).execute(&Command::NoOp);

    assert!(world.current_level().monster_at(Position::new(1, 0)).is_some());
}

/// An adjacent monster with AP attacks; the log gets the narration and the
/// player loses exactly the monster's strength.
#[test]
fn adjacent_monster_attacks() {
    let (mut world, config) = world_from(&["@S"]);
    if let Some(spider) = world.current_level_mut().monsters.get_mut(&Position::new(1, 0)) {
        spider.action_points = ActionPoints::new(0.5);
    }

    let report = GameEngine::new(&mut world, &config).execute(&Command::NoOp);

    assert_eq!(world.player().hitpoints, 48);
    assert_eq!(
        world.current_level().events.latest(),
        Some("Spider 1 attacked meds for 2 damage")
    );
    assert!(report.events.iter().any(|event| matches!(
        event,
        GameEvent::Attacked { attacker, damage: 2, .. } if attacker == "Spider 1"
    )));
}

/// Bumping a closed door opens it; the next bump walks through.
#[test]
fn bumping_opens_doors_then_walks_through() {
    let (mut world, config) = world_from(&["@|."]);
    let mut engine = GameEngine::new(&mut world, &config);

    let first = engine.execute(&Command::Move(Direction::Right));
    assert_eq!(first.player_action, Ok(()));
    assert!(
        first
            .events
            .iter()
            .any(|event| matches!(event, GameEvent::DoorOpened { .. }))
    );

    // Open doors cost 2 AP: one turn to save up, one to step.
    let second = engine.execute(&Command::Move(Direction::Right));
    assert!(second.player_action.is_err());
    let third = engine.execute(&Command::Move(Direction::Right));
    assert_eq!(third.player_action, Ok(()));
    assert_eq!(world.player().position, Position::new(1, 0));
}

/// Killing the player freezes the world.
#[test]
fn dead_player_stops_the_simulation() {
    let (mut world, config) = world_from(&["@R."]);
    world.player_mut().hitpoints = 1;
    let mut engine = GameEngine::new(&mut world, &config);

    let fatal = engine.execute(&Command::NoOp);
    assert!(fatal.player_died());

    let frozen = engine.world().clone();
    let after = engine.execute(&Command::Move(Direction::Down));
    assert_eq!(after.outcome, TurnOutcome::PlayerDead);
    assert_eq!(engine.world(), &frozen);
}

/// Inspecting is free and narrates what lies on the cell.
#[test]
fn inspect_does_not_take_a_turn() {
    let (mut world, config) = world_from(&["@.R"]);
    let mut engine = GameEngine::new(&mut world, &config);

    let report = engine.execute(&Command::Inspect {
        target: Position::new(2, 0),
    });

    assert_eq!(report.outcome, TurnOutcome::Free);
    assert_eq!(world.turn(), 0);
    assert_eq!(
        world.current_level().events.latest(),
        Some("{2, 0}: Dirt Floor, Rat 1 (HP 5)")
    );
}

/// Control commands are left to the caller.
#[test]
fn quit_is_a_control_command() {
    let (mut world, config) = world_from(&["@."]);
    let report = GameEngine::new(&mut world, &config).execute(&Command::Quit);
    assert_eq!(report.outcome, TurnOutcome::Control);
    assert_eq!(world.turn(), 0);
}

/// Clicking a distant cell walks toward it one step per AP.
#[test]
fn interact_on_distant_floor_travels() {
    let (mut world, config) = world_from(&["@....", "....."]);
    let mut engine = GameEngine::new(&mut world, &config);

    for _ in 0..3 {
        let report = engine.execute(&Command::Interact {
            target: Position::new(4, 1),
        });
        assert_eq!(report.player_action, Ok(()));
    }

    let position = world.player().position;
    assert_eq!(position.manhattan_distance(Position::new(4, 1)), 2);
}

/// A target far outside the grid is refused without moving the player.
#[test]
fn interact_far_outside_the_grid_is_rejected() {
    let (mut world, config) = world_from(&["@.."]);
    let mut engine = GameEngine::new(&mut world, &config);

    let report = engine.execute(&Command::Interact {
        target: Position::new(i32::MIN, i32::MIN),
    });

    assert!(report.player_action.is_err());
    assert_eq!(world.player().position, Position::ORIGIN);
}

/// Spawning on the player's cell is refused; other free cells work.
#[test]
fn spawned_monsters_avoid_the_player() {
    let (mut world, _) = world_from(&[".@."]);
    assert!(world.spawn_monster(MonsterKind::Spider, Position::new(1, 0)).is_none());
    assert!(world.spawn_monster(MonsterKind::Spider, Position::new(2, 0)).is_some());
    assert_eq!(world.current_level().monsters.len(), 1);
}

/// Two levels joined by stairs: walking onto them switches the active level.
#[test]
fn stairs_switch_levels() {
    let config = GameConfig::default();
    let upper = Level::from_symbols("upper", &["@d"], &config).expect("upper decodes");
    let lower = Level::from_symbols("lower", &["...", ".u."], &config).expect("lower decodes");
    let mut world =
        World::new([upper, lower], &LevelId::new("upper"), &config).expect("world assembles");
    world
        .link_stairs(
            &LevelId::new("upper"),
            Position::new(1, 0),
            &LevelId::new("lower"),
            Position::new(1, 1),
        )
        .expect("stairs link");

    let report = GameEngine::new(&mut world, &config).execute(&Command::Move(Direction::Right));

    assert!(report.events.contains(&GameEvent::LevelChanged {
        from: LevelId::new("upper"),
        to: LevelId::new("lower"),
    }));
    assert_eq!(world.current_id(), &LevelId::new("lower"));
    assert_eq!(world.player().position, Position::new(1, 1));
    assert!(world.current_level().grid.tile(Position::ORIGIN).is_visible());
}
