//! Monster behavior: accrue, look for the player, chase, and attack.
//!
//! Every species runs the same procedure; only the stat template differs.

use crate::combat::resolve_attack;
use crate::config::{GameConfig, SightShape};
use crate::state::{EntityId, Level, Monster, Player, Position, World};

use super::{GameEvent, can_see, find_path};

/// Runs one behavior pass over every monster on the active level.
///
/// Monsters act in ascending order of the cell they started the pass on. A
/// monster is taken out of the position map while it acts and put back at its
/// new cell before the next one runs, so occupancy checks always see the
/// latest layout.
pub(crate) fn run_monsters(world: &mut World, config: &GameConfig, events: &mut Vec<GameEvent>) {
    let turn = world.turn();
    let (level, player) = world.parts_mut();
    let order: Vec<(Position, EntityId)> = level
        .monsters
        .iter()
        .map(|(&position, monster)| (position, monster.id))
        .collect();

    for (position, id) in order {
        if !player.alive {
            break;
        }
        if level.monsters.get(&position).map(|m| m.id) != Some(id) {
            continue;
        }

        if level
            .monsters
            .get(&position)
            .is_some_and(|monster| monster.is_defeated())
        {
            if let Some(slain) = level.slay_monster(position) {
                events.push(GameEvent::MonsterSlain {
                    level: level.id().clone(),
                    position,
                    name: slain.character.name,
                });
            }
            continue;
        }

        let Some(mut monster) = level.monsters.remove(&position) else {
            continue;
        };
        act(&mut monster, level, player, config, turn, events);
        level.monsters.insert(monster.position, monster);
    }
}

fn act(
    monster: &mut Monster,
    level: &mut Level,
    player: &mut Player,
    config: &GameConfig,
    turn: u64,
    events: &mut Vec<GameEvent>,
) {
    monster.accrue_action_points();

    let target = player.position;
    if !can_see(
        &level.grid,
        monster.position,
        target,
        monster.sight_range,
        SightShape::Disc,
    ) {
        return;
    }

    if monster.path_is_stale(target) {
        monster.path = find_path(&level.grid, monster.position, target)
            .map(|path| path.steps)
            .unwrap_or_default();
    }
    level.debug.extend(monster.path.iter().copied());

    let route = std::mem::take(&mut monster.path);
    let mut index = 1;
    let mut moved = false;

    while let Some(&next) = route.get(index) {
        if next == player.position {
            let Some(outcome) = resolve_attack(monster, player, config.attack_cost) else {
                break;
            };
            events.push(GameEvent::Attacked {
                attacker: monster.name.clone(),
                defender: player.name.clone(),
                damage: outcome.damage,
            });
            level.events.push(outcome.narration);

            if outcome.defender_defeated {
                player.alive = false;
                level.events.push("you died");
                events.push(GameEvent::PlayerDied {
                    killer: monster.name.clone(),
                    turn,
                });
                break;
            }
            // Free attacks would never drain the balance.
            if config.attack_cost <= 0.0 {
                break;
            }
            continue;
        }

        let cost = level.grid.tile(next).movement_cost() as f64;
        if !level.grid.is_passable(next)
            || level.is_occupied(next)
            || !monster.action_points.spend(cost)
        {
            break;
        }
        monster.position = next;
        moved = true;
        index += 1;
    }

    // A monster that moved replans next turn; one that stood still keeps its route.
    if !moved {
        monster.path = route;
    }
}
