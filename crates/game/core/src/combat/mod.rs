//! Combat resolution.
//!
//! Attacks are deterministic and one-directional: damage equals the attacker's
//! strength and nothing is rolled. Death handling belongs to the caller, which
//! knows whether the defender was the player or a monster.

use crate::state::Character;

/// What a single attack did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub damage: i32,
    /// Narration line for the level's event log.
    pub narration: String,
    /// The defender's hitpoints are at or below zero after this attack.
    pub defender_defeated: bool,
}

/// Resolves one attack from `attacker` against `defender`.
///
/// Spends `cost` action points from the attacker and subtracts its strength
/// from the defender's hitpoints. Returns `None`, changing nothing, when the
/// attacker cannot afford the attack.
pub fn resolve_attack(
    attacker: &mut Character,
    defender: &mut Character,
    cost: f64,
) -> Option<AttackOutcome> {
    if !attacker.action_points.spend(cost) {
        return None;
    }

    let damage = attacker.strength;
    defender.hitpoints -= damage;

    Some(AttackOutcome {
        damage,
        narration: format!(
            "{} attacked {} for {} damage",
            attacker.name, defender.name, damage
        ),
        defender_defeated: defender.is_defeated(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerTemplate;
    use crate::env::MonsterKind;
    use crate::state::{ActionPoints, EntityId, Monster, Player, Position};

    #[test]
    fn attack_moves_exactly_strength_and_cost() {
        let mut player = Player::from_template(&PlayerTemplate::default(), Position::ORIGIN);
        let mut rat = Monster::spawn(MonsterKind::Rat, EntityId(1), "Rat 1".into(), Position::new(1, 0));
        player.action_points = ActionPoints::new(2.5);

        let outcome = resolve_attack(&mut player, &mut rat, 1.0).unwrap();

        assert_eq!(outcome.damage, 3);
        assert_eq!(outcome.narration, "meds attacked Rat 1 for 3 damage");
        assert!(!outcome.defender_defeated);
        assert_eq!(rat.hitpoints, 2);
        assert!(rat.alive);
        assert_eq!(player.action_points.value(), 1.5);
        assert_eq!(player.hitpoints, 50);
        assert_eq!(rat.position, Position::new(1, 0));
    }

    #[test]
    fn unaffordable_attack_changes_nothing() {
        let mut player = Player::from_template(&PlayerTemplate::default(), Position::ORIGIN);
        let mut rat = Monster::spawn(MonsterKind::Rat, EntityId(1), "Rat 1".into(), Position::new(1, 0));
        player.action_points = ActionPoints::new(0.5);

        assert!(resolve_attack(&mut player, &mut rat, 1.0).is_none());
        assert_eq!(rat.hitpoints, 5);
        assert_eq!(player.action_points.value(), 0.5);
    }

    #[test]
    fn defeat_is_reported_not_applied() {
        let mut spider = Monster::spawn(MonsterKind::Spider, EntityId(1), "Spider 1".into(), Position::ORIGIN);
        let mut player = Player::from_template(&PlayerTemplate::default(), Position::new(1, 0));
        spider.action_points = ActionPoints::new(1.0);
        player.hitpoints = 2;

        let outcome = resolve_attack(&mut spider, &mut player, 1.0).unwrap();

        assert!(outcome.defender_defeated);
        assert_eq!(player.hitpoints, 0);
        assert!(player.alive);
    }
}
