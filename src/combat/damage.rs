//! Melee resolution
//!
//! Bump combat between the player and a single enemy. Attacks always land and
//! deal flat damage equal to the attacker's attack value.

use crate::entities::{Enemy, Player, Position};

/// Result of the player stepping onto an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The enemy dropped to zero health or below and must be removed
    Slain { damage_dealt: i32 },
    /// The enemy survived and struck back
    Retaliated {
        damage_dealt: i32,
        /// Health the player actually lost (clamped at zero)
        damage_taken: i32,
        enemy_health: i32,
    },
}

impl AttackOutcome {
    pub fn is_kill(&self) -> bool {
        matches!(self, AttackOutcome::Slain { .. })
    }
}

/// An enemy catching the player during the enemy turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyHit {
    /// Cell the enemy moved onto (the player's cell)
    pub at: Position,
    pub attack: i32,
    /// Health the player actually lost (clamped at zero)
    pub damage_taken: i32,
}

/// The player strikes `enemy`; a survivor retaliates once.
pub fn player_attacks(player: &mut Player, enemy: &mut Enemy) -> AttackOutcome {
    let damage_dealt = player.attack;
    enemy.health -= damage_dealt;

    if enemy.is_dead() {
        return AttackOutcome::Slain { damage_dealt };
    }

    let damage_taken = player.health.take_damage(enemy.attack);
    AttackOutcome::Retaliated {
        damage_dealt,
        damage_taken,
        enemy_health: enemy.health,
    }
}

/// `enemy` lands on the player and strikes. The caller removes the enemy
/// whatever the outcome.
pub fn enemy_attacks(player: &mut Player, enemy: &Enemy) -> EnemyHit {
    EnemyHit {
        at: enemy.pos,
        attack: enemy.attack,
        damage_taken: player.health.take_damage(enemy.attack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(health: i32, attack: i32) -> Player {
        let mut player = Player::new(Position::new(3, 3), 20, attack, 0);
        player.health.current = health;
        player
    }

    #[test]
    fn test_killing_blow_leaves_player_untouched() {
        let mut player = player_with(20, 5);
        let mut enemy = Enemy::new(Position::new(3, 3), 5, 2);

        let outcome = player_attacks(&mut player, &mut enemy);
        assert_eq!(outcome, AttackOutcome::Slain { damage_dealt: 5 });
        assert!(outcome.is_kill());
        assert_eq!(player.health.current, 20);
    }

    #[test]
    fn test_survivor_retaliates() {
        let mut player = player_with(20, 2);
        let mut enemy = Enemy::new(Position::new(3, 3), 5, 2);

        let outcome = player_attacks(&mut player, &mut enemy);
        assert_eq!(
            outcome,
            AttackOutcome::Retaliated { damage_dealt: 2, damage_taken: 2, enemy_health: 3 }
        );
        assert_eq!(enemy.health, 3);
        assert_eq!(player.health.current, 18);
    }

    #[test]
    fn test_retaliation_clamps_at_zero() {
        let mut player = player_with(1, 1);
        let mut enemy = Enemy::new(Position::new(3, 3), 5, 2);

        let outcome = player_attacks(&mut player, &mut enemy);
        assert!(matches!(outcome, AttackOutcome::Retaliated { damage_taken: 1, .. }));
        assert_eq!(player.health.current, 0);
    }

    #[test]
    fn test_enemy_hit() {
        let mut player = player_with(3, 1);
        let enemy = Enemy::new(Position::new(3, 3), 5, 2);

        let hit = enemy_attacks(&mut player, &enemy);
        assert_eq!(hit.damage_taken, 2);
        assert_eq!(player.health.current, 1);
    }
}
