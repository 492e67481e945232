//! Enemy turn
//!
//! Every enemy takes one greedy step towards the player. Enemies that land on
//! the player strike once and are consumed.

use crate::combat::{self, EnemyHit};
use crate::entities::{Enemy, Player};
use crate::world::Dungeon;

/// Run the enemy turn over the enemies present when it starts, in list order.
///
/// Removals are deferred until the pass completes so no enemy is skipped or
/// visited twice. Every enemy moves even after a hit has killed the player;
/// damage clamps at zero, so late catchers land for nothing but are still
/// consumed.
///
/// An enemy already sharing the player's cell has no step to take and does
/// not strike, even though its cell is a valid destination. It was either just
/// fought or just arrived, and striking would count a second hit for the same
/// contact.
pub fn run_enemy_turn(dungeon: &Dungeon, player: &mut Player, enemies: &mut Vec<Enemy>) -> Vec<EnemyHit> {
    let target = player.pos;
    let mut hits = Vec::new();
    let mut consumed = Vec::new();

    for index in 0..enemies.len() {
        let enemy = &mut enemies[index];
        let (dx, dy) = enemy.pos.step_towards(target);
        if (dx, dy) == (0, 0) {
            continue;
        }

        let to = enemy.pos.offset(dx, dy);
        if !dungeon.in_bounds(to.x, to.y) || !dungeon.is_passable(to.x, to.y) {
            continue;
        }
        enemy.pos = to;

        if to == target {
            hits.push(combat::enemy_attacks(player, enemy));
            consumed.push(index);
        }
    }

    // Indices were pushed in ascending order
    for index in consumed.into_iter().rev() {
        enemies.remove(index);
    }

    hits
}
