//! Entity population
//!
//! Seeds enemies and items into generated rooms and places the player.

use rand::Rng;

use super::{Enemy, Item, Player, Position};
use crate::data::{GameConfig, Span};
use crate::world::{Dungeon, Room};

/// Sample a count from an inclusive span
fn roll(rng: &mut impl Rng, (min, max): Span) -> u32 {
    rng.gen_range(min..=max)
}

/// Sample a stat from an inclusive span, saturating at `i32::MAX`
fn roll_stat(rng: &mut impl Rng, span: Span) -> i32 {
    i32::try_from(roll(rng, span)).unwrap_or(i32::MAX)
}

/// Random cell strictly inside the room's walls
pub fn random_interior_position(rng: &mut impl Rng, room: &Room) -> Position {
    let x = rng.gen_range(room.x + 1..=room.x + room.width - 2);
    let y = rng.gen_range(room.y + 1..=room.y + room.height - 2);
    Position::new(x, y)
}

/// Spawn enemies for every room, in room order.
///
/// Positions are not deduplicated; two enemies may share a cell.
pub fn spawn_enemies(rng: &mut impl Rng, dungeon: &Dungeon, config: &GameConfig) -> Vec<Enemy> {
    let mut enemies = Vec::new();
    for room in dungeon.rooms() {
        let count = roll(rng, config.enemies_per_room);
        for _ in 0..count {
            let pos = random_interior_position(rng, room);
            let attack = roll_stat(rng, config.enemy_attack);
            enemies.push(Enemy::new(pos, config.enemy_health, attack));
        }
    }
    enemies
}

/// Spawn items for every room, in room order
pub fn spawn_items(rng: &mut impl Rng, dungeon: &Dungeon, config: &GameConfig) -> Vec<Item> {
    let mut items = Vec::new();
    for room in dungeon.rooms() {
        let count = roll(rng, config.items_per_room);
        for _ in 0..count {
            items.push(Item::new(random_interior_position(rng, room)));
        }
    }
    items
}

/// Draw the player's attack for this run
pub fn roll_player_attack(rng: &mut impl Rng, config: &GameConfig) -> i32 {
    roll_stat(rng, config.player_attack)
}

/// Put the player at the center of the first room. `None` for an empty dungeon.
pub fn place_player(dungeon: &Dungeon, config: &GameConfig, attack: i32) -> Option<Player> {
    let first = dungeon.rooms().first()?;
    Some(Player::new(first.center(), config.player_max_health, attack, 0))
}

/// Enemies then items, matching the order the turn engine relies on for
/// first-in-list tie-breaks
pub fn populate(rng: &mut impl Rng, dungeon: &Dungeon, config: &GameConfig) -> (Vec<Enemy>, Vec<Item>) {
    let enemies = spawn_enemies(rng, dungeon, config);
    let items = spawn_items(rng, dungeon, config);
    log::info!("Spawned {} enemies and {} items", enemies.len(), items.len());
    (enemies, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_room() -> Dungeon {
        Dungeon::from_rooms(20, 15, vec![Room::new(0, 0, 7, 7, 0)])
    }

    #[test]
    fn test_single_room_population() {
        let config = GameConfig::default();
        let dungeon = single_room();
        assert!(dungeon.corridors().is_empty());

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (enemies, items) = populate(&mut rng, &dungeon, &config);

            assert!((1..=3).contains(&enemies.len()));
            assert!((2..=5).contains(&items.len()));
            for enemy in &enemies {
                assert!((1..=5).contains(&enemy.pos.x) && (1..=5).contains(&enemy.pos.y));
                assert_eq!(enemy.health, 5);
                assert!((1..=2).contains(&enemy.attack));
            }
            for item in &items {
                assert!((1..=5).contains(&item.pos.x) && (1..=5).contains(&item.pos.y));
            }
        }
    }

    #[test]
    fn test_player_starts_at_first_room_center() {
        let config = GameConfig::default();
        let dungeon = Dungeon::from_rooms(
            20,
            15,
            vec![Room::new(4, 2, 7, 7, 0), Room::new(12, 7, 7, 7, 1)],
        );
        let player = place_player(&dungeon, &config, 3).unwrap();
        assert_eq!(player.pos, Position::new(7, 5));
        assert_eq!(player.current_room, 0);
        assert_eq!(player.health.current, 20);
        assert_eq!(player.attack, 3);
    }

    #[test]
    fn test_huge_attack_saturates() {
        let config = GameConfig { player_attack: (u32::MAX, u32::MAX), ..GameConfig::default() };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll_player_attack(&mut rng, &config), i32::MAX);
    }

    #[test]
    fn test_empty_dungeon_has_no_player() {
        let dungeon = Dungeon::from_rooms(20, 15, Vec::new());
        assert!(place_player(&dungeon, &GameConfig::default(), 1).is_none());
    }
}
