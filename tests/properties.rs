//! Property tests over generated dungeons and random move sequences.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use delve::entities::Position;
use delve::game::{Game, GameState, Intent, TurnError};
use delve::world::Dungeon;
use delve::GameConfig;

fn movement() -> impl Strategy<Value = Intent> {
    prop_oneof![
        Just(Intent::MoveUp),
        Just(Intent::MoveDown),
        Just(Intent::MoveLeft),
        Just(Intent::MoveRight),
    ]
}

/// Every passable cell reachable from `start` with 4-neighbour steps
fn flood_fill(dungeon: &Dungeon, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(pos) = queue.pop_front() {
        for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
            let next = pos.offset(dx, dy);
            if dungeon.in_bounds(next.x, next.y) && dungeon.is_passable(next.x, next.y) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn rooms_never_overlap(seed in any::<u64>()) {
        let game = Game::new(GameConfig::default(), Some(seed)).unwrap();
        let rooms = game.rooms();

        prop_assert!(!rooms.is_empty() && rooms.len() <= 6);
        for (i, a) in rooms.iter().enumerate() {
            prop_assert_eq!(a.id, i);
            prop_assert!(a.x >= 0 && a.y >= 0 && a.x + a.width < 20 && a.y + a.height < 15);
            for b in &rooms[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn every_room_is_reachable(seed in any::<u64>()) {
        let game = Game::new(GameConfig::default(), Some(seed)).unwrap();
        let dungeon = game.dungeon();
        let reached = flood_fill(dungeon, game.rooms()[0].center());

        for room in game.rooms() {
            prop_assert!(reached.contains(&room.center()), "room {} is cut off", room.id);
        }
        prop_assert_eq!(reached.len(), dungeon.passable_positions().len());
    }

    #[test]
    fn player_stays_on_passable_cells(
        seed in any::<u64>(),
        moves in prop::collection::vec(movement(), 0..80),
    ) {
        let mut game = Game::new(GameConfig::default(), Some(seed)).unwrap();

        for intent in moves {
            if game.is_over() {
                break;
            }
            game.apply(intent).unwrap();
            let pos = game.player().pos;
            prop_assert!(game.dungeon().in_bounds(pos.x, pos.y));
            prop_assert!(game.dungeon().is_passable(pos.x, pos.y));
            prop_assert!(game.player().health.current >= 0);
            prop_assert!(game.player().health.current <= game.player().health.max);
        }
    }

    #[test]
    fn items_and_score_only_move_one_way(
        seed in any::<u64>(),
        moves in prop::collection::vec(movement(), 0..80),
    ) {
        let mut game = Game::new(GameConfig::default(), Some(seed)).unwrap();
        let mut pickups = 0;
        let mut kills = 0;

        for intent in moves {
            if game.is_over() {
                break;
            }
            let items_before = game.items().len();
            let report = game.apply(intent).unwrap();

            let expected = if report.item_collected { items_before - 1 } else { items_before };
            prop_assert_eq!(game.items().len(), expected);
            pickups += report.item_collected as u32;
            kills += report.attack.map_or(0, |a| a.is_kill() as u32);
        }

        prop_assert_eq!(game.score(), pickups * 10 + kills * 20);
    }

    #[test]
    fn health_changes_are_accounted_for(
        seed in any::<u64>(),
        moves in prop::collection::vec(movement(), 0..80),
    ) {
        let mut game = Game::new(GameConfig::default(), Some(seed)).unwrap();

        for intent in moves {
            if game.is_over() {
                break;
            }
            let before = game.player().health;
            let report = game.apply(intent).unwrap();

            let healed = if report.item_collected { 5.min(before.max - before.current) } else { 0 };
            let retaliation = match report.attack {
                Some(delve::combat::AttackOutcome::Retaliated { damage_taken, .. }) => damage_taken,
                _ => 0,
            };
            let hits: i32 = report.enemy_hits.iter().map(|h| h.damage_taken).sum();

            prop_assert_eq!(game.player().health.current, before.current + healed - retaliation - hits);
            prop_assert_eq!(game.state() == GameState::GameOver, game.player().health.current == 0);
        }
    }

    #[test]
    fn ended_runs_reject_every_intent(
        seed in any::<u64>(),
        moves in prop::collection::vec(movement(), 0..40),
        after in prop::collection::vec(movement(), 1..10),
    ) {
        let mut game = Game::new(GameConfig::default(), Some(seed)).unwrap();
        game.play(moves, |_| {}).unwrap();
        if !game.is_over() {
            game.apply(Intent::Quit).unwrap();
        }

        let state = game.state();
        let score = game.score();
        let player = game.player().clone();
        let enemies = game.enemies().to_vec();
        let items = game.items().to_vec();

        for intent in after.into_iter().chain([Intent::Quit]) {
            prop_assert_eq!(game.apply(intent), Err(TurnError::RunEnded { score }));
        }
        prop_assert_eq!(game.state(), state);
        prop_assert_eq!(game.player(), &player);
        prop_assert_eq!(game.enemies(), &enemies[..]);
        prop_assert_eq!(game.items(), &items[..]);
    }
}
