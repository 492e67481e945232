//! Turn resolution
//!
//! One intent in, one fully resolved turn out. A move runs the pipeline
//! move → pickup → player attack → room tracking → enemy turn; a blocked move
//! runs none of it.

use super::ai;
use super::error::TurnError;
use super::state::{Game, GameState, MessageCategory};
use crate::combat::{self, AttackOutcome, EnemyHit};

/// A discrete player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Quit,
}

impl Intent {
    /// Movement delta, `None` for quit
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Intent::MoveUp => Some((0, -1)),
            Intent::MoveDown => Some((0, 1)),
            Intent::MoveLeft => Some((-1, 0)),
            Intent::MoveRight => Some((1, 0)),
            Intent::Quit => None,
        }
    }

    /// Parse a move string such as `"RRDLq"`. Whitespace is ignored.
    pub fn parse_sequence(moves: &str) -> Result<Vec<Intent>, TurnError> {
        moves
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Intent::try_from)
            .collect()
    }
}

impl TryFrom<char> for Intent {
    type Error = TurnError;

    /// `U/D/L/R/Q`, case-insensitive
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'u' => Ok(Intent::MoveUp),
            'd' => Ok(Intent::MoveDown),
            'l' => Ok(Intent::MoveLeft),
            'r' => Ok(Intent::MoveRight),
            'q' => Ok(Intent::Quit),
            _ => Err(TurnError::UnknownIntent(c)),
        }
    }
}

/// What a single turn did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub intent: Intent,
    /// False for a blocked move or quit
    pub moved: bool,
    pub item_collected: bool,
    /// Set when the player stepped onto an enemy
    pub attack: Option<AttackOutcome>,
    /// Enemies that caught the player during the enemy turn, in list order
    pub enemy_hits: Vec<EnemyHit>,
    pub state: GameState,
}

impl TurnReport {
    fn idle(intent: Intent, state: GameState) -> Self {
        Self {
            intent,
            moved: false,
            item_collected: false,
            attack: None,
            enemy_hits: Vec::new(),
            state,
        }
    }
}

impl Game {
    /// Resolve one intent.
    ///
    /// Fails without touching state if the run has already ended.
    pub fn apply(&mut self, intent: Intent) -> Result<TurnReport, TurnError> {
        if self.is_over() {
            return Err(TurnError::RunEnded { score: self.score });
        }

        let Some((dx, dy)) = intent.delta() else {
            self.add_message("You flee the dungeon.", MessageCategory::System);
            self.set_state(GameState::Quit);
            return Ok(TurnReport::idle(intent, self.state));
        };

        let target = self.player.pos.offset(dx, dy);
        if !self.dungeon.in_bounds(target.x, target.y) || !self.dungeon.is_passable(target.x, target.y) {
            log::trace!("Blocked move {:?} into {:?}", intent, target);
            return Ok(TurnReport::idle(intent, self.state));
        }

        self.player.pos = target;

        let item_collected = self.collect_item();
        let attack = self.engage_enemy();
        self.update_current_room();
        let enemy_hits = self.run_enemy_turn();

        log::debug!(
            "Turn {:?}: pos {:?}, hp {}, score {}, {} enemies left",
            intent,
            self.player.pos,
            self.player.health.current,
            self.score,
            self.enemies.len()
        );

        Ok(TurnReport {
            intent,
            moved: true,
            item_collected,
            attack,
            enemy_hits,
            state: self.state,
        })
    }

    /// Feed `intents` one at a time, calling `render` once up front and after
    /// every applied intent. Stops at the first terminal state and returns the
    /// score.
    pub fn play<I, F>(&mut self, intents: I, mut render: F) -> Result<u32, TurnError>
    where
        I: IntoIterator<Item = Intent>,
        F: FnMut(&Game),
    {
        render(self);
        for intent in intents {
            self.apply(intent)?;
            render(self);
            if self.is_over() {
                break;
            }
        }
        Ok(self.score)
    }

    /// Pick up the first item on the player's cell, if any
    fn collect_item(&mut self) -> bool {
        let pos = self.player.pos;
        let Some(index) = self.items.iter().position(|item| item.pos == pos) else {
            return false;
        };

        self.items.remove(index);
        self.score = self.score.saturating_add(self.config.item_score);
        let healed = self.player.health.heal(self.config.item_heal);
        self.add_message(
            format!("You pick up treasure (+{} score, +{} health).", self.config.item_score, healed),
            MessageCategory::Item,
        );
        true
    }

    /// Fight the first enemy on the player's cell, if any
    fn engage_enemy(&mut self) -> Option<AttackOutcome> {
        let pos = self.player.pos;
        let index = self.enemies.iter().position(|enemy| enemy.pos == pos)?;

        let outcome = combat::player_attacks(&mut self.player, &mut self.enemies[index]);
        match outcome {
            AttackOutcome::Slain { damage_dealt } => {
                self.enemies.remove(index);
                self.score = self.score.saturating_add(self.config.kill_score);
                self.add_message(
                    format!("You slay the enemy with a {} damage blow (+{} score).", damage_dealt, self.config.kill_score),
                    MessageCategory::Combat,
                );
            }
            AttackOutcome::Retaliated { damage_dealt, damage_taken, enemy_health } => {
                self.add_message(
                    format!(
                        "You hit the enemy for {} ({} left); it strikes back for {}.",
                        damage_dealt, enemy_health, damage_taken
                    ),
                    MessageCategory::Combat,
                );
                self.check_player_death();
            }
        }
        Some(outcome)
    }

    /// First room whose bounds hold the player; unchanged when standing in a
    /// corridor outside every room
    fn update_current_room(&mut self) {
        if let Some(room) = self.dungeon.room_containing(self.player.pos.x, self.player.pos.y) {
            self.player.current_room = room.id;
        }
    }

    fn run_enemy_turn(&mut self) -> Vec<EnemyHit> {
        let hits = ai::run_enemy_turn(&self.dungeon, &mut self.player, &mut self.enemies);
        for hit in &hits {
            self.add_message(
                format!("An enemy lunges at you for {} damage.", hit.damage_taken),
                MessageCategory::Combat,
            );
        }
        if !hits.is_empty() {
            self.check_player_death();
        }
        hits
    }

    fn check_player_death(&mut self) {
        if self.player.health.is_dead() && self.state == GameState::Running {
            self.add_message("You have fallen.", MessageCategory::Combat);
            log::info!("Player died with score {}", self.score);
            self.set_state(GameState::GameOver);
        }
    }
}
