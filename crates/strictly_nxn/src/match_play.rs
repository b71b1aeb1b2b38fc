//! Match scoring: rounds until one player reaches the target.

use crate::error::{ConfigError, ConfigErrorKind};
use crate::{BoardSize, Player, Round, RoundResult};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Round wins needed to take a match unless configured otherwise.
pub const DEFAULT_TARGET_WINS: u32 = 3;

/// Settings fixed for the length of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(default)]
pub struct MatchConfig {
    /// Board used for every round.
    board_size: BoardSize,
    /// Who moves first in every round.
    first_player: Player,
    /// Round wins that end the match.
    target_wins: u32,
    /// Seed for the computer's random fallback.
    seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::Three,
            first_player: Player::Human,
            target_wins: DEFAULT_TARGET_WINS,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Rejects configurations that can never finish.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_wins == 0 {
            return Err(ConfigError::new(ConfigErrorKind::ZeroTarget));
        }
        Ok(())
    }
}

/// Rounds won per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchScore {
    /// Rounds the human has won.
    human: u32,
    /// Rounds the computer has won.
    computer: u32,
}

impl MatchScore {
    /// Round wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    /// Adds one round's result. Ties change nothing.
    pub fn record(&mut self, result: RoundResult) {
        match result.winner() {
            Some(Player::Human) => self.human += 1,
            Some(Player::Computer) => self.computer += 1,
            None => {}
        }
    }

    /// The player ahead, or `None` when level.
    pub fn leader(&self) -> Option<Player> {
        match self.human.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Some(Player::Human),
            std::cmp::Ordering::Less => Some(Player::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// A sequence of rounds until one player reaches the target.
#[derive(Debug, Clone, Getters)]
pub struct Match {
    /// Settings for every round.
    config: MatchConfig,
    /// Running score.
    score: MatchScore,
    /// Rounds started so far.
    rounds_played: u32,
}

impl Match {
    /// Starts a match with a zeroed score.
    #[track_caller]
    #[instrument]
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            score: MatchScore::default(),
            rounds_played: 0,
        })
    }

    /// Begins the next round on a fresh board.
    #[instrument(skip(self), fields(round = self.rounds_played + 1))]
    pub fn start_round(&mut self) -> Round {
        self.rounds_played += 1;
        info!(size = %self.config.board_size, first = %self.config.first_player, "Round start");
        Round::new(self.config.board_size, self.config.first_player)
    }

    /// Records a finished round and returns the match winner, if any.
    ///
    /// Results arriving after the match is decided are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: RoundResult) -> Option<Player> {
        if let Some(winner) = self.winner() {
            warn!(%winner, "Result recorded after match end");
            return Some(winner);
        }
        self.score.record(result);
        let winner = self.winner();
        if let Some(winner) = winner {
            info!(%winner, human = self.score.human, computer = self.score.computer, "Match over");
        }
        winner
    }

    /// The player who reached the target, if any.
    pub fn winner(&self) -> Option<Player> {
        let target = self.config.target_wins;
        Player::iter().find(|&p| self.score.wins(p) >= target)
    }

    /// True once a player has reached the target.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_to_three() {
        let mut game = Match::new(MatchConfig::default()).unwrap();
        let human = RoundResult::Winner(Player::Human);
        let computer = RoundResult::Winner(Player::Computer);
        assert_eq!(game.record(human), None);
        assert_eq!(game.record(RoundResult::Tie), None);
        assert_eq!(game.record(computer), None);
        assert_eq!(game.record(human), None);
        assert_eq!(game.score().leader(), Some(Player::Human));
        assert_eq!(game.record(human), Some(Player::Human));
        assert!(game.is_over());
        assert_eq!(*game.score().human(), 3);
        assert_eq!(*game.score().computer(), 1);
    }

    #[test]
    fn test_results_after_end_ignored() {
        let config = MatchConfig::new(BoardSize::Five, Player::Computer, 1, Some(3));
        let mut game = Match::new(config).unwrap();
        let human = RoundResult::Winner(Player::Human);
        let computer = RoundResult::Winner(Player::Computer);
        assert_eq!(game.record(computer), Some(Player::Computer));
        assert_eq!(game.record(human), Some(Player::Computer));
        assert_eq!(*game.score().human(), 0);
    }

    #[test]
    fn test_zero_target_rejected() {
        let config = MatchConfig::new(BoardSize::Three, Player::Human, 0, None);
        let err = Match::new(config).unwrap_err();
        assert_eq!(err.kind(), &ConfigErrorKind::ZeroTarget);
    }

    #[test]
    fn test_rounds_use_config() {
        let config = MatchConfig::new(BoardSize::Nine, Player::Computer, 3, None);
        let mut game = Match::new(config).unwrap();
        let round = game.start_round();
        assert_eq!(round.board().size(), BoardSize::Nine);
        assert_eq!(round.to_move(), Player::Computer);
        assert_eq!(*game.rounds_played(), 1);
        game.start_round();
        assert_eq!(*game.rounds_played(), 2);
    }

    #[test]
    fn test_level_score_has_no_leader() {
        let mut score = MatchScore::default();
        score.record(RoundResult::Winner(Player::Human));
        score.record(RoundResult::Winner(Player::Computer));
        assert_eq!(score.leader(), None);
    }
}
