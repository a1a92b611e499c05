//! History entries and game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::Move;

/// One turn of history: who acted, when, and what they placed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// The placement, or `None` for a pass.
    pub mv: Option<Move>,
}

impl MoveRecord {
    #[must_use]
    pub fn placed(player: PlayerId, turn: u32, mv: Move) -> Self {
        Self {
            player,
            turn,
            mv: Some(mv),
        }
    }

    #[must_use]
    pub fn passed(player: PlayerId, turn: u32) -> Self {
        Self {
            player,
            turn,
            mv: None,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.mv.is_none()
    }
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has the fewest unplaced cells.
    Winner(PlayerId),
    /// Several players tie for the fewest unplaced cells.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Result from per-player unplaced cell counts, lowest wins.
    #[must_use]
    pub fn from_remaining(remaining: impl IntoIterator<Item = (PlayerId, usize)>) -> Option<Self> {
        let remaining: Vec<_> = remaining.into_iter().collect();
        let best = remaining.iter().map(|&(_, cells)| cells).min()?;
        let mut winners: Vec<_> = remaining
            .into_iter()
            .filter(|&(_, cells)| cells == best)
            .map(|(player, _)| player)
            .collect();

        if winners.len() == 1 {
            Some(GameResult::Winner(winners.remove(0)))
        } else {
            Some(GameResult::Winners(winners))
        }
    }

    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_winner() {
        let result = GameResult::from_remaining([
            (PlayerId::new(0), 12),
            (PlayerId::new(1), 4),
            (PlayerId::new(2), 30),
        ])
        .unwrap();

        assert_eq!(result, GameResult::Winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!result.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_tie() {
        let result =
            GameResult::from_remaining([(PlayerId::new(0), 5), (PlayerId::new(1), 5)]).unwrap();

        assert_eq!(result, GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1)]));
        assert!(result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_no_players() {
        assert_eq!(GameResult::from_remaining(Vec::new()), None);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::passed(PlayerId::new(1), 7);
        assert!(record.is_pass());

        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
