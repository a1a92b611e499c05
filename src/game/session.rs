//! A running game: board, seats, turn order and history.
//!
//! `GameSession` wires the board and move generator into a playable loop.
//! Turns go round-robin over the seats in `GameConfig::colors` order. A
//! player with no legal move must `pass`, which retires them for the rest of
//! the game; retired players are skipped. The game is over once every
//! player has passed.
//!
//! ## Example
//!
//! ```
//! use blokus_engine::core::{GameConfig, PlayerId};
//! use blokus_engine::game::GameSession;
//! use blokus_engine::pieces::PieceCatalog;
//!
//! let mut session = GameSession::new(GameConfig::duo(), PieceCatalog::standard());
//! let first = session.current_player();
//!
//! let mv = session.legal_moves().remove(0);
//! assert!(session.play(first, &mv));
//! assert_eq!(session.current_player(), PlayerId::new(1));
//! assert_eq!(session.history().len(), 1);
//! ```

use std::sync::Arc;

use im::Vector;

use crate::board::Board;
use crate::core::{GameConfig, GameRng, Player, PlayerId, PlayerMap};
use crate::pieces::{Piece, PieceCatalog};
use crate::rules::{Move, MoveGenerator};

use super::record::{GameResult, MoveRecord};

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    catalog: Arc<PieceCatalog>,
    board: Board,
    players: PlayerMap<Player>,
    /// Players who have passed and no longer move.
    inactive: PlayerMap<bool>,
    current: PlayerId,
    turn: u32,
    history: Vector<MoveRecord>,
    rng: GameRng,
}

impl GameSession {
    /// Start a game. Panics on invalid configuration.
    pub fn new(config: GameConfig, catalog: impl Into<Arc<PieceCatalog>>) -> Self {
        config.validate();

        let catalog = catalog.into();
        let player_count = config.player_count();
        let players = PlayerMap::from_fn(player_count, |id| {
            Player::new(config.colors[id.index()], catalog.len())
        });

        let mut session = Self {
            board: Board::new(config.board_size),
            players,
            inactive: PlayerMap::filled(player_count, false),
            current: PlayerId::new(0),
            turn: 0,
            history: Vector::new(),
            rng: GameRng::new(config.seed),
            catalog,
            config,
        };
        session.current = session.starting_player();
        session
    }

    fn starting_player(&mut self) -> PlayerId {
        if self.config.random_start {
            self.rng.starting_seat(self.config.player_count())
        } else {
            PlayerId::new(0)
        }
    }

    /// Clear the board, return every piece and pick a starting player.
    ///
    /// The RNG is not reseeded, so successive random starts differ.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.board_size);
        for id in PlayerId::all(self.config.player_count()) {
            self.players[id].reset_pieces();
            self.inactive[id] = false;
        }
        self.turn = 0;
        self.history = Vector::new();
        self.current = self.starting_player();
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move. Meaningless once `is_over`.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of completed turns (plays and passes).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_active(&self, id: PlayerId) -> bool {
        !self.inactive[id]
    }

    /// True once every player has passed.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.inactive.values().all(|&out| out)
    }

    /// The session RNG, for callers driving random playouts.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    #[must_use]
    pub fn move_generator(&self) -> MoveGenerator<'_> {
        MoveGenerator::new(&self.catalog)
    }

    /// Legal moves for the player to move; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.move_generator()
            .valid_moves(&self.board, &self.players[self.current])
    }

    /// Apply a move for `player`.
    ///
    /// Returns false, with nothing changed, if it is not `player`'s turn, if
    /// a cell is off the board, if the cells are not an orientation of the
    /// named piece, or if the board rejects the placement.
    pub fn play(&mut self, player: PlayerId, mv: &Move) -> bool {
        if self.is_over() || player != self.current {
            return false;
        }
        if !mv.cells.iter().all(|&c| self.board.in_bounds(c)) {
            return false;
        }
        if !self.catalog.get(mv.piece).is_some_and(|p| p.matches(&mv.cells)) {
            return false;
        }
        if !self
            .board
            .commit_placement(mv.piece, &mv.cells, &mut self.players[player])
        {
            return false;
        }

        self.history
            .push_back(MoveRecord::placed(player, self.turn, mv.clone()));
        self.advance();
        true
    }

    /// Pass for `player`, retiring them for the rest of the game.
    ///
    /// Only allowed on `player`'s turn and only when they have no legal
    /// move.
    pub fn pass(&mut self, player: PlayerId) -> bool {
        if self.is_over() || player != self.current {
            return false;
        }
        if self
            .move_generator()
            .has_any_move(&self.board, &self.players[player])
        {
            return false;
        }

        self.inactive[player] = true;
        self.history.push_back(MoveRecord::passed(player, self.turn));
        self.advance();
        true
    }

    // Round-robin to the next player still in the game.
    fn advance(&mut self) {
        self.turn += 1;

        let count = self.player_count();
        let mut next = self.current;
        for _ in 0..count {
            next = next.next_after(count);
            if !self.inactive[next] {
                self.current = next;
                return;
            }
        }
    }

    /// Total size of the pieces a player has not placed.
    #[must_use]
    pub fn remaining_cells(&self, id: PlayerId) -> usize {
        self.players[id]
            .available_pieces()
            .filter_map(|index| self.catalog.get(index))
            .map(Piece::size)
            .sum()
    }

    /// Fewest unplaced cells wins; `None` while the game is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        GameResult::from_remaining(
            self.players
                .ids()
                .map(|id| (id, self.remaining_cells(id))),
        )
    }
}
