//! Engine module - the Running/Over state machine.
//!
//! [`GameEngine`] owns the board, the single active piece, and the piece
//! picker. Every external stimulus is one synchronous call (`attempt_move`,
//! `attempt_rotate`, `tick`, `reset`) that runs to completion, so observers
//! never see a half-applied mutation. Rejected moves and rotations are
//! ordinary outcomes, not errors; the only terminal condition is a blocked
//! spawn, which flips the engine to [`Phase::Over`].

use crate::board::Board;
use crate::rng::PiecePicker;
use crate::shape::Shape;
use crate::types::{Direction, PieceColor, PieceKind};

/// The currently falling piece.
///
/// Tracked separately from the board; its cells only enter the grid on lock.
/// The shape matrix is rotation-dependent and replaced wholesale by
/// [`GameEngine::attempt_rotate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape's local origin on the board.
    pub x: i16,
    /// Row of the shape's local origin on the board.
    pub y: i16,
}

impl ActivePiece {
    pub fn color(&self) -> PieceColor {
        self.kind.color()
    }
}

/// Externally observable engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Over,
}

/// The rules engine: grid + active piece + spawn randomness.
pub struct GameEngine {
    board: Board,
    active: Option<ActivePiece>,
    phase: Phase,
    picker: Box<dyn PiecePicker>,
}

impl GameEngine {
    /// Create an engine on the default 10x20 board and spawn the first piece.
    pub fn new(picker: Box<dyn PiecePicker>) -> Self {
        Self::with_board(Board::new(), picker)
    }

    /// Create an engine on a custom board and spawn the first piece.
    ///
    /// A board too small to host the first spawn starts the engine in
    /// [`Phase::Over`].
    pub fn with_board(board: Board, picker: Box<dyn PiecePicker>) -> Self {
        let mut engine = Self {
            board,
            active: None,
            phase: Phase::Running,
            picker,
        };
        engine.spawn_piece();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// The single collision predicate: can `shape` sit at origin (x, y)?
    ///
    /// True iff every solid shape cell lands on an in-bounds, empty board
    /// cell. Empty shape cells impose no constraint. Move, rotation, and
    /// spawn validation all go through here.
    pub fn is_valid_placement(&self, x: i16, y: i16, shape: &Shape) -> bool {
        shape
            .offsets()
            .all(|(dx, dy)| self.board.is_free(x + dx, y + dy))
    }

    /// Try to translate the active piece one cell.
    ///
    /// A blocked `Down` means the piece has landed: it locks into the grid,
    /// full rows clear, and the next piece spawns. Blocked `Left`/`Right`
    /// are silent no-ops. Returns whether the position changed.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        let Some(active) = &self.active else {
            return false;
        };

        let (x, y) = match direction {
            Direction::Left => (active.x - 1, active.y),
            Direction::Right => (active.x + 1, active.y),
            Direction::Down => (active.x, active.y + 1),
        };

        if self.is_valid_placement(x, y, &active.shape) {
            if let Some(active) = &mut self.active {
                active.x = x;
                active.y = y;
            }
            return true;
        }

        if direction == Direction::Down {
            self.lock_and_advance();
        }
        false
    }

    /// Try to rotate the active piece a quarter turn in place.
    ///
    /// The rotated matrix is validated at the current position; there is no
    /// wall-kick correction, so a rotation blocked by a wall or the stack is
    /// simply discarded. Returns whether the shape changed.
    pub fn attempt_rotate(&mut self) -> bool {
        let Some(active) = &self.active else {
            return false;
        };

        let rotated = active.shape.rotated();
        let (x, y) = (active.x, active.y);
        if !self.is_valid_placement(x, y, &rotated) {
            return false;
        }

        if let Some(active) = &mut self.active {
            active.shape = rotated;
        }
        true
    }

    /// One gravity step. Inert once the game is over.
    pub fn tick(&mut self) {
        self.attempt_move(Direction::Down);
    }

    /// Install a fresh random piece at the spawn position.
    ///
    /// Spawns horizontally centered (`width / 2 - 1`) on the top row in the
    /// kind's default orientation. A blocked spawn is the sole game-over
    /// trigger: the engine flips to [`Phase::Over`] and no piece is
    /// installed. Returns whether a piece was installed.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.picker.next_kind();
        let shape = Shape::template(kind);
        let x = self.board.width() as i16 / 2 - 1;
        let y = 0;

        if !self.is_valid_placement(x, y, &shape) {
            self.phase = Phase::Over;
            self.active = None;
            return false;
        }

        self.active = Some(ActivePiece { kind, shape, x, y });
        true
    }

    /// Transfer the landed piece into the grid, clear lines, respawn.
    fn lock_and_advance(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        // The piece only ever sits at a validated position, so every solid
        // cell lands in bounds.
        for (dx, dy) in active.shape.offsets() {
            self.board.set(active.x + dx, active.y + dy, Some(active.kind));
        }

        self.board.clear_full_rows();
        self.spawn_piece();
    }

    /// External reset: empty board, Running, fresh spawn.
    pub fn reset(&mut self) {
        self.board.clear();
        self.phase = Phase::Running;
        self.spawn_piece();
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("active", &self.active)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequencePicker;

    fn square_engine() -> GameEngine {
        GameEngine::new(Box::new(SequencePicker::new([PieceKind::O])))
    }

    #[test]
    fn starts_running_with_a_centered_piece() {
        let engine = square_engine();
        assert_eq!(engine.phase(), Phase::Running);
        let active = engine.active().unwrap();
        assert_eq!((active.x, active.y), (4, 0));
        assert_eq!(active.kind, PieceKind::O);
    }

    #[test]
    fn grid_never_contains_the_active_piece() {
        let engine = square_engine();
        assert!(engine.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn lateral_move_commits_or_rejects_without_locking() {
        let mut engine = square_engine();

        assert!(engine.attempt_move(Direction::Left));
        assert_eq!(engine.active().unwrap().x, 3);

        // Push to the wall; the final attempt is a silent no-op.
        while engine.attempt_move(Direction::Left) {}
        assert_eq!(engine.active().unwrap().x, 0);
        assert!(!engine.attempt_move(Direction::Left));
        assert_eq!(engine.active().unwrap().x, 0);
        assert!(engine.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn blocked_down_locks_and_respawns() {
        let mut engine = square_engine();

        // 18 valid steps take the 2-tall square to y=18 (rows 18-19).
        for _ in 0..18 {
            assert!(engine.attempt_move(Direction::Down));
        }
        assert!(!engine.attempt_move(Direction::Down));

        // Locked at rows 18-19, columns 4-5, and a fresh piece is up top.
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert!(engine.board().is_occupied(x, y));
        }
        let respawned = engine.active().unwrap();
        assert_eq!((respawned.x, respawned.y), (4, 0));
        assert_eq!(engine.phase(), Phase::Running);
    }

    #[test]
    fn rotation_against_the_wall_is_discarded() {
        let mut engine = GameEngine::new(Box::new(SequencePicker::new([PieceKind::I])));

        // Park the vertical bar at the right wall.
        while engine.attempt_move(Direction::Right) {}
        assert_eq!(engine.active().unwrap().x, 9);

        // The flat 1x4 result would need columns 9..13; no kick is attempted.
        assert!(!engine.attempt_rotate());
        let active = engine.active().unwrap();
        assert_eq!(active.shape, Shape::template(PieceKind::I));
        assert_eq!((active.x, active.y), (9, 0));
    }

    #[test]
    fn over_makes_operations_inert() {
        let mut board = Board::new();
        // Fill the spawn cells of rows 0-1.
        for y in 0..2 {
            for x in 4..6 {
                board.set(x, y, Some(PieceKind::T));
            }
        }
        let mut engine = GameEngine::with_board(board, Box::new(SequencePicker::new([PieceKind::O])));

        assert_eq!(engine.phase(), Phase::Over);
        assert!(engine.active().is_none());
        assert!(!engine.attempt_move(Direction::Left));
        assert!(!engine.attempt_rotate());
        engine.tick();
        assert_eq!(engine.phase(), Phase::Over);
    }

    #[test]
    fn reset_leaves_a_fresh_running_game() {
        let mut board = Board::new();
        for x in 4..6 {
            board.set(x, 0, Some(PieceKind::T));
        }
        let mut engine = GameEngine::with_board(board, Box::new(SequencePicker::new([PieceKind::O])));
        assert!(engine.is_over());

        engine.reset();
        assert_eq!(engine.phase(), Phase::Running);
        assert!(engine.board().cells().iter().all(|c| c.is_none()));
        assert!(engine.active().is_some());
    }
}
