//! Core types module - shared enums and configuration constants.
//!
//! Pure data structures with no external dependencies, usable from the rules
//! engine, the input mapper, and the terminal renderer alike.
//!
//! # Board dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn column**: `width / 2 - 1` (x = 4 on the default board)
//!
//! # Timing
//!
//! Gravity advances the active piece one row every [`GRAVITY_MS`]
//! milliseconds. There are no levels or speed curves.

/// Default board width in cells (10 columns).
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows).
pub const BOARD_HEIGHT: u16 = 20;

/// Gravity tick period in milliseconds (one row per second).
pub const GRAVITY_MS: u64 = 1000;

/// The seven falling-piece kinds.
///
/// Each kind pairs a fixed shape matrix with a display color:
///
/// - **L**: orange, 3x2 L-shape
/// - **J**: blue, 3x2 J-shape (mirror of L)
/// - **Z**: red, 2x3 Z-shape
/// - **S**: green, 2x3 S-shape (mirror of Z)
/// - **T**: purple, 2x3 T-shape
/// - **O**: yellow, 2x2 square
/// - **I**: cyan, 4x1 vertical bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    J,
    Z,
    S,
    T,
    O,
    I,
}

impl PieceKind {
    /// All kinds, in the order the piece picker indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::O,
        PieceKind::I,
    ];

    /// Display color for cells locked from this kind.
    pub fn color(&self) -> PieceColor {
        match self {
            PieceKind::L => PieceColor::Orange,
            PieceKind::J => PieceColor::Blue,
            PieceKind::Z => PieceColor::Red,
            PieceKind::S => PieceColor::Green,
            PieceKind::T => PieceColor::Purple,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::I => PieceColor::Cyan,
        }
    }
}

/// Color identifier carried by filled cells.
///
/// One per piece kind; how a color is actually painted is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Orange,
    Blue,
    Red,
    Green,
    Purple,
    Yellow,
    Cyan,
}

/// A cell on the board.
///
/// - `None`: empty
/// - `Some(kind)`: filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Direction of a single-step move of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

/// Discrete actions a player (or the gravity clock) can request.
///
/// Each input event maps to exactly one action, and each action to exactly
/// one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the active piece one cell left.
    MoveLeft,
    /// Move the active piece one cell right.
    MoveRight,
    /// Move the active piece one cell down (same step gravity takes).
    MoveDown,
    /// Rotate the active piece a quarter turn.
    Rotate,
    /// Toggle the gravity clock.
    Pause,
    /// Reset to a fresh board.
    Restart,
}
