use serde::{Deserialize, Serialize};

/// Board edge length. Rows and columns run `0..BOARD_SIZE`.
pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row delta of a forward step. White starts at the bottom (rows 5..7)
    /// and moves toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The opponent's back rank, where men of this color promote.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            other => Err(format!("unknown color: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    pub fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Diagonal directions this piece may travel, as `(d_row, d_col)` unit steps.
    /// Men only go forward; kings go all four ways. Order is fixed so move
    /// enumeration is deterministic.
    pub fn directions(self) -> &'static [(i8, i8)] {
        const UP: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
        const DOWN: [(i8, i8); 2] = [(1, -1), (1, 1)];
        const ALL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        match (self.rank, self.color) {
            (Rank::King, _) => &ALL,
            (Rank::Man, Color::White) => &UP,
            (Rank::Man, Color::Black) => &DOWN,
        }
    }

    /// Diagram character: `w`/`b` for men, `W`/`B` for kings.
    pub fn symbol(self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::King) => 'W',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

/// A board coordinate. Any pair of integers is representable so malformed
/// input can be reported as `OutOfBounds` rather than silently clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Dark square: the only squares a piece may ever stand on.
    pub fn is_playable(self) -> bool {
        self.in_bounds() && (self.row + self.col) % 2 == 1
    }

    /// The square `(d_row, d_col)` away, if it is still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let to = Square::new(self.row + d_row, self.col + d_col);
        to.in_bounds().then_some(to)
    }

    /// Midpoint of a two-square diagonal jump.
    pub fn midpoint(self, to: Square) -> Option<Square> {
        let d_row = to.row - self.row;
        let d_col = to.col - self.col;
        if d_row.abs() == 2 && d_col.abs() == 2 {
            Some(Square::new(self.row + d_row / 2, self.col + d_col / 2))
        } else {
            None
        }
    }

    /// Every playable square in row-major order.
    pub fn playable() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
            .filter(|sq| sq.is_playable())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Step,
    Jump,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    pub fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Step,
        }
    }

    pub fn jump(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Jump,
        }
    }

    pub fn is_capture(self) -> bool {
        self.kind == MoveKind::Jump
    }

    /// The square whose piece a jump removes.
    pub fn captured(self) -> Option<Square> {
        match self.kind {
            MoveKind::Jump => self.from.midpoint(self.to),
            MoveKind::Step => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = match self.kind {
            MoveKind::Step => '-',
            MoveKind::Jump => 'x',
        };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Whose turn it is and, mid-chain, which piece is pinned to keep capturing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub active: Color,
    pub chain_square: Option<Square>,
}

impl TurnState {
    pub fn new(active: Color) -> Self {
        Self {
            active,
            chain_square: None,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

/// Terminal outcome of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Color,
}

impl MatchResult {
    pub fn loser(self) -> Color {
        self.winner.other()
    }
}
