use crate::config::{Role, SymbolAlphabet};
use crate::direction::Direction;
use crate::error::{InvalidMapReason, Result};
use crate::node::Path;
use rand::Rng;
use std::fmt;

/// Height and width must both be strictly greater than this.
pub const MIN_DIMENSION: usize = 4;

const RANDOM_HEIGHTS: std::ops::Range<usize> = 20..60;
const RANDOM_WIDTHS: std::ops::Range<usize> = 25..75;
// Below this a random cell is a wall; neighbours nudge the draw to grow clusters.
const WALL_THRESHOLD: f64 = 0.48;
const PASSABLE_NUDGE: f64 = 0.12;
const WALL_NUDGE: f64 = 0.07;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// One step in `direction`, or `None` when that leaves a `height` x `width` grid.
    pub fn step(self, direction: Direction, height: usize, width: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < height && col < width).then_some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A rectangular grid of map symbols, exactly as read from a grid source.
///
/// Construction validates the shape, so every `RawGrid` is non-empty,
/// rectangular and larger than [`MIN_DIMENSION`] on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGrid {
    height: usize,
    width: usize,
    symbols: Vec<Vec<char>>,
}

impl RawGrid {
    pub fn new(symbols: Vec<Vec<char>>) -> Result<Self> {
        let height = symbols.len();
        let width = symbols.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(InvalidMapReason::Empty.into());
        }
        if symbols.iter().any(|row| row.len() != width) {
            return Err(InvalidMapReason::NotRectangular.into());
        }
        if height <= MIN_DIMENSION || width <= MIN_DIMENSION {
            return Err(InvalidMapReason::TooSmall.into());
        }
        Ok(RawGrid {
            height,
            width,
            symbols,
        })
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Self::new(rows.iter().map(|row| row.as_ref().chars().collect()).collect())
    }

    /// Decodes the text form: `"<height> <width>"` followed by `height` rows,
    /// tokens separated by whitespace.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let (Some(height), Some(width)) = (tokens.next(), tokens.next()) else {
            return Err(InvalidMapReason::Empty.into());
        };
        let (Ok(height), Ok(width)) = (height.parse::<usize>(), width.parse::<usize>()) else {
            return Err(InvalidMapReason::BadHeader.into());
        };
        if height <= MIN_DIMENSION || width <= MIN_DIMENSION {
            return Err(InvalidMapReason::TooSmall.into());
        }

        let rows: Vec<&str> = tokens.collect();
        if rows.len() != height || rows.iter().any(|row| row.chars().count() != width) {
            return Err(InvalidMapReason::NotRectangular.into());
        }
        Self::from_rows(&rows)
    }

    /// Generates a clustered random map with a start and a goal placed on it.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, alphabet: &SymbolAlphabet) -> Result<Self> {
        let mut height = rng.gen_range(RANDOM_HEIGHTS);
        let mut width = rng.gen_range(RANDOM_WIDTHS);
        if width > 2 * height {
            width = height + width / height;
        } else if height as f64 > 1.25 * width as f64 {
            height = width + height / width;
        }

        let mut symbols: Vec<Vec<char>> = Vec::with_capacity(height);
        for row in 0..height {
            let mut line = Vec::with_capacity(width);
            for col in 0..width {
                let mut draw: f64 = rng.gen();
                let left = col.checked_sub(1).map(|c| line[c]);
                draw += nudge(left, alphabet);
                if row > 0 {
                    draw += nudge(Some(symbols[row - 1][col]), alphabet);
                }
                line.push(if draw >= WALL_THRESHOLD {
                    alphabet.passable
                } else {
                    alphabet.impassable
                });
            }
            symbols.push(line);
        }

        let mut grid = RawGrid::new(symbols)?;
        let start = grid.random_open_cell(rng, alphabet)?;
        grid.symbols[start.row][start.col] = alphabet.start;
        let goal = grid.random_open_cell(rng, alphabet)?;
        grid.symbols[goal.row][goal.col] = alphabet.goal;
        Ok(grid)
    }

    fn random_open_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        alphabet: &SymbolAlphabet,
    ) -> Result<Position> {
        let attempts = 10 * self.height * self.width;
        for _ in 0..attempts {
            let pos = Position::new(rng.gen_range(0..self.height), rng.gen_range(0..self.width));
            if self.symbol(pos) == alphabet.passable && self.walkable_neighbors(pos, alphabet) > 0 {
                return Ok(pos);
            }
        }
        Err(InvalidMapReason::NoRoomForEndpoints.into())
    }

    fn walkable_neighbors(&self, pos: Position, alphabet: &SymbolAlphabet) -> usize {
        Direction::ALL
            .iter()
            .filter_map(|&dir| pos.step(dir, self.height, self.width))
            .filter(|&n| alphabet.is_walkable(self.symbol(n)))
            .count()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn symbol(&self, pos: Position) -> char {
        self.symbols[pos.row][pos.col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.symbols.iter().map(Vec::as_slice)
    }

    /// First cell holding `symbol`, scanning rows top to bottom.
    pub fn locate(&self, symbol: char) -> Option<Position> {
        self.symbols.iter().enumerate().find_map(|(row, line)| {
            line.iter()
                .position(|&s| s == symbol)
                .map(|col| Position::new(row, col))
        })
    }

    /// Copy with every marked-path symbol turned back to passable.
    pub fn clear_marks(&self, alphabet: &SymbolAlphabet) -> RawGrid {
        let symbols = self
            .symbols
            .iter()
            .map(|line| {
                line.iter()
                    .map(|&s| {
                        if s == alphabet.marked_path {
                            alphabet.passable
                        } else {
                            s
                        }
                    })
                    .collect()
            })
            .collect();
        RawGrid {
            height: self.height,
            width: self.width,
            symbols,
        }
    }

    /// Copy with stale marks cleared and the passable cells along `path` marked.
    /// Start and goal symbols are left as they are.
    pub fn with_path(&self, path: &Path, alphabet: &SymbolAlphabet) -> RawGrid {
        let mut marked = self.clear_marks(alphabet);
        for &pos in path.steps() {
            if pos.row < self.height && pos.col < self.width {
                let cell = &mut marked.symbols[pos.row][pos.col];
                if *cell == alphabet.passable {
                    *cell = alphabet.marked_path;
                }
            }
        }
        marked
    }
}

fn nudge(neighbor: Option<char>, alphabet: &SymbolAlphabet) -> f64 {
    match neighbor {
        Some(s) if s == alphabet.passable => PASSABLE_NUDGE,
        _ => -WALL_NUDGE,
    }
}

/// Same text form [`RawGrid::parse`] reads.
impl fmt::Display for RawGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.height, self.width)?;
        for line in &self.symbols {
            writeln!(f)?;
            for &s in line {
                write!(f, "{}", s)?;
            }
        }
        Ok(())
    }
}

/// Per-cell descriptor produced by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub passable: bool,
    pub is_start: bool,
    pub is_goal: bool,
    pub visited: bool,
}

/// A raw grid classified for exactly one search.
///
/// The `visited` flags are the traversal state of that search, so a fresh
/// grid has to be classified for every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedGrid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
}

impl ClassifiedGrid {
    /// Classifies every symbol. Extra start or goal symbols after the first
    /// (row-major) match are plain passable cells.
    pub fn classify(raw: &RawGrid, alphabet: &SymbolAlphabet) -> Result<Self> {
        let (Some(start), Some(goal)) = (raw.locate(alphabet.start), raw.locate(alphabet.goal))
        else {
            return Err(InvalidMapReason::MissingEndpoints.into());
        };

        let mut cells = Vec::with_capacity(raw.height * raw.width);
        for (row, line) in raw.symbols.iter().enumerate() {
            for (col, &symbol) in line.iter().enumerate() {
                let pos = Position::new(row, col);
                let passable = match alphabet.role(symbol) {
                    Role::Impassable => false,
                    Role::Start | Role::Goal | Role::Passable | Role::MarkedPath => true,
                };
                cells.push(Cell {
                    passable,
                    is_start: pos == start,
                    is_goal: pos == goal,
                    visited: false,
                });
            }
        }

        Ok(ClassifiedGrid {
            height: raw.height,
            width: raw.width,
            cells,
            start,
            goal,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    /// Panics if `pos` lies outside the grid.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    pub fn is_passable(&self, pos: Position) -> bool {
        self.contains(pos) && self.cell(pos).passable
    }

    /// In bounds, passable and not yet visited in this search.
    pub fn is_eligible(&self, pos: Position) -> bool {
        self.contains(pos) && {
            let cell = self.cell(pos);
            cell.passable && !cell.visited
        }
    }

    pub fn visit(&mut self, pos: Position) {
        let index = self.index(pos);
        self.cells[index].visited = true;
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction, self.height, self.width)
    }

    /// Passable cardinal neighbours, ignoring visitation.
    pub fn passable_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(pos, dir))
            .filter(move |&n| self.cell(n).passable)
    }
}
