//! Boundaries to the outside world: where grids come from, where rendered
//! grids go, and where result summaries are reported.

use crate::config::{Role, SymbolAlphabet};
use crate::error::Result;
use crate::grid::RawGrid;
use rand::Rng;
use std::fs;
use std::path::PathBuf;

pub trait GridSource {
    fn load(&mut self) -> Result<RawGrid>;
}

pub trait Renderer {
    fn render(&mut self, grid: &RawGrid) -> Result<()>;
}

pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Grid in its text form, held in memory.
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        TextSource { text: text.into() }
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }
}

impl GridSource for TextSource {
    fn load(&mut self) -> Result<RawGrid> {
        RawGrid::parse(&self.text)
    }
}

/// Fresh random map on every load.
pub struct RandomSource<R> {
    rng: R,
    alphabet: SymbolAlphabet,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R, alphabet: SymbolAlphabet) -> Self {
        RandomSource { rng, alphabet }
    }
}

impl<R: Rng> GridSource for RandomSource<R> {
    fn load(&mut self) -> Result<RawGrid> {
        RawGrid::random(&mut self.rng, &self.alphabet)
    }
}

/// Prints the grid to stdout with row and column numbers.
pub struct ConsoleRenderer {
    alphabet: SymbolAlphabet,
}

impl ConsoleRenderer {
    pub fn new(alphabet: SymbolAlphabet) -> Self {
        ConsoleRenderer { alphabet }
    }

    fn glyph(&self, symbol: char) -> char {
        match self.alphabet.role(symbol) {
            Role::Start => 'S',
            Role::Goal => 'G',
            Role::Passable => '.',
            Role::Impassable => '#',
            Role::MarkedPath => 'o',
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, grid: &RawGrid) -> Result<()> {
        println!("Legend: S=Start, G=Goal, o=Path, #=Wall, .=Open");

        print!("   ");
        for col in 0..grid.width() {
            print!("{:2}", col % 10);
        }
        println!();

        for (row, line) in grid.rows().enumerate() {
            print!("{:2} ", row);
            for &symbol in line {
                print!("{} ", self.glyph(symbol));
            }
            println!();
        }
        println!();
        Ok(())
    }
}

/// Writes the grid in its text form, so it can be loaded again.
pub struct TextFileRenderer {
    path: PathBuf,
}

impl TextFileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextFileRenderer { path: path.into() }
    }
}

impl Renderer for TextFileRenderer {
    fn render(&mut self, grid: &RawGrid) -> Result<()> {
        fs::write(&self.path, format!("{}\n", grid))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Keeps every rendered grid in memory.
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    pub frames: Vec<RawGrid>,
}

impl Renderer for MemoryRenderer {
    fn render(&mut self, grid: &RawGrid) -> Result<()> {
        self.frames.push(grid.clone());
        Ok(())
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub messages: Vec<String>,
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
