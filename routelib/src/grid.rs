//! The routing map: an immutable grid of cells with its start states, goals and fuel stations.
use crate::state::{Fuel, State};
use crate::types::*;
use crate::utils::{offset_within, trim_blank_lines};
use crate::SearchFailure;

use ndarray::Array2;
use std::str::FromStr;


/// A single cell of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable cell: `X`, `|` or `-`.
    Wall(char),
    /// Start without a fuel limit: `S`.
    UnlimitedStart,
    /// Start with the given amount of fuel: a decimal digit.
    FuelStart(FuelLevel),
    /// `G`
    Goal,
    /// `F`
    FuelStation,
    /// Space.
    Open,
    /// Any other symbol, e.g. the corners of a framed map. Passable.
    Other(char),
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Cell {
        match symbol {
            'X' | '|' | '-' => Cell::Wall(symbol),
            'S' => Cell::UnlimitedStart,
            'G' => Cell::Goal,
            'F' => Cell::FuelStation,
            ' ' => Cell::Open,
            // Single digit, fits in FuelLevel.
            d if d.is_ascii_digit() => Cell::FuelStart(d as FuelLevel - b'0'),
            other => Cell::Other(other),
        }
    }

    /// The character this cell was read from.
    pub fn symbol(&self) -> char {
        match *self {
            Cell::Wall(c) | Cell::Other(c) => c,
            Cell::UnlimitedStart => 'S',
            Cell::FuelStart(f) => (b'0' + f) as char,
            Cell::Goal => 'G',
            Cell::FuelStation => 'F',
            Cell::Open => ' ',
        }
    }

    #[inline]
    pub fn is_passable(&self) -> bool {
        !matches!(self, Cell::Wall(_))
    }

    /// Start state for this cell at the given position, if this is a start cell.
    fn start_state(&self, row: Index, col: Index) -> Option<State> {
        match *self {
            Cell::UnlimitedStart => Some(State::new(row, col, Fuel::Unlimited)),
            Cell::FuelStart(f) => Some(State::new(row, col, Fuel::Limited(f))),
            _ => None,
        }
    }
}

/// Contains the map and the information derived from it.
/// Never modified after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// Cells of the map, indexed by `(row, column)`.
    cells: Array2<Cell>,
    /// Start states in row-major order.
    starts: Vec<State>,
    /// Goal positions in row-major order.
    goals: Vec<(Index, Index)>,
    /// Fuel station positions in row-major order.
    stations: Vec<(Index, Index)>,
}

impl Grid {
    /// Parse a map given as text, one line per row.
    ///
    /// Blank lines at the beginning and the end are ignored.
    /// Fails with [`SearchFailure::MalformedMap`] if the rows have different lengths or the map
    /// does not contain at least one start and one goal.
    pub fn parse(text: &str) -> Result<Grid, SearchFailure> {
        let lines = trim_blank_lines(text);
        let rows: Vec<Vec<char>> = lines.iter().map(|line| line.chars().collect()).collect();
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SearchFailure::MalformedMap(format!(
                    "Row {i} has {} cells but row 0 has {width}",
                    row.len()
                )));
            }
        }

        let symbols: Vec<Cell> = rows
            .into_iter()
            .flatten()
            .map(Cell::from_symbol)
            .collect();
        let cells = Array2::from_shape_vec((height, width), symbols)
            .map_err(|e| SearchFailure::MalformedMap(e.to_string()))?;

        Grid::from_cells(cells)
    }

    /// Construct a grid from an array of cells, deriving starts, goals and stations.
    pub fn from_cells(cells: Array2<Cell>) -> Result<Grid, SearchFailure> {
        let mut starts = Vec::new();
        let mut goals = Vec::new();
        let mut stations = Vec::new();

        for ((row, col), cell) in cells.indexed_iter() {
            if let Some(state) = cell.start_state(row, col) {
                starts.push(state);
            }
            match cell {
                Cell::Goal => goals.push((row, col)),
                Cell::FuelStation => stations.push((row, col)),
                _ => {}
            }
        }

        if starts.is_empty() {
            return Err(SearchFailure::MalformedMap(String::from(
                "Map has no start (S or a digit)",
            )));
        }
        if goals.is_empty() {
            return Err(SearchFailure::MalformedMap(String::from(
                "Map has no goal (G)",
            )));
        }

        log::debug!(
            "Read {}x{} map with {} starts, {} goals and {} fuel stations",
            cells.nrows(),
            cells.ncols(),
            starts.len(),
            goals.len(),
            stations.len()
        );

        Ok(Grid {
            cells,
            starts,
            goals,
            stations,
        })
    }

    /// Number of rows and columns.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.cells.nrows(), self.cells.ncols())
    }

    /// Cell at the given position, `None` if it's out of bounds.
    #[inline]
    pub fn cell(&self, row: Index, col: Index) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    /// Out-of-bounds positions are impassable.
    #[inline]
    pub fn is_passable(&self, row: Index, col: Index) -> bool {
        self.cell(row, col).map_or(false, |c| c.is_passable())
    }

    #[inline]
    pub fn is_fuel_station(&self, row: Index, col: Index) -> bool {
        self.cell(row, col) == Some(Cell::FuelStation)
    }

    /// Position reached by moving `delta` from `position`, if it is in bounds and passable.
    pub fn neighbor(
        &self,
        position: (Index, Index),
        delta: (isize, isize),
    ) -> Option<(Index, Index)> {
        offset_within(position, delta, self.shape()).filter(|&(r, c)| self.is_passable(r, c))
    }

    pub fn starting_states(&self) -> &[State] {
        &self.starts
    }

    pub fn goals(&self) -> &[(Index, Index)] {
        &self.goals
    }

    pub fn fuel_stations(&self) -> &[(Index, Index)] {
        &self.stations
    }

    /// True if the state is located on a goal cell, regardless of fuel.
    pub fn is_goal(&self, state: &State) -> bool {
        self.goals.iter().any(|&goal| goal == state.position())
    }

    /// Rows of the map as symbols.
    pub fn symbol_rows(&self) -> Vec<Vec<char>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = SearchFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}
