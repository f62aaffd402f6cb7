use std::fmt::Write as _;

use crate::state::StateError;

use super::{EntityKind, Occupant, Position};

/// Maximum distance between the sight line and a cell's vertical center for
/// that cell to block. Replay logs were recorded against this exact value.
pub const LINE_OF_SIGHT_TOLERANCE: f64 = 0.4999;

/// Rectangular grid where each cell holds at most one occupant.
///
/// Cells are indexed `[0, width) x [0, height)`. The board only stores
/// handles; the entities themselves live in the controller's rosters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<Option<Occupant>>,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.x as usize * self.height as usize + position.y as usize)
    }

    fn checked_index(&self, position: Position) -> Result<usize, StateError> {
        self.index(position).ok_or(StateError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        })
    }

    fn get(&self, position: Position) -> Option<Occupant> {
        self.index(position).and_then(|index| self.cells[index])
    }

    /// Returns the occupant of a cell. Out-of-bounds positions are an error.
    pub fn occupant(&self, position: Position) -> Result<Option<Occupant>, StateError> {
        let index = self.checked_index(position)?;
        Ok(self.cells[index])
    }

    pub fn is_space_occupied(&self, position: Position) -> Result<bool, StateError> {
        Ok(self.occupant(position)?.is_some())
    }

    /// Places `occupant` at `position`, refusing non-empty cells.
    pub fn add_entity(&mut self, occupant: Occupant, position: Position) -> Result<(), StateError> {
        let index = self.checked_index(position)?;
        if let Some(current) = self.cells[index] {
            return Err(StateError::OccupiedCell {
                position,
                occupant: current,
            });
        }

        self.cells[index] = Some(occupant);
        Ok(())
    }

    /// Clears the cell at `position`, which must currently hold `occupant`.
    pub fn remove_entity(
        &mut self,
        occupant: Occupant,
        position: Position,
    ) -> Result<(), StateError> {
        let index = self.checked_index(position)?;
        let found = self.cells[index];
        if found != Some(occupant) {
            return Err(StateError::Desync {
                position,
                expected: occupant,
                found,
            });
        }

        self.cells[index] = None;
        Ok(())
    }

    /// Iterates over occupied cells in column-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, Occupant)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            let x = (index / self.height as usize) as i32;
            let y = (index % self.height as usize) as i32;
            cell.map(|occupant| (Position::new(x, y), occupant))
        })
    }

    /// Checks whether `initiator` can see `target`.
    ///
    /// The sight line runs between the vertical centers of the two cells. The
    /// endpoints never block, and neither does any occupant whose kind is in
    /// `ignored`.
    pub fn does_line_of_sight_exist(
        &self,
        initiator: Position,
        target: Position,
        ignored: &[EntityKind],
    ) -> bool {
        let blocks = |position: Position| {
            self.get(position)
                .is_some_and(|occupant| !ignored.contains(&occupant.kind()))
        };

        // Vertical lines have no slope, walk the column instead
        if initiator.x == target.x {
            let low = initiator.y.min(target.y);
            let high = initiator.y.max(target.y);
            for y in (low + 1)..high {
                let cell = Position::new(target.x, y);
                if blocks(cell) {
                    tracing::trace!(%cell, "vertical line of sight blocked");
                    return false;
                }
            }
            return true;
        }

        let slope = f64::from(target.y - initiator.y) / f64::from(target.x - initiator.x);
        let intercept = (f64::from(initiator.y) + 0.5) - slope * f64::from(initiator.x);
        tracing::trace!(slope, intercept, "line of sight equation");

        // The line is infinite, so only cells inside the bounding rectangle may block.
        let (min_x, max_x) = (initiator.x.min(target.x), initiator.x.max(target.x));
        let (min_y, max_y) = (initiator.y.min(target.y), initiator.y.max(target.y));
        for x in min_x..=max_x {
            for y in min_y..=max_y {
                let cell = Position::new(x, y);
                if cell == initiator || cell == target || !blocks(cell) {
                    continue;
                }

                let line_y = slope * f64::from(x) + intercept;
                tracing::trace!(%cell, line_y, "checking intercept");
                if (line_y - (f64::from(y) + 0.5)).abs() < LINE_OF_SIGHT_TOLERANCE {
                    tracing::trace!(%cell, "line of sight blocked");
                    return false;
                }
            }
        }

        true
    }

    /// Renders the grid using a two-character tile per cell.
    pub fn render<F>(&self, mut tile: F) -> String
    where
        F: FnMut(Occupant) -> String,
    {
        let separator = "--+".repeat(self.width as usize);
        let separator = separator.strip_suffix('+').unwrap_or(&separator);

        let mut out = String::new();
        for y in 0..self.height as i32 {
            if y > 0 {
                let _ = writeln!(out, "{separator}");
            }

            let row: Vec<String> = (0..self.width as i32)
                .map(|x| {
                    self.get(Position::new(x, y))
                        .map_or_else(|| "  ".to_owned(), &mut tile)
                })
                .collect();
            let _ = writeln!(out, "{}", row.join("|"));
        }

        out
    }
}
