//! Seat Map
//!
//! The hall has a fixed layout: 11 rows, 7 seats per row, except the last
//! row which only has 3. Seat status is derived on demand from two lists
//! and never stored.

use serde::{Deserialize, Serialize};

/// Server-side seat identifier.
///
/// The booking service may hand out numeric or string keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeatId {
    Number(i64),
    Text(String),
}

/// A bookable seat, identified in the grid by `(row, number)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SeatId>,
    pub row: u32,
    pub number: u32,
}

impl Seat {
    pub fn new(row: u32, number: u32) -> Self {
        Self {
            id: None,
            row,
            number,
        }
    }

    pub fn with_id(mut self, id: SeatId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether this seat sits at the given grid position
    pub fn is_at(&self, row: u32, number: u32) -> bool {
        self.row == row && self.number == number
    }

    /// Grid label, e.g. `"3-5"`
    pub fn label(&self) -> String {
        format!("{}-{}", self.row, self.number)
    }
}

/// Display status of a seat in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    /// Booked by this session's last successful booking
    NewlyBooked,
    /// Booked by anyone, as reported by the server
    PreviouslyBooked,
    Available,
}

impl SeatStatus {
    /// Legend text
    pub fn label(&self) -> &'static str {
        match self {
            SeatStatus::NewlyBooked => "Newly Booked",
            SeatStatus::PreviouslyBooked => "Previously Booked",
            SeatStatus::Available => "Available",
        }
    }

    pub fn is_booked(&self) -> bool {
        !matches!(self, SeatStatus::Available)
    }
}

/// Resolve the status of one grid position.
///
/// A seat in the session list wins over the cumulative list, so a seat that
/// was just booked is shown distinctly even after the server reports it.
pub fn seat_status(row: u32, number: u32, newly_booked: &[Seat], all_booked: &[Seat]) -> SeatStatus {
    if newly_booked.iter().any(|s| s.is_at(row, number)) {
        SeatStatus::NewlyBooked
    } else if all_booked.iter().any(|s| s.is_at(row, number)) {
        SeatStatus::PreviouslyBooked
    } else {
        SeatStatus::Available
    }
}

/// The fixed hall layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatMap {
    rows: u32,
    seats_per_row: u32,
    last_row_seats: u32,
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::HALL
    }
}

impl SeatMap {
    /// 11 rows of 7, last row truncated to 3
    pub const HALL: SeatMap = SeatMap {
        rows: 11,
        seats_per_row: 7,
        last_row_seats: 3,
    };

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of seats in a 1-based row; 0 outside the hall
    pub fn seats_in_row(&self, row: u32) -> u32 {
        if row == 0 || row > self.rows {
            0
        } else if row == self.rows {
            self.last_row_seats
        } else {
            self.seats_per_row
        }
    }

    pub fn capacity(&self) -> u32 {
        (1..=self.rows).map(|row| self.seats_in_row(row)).sum()
    }

    pub fn contains(&self, row: u32, number: u32) -> bool {
        number >= 1 && number <= self.seats_in_row(row)
    }

    /// Build the grid for one render.
    ///
    /// Always yields every row of the hall in order, each with its seats and
    /// their status.
    pub fn grid(&self, newly_booked: &[Seat], all_booked: &[Seat]) -> Vec<SeatRow> {
        (1..=self.rows)
            .map(|row| SeatRow {
                row,
                seats: (1..=self.seats_in_row(row))
                    .map(|number| {
                        let status = seat_status(row, number, newly_booked, all_booked);
                        (Seat::new(row, number), status)
                    })
                    .collect(),
            })
            .collect()
    }
}

/// One rendered row of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRow {
    pub row: u32,
    pub seats: Vec<(Seat, SeatStatus)>,
}

impl SeatRow {
    /// Row label, e.g. `"R4"`
    pub fn label(&self) -> String {
        format!("R{}", self.row)
    }
}
