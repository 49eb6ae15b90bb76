//! Table position.

use std::convert::TryFrom;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Table position. The declaration order is the player index, and play proceeds from each seat
/// to the next index, wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    South,
    East,
    North,
    West,
}
impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Seat::South => "South",
            Seat::East => "East",
            Seat::North => "North",
            Seat::West => "West",
        })
    }
}
impl TryFrom<usize> for Seat {
    type Error = ();

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Seat::all_seats().get(index).copied().ok_or(())
    }
}
impl TryFrom<char> for Seat {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'S' | 's' => Seat::South,
            'E' | 'e' => Seat::East,
            'N' | 'n' => Seat::North,
            'W' | 'w' => Seat::West,
            _ => return Err(()),
        })
    }
}
impl FromStr for Seat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "south" | "s" | "0" => Ok(Seat::South),
            "east" | "e" | "1" => Ok(Seat::East),
            "north" | "n" | "2" => Ok(Seat::North),
            "west" | "w" | "3" => Ok(Seat::West),
            _ => Err(format!("unknown seat {s:?}")),
        }
    }
}

impl Seat {
    /// All table positions, in turn order.
    pub fn all_seats() -> &'static [Seat; 4] {
        static SEATS: [Seat; 4] = [Seat::South, Seat::East, Seat::North, Seat::West];
        &SEATS
    }

    /// The player index, from 0 to 3.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next table position, in turn order.
    pub fn next(self) -> Seat {
        self.offset(1)
    }

    /// The table position `n` turns after this one.
    pub fn offset(self, n: usize) -> Seat {
        Seat::all_seats()[(self.index() + n) % 4]
    }

    /// All four table positions in turn order, starting from this one.
    pub fn turn_order(self) -> [Seat; 4] {
        [self, self.offset(1), self.offset(2), self.offset(3)]
    }
}

/// One value per table position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BySeat<T>([T; 4]);

impl<T> Index<Seat> for BySeat<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &T {
        &self.0[seat.index()]
    }
}
impl<T> IndexMut<Seat> for BySeat<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.0[seat.index()]
    }
}
impl<T> From<[T; 4]> for BySeat<T> {
    fn from(values: [T; 4]) -> Self {
        Self(values)
    }
}

impl<T> BySeat<T> {
    /// Builds a value for each seat.
    pub fn from_fn<F: FnMut(Seat) -> T>(mut f: F) -> Self {
        Self([
            f(Seat::South),
            f(Seat::East),
            f(Seat::North),
            f(Seat::West),
        ])
    }

    /// Iterates over `(seat, value)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> + '_ {
        Seat::all_seats().iter().copied().zip(self.0.iter())
    }

    /// Iterates over values in seat order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Maps each value, keeping the seat association.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> BySeat<U> {
        BySeat::from_fn(|seat| f(&self[seat]))
    }
}
