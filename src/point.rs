use crate::{Arrive, Blame};

/// Column letters used in vertex notation.  The letter `I` is skipped so nobody confuses it with
/// `J` or `1`.
const COLUMNS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Smallest and largest supported board sizes.
pub const MIN_SIZE: u8 = 2;
pub const MAX_SIZE: u8 = 25;

/// The `Point` struct is an intersection on the board.  Columns run left to right and rows run
/// bottom to top, both starting at 1, which is how players write moves: `D4`, `Q16`.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_new::new,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("{}{}", self.letter(), self.row)]
pub struct Point {
    column: u8,
    row: u8,
}

impl Point {
    /// The column letter of the point.
    pub fn letter(&self) -> char {
        COLUMNS
            .chars()
            .nth(self.column.saturating_sub(1) as usize)
            .unwrap_or('?')
    }

    /// Reads a vertex like `d4` or `Q16` for a board with `size` lines.
    ///
    /// Will [`Blame::UnknownVertex`] if the letter is unknown or the point is off the board.
    pub fn parse(vertex: &str, size: u8) -> Arrive<Self> {
        let vertex = vertex.trim();
        let mut chars = vertex.chars();
        let letter = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .ok_or_else(|| Blame::unknown_vertex(vertex))?;
        let column = COLUMNS
            .find(letter)
            .map(|idx| idx as u8 + 1)
            .ok_or_else(|| Blame::unknown_vertex(vertex))?;
        let row = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| Blame::unknown_vertex(vertex))?;
        let point = Self::new(column, row);
        if point.on_board(size) {
            Ok(point)
        } else {
            Err(Blame::unknown_vertex(vertex))
        }
    }

    pub fn on_board(&self, size: u8) -> bool {
        (1..=size).contains(&self.column) && (1..=size).contains(&self.row)
    }

    /// Every point on a board with `size` lines, row by row from the bottom.
    pub fn all(size: u8) -> impl Iterator<Item = Point> {
        (1..=size).flat_map(move |row| (1..=size).map(move |column| Point::new(column, row)))
    }
}

/// The colour of a stone.  Parses from `Black`/`White` as well as the `B`/`W` shorthand.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    serde::Deserialize,
    serde::Serialize,
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Stone {
    #[strum(to_string = "Black", serialize = "B")]
    #[serde(alias = "B", alias = "black")]
    Black,
    #[strum(to_string = "White", serialize = "W")]
    #[serde(alias = "W", alias = "white")]
    White,
}

impl Stone {
    pub fn opponent(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_skip_the_letter_i() {
        assert_eq!(Point::new(8, 1).to_string(), "H1");
        assert_eq!(Point::new(9, 1).to_string(), "J1");
        assert_eq!(Point::parse("j1", 19).unwrap(), Point::new(9, 1));
        assert!(Point::parse("I5", 19).is_err());
    }

    #[test]
    fn vertices_must_be_on_the_board() {
        assert_eq!(Point::parse("Q16", 19).unwrap(), Point::new(16, 16));
        assert!(Point::parse("Q16", 9).is_err());
        assert!(Point::parse("A0", 9).is_err());
        assert!(Point::parse("", 9).is_err());
        assert!(Point::parse("AA", 9).is_err());
    }

    #[test]
    fn stones_parse_short_and_long() {
        assert_eq!("B".parse::<Stone>().unwrap(), Stone::Black);
        assert_eq!("white".parse::<Stone>().unwrap(), Stone::White);
        assert_eq!(Stone::Black.opponent(), Stone::White);
    }

    #[test]
    fn all_points_cover_the_board() {
        assert_eq!(Point::all(9).count(), 81);
        assert!(Point::all(9).all(|p| p.on_board(9)));
    }
}
