use crate::{Arrive, Blame, Point, Stone};
use std::collections::HashMap;
use std::{fs, io, path};

/// A single move as it appears in a game record: who played, and where.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_new::new,
    derive_getters::Getters,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "PascalCase")]
#[display("{stone} {vertex}")]
pub struct Move {
    stone: Stone,
    vertex: String,
}

/// The `Record` struct is a wrapper around the moves of a game, in the order they were played.
/// Records are stored as csv with a `Stone,Vertex` header:
///
/// ```text
/// Stone,Vertex
/// B,Q16
/// W,D4
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::From,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Record(Vec<Move>);

impl Record {
    /// Reads a record from the csv file at `path`.
    ///
    /// Will [`Blame::Io`] if the file cannot be opened.  Rows that fail to deserialize are
    /// skipped with a warning, so a half-broken record still loads what it can.
    #[tracing::instrument]
    pub fn from_path(path: &path::Path) -> Arrive<Self> {
        let file = fs::File::open(path)?;
        let record = Self::from_reader(file);
        tracing::info!("Read {} moves from {}.", record.len(), path.display());
        Ok(record)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Self {
        let mut moves = Vec::new();
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        for result in rdr.deserialize() {
            match result {
                Ok(mv) => moves.push(mv),
                Err(e) => {
                    tracing::warn!("Problem reading move: {}", e.to_string());
                }
            }
        }
        Self(moves)
    }
}

/// The `Position` struct holds the stones currently on the board.  It knows nothing about
/// captures or ko: it accepts any stone on any empty point, and leaves the rules to whoever plays.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Position {
    size: u8,
    #[getter(skip)]
    stones: HashMap<Point, Stone>,
}

impl Position {
    pub fn new(size: u8) -> Self {
        Self {
            size,
            stones: HashMap::new(),
        }
    }

    /// Places `stone` at `point`.
    ///
    /// Will [`Blame::UnknownVertex`] if the point is off the board and [`Blame::Occupied`] if a
    /// stone is already there.
    pub fn place(&mut self, point: Point, stone: Stone) -> Arrive<()> {
        if !point.on_board(self.size) {
            return Err(Blame::unknown_vertex(&point.to_string()));
        }
        if self.stones.contains_key(&point) {
            return Err(Blame::Occupied {
                vertex: point.to_string(),
            });
        }
        self.stones.insert(point, stone);
        Ok(())
    }

    pub fn stone_at(&self, point: &Point) -> Option<Stone> {
        self.stones.get(point).copied()
    }

    pub fn is_empty_at(&self, point: &Point) -> bool {
        !self.stones.contains_key(point)
    }

    pub fn empty_points(&self) -> Vec<Point> {
        Point::all(self.size)
            .filter(|p| self.is_empty_at(p))
            .collect()
    }

    pub fn clear(&mut self) {
        self.stones.clear();
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME: &str = "Stone,Vertex\nB,Q16\nW, D4\nGreen,C3\nblack,Q4\n";

    #[test]
    fn records_skip_bad_rows() {
        let record = Record::from_reader(GAME.as_bytes());
        assert_eq!(record.len(), 3);
        assert_eq!(record[0], Move::new(Stone::Black, "Q16".to_string()));
        assert_eq!(record[1].vertex(), "D4");
        assert_eq!(*record[2].stone(), Stone::Black);
    }

    #[test]
    fn missing_record_is_io_blame() {
        let result = Record::from_path(path::Path::new("no/such/record.csv"));
        assert!(matches!(result, Err(Blame::Io(_))));
    }

    #[test]
    fn stones_need_empty_points() {
        let mut position = Position::new(9);
        let point = Point::new(3, 3);
        position.place(point, Stone::Black).unwrap();
        assert_eq!(position.stone_at(&point), Some(Stone::Black));
        assert!(matches!(
            position.place(point, Stone::White),
            Err(Blame::Occupied { .. })
        ));
        assert!(position.place(Point::new(10, 1), Stone::White).is_err());
        assert_eq!(position.empty_points().len(), 80);
        position.clear();
        assert!(position.is_empty());
    }
}
