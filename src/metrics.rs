use crate::Point;

/// Share of the shorter view side left empty around the outermost lines, in spacings.  Room for
/// coordinate labels and the edge of the stones.
const MARGIN: f64 = 1.0;

/// Cached drawing geometry.  Everything here derives from the view size and the board size, so
/// the board recomputes it whenever either one changes and reads it everywhere else.
#[derive(Debug, Default, Copy, Clone, PartialEq, derive_getters::Getters)]
pub struct Metrics {
    width: f64,
    height: f64,
    size: u8,
    /// Distance between two adjacent lines.
    spacing: f64,
    /// View position of the top-left intersection.
    origin: (f64, f64),
}

impl Metrics {
    /// Computes the geometry of a board with `size` lines in a view of `width` by `height`.  The
    /// board is a square centred on the shorter side.
    pub fn new(width: f64, height: f64, size: u8) -> Self {
        let side = width.min(height).max(0.0);
        let cells = (size.max(1) - 1) as f64 + 2.0 * MARGIN;
        let spacing = side / cells;
        let span = spacing * (size.max(1) - 1) as f64;
        let origin = ((width - span) / 2.0, (height - span) / 2.0);
        Self {
            width,
            height,
            size,
            spacing,
            origin,
        }
    }

    /// View position of `point`.  Row 1 is at the bottom.
    pub fn coordinates(&self, point: &Point) -> (f64, f64) {
        let x = self.origin.0 + point.column().saturating_sub(1) as f64 * self.spacing;
        let y = self.origin.1 + self.size.saturating_sub(*point.row()) as f64 * self.spacing;
        (x, y)
    }

    /// The intersection nearest to the view position (`x`, `y`), if it lies within half a
    /// spacing of the board.
    pub fn point_near(&self, x: f64, y: f64) -> Option<Point> {
        if self.spacing <= 0.0 {
            return None;
        }
        let column = ((x - self.origin.0) / self.spacing).round();
        let line = ((y - self.origin.1) / self.spacing).round();
        let last = self.size.saturating_sub(1) as f64;
        if !(0.0..=last).contains(&column) || !(0.0..=last).contains(&line) {
            return None;
        }
        let point = Point::new(column as u8 + 1, self.size - line as u8);
        Some(point)
    }

    /// Like [`Self::point_near`], but looks one spacing above the pointer so a finger or cursor
    /// does not hide the stone under it.  Positions beyond the edge snap to the nearest edge
    /// point, as long as they are within a spacing of the board.
    pub fn cross_hair_point_near(&self, x: f64, y: f64) -> Option<Point> {
        if self.spacing <= 0.0 {
            return None;
        }
        let y = y - self.spacing;
        let last = self.size.saturating_sub(1) as f64;
        let column = ((x - self.origin.0) / self.spacing).round();
        let line = ((y - self.origin.1) / self.spacing).round();
        if !(-1.0..=last + 1.0).contains(&column) || !(-1.0..=last + 1.0).contains(&line) {
            return None;
        }
        let column = column.clamp(0.0, last);
        let line = line.clamp(0.0, last);
        Some(Point::new(column as u8 + 1, self.size - line as u8))
    }
}
