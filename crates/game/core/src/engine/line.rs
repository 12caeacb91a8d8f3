use crate::state::Position;

/// Integer Bresenham line from `from` to `to`, both endpoints included.
///
/// Lines are classified as steep when the row delta exceeds the column delta;
/// steep lines advance one row per cell, shallow ones one column per cell. The
/// walk always starts at `from`, so the same pair of points yields the same
/// cells in the same order at every call site.
#[derive(Clone, Debug)]
pub struct Line {
    major: i32,
    minor: i32,
    major_step: i32,
    minor_step: i32,
    major_delta: i32,
    minor_delta: i32,
    error: i32,
    remaining: u32,
    steep: bool,
}

impl Line {
    pub fn new(from: Position, to: Position) -> Self {
        let steep = (to.y - from.y).abs() > (to.x - from.x).abs();
        let (major, minor, major_end, minor_end) = if steep {
            (from.y, from.x, to.y, to.x)
        } else {
            (from.x, from.y, to.x, to.y)
        };
        let major_delta = (major_end - major).abs();

        Self {
            major,
            minor,
            major_step: (major_end - major).signum(),
            minor_step: (minor_end - minor).signum(),
            major_delta,
            minor_delta: (minor_end - minor).abs(),
            error: 0,
            remaining: major_delta as u32 + 1,
            steep,
        }
    }

    fn current(&self) -> Position {
        if self.steep {
            Position::new(self.minor, self.major)
        } else {
            Position::new(self.major, self.minor)
        }
    }
}

impl Iterator for Line {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let position = self.current();

        self.error += self.minor_delta;
        if 2 * self.error >= self.major_delta {
            self.minor += self.minor_step;
            self.error -= self.major_delta;
        }
        self.major += self.major_step;

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Line {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
        Line::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn single_point_line() {
        assert_eq!(cells((2, 2), (2, 2)), vec![(2, 2)]);
    }

    #[test]
    fn horizontal_line_runs_in_either_direction() {
        assert_eq!(cells((0, 2), (3, 2)), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
        assert_eq!(cells((3, 2), (0, 2)), vec![(3, 2), (2, 2), (1, 2), (0, 2)]);
    }

    #[test]
    fn steep_lines_step_once_per_row() {
        let line = cells((0, 0), (1, 4));
        assert_eq!(line.len(), 5);
        assert_eq!(line.first(), Some(&(0, 0)));
        assert_eq!(line.last(), Some(&(1, 4)));
        for pair in line.windows(2) {
            assert_eq!(pair[1].1 - pair[0].1, 1);
        }
    }

    #[test]
    fn diagonal_line() {
        assert_eq!(cells((0, 0), (-2, 2)), vec![(0, 0), (-1, 1), (-2, 2)]);
    }

    #[test]
    fn shallow_line_reaches_its_endpoint() {
        let line = cells((0, 0), (5, -2));
        assert_eq!(line.len(), 6);
        assert_eq!(line.last(), Some(&(5, -2)));
    }
}
