use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_X: i32 = 0;
pub const MAX_X: i32 = 320;
pub const MIN_Y: i32 = 0;
pub const MAX_Y: i32 = 180;

/// One cell of the canvas grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The drawable surface. Pixel writes are clamped into
/// `[min_x, max_x] x [min_y, max_y]`, while full-canvas operations cover the
/// half-open `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: MIN_X,
            max_x: MAX_X,
            min_y: MIN_Y,
            max_y: MAX_Y,
        }
    }
}

impl Bounds {
    pub fn clamp_x(&self, x: i32) -> i32 {
        if x < self.min_x {
            self.min_x
        } else if x > self.max_x {
            self.max_x
        } else {
            x
        }
    }

    pub fn clamp_y(&self, y: i32) -> i32 {
        if y < self.min_y {
            self.min_y
        } else if y > self.max_y {
            self.max_y
        } else {
            y
        }
    }

    pub fn clamp(&self, coordinate: Coordinate) -> Coordinate {
        Coordinate::new(self.clamp_x(coordinate.x), self.clamp_y(coordinate.y))
    }

    /// Number of cells in the half-open canvas area.
    pub fn area(&self) -> usize {
        let width = (self.max_x - self.min_x).max(0) as usize;
        let height = (self.max_y - self.min_y).max(0) as usize;
        width * height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_below_minimum() {
        let bounds = Bounds::default();
        for v in [-1, -5, i32::MIN] {
            assert_eq!(bounds.clamp_x(v), MIN_X);
            assert_eq!(bounds.clamp_y(v), MIN_Y);
        }
    }

    #[test]
    fn clamps_above_maximum() {
        let bounds = Bounds::default();
        for v in [321, 1000, i32::MAX] {
            assert_eq!(bounds.clamp_x(v), MAX_X);
        }
        for v in [181, 200, 320, 321, i32::MAX] {
            assert_eq!(bounds.clamp_y(v), MAX_Y);
        }
    }

    #[test]
    fn keeps_values_in_range() {
        let bounds = Bounds::default();
        for x in MIN_X..=MAX_X {
            assert_eq!(bounds.clamp_x(x), x);
        }
        for y in MIN_Y..=MAX_Y {
            assert_eq!(bounds.clamp_y(y), y);
        }
    }

    #[test]
    fn clamps_each_axis_independently() {
        let bounds = Bounds::default();
        assert_eq!(
            bounds.clamp(Coordinate::new(350, 5)),
            Coordinate::new(MAX_X, 5)
        );
        assert_eq!(
            bounds.clamp(Coordinate::new(-3, 250)),
            Coordinate::new(MIN_X, MAX_Y)
        );
    }

    #[test]
    fn area_of_default_canvas() {
        assert_eq!(Bounds::default().area(), 320 * 180);
    }
}
