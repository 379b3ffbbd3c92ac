use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A position on a grid, or the vector between two positions.
///
/// The origin is the top left corner of a grid; `y` grows downward, matching
/// the order in which rows appear in a text map and on the console.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({x},{y})")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Manhattan (L1) length of this vector.
    #[inline]
    pub fn manhattan(self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    /// Chebyshev (L∞) length of this vector.
    ///
    /// Two distinct points are 8-adjacent exactly when the chebyshev length
    /// of their difference is 1.
    #[inline]
    pub fn chebyshev(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Euclidean (L2) length of this vector.
    #[inline]
    pub fn magnitude(self) -> f64 {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        x.hypot(y)
    }

    /// Euclidean distance to `other`.
    ///
    /// Computed in floating point, so it is defined for any pair of points.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    /// `self + (dx, dy)`, or `None` if either coordinate overflows.
    #[inline]
    pub fn checked_add(self, (dx, dy): (i32, i32)) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Point {
            x: x as i32,
            y: y as i32,
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl AddAssign<(i32, i32)> for Point {
    fn add_assign(&mut self, (dx, dy): (i32, i32)) {
        self.x += dx;
        self.y += dy;
    }
}

impl Add for Point {
    type Output = Point;

    fn add(mut self, rhs: Point) -> Point {
        self += rhs;
        self
    }
}

impl Add<(i32, i32)> for Point {
    type Output = Point;

    fn add(mut self, rhs: (i32, i32)) -> Point {
        self += rhs;
        self
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(mut self, rhs: Point) -> Point {
        self -= rhs;
        self
    }
}
