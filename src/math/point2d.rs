use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }

    /// Linear interpolation on the segment `[lhs_pt, rhs_pt]` at `x`.
    pub fn lerp(lhs_pt: &Point2D, rhs_pt: &Point2D, x: f64) -> f64 {
        lhs_pt.y + Point2D::slope(lhs_pt, rhs_pt) * (x - lhs_pt.x)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Point2D {
        Point2D::new(x, y)
    }
}
