//! Core geometry types for scene items
//!
//! Integer points and inclusive axis-aligned rectangles.

use serde::{Deserialize, Serialize};

/// A 2D integer point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, exact for the whole `i32` range
    pub fn distance_squared(&self, other: &Point) -> u128 {
        let dx = u128::from((i64::from(self.x) - i64::from(other.x)).unsigned_abs());
        let dy = u128::from((i64::from(self.y) - i64::from(other.y)).unsigned_abs());
        dx * dx + dy * dy
    }

    pub fn as_f64(&self) -> [f64; 2] {
        [f64::from(self.x), f64::from(self.y)]
    }
}

/// Axis-aligned rectangle with inclusive bounds.
///
/// `top_left` is expected to be component-wise <= `bottom_right`. A rect with
/// reversed corners is kept as given and contains no point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }

    /// Rect covering exactly one point
    pub const fn from_point(p: Point) -> Self {
        Self { top_left: p, bottom_right: p }
    }

    pub fn is_well_formed(&self) -> bool {
        self.top_left.x <= self.bottom_right.x && self.top_left.y <= self.bottom_right.y
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        (p.x >= self.top_left.x && p.x <= self.bottom_right.x)
            && (p.y >= self.top_left.y && p.y <= self.bottom_right.y)
    }

    /// True when `other` lies fully inside this rect (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        (other.top_left.x >= self.top_left.x && other.bottom_right.x <= self.bottom_right.x)
            && (other.top_left.y >= self.top_left.y && other.bottom_right.y <= self.bottom_right.y)
    }

    /// Bounds as [min_x, min_y, max_x, max_y]
    pub fn bounds(&self) -> [i32; 4] {
        [self.top_left.x, self.top_left.y, self.bottom_right.x, self.bottom_right.y]
    }
}
