//! Selectable scene items: icons and regions
//!
//! `Item` is a closed set of shapes. Only icons take part in nearest-item
//! selection, so distance lives on `Icon` alone and callers reach it through
//! `Item::as_nearby`.

use super::types::{Point, Rect};
use serde::Serialize;
use std::cmp::Ordering;

/// A point-like item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub location: Point,
}

impl Icon {
    pub const fn new(location: Point) -> Self {
        Self { location }
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.location == *p
    }

    /// Only a rect degenerated to exactly this icon's location fits inside it
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        rect.top_left == self.location && rect.bottom_right == self.location
    }

    /// Euclidean distance from the icon to `p`
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        (self.distance_squared(p) as f64).sqrt()
    }

    /// Exact squared distance, used as the grouping key for ties
    pub fn distance_squared(&self, p: &Point) -> u128 {
        self.location.distance_squared(p)
    }
}

/// An axis-aligned rectangular item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub footprint: Rect,
}

impl Region {
    pub const fn new(footprint: Rect) -> Self {
        Self { footprint }
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.footprint.contains_point(p)
    }

    pub fn contains_rect(&self, rect: &Rect) -> bool {
        self.footprint.contains_rect(rect)
    }
}

/// Shape of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Icon(Icon),
    Region(Region),
}

/// Kind tag, used by renderers and the RPC layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Icon,
    Region,
}

/// A named item in a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    #[serde(flatten)]
    shape: Shape,
}

impl Item {
    pub fn icon(name: impl Into<String>, location: Point) -> Self {
        Self { name: name.into(), shape: Shape::Icon(Icon::new(location)) }
    }

    pub fn region(name: impl Into<String>, footprint: Rect) -> Self {
        Self { name: name.into(), shape: Shape::Region(Region::new(footprint)) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        match self.shape {
            Shape::Icon(_) => ItemKind::Icon,
            Shape::Region(_) => ItemKind::Region,
        }
    }

    /// Footprint of the item as a rect (an icon is a one-point rect)
    pub fn footprint(&self) -> Rect {
        match &self.shape {
            Shape::Icon(icon) => Rect::from_point(icon.location),
            Shape::Region(region) => region.footprint,
        }
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        match &self.shape {
            Shape::Icon(icon) => icon.contains_point(p),
            Shape::Region(region) => region.contains_point(p),
        }
    }

    pub fn contains_rect(&self, rect: &Rect) -> bool {
        match &self.shape {
            Shape::Icon(icon) => icon.contains_rect(rect),
            Shape::Region(region) => region.contains_rect(rect),
        }
    }

    /// The icon behind this item if it can be picked by a blank-area click
    pub fn as_nearby(&self) -> Option<&Icon> {
        match &self.shape {
            Shape::Icon(icon) => Some(icon),
            Shape::Region(_) => None,
        }
    }

    pub fn supports_nearby_selection(&self) -> bool {
        self.as_nearby().is_some()
    }

    /// True if `other` hides this item completely
    pub fn is_covered_by(&self, other: &Item) -> bool {
        match &self.shape {
            Shape::Icon(icon) => other.contains_point(&icon.location),
            Shape::Region(region) => other.contains_rect(&region.footprint),
        }
    }

    /// Name order, the total order used for result presentation
    pub fn cmp_by_name(&self, other: &Item) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
        Rect::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_icon_predicates() {
        let icon = Item::icon("1", Point::new(2, 3));
        assert!(icon.contains_point(&Point::new(2, 3)));
        assert!(!icon.contains_point(&Point::new(3, 2)));
        assert!(icon.contains_rect(&Rect::from_point(Point::new(2, 3))));
        assert!(!icon.contains_rect(&rect(2, 3, 2, 4)));
        assert!(icon.supports_nearby_selection());
        assert_eq!(icon.kind(), ItemKind::Icon);
    }

    #[test]
    fn test_icon_distance() {
        let icon = Icon::new(Point::new(0, 0));
        assert!((icon.distance_to_point(&Point::new(3, 4)) - 5.0).abs() < 1e-12);
        assert_eq!(icon.distance_squared(&Point::new(1, 1)), 2);
    }

    #[test]
    fn test_region_has_no_nearby_access() {
        let region = Item::region("A", rect(0, 0, 5, 5));
        assert!(region.as_nearby().is_none());
        assert!(!region.supports_nearby_selection());
        assert_eq!(region.kind(), ItemKind::Region);
    }

    #[test]
    fn test_icon_covered_by_region() {
        let icon = Item::icon("1", Point::new(1, 1));
        let region = Item::region("A", rect(0, 0, 1, 1));
        assert!(icon.is_covered_by(&region));
        assert!(!region.is_covered_by(&icon));
    }

    #[test]
    fn test_icon_covered_by_icon_at_same_spot() {
        let a = Item::icon("1", Point::new(4, 4));
        let b = Item::icon("2", Point::new(4, 4));
        assert!(a.is_covered_by(&b));
        assert!(b.is_covered_by(&a));
    }

    #[test]
    fn test_region_covered_by_region() {
        let inner = Item::region("A", rect(1, 1, 3, 3));
        let outer = Item::region("B", rect(0, 0, 3, 3));
        let partial = Item::region("C", rect(2, 2, 6, 6));
        assert!(inner.is_covered_by(&outer));
        assert!(!outer.is_covered_by(&inner));
        assert!(!inner.is_covered_by(&partial));
    }

    #[test]
    fn test_point_region_covered_by_icon() {
        let dot = Item::region("A", rect(7, 7, 7, 7));
        let icon = Item::icon("1", Point::new(7, 7));
        assert!(dot.is_covered_by(&icon));
    }

    #[test]
    fn test_name_order_is_string_order() {
        let ten = Item::icon("10", Point::new(0, 0));
        let two = Item::icon("2", Point::new(0, 0));
        assert_eq!(ten.cmp_by_name(&two), Ordering::Less);
    }
}
