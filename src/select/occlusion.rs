//! Occlusion check
//!
//! Painter's-algorithm visibility: an item is hidden when something drawn
//! later covers it completely. Items below never affect visibility.

use crate::scene::Scene;

/// True unless an item stacked above `index` covers it.
///
/// The top-most item is always visible. An index past the end of the scene
/// has nothing to show and reports false.
pub fn is_visible(scene: &Scene, index: usize) -> bool {
    let Some(item) = scene.get(index) else {
        return false;
    };
    !scene.items_above(index).any(|above| item.is_covered_by(above))
}

/// Stacking index of the first item above `index` that covers it, if any
pub fn covered_by(scene: &Scene, index: usize) -> Option<usize> {
    let item = scene.get(index)?;
    scene
        .items_above(index)
        .position(|above| item.is_covered_by(above))
        .map(|offset| index + 1 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Item, Point, Rect};

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
        Rect::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_icon_hidden_by_region_above() {
        let scene = Scene::from_items(vec![
            Item::icon("1", Point::new(0, 0)),
            Item::region("A", rect(0, 0, 1, 1)),
        ])
        .unwrap();
        assert!(!is_visible(&scene, 0));
        assert_eq!(covered_by(&scene, 0), Some(1));
        assert!(is_visible(&scene, 1));
    }

    #[test]
    fn test_region_below_does_not_hide() {
        let scene = Scene::from_items(vec![
            Item::region("A", rect(0, 0, 1, 1)),
            Item::icon("1", Point::new(0, 0)),
        ])
        .unwrap();
        assert!(is_visible(&scene, 1));
        assert!(is_visible(&scene, 0));
        assert_eq!(covered_by(&scene, 1), None);
    }

    #[test]
    fn test_partial_overlap_keeps_region_visible() {
        let scene = Scene::from_items(vec![
            Item::region("A", rect(0, 0, 4, 4)),
            Item::region("B", rect(2, 2, 8, 8)),
        ])
        .unwrap();
        assert!(is_visible(&scene, 0));
    }

    #[test]
    fn test_region_hidden_by_larger_region() {
        let scene = Scene::from_items(vec![
            Item::region("A", rect(1, 1, 2, 2)),
            Item::icon("1", Point::new(9, 9)),
            Item::region("B", rect(0, 0, 3, 3)),
        ])
        .unwrap();
        assert!(!is_visible(&scene, 0));
        assert_eq!(covered_by(&scene, 0), Some(2));
    }

    #[test]
    fn test_out_of_range_index() {
        let scene = Scene::new();
        assert!(!is_visible(&scene, 0));
        assert_eq!(covered_by(&scene, 0), None);
    }
}
