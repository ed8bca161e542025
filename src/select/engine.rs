//! Two-phase click selection
//!
//! A click that lands on an item selects the highest-stacked item under it.
//! A click on blank area selects every visible icon sharing the minimum
//! distance to the click. Results are ordered by name.

use crate::scene::{Item, Point, Scene};
use crate::select::occlusion::is_visible;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Which rule produced a selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum SelectionPhase {
    /// The click hit an item's footprint
    Direct,
    /// Blank-area click; `distance` is shared by every selected item
    Nearest { distance: f64 },
    /// Blank-area click with no visible icon anywhere
    Empty,
}

/// Items chosen by one click, ordered by name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection<'a> {
    pub click: Point,
    pub items: Vec<&'a Item>,
    #[serde(flatten)]
    pub phase: SelectionPhase,
}

impl<'a> Selection<'a> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.items.iter().map(|item| item.name()).collect()
    }
}

/// Highest-stacked item whose footprint contains `click`
pub fn direct_hit<'a>(scene: &'a Scene, click: &Point) -> Option<(usize, &'a Item)> {
    scene
        .candidates_at_point(click)
        .into_iter()
        .filter_map(|index| scene.get(index).map(|item| (index, item)))
        .filter(|(_, item)| item.contains_point(click))
        .max_by_key(|(index, _)| *index)
}

/// Visible nearby-selectable items at minimum distance from `click`.
///
/// Returns the items in stacking order together with the shared distance, or
/// `None` when no candidate exists.
pub fn nearest_visible<'a>(scene: &'a Scene, click: &Point) -> Option<(Vec<&'a Item>, f64)> {
    let mut best: Option<u128> = None;
    let mut group: Vec<&'a Item> = Vec::new();

    for (index, item) in scene.items().enumerate() {
        let Some(icon) = item.as_nearby() else {
            continue;
        };
        if !is_visible(scene, index) {
            continue;
        }
        let key = icon.distance_squared(click);
        match best {
            Some(current) if key > current => {}
            Some(current) if key == current => group.push(item),
            _ => {
                best = Some(key);
                group.clear();
                group.push(item);
            }
        }
    }

    let key = best?;
    Some((group, (key as f64).sqrt()))
}

/// Resolve one click against the scene
pub fn select<'a>(scene: &'a Scene, click: &Point) -> Selection<'a> {
    if let Some((index, item)) = direct_hit(scene, click) {
        debug!("click ({}, {}) hit {} at stack index {}", click.x, click.y, item.name(), index);
        return Selection { click: *click, items: vec![item], phase: SelectionPhase::Direct };
    }

    match nearest_visible(scene, click) {
        Some((mut items, distance)) => {
            items.sort_by(|a, b| a.cmp_by_name(b));
            debug!(
                "click ({}, {}) on blank area, {} item(s) at distance {:.3}",
                click.x,
                click.y,
                items.len(),
                distance
            );
            Selection { click: *click, items, phase: SelectionPhase::Nearest { distance } }
        }
        None => {
            debug!("click ({}, {}) selected nothing", click.x, click.y);
            Selection { click: *click, items: Vec::new(), phase: SelectionPhase::Empty }
        }
    }
}

/// Resolve every click, one after another
pub fn select_each<'a>(scene: &'a Scene, clicks: &[Point]) -> Vec<Selection<'a>> {
    clicks.iter().map(|click| select(scene, click)).collect()
}

/// Resolve every click in parallel; results keep the order of `clicks`
pub fn select_all<'a>(scene: &'a Scene, clicks: &[Point]) -> Vec<Selection<'a>> {
    clicks.par_iter().map(|click| select(scene, click)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Rect;

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
        Rect::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    fn names(scene: &Scene, x: i32, y: i32) -> Vec<String> {
        select(scene, &Point::new(x, y)).names().into_iter().map(String::from).collect()
    }

    #[test]
    fn test_direct_hit_on_icon() {
        let scene = Scene::from_items(vec![Item::icon("1", Point::new(0, 0))]).unwrap();
        let selection = select(&scene, &Point::new(0, 0));
        assert_eq!(selection.names(), vec!["1"]);
        assert_eq!(selection.phase, SelectionPhase::Direct);
    }

    #[test]
    fn test_equidistant_icons_tie() {
        let scene = Scene::from_items(vec![
            Item::icon("1", Point::new(0, 0)),
            Item::icon("2", Point::new(2, 0)),
        ])
        .unwrap();
        let selection = select(&scene, &Point::new(1, 0));
        assert_eq!(selection.names(), vec!["1", "2"]);
        assert_eq!(selection.phase, SelectionPhase::Nearest { distance: 1.0 });
    }

    #[test]
    fn test_topmost_containing_item_wins() {
        let scene = Scene::from_items(vec![
            Item::icon("1", Point::new(2, 2)),
            Item::region("A", rect(0, 0, 5, 5)),
        ])
        .unwrap();
        assert_eq!(names(&scene, 2, 2), vec!["A"]);
    }

    #[test]
    fn test_icon_above_region_is_hit_first() {
        let scene = Scene::from_items(vec![
            Item::region("A", rect(0, 0, 5, 5)),
            Item::region("B", rect(1, 1, 4, 4)),
            Item::icon("1", Point::new(2, 2)),
        ])
        .unwrap();
        assert_eq!(names(&scene, 2, 2), vec!["1"]);
        assert_eq!(names(&scene, 3, 3), vec!["B"]);
        assert_eq!(names(&scene, 0, 5), vec!["A"]);
    }

    #[test]
    fn test_hidden_icon_not_nearby_candidate() {
        let scene = Scene::from_items(vec![
            Item::icon("1", Point::new(0, 0)),
            Item::region("A", rect(0, 0, 1, 1)),
        ])
        .unwrap();
        let selection = select(&scene, &Point::new(10, 10));
        assert!(selection.is_empty());
        assert_eq!(selection.phase, SelectionPhase::Empty);
    }

    #[test]
    fn test_hidden_icon_skipped_for_farther_visible_one() {
        let scene = Scene::from_items(vec![
            Item::icon("1", Point::new(0, 0)),
            Item::region("A", rect(0, 0, 1, 1)),
            Item::icon("2", Point::new(9, 9)),
        ])
        .unwrap();
        assert_eq!(names(&scene, 3, 3), vec!["2"]);
    }

    #[test]
    fn test_empty_scene_selects_nothing() {
        let scene = Scene::new();
        let selection = select(&scene, &Point::new(0, 0));
        assert!(selection.is_empty());
        assert!(nearest_visible(&scene, &Point::new(0, 0)).is_none());
    }

    #[test]
    fn test_regions_never_nearby() {
        let scene = Scene::from_items(vec![Item::region("A", rect(0, 0, 1, 1))]).unwrap();
        assert!(select(&scene, &Point::new(2, 2)).is_empty());
    }

    #[test]
    fn test_tie_sorted_by_name_not_stack() {
        let scene = Scene::from_items(vec![
            Item::icon("3", Point::new(0, 5)),
            Item::icon("10", Point::new(0, -5)),
            Item::icon("2", Point::new(-5, 0)),
            Item::icon("1", Point::new(5, 0)),
            Item::icon("4", Point::new(6, 0)),
        ])
        .unwrap();
        assert_eq!(names(&scene, 0, 0), vec!["1", "10", "2", "3"]);
    }

    #[test]
    fn test_stacked_icons_at_same_spot() {
        let scene = Scene::from_items(vec![
            Item::icon("1", Point::new(4, 0)),
            Item::icon("2", Point::new(4, 0)),
        ])
        .unwrap();
        // Direct hit picks the upper one; from afar the lower one is hidden.
        assert_eq!(names(&scene, 4, 0), vec!["2"]);
        assert_eq!(names(&scene, 0, 0), vec!["2"]);
    }

    #[test]
    fn test_select_all_matches_sequential() {
        let scene = Scene::from_items(vec![
            Item::icon("1", Point::new(0, 0)),
            Item::region("A", rect(3, 3, 6, 6)),
            Item::icon("2", Point::new(8, 1)),
            Item::icon("3", Point::new(4, 4)),
        ])
        .unwrap();
        let clicks: Vec<Point> = (-2..10)
            .flat_map(|x| (-2..10).map(move |y| Point::new(x, y)))
            .collect();
        assert_eq!(select_all(&scene, &clicks), select_each(&scene, &clicks));
    }
}
