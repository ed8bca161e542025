//! Output formatting for selections
//!
//! Text output writes one line per click: icon names right-aligned in a fixed
//! field, region names as-is, no separators. An empty selection is an empty
//! line. JSON output writes one object per line.

use crate::scene::{Item, ItemKind};
use crate::select::Selection;
use serde::Serialize;
use std::io::Write;

/// Rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of the right-aligned field used for icon names
    pub icon_width: usize,
    /// Emit JSON objects instead of text lines
    pub json: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { icon_width: 3, json: false }
    }
}

/// Format a single item name
pub fn format_item(item: &Item, options: &RenderOptions) -> String {
    match item.kind() {
        ItemKind::Icon => format!("{:>width$}", item.name(), width = options.icon_width),
        ItemKind::Region => item.name().to_string(),
    }
}

/// Text line for one selection (no trailing newline)
pub fn format_line(selection: &Selection<'_>, options: &RenderOptions) -> String {
    selection
        .items
        .iter()
        .map(|item| format_item(item, options))
        .collect()
}

/// Compact record used for JSON output
#[derive(Debug, Serialize)]
pub struct SelectionRecord<'a> {
    pub click: [i32; 2],
    pub names: Vec<&'a str>,
    #[serde(flatten)]
    pub phase: crate::select::SelectionPhase,
    pub line: String,
}

impl<'a> SelectionRecord<'a> {
    pub fn new(selection: &Selection<'a>, options: &RenderOptions) -> Self {
        Self {
            click: [selection.click.x, selection.click.y],
            names: selection.names(),
            phase: selection.phase,
            line: format_line(selection, &RenderOptions { json: false, ..*options }),
        }
    }
}

/// Write every selection to `out`, one line each
pub fn write_selections<W: Write>(
    out: &mut W,
    selections: &[Selection<'_>],
    options: &RenderOptions,
) -> anyhow::Result<()> {
    for selection in selections {
        if options.json {
            let record = SelectionRecord::new(selection, options);
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            writeln!(out, "{}", format_line(selection, options))?;
        }
    }
    Ok(())
}

/// Render selections to a string
pub fn render_to_string(selections: &[Selection<'_>], options: &RenderOptions) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    write_selections(&mut buf, selections, options)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Point, Rect, Scene};
    use crate::select::select;

    fn scene() -> Scene {
        Scene::from_items(vec![
            Item::icon("1", Point::new(0, 0)),
            Item::icon("2", Point::new(2, 0)),
            Item::region("A", Rect::new(Point::new(10, 10), Point::new(12, 12))),
            Item::icon("3", Point::new(20, 20)),
            Item::region("B", Rect::new(Point::new(19, 19), Point::new(21, 21))),
        ])
        .unwrap()
    }

    #[test]
    fn test_icon_names_right_aligned() {
        let scene = scene();
        let options = RenderOptions::default();
        assert_eq!(format_line(&select(&scene, &Point::new(1, 0)), &options), "  1  2");
        assert_eq!(format_line(&select(&scene, &Point::new(0, 0)), &options), "  1");
    }

    #[test]
    fn test_region_name_as_is() {
        let scene = scene();
        assert_eq!(format_line(&select(&scene, &Point::new(11, 11)), &RenderOptions::default()), "A");
    }

    #[test]
    fn test_empty_selection_is_empty_line() {
        let scene = Scene::new();
        let selections = vec![select(&scene, &Point::new(0, 0)), select(&scene, &Point::new(1, 1))];
        let text = render_to_string(&selections, &RenderOptions::default()).unwrap();
        assert_eq!(text, "\n\n");
    }

    #[test]
    fn test_custom_icon_width() {
        let scene = scene();
        let options = RenderOptions { icon_width: 1, json: false };
        assert_eq!(format_line(&select(&scene, &Point::new(1, 0)), &options), "12");
    }

    #[test]
    fn test_json_output() {
        let scene = scene();
        let options = RenderOptions { json: true, ..RenderOptions::default() };
        let text = render_to_string(&[select(&scene, &Point::new(1, 0))], &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["names"], serde_json::json!(["1", "2"]));
        assert_eq!(value["phase"], "nearest");
        assert_eq!(value["distance"], 1.0);
        assert_eq!(value["line"], "  1  2");
        assert_eq!(value["click"], serde_json::json!([1, 0]));
    }
}
