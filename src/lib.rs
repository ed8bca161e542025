//! Click selection over stacked icons and rectangular regions
//!
//! A click on an item selects the top-most item under the cursor. A click on
//! blank area selects the nearest icons that are not hidden behind anything
//! stacked above them.

pub mod io;
pub mod rpc;
pub mod scene;
pub mod select;

pub use io::{compare_output, parse_input, render_to_string, Mismatch, ParseError, ParsedInput, RenderOptions};
pub use scene::{Icon, Item, ItemKind, Point, Rect, Region, Scene, SceneError};
pub use select::{is_visible, select, select_all, Selection, SelectionPhase};

use tracing::info;

/// Parses scene text, resolves every click and returns the rendered output
///
/// # Arguments
/// * `text` - Scene description (`I`, `R`, `M` records, `#` terminator)
/// * `options` - Output format
/// * `parallel` - Resolve clicks on the rayon pool instead of in sequence
///
/// # Example
/// ```
/// let out = click_select::run("I 0 0 I 2 0 M 1 0 #", &Default::default(), false).unwrap();
/// assert_eq!(out, "  1  2\n");
/// ```
pub fn run(text: &str, options: &RenderOptions, parallel: bool) -> anyhow::Result<String> {
    let parsed = parse_input(text)?;
    let selections = if parallel {
        select_all(&parsed.scene, &parsed.clicks)
    } else {
        select::select_each(&parsed.scene, &parsed.clicks)
    };

    let empty = selections.iter().filter(|s| s.is_empty()).count();
    if empty > 0 {
        info!("{} of {} click(s) selected nothing", empty, selections.len());
    }

    render_to_string(&selections, options)
}
