//! Input and output adapters
//!
//! # Submodules
//! - `parse` - Scene text reader
//! - `render` - Selection formatting (text lines or JSON)
//! - `harness` - Expected-output comparison

mod parse;
mod render;
mod harness;

pub use parse::{
    icon_name,
    parse_file,
    parse_input,
    parse_reader,
    region_name,
    ParseError,
    ParsedInput,
};

pub use render::{
    format_item,
    format_line,
    render_to_string,
    write_selections,
    RenderOptions,
    SelectionRecord,
};

pub use harness::{compare_output, Mismatch};
