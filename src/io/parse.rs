//! Scene text parser
//!
//! Records are introduced by a single type character:
//! `I x y` (icon), `R x1 y1 x2 y2` (region), `M x y` (click), `#` (end).
//! Any other character is skipped on its own. Icons are named `1`, `2`, ...
//! and regions `A`, `B`, ... in the order they appear.

use crate::scene::{Item, Point, Rect, Scene, SceneError};
use std::io::Read;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{record} record at byte {offset}: expected an integer, found {found:?}")]
    InvalidNumber { record: char, offset: usize, found: String },

    #[error("{record} record at byte {offset}: input ended before all coordinates were read")]
    UnexpectedEof { record: char, offset: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Scene and click points read from one input
#[derive(Debug)]
pub struct ParsedInput {
    pub scene: Scene,
    pub clicks: Vec<Point>,
    /// False when input ran out before a `#` terminator
    pub terminated: bool,
    /// Number of characters skipped as unknown record types
    pub skipped: usize,
}

/// Name of the `n`th region (0-based): A..Z, then AA, AB, ...
pub fn region_name(mut n: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Name of the `n`th icon (0-based): 1, 2, 3, ...
pub fn icon_name(n: usize) -> String {
    (n + 1).to_string()
}

struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, bytes: text.as_bytes(), pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Next non-whitespace character and its byte offset
    fn next_char(&mut self) -> Option<(usize, char)> {
        self.skip_whitespace();
        let c = self.text.get(self.pos..)?.chars().next()?;
        let at = self.pos;
        self.pos += c.len_utf8();
        Some((at, c))
    }

    fn next_int(&mut self, record: char, record_offset: usize) -> Result<i32, ParseError> {
        self.skip_whitespace();
        if self.pos >= self.bytes.len() {
            return Err(ParseError::UnexpectedEof { record, offset: record_offset });
        }
        let start = self.pos;
        let mut end = start;
        if matches!(self.bytes[end], b'-' | b'+') {
            end += 1;
        }
        while end < self.bytes.len() && self.bytes[end].is_ascii_digit() {
            end += 1;
        }
        let token = &self.text[start..end];
        match token.parse::<i32>() {
            Ok(value) => {
                self.pos = end;
                Ok(value)
            }
            Err(_) => {
                let found = if token.is_empty() {
                    self.text[start..].chars().next().map(String::from).unwrap_or_default()
                } else {
                    token.to_string()
                };
                Err(ParseError::InvalidNumber { record, offset: start, found })
            }
        }
    }

    fn next_point(&mut self, record: char, record_offset: usize) -> Result<Point, ParseError> {
        let x = self.next_int(record, record_offset)?;
        let y = self.next_int(record, record_offset)?;
        Ok(Point::new(x, y))
    }
}

/// Parse scene text into a scene and its click points
pub fn parse_input(text: &str) -> Result<ParsedInput, ParseError> {
    let mut cursor = Cursor::new(text);
    let mut scene = Scene::new();
    let mut clicks = Vec::new();
    let mut icon_count = 0usize;
    let mut region_count = 0usize;
    let mut skipped = 0usize;
    let mut terminated = false;

    while let Some((offset, record)) = cursor.next_char() {
        match record {
            'I' => {
                let location = cursor.next_point(record, offset)?;
                scene.push(Item::icon(icon_name(icon_count), location))?;
                icon_count += 1;
            }
            'R' => {
                let top_left = cursor.next_point(record, offset)?;
                let bottom_right = cursor.next_point(record, offset)?;
                let footprint = Rect::new(top_left, bottom_right);
                let name = region_name(region_count);
                if !footprint.is_well_formed() {
                    warn!("region {} at byte {} has reversed corners and covers nothing", name, offset);
                }
                scene.push(Item::region(name, footprint))?;
                region_count += 1;
            }
            'M' => {
                clicks.push(cursor.next_point(record, offset)?);
            }
            '#' => {
                terminated = true;
                break;
            }
            _ => {
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("skipped {} unrecognized character(s)", skipped);
    }
    if !terminated {
        warn!("input ended without '#' terminator");
    }
    info!(
        "parsed {} icon(s), {} region(s), {} click(s)",
        icon_count,
        region_count,
        clicks.len()
    );

    Ok(ParsedInput { scene, clicks, terminated, skipped })
}

/// Read all of `reader` and parse it
pub fn parse_reader<R: Read>(mut reader: R) -> Result<ParsedInput, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_input(&text)
}

/// Parse a scene file from disk
pub fn parse_file<P: AsRef<std::path::Path>>(path: P) -> Result<ParsedInput, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}
