//! Expected-output check
//!
//! Compares produced output with a reference answer after trimming trailing
//! whitespace from both, and reports the first differing line.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// 1-based line number
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// Compare `actual` to `expected`; `None` when they agree
pub fn compare_output(actual: &str, expected: &str) -> Option<Mismatch> {
    let actual = actual.trim_end();
    let expected = expected.trim_end();
    if actual == expected {
        return None;
    }

    let mut actual_lines = actual.lines();
    let mut expected_lines = expected.lines();
    let mut line = 0;
    loop {
        line += 1;
        let a = actual_lines.next();
        let e = expected_lines.next();
        if a != e {
            return Some(Mismatch {
                line,
                expected: e.map(String::from),
                actual: a.map(String::from),
            });
        }
        if a.is_none() {
            // Same lines but different line endings (e.g. CRLF)
            return None;
        }
    }
}
