//! Rolling dice notation embedded in free text.
//!
//! A region is the shortest span from a `[` to the next `]` on the same line.
//! Regions do not nest. A backslash directly before the `[` escapes the region:
//! the backslash is dropped and the region is kept as literal text, along with
//! a backslash directly before its `]`. Every other region is parsed and rolled.

use crate::roll::Roller;
use std::ops::Range;

/// A piece of scanned text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Segment<'a> {
    /// Text outside of any region, verbatim.
    Text(&'a str),
    /// The interior of an escaped region, escapes removed.
    Escaped(&'a str),
    /// The interior of a live region, verbatim.
    Live(&'a str),
}

/// Splits `input` into [Segment]s, in order.
pub fn segments(input: &str) -> Segments<'_> {
    Segments {
        input,
        pos: 0,
        pending: None,
    }
}

pub struct Segments<'a> {
    input: &'a str,
    pos: usize,
    pending: Option<Segment<'a>>,
}

impl<'a> Segments<'a> {
    fn region(&self, span: Range<usize>) -> (usize, Segment<'a>) {
        let bytes = self.input.as_bytes();
        let Range { start, end } = span;

        if start > 0 && bytes[start - 1] == b'\\' {
            let close = if bytes[end - 2] == b'\\' { end - 2 } else { end - 1 };
            (start - 1, Segment::Escaped(&self.input[start + 1..close]))
        } else {
            (start, Segment::Live(&self.input[start + 1..end - 1]))
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(seg) = self.pending.take() {
            return Some(seg);
        }
        if self.pos >= self.input.len() {
            return None;
        }

        let Some(span) = find_region(self.input.as_bytes(), self.pos) else {
            let rest = &self.input[self.pos..];
            self.pos = self.input.len();
            return Some(Segment::Text(rest));
        };

        let (text_end, seg) = self.region(span.clone());
        let text = &self.input[self.pos..text_end];
        self.pos = span.end;

        if text.is_empty() {
            Some(seg)
        } else {
            self.pending = Some(seg);
            Some(Segment::Text(text))
        }
    }
}

/// Finds the next region at or after `from`.
fn find_region(bytes: &[u8], mut from: usize) -> Option<Range<usize>> {
    while let Some(offset) = bytes[from..].iter().position(|&b| b == b'[') {
        let start = from + offset;
        let rest = &bytes[start + 1..];
        match rest.iter().position(|&b| b == b']' || b == b'\n') {
            Some(len) if rest[len] == b']' => return Some(start..start + len + 2),
            // no region can open before the newline and close after it
            Some(len) => from = start + len + 2,
            None => return None,
        }
    }
    None
}

/// Replaces every live region of `text` with `[<notation> = <total>]`, or
/// with `[ERR:<interior>]` when the interior is not valid dice notation.
/// Escaped regions are kept as literal brackets.
pub fn substitute<R: Roller>(text: &str, roller: &mut R) -> String {
    let mut ret = String::with_capacity(text.len());
    for seg in segments(text) {
        match seg {
            Segment::Text(s) => ret.push_str(s),
            Segment::Escaped(s) => {
                ret.push('[');
                ret.push_str(s);
                ret.push(']');
            }
            Segment::Live(s) => ret.push_str(&roll_region(s, roller)),
        }
    }
    ret
}

/// Applies [substitute] to every cell of a row.
pub fn substitute_all<S: AsRef<str>, R: Roller>(cells: &[S], roller: &mut R) -> Vec<String> {
    cells
        .iter()
        .map(|cell| substitute(cell.as_ref(), roller))
        .collect()
}

fn roll_region<R: Roller>(interior: &str, roller: &mut R) -> String {
    match crate::parse(interior) {
        Ok(expr) => {
            let total = expr.roll(roller).total();
            tracing::trace!(interior, expression = %expr, total, "rolled embedded expression");
            format!("[{} = {}]", expr, total)
        }
        Err(err) => {
            tracing::debug!(interior, error = %err, "invalid embedded expression");
            format!("[ERR:{}]", interior)
        }
    }
}
