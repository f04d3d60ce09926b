//! Relay connections over an in-memory list.
//!
//! Cursor parsing and negative counts are left to
//! [`async_graphql::connection::query`]. The `videos` resolver refuses `first`
//! together with `last`. This module only decides which part of the list a
//! page covers.

use async_graphql::connection::CursorType;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::ops::Range;
use thiserror::Error;

const CURSOR_PREFIX: &str = "arrayconnection:";

/// Opaque cursor pointing at a position in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetCursor(pub usize);

#[derive(Error, Debug)]
#[error("Invalid cursor")]
pub struct InvalidCursor;

impl CursorType for OffsetCursor {
    type Error = InvalidCursor;

    fn decode_cursor(s: &str) -> Result<Self, Self::Error> {
        let bytes = STANDARD.decode(s).map_err(|_| InvalidCursor)?;
        let decoded = String::from_utf8(bytes).map_err(|_| InvalidCursor)?;
        let offset = decoded
            .strip_prefix(CURSOR_PREFIX)
            .ok_or(InvalidCursor)?
            .parse()
            .map_err(|_| InvalidCursor)?;
        Ok(OffsetCursor(offset))
    }

    fn encode_cursor(&self) -> String {
        STANDARD.encode(format!("{}{}", CURSOR_PREFIX, self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub range: Range<usize>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// Work out the page of a list of `len` items selected by the connection
/// arguments.
///
/// `after`/`before` are exclusive bounds. `first` is applied before `last`.
/// `has_next_page` is only reported when paginating forward and
/// `has_previous_page` only when paginating backward.
pub fn page_bounds(
    len: usize,
    after: Option<usize>,
    before: Option<usize>,
    first: Option<usize>,
    last: Option<usize>,
) -> Page {
    let lower_bound = after.map_or(0, |a| a.saturating_add(1));
    let upper_bound = before.unwrap_or(len);

    let mut start = lower_bound;
    let mut end = upper_bound.min(len);

    if let Some(first) = first {
        end = end.min(start.saturating_add(first));
    }
    if let Some(last) = last {
        start = start.max(end.saturating_sub(last));
    }

    let has_previous_page = last.is_some() && start > lower_bound;
    let has_next_page = first.is_some() && end < upper_bound;

    let range = if start < end { start..end } else { 0..0 };

    Page {
        range,
        has_previous_page,
        has_next_page,
    }
}
