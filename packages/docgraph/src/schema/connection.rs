//! Slicing of a materialised result set into a relay connection.
//! See: https://relay.dev/graphql/connections.htm

use super::self_prelude::*;
use base64::{engine::general_purpose::STANDARD, Engine as _};

const CURSOR_PREFIX: &str = "arrayconnection:";

#[derive(Clone, Debug, PartialEq)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: Cursor,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<Cursor>,
    pub end_cursor: Option<Cursor>,
}

/// One page of a connection, along with the full result set it was cut from.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionEnvelope<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
    /// Every item of the result set, before slicing.
    pub iterable: Vec<T>,
    pub length: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    pub first: Option<i64>,
    pub last: Option<i64>,
    pub after: Option<Cursor>,
    pub before: Option<Cursor>,
}

pub type PagingResult<T> = Result<T, PagingError>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PagingError {
    #[error("Argument \"first\" must be a non-negative integer, received {0}")]
    NegativeFirst(i64),
    #[error("Argument \"last\" must be a non-negative integer, received {0}")]
    NegativeLast(i64),
}

pub fn offset_to_cursor(offset: usize) -> Cursor {
    STANDARD.encode(format!("{}{}", CURSOR_PREFIX, offset))
}

/// Decode a cursor produced by [`offset_to_cursor`]. Anything else yields
/// `None`.
pub fn cursor_to_offset(cursor: &str) -> Option<i64> {
    let decoded = STANDARD.decode(cursor).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    decoded.strip_prefix(CURSOR_PREFIX)?.parse().ok()
}

/// Slice `items` according to `args`, treating `items` as the whole list.
/// Cursors address absolute offsets into `items`.
pub fn connection_from_slice<T: Clone>(
    items: Vec<T>,
    args: &ConnectionArgs,
) -> PagingResult<ConnectionEnvelope<T>> {
    let length = items.len();
    let len = length as i64;

    // Decoded offsets are caller input; keep them within the list.
    let after_offset = args
        .after
        .as_deref()
        .and_then(cursor_to_offset)
        .map(|offset| offset.clamp(-1, len));
    let before_offset = args
        .before
        .as_deref()
        .and_then(cursor_to_offset)
        .map(|offset| offset.clamp(0, len));

    let mut start = after_offset.unwrap_or(-1).saturating_add(1);
    let mut end = before_offset.unwrap_or(len);

    if let Some(first) = args.first {
        if first < 0 {
            return Err(PagingError::NegativeFirst(first));
        }
        end = end.min(start.saturating_add(first));
    }
    if let Some(last) = args.last {
        if last < 0 {
            return Err(PagingError::NegativeLast(last));
        }
        start = start.max(end.saturating_sub(last));
    }

    let lower_bound = match args.after {
        Some(_) => after_offset.unwrap_or(-1).saturating_add(1),
        None => 0,
    };
    let upper_bound = match args.before {
        Some(_) => before_offset.unwrap_or(len),
        None => len,
    };

    let from = start.clamp(0, len) as usize;
    let to = end.clamp(0, len) as usize;
    let edges = if from < to {
        items[from..to]
            .iter()
            .enumerate()
            .map(|(index, node)| Edge {
                node: node.clone(),
                cursor: offset_to_cursor(from + index),
            })
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    let page_info = PageInfo {
        has_next_page: args.first.is_some() && end < upper_bound,
        has_previous_page: args.last.is_some() && start > lower_bound,
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
    };
    trace!(
        "Sliced connection of {} items to [{}, {})",
        length,
        from,
        to.max(from)
    );

    Ok(ConnectionEnvelope {
        edges,
        page_info,
        iterable: items,
        length,
    })
}
