use log::{debug, trace};

use crate::ast::{Pattern, PatternItem};

/// Match `items` against the front of `data`, one byte per item.
///
/// Succeeds as soon as `items` is exhausted; whatever input remains is
/// irrelevant. Each item has a fixed width so there is nothing to backtrack.
pub fn consume(data: &[u8], items: &[PatternItem]) -> bool {
    if items.len() > data.len() {
        return false;
    }
    items
        .iter()
        .zip(data)
        .all(|(item, &byte)| item.matches_byte(byte))
}

/// Decide whether `pattern` matches somewhere in `input`.
///
/// Anchored patterns are tried once at offset 0. Otherwise every offset from
/// 0 up to `input.len()` is tried in order, stopping at the first success.
pub fn matches(input: &[u8], pattern: &Pattern) -> bool {
    let items = pattern.items();
    if pattern.is_anchored() {
        debug!("anchored match over {} byte(s)", input.len());
        return consume(input, &items[1..]);
    }

    // Offsets leaving fewer than `min_len` bytes cannot match.
    let Some(last) = input.len().checked_sub(pattern.min_len()) else {
        return false;
    };
    debug!("unanchored match over offsets 0..={last}");
    (0..=last).any(|start| {
        trace!("trying offset {start}");
        consume(&input[start..], items)
    })
}
