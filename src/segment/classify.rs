//! Rune classification.
//!
//! Maps a code point to its [`RuneClass`]: single-code-point overrides
//! first, then ranges, then the `Letter` default. ASCII goes through a
//! 128-entry table built once on first use.

use std::cmp::Ordering;
use std::sync::LazyLock;

use super::tables::{OVERRIDES, RANGES};
use crate::types::RuneClass;

/// ASCII fast path, derived from the same tables as everything else.
static ASCII: LazyLock<[RuneClass; 128]> = LazyLock::new(|| {
    let mut table = [RuneClass::Letter; 128];
    for (cp, slot) in (0u32..).zip(table.iter_mut()) {
        *slot = lookup(cp);
    }
    table
});

/// Semantic class of a single code point. Total: unknown code points are
/// [`RuneClass::Letter`].
#[inline]
pub fn classify(c: char) -> RuneClass {
    if c.is_ascii() {
        ASCII[c as usize]
    } else {
        lookup(c as u32)
    }
}

fn lookup(cp: u32) -> RuneClass {
    if let Ok(i) = OVERRIDES.binary_search_by_key(&cp, |&(point, _)| point) {
        return OVERRIDES[i].1;
    }

    let found = RANGES.binary_search_by(|&(lo, hi, _)| {
        if hi < cp {
            Ordering::Less
        } else if lo > cp {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    match found {
        Ok(i) => RANGES[i].2,
        Err(_) => RuneClass::Letter,
    }
}
