use crate::constants::{FORMAT_TAG, TAG_LEN};

/// True when `tag` occurs anywhere inside `window`.
///
/// With a window exactly `tag.len()` wide this is plain equality; it stays a
/// containment test so a wider window keeps the same meaning.
pub fn contains_tag(window: &[u8], tag: &[u8]) -> bool {
    if tag.is_empty() {
        return true;
    }
    window.windows(tag.len()).any(|w| w == tag)
}

/// The first `TAG_LEN` bytes of `data` (fewer if `data` is shorter).
#[inline]
pub fn tag_window(data: &[u8]) -> &[u8] {
    &data[..data.len().min(TAG_LEN)]
}

/// Compress-side tag check over the first `TAG_LEN` bytes read.
#[inline]
pub fn carries_format_tag(data: &[u8]) -> bool {
    contains_tag(tag_window(data), &FORMAT_TAG)
}

/// `numer / denom`, 0.0 for an empty denominator.
pub fn ratio(numer: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}
