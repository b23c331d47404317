//! Scalar decoding over raw UTF-8 input.
//!
//! Both directions report the number of bytes covered. A byte which does not
//! start (or end) a well-formed sequence decodes as `None` covering exactly
//! one byte, so callers always make progress.


/// Decode the scalar at the start of `bytes`.
///
/// Returns `None` if `bytes` is empty.
pub(crate) fn decode(bytes: &[u8]) -> Option<(Option<char>, usize)> {
    let first = *bytes.first()?;
    let width = width(first);

    let Some(head) = bytes.get(..width).filter(|_| width > 0) else {
        return Some((None, 1));
    };

    match core::str::from_utf8(head) {
        Ok(s) => Some((s.chars().next(), width)),
        Err(..) => Some((None, 1)),
    }
}

/// Decode the scalar which ends at the end of `bytes`.
///
/// Returns `None` if `bytes` is empty.
pub(crate) fn decode_last(bytes: &[u8]) -> Option<(Option<char>, usize)> {
    let last = *bytes.last()?;

    if last.is_ascii() {
        return Some((Some(char::from(last)), 1));
    }

    for n in 1..=bytes.len().min(4) {
        let start = bytes.len() - n;

        if is_continuation(bytes[start]) {
            continue;
        }

        return match decode(&bytes[start..]) {
            Some((Some(c), width)) if width == n => Some((Some(c), n)),
            _ => Some((None, 1)),
        };
    }

    Some((None, 1))
}

/// The encoded width announced by a leading byte, or zero if the byte can
/// never start a sequence.
fn width(b: u8) -> usize {
    match b {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xc0 == 0x80
}
