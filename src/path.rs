// Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Path segment bookkeeping: dot-segment resolution and the `file:`
//! Windows drive-letter quirk.
//!
//! Segments are kept as already percent-encoded text (the form the
//! standard's dot-segment classification itself operates on — `%2e` is
//! recognized as a stand-in for `.`, case-insensitively, in `e`).

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::ascii::{is_normalized_windows_drive_letter, is_windows_drive_letter};

/// `.` or one of its percent-encoded spellings.
pub fn is_single_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "%2e" | "%2E")
}

/// `..` or one of its percent-encoded spellings.
pub fn is_double_dot_segment(segment: &str) -> bool {
    matches!(
        segment,
        ".."
            | ".%2e"
            | ".%2E"
            | "%2e."
            | "%2E."
            | "%2e%2e"
            | "%2E%2e"
            | "%2e%2E"
            | "%2E%2E"
    )
}

/// Appends one already-encoded path segment, applying dot-segment removal
/// and, for `file:` URLs, normalizing a first-segment Windows drive letter
/// (`c|` to `c:`) and refusing to push past an existing one via `..`.
pub fn push_segment(segments: &mut Vec<String>, segment: &str, is_file_scheme: bool) {
    if is_double_dot_segment(segment) {
        let protected_drive_letter = is_file_scheme
            && segments.len() == 1
            && segments
                .first()
                .map_or(false, |s| is_normalized_windows_drive_letter(s));
        if !protected_drive_letter {
            segments.pop();
        }
        return;
    }
    if is_single_dot_segment(segment) {
        return;
    }

    if is_file_scheme
        && segments.is_empty()
        && is_windows_drive_letter(segment)
    {
        let mut normalized = segment.to_string();
        // SAFETY: `is_windows_drive_letter` only matches two-byte ASCII
        // strings, so byte index 1 is a single-byte, non-boundary-breaking
        // character.
        unsafe {
            normalized.as_bytes_mut()[1] = b':';
        }
        segments.push(normalized);
        return;
    }

    segments.push(segment.to_string());
}

/// Removes the last segment, used by the `file:` base-URL-shortening step
/// and by relative-reference resolution. Never pops past a `file:` drive
/// letter that sits alone in the first segment.
pub fn shorten(segments: &mut Vec<String>, is_file_scheme: bool) {
    if is_file_scheme
        && segments.len() == 1
        && segments.first().map_or(false, |s| is_normalized_windows_drive_letter(s))
    {
        return;
    }
    segments.pop();
}

/// Joins path segments back into the standard's path-only representation:
/// each segment preceded by a `/`. An empty segment list plus a
/// non-authority sigil is a bare empty path, handled by the caller.
pub fn serialize_path(segments: &[String]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    out
}

/// The inverse of [`serialize_path`]: splits a previously-serialized path
/// back into owned segments, for use as the starting point of a relative
/// reference's path merge.
pub fn split_existing(path: &str) -> Vec<String> {
    match path.strip_prefix('/') {
        Some(rest) => rest.split('/').map(|s| s.to_string()).collect(),
        None if path.is_empty() => Vec::new(),
        None => path.split('/').map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(parts: &[&str], is_file: bool) -> Vec<String> {
        let mut segments = Vec::new();
        for part in parts {
            push_segment(&mut segments, part, is_file);
        }
        segments
    }

    #[test]
    fn dot_segments_are_dropped() {
        assert_eq!(push_all(&["a", ".", "b"], false), vec!["a", "b"]);
        assert_eq!(push_all(&["a", "%2e", "b"], false), vec!["a", "b"]);
    }

    #[test]
    fn double_dot_segments_pop() {
        assert_eq!(push_all(&["a", "b", ".."], false), vec!["a"]);
        assert_eq!(push_all(&["a", "%2E%2e"], false), vec![] as Vec<String>);
        assert_eq!(push_all(&["..", "a"], false), vec!["a"]);
    }

    #[test]
    fn windows_drive_letter_is_normalized_as_first_segment() {
        let segments = push_all(&["c|", "x"], true);
        assert_eq!(segments, vec!["c:", "x"]);
    }

    #[test]
    fn double_dot_does_not_pop_past_a_lone_drive_letter() {
        let mut segments = vec!["c:".to_string()];
        push_segment(&mut segments, "..", true);
        assert_eq!(segments, vec!["c:"]);
    }

    #[test]
    fn serialize_joins_with_leading_slashes() {
        assert_eq!(serialize_path(&["a".to_string(), "b".to_string()]), "/a/b");
        assert_eq!(serialize_path(&[]), "");
    }

    #[test]
    fn split_existing_is_the_inverse_of_serialize() {
        let segments = vec!["a".to_string(), "b".to_string()];
        assert_eq!(split_existing(&serialize_path(&segments)), segments);
        assert_eq!(split_existing(""), Vec::<String>::new());
    }
}
