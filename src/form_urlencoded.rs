// Copyright 2013-2014 Simon Sapin. Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A read-only `application/x-www-form-urlencoded` parser, used by
//! [`crate::Url::query_pairs`].
//!
//! `+` is decoded as a space before percent-decoding, same as the rest of
//! the pairs; there is no charset-override or `isindex` handling, both
//! legacy knobs the standard itself has since dropped.

#[cfg(not(feature = "std"))]
use alloc::{
    borrow::Cow,
    string::String,
    vec::Vec,
};
#[cfg(feature = "std")]
use std::borrow::Cow;

use crate::percent_encoding::percent_decode_to_vec;

/// An iterator over `(name, value)` pairs in an
/// `application/x-www-form-urlencoded` string.
pub struct Parse<'a> {
    input: core::str::Split<'a, char>,
}

/// Parses `input` as `application/x-www-form-urlencoded`, yielding
/// `(name, value)` pairs in order. `input` is the raw query string text (no
/// leading `?`), which is always ASCII since it's already percent-encoded.
pub fn parse(input: &str) -> Parse<'_> {
    Parse {
        input: input.split('&'),
    }
}

impl<'a> Iterator for Parse<'a> {
    type Item = (Cow<'a, str>, Cow<'a, str>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let piece = self.input.next()?;
            if piece.is_empty() {
                continue;
            }
            let (name, value) = match piece.find('=') {
                Some(idx) => (&piece[..idx], &piece[idx + 1..]),
                None => (piece, ""),
            };
            return Some((decode(name), decode(value)));
        }
    }
}

fn decode(input: &str) -> Cow<'_, str> {
    if !input.contains('+') && !input.contains('%') {
        return Cow::Borrowed(input);
    }
    let replaced: Vec<u8> = input
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();
    Cow::Owned(String::from_utf8_lossy(&percent_decode_to_vec(&replaced)).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(String, String)> {
        parse(input)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn parses_pairs() {
        assert_eq!(
            collect("a=1&b=2"),
            vec![("a".into(), "1".into()), ("b".into(), "2".into())]
        );
    }

    #[test]
    fn plus_decodes_as_space() {
        assert_eq!(collect("q=a+b"), vec![("q".into(), "a b".into())]);
    }

    #[test]
    fn percent_decodes() {
        assert_eq!(collect("q=a%20b"), vec![("q".into(), "a b".into())]);
    }

    #[test]
    fn missing_value_is_empty_string() {
        assert_eq!(collect("flag"), vec![("flag".into(), "".into())]);
    }

    #[test]
    fn empty_pairs_are_skipped() {
        assert_eq!(collect("a=1&&b=2"), vec![("a".into(), "1".into()), ("b".into(), "2".into())]);
        assert_eq!(collect(""), Vec::<(String, String)>::new());
    }
}
