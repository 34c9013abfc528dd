// Copyright 2013-2014 Simon Sapin. Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The URL parser: turns input text, plus an optional base URL, into a
//! [`ParsedUrl`] ready for the writer protocol to serialize.

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::ascii::is_c0_or_space;
use crate::encode_set;
use crate::error::{ParseError, SyntaxViolation};
use crate::host::{parse_host_for_scheme, ParsedHost};
use crate::path;
use crate::percent_encoding::percent_encode_to_string;
use crate::structure::{SchemeKind, Sigil};
use crate::writer::ParsedUrl;

/// What [`parse`] needs from a base URL to resolve a relative reference
/// against it. Implemented by [`crate::Url`], whose fields come straight
/// from its [`crate::Structure`]-addressed slices.
pub trait UrlLike {
    fn scheme(&self) -> &str;
    fn scheme_kind(&self) -> SchemeKind;
    fn username(&self) -> &str;
    fn password(&self) -> Option<&str>;
    fn host(&self) -> ParsedHost;
    fn port(&self) -> Option<u16>;
    /// The full path text, leading slashes included, or the opaque path.
    fn path(&self) -> &str;
    fn has_opaque_path(&self) -> bool;
    fn query(&self) -> Option<&str>;
}

/// Parses `input`, optionally relative to `base`.
pub fn parse<B: UrlLike>(
    input: &str,
    base: Option<&B>,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedUrl, ParseError> {
    let trimmed = input.trim_matches(|c: char| c.is_ascii() && is_c0_or_space(c as u8));
    if trimmed.len() != input.len() {
        violation(SyntaxViolation::C0SpaceIgnored);
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    let mut saw_tab_or_newline = false;
    for c in trimmed.chars() {
        if matches!(c, '\t' | '\n' | '\r') {
            saw_tab_or_newline = true;
        } else {
            cleaned.push(c);
        }
    }
    if saw_tab_or_newline {
        violation(SyntaxViolation::TabOrNewlineIgnored);
    }

    // Fragment and query are always the last two optional components,
    // whatever state the rest of the parse ends up taking; splitting them
    // off up front keeps every other branch below free of '#'/'?' bookkeeping.
    let fragment = match cleaned.find('#') {
        Some(idx) => {
            let raw = cleaned[idx + 1..].to_string();
            cleaned.truncate(idx);
            Some(percent_encode_to_string(raw.as_bytes(), encode_set::fragment))
        }
        None => None,
    };

    match parse_scheme(&cleaned) {
        Some((scheme, rest)) => parse_with_scheme(&scheme, rest, base, fragment, violation),
        None => {
            let base = base.ok_or(ParseError::RelativeUrlWithoutBase)?;
            let (rest, query) = split_query(&cleaned, base.scheme_kind().is_special());
            parse_relative(rest, base, query, fragment, violation)
        }
    }
}

/// Recognizes a leading `scheme:` and returns it lowercased, plus the text
/// that follows the colon.
fn parse_scheme(input: &str) -> Option<(String, &str)> {
    let colon = input.find(':')?;
    let candidate = &input[..colon];
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    if !chars.clone().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((candidate.to_ascii_lowercase(), &input[colon + 1..]))
}

pub fn classify_scheme(scheme: &str) -> SchemeKind {
    match scheme {
        "file" => SchemeKind::File,
        "ftp" | "http" | "https" | "ws" | "wss" => SchemeKind::SpecialNotFile,
        _ => SchemeKind::NotSpecial,
    }
}

pub(crate) fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "ftp" => Some(21),
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        _ => None,
    }
}

/// Splits `?query` off of `input`, re-encoding it with the
/// scheme-appropriate encode set.
fn split_query(input: &str, is_special: bool) -> (&str, Option<String>) {
    match input.find('?') {
        Some(idx) => {
            let set = if is_special {
                encode_set::special_query
            } else {
                encode_set::query
            };
            let query = percent_encode_to_string(input[idx + 1..].as_bytes(), set);
            (&input[..idx], Some(query))
        }
        None => (input, None),
    }
}

fn parse_with_scheme<B: UrlLike>(
    scheme: &str,
    rest: &str,
    base: Option<&B>,
    fragment: Option<String>,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedUrl, ParseError> {
    let scheme_kind = classify_scheme(scheme);
    let is_special = scheme_kind.is_special();
    let (rest, query) = split_query(rest, is_special);

    // "http:path" where `base` is already an http(s) URL: the standard
    // treats the repeated scheme as droppable and resolves the remainder
    // relative to `base`, same as if no scheme had been written at all.
    if let Some(base) = base {
        if is_special && base.scheme() == scheme && !rest.starts_with("//") {
            violation(SyntaxViolation::ExpectedDoubleSlash);
            return finish_relative(rest, base, query, fragment, violation);
        }
    }

    if let Some(authority_and_path) = strip_authority_slashes(rest, is_special, violation) {
        return build_absolute(scheme, scheme_kind, authority_and_path, query, fragment, violation);
    }

    if !is_special {
        return Ok(build_opaque_path_url(scheme, scheme_kind, rest, query, fragment, violation));
    }

    if scheme_kind.is_file() {
        violation(SyntaxViolation::FileSchemeMissingSlash);
        let path_text = with_leading_slash(rest);
        let path = build_path(&path_text, true, true, violation);
        return Ok(ParsedUrl {
            scheme: scheme.to_string(),
            scheme_kind,
            sigil: Sigil::Authority,
            username: String::new(),
            password: None,
            host: ParsedHost::Empty,
            port: None,
            path,
            has_opaque_path: false,
            query,
            fragment,
        });
    }

    Err(ParseError::EmptyHost)
}

fn with_leading_slash(s: &str) -> String {
    if s.starts_with('/') {
        s.to_string()
    } else {
        let mut out = String::with_capacity(s.len() + 1);
        out.push('/');
        out.push_str(s);
        out
    }
}

fn build_opaque_path_url(
    scheme: &str,
    scheme_kind: SchemeKind,
    rest: &str,
    query: Option<String>,
    fragment: Option<String>,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> ParsedUrl {
    for c in rest.chars() {
        if c.is_ascii() && !crate::ascii::is_url_code_point(c) && c != '%' {
            violation(SyntaxViolation::NonUrlCodePoint);
        }
    }
    let path = percent_encode_to_string(rest.as_bytes(), encode_set::c0_control);
    ParsedUrl {
        scheme: scheme.to_string(),
        scheme_kind,
        sigil: Sigil::None,
        username: String::new(),
        password: None,
        host: ParsedHost::Empty,
        port: None,
        path,
        has_opaque_path: true,
        query,
        fragment,
    }
}

/// If `rest` begins with the authority-introducing slashes, returns the
/// text after them. For special schemes, any run of one or more `/`/`\` is
/// accepted (with a diagnostic if it isn't exactly `//`); for non-special
/// schemes only a literal `//` counts.
fn strip_authority_slashes<'a>(
    rest: &'a str,
    is_special: bool,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Option<&'a str> {
    if !is_special {
        return rest.strip_prefix("//");
    }
    let mut count = 0;
    let mut end = rest.len();
    for (i, c) in rest.char_indices() {
        let is_slash = c == '/' || c == '\\';
        if !is_slash {
            end = i;
            break;
        }
        if c == '\\' {
            violation(SyntaxViolation::BackslashAsDelimiter);
        }
        count += 1;
    }
    if count == 0 {
        return None;
    }
    if count != 2 {
        violation(SyntaxViolation::UnexpectedAuthoritySlashes);
    }
    Some(&rest[end..])
}

/// Builds a brand-new absolute URL's authority and path from the text
/// following the `//` (or normalized-equivalent) sigil.
fn build_absolute(
    scheme: &str,
    scheme_kind: SchemeKind,
    rest: &str,
    query: Option<String>,
    fragment: Option<String>,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedUrl, ParseError> {
    let is_special = scheme_kind.is_special();
    let boundary = rest
        .char_indices()
        .find(|&(_, c)| c == '/' || (is_special && c == '\\'))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let (authority, path_text) = (&rest[..boundary], &rest[boundary..]);

    let (userinfo, host_and_port) = match authority.rfind('@') {
        Some(idx) => (Some(&authority[..idx]), &authority[idx + 1..]),
        None => (None, authority),
    };
    let (username, password) = match userinfo {
        Some(u) => parse_userinfo(u),
        None => (String::new(), None),
    };

    if is_special && !scheme_kind.is_file() && host_and_port.is_empty() {
        return Err(ParseError::EmptyHost);
    }
    if !scheme_kind.is_file() && (!username.is_empty() || password.is_some()) && host_and_port.is_empty() {
        return Err(ParseError::EmptyHost);
    }

    let (host_text, port_text) = split_host_port(host_and_port)?;
    let host = parse_host_for_scheme(host_text, is_special, scheme_kind.is_file(), violation)?;

    if scheme_kind.is_file() && (!username.is_empty() || password.is_some()) {
        return Err(ParseError::FileSchemeWithCredentialsOrPort);
    }

    let port = match port_text {
        Some(text) => {
            let raw = parse_port(text)?;
            if default_port(scheme) == Some(raw) {
                violation(SyntaxViolation::PortOutOfRange);
                None
            } else {
                Some(raw)
            }
        }
        None => None,
    };
    if scheme_kind.is_file() && port.is_some() {
        return Err(ParseError::FileSchemeWithCredentialsOrPort);
    }

    let path = build_path(path_text, is_special, scheme_kind.is_file(), violation);
    let path = ensure_trailing_slash_for_authority(path);

    Ok(ParsedUrl {
        scheme: scheme.to_string(),
        scheme_kind,
        sigil: Sigil::Authority,
        username,
        password,
        host,
        port,
        path,
        has_opaque_path: false,
        query,
        fragment,
    })
}

fn parse_userinfo(userinfo: &str) -> (String, Option<String>) {
    let (raw_username, raw_password) = match userinfo.find(':') {
        Some(idx) => (&userinfo[..idx], Some(&userinfo[idx + 1..])),
        None => (userinfo, None),
    };
    let username = percent_encode_to_string(raw_username.as_bytes(), encode_set::userinfo);
    let password = raw_password.map(|p| percent_encode_to_string(p.as_bytes(), encode_set::userinfo));
    (username, password)
}

/// Splits `host:port`, respecting a bracketed IPv6 literal's own colons.
fn split_host_port(input: &str) -> Result<(&str, Option<&str>), ParseError> {
    if input.starts_with('[') {
        let close = input.find(']').ok_or(ParseError::InvalidIpv6Address)?;
        let (host, rest) = input.split_at(close + 1);
        let port = rest.strip_prefix(':');
        return Ok((host, port));
    }
    match input.rfind(':') {
        Some(idx) => Ok((&input[..idx], Some(&input[idx + 1..]))),
        None => Ok((input, None)),
    }
}

fn parse_port(text: &str) -> Result<u16, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPort);
    }
    let value: u32 = text.parse().map_err(|_| ParseError::InvalidPort)?;
    if value > u32::from(u16::MAX) {
        return Err(ParseError::InvalidPort);
    }
    Ok(value as u16)
}

/// Builds a path's already-percent-encoded, dot-segment-resolved text from
/// raw path text (leading slashes included). Used both by the parser itself
/// and by [`crate::Url::set_path`], which resolves its input the same way a
/// fresh parse would, just without a base URL.
pub(crate) fn build_path(
    path_text: &str,
    is_special: bool,
    is_file_scheme: bool,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> String {
    let mut segments = Vec::new();
    push_raw_segments(&mut segments, path_text, is_special, is_file_scheme, violation);
    path::serialize_path(&segments)
}

fn push_raw_segments(
    segments: &mut Vec<String>,
    path_text: &str,
    is_special: bool,
    is_file_scheme: bool,
    violation: &mut dyn FnMut(SyntaxViolation),
) {
    let set = if is_special {
        encode_set::special_path
    } else {
        encode_set::path
    };
    let raws = split_path_text(path_text, is_special);
    let last_index = raws.len().checked_sub(1);
    let ends_with_delimiter = matches!(path_text.chars().last(), Some(c) if c == '/' || (is_special && c == '\\'));
    for (i, raw) in raws.into_iter().enumerate() {
        for c in raw.chars() {
            if c.is_ascii() && !crate::ascii::is_url_code_point(c) && c != '%' {
                violation(SyntaxViolation::NonUrlCodePoint);
            }
        }
        let encoded = percent_encode_to_string(raw.as_bytes(), set);
        path::push_segment(segments, &encoded, is_file_scheme);

        // A trailing dot-segment not followed by a delimiter still implies a
        // trailing slash: "/a/b/.." ends at "/a/", not "/a", same as "/a/.".
        if Some(i) == last_index
            && !ends_with_delimiter
            && (path::is_single_dot_segment(&encoded) || path::is_double_dot_segment(&encoded))
        {
            segments.push(String::new());
        }
    }
}

/// Splits raw path text into segments. Exactly one leading delimiter (the
/// one that introduces the path) is consumed first if present, so that
/// `"/a/b"` yields `["a", "b"]` rather than `["", "a", "b"]`, while a
/// genuine empty segment from a doubled delimiter (`"//a"` beyond the
/// first slash) is preserved.
fn split_path_text(path_text: &str, is_special: bool) -> Vec<&str> {
    let is_delim = |c: char| c == '/' || (is_special && c == '\\');
    let body = match path_text.chars().next() {
        Some(c) if is_delim(c) => &path_text[c.len_utf8()..],
        _ => path_text,
    };
    if is_special {
        body.split(|c| c == '/' || c == '\\').collect()
    } else {
        body.split('/').collect()
    }
}

/// A path resolved against a base can, after `..` pops more segments than
/// the merge produced, end up with none at all; that still serializes to a
/// bare `/` for a URL with an authority.
fn ensure_trailing_slash_for_authority(path: String) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

/// Resolves a relative reference (no scheme) against `base`.
fn parse_relative<B: UrlLike>(
    rest: &str,
    base: &B,
    query: Option<String>,
    fragment: Option<String>,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedUrl, ParseError> {
    finish_relative(rest, base, query, fragment, violation)
}

fn finish_relative<B: UrlLike>(
    rest: &str,
    base: &B,
    query: Option<String>,
    fragment: Option<String>,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedUrl, ParseError> {
    let scheme = base.scheme().to_string();
    let scheme_kind = base.scheme_kind();
    let is_special = scheme_kind.is_special();

    if base.has_opaque_path() {
        if !rest.is_empty() {
            return Err(ParseError::RelativeUrlWithCannotBeABaseBase);
        }
        return Ok(ParsedUrl {
            scheme,
            scheme_kind,
            sigil: Sigil::None,
            username: String::new(),
            password: None,
            host: ParsedHost::Empty,
            port: None,
            path: base.path().to_string(),
            has_opaque_path: true,
            query: query.or_else(|| base.query().map(|q| q.to_string())),
            fragment,
        });
    }

    if rest.is_empty() {
        return Ok(ParsedUrl {
            scheme,
            scheme_kind,
            sigil: Sigil::Authority,
            username: base.username().to_string(),
            password: base.password().map(|p| p.to_string()),
            host: base.host(),
            port: base.port(),
            path: base.path().to_string(),
            has_opaque_path: false,
            query: query.or_else(|| base.query().map(|q| q.to_string())),
            fragment,
        });
    }

    if let Some(authority_and_path) = strip_authority_slashes(rest, is_special, violation) {
        return build_absolute(&scheme, scheme_kind, authority_and_path, query, fragment, violation);
    }

    if rest.starts_with('/') || (is_special && rest.starts_with('\\')) {
        let path = build_path(rest, is_special, scheme_kind.is_file(), violation);
        let path = ensure_trailing_slash_for_authority(path);
        return Ok(ParsedUrl {
            scheme,
            scheme_kind,
            sigil: Sigil::Authority,
            username: base.username().to_string(),
            password: base.password().map(|p| p.to_string()),
            host: base.host(),
            port: base.port(),
            path,
            has_opaque_path: false,
            query,
            fragment,
        });
    }

    let mut segments = path::split_existing(base.path());
    path::shorten(&mut segments, scheme_kind.is_file());
    push_raw_segments(&mut segments, rest, is_special, scheme_kind.is_file(), violation);
    let path = ensure_trailing_slash_for_authority(path::serialize_path(&segments));

    Ok(ParsedUrl {
        scheme,
        scheme_kind,
        sigil: Sigil::Authority,
        username: base.username().to_string(),
        password: base.password().map(|p| p.to_string()),
        host: base.host(),
        port: base.port(),
        path,
        has_opaque_path: false,
        query,
        fragment,
    })
}
