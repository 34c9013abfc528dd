// Copyright 2013-2014 Simon Sapin. Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Host parsing: dispatch between domain, IPv4, IPv6, opaque and empty
//! hosts.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::ascii::is_forbidden_domain_code_point;
use crate::encode_set;
use crate::error::{ParseError, SyntaxViolation};
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::percent_encoding::{percent_decode_to_vec, percent_encode_to_string};

/// A parsed host, tagged by the alternative the parser committed to. The
/// serialized text form is what [`crate::Structure`] actually stores; this
/// enum is what component getters hand back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParsedHost {
    /// An IDNA-processed domain, or the lowercased ASCII label sequence of
    /// one that was already all-ASCII.
    Domain(String),
    /// An IPv4 address recognized while parsing what looked like a domain.
    Ipv4(u32),
    /// A bracketed IPv6 address.
    Ipv6([u16; 8]),
    /// A non-special scheme's host: kept verbatim modulo percent-encoding of
    /// forbidden bytes, never lowercased or IDNA-processed.
    Opaque(String),
    /// No host at all (`file:///etc/hosts`, or any `path`/`opaque-path`
    /// URL).
    Empty,
}

impl ParsedHost {
    pub fn serialize(&self) -> String {
        match self {
            ParsedHost::Domain(domain) => domain.clone(),
            ParsedHost::Ipv4(addr) => serialize_ipv4(*addr),
            ParsedHost::Ipv6(pieces) => {
                let mut s = String::with_capacity(41);
                s.push('[');
                s.push_str(&serialize_ipv6(*pieces));
                s.push(']');
                s
            }
            ParsedHost::Opaque(host) => host.clone(),
            ParsedHost::Empty => String::new(),
        }
    }
}

/// Parses `input` as a host. `is_special` selects between the domain-or-IPv4
/// dispatch (special schemes) and the opaque-host dispatch (non-special
/// schemes); the empty string is handled here directly ("empty host is
/// fine") since callers of this function have already rejected it for
/// schemes that require a non-empty host. `is_file` additionally triggers the
/// `file:` scheme's `localhost` → empty-host quirk.
pub fn parse_host(
    input: &str,
    is_special: bool,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedHost, ParseError> {
    parse_host_for_scheme(input, is_special, false, violation)
}

pub fn parse_host_for_scheme(
    input: &str,
    is_special: bool,
    is_file: bool,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedHost, ParseError> {
    if input.is_empty() {
        return Ok(ParsedHost::Empty);
    }
    if let Some(interior) = input.strip_prefix('[') {
        let interior = interior
            .strip_suffix(']')
            .ok_or(ParseError::InvalidIpv6Address)?;
        return parse_ipv6(interior).map(ParsedHost::Ipv6);
    }
    if !is_special {
        return parse_opaque_host(input, violation);
    }
    parse_domain_or_ipv4(input, is_file, violation)
}

fn parse_domain_or_ipv4(
    input: &str,
    is_file: bool,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedHost, ParseError> {
    let bytes = percent_decode_to_vec(input.as_bytes());
    let domain = String::from_utf8_lossy(&bytes);
    let domain = idna::domain_to_ascii(&domain).map_err(|_| ParseError::IdnaError)?;

    if domain.is_empty() {
        return Err(ParseError::EmptyHost);
    }
    if domain.bytes().any(is_forbidden_domain_code_point) {
        return Err(ParseError::ForbiddenHostCodePoint);
    }

    if is_file && domain == "localhost" {
        return Ok(ParsedHost::Empty);
    }

    if looks_like_ipv4(&domain) {
        return match parse_ipv4(&domain, violation) {
            Some(Ok(address)) => Ok(ParsedHost::Ipv4(address)),
            Some(Err(e)) => Err(e),
            None => Err(ParseError::InvalidIpv4Address),
        };
    }

    Ok(ParsedHost::Domain(domain))
}

/// A domain "ends in a number" (and thus must parse fully as IPv4 or fail)
/// when its last dot-separated label is entirely ASCII digits, or a valid
/// hex/octal-prefixed numeric literal.
fn looks_like_ipv4(domain: &str) -> bool {
    let last = match domain.trim_end_matches('.').rsplit('.').next() {
        Some(last) if !last.is_empty() => last,
        _ => return false,
    };
    if last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    let digits = last.strip_prefix("0x").or_else(|| last.strip_prefix("0X"));
    matches!(digits, Some(d) if !d.is_empty() && d.bytes().all(|b| b.is_ascii_hexdigit()))
}

fn parse_opaque_host(
    input: &str,
    violation: &mut dyn FnMut(SyntaxViolation),
) -> Result<ParsedHost, ParseError> {
    if input.bytes().any(crate::ascii::is_forbidden_host_code_point) {
        return Err(ParseError::ForbiddenHostCodePoint);
    }
    for c in input.chars() {
        if c.is_ascii() && !crate::ascii::is_url_code_point(c) && c != '%' {
            violation(SyntaxViolation::NonUrlCodePoint);
        }
    }
    Ok(ParsedHost::Opaque(percent_encode_to_string(
        input.as_bytes(),
        encode_set::c0_control,
    )))
}

/// The host of a [`crate::Url`], borrowed from its serialization and tagged
/// by kind.
///
/// This is the public-facing counterpart of [`ParsedHost`]: it additionally
/// distinguishes [`Host::None`] (no authority at all) from [`Host::Empty`]
/// (an authority present with an explicitly empty host), a distinction
/// [`crate::Structure`] doesn't need to make internally since both collapse
/// to zero host bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host<'a> {
    /// No authority at all: `mailto:user@example.com`.
    None,
    /// An authority with an explicitly empty host: `file:///etc/hosts`.
    Empty,
    Domain(&'a str),
    Ipv4(u32),
    Ipv6([u16; 8]),
    Opaque(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str, special: bool) -> Result<ParsedHost, ParseError> {
        parse_host(s, special, &mut |_| {})
    }

    #[test]
    fn empty_host() {
        assert_eq!(parse("", true), Ok(ParsedHost::Empty));
    }

    #[test]
    fn ipv6_host() {
        assert_eq!(parse("[::1]", true), Ok(ParsedHost::Ipv6([0, 0, 0, 0, 0, 0, 0, 1])));
        assert!(parse("[::1", true).is_err());
    }

    #[test]
    fn domain_host_lowercased() {
        assert_eq!(parse("EXAMPLE.COM", true), Ok(ParsedHost::Domain("example.com".into())));
    }

    #[test]
    fn domain_ending_in_number_must_be_ipv4() {
        assert_eq!(parse("192.168.0.1", true), Ok(ParsedHost::Ipv4(0xc0a8_0001)));
        assert!(parse("192.168.0.999", true).is_err());
        assert!(matches!(parse("1.2.3.4.5", true), Ok(ParsedHost::Domain(_))));
    }

    #[test]
    fn opaque_host_percent_encodes_forbidden_free_bytes() {
        assert_eq!(parse("EXAMPLE.com", false), Ok(ParsedHost::Opaque("EXAMPLE.com".into())));
        assert!(parse("exa mple.com", false).is_err());
    }

    #[test]
    fn file_scheme_localhost_becomes_empty_host() {
        assert_eq!(
            parse_host_for_scheme("localhost", true, true, &mut |_| {}),
            Ok(ParsedHost::Empty)
        );
        assert_eq!(
            parse_host_for_scheme("LOCALHOST", true, true, &mut |_| {}),
            Ok(ParsedHost::Empty)
        );
        // Only a `file:` quirk: other special schemes keep "localhost" as a domain.
        assert_eq!(
            parse_host_for_scheme("localhost", true, false, &mut |_| {}),
            Ok(ParsedHost::Domain("localhost".into()))
        );
    }
}
