// Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error and diagnostic types.
//!
//! Two kinds of problem can arise while parsing a URL: a [`SyntaxViolation`]
//! is reported to an optional sink and parsing continues, while a
//! [`ParseError`] aborts parsing entirely. Component setters instead report
//! a [`SetError`] and leave the URL unchanged.

use core::fmt;

/// A hard failure: the input could not be parsed or resolved into a URL.
///
/// Unlike [`SyntaxViolation`], encountering one of these aborts parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// No scheme could be found and no base URL was given (or the base has
    /// an opaque path and the input isn't a bare fragment).
    RelativeUrlWithoutBase,
    /// The scheme of a relative reference does not match the base URL.
    RelativeUrlWithCannotBeABaseBase,
    /// A `[...]` host was missing its closing bracket, or contained an
    /// address that failed IPv6 syntax.
    InvalidIpv6Address,
    /// All-numeric host failed IPv4 syntax (overflowed a slot).
    InvalidIpv4Address,
    /// The host contained one of the forbidden host code points.
    ForbiddenHostCodePoint,
    /// IDNA (domain-to-ASCII) processing failed.
    IdnaError,
    /// A special-scheme URL had an empty host.
    EmptyHost,
    /// A special-scheme URL (other than `file`) requires a host.
    HostRequired,
    /// The port could not be parsed as a 16-bit integer.
    InvalidPort,
    /// A `file:` URL may not carry credentials or a port.
    FileSchemeWithCredentialsOrPort,
    /// The input has no valid scheme characters.
    EmptyScheme,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ParseError::RelativeUrlWithoutBase => "relative URL without a base",
            ParseError::RelativeUrlWithCannotBeABaseBase => {
                "relative URL with a cannot-be-a-base base"
            }
            ParseError::InvalidIpv6Address => "invalid IPv6 address",
            ParseError::InvalidIpv4Address => "invalid IPv4 address",
            ParseError::ForbiddenHostCodePoint => "forbidden host code point",
            ParseError::IdnaError => "IDNA domain-to-ASCII error",
            ParseError::EmptyHost => "empty host",
            ParseError::HostRequired => "a host is required for this scheme",
            ParseError::InvalidPort => "invalid port number",
            ParseError::FileSchemeWithCredentialsOrPort => {
                "a file: URL cannot have credentials or a port"
            }
            ParseError::EmptyScheme => "empty or invalid scheme",
        };
        f.write_str(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// A non-fatal diagnostic raised while parsing. Parsing continues as if the
/// violation had not occurred; the resulting URL is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxViolation {
    /// Leading or trailing ASCII C0 control or space was stripped.
    C0SpaceIgnored,
    /// An interior ASCII tab or newline was filtered out.
    TabOrNewlineIgnored,
    /// A scheme was given for a relative reference that already has a base
    /// with the same scheme.
    ExpectedDoubleSlash,
    /// Exactly two slashes were expected to introduce the authority.
    UnexpectedAuthoritySlashes,
    /// A backslash was used where the standard expects a forward slash.
    BackslashAsDelimiter,
    /// A percent sign was not followed by two hex digits.
    InvalidPercentEncoding,
    /// A byte outside the URL code point set appeared unescaped.
    NonUrlCodePoint,
    /// The host looked numeric but one part overflowed.
    Ipv4OutOfRangePart,
    /// A trailing, empty dotted part was dropped from an IPv4 host.
    Ipv4EmptyPart,
    /// A `file:` URL was missing its third slash (`file:/` vs `file:///`).
    FileSchemeMissingSlash,
    /// A port of exactly the scheme's default was dropped during parsing.
    PortOutOfRange,
}

impl fmt::Display for SyntaxViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SyntaxViolation::C0SpaceIgnored => "leading/trailing C0 control or space ignored",
            SyntaxViolation::TabOrNewlineIgnored => "interior tab or newline ignored",
            SyntaxViolation::ExpectedDoubleSlash => "expected //",
            SyntaxViolation::UnexpectedAuthoritySlashes => "unexpected number of slashes",
            SyntaxViolation::BackslashAsDelimiter => "backslash used as a delimiter",
            SyntaxViolation::InvalidPercentEncoding => "invalid percent-encoded sequence",
            SyntaxViolation::NonUrlCodePoint => "non-URL code point",
            SyntaxViolation::Ipv4OutOfRangePart => "IPv4 address part out of range",
            SyntaxViolation::Ipv4EmptyPart => "IPv4 address has an empty part",
            SyntaxViolation::FileSchemeMissingSlash => "file: URL missing a slash",
            SyntaxViolation::PortOutOfRange => "port equals the scheme's default and was dropped",
        };
        f.write_str(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SyntaxViolation {}

/// A function invoked once per [`SyntaxViolation`] encountered while parsing.
/// Diagnostics never change the outcome of the parse.
pub type ViolationSink<'a> = dyn FnMut(SyntaxViolation) + 'a;

pub(crate) fn ignore_violations(_: SyntaxViolation) {}

/// A component setter rejected its input, leaving the URL unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetError {
    /// Changing the scheme across the special/non-special boundary, or
    /// changing to/from `file` in a way the standard forbids.
    CannotSetScheme,
    /// The new scheme string is empty or has invalid characters.
    InvalidSchemeCharacters,
    /// The new scheme would change specialness of a URL that has other
    /// components depending on the old specialness.
    SpecialChangeNotAllowed,
    /// The URL has no host (or an opaque host), which cannot carry
    /// credentials or a port.
    CannotHaveCredentialsOrPort,
    /// The port string did not fit in a `u16`.
    PortOutOfRange,
    /// The new hostname failed host parsing.
    InvalidHostname,
    /// The URL has an opaque path, which cannot be edited component-wise.
    CannotSetPathOnOpaque,
    /// A special scheme other than `file` cannot have an empty host.
    CannotSetEmptyHostOnSpecial,
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SetError::CannotSetScheme => "cannot set scheme",
            SetError::InvalidSchemeCharacters => "invalid scheme characters",
            SetError::SpecialChangeNotAllowed => {
                "cannot change between a special and non-special scheme"
            }
            SetError::CannotHaveCredentialsOrPort => {
                "cannot set credentials or port on a URL with no host"
            }
            SetError::PortOutOfRange => "port number out of range",
            SetError::InvalidHostname => "invalid hostname",
            SetError::CannotSetPathOnOpaque => "cannot set path on a URL with an opaque path",
            SetError::CannotSetEmptyHostOnSpecial => {
                "cannot set an empty host on a special scheme other than file"
            }
        };
        f.write_str(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetError {}
