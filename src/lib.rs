// Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A WHATWG-conformant URL parser and serializer.
//!
//! ```
//! use weburl::Url;
//!
//! let url = Url::parse("https://example.com/a/b?q=1#frag")?;
//! assert_eq!(url.scheme(), "https");
//! assert_eq!(url.host_str(), Some("example.com"));
//! assert_eq!(url.path(), "/a/b");
//! # Ok::<(), weburl::ParseError>(())
//! ```
//!
//! # Design
//!
//! A [`Url`] is a `(serialization: String, structure: Structure)` pair. The
//! `Structure` header stores each component as a *length*, not an absolute
//! offset, so an edit to one component never has to touch any other field:
//! [`Position`] resolves to a byte offset by walking the header in order.
//! The parser builds an intermediate representation which a two-pass writer
//! protocol turns into that pair; component setters on [`Url`] instead
//! splice the one byte range that changed and patch the matching length
//! field(s) directly.
//!
//! # Crate features
//!
//! - `std` (default): enables `std::error::Error` impls and pulls in `idna`'s
//!   `std` feature. Disabling it makes the crate `#![no_std]` (still
//!   requiring `alloc`).
//! - `alloc`: the allocation-requiring parts of the crate (everything but a
//!   few pure byte classifiers). Implied by `std`.
//! - `expose_internals`: exposes the structural header's fields outside the
//!   crate, for debugging and fuzzing harnesses.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod ascii;
mod edit;
mod encode_set;
mod error;
mod form_urlencoded;
mod host;
mod ipv4;
mod ipv6;
mod origin;
mod parser;
mod path;
mod percent_encoding;
mod slicing;
mod structure;
mod url;
mod writer;

pub use crate::error::{ParseError, SetError, SyntaxViolation, ViolationSink};
pub use crate::form_urlencoded::Parse as QueryPairs;
pub use crate::host::{Host, ParsedHost};
pub use crate::origin::Origin;
pub use crate::structure::Position;
pub use crate::url::{ParseOptions, Url};

#[cfg(feature = "expose_internals")]
pub use crate::structure::{HostKind, SchemeKind, Sigil, Structure};
