// Copyright 2016 Simon Sapin. Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [Origin](https://url.spec.whatwg.org/#origin) computation.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

use crate::host::ParsedHost;
use crate::url::Url;

/// The origin of a [`Url`], per <https://url.spec.whatwg.org/#origin>.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A scheme that doesn't get a tuple origin (`file:`, `data:`, `javascript:`,
    /// and anything not `ftp`/`http`/`https`/`ws`/`wss`/`blob`).
    Opaque,
    /// `(scheme, host, port)`. The port is always the scheme's actual or
    /// default port — two URLs with the same scheme, host and (explicit or
    /// default) port share an origin even if one wrote the port out and the
    /// other didn't.
    Tuple(String, ParsedHost, u16),
}

impl Origin {
    /// Whether two origins are the same origin as defined by the standard.
    ///
    /// A browser additionally treats two separately-minted opaque origins as
    /// distinct from each other even when both come from (for instance) two
    /// different `file:` URLs; this tuple-and-opaque model doesn't carry the
    /// identity needed to represent that; `Origin::Opaque == Origin::Opaque`
    /// here, for any two opaque origins.
    pub fn same_origin(&self, other: &Origin) -> bool {
        self == other
    }
}

pub(crate) fn origin_of(url: &Url) -> Origin {
    match url.scheme() {
        "blob" => match Url::parse(url.path()) {
            Ok(parsed) => origin_of(&parsed),
            Err(_) => Origin::Opaque,
        },
        "ftp" | "http" | "https" | "ws" | "wss" => {
            let port = match url.port_or_known_default() {
                Some(port) => port,
                None => return Origin::Opaque,
            };
            Origin::Tuple(url.scheme().to_string(), host_of(url), port)
        }
        _ => Origin::Opaque,
    }
}

fn host_of(url: &Url) -> ParsedHost {
    use crate::host::Host;
    match url.host() {
        Host::None | Host::Empty => ParsedHost::Empty,
        Host::Domain(d) => ParsedHost::Domain(d.to_string()),
        Host::Opaque(o) => ParsedHost::Opaque(o.to_string()),
        Host::Ipv4(a) => ParsedHost::Ipv4(a),
        Host::Ipv6(p) => ParsedHost::Ipv6(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_origin_uses_the_known_default_port() {
        let a = Url::parse("http://example.com/").unwrap();
        let b = Url::parse("http://example.com:80/").unwrap();
        assert_eq!(a.origin(), b.origin());
    }

    #[test]
    fn different_hosts_are_different_origins() {
        let a = Url::parse("http://example.com/").unwrap();
        let b = Url::parse("http://example.org/").unwrap();
        assert_ne!(a.origin(), b.origin());
    }

    #[test]
    fn file_urls_are_opaque() {
        let url = Url::parse("file:///etc/hosts").unwrap();
        assert_eq!(url.origin(), Origin::Opaque);
    }

    #[test]
    fn opaque_path_schemes_are_opaque() {
        let url = Url::parse("data:text/plain,hi").unwrap();
        assert_eq!(url.origin(), Origin::Opaque);
    }
}
