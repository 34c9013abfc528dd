// Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use weburl::{Origin, Url};

#[test]
fn distinct_hosts_are_distinct_origins() {
    let a = Url::parse("http://example.org/").unwrap();
    let b = Url::parse("http://mozilla.org/").unwrap();
    assert_ne!(a.origin(), b.origin());
    assert_eq!(a.origin(), a.origin());
}

#[test]
fn file_urls_are_opaque_and_compare_equal() {
    // Unlike a browser (which mints a fresh opaque identity per navigation),
    // this value-typed `Origin` has nothing to key that identity off of, so
    // two opaque origins compare equal to each other.
    let c = Url::parse("file:///home/user/a.txt").unwrap();
    let d = Url::parse("file:///home/user/b.txt").unwrap();
    assert_eq!(c.origin(), d.origin());
    assert_eq!(c.origin(), Origin::Opaque);
}

#[test]
fn scheme_and_port_both_distinguish_origin() {
    let http = Url::parse("http://example.org/").unwrap();
    let https = Url::parse("https://example.org/").unwrap();
    assert_ne!(http.origin(), https.origin());

    let default_port = Url::parse("http://example.org:80/").unwrap();
    let other_port = Url::parse("http://example.org:8080/").unwrap();
    assert_eq!(http.origin(), default_port.origin());
    assert_ne!(http.origin(), other_port.origin());
}

#[test]
fn non_special_non_blob_schemes_are_opaque() {
    assert_eq!(Url::parse("mailto:a@b").unwrap().origin(), Origin::Opaque);
    assert_eq!(Url::parse("foo://host/path").unwrap().origin(), Origin::Opaque);
}

#[test]
fn blob_url_delegates_to_its_inner_url() {
    let inner = "https://example.org/";
    let blob = Url::parse(&format!("blob:{inner}")).unwrap();
    let direct = Url::parse(inner).unwrap();
    assert_eq!(blob.origin(), direct.origin());
}

#[test]
fn same_origin_helper_matches_equality() {
    let a = Url::parse("https://example.org/a").unwrap();
    let b = Url::parse("https://example.org/b").unwrap();
    assert!(a.origin().same_origin(&b.origin()));
}
