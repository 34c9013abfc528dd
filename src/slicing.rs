// Copyright 2016 Simon Sapin. Copyright the weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `Index<Range<Position>>` and friends, so a [`Url`] can be sliced the same
//! way its [`Structure`] addresses it internally.

use core::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use crate::structure::Position;
use crate::url::Url;

impl Index<RangeFull> for Url {
    type Output = str;
    fn index(&self, _: RangeFull) -> &str {
        self.as_str()
    }
}

impl Index<RangeFrom<Position>> for Url {
    type Output = str;
    fn index(&self, range: RangeFrom<Position>) -> &str {
        &self.as_str()[self.structure().index(range.start) as usize..]
    }
}

impl Index<RangeTo<Position>> for Url {
    type Output = str;
    fn index(&self, range: RangeTo<Position>) -> &str {
        &self.as_str()[..self.structure().index(range.end) as usize]
    }
}

impl Index<Range<Position>> for Url {
    type Output = str;
    fn index(&self, range: Range<Position>) -> &str {
        let start = self.structure().index(range.start) as usize;
        let end = self.structure().index(range.end) as usize;
        &self.as_str()[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_by_position_range() {
        let url = Url::parse("https://example.com/a/b?q=1#f").unwrap();
        assert_eq!(&url[..], url.as_str());
        assert_eq!(&url[..Position::QueryEnd], "https://example.com/a/b?q=1");
        assert_eq!(&url[Position::PathStart..], "/a/b?q=1#f");
        assert_eq!(&url[Position::PathStart..Position::QueryEnd], "/a/b?q=1");
    }
}
