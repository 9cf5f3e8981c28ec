use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Positional path captures, in left-to-right group order.
#[derive(Debug)]
pub struct Params<'p> {
    buf: SmallVec<[&'p str; 8]>,
}

impl<'p> Params<'p> {
    pub(super) fn new(buf: SmallVec<[&'p str; 8]>) -> Self {
        Self { buf }
    }

    pub(super) fn empty() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&'p str> {
        self.buf.get(index).copied()
    }

    pub fn parse<T: FromStr>(&self, index: usize) -> Option<Result<T, T::Err>> {
        self.get(index).map(T::from_str)
    }
}

impl<'p> Deref for Params<'p> {
    type Target = [&'p str];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}
