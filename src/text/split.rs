//! Delimiter splitting with run collapsing

use std::iter::FusedIterator;

use super::TextSlice;

/// Iterator returned by [`TextSlice::split_collapsing`]
///
/// Each step skips any leading run of delimiters, then yields everything up
/// to the next delimiter. Consecutive delimiters therefore never produce
/// empty pieces. Once the remaining input holds no more non-delimiter bytes
/// the iterator is exhausted for good.
#[derive(Debug, Clone)]
pub struct SplitCollapsing<'a> {
    rest: TextSlice<'a>,
    delim: u8,
}

impl<'a> SplitCollapsing<'a> {
    pub(super) fn new(input: TextSlice<'a>, delim: u8) -> Self {
        Self { rest: input, delim }
    }

    /// The input not consumed yet
    #[must_use]
    pub fn remainder(&self) -> TextSlice<'a> {
        self.rest
    }
}

impl<'a> Iterator for SplitCollapsing<'a> {
    type Item = TextSlice<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let leading = self
            .rest
            .as_bytes()
            .iter()
            .take_while(|&&b| b == self.delim)
            .count();
        self.rest.chop_left(leading);

        if self.rest.is_empty() {
            return None;
        }

        let piece_len = self.rest.find_char(self.delim).unwrap_or(self.rest.len());
        let piece = self.rest.sub(0, piece_len);
        self.rest.chop_left(piece_len);

        Some(piece)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (0, Some(self.rest.len().div_ceil(2)))
        }
    }
}

impl FusedIterator for SplitCollapsing<'_> {}
