//! Non-owning byte views
//!
//! A [`TextSlice`] is an `(offset, length)` window into a borrowed buffer.
//! Every operation fails closed: out-of-range requests clamp or produce an
//! empty view, and nothing ever reads past the end of the window.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use super::SplitCollapsing;

/// An immutable view of `len` bytes starting at `start` inside `base`
///
/// Invariant: `start + len <= base.len()` for every slice, including every
/// slice derived from it.
///
/// Equality compares content, not location: two slices over different
/// buffers are equal when they view the same bytes.
#[derive(Clone, Copy)]
pub struct TextSlice<'a> {
    base: &'a [u8],
    start: usize,
    len: usize,
}

impl<'a> TextSlice<'a> {
    /// Length sentinel for [`sub`](Self::sub) meaning "up to the end"
    pub const TO_END: usize = usize::MAX;

    /// View the whole of `buffer`
    #[inline]
    #[must_use]
    pub const fn from_buffer(buffer: &'a [u8]) -> Self {
        Self {
            base: buffer,
            start: 0,
            len: buffer.len(),
        }
    }

    /// View the bytes of a string
    ///
    /// # Examples
    /// ```
    /// use clidle::text::TextSlice;
    ///
    /// let slice = TextSlice::from_text("crane");
    /// assert_eq!(slice.len(), 5);
    /// assert_eq!(slice, "crane");
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_text(text: &'a str) -> Self {
        Self::from_buffer(text.as_bytes())
    }

    /// Number of bytes in view
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the first viewed byte within the backing buffer
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.start
    }

    /// The viewed bytes, borrowed from the backing buffer
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        let base = self.base;
        &base[self.start..self.start + self.len]
    }

    /// The viewed bytes as `str`, if they are valid UTF-8
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// The viewed bytes as text, replacing invalid UTF-8
    #[must_use]
    pub fn to_text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Sub-view of `len` bytes starting at `begin`
    ///
    /// A `begin` past the end or a `len` of zero gives an empty view. A `len`
    /// of [`TO_END`](Self::TO_END), or one reaching past the end, is clamped
    /// to the bytes remaining after `begin`.
    ///
    /// # Examples
    /// ```
    /// use clidle::text::TextSlice;
    ///
    /// let slice = TextSlice::from_text("hello world");
    /// assert_eq!(slice.sub(6, 5), "world");
    /// assert_eq!(slice.sub(6, 100), "world");
    /// assert_eq!(slice.sub(0, TextSlice::TO_END), "hello world");
    /// assert!(slice.sub(20, 2).is_empty());
    /// ```
    #[must_use]
    pub fn sub(&self, begin: usize, len: usize) -> Self {
        if len == 0 || begin > self.len {
            return Self {
                base: self.base,
                start: self.start + begin.min(self.len),
                len: 0,
            };
        }

        // TO_END is usize::MAX, so the clamp covers it too
        let len = len.min(self.len - begin);

        Self {
            base: self.base,
            start: self.start + begin,
            len,
        }
    }

    /// Drop `n` bytes from the front, leaving an empty view if `n >= len`
    pub fn chop_left(&mut self, n: usize) {
        let n = n.min(self.len);
        self.start += n;
        self.len -= n;
    }

    /// Drop `n` bytes from the back, leaving an empty view if `n >= len`
    pub fn chop_right(&mut self, n: usize) {
        self.len -= n.min(self.len);
    }

    /// Index of the first `byte`
    #[must_use]
    pub fn find_char(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == byte)
    }

    /// Index of the last `byte`
    #[must_use]
    pub fn rfind_char(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().rposition(|&b| b == byte)
    }

    /// Index where the first exact occurrence of `needle` starts
    ///
    /// An empty needle, or one longer than the view, is never found. The
    /// search is a plain byte-by-byte scan.
    ///
    /// # Examples
    /// ```
    /// use clidle::text::TextSlice;
    ///
    /// let slice = TextSlice::from_text("abcabc");
    /// assert_eq!(slice.find("bc"), Some(1));
    /// assert_eq!(slice.rfind("bc"), Some(4));
    /// assert_eq!(slice.find(""), None);
    /// ```
    #[must_use]
    pub fn find<N: AsRef<[u8]> + ?Sized>(&self, needle: &N) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() || needle.len() > self.len {
            return None;
        }
        self.as_bytes()
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Index where the last exact occurrence of `needle` starts
    #[must_use]
    pub fn rfind<N: AsRef<[u8]> + ?Sized>(&self, needle: &N) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() || needle.len() > self.len {
            return None;
        }
        self.as_bytes()
            .windows(needle.len())
            .rposition(|window| window == needle)
    }

    #[inline]
    #[must_use]
    pub fn contains<N: AsRef<[u8]> + ?Sized>(&self, needle: &N) -> bool {
        self.find(needle).is_some()
    }

    /// Content comparison against external text
    #[inline]
    #[must_use]
    pub fn eq_text(&self, text: &str) -> bool {
        self.as_bytes() == text.as_bytes()
    }

    #[must_use]
    pub fn starts_with<P: AsRef<[u8]> + ?Sized>(&self, prefix: &P) -> bool {
        self.as_bytes().starts_with(prefix.as_ref())
    }

    #[must_use]
    pub fn ends_with<S: AsRef<[u8]> + ?Sized>(&self, suffix: &S) -> bool {
        self.as_bytes().ends_with(suffix.as_ref())
    }

    /// Split on `delim`, treating every run of delimiters as one separator
    ///
    /// # Examples
    /// ```
    /// use clidle::text::TextSlice;
    ///
    /// let parts: Vec<_> = TextSlice::from_text("A    space")
    ///     .split_collapsing(b' ')
    ///     .map(|part| part.to_string())
    ///     .collect();
    /// assert_eq!(parts, ["A", "space"]);
    /// ```
    #[must_use]
    pub fn split_collapsing(self, delim: u8) -> SplitCollapsing<'a> {
        SplitCollapsing::new(self, delim)
    }

    /// Copy the view into `buf` followed by a NUL terminator
    ///
    /// At most `buf.len() - 1` bytes are copied; longer views are truncated.
    /// Returns the number of bytes copied, not counting the terminator. An
    /// empty `buf` receives nothing.
    pub fn copy_terminated(&self, buf: &mut [u8]) -> usize {
        let Some(capacity) = buf.len().checked_sub(1) else {
            return 0;
        };
        let copied = self.len.min(capacity);
        buf[..copied].copy_from_slice(&self.as_bytes()[..copied]);
        buf[copied] = 0;
        copied
    }

    /// Write the viewed bytes to `out`
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying writer.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl AsRef<[u8]> for TextSlice<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> From<&'a str> for TextSlice<'a> {
    fn from(text: &'a str) -> Self {
        Self::from_text(text)
    }
}

impl<'a> From<&'a [u8]> for TextSlice<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self::from_buffer(buffer)
    }
}

impl PartialEq for TextSlice<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TextSlice<'_> {}

impl PartialEq<str> for TextSlice<'_> {
    fn eq(&self, other: &str) -> bool {
        self.eq_text(other)
    }
}

impl PartialEq<&str> for TextSlice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.eq_text(other)
    }
}

impl Hash for TextSlice<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for TextSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSlice")
            .field("offset", &self.start)
            .field("text", &self.to_text())
            .finish()
    }
}
