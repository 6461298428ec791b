//! Newline-delimited word corpus
//!
//! A [`WordCorpus`] tokenizes a borrowed buffer into [`TextSlice`]s, one per
//! non-empty line, in file order. No word is copied; the corpus cannot
//! outlive the buffer it was built from.

use rand::Rng;
use rustc_hash::FxHashSet;

use crate::text::TextSlice;

/// Ordered, immutable collection of words borrowed from one buffer
#[derive(Debug, Clone)]
pub struct WordCorpus<'a> {
    words: Vec<TextSlice<'a>>,
    index: Option<FxHashSet<&'a [u8]>>,
}

impl<'a> WordCorpus<'a> {
    /// Tokenize `buffer` on newlines
    ///
    /// Runs of blank lines collapse, and a final line without a trailing
    /// newline is still included.
    ///
    /// # Examples
    /// ```
    /// use clidle::wordlists::WordCorpus;
    ///
    /// let corpus = WordCorpus::load(b"crane\nslate\n\nirate");
    /// assert_eq!(corpus.count(), 3);
    /// assert!(corpus.contains("slate"));
    /// assert!(!corpus.contains("plate"));
    /// ```
    #[must_use]
    pub fn load(buffer: &'a [u8]) -> Self {
        let lines = count_lines(buffer);
        let mut words = Vec::with_capacity(lines + 1);
        words.extend(TextSlice::from_buffer(buffer).split_collapsing(b'\n'));

        tracing::debug!(words = words.len(), bytes = buffer.len(), "tokenized word corpus");

        Self { words, index: None }
    }

    /// Build a hash index so that [`contains`](Self::contains) stops scanning
    #[must_use]
    pub fn with_index(mut self) -> Self {
        self.index = Some(self.words.iter().map(TextSlice::as_bytes).collect());
        self
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, in file order
    #[must_use]
    pub fn get(&self, index: usize) -> Option<TextSlice<'a>> {
        self.words.get(index).copied()
    }

    /// Uniformly random index of a word, `None` when empty
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.words.is_empty() {
            return None;
        }
        Some(rng.random_range(0..self.words.len()))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = TextSlice<'a>> + '_ {
        self.words.iter().copied()
    }

    /// Is `candidate` one of the words?
    ///
    /// Without an index this is a linear scan over every word. Word lists
    /// are a few thousand entries and are queried once per turn, so the scan
    /// is the default.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        match &self.index {
            Some(index) => index.contains(candidate.as_bytes()),
            None => self.words.iter().any(|word| word.eq_text(candidate)),
        }
    }
}

fn count_lines(buffer: &[u8]) -> usize {
    buffer.iter().filter(|&&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &[u8] = b"cigar\nrebut\nsissy\nhumph\nawake\n";

    #[test]
    fn load_keeps_file_order() {
        let corpus = WordCorpus::load(LIST);
        let words: Vec<String> = corpus.iter().map(|w| w.to_string()).collect();
        assert_eq!(words, ["cigar", "rebut", "sissy", "humph", "awake"]);
        assert_eq!(corpus.count(), 5);
    }

    #[test]
    fn load_includes_unterminated_last_line() {
        let corpus = WordCorpus::load(b"cigar\nrebut");
        assert_eq!(corpus.count(), 2);
        assert_eq!(corpus.get(1).unwrap(), "rebut");
    }

    #[test]
    fn load_skips_blank_lines() {
        let corpus = WordCorpus::load(b"\ncigar\n\n\nrebut\n\n");
        assert_eq!(corpus.count(), 2);
    }

    #[test]
    fn load_empty_buffer() {
        let corpus = WordCorpus::load(b"");
        assert!(corpus.is_empty());
        assert_eq!(corpus.get(0), None);
        assert!(!corpus.contains(""));
    }

    #[test]
    fn words_are_disjoint_and_cover_the_buffer() {
        let corpus = WordCorpus::load(LIST);
        let mut covered = 0;
        let mut last_end = 0;
        for word in corpus.iter() {
            assert!(word.offset() >= last_end);
            assert!(LIST[last_end..word.offset()].iter().all(|&b| b == b'\n'));
            last_end = word.offset() + word.len();
            covered += word.len();
        }
        let delimiters = LIST.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(covered + delimiters, LIST.len());
    }

    #[test]
    fn contains_is_exact() {
        let corpus = WordCorpus::load(LIST);
        assert!(corpus.contains("sissy"));
        assert!(!corpus.contains("SISSY"));
        assert!(!corpus.contains("siss"));
        assert!(!corpus.contains("sissy\n"));
    }

    #[test]
    fn random_index_stays_in_range() {
        use rand::{SeedableRng, rngs::StdRng};

        let corpus = WordCorpus::load(LIST);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let index = corpus.random_index(&mut rng).unwrap();
            assert!(index < corpus.count());
        }
        assert_eq!(WordCorpus::load(b"").random_index(&mut rng), None);
    }

    #[test]
    fn indexed_lookup_agrees_with_scan() {
        let scan = WordCorpus::load(LIST);
        let indexed = WordCorpus::load(LIST).with_index();
        for probe in ["cigar", "awake", "crane", "", "humph "] {
            assert_eq!(scan.contains(probe), indexed.contains(probe), "probe {probe:?}");
        }
    }
}
