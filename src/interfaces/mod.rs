/// Calling code lookup used by the normalizer, kept behind a trait so the
/// plain ordered scan can be swapped for something smarter (a trie) if the
/// code set ever grows by orders of magnitude.
pub trait CallingCodeMatcher {
    /// Returns the longest known calling code that is a prefix of `digits`
    /// (a string of ASCII digits), or `None` when no code matches.
    fn longest_prefix_of<'a>(&'a self, digits: &str) -> Option<&'a str>;
}
