// Chunk: docs/chunks/subsequence_ranking - Title ranking by shortest subsequence span
//!
//! Ranks note titles against the typed query.
//!
//! A title matches when every query character appears in it, in order,
//! case-sensitively, not necessarily adjacent. For each matching title we take
//! the leftmost span that contains the query as a subsequence and, from that
//! start, the shortest such span. Titles are then ordered by
//! `(span length, span start, title)`, so tight early matches win and ties fall
//! back to alphabetical order.
//!
//! This is exactly what a lazy regex search for `q0.*?q1.*?q2...` returns,
//! computed directly without building a pattern.

/// One title's best span against a query.
///
/// Field order is the ranking key; the derived `Ord` compares span length,
/// then start offset, then title.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchResult {
    /// Number of characters covered by the span, first to last matched char.
    pub span_len: usize,
    /// Character offset of the first matched char.
    pub start: usize,
    /// The candidate title.
    pub title: String,
}

/// Finds the leftmost, shortest span of `title` containing `query` as a subsequence.
///
/// Returns `Some((start, span_len))` in character offsets, or `None` when the
/// query is not a subsequence of the title. An empty query matches at `(0, 0)`.
pub fn find_span(query: &[char], title: &str) -> Option<(usize, usize)> {
    let (first, rest) = match query.split_first() {
        Some(split) => split,
        None => return Some((0, 0)),
    };
    let title: Vec<char> = title.chars().collect();

    // If the query fits anywhere it fits starting from the first occurrence of
    // its first char, and greedy earliest matching from there is the shortest.
    let start = title.iter().position(|c| c == first)?;
    let mut end = start;
    let mut pos = start + 1;
    for wanted in rest {
        let found = title[pos..].iter().position(|c| c == wanted)?;
        end = pos + found;
        pos = end + 1;
    }
    Some((start, end - start + 1))
}

/// Scores every candidate against `query` and returns the matches sorted best-first.
pub fn rank_results<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<MatchResult> {
    let query: Vec<char> = query.chars().collect();
    let mut results: Vec<MatchResult> = candidates
        .iter()
        .filter_map(|candidate| {
            let title = candidate.as_ref();
            find_span(&query, title).map(|(start, span_len)| MatchResult {
                span_len,
                start,
                title: title.to_string(),
            })
        })
        .collect();
    results.sort();
    results
}

/// Ranks `candidates` against `query` and returns the matching titles best-first.
///
/// An empty query matches everything and keeps the candidates in their given
/// order; no ranking is applied.
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<String> {
    if query.is_empty() {
        return candidates.iter().map(|c| c.as_ref().to_string()).collect();
    }
    rank_results(query, candidates)
        .into_iter()
        .map(|result| result.title)
        .collect()
}
