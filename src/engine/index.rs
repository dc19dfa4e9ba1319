use crate::model::{Candidate, Suggestion};

/// Default number of popup rows
pub const MAX_SUGGESTIONS: usize = 8;

/// Why a candidate matched a query. Variants are ordered by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    /// Title starts with the query
    TitlePrefix,
    /// Title contains the query (or one of its words starts with it)
    TitleContains,
    /// Only the body matched
    BodyOnly,
}

/// Read-only ranked view over the host's candidate list
#[derive(Debug, Clone, Copy)]
pub struct CandidateIndex<'a> {
    candidates: &'a [Candidate],
    limit: usize,
    trigger: char,
}

impl<'a> CandidateIndex<'a> {
    pub fn new(candidates: &'a [Candidate]) -> Self {
        CandidateIndex {
            candidates,
            limit: MAX_SUGGESTIONS,
            trigger: '@',
        }
    }

    /// Cap the number of returned suggestions (at least one)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Trigger used to build each suggestion's insertion text
    pub fn with_trigger(mut self, trigger: char) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn trigger(&self) -> char {
        self.trigger
    }

    pub fn candidates(&self) -> &'a [Candidate] {
        self.candidates
    }

    /// Ranked suggestions for `prefix`.
    ///
    /// An empty prefix yields the first candidates in host order. Otherwise
    /// candidates are filtered case-insensitively on title and body and
    /// stably sorted by [`MatchRank`].
    pub fn query(&self, prefix: &str) -> Vec<Suggestion> {
        if prefix.is_empty() {
            return self
                .candidates
                .iter()
                .take(self.limit)
                .map(|c| Suggestion::from_candidate(c, self.trigger))
                .collect();
        }

        let needle = prefix.to_lowercase();
        let mut ranked: Vec<(MatchRank, &Candidate)> = self
            .candidates
            .iter()
            .filter_map(|c| match_rank(c, &needle).map(|rank| (rank, c)))
            .collect();
        // sort_by_key is stable: equal ranks keep host order
        ranked.sort_by_key(|(rank, _)| *rank);

        ranked
            .into_iter()
            .take(self.limit)
            .map(|(_, c)| Suggestion::from_candidate(c, self.trigger))
            .collect()
    }

    /// Exact id lookup (used for paste interception)
    pub fn find_by_id(&self, id: &str) -> Option<&'a Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }
}

/// Rank a candidate against an already-lowercased needle, or `None` if it
/// doesn't match at all.
pub fn match_rank(candidate: &Candidate, needle: &str) -> Option<MatchRank> {
    let title = candidate.title.to_lowercase();
    if title.starts_with(needle) {
        return Some(MatchRank::TitlePrefix);
    }
    if title.contains(needle) || title.split_whitespace().any(|w| w.starts_with(needle)) {
        return Some(MatchRank::TitleContains);
    }
    let body_hit = candidate
        .body
        .as_deref()
        .is_some_and(|b| b.to_lowercase().contains(needle));
    body_hit.then_some(MatchRank::BodyOnly)
}
