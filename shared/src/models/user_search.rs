use crate::dto::user::UserSuggestionDto;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

pub const MIN_QUERY_LEN: usize = 3;
pub const DEBOUNCE_MS: u32 = 300;
pub const MAX_SUGGESTIONS: usize = 10;
/// Query words shorter than this are not emphasised.
pub const MIN_HIGHLIGHT_LEN: usize = 2;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Identifies one dispatched search request. Only the most recent ticket is
/// allowed to update the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Query too short: hide the list and do not schedule anything.
    Hide,
    /// (Re)arm the debounce timer for this query.
    Schedule { query: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
    pub query: String,
}

/// Debounce and sequencing for the live user search.
///
/// Each keystroke replaces the pending query; the caller's timer fires it
/// once the input has been quiet for [`DEBOUNCE_MS`]. Responses are matched
/// against the last dispatched ticket so a slow early response cannot
/// overwrite a newer one.
#[derive(Debug, Default, Clone)]
pub struct SearchGate {
    pending: Option<String>,
    latest: u64,
}

impl SearchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_input(&mut self, raw: &str) -> SearchAction {
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            self.pending = None;
            // Anything still in flight belongs to a query that is gone.
            self.latest += 1;
            return SearchAction::Hide;
        }
        self.pending = Some(query.to_string());
        SearchAction::Schedule {
            query: query.to_string(),
        }
    }

    /// Fires the pending query; called when the debounce timer elapses.
    /// Only the last input before the timer counts, and a second call without
    /// new input fires nothing.
    pub fn fire(&mut self) -> Option<SearchRequest> {
        let query = self.pending.take()?;
        self.latest += 1;
        debug!("Dispatching user search #{} for '{}'", self.latest, query);
        Some(SearchRequest {
            ticket: SearchTicket(self.latest),
            query,
        })
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Returns the suggestions to show, or `None` when the response is stale.
    /// An empty vector means the list should be hidden.
    pub fn accept(
        &self,
        ticket: SearchTicket,
        mut users: Vec<UserSuggestionDto>,
    ) -> Option<Vec<UserSuggestionDto>> {
        if !self.is_current(ticket) {
            debug!("Dropping stale user search response #{}", ticket.0);
            return None;
        }
        users.truncate(MAX_SUGGESTIONS);
        Some(users)
    }
}

/// A run of suggestion text, emphasised or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// Splits `text` into plain and matched runs for every query word of at least
/// [`MIN_HIGHLIGHT_LEN`] characters. Matching ignores case and keeps the
/// casing of `text`.
pub fn highlight_match(text: &str, query: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for word in WHITESPACE.split(query.trim()) {
        if word.chars().count() < MIN_HIGHLIGHT_LEN {
            continue;
        }
        let Ok(pattern) = RegexBuilder::new(&regex::escape(word))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        ranges.extend(pattern.find_iter(text).map(|m| (m.start(), m.end())));
    }

    if ranges.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut segments = Vec::with_capacity(merged.len() * 2 + 1);
    let mut cursor = 0;
    for (start, end) in merged {
        if start > cursor {
            segments.push(Segment::Plain(text[cursor..start].to_string()));
        }
        segments.push(Segment::Match(text[start..end].to_string()));
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn user(id: u64) -> UserSuggestionDto {
        UserSuggestionDto {
            id,
            name: format!("User {}", id),
            email: format!("user{}@club.test", id),
            telephone: "912345678".to_string(),
        }
    }

    #[test]
    fn test_two_characters_never_schedule() {
        let mut gate = SearchGate::new();
        assert_eq!(gate.on_input("ab"), SearchAction::Hide);
        assert_eq!(gate.on_input("  ab  "), SearchAction::Hide);
        assert_eq!(gate.fire(), None);
    }

    #[test]
    fn test_burst_of_keystrokes_fires_last_query_once() {
        let mut gate = SearchGate::new();
        gate.on_input("ana");
        gate.on_input("ana c");
        assert_eq!(
            gate.on_input(" ana co "),
            SearchAction::Schedule { query: "ana co".to_string() }
        );

        let request = gate.fire().expect("pending query");
        assert_eq!(request.query, "ana co");
        assert_eq!(gate.fire(), None);
    }

    #[test]
    fn test_short_input_cancels_pending_query() {
        let mut gate = SearchGate::new();
        gate.on_input("ana");
        gate.on_input("an");
        assert_eq!(gate.fire(), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut gate = SearchGate::new();
        gate.on_input("ana");
        let first = gate.fire().unwrap();
        gate.on_input("anab");
        let second = gate.fire().unwrap();

        assert_eq!(gate.accept(first.ticket, vec![user(1)]), None);
        assert_eq!(gate.accept(second.ticket, vec![user(2)]), Some(vec![user(2)]));
    }

    #[test]
    fn test_shortening_query_invalidates_in_flight_request() {
        let mut gate = SearchGate::new();
        gate.on_input("ana");
        let request = gate.fire().unwrap();
        gate.on_input("an");
        assert!(!gate.is_current(request.ticket));
    }

    #[test]
    fn test_results_are_capped() {
        let mut gate = SearchGate::new();
        gate.on_input("user");
        let request = gate.fire().unwrap();
        let users = (0..25).map(user).collect();
        let shown = gate.accept(request.ticket, users).unwrap();
        assert_eq!(shown.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_highlight_keeps_original_case() {
        assert_eq!(
            highlight_match("Maria Santos", "mar san"),
            vec![
                Segment::Match("Mar".to_string()),
                Segment::Plain("ia ".to_string()),
                Segment::Match("San".to_string()),
                Segment::Plain("tos".to_string()),
            ]
        );
    }

    #[test]
    fn test_highlight_ignores_single_letters_and_escapes() {
        assert_eq!(
            highlight_match("J. Silva", "j"),
            vec![Segment::Plain("J. Silva".to_string())]
        );
        assert_eq!(
            highlight_match("a+b", "a+"),
            vec![Segment::Match("a+".to_string()), Segment::Plain("b".to_string())]
        );
        assert!(highlight_match("", "abc").is_empty());
    }

    #[test]
    fn test_highlight_merges_overlaps() {
        assert_eq!(
            highlight_match("Annabel", "ann nab"),
            vec![Segment::Match("Annab".to_string()), Segment::Plain("el".to_string())]
        );
    }
}
