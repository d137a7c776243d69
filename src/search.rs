//! Search-box suggestions and the resolver that turns typed text into a
//! navigation target.
//!
//! Everything in here is pure so the dropdown can be tested without a DOM.
//! The Leptos components in `app::search_box` only translate DOM events into
//! [`SearchEvent`]s and hand the resulting [`NavigationTarget`] to the router.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Prefix shared by every results page.
pub const SEARCH_BASE: &str = "/search";
/// Route segment of the not-found results page.
pub const NOT_FOUND_ROUTE: &str = "404";

/// Characters `encodeURIComponent` leaves alone.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub text: &'static str, // lowercase keyword shown in the dropdown
    pub route: &'static str, // path segment under /search
    pub description: &'static str,
}

impl SuggestionEntry {
    pub fn href(&self) -> String {
        format!("{SEARCH_BASE}/{}", self.route)
    }
}

pub static SUGGESTIONS: &[SuggestionEntry] = &[
    SuggestionEntry {
        text: "about",
        route: "about",
        description: "Learn more about Kidhurshan",
    },
    SuggestionEntry {
        text: "projects",
        route: "projects",
        description: "See featured work and development portfolio",
    },
    SuggestionEntry {
        text: "skills",
        route: "skills",
        description: "Explore technical expertise and certifications",
    },
    SuggestionEntry {
        text: "contact",
        route: "contact",
        description: "Find ways to get in touch",
    },
];

/// Where a submitted search sends the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Route(&'static str),
    NotFound(String), // the raw query, shown back to the user
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route(route) => write!(f, "{SEARCH_BASE}/{route}"),
            Self::NotFound(query) => write!(
                f,
                "{SEARCH_BASE}/{NOT_FOUND_ROUTE}?q={}",
                utf8_percent_encode(query, QUERY_ENCODE_SET)
            ),
        }
    }
}

/// Entries whose keyword contains `raw_input`, ignoring case, in index order.
pub fn filter(raw_input: &str) -> Vec<&'static SuggestionEntry> {
    let needle = raw_input.to_lowercase();
    SUGGESTIONS
        .iter()
        .filter(|s| s.text.contains(&needle))
        .collect()
}

/// The suggestion whose page `pathname` is showing, if any.
pub fn current_tab(pathname: &str) -> Option<&'static SuggestionEntry> {
    let last = pathname.trim_end_matches('/').rsplit('/').next()?;
    SUGGESTIONS.iter().find(|s| s.route == last)
}

/// Decide where a submit goes.
///
/// A highlighted suggestion wins. Otherwise the first entry in table order
/// whose keyword contains the trimmed query, or is contained by it, is used.
/// Anything else lands on the not-found page with the untouched input.
pub fn resolve_submit(
    raw_input: &str,
    highlighted: Option<usize>,
    filtered: &[&'static SuggestionEntry],
) -> NavigationTarget {
    if let Some(entry) = highlighted.and_then(|i| filtered.get(i)) {
        return NavigationTarget::Route(entry.route);
    }
    let query = raw_input.trim().to_lowercase();
    if !query.is_empty() {
        let matched = SUGGESTIONS
            .iter()
            .find(|s| s.text.contains(&query) || query.contains(s.text));
        if let Some(entry) = matched {
            return NavigationTarget::Route(entry.route);
        }
    }
    NavigationTarget::NotFound(raw_input.to_string())
}

/// Input the dropdown reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Focus,
    Input(String),
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Pointer pressed over a suggestion or the clear button; the blur that
    /// follows must not close the panel before the click lands.
    SuggestionPointerDown,
    SuggestionClick(&'static str),
    /// Clear button. Empties the text without changing whether the panel is
    /// open; the view hands focus back to the input.
    Clear,
    Blur,
    ClickOutside,
    /// The router moved; seed the box with the text for the new page.
    Navigated(String),
}

impl SearchEvent {
    /// Map a `KeyboardEvent::key()` value. Other keys are left to the input.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowUp" => Some(Self::ArrowUp),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// State of one search box. Each view owns its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub raw_input: String,
    pub is_open: bool,
    pub highlighted: Option<usize>,
    pub pending_click: bool,
}

impl QueryState {
    pub fn new(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            ..Self::default()
        }
    }

    pub fn filtered(&self) -> Vec<&'static SuggestionEntry> {
        filter(&self.raw_input)
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted == Some(index)
    }

    /// Apply one event. Returns a target when the event ends in navigation.
    pub fn apply(&mut self, event: SearchEvent) -> Option<NavigationTarget> {
        match event {
            SearchEvent::Focus => {
                self.is_open = true;
                None
            }
            SearchEvent::Input(text) => {
                self.raw_input = text;
                self.is_open = true;
                self.clamp_highlight();
                None
            }
            SearchEvent::ArrowDown => {
                if self.is_open {
                    let len = self.filtered().len();
                    self.highlighted = match self.highlighted {
                        _ if len == 0 => None,
                        None => Some(0),
                        Some(i) => Some((i + 1).min(len - 1)),
                    };
                }
                None
            }
            SearchEvent::ArrowUp => {
                if self.is_open {
                    self.highlighted = match self.highlighted {
                        None | Some(0) => None,
                        Some(i) => Some(i - 1),
                    };
                }
                None
            }
            SearchEvent::Enter => {
                let target = resolve_submit(&self.raw_input, self.highlighted, &self.filtered());
                self.close();
                Some(target)
            }
            SearchEvent::Escape | SearchEvent::ClickOutside => {
                self.close();
                None
            }
            SearchEvent::SuggestionPointerDown => {
                self.pending_click = true;
                None
            }
            SearchEvent::SuggestionClick(route) => {
                self.close();
                Some(NavigationTarget::Route(route))
            }
            SearchEvent::Clear => {
                self.raw_input.clear();
                self.highlighted = None;
                self.pending_click = false;
                None
            }
            SearchEvent::Blur => {
                if !self.pending_click {
                    self.close();
                }
                None
            }
            SearchEvent::Navigated(text) => {
                *self = Self::new(text);
                None
            }
        }
    }

    fn close(&mut self) {
        self.is_open = false;
        self.highlighted = None;
        self.pending_click = false;
    }

    fn clamp_highlight(&mut self) {
        let len = self.filtered().len();
        if self.highlighted.is_some_and(|i| i >= len) {
            self.highlighted = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(entries: &[&SuggestionEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.text).collect()
    }

    fn open_with(input: &str) -> QueryState {
        let mut state = QueryState::default();
        state.apply(SearchEvent::Focus);
        state.apply(SearchEvent::Input(input.to_string()));
        state
    }

    #[test]
    fn test_filter_empty_returns_all_in_order() {
        assert_eq!(
            texts(&filter("")),
            vec!["about", "projects", "skills", "contact"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        assert_eq!(texts(&filter("PRO")), vec!["projects"]);
        assert_eq!(texts(&filter("T")), vec!["about", "projects", "contact"]);
    }

    #[test]
    fn test_filter_does_not_trim() {
        assert!(filter(" pro").is_empty());
    }

    #[test]
    fn test_scenario_prefix_submits_matching_route() {
        let filtered = filter("pro");
        assert_eq!(texts(&filtered), vec!["projects"]);
        let target = resolve_submit("pro", None, &filtered);
        assert_eq!(target.to_string(), "/search/projects");
    }

    #[test]
    fn test_scenario_unknown_query_goes_to_not_found() {
        let filtered = filter("xyz123");
        assert!(filtered.is_empty());
        let target = resolve_submit("xyz123", None, &filtered);
        assert_eq!(target, NavigationTarget::NotFound("xyz123".to_string()));
        assert_eq!(target.to_string(), "/search/404?q=xyz123");
    }

    #[test]
    fn test_scenario_highlight_wins_on_empty_input() {
        let filtered = filter("");
        let target = resolve_submit("", Some(2), &filtered);
        assert_eq!(target.to_string(), "/search/skills");
    }

    #[test]
    fn test_scenario_arrow_down_clamps_at_last() {
        let mut state = open_with("");
        for _ in 0..5 {
            state.apply(SearchEvent::ArrowDown);
        }
        assert_eq!(state.highlighted, Some(3));
    }

    #[test]
    fn test_highlight_out_of_bounds_falls_through() {
        let filtered = filter("pro");
        let target = resolve_submit("pro", Some(3), &filtered);
        assert_eq!(target, NavigationTarget::Route("projects"));
    }

    #[test]
    fn test_input_containing_keyword_matches() {
        let target = resolve_submit("  My Projects page ", None, &[]);
        assert_eq!(target, NavigationTarget::Route("projects"));
    }

    #[test]
    fn test_ambiguous_input_takes_first_in_table_order() {
        // "s" is inside projects, skills and contact; projects comes first
        assert_eq!(resolve_submit("s", None, &[]), NavigationTarget::Route("projects"));
        // "a" is inside about first
        assert_eq!(resolve_submit("a", None, &[]), NavigationTarget::Route("about"));
    }

    #[test]
    fn test_blank_input_goes_to_not_found_with_raw_query() {
        let target = resolve_submit("   ", None, &[]);
        assert_eq!(target.to_string(), "/search/404?q=%20%20%20");
        assert_eq!(resolve_submit("", None, &[]).to_string(), "/search/404?q=");
    }

    #[test]
    fn test_not_found_query_encoding() {
        let target = NavigationTarget::NotFound("rust & wasm?/(ok)!".to_string());
        assert_eq!(
            target.to_string(),
            "/search/404?q=rust%20%26%20wasm%3F%2F(ok)!"
        );
        let target = NavigationTarget::NotFound("café".to_string());
        assert_eq!(target.to_string(), "/search/404?q=caf%C3%A9");
    }

    #[test]
    fn test_arrow_up_clamps_at_none() {
        let mut state = open_with("");
        state.apply(SearchEvent::ArrowDown);
        state.apply(SearchEvent::ArrowDown);
        assert_eq!(state.highlighted, Some(1));
        state.apply(SearchEvent::ArrowUp);
        state.apply(SearchEvent::ArrowUp);
        state.apply(SearchEvent::ArrowUp);
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_arrows_ignored_while_closed() {
        let mut state = QueryState::default();
        state.apply(SearchEvent::ArrowDown);
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_arrow_down_on_empty_list_stays_none() {
        let mut state = open_with("zzz");
        state.apply(SearchEvent::ArrowDown);
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_typing_resets_out_of_range_highlight() {
        let mut state = open_with("");
        for _ in 0..3 {
            state.apply(SearchEvent::ArrowDown);
        }
        assert_eq!(state.highlighted, Some(2));
        state.apply(SearchEvent::Input("c".to_string()));
        // "c" leaves projects and contact
        assert_eq!(state.filtered().len(), 2);
        assert_eq!(state.highlighted, None);

        state.apply(SearchEvent::ArrowDown);
        state.apply(SearchEvent::Input("co".to_string()));
        assert_eq!(state.highlighted, Some(0));
    }

    #[test]
    fn test_enter_submits_highlighted_and_closes() {
        let mut state = open_with("t");
        state.apply(SearchEvent::ArrowDown);
        state.apply(SearchEvent::ArrowDown);
        let target = state.apply(SearchEvent::Enter);
        assert_eq!(target, Some(NavigationTarget::Route("projects")));
        assert!(!state.is_open);
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_escape_closes_without_navigating() {
        let mut state = open_with("ab");
        state.apply(SearchEvent::ArrowDown);
        assert_eq!(state.apply(SearchEvent::Escape), None);
        assert!(!state.is_open);
        assert_eq!(state.highlighted, None);
        assert_eq!(state.raw_input, "ab");
    }

    #[test]
    fn test_blur_respects_pending_click() {
        let mut state = open_with("");
        state.apply(SearchEvent::SuggestionPointerDown);
        state.apply(SearchEvent::Blur);
        assert!(state.is_open);

        let target = state.apply(SearchEvent::SuggestionClick("contact"));
        assert_eq!(target, Some(NavigationTarget::Route("contact")));
        assert!(!state.is_open);
        assert!(!state.pending_click);

        state.apply(SearchEvent::Focus);
        state.apply(SearchEvent::Blur);
        assert!(!state.is_open);
    }

    #[test]
    fn test_clear_button_keeps_focus_state() {
        let mut state = open_with("pro");
        state.apply(SearchEvent::ArrowDown);
        state.apply(SearchEvent::SuggestionPointerDown);
        state.apply(SearchEvent::Blur);
        state.apply(SearchEvent::Clear);
        assert!(state.is_open);
        assert_eq!(state.raw_input, "");
        assert_eq!(state.highlighted, None);
        assert!(!state.pending_click);

        // a later blur closes as usual
        state.apply(SearchEvent::Blur);
        assert!(!state.is_open);

        // clearing a closed box does not pop the list back up
        let mut state = QueryState::new("about");
        state.apply(SearchEvent::Clear);
        assert!(!state.is_open);
        assert_eq!(state.raw_input, "");
    }

    #[test]
    fn test_click_outside_clears_pending_click() {
        let mut state = open_with("");
        state.apply(SearchEvent::SuggestionPointerDown);
        state.apply(SearchEvent::ClickOutside);
        assert!(!state.is_open);
        assert!(!state.pending_click);
    }

    #[test]
    fn test_navigated_resets_state() {
        let mut state = open_with("sk");
        state.apply(SearchEvent::ArrowDown);
        state.apply(SearchEvent::Navigated("skills".to_string()));
        assert_eq!(state, QueryState::new("skills"));
    }

    #[test]
    fn test_current_tab() {
        assert_eq!(current_tab("/search/skills").map(|s| s.text), Some("skills"));
        assert_eq!(current_tab("/search/skills/").map(|s| s.text), Some("skills"));
        assert_eq!(current_tab("/search/404"), None);
        assert_eq!(current_tab("/"), None);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(SearchEvent::from_key("Enter"), Some(SearchEvent::Enter));
        assert_eq!(SearchEvent::from_key("Escape"), Some(SearchEvent::Escape));
        assert_eq!(SearchEvent::from_key("a"), None);
    }

    proptest! {
        #[test]
        fn filter_results_contain_lowercased_query(q in ".{0,12}") {
            let needle = q.to_lowercase();
            let results = filter(&q);
            prop_assert!(results.iter().all(|e| e.text.contains(&needle)));
            prop_assert_eq!(results, filter(&q));
        }

        #[test]
        fn resolve_submit_is_total(
            q in ".{0,16}",
            highlighted in proptest::option::of(0usize..8),
            filter_q in "[a-z]{0,3}",
        ) {
            let filtered = filter(&filter_q);
            let target = resolve_submit(&q, highlighted, &filtered);
            let path = target.to_string();
            prop_assert!(path.starts_with("/search/"));
            if let NavigationTarget::NotFound(raw) = &target {
                prop_assert_eq!(raw, &q);
            }
        }

        #[test]
        fn highlight_stays_in_bounds(keys in proptest::collection::vec(0u8..4, 0..24), q in "[a-z]{0,2}") {
            let mut state = open_with(&q);
            for k in keys {
                let event = match k {
                    0 => SearchEvent::ArrowDown,
                    1 => SearchEvent::ArrowUp,
                    2 => SearchEvent::Input(q.clone()),
                    _ => SearchEvent::Focus,
                };
                state.apply(event);
                let len = state.filtered().len();
                prop_assert!(state.highlighted.is_none_or(|i| i < len));
            }
        }
    }
}
