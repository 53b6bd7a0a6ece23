use addressfill_core::fields::FieldNameResolver;
use addressfill_core::form::FormDocument;
use addressfill_core::types::{AddressQuery, ResolvedAddress, Suggestion};
use tracing::debug;

use crate::config::AutocompleteOptions;
use crate::source::AddressSource;

/// Widget lifecycle states. Every transition is re-entrant on a new
/// keystroke: fresh input from any state issues a fresh search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Querying,
    ShowingSuggestions,
    Selected,
    Dismissed,
}

/// Keys the navigate-before hook distinguishes while the list is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    ArrowUp,
    ArrowDown,
    Other,
}

/// Typed replacement for the original widget callback set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteEvent {
    Input(String),
    NavigateBefore(NavigationKey),
    ClickAfter(usize),
    Submit,
}

/// A search that has been issued but not yet applied. Carries the ordinal
/// used for stale-response suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub query: AddressQuery,
}

/// Binds one trigger input to a suggestion source and its form, owning the
/// widget lifecycle: issue searches per keystroke, keep only the freshest
/// response visible, and on a committed selection retrieve the structured
/// address and fill the sibling fields.
pub struct AutocompleteController<S, F> {
    source: S,
    form: F,
    options: AutocompleteOptions,
    resolver: FieldNameResolver,
    state: WidgetState,
    seq: u64,
    suggestions: Vec<Suggestion>,
    highlight: Option<usize>,
}

impl<S: AddressSource, F: FormDocument> AutocompleteController<S, F> {
    /// Binds the trigger input. Diagnostic only; no search fires until the
    /// first input event.
    pub fn attach(source: S, form: F, options: AutocompleteOptions) -> Self {
        debug!(input = %options.input_name, "autocomplete attached");
        let resolver = FieldNameResolver::new(options.line1_suffix.clone());
        Self {
            source,
            form,
            options,
            resolver,
            state: WidgetState::Idle,
            seq: 0,
            suggestions: Vec::new(),
            highlight: None,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<&Suggestion> {
        self.highlight.and_then(|i| self.suggestions.get(i))
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn into_form(self) -> F {
        self.form
    }

    /// Starts a new search for the current input text. Below the minimum
    /// length the list closes instead and nothing is issued.
    pub fn handle_input(&mut self, text: &str) -> Option<PendingSearch> {
        if text.chars().count() < self.options.min_chars {
            self.suggestions.clear();
            self.highlight = None;
            self.state = WidgetState::Idle;
            return None;
        }
        self.seq += 1;
        self.state = WidgetState::Querying;
        Some(PendingSearch {
            seq: self.seq,
            query: AddressQuery::new(text),
        })
    }

    /// Runs a pending search to completion and applies it, unless a newer
    /// search superseded it while the request was in flight.
    pub async fn run_search(&mut self, pending: PendingSearch) -> bool {
        let items = self.source.search(&pending.query.text).await;
        self.apply_search(pending.seq, items)
    }

    /// Applies a search response. Only the most recently issued search may
    /// update the visible list; older responses are discarded by ordinal
    /// comparison, with no cancellation of the requests themselves.
    pub fn apply_search(&mut self, seq: u64, items: Vec<Suggestion>) -> bool {
        if seq != self.seq {
            debug!(seq, latest = self.seq, "discarding stale search response");
            return false;
        }
        self.suggestions = items;
        self.highlight = None;
        self.state = WidgetState::ShowingSuggestions;
        true
    }

    /// Arrow keys move the highlight without echoing suggestion text into
    /// the input; the returned flag tells the host to suppress the key's
    /// default text mutation. Text is committed only by a selection.
    pub fn handle_navigate_before(&mut self, key: NavigationKey) -> bool {
        if self.state != WidgetState::ShowingSuggestions || self.suggestions.is_empty() {
            return false;
        }
        match key {
            NavigationKey::ArrowDown => {
                self.highlight = Some(match self.highlight {
                    Some(i) if i + 1 < self.suggestions.len() => i + 1,
                    Some(i) => i,
                    None => 0,
                });
                true
            }
            NavigationKey::ArrowUp => {
                self.highlight = match self.highlight {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
                true
            }
            NavigationKey::Other => false,
        }
    }

    /// Commits the suggestion at `index`: echoes its text into the trigger
    /// input and, iff the suggestion is retrievable, resolves the full
    /// address and fills the sibling fields. At-most-once per selection, no
    /// retry; a later search does not cancel an in-flight retrieve.
    /// Resolution failures and missing sibling fields write nothing, leaving
    /// earlier values untouched.
    pub async fn handle_click_after(&mut self, index: usize) {
        let Some(suggestion) = self.suggestions.get(index).cloned() else {
            return;
        };
        self.form.set_value(&self.options.input_name, &suggestion.text);
        self.suggestions.clear();
        self.highlight = None;
        self.state = WidgetState::Selected;

        if !suggestion.is_retrievable {
            return;
        }
        let address = match self.source.resolve(&suggestion.id).await {
            Ok(Some(address)) => address,
            Ok(None) => {
                debug!(id = %suggestion.id, "retrieve returned no records");
                return;
            }
            Err(err) => {
                debug!(id = %suggestion.id, "retrieve failed: {err}");
                return;
            }
        };
        self.fill_fields(&address);
    }

    fn fill_fields(&mut self, address: &ResolvedAddress) {
        let Some(mapping) = self.resolver.mapping(&self.options.input_name) else {
            debug!(input = %self.options.input_name, "trigger name shorter than its suffix");
            return;
        };
        for (name, value) in mapping.writes(address) {
            if !self.form.set_value(name, value) {
                debug!(field = name, "form has no such field, skipped");
            }
        }
    }

    /// Closes the list without committing a selection.
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
        self.highlight = None;
        self.state = WidgetState::Dismissed;
    }

    /// Diagnostic hook mirroring the widget's submit callback.
    pub fn handle_submit(&mut self) {
        debug!(input = %self.options.input_name, "form submitted with widget attached");
        self.state = WidgetState::Idle;
    }

    /// One display line per suggestion, joining the configured fields.
    pub fn display_lines(&self) -> Vec<String> {
        self.suggestions
            .iter()
            .map(|s| self.display_line(s))
            .collect()
    }

    fn display_line(&self, suggestion: &Suggestion) -> String {
        let parts: Vec<&str> = self
            .options
            .display
            .iter()
            .filter_map(|field| match field.as_str() {
                "Text" => Some(suggestion.text.as_str()),
                "Description" => Some(suggestion.description.as_str()),
                "Id" => Some(suggestion.id.as_str()),
                _ => None,
            })
            .filter(|part| !part.is_empty())
            .collect();
        parts.join(", ")
    }

    /// Dispatch for hosts that feed raw events and have no use for the
    /// split issue/apply steps.
    pub async fn handle_event(&mut self, event: AutocompleteEvent) {
        match event {
            AutocompleteEvent::Input(text) => {
                if let Some(pending) = self.handle_input(&text) {
                    self.run_search(pending).await;
                }
            }
            AutocompleteEvent::NavigateBefore(key) => {
                self.handle_navigate_before(key);
            }
            AutocompleteEvent::ClickAfter(index) => self.handle_click_after(index).await,
            AutocompleteEvent::Submit => self.handle_submit(),
        }
    }
}
