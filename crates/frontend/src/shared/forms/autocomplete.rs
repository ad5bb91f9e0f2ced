use super::descriptor::FieldOption;
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type SuggestionFuture = Pin<Box<dyn Future<Output = Result<Vec<FieldOption>, String>>>>;

/// Asynchronous suggestion source keyed on the current input text
pub type SuggestionFetcher = Arc<dyn Fn(String) -> SuggestionFuture + Send + Sync>;

/// Transient text buffer and suggestion list of one autocomplete field
#[derive(Clone, Copy)]
pub struct SuggestionState {
    pub input: RwSignal<String>,
    pub suggestions: RwSignal<Vec<FieldOption>>,
}

impl SuggestionState {
    pub fn new(initial: String) -> Self {
        Self {
            input: RwSignal::new(initial),
            suggestions: RwSignal::new(Vec::new()),
        }
    }

    /// Record `input` and refresh suggestions for it.
    ///
    /// Nothing is fetched for blank input. A failed fetch clears the list
    /// instead of surfacing an error, and a response for text the user has
    /// already replaced is dropped.
    pub async fn refresh(&self, input: String, fetcher: &SuggestionFetcher) {
        self.input.set(input.clone());
        let query = input.trim().to_string();
        if query.is_empty() {
            self.suggestions.set(Vec::new());
            return;
        }

        match fetcher(query).await {
            Ok(list) => {
                if self.input.get_untracked() == input {
                    self.suggestions.set(list);
                }
            }
            Err(e) => {
                log::warn!("suggestion fetch failed: {}", e);
                self.suggestions.set(Vec::new());
            }
        }
    }

    /// Synchronous variant over static options
    pub fn refresh_from(&self, input: String, options: &[FieldOption]) {
        let list = filter_options(options, &input);
        self.input.set(input);
        self.suggestions.set(list);
    }

    /// Accept a suggestion: the buffer takes its label and the list closes
    pub fn accept(&self, option: &FieldOption) {
        self.input.set(option.label.clone());
        self.suggestions.set(Vec::new());
    }

    /// Follow an external change of the bound value.
    ///
    /// Text the buffer already shows is left alone together with its
    /// suggestions; any other value replaces the buffer and closes the list.
    pub fn sync(&self, value: &str) {
        if self.input.with_untracked(|input| input != value) {
            self.input.set(value.to_string());
            self.suggestions.set(Vec::new());
        }
    }

    pub fn clear(&self) {
        self.suggestions.set(Vec::new());
    }
}

/// Case-insensitive substring match on option labels; blank input matches nothing
pub fn filter_options(options: &[FieldOption], input: &str) -> Vec<FieldOption> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_fetcher(
        calls: Arc<AtomicUsize>,
        result: Result<Vec<FieldOption>, String>,
    ) -> SuggestionFetcher {
        Arc::new(move |_query: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            let result = result.clone();
            Box::pin(async move { result }) as SuggestionFuture
        })
    }

    #[tokio::test]
    async fn test_rejected_fetch_clears_suggestions() {
        let state = SuggestionState::new(String::new());
        state.suggestions.set(vec![FieldOption::new("old", "Old")]);

        let calls = Arc::new(AtomicUsize::new(0));
        let fetcher = counting_fetcher(calls.clone(), Err("network down".into()));
        state.refresh("ab".into(), &fetcher).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(state.suggestions.get_untracked().is_empty());
        assert_eq!(state.input.get_untracked(), "ab");
    }

    #[tokio::test]
    async fn test_blank_input_never_fetches() {
        let state = SuggestionState::new(String::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let fetcher = counting_fetcher(calls.clone(), Ok(vec![FieldOption::new("a", "A")]));

        state.refresh("   ".into(), &fetcher).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(state.suggestions.get_untracked().is_empty());
    }

    #[tokio::test]
    async fn test_successful_fetch_populates() {
        let state = SuggestionState::new(String::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let found = vec![FieldOption::new("1", "After food")];
        let fetcher = counting_fetcher(calls, Ok(found.clone()));

        state.refresh("aft".into(), &fetcher).await;
        assert_eq!(state.suggestions.get_untracked(), found);

        state.accept(&found[0]);
        assert_eq!(state.input.get_untracked(), "After food");
        assert!(state.suggestions.get_untracked().is_empty());
    }

    #[test]
    fn test_buffer_follows_form_reset() {
        use crate::shared::forms::binding::FormContext;
        use crate::shared::forms::value::FieldValue;
        use std::collections::HashMap;

        let field = "minsDescription".to_string();
        let form = FormContext::new(HashMap::from([(field.clone(), FieldValue::text("Before food"))]));
        let state = SuggestionState::new(form.value(&field).as_input_string());
        state.suggestions.set(vec![FieldOption::new("MI0001", "Before food")]);

        form.reset(HashMap::from([(field.clone(), FieldValue::text("After food"))]));
        state.sync(&form.value(&field).as_input_string());
        assert_eq!(state.input.get_untracked(), "After food");
        assert!(state.suggestions.get_untracked().is_empty());

        form.reset(HashMap::new());
        state.sync(&form.value(&field).as_input_string());
        assert_eq!(state.input.get_untracked(), "");
    }

    #[test]
    fn test_sync_keeps_suggestions_for_typed_text() {
        let state = SuggestionState::new(String::new());
        let found = vec![FieldOption::new("1", "After food")];
        state.refresh_from("aft".into(), &found);

        state.sync("aft");
        assert_eq!(state.suggestions.get_untracked(), found);
    }

    #[test]
    fn test_filter_options() {
        let options = vec![FieldOption::new("1", "Before food"), FieldOption::new("2", "At bedtime")];
        assert_eq!(filter_options(&options, "FOOD").len(), 1);
        assert!(filter_options(&options, " ").is_empty());
    }
}
