use std::sync::Arc;

/// List state owned by one [`super::EntityController`].
///
/// `items` is only ever replaced wholesale, so an unchanged list keeps the
/// same `Arc` and callers may compare with [`Arc::ptr_eq`].
#[derive(Debug, Clone)]
pub struct EntityCollectionState<T> {
    pub items: Arc<Vec<T>>,
    /// Operations currently awaiting the adapter
    pub in_flight: u32,
    pub error: Option<String>,
}

impl<T> Default for EntityCollectionState<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            in_flight: 0,
            error: None,
        }
    }
}

impl<T> EntityCollectionState<T> {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Start of an operation: clears the previous error
    pub(super) fn begin(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    pub(super) fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub(super) fn fail(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(super) fn replace_items(&mut self, items: Vec<T>) {
        self.items = Arc::new(items);
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_follows_in_flight_count() {
        let mut state = EntityCollectionState::<i32>::default();
        assert!(!state.is_loading());

        state.begin();
        state.begin();
        state.finish();
        assert!(state.is_loading());
        state.finish();
        state.finish();
        assert!(!state.is_loading());
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_begin_clears_error() {
        let mut state = EntityCollectionState::<i32>::default();
        state.fail("boom".into());
        state.begin();
        assert!(state.error.is_none());
    }
}
