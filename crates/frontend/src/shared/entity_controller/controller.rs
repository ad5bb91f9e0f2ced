use super::adapter::EntityServiceAdapter;
use super::state::EntityCollectionState;
use crate::shared::notifications::NotificationRelay;
use contracts::domain::common::{ActiveFlag, EntityRecord};
use contracts::shared::{ApiResponse, GENERIC_ERROR_MESSAGE};
use leptos::prelude::*;
use std::sync::Arc;

/// Generic list/CRUD controller for one entity type.
///
/// Owns the [`EntityCollectionState`]; every adapter failure is turned into
/// an `Err(message)` and, for list-affecting operations, into `error`.
/// Concurrent calls are neither queued nor deduplicated: the last response
/// to resolve wins.
pub struct EntityController<T: EntityRecord> {
    adapter: Arc<dyn EntityServiceAdapter<T>>,
    notifier: Arc<dyn NotificationRelay>,
    state: RwSignal<EntityCollectionState<T>>,
}

impl<T: EntityRecord> Clone for EntityController<T> {
    fn clone(&self) -> Self {
        Self {
            adapter: self.adapter.clone(),
            notifier: self.notifier.clone(),
            state: self.state,
        }
    }
}

/// Collapse transport and business failures into one message
fn settle<D>(entity: &str, op: &str, outcome: Result<ApiResponse<D>, String>) -> Result<D, String> {
    match outcome {
        Ok(response) => response.into_result(),
        Err(transport) => {
            log::error!("{} {}: transport failure: {}", entity, op, transport);
            if transport.trim().is_empty() {
                Err(GENERIC_ERROR_MESSAGE.to_string())
            } else {
                Err(transport)
            }
        }
    }
}

impl<T: EntityRecord> EntityController<T> {
    pub fn new(
        adapter: Arc<dyn EntityServiceAdapter<T>>,
        notifier: Arc<dyn NotificationRelay>,
    ) -> Self {
        Self {
            adapter,
            notifier,
            state: RwSignal::new(EntityCollectionState::default()),
        }
    }

    pub fn state(&self) -> Signal<EntityCollectionState<T>> {
        self.state.into()
    }

    pub fn items(&self) -> Signal<Arc<Vec<T>>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    fn begin(&self) {
        self.state.update(|s| s.begin());
    }

    fn finish(&self) {
        self.state.update(|s| s.finish());
    }

    fn fail(&self, message: &str) {
        self.state.update(|s| s.fail(message.to_string()));
    }

    /// Reload the whole collection.
    ///
    /// On failure the previous `items` are kept as-is.
    pub async fn fetch_all(&self) -> Result<Arc<Vec<T>>, String> {
        self.begin();
        let outcome = settle(T::list_name(), "fetch", self.adapter.get_all().await);
        let result = match outcome {
            Ok(items) => {
                let mut replaced = Arc::new(Vec::new());
                self.state.update(|s| {
                    s.replace_items(items);
                    replaced = s.items.clone();
                });
                Ok(replaced)
            }
            Err(message) => {
                log::warn!("{} fetch failed: {}", T::list_name(), message);
                self.fail(&message);
                Err(message)
            }
        };
        self.finish();
        result
    }

    /// One-shot read; never touches the list state
    pub async fn get_by_id(&self, id: i64) -> Result<T, String> {
        settle(T::element_name(), "read", self.adapter.get_by_id(id).await)
    }

    /// Create (identity 0) or update, then reload the list
    pub async fn save(&self, record: T) -> Result<T, String> {
        let op = if record.is_new() { "create" } else { "update" };
        log::debug!("{} {} {}", T::element_name(), op, record.identity());

        self.begin();
        let outcome = settle(T::element_name(), op, self.adapter.save(&record).await);
        let result = match outcome {
            Ok(saved) => {
                self.notifier
                    .notify_success(&format!("{} saved", T::element_name()));
                // list errors from the refresh stay in `error`; the save itself succeeded
                let _ = self.fetch_all().await;
                Ok(saved)
            }
            Err(message) => {
                self.notifier.notify_error(&message);
                self.fail(&message);
                Err(message)
            }
        };
        self.finish();
        result
    }

    /// Read the record, flip its active flag and save it.
    ///
    /// The whole read-then-write counts as one in-flight operation.
    pub async fn update_active_status(&self, id: i64, active: bool) -> Result<T, String> {
        self.begin();
        let result = match self.get_by_id(id).await {
            Ok(mut record) => {
                record.set_active_flag(ActiveFlag::from_bool(active));
                self.save(record).await
            }
            Err(message) => {
                self.notifier.notify_error(&message);
                self.fail(&message);
                Err(message)
            }
        };
        self.finish();
        result
    }

    pub async fn deactivate(&self, id: i64) -> Result<T, String> {
        self.update_active_status(id, false).await
    }

    /// Suggested code for a new record; does not touch state
    pub async fn get_next_code(&self, prefix: &str, pad_length: usize) -> Result<String, String> {
        settle(
            T::element_name(),
            "next code",
            self.adapter.get_next_code(prefix, pad_length).await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::LogRelay;
    use async_trait::async_trait;
    use contracts::domain::a001_payment_type::aggregate::PaymentType;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        GetAll,
        GetById(i64),
        Create,
        Update(i64),
        ActiveStatus(i64, bool),
        NextCode(String, usize),
    }

    type Gate = oneshot::Receiver<Result<ApiResponse<Vec<PaymentType>>, String>>;
    type ReadGate = oneshot::Receiver<Result<ApiResponse<PaymentType>, String>>;

    #[derive(Default)]
    struct FakeAdapter {
        calls: Mutex<Vec<Call>>,
        list: Mutex<Vec<Result<ApiResponse<Vec<PaymentType>>, String>>>,
        gates: Mutex<VecDeque<Gate>>,
        by_id: Mutex<Option<Result<ApiResponse<PaymentType>, String>>>,
        by_id_gate: Mutex<Option<ReadGate>>,
        save_fails: Mutex<Option<String>>,
        saved: Mutex<Vec<PaymentType>>,
    }

    impl FakeAdapter {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn queue_list(&self, response: Result<ApiResponse<Vec<PaymentType>>, String>) {
            self.list.lock().unwrap().push(response);
        }
    }

    #[async_trait(?Send)]
    impl EntityServiceAdapter<PaymentType> for FakeAdapter {
        async fn get_all(&self) -> Result<ApiResponse<Vec<PaymentType>>, String> {
            self.calls.lock().unwrap().push(Call::GetAll);
            let gate = self.gates.lock().unwrap().pop_front();
            if let Some(gate) = gate {
                return gate.await.unwrap_or_else(|_| Err("gate dropped".into()));
            }
            let mut list = self.list.lock().unwrap();
            if list.is_empty() {
                Ok(ApiResponse::ok(self.saved.lock().unwrap().clone()))
            } else {
                list.remove(0)
            }
        }

        async fn get_by_id(&self, id: i64) -> Result<ApiResponse<PaymentType>, String> {
            self.calls.lock().unwrap().push(Call::GetById(id));
            let gate = self.by_id_gate.lock().unwrap().take();
            if let Some(gate) = gate {
                return gate.await.unwrap_or_else(|_| Err("gate dropped".into()));
            }
            self.by_id
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| Ok(ApiResponse::fail("not found")))
        }

        async fn save(&self, record: &PaymentType) -> Result<ApiResponse<PaymentType>, String> {
            let call = if record.is_new() {
                Call::Create
            } else {
                Call::Update(record.identity())
            };
            self.calls.lock().unwrap().push(call);
            if let Some(message) = self.save_fails.lock().unwrap().clone() {
                return Ok(ApiResponse::fail(message));
            }
            let mut stored = record.clone();
            if stored.is_new() {
                stored.set_identity(100);
            }
            self.saved.lock().unwrap().push(stored.clone());
            Ok(ApiResponse::ok(stored))
        }

        async fn update_active_status(
            &self,
            id: i64,
            active: bool,
        ) -> Result<ApiResponse<()>, String> {
            self.calls.lock().unwrap().push(Call::ActiveStatus(id, active));
            Ok(ApiResponse::done())
        }

        async fn get_next_code(
            &self,
            prefix: &str,
            pad_length: usize,
        ) -> Result<ApiResponse<String>, String> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::NextCode(prefix.to_string(), pad_length));
            Ok(ApiResponse::ok(format!("{}{:0>width$}", prefix, 1, width = pad_length)))
        }
    }

    fn payment(id: i64, code: &str) -> PaymentType {
        PaymentType {
            pay_id: id,
            pay_code: code.into(),
            pay_name: format!("Payment {}", code),
            ..Default::default()
        }
    }

    fn controller(adapter: Arc<FakeAdapter>) -> EntityController<PaymentType> {
        EntityController::new(adapter, Arc::new(LogRelay))
    }

    #[tokio::test]
    async fn test_zero_identity_creates_and_nonzero_updates() {
        let adapter = Arc::new(FakeAdapter::default());
        let ctl = controller(adapter.clone());

        ctl.save(payment(0, "PAY001")).await.unwrap();
        ctl.save(payment(7, "PAY007")).await.unwrap();

        let calls = adapter.calls();
        assert!(calls.contains(&Call::Create));
        assert!(calls.contains(&Call::Update(7)));
        assert!(!calls.contains(&Call::Update(0)));
    }

    #[tokio::test]
    async fn test_save_then_refresh_in_order() {
        let adapter = Arc::new(FakeAdapter::default());
        let ctl = controller(adapter.clone());

        let saved = ctl.save(payment(0, "PAY001")).await.unwrap();
        assert_eq!(saved.identity(), 100);
        assert_eq!(adapter.calls(), vec![Call::Create, Call::GetAll]);

        let items = ctl.items().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].pay_code, "PAY001");
        assert!(!ctl.is_loading().get_untracked());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_items() {
        let adapter = Arc::new(FakeAdapter::default());
        adapter.queue_list(Ok(ApiResponse::ok(vec![payment(1, "PAY001")])));
        adapter.queue_list(Ok(ApiResponse::fail("database offline")));
        adapter.queue_list(Err(String::new()));
        let ctl = controller(adapter);

        ctl.fetch_all().await.unwrap();
        let before = ctl.items().get_untracked();

        assert_eq!(ctl.fetch_all().await, Err("database offline".to_string()));
        assert!(Arc::ptr_eq(&before, &ctl.items().get_untracked()));
        assert_eq!(ctl.error().get_untracked().as_deref(), Some("database offline"));
        assert!(!ctl.is_loading().get_untracked());

        // transport failure without a message falls back to the generic one
        assert!(ctl.fetch_all().await.is_err());
        assert!(Arc::ptr_eq(&before, &ctl.items().get_untracked()));
        assert_eq!(ctl.error().get_untracked().as_deref(), Some(GENERIC_ERROR_MESSAGE));
        assert!(!ctl.is_loading().get_untracked());
    }

    #[tokio::test]
    async fn test_successful_fetch_clears_error() {
        let adapter = Arc::new(FakeAdapter::default());
        adapter.queue_list(Ok(ApiResponse::fail("boom")));
        let ctl = controller(adapter);

        assert!(ctl.fetch_all().await.is_err());
        assert!(ctl.error().get_untracked().is_some());
        ctl.fetch_all().await.unwrap();
        assert!(ctl.error().get_untracked().is_none());
    }

    #[tokio::test]
    async fn test_failed_read_skips_write() {
        let adapter = Arc::new(FakeAdapter::default());
        adapter.queue_list(Ok(ApiResponse::ok(vec![payment(42, "PAY042")])));
        let ctl = controller(adapter.clone());
        ctl.fetch_all().await.unwrap();
        let before = ctl.items().get_untracked();

        let result = ctl.update_active_status(42, false).await;

        assert_eq!(result, Err("not found".to_string()));
        assert_eq!(adapter.calls(), vec![Call::GetAll, Call::GetById(42)]);
        assert_eq!(ctl.error().get_untracked().as_deref(), Some("not found"));
        assert!(Arc::ptr_eq(&before, &ctl.items().get_untracked()));
    }

    #[tokio::test]
    async fn test_update_active_status_flips_flag_and_saves() {
        let adapter = Arc::new(FakeAdapter::default());
        *adapter.by_id.lock().unwrap() = Some(Ok(ApiResponse::ok(payment(42, "PAY042"))));
        let ctl = controller(adapter.clone());

        let saved = ctl.deactivate(42).await.unwrap();

        assert_eq!(saved.active_flag(), ActiveFlag::No);
        assert_eq!(
            adapter.calls(),
            vec![Call::GetById(42), Call::Update(42), Call::GetAll]
        );
    }

    #[tokio::test]
    async fn test_failed_save_keeps_items() {
        let adapter = Arc::new(FakeAdapter::default());
        adapter.queue_list(Ok(ApiResponse::ok(vec![payment(1, "PAY001")])));
        let ctl = controller(adapter.clone());
        ctl.fetch_all().await.unwrap();
        let before = ctl.items().get_untracked();
        *adapter.save_fails.lock().unwrap() = Some("Code already exists".into());

        let result = ctl.save(payment(0, "PAY001")).await;

        assert_eq!(result, Err("Code already exists".to_string()));
        assert!(Arc::ptr_eq(&before, &ctl.items().get_untracked()));
        assert_eq!(adapter.calls().last(), Some(&Call::Create));
        assert!(!ctl.is_loading().get_untracked());
    }

    async fn wait_for_calls(adapter: &FakeAdapter, count: usize) {
        while adapter.calls().len() < count {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_last_response_to_resolve_wins() {
        let adapter = Arc::new(FakeAdapter::default());
        let (older_tx, older_rx) = oneshot::channel();
        let (newer_tx, newer_rx) = oneshot::channel();
        adapter.gates.lock().unwrap().push_back(older_rx);
        adapter.gates.lock().unwrap().push_back(newer_rx);
        let ctl = controller(adapter.clone());

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let older = tokio::task::spawn_local({
                    let ctl = ctl.clone();
                    async move { ctl.fetch_all().await }
                });
                wait_for_calls(&adapter, 1).await;
                let newer = tokio::task::spawn_local({
                    let ctl = ctl.clone();
                    async move { ctl.fetch_all().await }
                });
                wait_for_calls(&adapter, 2).await;
                assert!(ctl.is_loading().get_untracked());

                let _ = newer_tx.send(Ok(ApiResponse::ok(vec![payment(2, "NEW")])));
                newer.await.unwrap().unwrap();
                assert_eq!(ctl.items().get_untracked()[0].pay_code, "NEW");
                assert!(ctl.is_loading().get_untracked());

                let _ = older_tx.send(Ok(ApiResponse::ok(vec![payment(1, "OLD")])));
                older.await.unwrap().unwrap();
                // the older request resolved last, so its list is what remains
                assert_eq!(ctl.items().get_untracked()[0].pay_code, "OLD");
                assert!(!ctl.is_loading().get_untracked());
            })
            .await;
    }

    #[tokio::test]
    async fn test_active_status_read_counts_as_loading() {
        let adapter = Arc::new(FakeAdapter::default());
        adapter.queue_list(Ok(ApiResponse::fail("stale failure")));
        let (read_tx, read_rx) = oneshot::channel();
        *adapter.by_id_gate.lock().unwrap() = Some(read_rx);
        let ctl = controller(adapter.clone());
        assert!(ctl.fetch_all().await.is_err());

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let toggle = tokio::task::spawn_local({
                    let ctl = ctl.clone();
                    async move { ctl.update_active_status(42, false).await }
                });
                wait_for_calls(&adapter, 2).await;
                assert_eq!(adapter.calls().last(), Some(&Call::GetById(42)));
                assert!(ctl.is_loading().get_untracked());
                assert!(ctl.error().get_untracked().is_none());

                let _ = read_tx.send(Ok(ApiResponse::ok(payment(42, "PAY042"))));
                let saved = toggle.await.unwrap().unwrap();
                assert_eq!(saved.active_flag(), ActiveFlag::No);
                assert!(!ctl.is_loading().get_untracked());
            })
            .await;
    }

    #[tokio::test]
    async fn test_next_code_is_stateless() {
        let adapter = Arc::new(FakeAdapter::default());
        let ctl = controller(adapter.clone());
        let before = ctl.items().get_untracked();

        assert_eq!(ctl.get_next_code("PAY", 3).await, Ok("PAY001".to_string()));
        assert_eq!(adapter.calls(), vec![Call::NextCode("PAY".into(), 3)]);
        assert!(Arc::ptr_eq(&before, &ctl.items().get_untracked()));
        assert!(!ctl.is_loading().get_untracked());
    }
}
