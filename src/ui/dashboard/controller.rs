//! Dashboard controller
//!
//! Owns the dashboard state and the API client bound to the current credential.
//! Network calls run on spawned tasks and report back through an event channel;
//! their results are only applied to the state from the UI loop.

use super::state::DashboardState;
use crate::api::{AdminApi, ClientFactory};
use crate::events::Event as WorkerEvent;
use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct DashboardController {
    state: DashboardState,
    /// Rebuilds the client whenever the credential changes.
    connect: ClientFactory,
    /// Client bound to `state.credential`.
    client: Arc<dyn AdminApi>,
    event_sender: mpsc::UnboundedSender<WorkerEvent>,
    event_receiver: mpsc::UnboundedReceiver<WorkerEvent>,
}

impl DashboardController {
    pub fn new(state: DashboardState, connect: ClientFactory) -> Self {
        let client = connect(state.credential.as_deref());
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        Self {
            state,
            connect,
            client,
            event_sender,
            event_receiver,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Advance per-frame state (animation tick).
    pub fn tick(&mut self) {
        self.state.update();
    }

    pub fn push_login_char(&mut self, c: char) {
        self.state.login_input.push(c);
    }

    pub fn pop_login_char(&mut self) {
        self.state.login_input.pop();
    }

    /// Use the login form's input as the credential. An empty form stays locked.
    ///
    /// The password is not checked here; a wrong one only shows up as failing loads.
    pub fn submit_login(&mut self) {
        let input = self.state.login_input.clone();
        self.set_credential(Some(input));
    }

    /// Replace the credential. On change, rebinds the client and loads data once.
    ///
    /// An empty password counts as no credential. Returns `false` if the credential
    /// is unchanged, in which case nothing happens.
    pub fn set_credential(&mut self, credential: Option<String>) -> bool {
        let credential = credential.filter(|password| !password.is_empty());
        if self.state.credential == credential {
            return false;
        }
        self.state.credential = credential;
        self.client = (self.connect)(self.state.credential.as_deref());
        self.load_data();
        true
    }

    /// Fetch the watchlist and the jobs concurrently.
    ///
    /// No-op without a credential. Overlapping loads are not cancelled; whichever
    /// completes last determines the displayed data.
    pub fn load_data(&mut self) -> bool {
        if self.state.credential.is_none() {
            return false;
        }
        self.state.loading = true;

        let client = Arc::clone(&self.client);
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let result = futures::try_join!(client.get_watchlist(), client.get_jobs());
            let _ = sender.send(WorkerEvent::DataLoaded(result));
        });
        true
    }

    /// Operator-requested reload.
    pub fn refresh(&mut self) -> bool {
        self.load_data()
    }

    /// Trigger a pipeline run, reloading data once the backend accepts it.
    ///
    /// No-op without a credential. Does not touch the loading flag.
    pub fn run_pipeline(&mut self) -> bool {
        if self.state.credential.is_none() {
            return false;
        }

        let client = Arc::clone(&self.client);
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let result = client.run_pipeline().await;
            let _ = sender.send(WorkerEvent::PipelineRun(result));
        });
        true
    }

    /// Apply one completed background result to the state.
    pub fn apply_event(&mut self, event: WorkerEvent) {
        debug!(
            "Applying {} event (success: {})",
            event.event_type(),
            event.is_success()
        );
        match event {
            WorkerEvent::DataLoaded(result) => self.state.apply_loaded(result),
            WorkerEvent::PipelineRun(Ok(())) => {
                info!("Pipeline run triggered");
                self.load_data();
            }
            WorkerEvent::PipelineRun(Err(e)) => {
                error!("Failed to trigger pipeline run: {}", e);
            }
        }
    }

    /// Apply every result that has already arrived, without waiting. Returns how many were applied.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next background result and apply it.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_receiver.recv().await {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAdminApi;
    use crate::api::error::ApiError;
    use crate::environment::Environment;
    use crate::models::{Job, Ticker};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::SessionState;
    use std::sync::Mutex;
    use std::time::Duration;

    type Connections = Arc<Mutex<Vec<Option<String>>>>;

    fn aapl() -> Ticker {
        Ticker {
            id: 1,
            symbol: "AAPL".to_string(),
            market: "NASDAQ".to_string(),
            active: true,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn msft() -> Ticker {
        Ticker {
            id: 2,
            symbol: "MSFT".to_string(),
            market: "NASDAQ".to_string(),
            active: false,
            created_at: "2024-01-02T00:00:00Z".to_string(),
        }
    }

    fn finished_job(id: i64) -> Job {
        Job {
            id,
            started_at: "2024-01-01T00:00:00Z".to_string(),
            finished_at: Some("2024-01-01T00:05:00Z".to_string()),
            status: "SUCCESS".to_string(),
            summary: Some("1 ticker processed".to_string()),
        }
    }

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    /// Controller whose credentialed client is `api`. Calls without a credential hit a
    /// mock with no expectations, so any request there fails the test.
    fn controller_with(api: MockAdminApi) -> (DashboardController, Connections) {
        let connections: Connections = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&connections);
        let api: Arc<dyn AdminApi> = Arc::new(api);
        let connect: ClientFactory = Box::new(move |credential| {
            recorded
                .lock()
                .unwrap()
                .push(credential.map(str::to_string));
            match credential {
                Some(_) => Arc::clone(&api),
                None => Arc::new(MockAdminApi::new()),
            }
        });
        let state = DashboardState::new(Environment::Local, UIConfig::new(false));
        (DashboardController::new(state, connect), connections)
    }

    async fn next_event(controller: &mut DashboardController) {
        let processed = tokio::time::timeout(Duration::from_secs(2), controller.process_next_event())
            .await
            .expect("timed out waiting for a background result");
        assert!(processed);
    }

    fn type_login(controller: &mut DashboardController, input: &str) {
        for c in input.chars() {
            controller.push_login_char(c);
        }
    }

    #[tokio::test]
    // Without a credential neither loading nor running issues a request.
    async fn test_no_credential_is_noop() {
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist().never();
        api.expect_get_jobs().never();
        api.expect_run_pipeline().never();
        let (mut controller, _) = controller_with(api);

        assert!(!controller.load_data());
        assert!(!controller.refresh());
        assert!(!controller.run_pipeline());
        assert!(!controller.state().loading);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(controller.drain_events(), 0);
        assert!(controller.state().tickers.is_empty());
    }

    #[tokio::test]
    // Submitting the form unlocks and triggers exactly one load with that credential.
    async fn test_submit_login_unlocks_and_loads_once() {
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist()
            .times(1)
            .returning(|| Ok(vec![aapl()]));
        api.expect_get_jobs().times(1).returning(|| Ok(Vec::new()));
        let (mut controller, connections) = controller_with(api);
        assert_eq!(controller.state().session_state(), SessionState::Locked);

        type_login(&mut controller, "secret1");
        controller.submit_login();

        assert_eq!(controller.state().session_state(), SessionState::Unlocked);
        assert_eq!(controller.state().credential.as_deref(), Some("secret1"));
        assert!(controller.state().loading);
        assert_eq!(
            *connections.lock().unwrap(),
            vec![None, Some("secret1".to_string())]
        );

        next_event(&mut controller).await;

        assert!(!controller.state().loading);
        assert_eq!(controller.state().tickers, vec![aapl()]);
        assert!(controller.state().jobs.is_empty());
    }

    #[tokio::test]
    // Submitting an empty form keeps the dashboard locked and sends nothing.
    async fn test_empty_submit_stays_locked() {
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist().never();
        api.expect_get_jobs().never();
        api.expect_run_pipeline().never();
        let (mut controller, connections) = controller_with(api);

        controller.submit_login();

        assert!(controller.state().is_locked());
        assert_eq!(controller.state().credential, None);
        assert!(!controller.state().loading);
        assert!(!controller.set_credential(Some(String::new())));
        assert!(!controller.run_pipeline());
        assert_eq!(*connections.lock().unwrap(), vec![None]);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(controller.drain_events(), 0);
    }

    #[tokio::test]
    // Re-applying the same credential does not reconnect or reload.
    async fn test_same_credential_does_not_reload() {
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist().times(1).returning(|| Ok(Vec::new()));
        api.expect_get_jobs().times(1).returning(|| Ok(Vec::new()));
        let (mut controller, connections) = controller_with(api);

        assert!(controller.set_credential(Some("pw1".to_string())));
        next_event(&mut controller).await;
        assert!(!controller.set_credential(Some("pw1".to_string())));

        assert!(!controller.state().loading);
        assert_eq!(connections.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    // Payloads are stored exactly as returned, order included.
    async fn test_successful_load_preserves_order() {
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist()
            .returning(|| Ok(vec![msft(), aapl()]));
        api.expect_get_jobs()
            .returning(|| Ok(vec![finished_job(9), finished_job(3)]));
        let (mut controller, _) = controller_with(api);

        controller.set_credential(Some("pw1".to_string()));
        next_event(&mut controller).await;

        assert_eq!(controller.state().tickers, vec![msft(), aapl()]);
        assert_eq!(
            controller.state().jobs,
            vec![finished_job(9), finished_job(3)]
        );
    }

    #[tokio::test]
    // If one read fails, neither collection changes.
    async fn test_failed_read_keeps_previous_collections() {
        let mut watchlist_calls = 0;
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist().times(2).returning(move || {
            watchlist_calls += 1;
            if watchlist_calls == 1 {
                Ok(vec![aapl()])
            } else {
                Ok(vec![msft()])
            }
        });
        let mut jobs_calls = 0;
        api.expect_get_jobs().times(2).returning(move || {
            jobs_calls += 1;
            if jobs_calls == 1 {
                Ok(vec![finished_job(1)])
            } else {
                Err(server_error())
            }
        });
        let (mut controller, _) = controller_with(api);

        controller.set_credential(Some("pw1".to_string()));
        next_event(&mut controller).await;
        assert_eq!(controller.state().tickers, vec![aapl()]);

        assert!(controller.refresh());
        assert!(controller.state().loading);
        next_event(&mut controller).await;

        assert!(!controller.state().loading);
        assert_eq!(controller.state().tickers, vec![aapl()]);
        assert_eq!(controller.state().jobs, vec![finished_job(1)]);
        assert_eq!(controller.state().session_state(), SessionState::Unlocked);
    }

    #[tokio::test]
    // A rejected password behaves like any other failure: stay unlocked, keep data.
    async fn test_auth_failure_does_not_relock() {
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist().returning(|| {
            Err(ApiError::Http {
                status: 401,
                message: "Invalid admin password".to_string(),
            })
        });
        api.expect_get_jobs().returning(|| Ok(Vec::new()));
        let (mut controller, _) = controller_with(api);

        type_login(&mut controller, "wrong");
        controller.submit_login();
        next_event(&mut controller).await;

        assert_eq!(controller.state().session_state(), SessionState::Unlocked);
        assert!(controller.state().tickers.is_empty());
        assert!(controller.state().jobs.is_empty());
        assert!(!controller.state().loading);
    }

    #[tokio::test]
    // Run issues one POST, then the same joined reads as a load.
    async fn test_run_pipeline_posts_then_reloads() {
        let mut api = MockAdminApi::new();
        api.expect_run_pipeline().times(1).returning(|| Ok(()));
        api.expect_get_watchlist()
            .times(2)
            .returning(|| Ok(vec![aapl()]));
        let mut jobs_calls = 0;
        api.expect_get_jobs().times(2).returning(move || {
            jobs_calls += 1;
            if jobs_calls == 1 {
                Ok(Vec::new())
            } else {
                Ok(vec![finished_job(1)])
            }
        });
        let (mut controller, _) = controller_with(api);

        controller.set_credential(Some("pw1".to_string()));
        next_event(&mut controller).await;

        assert!(controller.run_pipeline());
        assert!(!controller.state().loading);

        // POST result, which starts the reload.
        next_event(&mut controller).await;
        assert!(controller.state().loading);

        next_event(&mut controller).await;
        assert!(!controller.state().loading);
        assert_eq!(controller.state().jobs, vec![finished_job(1)]);
    }

    #[tokio::test]
    // A failed trigger leaves state untouched and issues no reads.
    async fn test_run_pipeline_failure_keeps_state() {
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist().times(1).returning(|| Ok(vec![aapl()]));
        api.expect_get_jobs()
            .times(1)
            .returning(|| Ok(vec![finished_job(1)]));
        api.expect_run_pipeline()
            .times(1)
            .returning(|| Err(server_error()));
        let (mut controller, _) = controller_with(api);

        controller.set_credential(Some("pw1".to_string()));
        next_event(&mut controller).await;

        controller.run_pipeline();
        next_event(&mut controller).await;

        assert!(!controller.state().loading);
        assert_eq!(controller.state().tickers, vec![aapl()]);
        assert_eq!(controller.state().jobs, vec![finished_job(1)]);
        assert_eq!(controller.state().session_state(), SessionState::Unlocked);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(controller.drain_events(), 0);
    }

    #[tokio::test]
    // Overlapping loads are not cancelled; the first completion already clears `loading`.
    async fn test_overlapping_loads_last_completion_wins() {
        let mut api = MockAdminApi::new();
        api.expect_get_watchlist().times(3).returning(|| Ok(vec![aapl()]));
        api.expect_get_jobs().times(3).returning(|| Ok(Vec::new()));
        let (mut controller, _) = controller_with(api);

        controller.set_credential(Some("pw1".to_string()));
        controller.refresh();
        controller.refresh();

        next_event(&mut controller).await;
        assert!(!controller.state().loading);

        next_event(&mut controller).await;
        next_event(&mut controller).await;
        assert!(!controller.state().loading);
        assert_eq!(controller.state().tickers, vec![aapl()]);
    }

    #[tokio::test]
    async fn test_login_input_editing() {
        let (mut controller, _) = controller_with(MockAdminApi::new());

        type_login(&mut controller, "pw12");
        controller.pop_login_char();
        assert_eq!(controller.state().login_input, "pw1");

        controller.pop_login_char();
        controller.pop_login_char();
        controller.pop_login_char();
        controller.pop_login_char();
        assert!(controller.state().login_input.is_empty());
        assert!(controller.state().is_locked());
    }
}
