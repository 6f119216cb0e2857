//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldKind, Form, FormId, View};
use crate::submit::{HttpSubmitClient, SubmitClientTrait, SubmitError, SubmitResponse};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Result of a finished submission, delivered back to the UI loop
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub form: FormId,
    pub result: Result<SubmitResponse, SubmitError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client used for form submissions
    client: Arc<dyn SubmitClientTrait>,
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the HTTP client
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = HttpSubmitClient::new(config.request_timeout())?;
        Ok(Self::with_client(AppState::new(config), Arc::new(client)))
    }

    /// Create an App with an explicit submission client
    pub fn with_client(state: AppState, client: Arc<dyn SubmitClientTrait>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if let Some(path) = view.path() {
            tracing::debug!("Navigating to {path}");
        }
        self.state.current_view = view;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Navigation bar shortcuts work from every routed view
        match key.code {
            KeyCode::F(1) if self.state.current_view != View::NotFound => {
                self.navigate(View::Home);
                return Ok(());
            }
            KeyCode::F(2) if self.state.current_view != View::NotFound => {
                self.navigate(View::Information);
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Order | View::Information => self.handle_form_key(key),
            View::NotFound => self.handle_not_found_key(key),
        }
        Ok(())
    }

    /// Handle keys on the Home view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Enter | KeyCode::Char('o') => self.navigate(View::Order),
            KeyCode::Char('i') => self.navigate(View::Information),
            _ => {}
        }
    }

    /// Handle keys when no route matched
    fn handle_not_found_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.quit = true;
        }
    }

    /// Handle keys in either form view
    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_active_form();
            return;
        }
        if key.code == KeyCode::Esc {
            self.navigate(View::Home);
            return;
        }

        let on_submit_row = self
            .state
            .active_form()
            .is_some_and(|f| f.is_submit_row_active());
        if on_submit_row && matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.submit_active_form();
            return;
        }

        let Some(form) = self.state.active_form_mut() else {
            return;
        };

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Down if on_submit_row => form.next_field(),
            KeyCode::Up if on_submit_row => form.prev_field(),
            _ if on_submit_row => {}
            _ => {
                let kind = form.active_form_field().map(|f| f.kind.clone());
                match (kind, key.code) {
                    (Some(FieldKind::Text { .. }), KeyCode::Char(c))
                        if !key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        form.input_char(c)
                    }
                    (Some(FieldKind::Text { .. }), KeyCode::Backspace) => form.backspace(),
                    (Some(FieldKind::Select { .. }), KeyCode::Right | KeyCode::Char(' ')) => {
                        form.cycle_choice(true)
                    }
                    (Some(FieldKind::Select { .. }), KeyCode::Left) => form.cycle_choice(false),
                    (Some(FieldKind::Checkboxes { .. }), KeyCode::Down) => {
                        form.move_option_cursor(true)
                    }
                    (Some(FieldKind::Checkboxes { .. }), KeyCode::Up) => {
                        form.move_option_cursor(false)
                    }
                    (Some(FieldKind::Checkboxes { .. }), KeyCode::Char(' ')) => {
                        form.toggle_option_at_cursor()
                    }
                    (_, KeyCode::Enter | KeyCode::Down) => form.next_field(),
                    (_, KeyCode::Up) => form.prev_field(),
                    _ => {}
                }
            }
        }
    }

    /// Submit the form of the current view, if it is valid and idle
    pub fn submit_active_form(&mut self) {
        if let Some(id) = self.state.current_view.form_id() {
            self.submit_form(id);
        }
    }

    /// Spawn the POST for one form; the outcome arrives via `poll_submissions`
    fn submit_form(&mut self, id: FormId) {
        let form = self.state.form_mut(id);
        let Some(payload) = form.begin_submit() else {
            tracing::debug!(
                "Ignoring {} submit (enabled={}, in flight={})",
                id.label(),
                form.submit_enabled,
                form.submitting
            );
            return;
        };
        let endpoint = form.definition.endpoint.clone();
        tracing::info!("Submitting {} form to {endpoint}", id.label());

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.submit(&endpoint, &payload).await;
            if tx.send(SubmissionOutcome { form: id, result }).is_err() {
                tracing::warn!("Submission finished after the UI closed");
            }
        });
    }

    /// Apply every finished submission without blocking
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        let label = outcome.form.label();
        match outcome.result {
            Ok(response) => {
                tracing::info!("{label} form accepted: {}", response.message);
                self.state.form_mut(outcome.form).complete_submit(response.message);
            }
            Err(err) => {
                // Logged only; the form keeps its values for a retry
                tracing::error!("Error submitting {label} form: {err}");
                self.state.form_mut(outcome.form).fail_submit();
            }
        }
    }

    /// Wait for the next submission outcome and apply it
    #[cfg(test)]
    async fn next_outcome(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply_outcome(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormAction, FormState};
    use crate::submit::MockSubmitClientTrait;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(mock: MockSubmitClientTrait) -> App {
        App::with_client(AppState::default(), Arc::new(mock))
    }

    fn idle_app() -> App {
        let mut mock = MockSubmitClientTrait::new();
        mock.expect_submit().times(0);
        app_with(mock)
    }

    fn fill_order(app: &mut App) {
        let form: &mut FormState = &mut app.state.order;
        form.apply(FormAction::SetText {
            name: "fullName".to_string(),
            value: "Alice".to_string(),
        });
        form.apply(FormAction::SetText {
            name: "size".to_string(),
            value: "M".to_string(),
        });
        form.apply(FormAction::ToggleOption {
            name: "toppings".to_string(),
            id: "1".to_string(),
        });
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_home_opens_order_and_information() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Char('o'))).unwrap();
            assert_eq!(app.state.current_view, View::Order);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.current_view, View::Home);
            app.handle_key(key(KeyCode::Char('i'))).unwrap();
            assert_eq!(app.state.current_view, View::Information);
        }

        #[test]
        fn test_nav_bar_keys() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::F(2))).unwrap();
            assert_eq!(app.state.current_view, View::Information);
            app.handle_key(key(KeyCode::F(1))).unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[test]
        fn test_quit_from_home() {
            let mut app = idle_app();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_q_is_text_inside_form() {
            let mut app = idle_app();
            app.navigate(View::Order);
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(!app.should_quit());
            assert_eq!(app.state.order.values.text("fullName"), "q");
        }

        #[test]
        fn test_not_found_ignores_nav_bar() {
            let mut app = idle_app();
            app.state.current_view = View::from_path("/undefined-path");
            app.handle_key(key(KeyCode::F(1))).unwrap();
            assert_eq!(app.state.current_view, View::NotFound);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }
    }

    mod form_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_validates_full_name() {
            let mut app = idle_app();
            app.navigate(View::Order);
            for c in "Al".chars() {
                app.handle_key(key(KeyCode::Char(c))).unwrap();
            }
            assert_eq!(
                app.state.order.errors.get("fullName"),
                "full name must be at least 3 characters"
            );
            app.handle_key(key(KeyCode::Char('i'))).unwrap();
            assert_eq!(app.state.order.errors.get("fullName"), "");
        }

        #[test]
        fn test_select_and_checkbox_keys() {
            let mut app = idle_app();
            app.navigate(View::Information);
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Right)).unwrap();
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.information.values.text("shirtsize"), "M");

            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert!(app
                .state
                .information
                .values
                .get("animals")
                .unwrap()
                .contains("2"));
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert!(!app
                .state
                .information
                .values
                .get("animals")
                .unwrap()
                .contains("2"));
        }

        #[test]
        fn test_enter_on_disabled_submit_does_nothing() {
            let mut app = idle_app();
            app.navigate(View::Order);
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert!(app.state.order.is_submit_row_active());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.order.submitting);
        }

        #[test]
        fn test_forms_keep_separate_state() {
            let mut app = idle_app();
            app.navigate(View::Order);
            app.handle_key(key(KeyCode::Char('A'))).unwrap();
            app.navigate(View::Information);
            assert_eq!(app.state.information.values.text("fullName"), "");
            assert_eq!(app.state.order.values.text("fullName"), "A");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_resets_and_shows_message() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .withf(|endpoint, values| {
                    endpoint.ends_with("/api/order")
                        && values.text("fullName") == "Alice"
                        && values.get("toppings").is_some_and(|t| t.contains("1"))
                })
                .times(1)
                .returning(|_, _| {
                    Ok(SubmitResponse {
                        message: "Thank you for your order, Alice!".to_string(),
                    })
                });
            let mut app = app_with(mock);
            app.navigate(View::Order);
            fill_order(&mut app);
            assert!(app.state.order.submit_enabled);

            app.handle_key(ctrl('s')).unwrap();
            assert!(app.state.order.submitting);
            app.next_outcome().await;

            let form = &app.state.order;
            assert_eq!(
                form.message.as_deref(),
                Some("Thank you for your order, Alice!")
            );
            assert_eq!(form.values, form.definition.default_values());
            assert!(!form.submitting);
            assert!(!form.submit_enabled);
        }

        #[tokio::test]
        async fn test_failure_keeps_values_and_stays_silent() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit().times(1).returning(|_, _| {
                Err(SubmitError::Status {
                    status: 503,
                    body: "down".to_string(),
                })
            });
            let mut app = app_with(mock);
            app.navigate(View::Order);
            fill_order(&mut app);

            app.submit_active_form();
            app.next_outcome().await;

            let form = &app.state.order;
            assert_eq!(form.values.text("fullName"), "Alice");
            assert!(form.message.is_none());
            assert!(!form.submitting);
            assert!(form.submit_enabled);
            assert_eq!(app.state.current_view, View::Order);
        }

        #[tokio::test]
        async fn test_information_failure_leaves_keys_live() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit().times(1).returning(|_, _| {
                Err(SubmitError::Status {
                    status: 500,
                    body: "x".to_string(),
                })
            });
            let mut app = app_with(mock);
            app.navigate(View::Information);
            let form = &mut app.state.information;
            form.apply(FormAction::SetText {
                name: "fullName".to_string(),
                value: "Bea".to_string(),
            });
            form.apply(FormAction::SetText {
                name: "shirtsize".to_string(),
                value: "S".to_string(),
            });

            app.submit_active_form();
            app.next_outcome().await;

            // Nothing modal is waiting: the next key edits the form
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(app.state.information.values.text("fullName"), "Beax");
            assert!(app.state.information.message.is_none());
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_ignored() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit().times(1).returning(|_, _| {
                Ok(SubmitResponse {
                    message: "ok".to_string(),
                })
            });
            let mut app = app_with(mock);
            app.navigate(View::Order);
            fill_order(&mut app);

            app.submit_active_form();
            app.submit_active_form();
            app.next_outcome().await;
            app.poll_submissions();

            assert_eq!(app.state.order.message.as_deref(), Some("ok"));
        }

        #[tokio::test]
        async fn test_invalid_form_is_not_sent() {
            let mut app = idle_app();
            app.navigate(View::Information);
            app.submit_active_form();
            app.poll_submissions();
            assert!(!app.state.information.submitting);
        }

        #[tokio::test]
        async fn test_information_uses_its_endpoint() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .withf(|endpoint, values| {
                    endpoint.ends_with("/form-submission") && values.text("shirtsize") == "L"
                })
                .times(1)
                .returning(|_, _| {
                    Ok(SubmitResponse {
                        message: "Saved".to_string(),
                    })
                });
            let mut app = app_with(mock);
            app.navigate(View::Information);
            let form = &mut app.state.information;
            form.apply(FormAction::SetText {
                name: "fullName".to_string(),
                value: "Bea".to_string(),
            });
            form.apply(FormAction::SetText {
                name: "shirtsize".to_string(),
                value: "L".to_string(),
            });

            app.submit_active_form();
            app.next_outcome().await;
            assert_eq!(app.state.information.message.as_deref(), Some("Saved"));
            assert_eq!(app.state.information.values.text("fullName"), "");
        }
    }
}
