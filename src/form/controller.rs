use crate::form::{
    interpret_response, DraftMessage, EndpointResponse, MessagePayload, SubmissionStatus,
    SubmitError,
};
use crate::i18n::Language;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

/// Path the page posts to, relative to the site root.
pub const SEND_EMAIL_PATH: &str = "/api/send-email";

#[derive(Debug, Default)]
struct FormState {
    draft: DraftMessage,
    status: SubmissionStatus,
}

/// Controller behind the "write us a message" form.
///
/// Shared by reference. The lock is only ever held between awaits, so a second
/// `submit` issued while one is in flight sees `Sending` and returns at once.
#[derive(Debug)]
pub struct MessageForm {
    client: reqwest::Client,
    endpoint_url: String,
    language: Mutex<Language>,
    state: Mutex<FormState>,
}

impl MessageForm {
    pub fn new(endpoint_url: impl Into<String>, language: Language) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint_url, language)
    }

    pub fn with_client(
        client: reqwest::Client,
        endpoint_url: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            client,
            endpoint_url: endpoint_url.into(),
            language: Mutex::new(language),
            state: Mutex::new(FormState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn language(&self) -> Language {
        *self.language.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Switch language. Affects banners produced from now on.
    pub fn set_language(&self, language: Language) {
        *self.language.lock().unwrap_or_else(|e| e.into_inner()) = language;
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    // ==================== Draft Editing ====================

    pub fn set_sender_name(&self, name: impl Into<String>) {
        self.state().draft.sender_name = name.into();
    }

    pub fn set_body_text(&self, body: impl Into<String>) {
        self.state().draft.body_text = body.into();
    }

    /// Empty the message body. Does nothing while sending or when already blank.
    pub fn clear_body_text(&self) -> bool {
        let mut state = self.state();
        if state.status.is_sending() || state.draft.body_text.trim().is_empty() {
            return false;
        }
        state.draft.body_text.clear();
        true
    }

    pub fn draft(&self) -> DraftMessage {
        self.state().draft.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state().status.clone()
    }

    pub fn can_submit(&self) -> bool {
        !self.state().status.is_sending()
    }

    pub fn can_clear(&self) -> bool {
        let state = self.state();
        !state.status.is_sending() && !state.draft.body_text.trim().is_empty()
    }

    // ==================== Submission ====================

    /// Validate, post once, and settle into `Succeeded` or `Failed`.
    ///
    /// Never returns an error: every failure ends up as banner text. On success
    /// the draft is cleared, on failure it is kept for correction.
    pub async fn submit(&self) -> SubmissionStatus {
        let strings = self.language().strings();

        let payload = {
            let mut state = self.state();

            if state.status.is_sending() {
                debug!("Submission already in flight, ignoring");
                return state.status.clone();
            }

            if let Err(e) = state.draft.validate() {
                warn!("Rejected draft: {}", e);
                state.status = SubmissionStatus::failed(strings.message_error);
                return state.status.clone();
            }

            state.status = SubmissionStatus::sending(strings.sending_message);
            state.draft.payload()
        };

        let outcome = self.deliver(&payload).await;

        let mut state = self.state();
        match outcome {
            Ok(()) => {
                info!("Message from {} delivered", payload.name);
                state.status = SubmissionStatus::succeeded(strings.message_sent);
                state.draft.clear();
            }
            Err(e) => {
                error!("Error sending message: {}", e);
                state.status = SubmissionStatus::failed(self.failure_text(&e));
            }
        }
        state.status.clone()
    }

    async fn deliver(&self, payload: &MessagePayload) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(payload.to_form())
            .send()
            .await?;

        let observed = EndpointResponse::read(response).await;
        interpret_response(&observed)?;
        Ok(())
    }

    fn failure_text(&self, err: &SubmitError) -> String {
        let strings = self.language().strings();
        match err {
            SubmitError::Validation(_) => strings.message_error.to_string(),
            SubmitError::Server { message, .. } | SubmitError::Application(message) => {
                message.clone()
            }
            SubmitError::Transport(message) if message.trim().is_empty() => {
                strings.message_error.to_string()
            }
            SubmitError::Transport(message) => message.clone(),
        }
    }
}
