//! Scripted port implementations shared by the use case tests

use crate::ports::busy_indicator::{BusyGuard, BusyIndicator};
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::model_catalog::{CatalogError, ModelCatalog};
use crate::ports::session_notifier::SessionNotifier;
use crate::ports::terminal_ui::{TerminalUi, UiError};
use crate::ports::transcript_store::{StoreError, TranscriptStore};
use async_trait::async_trait;
use gumchat_domain::{Conversation, DomainError, Message, ModelId};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Ordered record of calls across all mocks of one test.
pub(crate) type Journal = Arc<Mutex<Vec<String>>>;

pub(crate) fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

pub(crate) fn model(id: &str) -> ModelId {
    ModelId::new(id).unwrap()
}

// ==================== Terminal UI ====================

pub(crate) struct ScriptedUi {
    journal: Journal,
    lines: Mutex<VecDeque<Result<Option<String>, UiError>>>,
    choice: Mutex<Option<Result<String, UiError>>>,
    confirm_answer: Mutex<Option<Result<bool, UiError>>>,
    display_error: bool,
    pub choose_calls: Mutex<Vec<Vec<String>>>,
    pub confirm_calls: Mutex<Vec<String>>,
    pub displayed: Mutex<Vec<String>>,
    pub placeholders: Mutex<Vec<String>>,
}

impl ScriptedUi {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Arc::clone(journal),
            lines: Mutex::new(VecDeque::new()),
            choice: Mutex::new(None),
            confirm_answer: Mutex::new(None),
            display_error: false,
            choose_calls: Mutex::new(Vec::new()),
            confirm_calls: Mutex::new(Vec::new()),
            displayed: Mutex::new(Vec::new()),
            placeholders: Mutex::new(Vec::new()),
        }
    }

    pub fn with_lines<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut queue = self.lines.lock().unwrap();
            queue.extend(lines.into_iter().map(|l| Ok(Some(l.into()))));
        }
        self
    }

    pub fn with_line_result(self, result: Result<Option<String>, UiError>) -> Self {
        self.lines.lock().unwrap().push_back(result);
        self
    }

    pub fn with_choice(self, choice: Result<String, UiError>) -> Self {
        *self.choice.lock().unwrap() = Some(choice);
        self
    }

    pub fn with_confirm(self, answer: Result<bool, UiError>) -> Self {
        *self.confirm_answer.lock().unwrap() = Some(answer);
        self
    }

    pub fn with_failing_display(mut self) -> Self {
        self.display_error = true;
        self
    }
}

impl TerminalUi for ScriptedUi {
    fn choose(&self, options: &[String]) -> Result<String, UiError> {
        self.journal.lock().unwrap().push("choose".to_string());
        self.choose_calls.lock().unwrap().push(options.to_vec());
        self.choice
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(String::new()))
    }

    fn read_line(&self, placeholder: &str) -> Result<Option<String>, UiError> {
        self.journal.lock().unwrap().push("read_line".to_string());
        self.placeholders
            .lock()
            .unwrap()
            .push(placeholder.to_string());
        self.lines.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }

    fn confirm(&self, prompt: &str) -> Result<bool, UiError> {
        self.journal.lock().unwrap().push("confirm".to_string());
        self.confirm_calls.lock().unwrap().push(prompt.to_string());
        self.confirm_answer
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(false))
    }

    fn display_markdown(&self, text: &str) -> Result<(), UiError> {
        self.journal.lock().unwrap().push("display".to_string());
        if self.display_error {
            return Err(UiError::ToolNotFound("gum".to_string()));
        }
        self.displayed.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

// ==================== Chat gateway ====================

pub(crate) struct ScriptedGateway {
    journal: Journal,
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    pub calls: Mutex<Vec<(ModelId, Vec<Message>)>>,
}

impl ScriptedGateway {
    pub fn new(journal: &Journal, replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            journal: Arc::clone(journal),
            replies: Mutex::new(VecDeque::from(replies)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatGateway for ScriptedGateway {
    async fn chat(&self, model: &ModelId, messages: &[Message]) -> Result<String, GatewayError> {
        self.journal.lock().unwrap().push("chat".to_string());
        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), messages.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Connection("No more replies".to_string())))
    }
}

pub(crate) fn api_error(detail: &str) -> GatewayError {
    GatewayError::Api {
        status: Some(404),
        detail: detail.to_string(),
    }
}

// ==================== Busy indicator ====================

pub(crate) struct JournalBusy {
    journal: Journal,
}

impl JournalBusy {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Arc::clone(journal),
        }
    }
}

impl BusyIndicator for JournalBusy {
    fn start(&self, title: &str) -> Result<BusyGuard, UiError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("busy_start:{title}"));
        let journal = Arc::clone(&self.journal);
        Ok(BusyGuard::new(move || {
            journal.lock().unwrap().push("busy_stop".to_string());
        }))
    }
}

// ==================== Model catalog ====================

pub(crate) struct ScriptedCatalog {
    result: Mutex<Option<Result<Vec<ModelId>, CatalogError>>>,
}

impl ScriptedCatalog {
    pub fn new(result: Result<Vec<ModelId>, CatalogError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
        }
    }
}

impl ModelCatalog for ScriptedCatalog {
    fn list_models(&self) -> Result<Vec<ModelId>, CatalogError> {
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ==================== Transcript store ====================

pub(crate) struct MemoryStore {
    journal: Journal,
    fail: bool,
    pub saved: Mutex<Vec<Conversation>>,
}

impl MemoryStore {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Arc::clone(journal),
            fail: false,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self {
            fail: true,
            ..Self::new(journal)
        }
    }
}

impl TranscriptStore for MemoryStore {
    fn save(&self, conversation: &Conversation) -> Result<PathBuf, StoreError> {
        self.journal.lock().unwrap().push("save".to_string());
        let path = PathBuf::from("storage/2024_05_01_120000.md");
        if self.fail {
            return Err(StoreError::Io {
                path,
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.saved.lock().unwrap().push(conversation.clone());
        Ok(path)
    }
}

// ==================== Notifier / logger ====================

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub events: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SessionNotifier for RecordingNotifier {
    fn on_discovery_failed(&self, error: &CatalogError) {
        self.push(format!("discovery_failed:{error}"));
    }

    fn on_no_models(&self) {
        self.push("no_models".to_string());
    }

    fn on_selection_rejected(&self, error: &DomainError) {
        self.push(format!("selection_rejected:{error}"));
    }

    fn on_chat_started(&self, model: &ModelId) {
        self.push(format!("chat_started:{model}"));
    }

    fn on_reply(&self) {
        self.push("reply".to_string());
    }

    fn on_reply_unformatted(&self, text: &str) {
        self.push(format!("reply_unformatted:{text}"));
    }

    fn on_chat_error(&self, error: &GatewayError) {
        self.push(format!("chat_error:{}", error.detail()));
    }

    fn on_ui_error(&self, error: &UiError) {
        self.push(format!("ui_error:{error}"));
    }

    fn on_transcript_saved(&self, path: &Path) {
        self.push(format!("saved:{}", path.display()));
    }

    fn on_transcript_failed(&self, error: &StoreError) {
        self.push(format!("save_failed:{error}"));
    }
}

#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
