//! Run Chat use case
//!
//! The conversation loop. Two states: prompting for input, or terminated.
//! Every turn resends the whole conversation to the model.

use crate::config::{ApiErrorPolicy, ChatBehavior};
use crate::ports::busy_indicator::{BusyGuard, BusyIndicator};
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::session_notifier::SessionNotifier;
use crate::ports::terminal_ui::TerminalUi;
use gumchat_domain::{Conversation, ModelId, UserInput};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Why the conversation loop stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The user typed an exit keyword.
    ExitRequested,
    /// The user cancelled the input prompt.
    InputCancelled,
    /// The input tool is missing or broken.
    InputUnavailable,
    /// The chat API failed and the policy is to end the session.
    ApiError(String),
}

/// Result of a finished conversation loop
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub conversation: Conversation,
    pub termination: Termination,
}

impl ChatOutcome {
    /// Whether the transcript step should run.
    pub fn offers_save(&self) -> bool {
        matches!(
            self.termination,
            Termination::ExitRequested | Termination::InputCancelled
        )
    }
}

/// Use case for the interactive conversation loop
pub struct RunChatUseCase<G: ChatGateway + 'static> {
    gateway: Arc<G>,
    ui: Arc<dyn TerminalUi>,
    busy: Arc<dyn BusyIndicator>,
    logger: Arc<dyn ConversationLogger>,
    behavior: ChatBehavior,
}

impl<G: ChatGateway + 'static> RunChatUseCase<G> {
    pub fn new(gateway: Arc<G>, ui: Arc<dyn TerminalUi>, busy: Arc<dyn BusyIndicator>) -> Self {
        Self {
            gateway,
            ui,
            busy,
            logger: Arc::new(NoConversationLogger),
            behavior: ChatBehavior::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: ChatBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Run the loop until it terminates, returning the conversation.
    pub async fn execute(&self, model: &ModelId, notifier: &dyn SessionNotifier) -> ChatOutcome {
        notifier.on_chat_started(model);
        self.logger.log(ConversationEvent::new(
            "session_start",
            json!({ "model": model.as_str() }),
        ));

        let mut conversation = Conversation::new();

        let termination = loop {
            let raw = match self.ui.read_line(&self.behavior.placeholder) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("Input cancelled");
                    break Termination::InputCancelled;
                }
                Err(e) => {
                    warn!("Input tool failed: {}", e);
                    notifier.on_ui_error(&e);
                    break Termination::InputUnavailable;
                }
            };

            let content = match UserInput::parse(&raw) {
                UserInput::Exit => break Termination::ExitRequested,
                UserInput::Message(content) => content,
            };

            self.logger.log(ConversationEvent::new(
                "user_message",
                json!({ "model": model.as_str(), "content": &content }),
            ));
            conversation.add_user_message(content);

            match self.request_reply(model, &conversation).await {
                Ok(reply) => {
                    self.show_reply(&reply, notifier);
                    self.logger.log(ConversationEvent::new(
                        "assistant_message",
                        json!({ "model": model.as_str(), "content": &reply }),
                    ));
                    conversation.add_assistant_message(reply);
                }
                Err(e) => {
                    warn!("Chat request failed: {}", e);
                    notifier.on_chat_error(&e);
                    self.logger.log(ConversationEvent::new(
                        "chat_error",
                        json!({ "model": model.as_str(), "error": e.detail() }),
                    ));
                    match self.behavior.on_api_error {
                        ApiErrorPolicy::End => break Termination::ApiError(e.detail()),
                        ApiErrorPolicy::Continue => continue,
                    }
                }
            }
        };

        info!(
            "Conversation ended ({:?}) after {} messages",
            termination,
            conversation.len()
        );
        self.logger.log(ConversationEvent::new(
            "session_end",
            json!({ "messages": conversation.len() }),
        ));

        ChatOutcome {
            conversation,
            termination,
        }
    }

    /// Send the history under a busy indicator. The indicator is released
    /// when this returns, whatever the outcome.
    async fn request_reply(
        &self,
        model: &ModelId,
        conversation: &Conversation,
    ) -> Result<String, GatewayError> {
        let _busy = self.start_busy();
        debug!("Sending {} messages to {}", conversation.len(), model);
        self.gateway.chat(model, conversation.messages()).await
    }

    fn start_busy(&self) -> BusyGuard {
        match self.busy.start(&self.behavior.busy_title) {
            Ok(guard) => guard,
            Err(e) => {
                warn!("Busy indicator unavailable: {}", e);
                BusyGuard::noop()
            }
        }
    }

    fn show_reply(&self, reply: &str, notifier: &dyn SessionNotifier) {
        notifier.on_reply();
        if let Err(e) = self.ui.display_markdown(reply) {
            warn!("Could not format reply: {}", e);
            notifier.on_ui_error(&e);
            notifier.on_reply_unformatted(reply);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::terminal_ui::UiError;
    use crate::use_cases::test_support::{
        JournalBusy, RecordingLogger, RecordingNotifier, ScriptedGateway, ScriptedUi, api_error,
        entries, journal, model,
    };
    use gumchat_domain::{Message, Role};

    fn roles(conversation: &Conversation) -> Vec<Role> {
        conversation.messages().iter().map(Message::role).collect()
    }

    #[tokio::test]
    async fn test_exit_first_leaves_conversation_empty() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["exit"]));
        let gateway = Arc::new(ScriptedGateway::new(&journal, vec![]));
        let use_case =
            RunChatUseCase::new(gateway.clone(), ui, Arc::new(JournalBusy::new(&journal)));

        let outcome = use_case
            .execute(&model("llama3:latest"), &RecordingNotifier::default())
            .await;

        assert!(outcome.conversation.is_empty());
        assert_eq!(outcome.termination, Termination::ExitRequested);
        assert!(outcome.offers_save());
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_exit_keywords_are_not_recorded() {
        for keyword in ["Exit", "QUIT", "  quit  "] {
            let journal = journal();
            let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["hello", keyword]));
            let gateway = Arc::new(ScriptedGateway::new(&journal, vec![Ok("hi!".to_string())]));
            let use_case =
                RunChatUseCase::new(gateway, ui, Arc::new(JournalBusy::new(&journal)));

            let outcome = use_case
                .execute(&model("llama3:latest"), &RecordingNotifier::default())
                .await;

            assert_eq!(outcome.conversation.len(), 2, "{keyword:?}");
            assert_eq!(outcome.termination, Termination::ExitRequested);
        }
    }

    #[tokio::test]
    async fn test_each_turn_appends_user_then_assistant() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines([
            "Why is the sky blue?",
            "And sunsets?",
            "exit",
        ]));
        let gateway = Arc::new(ScriptedGateway::new(
            &journal,
            vec![
                Ok("Rayleigh scattering.".to_string()),
                Ok("Longer light path.".to_string()),
            ],
        ));
        let use_case =
            RunChatUseCase::new(gateway.clone(), ui.clone(), Arc::new(JournalBusy::new(&journal)));

        let outcome = use_case
            .execute(&model("llama3:latest"), &RecordingNotifier::default())
            .await;

        assert_eq!(
            roles(&outcome.conversation),
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert_eq!(outcome.conversation.messages()[2].content(), "And sunsets?");
        assert_eq!(
            outcome.conversation.last().unwrap().content(),
            "Longer light path."
        );
        assert_eq!(
            ui.displayed.lock().unwrap().as_slice(),
            &["Rayleigh scattering.", "Longer light path."]
        );
    }

    #[tokio::test]
    async fn test_user_message_is_recorded_and_sent_trimmed() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["  hello  ", "exit"]));
        let gateway = Arc::new(ScriptedGateway::new(&journal, vec![Ok("hi".to_string())]));
        let use_case =
            RunChatUseCase::new(gateway.clone(), ui, Arc::new(JournalBusy::new(&journal)));

        let outcome = use_case
            .execute(&model("llama3:latest"), &RecordingNotifier::default())
            .await;

        assert_eq!(outcome.conversation.messages()[0], Message::user("hello"));
        assert_eq!(gateway.calls.lock().unwrap()[0].1, vec![Message::user("hello")]);
    }

    #[tokio::test]
    async fn test_full_history_is_resent_each_turn() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["one", "two", "quit"]));
        let gateway = Arc::new(ScriptedGateway::new(
            &journal,
            vec![Ok("first".to_string()), Ok("second".to_string())],
        ));
        let use_case =
            RunChatUseCase::new(gateway.clone(), ui, Arc::new(JournalBusy::new(&journal)));

        use_case
            .execute(&model("mistral:latest"), &RecordingNotifier::default())
            .await;

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, model("mistral:latest"));
        assert_eq!(calls[0].1, vec![Message::user("one")]);
        assert_eq!(
            calls[1].1,
            vec![
                Message::user("one"),
                Message::assistant("first"),
                Message::user("two")
            ]
        );
    }

    #[tokio::test]
    async fn test_busy_indicator_wraps_only_the_chat_call() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["hello", "exit"]));
        let gateway = Arc::new(ScriptedGateway::new(&journal, vec![Ok("hi".to_string())]));
        let use_case = RunChatUseCase::new(gateway, ui, Arc::new(JournalBusy::new(&journal)));

        use_case
            .execute(&model("llama3:latest"), &RecordingNotifier::default())
            .await;

        assert_eq!(
            entries(&journal),
            vec![
                "read_line",
                "busy_start:Ollama is thinking...",
                "chat",
                "busy_stop",
                "display",
                "read_line",
            ]
        );
    }

    #[tokio::test]
    async fn test_api_error_ends_session_by_default() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["hello", "still there?"]));
        let gateway = Arc::new(ScriptedGateway::new(
            &journal,
            vec![Err(api_error("model \"llama9\" not found, try pulling it first"))],
        ));
        let notifier = RecordingNotifier::default();
        let use_case =
            RunChatUseCase::new(gateway.clone(), ui, Arc::new(JournalBusy::new(&journal)));

        let outcome = use_case.execute(&model("llama9"), &notifier).await;

        assert_eq!(
            outcome.termination,
            Termination::ApiError("model \"llama9\" not found, try pulling it first".to_string())
        );
        assert!(!outcome.offers_save());
        // The user turn was recorded before the call failed.
        assert_eq!(roles(&outcome.conversation), vec![Role::User]);
        assert_eq!(gateway.call_count(), 1);
        assert!(
            notifier
                .events()
                .contains(&"chat_error:model \"llama9\" not found, try pulling it first".to_string())
        );
        // Indicator stopped before the loop ended.
        let log = entries(&journal);
        assert_eq!(log.last().map(String::as_str), Some("busy_stop"));
    }

    #[tokio::test]
    async fn test_api_error_continue_policy_returns_to_prompt() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["hello", "again", "exit"]));
        let gateway = Arc::new(ScriptedGateway::new(
            &journal,
            vec![Err(api_error("server busy")), Ok("hi".to_string())],
        ));
        let use_case = RunChatUseCase::new(gateway, ui, Arc::new(JournalBusy::new(&journal)))
            .with_behavior(ChatBehavior::default().with_api_error_policy(ApiErrorPolicy::Continue));

        let outcome = use_case
            .execute(&model("llama3:latest"), &RecordingNotifier::default())
            .await;

        assert_eq!(outcome.termination, Termination::ExitRequested);
        assert_eq!(
            roles(&outcome.conversation),
            vec![Role::User, Role::User, Role::Assistant]
        );
    }

    #[tokio::test]
    async fn test_cancelled_input_terminates() {
        let journal = journal();
        let ui = Arc::new(
            ScriptedUi::new(&journal)
                .with_lines(["hello"])
                .with_line_result(Ok(None)),
        );
        let gateway = Arc::new(ScriptedGateway::new(&journal, vec![Ok("hi".to_string())]));
        let use_case = RunChatUseCase::new(gateway, ui, Arc::new(JournalBusy::new(&journal)));

        let outcome = use_case
            .execute(&model("llama3:latest"), &RecordingNotifier::default())
            .await;

        assert_eq!(outcome.termination, Termination::InputCancelled);
        assert_eq!(outcome.conversation.len(), 2);
        assert!(outcome.offers_save());
    }

    #[tokio::test]
    async fn test_missing_input_tool_aborts() {
        let journal = journal();
        let ui = Arc::new(
            ScriptedUi::new(&journal)
                .with_line_result(Err(UiError::ToolNotFound("gum".to_string()))),
        );
        let gateway = Arc::new(ScriptedGateway::new(&journal, vec![]));
        let notifier = RecordingNotifier::default();
        let use_case = RunChatUseCase::new(gateway, ui, Arc::new(JournalBusy::new(&journal)));

        let outcome = use_case.execute(&model("llama3:latest"), &notifier).await;

        assert_eq!(outcome.termination, Termination::InputUnavailable);
        assert!(!outcome.offers_save());
        assert!(notifier.events().iter().any(|e| e.starts_with("ui_error:")));
    }

    #[tokio::test]
    async fn test_unformatted_reply_fallback() {
        let journal = journal();
        let ui = Arc::new(
            ScriptedUi::new(&journal)
                .with_lines(["hello", "exit"])
                .with_failing_display(),
        );
        let gateway = Arc::new(ScriptedGateway::new(&journal, vec![Ok("**hi**".to_string())]));
        let notifier = RecordingNotifier::default();
        let use_case = RunChatUseCase::new(gateway, ui, Arc::new(JournalBusy::new(&journal)));

        let outcome = use_case.execute(&model("llama3:latest"), &notifier).await;

        assert_eq!(outcome.conversation.len(), 2);
        assert!(
            notifier
                .events()
                .contains(&"reply_unformatted:**hi**".to_string())
        );
    }

    #[tokio::test]
    async fn test_conversation_events_are_logged() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["hello", "exit"]));
        let gateway = Arc::new(ScriptedGateway::new(&journal, vec![Ok("hi".to_string())]));
        let logger = Arc::new(RecordingLogger::default());
        let use_case = RunChatUseCase::new(gateway, ui, Arc::new(JournalBusy::new(&journal)))
            .with_logger(logger.clone());

        use_case
            .execute(&model("llama3:latest"), &RecordingNotifier::default())
            .await;

        assert_eq!(
            logger.event_types(),
            vec![
                "session_start",
                "user_message",
                "assistant_message",
                "session_end"
            ]
        );
        let events = logger.events.lock().unwrap();
        assert_eq!(events[1].1["content"], "hello");
        assert_eq!(events[2].1["model"], "llama3:latest");
    }

    #[tokio::test]
    async fn test_custom_placeholder_is_used() {
        let journal = journal();
        let ui = Arc::new(ScriptedUi::new(&journal).with_lines(["exit"]));
        let gateway = Arc::new(ScriptedGateway::new(&journal, vec![]));
        let use_case =
            RunChatUseCase::new(gateway, ui.clone(), Arc::new(JournalBusy::new(&journal)))
                .with_behavior(ChatBehavior::default().with_placeholder("Ask me: "));

        use_case
            .execute(&model("llama3:latest"), &RecordingNotifier::default())
            .await;

        assert_eq!(ui.placeholders.lock().unwrap().as_slice(), &["Ask me: "]);
    }
}
