//! Run Session use case
//!
//! Orchestrates one complete run: discovery → selection → conversation
//! loop → transcript persistence. Each step short-circuits the rest when
//! it produces nothing to continue with.

use crate::ports::chat_gateway::ChatGateway;
use crate::ports::session_notifier::SessionNotifier;
use crate::use_cases::discover_models::DiscoverModelsUseCase;
use crate::use_cases::run_chat::{ChatOutcome, RunChatUseCase};
use crate::use_cases::save_transcript::{SaveOutcome, SaveTranscriptUseCase};
use crate::use_cases::select_model::SelectModelUseCase;
use gumchat_domain::ModelId;
use tracing::info;

/// Input for the RunSession use case
#[derive(Debug, Clone, Default)]
pub struct RunSessionInput {
    /// Model to use without discovery or the chooser
    pub model: Option<ModelId>,
}

impl RunSessionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = Some(model);
        self
    }
}

/// What a run did
#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    pub model: Option<ModelId>,
    pub chat: Option<ChatOutcome>,
    pub save: Option<SaveOutcome>,
}

/// Use case for a full chat session
pub struct RunSessionUseCase<G: ChatGateway + 'static> {
    discover: DiscoverModelsUseCase,
    select: SelectModelUseCase,
    chat: RunChatUseCase<G>,
    save: SaveTranscriptUseCase,
}

impl<G: ChatGateway + 'static> RunSessionUseCase<G> {
    pub fn new(
        discover: DiscoverModelsUseCase,
        select: SelectModelUseCase,
        chat: RunChatUseCase<G>,
        save: SaveTranscriptUseCase,
    ) -> Self {
        Self {
            discover,
            select,
            chat,
            save,
        }
    }

    pub async fn execute(
        &self,
        input: RunSessionInput,
        notifier: &dyn SessionNotifier,
    ) -> SessionReport {
        let mut report = SessionReport::default();

        let model = match input.model {
            Some(model) => {
                info!("Using preselected model {}", model);
                model
            }
            None => {
                let models = self.discover.execute(notifier);
                match self.select.execute(&models, notifier) {
                    Some(model) => model,
                    None => return report,
                }
            }
        };
        report.model = Some(model.clone());

        let outcome = self.chat.execute(&model, notifier).await;

        if outcome.offers_save() {
            report.save = Some(self.save.execute(&outcome.conversation, notifier));
        }
        report.chat = Some(outcome);

        report
    }
}
