//! Conversation store
//!
//! Holds the ordered message list for one chat session. Messages are
//! strictly append-ordered and never mutated after being added; a
//! submission appends exactly one user message immediately and exactly one
//! assistant message once the backend call resolves, whether it succeeded
//! or failed. Failures never propagate out of [`submit_question`]; they
//! become assistant-shaped error messages so the view stays usable.
//!
//! Taking `&mut self` makes overlapping submissions unrepresentable, which
//! replaces the original UI's advisory "disabled while loading" affordance
//! with an actual invariant.
//!
//! [`submit_question`]: ConversationStore::submit_question

use std::sync::Arc;

use docuchat_client::RagBackend;
use docuchat_core::Message;
use tracing::debug;

pub struct ConversationStore {
    backend: Arc<dyn RagBackend>,
    messages: Vec<Message>,
    loading: bool,
}

impl ConversationStore {
    pub fn new(backend: Arc<dyn RagBackend>) -> Self {
        Self {
            backend,
            messages: Vec::new(),
            loading: false,
        }
    }

    /// Submit a question to the backend.
    ///
    /// Empty or whitespace-only input is a no-op and returns `false`.
    /// Otherwise exactly one ask call is issued and `true` is returned once
    /// both messages have been appended.
    pub async fn submit_question(&mut self, text: &str) -> bool {
        let question = text.trim();
        if question.is_empty() {
            return false;
        }

        self.messages.push(Message::user(question));
        self.loading = true;

        let reply = match self.backend.ask(question).await {
            Ok(response) => {
                debug!(sources = response.sources.len(), "Received answer");
                let answer = if response.answer.trim().is_empty() {
                    "No answer received".to_string()
                } else {
                    response.answer
                };
                Message::assistant(answer, response.sources)
            }
            Err(e) => {
                e.log();
                Message::assistant(format!("Error: {}", e.user_message()), Vec::new())
            }
        };

        self.messages.push(reply);
        self.loading = false;
        true
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
