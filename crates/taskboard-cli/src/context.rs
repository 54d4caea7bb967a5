use serde::Serialize;
use std::path::PathBuf;
use taskboard_core::AppConfig;
use taskboard_domain::{Board, BoardStore};
use taskboard_persistence::{BoardSession, JsonSlotStore};

/// Result of a mutating command as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResult<T: Serialize> {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Latest durable slot failure, if reading or writing it went wrong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

pub struct CliContext {
    pub config: AppConfig,
    session: BoardSession<JsonSlotStore>,
}

impl CliContext {
    pub async fn open(config: AppConfig, file: Option<PathBuf>) -> Self {
        let store = match file {
            Some(path) => JsonSlotStore::new(path),
            None => JsonSlotStore::from_config(&config),
        };
        tracing::debug!("Using board slot {}", store.path().display());
        let session = BoardSession::open(store, &config).await;
        Self { config, session }
    }

    pub fn board(&self) -> &Board {
        self.session.board()
    }

    pub fn session(&self) -> &BoardSession<JsonSlotStore> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut BoardSession<JsonSlotStore> {
        &mut self.session
    }

    pub fn done_list_name(&self) -> &str {
        self.config.effective_done_list_name()
    }

    /// Runs a board operation and mirrors the board if it changed.
    pub async fn apply<R>(&mut self, operation: impl FnOnce(&mut BoardStore) -> R) -> R {
        self.session.apply(operation).await
    }

    pub fn report<T: Serialize>(&self, changed: bool, result: Option<T>) -> MutationResult<T> {
        MutationResult {
            changed,
            result,
            warning: self
                .session
                .status()
                .last_error
                .as_ref()
                .map(|entry| entry.message.clone()),
        }
    }
}
