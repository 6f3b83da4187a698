//! Slash command table and interaction dispatch.

mod ping;
mod summon;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    discord::{
        command::ApplicationCommand,
        payloads::{CommandData, Interaction, InteractionResponse, InteractionType, User},
    },
    error::AppError,
    BotState,
};

pub use ping::Ping;
pub use summon::{Summon, StaffMember, STAFF};

/// A parsed command invocation with its invoking user resolved.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub data: &'a CommandData,
    pub user: &'a User,
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Declaration pushed to Discord, including the name used for lookup.
    fn declaration(&self) -> ApplicationCommand;

    async fn handle(&self, invocation: &Invocation<'_>, state: &BotState) -> InteractionResponse;
}

/// Commands in registration order. Built once at start and never mutated.
pub struct CommandRegistry {
    commands: Vec<(ApplicationCommand, Box<dyn CommandHandler>)>,
}

impl CommandRegistry {
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>) -> Self {
        Self {
            commands: handlers
                .into_iter()
                .map(|handler| (handler.declaration(), handler))
                .collect(),
        }
    }

    /// `ping` and `summon`.
    pub fn standard() -> Self {
        Self::new(vec![Box::new(Ping), Box::new(Summon)])
    }

    pub fn find(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.commands
            .iter()
            .find(|(declaration, _)| declaration.name == name)
            .map(|(_, handler)| handler.as_ref())
    }

    pub fn declarations(&self) -> Vec<ApplicationCommand> {
        self.commands
            .iter()
            .map(|(declaration, _)| declaration.clone())
            .collect()
    }
}

/// Parses a verified interaction body and produces its response.
pub async fn dispatch(body: &[u8], state: &BotState) -> Result<InteractionResponse, AppError> {
    let interaction: Interaction = serde_json::from_slice(body)?;

    match interaction.kind {
        InteractionType::Ping => Ok(InteractionResponse::pong()),
        InteractionType::ApplicationCommand => {
            let data = interaction
                .data
                .as_ref()
                .ok_or_else(|| AppError::MalformedInput("missing command data".to_string()))?;
            let user = interaction
                .invoker()
                .ok_or_else(|| AppError::MalformedInput("missing invoking user".to_string()))?;

            let handler = state
                .commands
                .find(&data.name)
                .ok_or_else(|| AppError::UnknownCommand(data.name.clone()))?;

            debug!(command = %data.name, user = %user.id, "dispatching command");
            let invocation = Invocation { data, user };
            Ok(handler.handle(&invocation, state).await)
        }
        InteractionType::Unknown(kind) => Err(AppError::UnknownInteractionType(kind)),
    }
}
