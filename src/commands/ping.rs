use async_trait::async_trait;

use super::{CommandHandler, Invocation};
use crate::{
    discord::{command::ApplicationCommand, payloads::InteractionResponse},
    BotState,
};

pub struct Ping;

#[async_trait]
impl CommandHandler for Ping {
    fn declaration(&self) -> ApplicationCommand {
        ApplicationCommand::new("ping", "Ping the bot")
    }

    async fn handle(&self, invocation: &Invocation<'_>, _state: &BotState) -> InteractionResponse {
        InteractionResponse::message(format!("Pong <@!{}>!", invocation.user.id))
    }
}
