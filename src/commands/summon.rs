use async_trait::async_trait;
use tracing::{error, info, warn};

use super::{CommandHandler, Invocation};
use crate::{
    discord::{
        command::{ApplicationCommand, CommandOptionDecl},
        payloads::InteractionResponse,
    },
    uptime::incident::NewIncident,
    BotState,
};

const INCIDENT_NAME: &str = "7TV Monitoring Bot Summon";
const REQUESTER_EMAIL: &str = "system@7tv.app";
const DEFAULT_REASON: &str = "No reason provided";

/// A staff member reachable through `/summon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffMember {
    /// Choice value sent by Discord.
    pub value: &'static str,
    pub display_name: &'static str,
    /// Better Uptime escalation policy paging this person.
    pub policy_id: &'static str,
    pub mention: &'static str,
}

pub static STAFF: [StaffMember; 3] = [
    StaffMember {
        value: "anatole",
        display_name: "Anatole",
        policy_id: "91500",
        mention: "<@!61076301552820224>",
    },
    StaffMember {
        value: "kathy",
        display_name: "Kathy",
        policy_id: "91502",
        mention: "<@!347224572661071872>",
    },
    StaffMember {
        value: "troy",
        display_name: "Troy",
        policy_id: "91501",
        mention: "<@!383195095610163200>",
    },
];

impl StaffMember {
    pub fn find(value: &str) -> Option<&'static StaffMember> {
        STAFF.iter().find(|member| member.value == value)
    }
}

pub struct Summon;

#[async_trait]
impl CommandHandler for Summon {
    fn declaration(&self) -> ApplicationCommand {
        let staff = STAFF.iter().fold(
            CommandOptionDecl::string("staff", "The staff member you want to summon").required(),
            |option, member| option.choice(member.display_name, member.value),
        );

        ApplicationCommand::new("summon", "Summon one of the 7tv staff members")
            .option(staff)
            .option(CommandOptionDecl::string(
                "reason",
                "The reason you want to summon the staff member",
            ))
    }

    async fn handle(&self, invocation: &Invocation<'_>, state: &BotState) -> InteractionResponse {
        let user = invocation.user;
        let reason = invocation
            .data
            .string_option("reason")
            .unwrap_or(DEFAULT_REASON);
        let staff = invocation.data.string_option("staff").unwrap_or_default();

        let Some(member) = StaffMember::find(staff) else {
            warn!(%staff, user = %user.id, "summon for unknown staff member");
            return InteractionResponse::ephemeral(format!(
                "We could not find a staff member with the name {staff}"
            ));
        };

        let incident = NewIncident {
            name: INCIDENT_NAME.to_string(),
            summary: format!("Summon {}", member.display_name),
            requester_email: REQUESTER_EMAIL.to_string(),
            description: format!(
                "{} summoned by {}#{} ({})\nReason: {}",
                member.display_name, user.username, user.discriminator, user.id, reason
            ),
            policy_id: member.policy_id.to_string(),
        };

        match state.uptime.create_incident(&incident).await {
            Ok(()) => {
                info!(staff = member.value, user = %user.id, "summoned staff member");
                InteractionResponse::message(format!(
                    "<@!{}> has summoned {}!",
                    user.id, member.mention
                ))
            }
            Err(err) => {
                error!(staff = member.value, error = %err, "failed to create summon incident");
                InteractionResponse::message(format!("Failed to summon {}!", member.mention))
            }
        }
    }
}
