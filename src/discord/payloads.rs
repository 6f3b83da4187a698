use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message flag hiding a reply from everyone but the invoking user.
pub const EPHEMERAL: u64 = 1 << 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Unknown(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            other => Self::Unknown(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Unknown(other) => other,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Member {
    pub user: User,
    #[serde(default)]
    pub roles: Vec<String>,
    pub nick: Option<String>,
}

/// A single option value, typed by the option type Discord sends with it.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    User(String),
    Channel(String),
    Role(String),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawOption {
    name: String,
    #[serde(rename = "type")]
    kind: u8,
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawOption")]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

impl TryFrom<RawOption> for CommandOption {
    type Error = String;

    fn try_from(raw: RawOption) -> Result<Self, Self::Error> {
        let snowflake = |value: &Value| value.as_str().map(str::to_string);

        let value = match raw.kind {
            3 => raw.value.as_str().map(|v| OptionValue::String(v.to_string())),
            4 => raw.value.as_i64().map(OptionValue::Integer),
            5 => raw.value.as_bool().map(OptionValue::Boolean),
            6 => snowflake(&raw.value).map(OptionValue::User),
            7 => snowflake(&raw.value).map(OptionValue::Channel),
            8 => snowflake(&raw.value).map(OptionValue::Role),
            other => {
                return Err(format!("unsupported option type {other} for `{}`", raw.name));
            }
        };

        value
            .map(|value| CommandOption { name: raw.name.clone(), value })
            .ok_or_else(|| format!("option `{}` does not match type {}", raw.name, raw.kind))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

impl CommandData {
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.iter().find(|o| o.name == name).map(|o| &o.value)
    }

    /// String option value, with an empty string treated as absent.
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.option(name)
            .and_then(OptionValue::as_str)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub data: Option<CommandData>,
    pub member: Option<Member>,
    /// Only present for invocations outside a guild.
    pub user: Option<User>,
    pub guild_id: Option<String>,
    pub channel_id: Option<String>,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub version: u8,
}

impl Interaction {
    pub fn invoker(&self) -> Option<&User> {
        self.member
            .as_ref()
            .map(|member| &member.user)
            .or(self.user.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum ResponseType {
    Pong,
    ChannelMessageWithSource,
}

impl From<ResponseType> for u8 {
    fn from(value: ResponseType) -> Self {
        match value {
            ResponseType::Pong => 1,
            ResponseType::ChannelMessageWithSource => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageData {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: ResponseType::Pong,
            data: None,
        }
    }

    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::ChannelMessageWithSource,
            data: Some(MessageData {
                content: content.into(),
                ..Default::default()
            }),
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::ChannelMessageWithSource,
            data: Some(MessageData {
                content: content.into(),
                flags: Some(EPHEMERAL),
                ..Default::default()
            }),
        }
    }
}
