//! Incident snapshot to Discord message.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    config::MessageTemplates,
    discord::embed::{Embed, EmbedField, EmbedImage, WebhookMessage},
    uptime::incident::{Incident, IncidentEvent},
};

pub const DESCRIPTION_LIMIT: usize = 1500;

const RED: u32 = 0xff0000;
const YELLOW: u32 = 0xffff00;
const GREEN: u32 = 0x00ff00;

const RESOLVED_IMAGE: &str = "https://cdn.7tv.app/emote/62893283ed0a40a5ec5f00d9/4x.gif";
const ACKNOWLEDGED_IMAGE: &str = "https://cdn.7tv.app/emote/60ccf4479f5edeff9938fa77/4x.gif";
const FALLBACK_IMAGE: &str = "https://cdn.7tv.app/emote/60aeed117e8706b57214d2b2/4x.gif";

/// Lifecycle state of an incident snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentState {
    New,
    Updated,
    Resolved,
}

impl IncidentState {
    /// `resolved_at` wins over `acknowledged_at`.
    pub fn classify(incident: &Incident) -> Self {
        let attributes = &incident.data.attributes;
        match (attributes.acknowledged_at.is_some(), attributes.resolved_at.is_some()) {
            (_, true) => Self::Resolved,
            (true, false) => Self::Updated,
            (false, false) => Self::New,
        }
    }

    pub fn color(self) -> u32 {
        match self {
            Self::New => RED,
            Self::Updated => YELLOW,
            Self::Resolved => GREEN,
        }
    }

    pub fn template(self, templates: &MessageTemplates) -> &str {
        match self {
            Self::New => &templates.new_incident,
            Self::Updated => &templates.updated,
            Self::Resolved => &templates.resolved,
        }
    }
}

fn iso(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Cuts to the first `DESCRIPTION_LIMIT` chars, then appends `...`.
pub fn truncate_description(description: String) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description,
    }
}

fn description(incident: &Incident, event: &IncidentEvent) -> String {
    let attributes = &incident.data.attributes;
    let mut description = format!(
        "**ID**: {}\n**Cause**: {}",
        event.id,
        attributes.cause.as_deref().unwrap_or_default()
    );

    if let Some(url) = attributes.url.as_deref().filter(|url| !url.is_empty()) {
        description.push_str(&format!(
            "\n**Checked URL**: `{} {}`\n**Response** ```{}```",
            attributes.http_method.as_deref().unwrap_or_default().to_uppercase(),
            url,
            attributes.response_content.as_deref().unwrap_or_default()
        ));
    }

    truncate_description(description)
}

fn image(state: IncidentState, incident: &Incident) -> String {
    match state {
        IncidentState::Resolved => RESOLVED_IMAGE.to_string(),
        IncidentState::Updated => ACKNOWLEDGED_IMAGE.to_string(),
        IncidentState::New => incident
            .data
            .attributes
            .screenshot_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
    }
}

pub fn incident_link(event: &IncidentEvent) -> String {
    format!(
        "[Click here](https://betteruptime.com/team/{}/incidents/{})",
        event.team_id, event.id
    )
}

pub fn render(
    incident: &Incident,
    event: &IncidentEvent,
    templates: &MessageTemplates,
) -> WebhookMessage {
    let state = IncidentState::classify(incident);
    let attributes = &incident.data.attributes;

    let mut fields = Vec::new();
    match (state, attributes.acknowledged_at, attributes.resolved_at) {
        (IncidentState::Updated, Some(acknowledged_at), _) => {
            fields.push(EmbedField::inline("Acknowledged at", iso(&acknowledged_at)));
            fields.push(EmbedField::inline(
                "Acknowledged by",
                attributes
                    .acknowledged_by
                    .as_deref()
                    .filter(|by| !by.is_empty())
                    .unwrap_or("Unknown"),
            ));
        }
        (IncidentState::Resolved, _, Some(resolved_at)) => {
            fields.push(EmbedField::inline("Resolved at", iso(&resolved_at)));
            fields.push(EmbedField::inline(
                "Resolved by",
                attributes
                    .resolved_by
                    .as_deref()
                    .filter(|by| !by.is_empty())
                    .unwrap_or("Automatically"),
            ));
        }
        _ => {}
    }
    fields.push(EmbedField::block("View incident", incident_link(event)));

    let embed = Embed {
        title: Some(
            attributes
                .name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Unnamed incident".to_string()),
        ),
        url: attributes.url.clone().filter(|url| !url.is_empty()),
        description: Some(description(incident, event)),
        timestamp: Some(iso(&attributes.started_at)),
        color: Some(state.color()),
        image: Some(EmbedImage {
            url: image(state, incident),
        }),
        fields,
    };

    WebhookMessage {
        content: state.template(templates).to_string(),
        embeds: vec![embed],
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::uptime::incident::{IncidentAttributes, IncidentData};

    fn templates() -> MessageTemplates {
        MessageTemplates {
            new_incident: "new incident".to_string(),
            updated: "incident updated".to_string(),
            resolved: "incident resolved".to_string(),
        }
    }

    fn event() -> IncidentEvent {
        IncidentEvent {
            id: "321".to_string(),
            team_id: "77".to_string(),
            kind: "incident".to_string(),
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 5, 1, hour, 0, 0).unwrap()
    }

    fn incident(acknowledged: bool, resolved: bool) -> Incident {
        Incident {
            data: IncidentData {
                id: "321".to_string(),
                kind: "incident".to_string(),
                attributes: IncidentAttributes {
                    name: Some("API".to_string()),
                    url: Some("https://7tv.io/health".to_string()),
                    http_method: Some("get".to_string()),
                    cause: Some("Status 503".to_string()),
                    started_at: at(1),
                    acknowledged_at: acknowledged.then(|| at(2)),
                    resolved_at: resolved.then(|| at(3)),
                    response_content: Some("bad gateway".to_string()),
                    screenshot_url: Some("https://shots.example/1.png".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
            included: Vec::new(),
        }
    }

    fn field_names(message: &WebhookMessage) -> Vec<&str> {
        message.embeds[0].fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn new_incident_is_red_with_screenshot() {
        let message = render(&incident(false, false), &event(), &templates());
        let embed = &message.embeds[0];

        assert_eq!(message.content, "new incident");
        assert_eq!(embed.color, Some(RED));
        assert_eq!(embed.image.as_ref().unwrap().url, "https://shots.example/1.png");
        assert_eq!(field_names(&message), vec!["View incident"]);
    }

    #[test]
    fn new_incident_without_screenshot_uses_fallback() {
        let mut incident = incident(false, false);
        incident.data.attributes.screenshot_url = None;

        let message = render(&incident, &event(), &templates());
        assert_eq!(message.embeds[0].image.as_ref().unwrap().url, FALLBACK_IMAGE);
    }

    #[test]
    fn acknowledged_incident_is_yellow_with_ack_fields() {
        let message = render(&incident(true, false), &event(), &templates());
        let embed = &message.embeds[0];

        assert_eq!(message.content, "incident updated");
        assert_eq!(embed.color, Some(YELLOW));
        assert_eq!(embed.image.as_ref().unwrap().url, ACKNOWLEDGED_IMAGE);
        assert_eq!(
            field_names(&message),
            vec!["Acknowledged at", "Acknowledged by", "View incident"]
        );
        assert_eq!(embed.fields[0].value, "2023-05-01T02:00:00.000Z");
        assert_eq!(embed.fields[0].inline, Some(true));
        assert_eq!(embed.fields[1].value, "Unknown");
    }

    #[test]
    fn resolved_incident_omits_ack_fields() {
        for acknowledged in [false, true] {
            let message = render(&incident(acknowledged, true), &event(), &templates());
            let embed = &message.embeds[0];

            assert_eq!(message.content, "incident resolved");
            assert_eq!(embed.color, Some(GREEN));
            assert_eq!(embed.image.as_ref().unwrap().url, RESOLVED_IMAGE);
            assert_eq!(
                field_names(&message),
                vec!["Resolved at", "Resolved by", "View incident"]
            );
            assert_eq!(embed.fields[1].value, "Automatically");
        }
    }

    #[test]
    fn resolver_is_reported_when_known() {
        let mut incident = incident(true, true);
        incident.data.attributes.resolved_by = Some("troy@7tv.app".to_string());

        let message = render(&incident, &event(), &templates());
        assert_eq!(message.embeds[0].fields[1].value, "troy@7tv.app");
    }

    #[test]
    fn empty_actor_falls_back() {
        let mut acknowledged = incident(true, false);
        acknowledged.data.attributes.acknowledged_by = Some(String::new());
        let message = render(&acknowledged, &event(), &templates());
        assert_eq!(message.embeds[0].fields[1].value, "Unknown");

        let mut resolved = incident(true, true);
        resolved.data.attributes.resolved_by = Some(String::new());
        let message = render(&resolved, &event(), &templates());
        assert_eq!(message.embeds[0].fields[1].value, "Automatically");
    }

    #[test]
    fn timestamp_is_started_at_in_every_state() {
        for (acknowledged, resolved) in [(false, false), (true, false), (true, true)] {
            let message = render(&incident(acknowledged, resolved), &event(), &templates());
            assert_eq!(
                message.embeds[0].timestamp.as_deref(),
                Some("2023-05-01T01:00:00.000Z")
            );
        }
    }

    #[test]
    fn description_includes_checked_url_block() {
        let message = render(&incident(false, false), &event(), &templates());

        assert_eq!(
            message.embeds[0].description.as_deref(),
            Some(
                "**ID**: 321\n**Cause**: Status 503\n\
                 **Checked URL**: `GET https://7tv.io/health`\n**Response** ```bad gateway```"
            )
        );
    }

    #[test]
    fn description_without_url_has_only_id_and_cause() {
        let mut incident = incident(false, false);
        incident.data.attributes.url = None;

        let message = render(&incident, &event(), &templates());
        assert_eq!(
            message.embeds[0].description.as_deref(),
            Some("**ID**: 321\n**Cause**: Status 503")
        );
        assert_eq!(message.embeds[0].url, None);
    }

    #[test]
    fn long_description_is_cut_then_suffixed() {
        let mut incident = incident(false, false);
        incident.data.attributes.response_content = Some("x".repeat(3000));

        let full = format!(
            "**ID**: 321\n**Cause**: Status 503\n\
             **Checked URL**: `GET https://7tv.io/health`\n**Response** ```{}```",
            "x".repeat(3000)
        );

        let message = render(&incident, &event(), &templates());
        let description = message.embeds[0].description.clone().unwrap();

        assert_eq!(description.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(description.ends_with("..."));
        assert_eq!(&description[..DESCRIPTION_LIMIT], &full[..DESCRIPTION_LIMIT]);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let description = "é".repeat(DESCRIPTION_LIMIT);
        assert_eq!(truncate_description(description.clone()), description);

        let truncated = truncate_description("é".repeat(DESCRIPTION_LIMIT + 1));
        assert_eq!(truncated.chars().count(), DESCRIPTION_LIMIT + 3);
    }

    #[test]
    fn link_points_at_team_incident() {
        let message = render(&incident(false, false), &event(), &templates());
        let link = message.embeds[0].fields.last().unwrap();

        assert_eq!(link.value, "[Click here](https://betteruptime.com/team/77/incidents/321)");
        assert_eq!(link.inline, None);
    }

    #[test]
    fn missing_name_falls_back() {
        let mut incident = incident(false, false);
        incident.data.attributes.name = None;

        let message = render(&incident, &event(), &templates());
        assert_eq!(message.embeds[0].title.as_deref(), Some("Unnamed incident"));
    }
}
