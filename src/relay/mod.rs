//! Better Uptime incident events relayed to a Discord channel.

pub mod render;

use tracing::{error, info};

use crate::{error::AppError, uptime::incident::IncidentEvent, WebhookState};
pub use render::{render, IncidentState};

const INCIDENT_EVENT: &str = "incident";

/// Fetches the incident named by an authenticated event body, renders it and
/// posts it to the configured webhook.
pub async fn relay_event(body: &[u8], state: &WebhookState) -> Result<(), AppError> {
    let event: IncidentEvent =
        serde_json::from_slice::<Option<IncidentEvent>>(body)?.ok_or(AppError::MissingBody)?;

    if event.kind != INCIDENT_EVENT {
        return Err(AppError::NotAnIncident(event.kind));
    }

    let incident = state
        .uptime
        .fetch_incident(&event.id)
        .await
        .map_err(AppError::FetchIncident)?;

    let message = render(&incident, &event, &state.config.templates);
    if let Err(err) = state.webhook.send(&message).await {
        error!(incident = %event.id, ?message, "discord rejected incident message");
        return Err(AppError::Delivery(err));
    }

    let monitor = incident
        .monitor()
        .and_then(|monitor| monitor.attributes.pronounceable_name.as_deref());
    info!(
        incident = %event.id,
        monitor = monitor.unwrap_or("unknown"),
        state = ?IncidentState::classify(&incident),
        "relayed incident"
    );
    Ok(())
}
