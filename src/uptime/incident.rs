use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event posted to the relay by Better Uptime.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IncidentEvent {
    pub id: String,
    pub team_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentAttributes {
    pub name: Option<String>,
    pub url: Option<String>,
    pub http_method: Option<String>,
    pub cause: Option<String>,
    pub started_at: DateTime<Utc>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub acknowledged_by: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
    pub response_content: Option<String>,
    pub screenshot_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    pub data: Option<ResourceRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentRelationships {
    pub monitor: Option<Relationship>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: IncidentAttributes,
    #[serde(default)]
    pub relationships: IncidentRelationships,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorAttributes {
    pub url: Option<String>,
    pub pronounceable_name: Option<String>,
    pub monitor_type: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncludedResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: MonitorAttributes,
}

/// `GET /incidents/{id}` response document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Incident {
    pub data: IncidentData,
    #[serde(default)]
    pub included: Vec<IncludedResource>,
}

impl Incident {
    /// The monitor this incident was raised for, when it was included.
    pub fn monitor(&self) -> Option<&IncludedResource> {
        let monitor = self.data.relationships.monitor.as_ref()?.data.as_ref()?;
        self.included
            .iter()
            .find(|resource| resource.id == monitor.id && resource.kind == monitor.kind)
    }
}

/// Body of `POST /incidents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIncident {
    pub name: String,
    pub summary: String,
    pub requester_email: String,
    pub description: String,
    pub policy_id: String,
}
