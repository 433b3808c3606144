use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    resource::{Capabilities, Id, Operation, Resource},
    resources::{Audience, Dimension, Experiment, Goal},
    Client, Result,
};

/// A top-level experimentation workspace.
///
/// Projects cannot be deleted through the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// `Active` or `Archived`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_jquery: Option<bool>,
    /// Project-wide JavaScript injected before experiment code.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub project_javascript: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_force_variation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_disabled_experiments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_anonymization: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub ip_filter: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_revision: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_last_modified: Option<DateTime<Utc>>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Project {
    const NAME: &'static str = "project";
    const COLLECTION: &'static str = "projects";
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "project_status",
        "project_name",
        "include_jquery",
        "project_javascript",
        "enable_force_variation",
        "exclude_disabled_experiments",
        "exclude_names",
        "ip_anonymization",
        "ip_filter",
    ];
    const CAPABILITIES: Capabilities = Capabilities::ALL.without(Operation::Delete);

    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Project {
    pub fn experiments(&self, client: &Client) -> Result<Vec<Experiment>> {
        self.children(client)
    }

    pub fn goals(&self, client: &Client) -> Result<Vec<Goal>> {
        self.children(client)
    }

    pub fn audiences(&self, client: &Client) -> Result<Vec<Audience>> {
        self.children(client)
    }

    pub fn dimensions(&self, client: &Client) -> Result<Vec<Dimension>> {
        self.children(client)
    }
}
