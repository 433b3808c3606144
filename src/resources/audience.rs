use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    resource::{Capabilities, Id, Operation, Parent, Resource},
    resources::Project,
};

/// A visitor segment, created under a [`Project`]. Audiences cannot be deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Condition tree, JSON-encoded as a string by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Audience {
    const NAME: &'static str = "audience";
    const COLLECTION: &'static str = "audiences";
    const PARENT: Option<Parent> = Some(Parent::of::<Project>());
    const EDITABLE_FIELDS: &'static [&'static str] =
        &["name", "description", "conditions", "segmentation"];
    const CAPABILITIES: Capabilities = Capabilities::ALL
        .without(Operation::List)
        .without(Operation::Delete);

    fn id(&self) -> Option<Id> {
        self.id
    }
}
