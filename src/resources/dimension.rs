use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    resource::{Capabilities, Id, Operation, Parent, Resource},
    resources::Project,
};

/// A custom segmentation dimension, created under a [`Project`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_api_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Dimension {
    const NAME: &'static str = "dimension";
    const COLLECTION: &'static str = "dimensions";
    const PARENT: Option<Parent> = Some(Parent::of::<Project>());
    const EDITABLE_FIELDS: &'static [&'static str] = &["name", "client_api_name", "description"];
    const CAPABILITIES: Capabilities = Capabilities::ALL.without(Operation::List);

    fn id(&self) -> Option<Id> {
        self.id
    }
}
