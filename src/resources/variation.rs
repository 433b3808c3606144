use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    resource::{Capabilities, Id, Operation, Parent, Resource},
    resources::Experiment,
};

/// One arm of an [`Experiment`], created under it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_component: Option<String>,
    /// Traffic share in basis points. `Some(None)` is sent as `null` and splits traffic evenly.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub weight: Option<Option<u32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub section_id: Option<Option<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Variation {
    const NAME: &'static str = "variation";
    const COLLECTION: &'static str = "variations";
    const PARENT: Option<Parent> = Some(Parent::of::<Experiment>());
    const EDITABLE_FIELDS: &'static [&'static str] =
        &["description", "is_paused", "js_component", "weight"];
    const CAPABILITIES: Capabilities = Capabilities::ALL.without(Operation::List);

    fn id(&self) -> Option<Id> {
        self.id
    }
}
