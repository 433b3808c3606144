use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    resource::{Capabilities, Id, Operation, Parent, Resource},
    resources::Experiment,
};

/// A start/stop window for an [`Experiment`], created under it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_id: Option<Id>,
    /// `Some(None)` starts the experiment right away.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub start_time: Option<Option<DateTime<Utc>>>,
    /// `Some(None)` runs the experiment until it is stopped by hand.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub stop_time: Option<Option<DateTime<Utc>>>,
    /// `ACTIVE` or `INACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Schedule {
    const NAME: &'static str = "schedule";
    const COLLECTION: &'static str = "schedules";
    const PARENT: Option<Parent> = Some(Parent::of::<Experiment>());
    const EDITABLE_FIELDS: &'static [&'static str] = &["start_time", "stop_time"];
    const CAPABILITIES: Capabilities = Capabilities::ALL.without(Operation::List);

    fn id(&self) -> Option<Id> {
        self.id
    }
}
