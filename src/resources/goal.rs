use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    resource::{Capabilities, Id, Operation, Parent, Resource},
    resources::Project,
};

/// A conversion metric, created under a [`Project`].
///
/// Goals are linked to experiments through `experiment_ids`; see
/// [`Experiment::add_goal`](crate::Experiment::add_goal).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_ids: Option<Vec<Id>>,
    /// 0 click, 1 custom event, 2 engagement, 3 pageviews, 4 revenue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_to_experiments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url_match_types: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_match_types: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Goal {
    const NAME: &'static str = "goal";
    const COLLECTION: &'static str = "goals";
    const PARENT: Option<Parent> = Some(Parent::of::<Project>());
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "addable",
        "archived",
        "description",
        "experiment_ids",
        "goal_type",
        "selector",
        "target_to_experiments",
        "target_urls",
        "target_url_match_types",
        "title",
        "urls",
        "url_match_types",
    ];
    const CAPABILITIES: Capabilities = Capabilities::ALL.without(Operation::List);

    fn id(&self) -> Option<Id> {
        self.id
    }
}
