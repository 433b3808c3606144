use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::{
    resource::{Capabilities, Id, Operation, Parent, Resource},
    resources::{ExperimentResult, Goal, Project, Schedule, Stat, Variation},
    Client, Result,
};

/// An A/B test definition, created under a [`Project`].
///
/// Experiments can only be listed per project, see [`Project::experiments`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experiment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `Running`, `Paused`, `Not started` or `Archived`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `immediate`, `manual` or `conditional`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub custom_css: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub custom_js: Option<Option<String>>,
    /// Share of traffic included, in basis points (10000 = 100%).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_included: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_conditions: Option<Vec<UrlCondition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multivariate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A URL targeting rule of an experiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// `simple`, `exact`, `substring` or `regex`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Experiment {
    const NAME: &'static str = "experiment";
    const COLLECTION: &'static str = "experiments";
    const PARENT: Option<Parent> = Some(Parent::of::<Project>());
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "audience_ids",
        "activation_mode",
        "description",
        "edit_url",
        "status",
        "custom_css",
        "custom_js",
        "percentage_included",
        "url_conditions",
    ];
    const CAPABILITIES: Capabilities = Capabilities::ALL.without(Operation::List);

    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Experiment {
    pub fn variations(&self, client: &Client) -> Result<Vec<Variation>> {
        self.children(client)
    }

    pub fn results(&self, client: &Client) -> Result<Vec<ExperimentResult>> {
        self.children(client)
    }

    pub fn stats(&self, client: &Client) -> Result<Vec<Stat>> {
        self.children(client)
    }

    pub fn schedules(&self, client: &Client) -> Result<Vec<Schedule>> {
        self.children(client)
    }

    /// Attach the goal `goal_id` to this experiment.
    ///
    /// The API has no dedicated call for this: the goal is fetched, this experiment's id is added
    /// to its `experiment_ids` and the whole list is written back. The update is not atomic, so
    /// a concurrent change to the same goal's list can be lost (last writer wins).
    pub fn add_goal(&self, client: &Client, goal_id: Id) -> Result<Goal> {
        let experiment_id = self.require_id()?;
        log::debug!(target: "optimizely", experiment_id, goal_id; "adding experiment to goal");

        let goals = client.goals();
        let mut experiment_ids = goals.get(goal_id)?.experiment_ids.unwrap_or_default();
        if !experiment_ids.contains(&experiment_id) {
            experiment_ids.push(experiment_id);
        }
        goals.update(goal_id, &json!({ "experiment_ids": experiment_ids }))
    }

    /// Detach the goal `goal_id` from this experiment. Same read-modify-write caveat as
    /// [`Experiment::add_goal`].
    pub fn remove_goal(&self, client: &Client, goal_id: Id) -> Result<Goal> {
        let experiment_id = self.require_id()?;
        log::debug!(target: "optimizely", experiment_id, goal_id; "removing experiment from goal");

        let goals = client.goals();
        let mut experiment_ids = goals.get(goal_id)?.experiment_ids.unwrap_or_default();
        experiment_ids.retain(|&id| id != experiment_id);
        goals.update(goal_id, &json!({ "experiment_ids": experiment_ids }))
    }
}
