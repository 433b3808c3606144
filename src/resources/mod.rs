//! Concrete Optimizely resource types.
//!
//! Every record keeps the fields this crate knows about as typed `Option`s and collects anything
//! else the API returns in `extra`, so nothing is lost when a record is decoded and saved back.
//!
//! Fields the API clears with an explicit `null` (a variation's `weight`, a schedule's
//! `stop_time`, ...) are `Option<Option<T>>`: `None` leaves the field out of the payload,
//! `Some(None)` sends `null`. Other typed fields read `null` the same as a missing key.

mod audience;
mod dimension;
mod experiment;
mod goal;
mod project;
mod result;
mod schedule;
mod variation;

pub use audience::Audience;
pub use dimension::Dimension;
pub use experiment::{Experiment, UrlCondition};
pub use goal::Goal;
pub use project::Project;
pub use result::{ExperimentResult, IdValue, Stat};
pub use schedule::Schedule;
pub use variation::Variation;
