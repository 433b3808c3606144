//! A Rust client for the Optimizely Experiments REST API.
//!
//! # Overview
//!
//! The crate revolves around a [`Client`] built from a [`ClientConfig`]. Each API resource
//! ([`Project`], [`Experiment`], [`Variation`], [`Goal`], [`Audience`], [`Dimension`],
//! [`Schedule`], and the read-only [`ExperimentResult`] and [`Stat`]) is a typed record
//! implementing [`Resource`], and the client hands out a [`Resources`] handle per type with the
//! usual `list`/`get`/`create`/`update`/`delete` operations.
//!
//! ```no_run
//! use optimizely::{ClientConfig, Resource};
//!
//! let client = ClientConfig::from_api_key("api-key").to_client()?;
//! let mut project = client.projects().get(12345)?;
//! for experiment in project.experiments(&client)? {
//!     println!("{:?}: {:?}", experiment.id, experiment.status);
//! }
//! project.project_name = Some("Renamed".to_owned());
//! project.save(&client)?;
//! # Ok::<(), optimizely::Error>(())
//! ```
//!
//! Every call is a single blocking HTTP round trip. Nothing is cached, retried or paginated.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. HTTP error statuses map to one variant each
//! (400 [`Error::BadRequest`], 401 [`Error::Unauthorized`], 403 [`Error::Forbidden`],
//! 404 [`Error::NotFound`], 429 [`Error::TooManyRequests`], 503 [`Error::ServiceUnavailable`],
//! anything else [`Error::Api`]). Operations the API does not offer for a resource type fail
//! with [`Error::Unsupported`] before any request is made.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate with the `optimizely`
//! target. Consider integrating a `log`-compatible logger implementation for visibility into
//! the requests being sent.

#![warn(rustdoc::missing_crate_level_docs)]

mod client;
mod config;
mod error;
pub mod resource;
pub mod resources;
mod response;

pub use client::Client;
pub use config::{ClientConfig, TokenType};
pub use error::{Error, Result};
pub use resource::{Capabilities, Id, Operation, Parent, Resource, Resources};
pub use resources::{
    Audience, Dimension, Experiment, ExperimentResult, Goal, IdValue, Project, Schedule, Stat,
    UrlCondition, Variation,
};
pub use response::{parse_response, ApiResponse};

/// HTTP method type accepted by [`Client::send`].
pub use reqwest::Method;
