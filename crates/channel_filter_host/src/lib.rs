// SPDX-License-Identifier: MIT OR Apache-2.0
//! Headless reference host for the channel filter.
//!
//! Provides what a host application supplies around the filter core:
//! - Scene model with selectable objects and their animation curves
//! - Adapter that resolves a click's channels and writes results back
//! - Click scripts, settings and channel reports
//!
//! ## Architecture
//!
//! The host owns the scene and decides which curves a click applies to;
//! all selection logic lives in the `channel_filter` crate.

pub mod adapter;
pub mod error;
pub mod report;
pub mod scene;
pub mod script;
pub mod settings;

pub use adapter::{HostAdapter, OperatorReport};
pub use error::{HostError, Result};
pub use scene::{Action, AnimationData, FCurve, Scene, SceneObject};
pub use script::{parse_script, Click};
pub use settings::{HostSettings, OutputFormat, SETTINGS_FILE_NAME};
