// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-axis channel filtering for animation curve editors.
//!
//! This crate provides the selection logic behind the "Filter Channels"
//! panel: one button per category and axis, where the modifier keys held
//! on click decide what happens:
//! - Plain click replaces the filter
//! - Shift-click adds to the filter
//! - Ctrl-click removes from the filter
//!
//! ## Architecture
//!
//! The core never talks to a host application. It is built on:
//! - The [`AnimationChannel`] trait, implemented by whatever curve type the host owns
//! - Pure operations over a borrowed slice of channels ([`apply`], [`refresh`], [`reset`], [`unselect`])
//! - A versioned [`FilterProfile`] declaring the supported categories and actions
//! - An egui [`FilterPanel`] the host can embed to collect clicks

pub mod action;
pub mod channel;
pub mod engine;
pub mod error;
pub mod profile;
pub mod request;
pub mod reset;
pub mod ui;
pub mod visibility;

pub use action::{ActionReport, FilterAction};
pub use channel::{AnimationChannel, Axis, Category, Channel, OwnerId};
pub use engine::{apply, ApplyReport};
pub use error::FilterError;
pub use profile::{FilterProfile, ProfileVersion};
pub use request::{Modifiers, SelectMode, SelectionRequest};
pub use reset::{reset, unselect};
pub use ui::{FilterPanel, PanelClick, PanelSection};
pub use visibility::{refresh, VisibilityReport};
