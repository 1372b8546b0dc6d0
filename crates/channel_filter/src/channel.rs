// SPDX-License-Identifier: MIT OR Apache-2.0
//! Channel model: owners, axes, categories and the channel seam.

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque handle of the object that owns a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub Uuid);

impl OwnerId {
    /// Create a new random owner ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Vector component a channel animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// First component (index 0)
    X,
    /// Second component (index 1)
    Y,
    /// Third component (index 2)
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Array index of this axis within its property
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Axis for an array index, if it is one of X/Y/Z
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Upper-case letter used on buttons
    pub fn letter(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Axis {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "0" => Ok(Self::X),
            "y" | "1" => Ok(Self::Y),
            "z" | "2" => Ok(Self::Z),
            _ => Err(FilterError::InvalidAxis(s.to_string())),
        }
    }
}

/// Semantic group of channels, identified by a data-path token.
///
/// The set of categories is open: profiles ship Location, Rotation and
/// Scale, and hosts may declare more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Display name ("Location")
    pub name: String,
    /// Token searched for inside a channel's data path ("location")
    pub data_path: String,
}

impl Category {
    /// Create a category
    pub fn new(name: impl Into<String>, data_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_path: data_path.into(),
        }
    }

    /// Object/bone location
    pub fn location() -> Self {
        Self::new("Location", "location")
    }

    /// Euler rotation
    pub fn rotation() -> Self {
        Self::new("Rotation", "rotation_euler")
    }

    /// Object/bone scale
    pub fn scale() -> Self {
        Self::new("Scale", "scale")
    }

    /// Lower-case identifier used inside action ids ("location")
    pub fn slug(&self) -> String {
        self.name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Whether a data path belongs to this category.
    ///
    /// Substring match, so `delta_location` and `pose.bones["Hand"].location`
    /// both count as Location. An empty token matches nothing.
    pub fn matches(&self, data_path: &str) -> bool {
        !self.data_path.is_empty() && data_path.contains(self.data_path.as_str())
    }

    /// Check the declaration is usable
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.name.trim().is_empty() {
            return Err(FilterError::InvalidCategory {
                name: self.name.clone(),
                reason: "name is empty",
            });
        }
        if self.data_path.is_empty() {
            return Err(FilterError::InvalidCategory {
                name: self.name.clone(),
                reason: "data path token is empty",
            });
        }
        Ok(())
    }
}

/// A scalar animation curve as seen by the filter.
///
/// Hosts implement this for their live curve type so the filter can
/// read-modify-write the two flags in place.
pub trait AnimationChannel {
    /// Property path the curve animates
    fn data_path(&self) -> &str;

    /// Component index within the property
    fn array_index(&self) -> usize;

    /// Whether the channel is selected
    fn is_selected(&self) -> bool;

    /// Set the selected flag
    fn set_selected(&mut self, selected: bool);

    /// Whether the channel is hidden in the editor
    fn is_hidden(&self) -> bool;

    /// Set the hidden flag
    fn set_hidden(&mut self, hidden: bool);

    /// Whether this channel is the `axis` component of `category`
    fn matches(&self, category: &Category, axis: Axis) -> bool {
        self.array_index() == axis.index() && category.matches(self.data_path())
    }
}

impl<T: AnimationChannel + ?Sized> AnimationChannel for &mut T {
    fn data_path(&self) -> &str {
        (**self).data_path()
    }

    fn array_index(&self) -> usize {
        (**self).array_index()
    }

    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }

    fn set_selected(&mut self, selected: bool) {
        (**self).set_selected(selected);
    }

    fn is_hidden(&self) -> bool {
        (**self).is_hidden()
    }

    fn set_hidden(&mut self, hidden: bool) {
        (**self).set_hidden(hidden);
    }
}

/// Plain channel value, for hosts without their own curve type and for tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Owning object
    pub owner: OwnerId,
    /// Property path
    pub data_path: String,
    /// Component index
    pub array_index: usize,
    /// Selected flag
    pub selected: bool,
    /// Hidden flag
    pub hidden: bool,
}

impl Channel {
    /// Create an unselected, visible channel for a category component
    pub fn new(owner: OwnerId, category: &Category, axis: Axis) -> Self {
        Self::with_path(owner, category.data_path.clone(), axis.index())
    }

    /// Create an unselected, visible channel for an arbitrary path
    pub fn with_path(owner: OwnerId, data_path: impl Into<String>, array_index: usize) -> Self {
        Self {
            owner,
            data_path: data_path.into(),
            array_index,
            selected: false,
            hidden: false,
        }
    }

    /// Set the selected flag
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the hidden flag
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Axis of this channel, if its index is X/Y/Z
    pub fn axis(&self) -> Option<Axis> {
        Axis::from_index(self.array_index)
    }

    /// First category in `categories` this channel belongs to
    pub fn category_in<'a>(&self, categories: &'a [Category]) -> Option<&'a Category> {
        categories.iter().find(|c| c.matches(&self.data_path))
    }
}

impl AnimationChannel for Channel {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn array_index(&self) -> usize {
        self.array_index
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
