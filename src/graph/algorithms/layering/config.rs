//! Layering configuration
//!
//! This module provides the options that control a
//! [`CoffmanGrahamSorter`](crate::CoffmanGrahamSorter): the maximum layer width, whether
//! assignments survive between sorts, and which direction of the graph is layered.

use strum::{Display, EnumCount, EnumIter};

use crate::{Error, Result};

/// What happens to earlier layer assignments when a sorter runs again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum Retention {
    /// Every sort starts from empty layers. Layering is a pure function of the graph.
    #[default]
    Reset,
    /// Assignments persist. Nodes placed by an earlier sort keep their layer and only new
    /// nodes are assigned, which keeps the layout stable while the graph grows.
    Persist,
}

/// Which direction of the graph is layered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Sources of the graph land in layer 0.
    #[default]
    AsGiven,
    /// The transpose is layered, so sinks of the graph land in layer 0.
    Reversed,
}

/// Configuration for Coffman-Graham layering
///
/// The width is always chosen by the caller, so there is no `Default`.
///
/// # Examples
///
/// ```rust
/// use graff::{LayeringConfig, Orientation, Retention};
///
/// let config = LayeringConfig::new(3)
///     .with_retention(Retention::Persist)
///     .with_orientation(Orientation::Reversed);
///
/// assert!(config.validate().is_ok());
/// assert!(config.is_incremental());
/// assert!(LayeringConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayeringConfig {
    /// Maximum number of nodes per layer, at least one
    pub width: usize,
    /// Whether assignments survive between sorts
    pub retention: Retention,
    /// Which direction of the graph is layered
    pub orientation: Orientation,
}

impl LayeringConfig {
    /// Creates a one-shot configuration with the given width
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            retention: Retention::Reset,
            orientation: Orientation::AsGiven,
        }
    }

    /// Creates an incremental configuration with the given width
    ///
    /// Equivalent to `LayeringConfig::new(width).with_retention(Retention::Persist)`.
    #[must_use]
    pub fn incremental(width: usize) -> Self {
        Self::new(width).with_retention(Retention::Persist)
    }

    /// Replaces the layer width
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the retention policy
    #[must_use]
    pub fn with_retention(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }

    /// Replaces the orientation
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns `true` if assignments persist between sorts
    #[must_use]
    pub fn is_incremental(&self) -> bool {
        self.retention == Retention::Persist
    }

    /// Checks that the configuration can be used for layering
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if the width is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidWidth(self.width));
        }
        Ok(())
    }
}
