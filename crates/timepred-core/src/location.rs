//! Spatial location carried by events

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in 3-D space with a heading
///
/// The heading unit (radians or degrees) is left to the caller. Locations take
/// no part in the temporal relations.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Heading angle
    pub theta: f64,
}

impl Location {
    pub const ORIGIN: Location = Location {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        theta: 0.0,
    };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64, theta: f64) -> Self {
        Location { x, y, z, theta }
    }

    /// Same position, new heading
    #[inline]
    pub fn with_heading(self, theta: f64) -> Self {
        Location { theta, ..self }
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.theta.is_finite()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{:.3} {:.3} {:.3} {:.3}>",
            self.x, self.y, self.z, self.theta
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_three_decimals() {
        let l = Location::new(1.0, -2.5, 3.14159, 0.5);
        assert_eq!(l.to_string(), "<1.000 -2.500 3.142 0.500>");
        assert_eq!(Location::ORIGIN.to_string(), "<0.000 0.000 0.000 0.000>");
    }

    #[test]
    fn test_with_heading_keeps_position() {
        let l = Location::new(1.0, 2.0, 3.0, 0.0).with_heading(1.5);
        assert_eq!(l, Location::new(1.0, 2.0, 3.0, 1.5));
    }

    #[test]
    fn test_is_finite() {
        assert!(Location::default().is_finite());
        assert!(!Location::new(f64::NAN, 0.0, 0.0, 0.0).is_finite());
        assert!(!Location::new(0.0, 0.0, f64::INFINITY, 0.0).is_finite());
    }
}
