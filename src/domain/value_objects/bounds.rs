//! Geographic bounds value objects
//!
//! Coordinates are WGS84 degrees. Rectangles are axis-aligned in lat/long and do
//! not wrap the antimeridian.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build from a GeoJSON position (`[longitude, latitude, ...]`).
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }
}

/// Smallest axis-aligned rectangle covering a set of coordinates.
///
/// A single point is a valid, degenerate rectangle. The absence of bounds is
/// expressed as `Option<GeoBounds>`, never as a sentinel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self::from_point(a).extended(b)
    }

    pub fn extended(mut self, point: LatLng) -> Self {
        self.extend(point);
        self
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    pub fn union(&self, other: &GeoBounds) -> GeoBounds {
        GeoBounds {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }

    pub fn contains(&self, other: &GeoBounds) -> bool {
        self.south <= other.south
            && self.west <= other.west
            && self.north >= other.north
            && self.east >= other.east
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn is_point(&self) -> bool {
        self.south == self.north && self.west == self.east
    }
}

impl std::fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.5}, {:.5}] - [{:.5}, {:.5}]",
            self.south, self.west, self.north, self.east
        )
    }
}

/// Inset padding in screen pixels applied when fitting the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitPadding {
    pub x: u32,
    pub y: u32,
}

impl FitPadding {
    pub const fn uniform(px: u32) -> Self {
        Self { x: px, y: px }
    }
}

impl Default for FitPadding {
    fn default() -> Self {
        Self::uniform(50)
    }
}
