use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A geographic position in degrees. No altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    pub fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    pub fn to_point(self) -> Point<f64> {
        Point::from(self.to_coord())
    }
}

impl From<LngLat> for Coord<f64> {
    fn from(value: LngLat) -> Self {
        value.to_coord()
    }
}

impl From<Coord<f64>> for LngLat {
    fn from(value: Coord<f64>) -> Self {
        Self {
            lng: value.x,
            lat: value.y,
        }
    }
}

impl From<Point<f64>> for LngLat {
    fn from(value: Point<f64>) -> Self {
        Self {
            lng: value.x(),
            lat: value.y(),
        }
    }
}
