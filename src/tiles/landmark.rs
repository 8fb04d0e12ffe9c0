// src/tiles/landmark.rs
//! Named reference locations for quick lookups

use super::math::GeoCoord;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Landmark {
    Bregenz,
    Vienna,
    Ludesch,
    Equator,
    Majorca,
}

impl Landmark {
    pub fn coord(&self) -> GeoCoord {
        match self {
            Landmark::Bregenz => GeoCoord::new(47.5008, 9.7423),
            Landmark::Vienna => GeoCoord::new(48.2082, 16.3738),
            Landmark::Ludesch => GeoCoord::new(47.1958, 9.7793),
            Landmark::Equator => GeoCoord::new(0.0, 20.0),
            Landmark::Majorca => GeoCoord::new(39.6953, 3.0176),
        }
    }
}
