//! Coordinate ingestion and geodesic path length.

use crate::model::Coordinate;
use geo::{Distance, Geodesic, Point};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("no coordinates")]
    Empty,

    #[error("token '{0}' is not lon,lat[,alt]")]
    BadToken(String),

    #[error("token '{0}' is outside WGS84 range")]
    OutOfRange(String),
}

impl Coordinate {
    /// Builds a coordinate, rejecting positions outside WGS84 bounds.
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon))
            .then_some(Self { lat, lon })
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// Reads a KML `<coordinates>` body.
///
/// Tokens are whitespace separated `lon,lat[,alt]`; altitude is dropped and
/// the axes swapped. This is the only place the source axis order is handled.
pub fn parse_coordinates(text: &str) -> Result<Vec<Coordinate>, CoordinateError> {
    let coords = text
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<Vec<_>, _>>()?;

    if coords.is_empty() {
        return Err(CoordinateError::Empty);
    }
    Ok(coords)
}

fn parse_token(token: &str) -> Result<Coordinate, CoordinateError> {
    let values: Vec<f64> = token
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| CoordinateError::BadToken(token.to_string()))?;

    match values.as_slice() {
        [lon, lat] | [lon, lat, _] => {
            Coordinate::new(*lat, *lon).ok_or_else(|| CoordinateError::OutOfRange(token.to_string()))
        }
        _ => Err(CoordinateError::BadToken(token.to_string())),
    }
}

/// Sum of geodesic distances between consecutive points, in meters.
///
/// Empty and single-point paths measure 0.
#[must_use]
pub fn path_length(coords: &[Coordinate]) -> f64 {
    coords
        .windows(2)
        .map(|pair| Geodesic.distance(pair[0].to_point(), pair[1].to_point()))
        .sum()
}
