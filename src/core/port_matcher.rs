//! Resolve a location to a seaport and rank ports by closeness.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::core::distance::haversine_km;
use crate::domain::model::{Coordinate, Location, Port};
use crate::domain::report::{MatchedBy, RankedPortRecord};

/// A port paired with its distance from a reference point. `None` means the
/// port has no usable coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPort<'a> {
    pub port: &'a Port,
    pub distance_km: Option<f64>,
}

impl From<RankedPort<'_>> for RankedPortRecord {
    fn from(ranked: RankedPort<'_>) -> Self {
        RankedPortRecord {
            port: ranked.port.clone(),
            distance_km: ranked.distance_km,
        }
    }
}

/// Strip diacritics, trim and upper-case so "Durrës" and "DURRES" compare equal.
pub fn normalize_port_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_uppercase()
}

fn distance_to(origin: &Coordinate, port: &Port) -> Option<f64> {
    port.coordinates
        .as_ref()
        .and_then(|coordinates| haversine_km(origin, coordinates).ok())
}

/// Best port for a location: an exact (normalized) name match wins outright,
/// otherwise the geographically closest port with coordinates. Ties go to the
/// earlier candidate.
pub fn match_port<'a>(
    location: &Location,
    candidates: &'a [Port],
) -> Option<(&'a Port, MatchedBy)> {
    let city = normalize_port_name(&location.city);
    if !city.is_empty() {
        if let Some(port) = candidates
            .iter()
            .find(|port| normalize_port_name(&port.name) == city)
        {
            tracing::trace!(city = %location.city, port = %port.name, "port matched by name");
            return Some((port, MatchedBy::Name));
        }
    }

    let origin = location.coordinate();
    let mut best: Option<(&Port, f64)> = None;
    for port in candidates {
        let Some(distance) = distance_to(&origin, port) else {
            continue;
        };
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((port, distance)),
        }
    }

    if let Some((port, distance)) = best {
        tracing::trace!(
            city = %location.city,
            port = %port.name,
            distance_km = distance,
            "port matched by distance"
        );
    }
    best.map(|(port, _)| (port, MatchedBy::Distance))
}

pub fn find_best_port<'a>(location: &Location, candidates: &'a [Port]) -> Option<&'a Port> {
    match_port(location, candidates).map(|(port, _)| port)
}

/// Ports ordered by ascending distance from `reference`, ports without usable
/// coordinates last. Stable, so equal distances keep their input order.
pub fn rank_by_closeness<'a>(reference: &Location, candidates: &'a [Port]) -> Vec<RankedPort<'a>> {
    let origin = reference.coordinate();
    let mut ranked: Vec<RankedPort<'a>> = candidates
        .iter()
        .map(|port| RankedPort {
            port,
            distance_km: distance_to(&origin, port),
        })
        .collect();

    ranked.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked
}

pub fn sort_by_closeness(reference: &Location, candidates: &[Port]) -> Vec<Port> {
    rank_by_closeness(reference, candidates)
        .into_iter()
        .map(|ranked| ranked.port.clone())
        .collect()
}

pub fn nearest_ports(reference: &Location, candidates: &[Port], limit: usize) -> Vec<Port> {
    rank_by_closeness(reference, candidates)
        .into_iter()
        .take(limit)
        .map(|ranked| ranked.port.clone())
        .collect()
}
