use serde::{Deserialize, Serialize};

use crate::utils::error::QuoteError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A seaport from the port catalog. Ports without coordinates can still be
/// matched by name but never by distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub coordinates: Option<Coordinate>,
}

/// The place being matched to a port, usually the shipment's pickup city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Haulage {
    pub unit_tariff: f64,
    pub multi_stop: f64,
    pub overtime_tariff: f64,
    #[serde(default)]
    pub haulier_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    #[serde(default)]
    pub service_name: String,
    pub price: f64,
}

/// Service charges attached to one container type of a seafreight offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerCharge {
    #[serde(default)]
    pub container: String,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seafreight {
    #[serde(default)]
    pub default_container: String,
    #[serde(default)]
    pub transit_time: f64,
    pub base_price: f64,
    #[serde(default)]
    pub containers: Vec<ContainerCharge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Misc {
    #[serde(default)]
    pub text_services: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOption {
    #[serde(default)]
    pub selected_haulage: Option<Haulage>,
    #[serde(default)]
    pub selected_seafreights: Vec<Seafreight>,
    #[serde(default)]
    pub my_miscs: Vec<Misc>,
}

impl PricingOption {
    pub fn has_haulage(&self) -> bool {
        self.selected_haulage.is_some()
    }
}

pub const MAX_OPTIONS: usize = 3;

/// The three positional comparison slots. Short inputs are padded with empty
/// slots; longer inputs are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Option<PricingOption>>",
    into = "Vec<Option<PricingOption>>"
)]
pub struct OptionSlots([Option<PricingOption>; MAX_OPTIONS]);

impl OptionSlots {
    pub fn new(slots: [Option<PricingOption>; MAX_OPTIONS]) -> Self {
        Self(slots)
    }

    pub fn as_slice(&self) -> &[Option<PricingOption>] {
        &self.0
    }

    pub fn present(&self) -> impl Iterator<Item = &PricingOption> {
        self.0.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

impl TryFrom<Vec<Option<PricingOption>>> for OptionSlots {
    type Error = QuoteError;

    fn try_from(options: Vec<Option<PricingOption>>) -> Result<Self, Self::Error> {
        if options.len() > MAX_OPTIONS {
            return Err(QuoteError::TooManyOptions {
                count: options.len(),
                max: MAX_OPTIONS,
            });
        }

        let mut slots: [Option<PricingOption>; MAX_OPTIONS] = Default::default();
        for (slot, option) in slots.iter_mut().zip(options) {
            *slot = option;
        }
        Ok(Self(slots))
    }
}

impl From<OptionSlots> for Vec<Option<PricingOption>> {
    fn from(slots: OptionSlots) -> Self {
        slots.0.into_iter().collect()
    }
}

/// One quote request as read from disk by the batch layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub options: OptionSlots,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub ports: Vec<Port>,
}
