//! Transportation routes

use super::patch::{double_option, merge};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transportation route identifier
pub type RouteId = u32;

/// A bus route students can be assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportationRoute {
    pub id: RouteId,
    pub route_name: String,
    pub description: Option<String>,
    /// Route length in kilometres
    pub distance: Decimal,
    pub fare: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransportationRoute {
    pub route_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub distance: Decimal,
    pub fare: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewTransportationRoute {
    pub(crate) fn into_route(self, id: RouteId, created_at: DateTime<Utc>) -> TransportationRoute {
        TransportationRoute {
            id,
            route_name: self.route_name,
            description: self.description,
            distance: self.distance,
            fare: self.fare,
            is_active: self.is_active,
            created_at,
        }
    }
}

/// Partial update for a route
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransportationRoutePatch {
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub distance: Option<Decimal>,
    #[serde(default)]
    pub fare: Option<Decimal>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TransportationRoutePatch {
    pub fn apply(self, route: &mut TransportationRoute) {
        merge(&mut route.route_name, self.route_name);
        merge(&mut route.description, self.description);
        merge(&mut route.distance, self.distance);
        merge(&mut route.fare, self.fare);
        merge(&mut route.is_active, self.is_active);
    }
}
