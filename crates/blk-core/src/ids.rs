//! Strongly typed string identifiers.
//!
//! Stops, routes, trips, and vehicles are all keyed by opaque strings coming
//! from the surrounding storage layer.  Wrapping each in its own type keeps a
//! `StopId` from being passed where a `TripId` is expected.  All IDs are
//! `Clone + Ord + Hash` so they can be used as map keys without ceremony.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed ID wrapper around a `String`.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// A physical stop (platform, pole, or bay).
    pub struct StopId;
}

string_id! {
    /// A route; vehicles are only ever chained within one route.
    pub struct RouteId;
}

string_id! {
    /// A timetabled commercial trip.
    pub struct TripId;
}

string_id! {
    /// A logical vehicle (block), e.g. `BUS-0001`.
    pub struct VehicleId;
}
