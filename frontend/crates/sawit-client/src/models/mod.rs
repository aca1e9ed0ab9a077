//! Wire types for the MySawit services.
//!
//! Field names follow the services' camelCase JSON. Optional fields are left
//! out of request bodies entirely when unset.

mod auth;
mod common;
mod harvest;
mod payroll;
mod plantation;
mod shipment;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use common::{HealthStatus, MessageResponse, ParseEnumError};
pub use harvest::{Harvest, HarvestQuality, HarvestRequest};
pub use payroll::{
    Employee, EmployeeRequest, EmployeeStatus, Payroll, PayrollRequest, PayrollStatus,
};
pub use plantation::{Plantation, PlantationRequest};
pub use shipment::{Shipment, ShipmentRequest, ShipmentStatus};

/// Upper-case string enum as sent by the services, with `FromStr`/`Display`
/// over the same spelling so CLI input and JSON agree.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_uppercase().replace('-', "_");
                match normalized.as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err($crate::models::ParseEnumError::new(
                        stringify!($name),
                        s,
                        &[$($wire),+],
                    )),
                }
            }
        }
    };
}

pub(crate) use wire_enum;
