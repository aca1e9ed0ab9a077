//! One wrapper per microservice.
//!
//! Each method is a one-to-one translation of a typed call into a single
//! [`Client`] request against an endpoint from [`ApiEndpoints`].

mod auth;
mod harvest;
mod identity;
mod payroll;
mod plantation;
mod shipment;

pub use auth::AuthService;
pub use harvest::HarvestService;
pub use identity::{IdentityService, build_dummy_identity};
pub use payroll::PayrollService;
pub use plantation::PlantationService;
pub use shipment::ShipmentService;

use crate::Client;

use sawit_config::ApiEndpoints;

/// A client paired with the endpoints of every service.
#[derive(Clone)]
pub struct SawitApi {
    client: Client,
    endpoints: ApiEndpoints,
}

impl SawitApi {
    pub fn new(client: Client, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.client, &self.endpoints.auth)
    }

    pub fn identity(&self) -> IdentityService<'_> {
        IdentityService::new(&self.client, &self.endpoints.auth)
    }

    pub fn plantations(&self) -> PlantationService<'_> {
        PlantationService::new(&self.client, &self.endpoints.plantations)
    }

    pub fn harvests(&self) -> HarvestService<'_> {
        HarvestService::new(&self.client, &self.endpoints.harvests)
    }

    pub fn shipments(&self) -> ShipmentService<'_> {
        ShipmentService::new(&self.client, &self.endpoints.shipments)
    }

    pub fn payroll(&self) -> PayrollService<'_> {
        PayrollService::new(&self.client, &self.endpoints.payroll)
    }
}
