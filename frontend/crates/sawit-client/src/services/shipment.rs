use crate::models::{HealthStatus, MessageResponse, Shipment, ShipmentRequest, ShipmentStatus};
use crate::{Client, ClientResult};

use sawit_config::ShipmentEndpoints;

pub struct ShipmentService<'a> {
    client: &'a Client,
    endpoints: &'a ShipmentEndpoints,
}

impl<'a> ShipmentService<'a> {
    pub fn new(client: &'a Client, endpoints: &'a ShipmentEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Shipment>> {
        self.client.get(&self.endpoints.base).await
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<Shipment> {
        self.client.get(&self.endpoints.by_id(id)).await
    }

    pub async fn get_by_harvest(&self, harvest_id: i64) -> ClientResult<Vec<Shipment>> {
        self.client.get(&self.endpoints.by_harvest(harvest_id)).await
    }

    pub async fn get_by_status(&self, status: ShipmentStatus) -> ClientResult<Vec<Shipment>> {
        self.client
            .get(&self.endpoints.by_status(status.as_str()))
            .await
    }

    pub async fn create(&self, data: &ShipmentRequest) -> ClientResult<Shipment> {
        self.client.post(&self.endpoints.base, data).await
    }

    pub async fn update(&self, id: i64, data: &ShipmentRequest) -> ClientResult<Shipment> {
        self.client.put(&self.endpoints.by_id(id), data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.client.delete(&self.endpoints.by_id(id)).await
    }

    pub async fn check_health(&self) -> ClientResult<HealthStatus> {
        self.client.get(&self.endpoints.health).await
    }
}
