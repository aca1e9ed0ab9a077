use crate::models::{HealthStatus, MessageResponse, Plantation, PlantationRequest};
use crate::{Client, ClientResult};

use sawit_config::PlantationEndpoints;

pub struct PlantationService<'a> {
    client: &'a Client,
    endpoints: &'a PlantationEndpoints,
}

impl<'a> PlantationService<'a> {
    pub fn new(client: &'a Client, endpoints: &'a PlantationEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Plantation>> {
        self.client.get(&self.endpoints.base).await
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<Plantation> {
        self.client.get(&self.endpoints.by_id(id)).await
    }

    pub async fn get_by_owner(&self, owner_id: i64) -> ClientResult<Vec<Plantation>> {
        self.client.get(&self.endpoints.by_owner(owner_id)).await
    }

    pub async fn create(&self, data: &PlantationRequest) -> ClientResult<Plantation> {
        self.client.post(&self.endpoints.base, data).await
    }

    pub async fn update(&self, id: i64, data: &PlantationRequest) -> ClientResult<Plantation> {
        self.client.put(&self.endpoints.by_id(id), data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.client.delete(&self.endpoints.by_id(id)).await
    }

    pub async fn check_health(&self) -> ClientResult<HealthStatus> {
        self.client.get(&self.endpoints.health).await
    }
}
