use crate::models::{Harvest, HarvestRequest, HealthStatus, MessageResponse};
use crate::{Client, ClientResult};

use sawit_config::HarvestEndpoints;

pub struct HarvestService<'a> {
    client: &'a Client,
    endpoints: &'a HarvestEndpoints,
}

impl<'a> HarvestService<'a> {
    pub fn new(client: &'a Client, endpoints: &'a HarvestEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Harvest>> {
        self.client.get(&self.endpoints.base).await
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<Harvest> {
        self.client.get(&self.endpoints.by_id(id)).await
    }

    pub async fn get_by_plantation(&self, plantation_id: i64) -> ClientResult<Vec<Harvest>> {
        self.client
            .get(&self.endpoints.by_plantation(plantation_id))
            .await
    }

    pub async fn create(&self, data: &HarvestRequest) -> ClientResult<Harvest> {
        self.client.post(&self.endpoints.base, data).await
    }

    pub async fn update(&self, id: i64, data: &HarvestRequest) -> ClientResult<Harvest> {
        self.client.put(&self.endpoints.by_id(id), data).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.client.delete(&self.endpoints.by_id(id)).await
    }

    pub async fn check_health(&self) -> ClientResult<HealthStatus> {
        self.client.get(&self.endpoints.health).await
    }
}
