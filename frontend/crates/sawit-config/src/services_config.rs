use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HARVEST_SERVICE_URL, DEFAULT_IDENTITY_SERVICE_URL,
    DEFAULT_PAYROLL_SERVICE_URL, DEFAULT_PLANTATION_SERVICE_URL, DEFAULT_SHIPMENT_SERVICE_URL,
};

use serde::Deserialize;

/// Base URLs of the five backing microservices.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServicesConfig {
    pub identity: String,
    pub plantation: String,
    pub harvest: String,
    pub shipment: String,
    pub payroll: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            identity: String::from(DEFAULT_IDENTITY_SERVICE_URL),
            plantation: String::from(DEFAULT_PLANTATION_SERVICE_URL),
            harvest: String::from(DEFAULT_HARVEST_SERVICE_URL),
            shipment: String::from(DEFAULT_SHIPMENT_SERVICE_URL),
            payroll: String::from(DEFAULT_PAYROLL_SERVICE_URL),
        }
    }
}

impl ServicesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, url) in self.named() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::service(format!(
                    "services.{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }
        Ok(())
    }

    /// Service name / base URL pairs, in dashboard order.
    pub fn named(&self) -> [(&'static str, &str); 5] {
        [
            ("identity", self.identity.as_str()),
            ("plantation", self.plantation.as_str()),
            ("harvest", self.harvest.as_str()),
            ("shipment", self.shipment.as_str()),
            ("payroll", self.payroll.as_str()),
        ]
    }
}
