//! Endpoint URLs for each microservice.
//!
//! Every URL is plain string templating over the configured base URL. Fixed
//! endpoints are precomputed; id- and filter-based ones are builder methods.

use crate::ServicesConfig;

fn base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub auth: AuthEndpoints,
    pub plantations: PlantationEndpoints,
    pub harvests: HarvestEndpoints,
    pub shipments: ShipmentEndpoints,
    pub payroll: PayrollEndpoints,
}

impl ApiEndpoints {
    pub fn new(services: &ServicesConfig) -> Self {
        Self {
            auth: AuthEndpoints::new(&services.identity),
            plantations: PlantationEndpoints::new(&services.plantation),
            harvests: HarvestEndpoints::new(&services.harvest),
            shipments: ShipmentEndpoints::new(&services.shipment),
            payroll: PayrollEndpoints::new(&services.payroll),
        }
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(&ServicesConfig::default())
    }
}

/// Identity service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub login: String,
    pub register: String,
    pub health: String,
}

impl AuthEndpoints {
    fn new(service_url: &str) -> Self {
        let root = format!("{}/api/auth", base(service_url));
        Self {
            login: format!("{root}/login"),
            register: format!("{root}/register"),
            health: format!("{root}/health"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantationEndpoints {
    pub base: String,
    pub health: String,
}

impl PlantationEndpoints {
    fn new(service_url: &str) -> Self {
        let root = format!("{}/api/plantations", base(service_url));
        Self {
            health: format!("{root}/health"),
            base: root,
        }
    }

    pub fn by_id(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }

    pub fn by_owner(&self, owner_id: i64) -> String {
        format!("{}?ownerId={}", self.base, owner_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestEndpoints {
    pub base: String,
    pub health: String,
}

impl HarvestEndpoints {
    fn new(service_url: &str) -> Self {
        let root = format!("{}/api/harvests", base(service_url));
        Self {
            health: format!("{root}/health"),
            base: root,
        }
    }

    pub fn by_id(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }

    pub fn by_plantation(&self, plantation_id: i64) -> String {
        format!("{}?plantationId={}", self.base, plantation_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentEndpoints {
    pub base: String,
    pub health: String,
}

impl ShipmentEndpoints {
    fn new(service_url: &str) -> Self {
        let root = format!("{}/api/shipments", base(service_url));
        Self {
            health: format!("{root}/health"),
            base: root,
        }
    }

    pub fn by_id(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }

    pub fn by_harvest(&self, harvest_id: i64) -> String {
        format!("{}?harvestId={}", self.base, harvest_id)
    }

    /// Status values are the fixed upper-case shipment states, so no escaping.
    pub fn by_status(&self, status: &str) -> String {
        format!("{}?status={}", self.base, status)
    }
}

/// Payroll service: employees and payroll records live side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollEndpoints {
    pub employees: String,
    pub payrolls: String,
    pub health: String,
}

impl PayrollEndpoints {
    fn new(service_url: &str) -> Self {
        let root = format!("{}/api", base(service_url));
        Self {
            employees: format!("{root}/employees"),
            payrolls: format!("{root}/payrolls"),
            health: format!("{root}/payroll/health"),
        }
    }
}
