use sawit_client::models::HealthStatus;
use sawit_client::services::SawitApi;
use sawit_client::{ClientResult, UserInfo};

use log::warn;
use serde::Serialize;

pub(crate) const STATUS_UP: &str = "UP";
pub(crate) const STATUS_DOWN: &str = "DOWN";

/// The logged-in user and one health line per service.
#[derive(Debug, Serialize)]
pub(crate) struct Dashboard {
    pub(crate) user: Option<UserInfo>,
    pub(crate) services: Vec<ServiceStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ServiceStatus {
    pub(crate) name: &'static str,
    pub(crate) status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl ServiceStatus {
    /// Anything but a reachable service reporting `UP` counts as down.
    pub(crate) fn from_health(name: &'static str, health: ClientResult<HealthStatus>) -> Self {
        match health {
            Ok(health) if health.is_up() => Self {
                name,
                status: STATUS_UP,
                error: None,
            },
            Ok(health) => Self {
                name,
                status: STATUS_DOWN,
                error: Some(format!("service reported {}", health.status)),
            },
            Err(e) => {
                warn!("{name} health check failed: {e}");
                Self {
                    name,
                    status: STATUS_DOWN,
                    error: Some(e.message().to_string()),
                }
            }
        }
    }
}

/// Query every health endpoint concurrently. One failing service never hides
/// the others.
pub(crate) async fn collect(api: &SawitApi) -> Dashboard {
    let auth = api.auth();
    let plantations = api.plantations();
    let harvests = api.harvests();
    let shipments = api.shipments();
    let payroll = api.payroll();

    let (identity_health, plantation_health, harvest_health, shipment_health, payroll_health) =
        tokio::join!(
            auth.check_health(),
            plantations.check_health(),
            harvests.check_health(),
            shipments.check_health(),
            payroll.check_health()
        );

    Dashboard {
        user: auth.get_user_info(),
        services: vec![
            ServiceStatus::from_health("identity", identity_health),
            ServiceStatus::from_health("plantation", plantation_health),
            ServiceStatus::from_health("harvest", harvest_health),
            ServiceStatus::from_health("shipment", shipment_health),
            ServiceStatus::from_health("payroll", payroll_health),
        ],
    }
}
