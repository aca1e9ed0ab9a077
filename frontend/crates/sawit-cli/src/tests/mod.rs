
use sawit_client::services::SawitApi;
use sawit_client::{Client, MemorySessionStore, SessionKey, SessionStore};
use sawit_config::{ApiEndpoints, ServicesConfig};

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

/// API whose five services all live at `uri`.
pub(crate) fn api_for(uri: &str, store: Arc<MemorySessionStore>) -> SawitApi {
    let services = ServicesConfig {
        identity: uri.to_string(),
        plantation: uri.to_string(),
        harvest: uri.to_string(),
        shipment: uri.to_string(),
        payroll: uri.to_string(),
    };
    SawitApi::new(Client::new(store), ApiEndpoints::new(&services))
}

pub(crate) fn logged_in_store() -> Arc<MemorySessionStore> {
    let store = Arc::new(MemorySessionStore::new());
    store
        .set_all(&[
            (SessionKey::AuthToken, "jwt"),
            (SessionKey::UserId, "10"),
            (SessionKey::Username, "user"),
            (SessionKey::UserRole, "USER"),
        ])
        .unwrap();
    store
}

pub(crate) fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .and_then(|date| date.and_hms_opt(8, 15, 0))
        .unwrap()
}
