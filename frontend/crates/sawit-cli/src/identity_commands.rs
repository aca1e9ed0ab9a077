use crate::CliResult;
use crate::app::to_json;

use sawit_client::services::{SawitApi, build_dummy_identity};

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Subcommand;
use log::info;
use serde_json::{Value, json};

#[derive(Subcommand, Debug)]
pub enum IdentityCommands {
    /// Check the identity service
    Health,

    /// Register a throwaway account without touching the current session
    CreateDummy {
        /// Suffix for the generated username and email (default: current time in ms)
        #[arg(long)]
        seed: Option<u128>,
    },
}

impl IdentityCommands {
    pub(crate) async fn execute(self, api: &SawitApi) -> CliResult<Value> {
        match self {
            IdentityCommands::Health => to_json(&api.auth().check_health().await?),
            IdentityCommands::CreateDummy { seed } => {
                let identity = build_dummy_identity(seed.unwrap_or_else(millis_since_epoch));
                let created = api.identity().create_dummy_user(&identity).await?;
                info!("created dummy user {} (id {})", created.username, created.id);

                Ok(json!({
                    "id": created.id,
                    "username": created.username,
                    "email": created.email,
                    "password": identity.password,
                    "role": created.role,
                }))
            }
        }
    }
}

fn millis_since_epoch() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
