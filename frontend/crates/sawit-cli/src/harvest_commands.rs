use crate::CliResult;
use crate::app::to_json;
use crate::defaults::InputDefaults;

use sawit_client::models::{HarvestQuality, HarvestRequest};
use sawit_client::services::SawitApi;

use clap::{Args, Subcommand};
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum HarvestCommands {
    /// List harvests
    List {
        /// Only harvests from this plantation
        #[arg(long)]
        plantation_id: Option<i64>,
    },

    /// Get a harvest by ID
    Get { id: i64 },

    /// Record a harvest
    Create(HarvestArgs),

    /// Replace a harvest's fields
    Update {
        id: i64,

        #[command(flatten)]
        fields: HarvestArgs,
    },

    /// Delete a harvest
    Delete { id: i64 },

    /// Check the harvest service
    Health,
}

#[derive(Args, Debug, Clone)]
pub struct HarvestArgs {
    #[arg(long)]
    pub plantation_id: i64,

    /// YYYY-MM-DDTHH:MM (default: now)
    #[arg(long)]
    pub harvest_date: Option<String>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,

    /// premium, standard or low
    #[arg(long, default_value = "STANDARD")]
    pub quality: HarvestQuality,

    /// Harvester user ID (default: the logged-in user)
    #[arg(long)]
    pub harvester_id: Option<i64>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl HarvestArgs {
    pub(crate) fn into_request(self, defaults: &InputDefaults) -> HarvestRequest {
        HarvestRequest {
            plantation_id: self.plantation_id,
            harvest_date: self.harvest_date.unwrap_or_else(|| defaults.now_input()),
            weight: self.weight,
            quality: Some(self.quality),
            harvester_id: self.harvester_id.or(defaults.user_id),
            notes: self.notes,
        }
    }
}

impl HarvestCommands {
    pub(crate) async fn execute(
        self,
        api: &SawitApi,
        defaults: &InputDefaults,
    ) -> CliResult<Value> {
        let harvests = api.harvests();

        match self {
            HarvestCommands::List {
                plantation_id: None,
            } => to_json(&harvests.get_all().await?),
            HarvestCommands::List {
                plantation_id: Some(plantation_id),
            } => to_json(&harvests.get_by_plantation(plantation_id).await?),
            HarvestCommands::Get { id } => to_json(&harvests.get_by_id(id).await?),
            HarvestCommands::Create(args) => {
                to_json(&harvests.create(&args.into_request(defaults)).await?)
            }
            HarvestCommands::Update { id, fields } => {
                to_json(&harvests.update(id, &fields.into_request(defaults)).await?)
            }
            HarvestCommands::Delete { id } => to_json(&harvests.delete(id).await?),
            HarvestCommands::Health => to_json(&harvests.check_health().await?),
        }
    }
}
