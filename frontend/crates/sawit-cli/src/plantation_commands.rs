use crate::CliResult;
use crate::app::to_json;
use crate::defaults::InputDefaults;

use sawit_client::models::PlantationRequest;
use sawit_client::services::SawitApi;

use clap::{Args, Subcommand};
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum PlantationCommands {
    /// List plantations
    List {
        /// Only plantations owned by this user ID
        #[arg(long)]
        owner_id: Option<i64>,
    },

    /// Get a plantation by ID
    Get { id: i64 },

    /// Create a plantation
    Create(PlantationArgs),

    /// Replace a plantation's fields
    Update {
        id: i64,

        #[command(flatten)]
        fields: PlantationArgs,
    },

    /// Delete a plantation
    Delete { id: i64 },

    /// Check the plantation service
    Health,
}

#[derive(Args, Debug, Clone)]
pub struct PlantationArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub location: String,

    /// Area in hectares
    #[arg(long)]
    pub area: f64,

    /// Owner user ID (default: the logged-in user)
    #[arg(long)]
    pub owner_id: Option<i64>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub plant_date: Option<String>,
}

impl PlantationArgs {
    pub(crate) fn into_request(self, defaults: &InputDefaults) -> PlantationRequest {
        PlantationRequest {
            name: self.name,
            location: self.location,
            area: self.area,
            owner_id: self.owner_id.or(defaults.user_id),
            description: self.description,
            plant_date: self.plant_date,
        }
    }
}

impl PlantationCommands {
    pub(crate) async fn execute(
        self,
        api: &SawitApi,
        defaults: &InputDefaults,
    ) -> CliResult<Value> {
        let plantations = api.plantations();

        match self {
            PlantationCommands::List { owner_id: None } => to_json(&plantations.get_all().await?),
            PlantationCommands::List {
                owner_id: Some(owner_id),
            } => to_json(&plantations.get_by_owner(owner_id).await?),
            PlantationCommands::Get { id } => to_json(&plantations.get_by_id(id).await?),
            PlantationCommands::Create(args) => {
                to_json(&plantations.create(&args.into_request(defaults)).await?)
            }
            PlantationCommands::Update { id, fields } => {
                to_json(&plantations.update(id, &fields.into_request(defaults)).await?)
            }
            PlantationCommands::Delete { id } => to_json(&plantations.delete(id).await?),
            PlantationCommands::Health => to_json(&plantations.check_health().await?),
        }
    }
}
