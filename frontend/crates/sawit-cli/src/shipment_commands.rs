use crate::CliResult;
use crate::app::to_json;
use crate::defaults::InputDefaults;

use sawit_client::models::{ShipmentRequest, ShipmentStatus};
use sawit_client::services::SawitApi;

use clap::{Args, Subcommand};
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum ShipmentCommands {
    /// List shipments
    List {
        /// Only shipments carrying this harvest
        #[arg(long, conflicts_with = "status")]
        harvest_id: Option<i64>,

        /// Only shipments in this status: pending, in-transit, delivered, cancelled
        #[arg(long, conflicts_with = "harvest_id")]
        status: Option<ShipmentStatus>,
    },

    /// Get a shipment by ID
    Get { id: i64 },

    /// Create a shipment
    Create(ShipmentArgs),

    /// Replace a shipment's fields
    Update {
        id: i64,

        #[command(flatten)]
        fields: ShipmentArgs,
    },

    /// Delete a shipment
    Delete { id: i64 },

    /// Check the shipment service
    Health,
}

#[derive(Args, Debug, Clone)]
pub struct ShipmentArgs {
    #[arg(long)]
    pub harvest_id: i64,

    #[arg(long)]
    pub destination: String,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,

    #[arg(long, default_value = "PENDING")]
    pub status: ShipmentStatus,

    #[arg(long)]
    pub shipper_name: Option<String>,

    #[arg(long)]
    pub vehicle_number: Option<String>,

    /// YYYY-MM-DDTHH:MM (default: now)
    #[arg(long)]
    pub shipment_date: Option<String>,

    /// YYYY-MM-DDTHH:MM
    #[arg(long)]
    pub delivery_date: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl ShipmentArgs {
    pub(crate) fn into_request(self, defaults: &InputDefaults) -> ShipmentRequest {
        ShipmentRequest {
            harvest_id: self.harvest_id,
            destination: self.destination,
            weight: self.weight,
            status: Some(self.status),
            shipper_name: self.shipper_name,
            vehicle_number: self.vehicle_number,
            shipment_date: Some(self.shipment_date.unwrap_or_else(|| defaults.now_input())),
            delivery_date: self.delivery_date,
            notes: self.notes,
        }
    }
}

impl ShipmentCommands {
    pub(crate) async fn execute(
        self,
        api: &SawitApi,
        defaults: &InputDefaults,
    ) -> CliResult<Value> {
        let shipments = api.shipments();

        match self {
            ShipmentCommands::List {
                harvest_id: Some(harvest_id),
                ..
            } => to_json(&shipments.get_by_harvest(harvest_id).await?),
            ShipmentCommands::List {
                status: Some(status),
                ..
            } => to_json(&shipments.get_by_status(status).await?),
            ShipmentCommands::List { .. } => to_json(&shipments.get_all().await?),
            ShipmentCommands::Get { id } => to_json(&shipments.get_by_id(id).await?),
            ShipmentCommands::Create(args) => {
                to_json(&shipments.create(&args.into_request(defaults)).await?)
            }
            ShipmentCommands::Update { id, fields } => {
                to_json(&shipments.update(id, &fields.into_request(defaults)).await?)
            }
            ShipmentCommands::Delete { id } => to_json(&shipments.delete(id).await?),
            ShipmentCommands::Health => to_json(&shipments.check_health().await?),
        }
    }
}
