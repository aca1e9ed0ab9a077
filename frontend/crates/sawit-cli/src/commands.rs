use crate::{
    harvest_commands::HarvestCommands, identity_commands::IdentityCommands,
    payroll_commands::PayrollCommands, plantation_commands::PlantationCommands,
    shipment_commands::ShipmentCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and store its session
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Current user and the health of every service
    Status,

    /// Identity service operations
    Identity {
        #[command(subcommand)]
        action: IdentityCommands,
    },

    /// Plantation operations
    Plantation {
        #[command(subcommand)]
        action: PlantationCommands,
    },

    /// Harvest operations
    Harvest {
        #[command(subcommand)]
        action: HarvestCommands,
    },

    /// Shipment operations
    Shipment {
        #[command(subcommand)]
        action: ShipmentCommands,
    },

    /// Employee and payroll operations
    Payroll {
        #[command(subcommand)]
        action: PayrollCommands,
    },
}

impl Commands {
    /// Everything except the entry points into (and out of) a session needs a
    /// stored token.
    pub(crate) fn requires_session(&self) -> bool {
        !matches!(
            self,
            Commands::Login { .. } | Commands::Register { .. } | Commands::Logout
        )
    }
}
