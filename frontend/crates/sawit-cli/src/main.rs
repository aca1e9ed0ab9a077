//! sawit - MySawit plantation administration CLI
//!
//! Talks to the identity, plantation, harvest, shipment and payroll services
//! and prints every response as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Log in (the session is kept in ~/.sawit/session.json)
//! sawit login --username admin --password secret
//!
//! # Who am I, and is every service up?
//! sawit status --pretty
//!
//! # Record a harvest for plantation 3
//! sawit harvest create --plantation-id 3 --weight 1250 --quality premium
//! ```

use sawit_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    run(cli).await
}
