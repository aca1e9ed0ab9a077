use crate::cli::Cli;
use crate::commands::Commands;
use crate::defaults::InputDefaults;
use crate::{CliError, CliResult, dashboard, logger};

use sawit_client::models::{LoginRequest, RegisterRequest};
use sawit_client::services::SawitApi;
use sawit_client::{Client, FileSessionStore, NullSessionStore, SessionStore};
use sawit_config::Config;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use log::{debug, error};
use serde::Serialize;
use serde_json::{Value, json};

/// Run one parsed command line: load config, start logging, dispatch, and
/// print the JSON result.
pub async fn run(cli: Cli) -> ExitCode {
    let pretty = cli.pretty;

    let value = match execute(cli).await {
        Ok(value) => value,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.message());
            return ExitCode::FAILURE;
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<Value> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    logger::initialize(&config.logging)?;
    config.log_summary(&config_dir);

    let api = build_api(&config, &config_dir);
    dispatch(&api, cli.command).await
}

/// Client over the configured services, with a session file under
/// `config_dir` or no session storage at all when sessions are disabled.
pub(crate) fn build_api(config: &Config, config_dir: &Path) -> SawitApi {
    let store: Arc<dyn SessionStore> = if config.session.enabled {
        Arc::new(FileSessionStore::new(config.session.path_in(config_dir)))
    } else {
        debug!("session storage disabled");
        Arc::new(NullSessionStore)
    };

    SawitApi::new(Client::new(store), config.endpoints())
}

/// Execute one command against the services.
///
/// Commands that need a session fail with [`CliError::NotLoggedIn`] before
/// any request is sent.
pub(crate) async fn dispatch(api: &SawitApi, command: Commands) -> CliResult<Value> {
    if command.requires_session() && !api.auth().is_authenticated() {
        return Err(CliError::NotLoggedIn);
    }

    let defaults = InputDefaults::from_session(api);

    match command {
        Commands::Login { username, password } => {
            let response = api
                .auth()
                .login(&LoginRequest { username, password })
                .await?;
            Ok(session_summary(
                response.id,
                &response.username,
                &response.email,
                &response.role,
            ))
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            let response = api
                .auth()
                .register(&RegisterRequest {
                    username,
                    email,
                    password,
                })
                .await?;
            Ok(session_summary(
                response.id,
                &response.username,
                &response.email,
                &response.role,
            ))
        }
        Commands::Logout => {
            api.auth().logout()?;
            Ok(json!({ "message": "Logged out" }))
        }
        Commands::Whoami => to_json(&api.auth().get_user_info()),
        Commands::Status => to_json(&dashboard::collect(api).await),
        Commands::Identity { action } => action.execute(api).await,
        Commands::Plantation { action } => action.execute(api, &defaults).await,
        Commands::Harvest { action } => action.execute(api, &defaults).await,
        Commands::Shipment { action } => action.execute(api, &defaults).await,
        Commands::Payroll { action } => action.execute(api, &defaults).await,
    }
}

/// The token stays in the session store; it is never printed.
fn session_summary(id: i64, username: &str, email: &str, role: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": email,
        "role": role,
    })
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}
