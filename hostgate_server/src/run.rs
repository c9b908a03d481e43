use crate::{config::LoggingConfig, console::*, Gatekeeper};
use hostgate_core::prelude::*;
use hostgate_notify::{Notifier, WebhookDispatcher};

use std::{path::PathBuf, sync::Arc};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    select,
    signal::unix::{signal, SignalKind},
};
use tracing_subscriber::util::SubscriberInitExt;

/// Options for [`run_gate`]
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data_dir: PathBuf,
    pub log_config: Option<PathBuf>,
    pub check: bool,
}

/// Validate the configuration in `data_dir` without starting anything.
///
/// Unlike a normal load, a configuration or message file that can't be read
/// or parsed is an error here, and no default files are written.
pub fn check_config(data_dir: &DataDirectory) -> Result<ReloadSummary, ConfigError> {
    let config = GateConfig::try_load(data_dir.config_file())?;
    let messages = MessageCatalog::try_load(data_dir, &config.lang)?;
    let state = GateState::from_config(config, messages);

    for skipped in &state.registry_report.skipped {
        tracing::warn!(username = %skipped.username, reason = ?skipped.reason, "Reservation will be ignored");
    }

    Ok(ReloadSummary::of(&state))
}

/// Run the gate against logins read from standard input.
///
/// Each input line is a JSON [`LoginLine`]; the outcome is written to standard
/// output as a JSON [`LoginReply`]. A line reading `reload`, or a SIGHUP,
/// reloads the configuration.
pub fn run_gate(opts: RunOptions) -> Result<(), anyhow::Error> {
    let log_config = match &opts.log_config {
        Some(path) => LoggingConfig::load_file(path)?,
        None => LoggingConfig::console(),
    };
    crate::tracing_config::build_subscriber(log_config)?.init();

    let data_dir = DataDirectory::new(opts.data_dir);

    if opts.check {
        let summary = check_config(&data_dir)?;
        tracing::info!(?summary, "Configuration is valid");
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(data_dir))
}

async fn serve(data_dir: DataDirectory) -> Result<(), anyhow::Error> {
    let console = Arc::new(ConsoleSession);

    let notifier = Notifier::new(
        Arc::new(ConsoleDirectory(Arc::clone(&console))),
        WebhookDispatcher::http(),
    );
    let gatekeeper = Gatekeeper::new(ReloadCoordinator::bootstrap(data_dir), notifier);

    let mut hangup = signal(SignalKind::hangup())?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!("hostgate ready");

    loop {
        select! {
            _ = hangup.recv() => {
                gatekeeper.reload(console.as_ref()).or_log("reloading on SIGHUP");
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                handle_line(&gatekeeper, console.as_ref(), line.trim());
            }
        }
    }

    Ok(())
}

fn handle_line(gatekeeper: &Gatekeeper, console: &ConsoleSession, line: &str) {
    match line {
        "" => (),
        "reload" => {
            gatekeeper.reload(console).or_log("reloading from console");
        }
        _ => match serde_json::from_str::<LoginLine>(line) {
            Ok(login) => {
                gatekeeper.on_login(ConsoleLogin::new(login, std::io::stdout()));
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring malformed login line"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn check_reports_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = DataDirectory::new(dir.path());
        std::fs::write(
            data_dir.config_file(),
            r#"{
                "allowed-domains": ["example.net", "play.example.org"],
                "reserved-uuid": { steve: { uuid: "1234" }, alex: { uuid: "" } },
            }"#,
        )
        .unwrap();

        let summary = check_config(&data_dir).unwrap();

        assert_eq!(
            summary,
            ReloadSummary {
                enabled: true,
                allowed_domains: 2,
                reservations: 1,
                skipped_reservations: 1,
                webhook_active: false,
            }
        );
        assert!(!data_dir.message_file("en").exists());
    }

    #[test]
    fn check_rejects_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = DataDirectory::new(dir.path());

        assert!(matches!(
            check_config(&data_dir),
            Err(ConfigError::IoError(..))
        ));
        assert!(!data_dir.config_file().exists());

        std::fs::write(data_dir.config_file(), r#"{ lang: "es" }"#).unwrap();
        std::fs::write(data_dir.message_file("es"), "{ not json").unwrap();
        assert!(matches!(
            check_config(&data_dir),
            Err(ConfigError::ParseError(..))
        ));
    }
}
