#![allow(dead_code)]

use async_trait::async_trait;
use hostgate_core::prelude::*;
use hostgate_notify::*;
use hostgate_server::{Gatekeeper, LoginEvent};
use parking_lot::Mutex;

use std::{path::Path, sync::Arc};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Allowed,
    Denied(String),
}

/// A login event that records how it was resolved
pub struct TestLogin {
    pub username: String,
    pub uuid: String,
    pub host: Option<String>,
    pub resolution: Arc<Mutex<Vec<Resolution>>>,
}

impl TestLogin {
    pub fn new(host: Option<&str>, username: &str, uuid: &str) -> (Self, Arc<Mutex<Vec<Resolution>>>) {
        let resolution = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                username: username.to_string(),
                uuid: uuid.to_string(),
                host: host.map(str::to_string),
                resolution: Arc::clone(&resolution),
            },
            resolution,
        )
    }
}

impl LoginEvent for TestLogin {
    fn username(&self) -> &str {
        &self.username
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn virtual_host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    fn remote_address(&self) -> String {
        "203.0.113.7".to_string()
    }

    fn allow(self) {
        self.resolution.lock().push(Resolution::Allowed);
    }

    fn deny(self, message: String) {
        self.resolution.lock().push(Resolution::Denied(message));
    }
}

pub struct TestSession {
    pub name: String,
    pub permissions: Vec<&'static str>,
    pub received: Mutex<Vec<String>>,
}

impl TestSession {
    pub fn new(name: &str, permissions: &[&'static str]) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            permissions: permissions.to_vec(),
            received: Mutex::new(Vec::new()),
        })
    }
}

impl Session for TestSession {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(&permission)
    }

    fn send_message(&self, message: &str) -> Result<(), DeliveryError> {
        self.received.lock().push(message.to_string());
        Ok(())
    }
}

pub struct TestDirectory(pub Vec<Arc<TestSession>>);

impl SessionDirectory for TestDirectory {
    fn sessions(&self) -> Vec<Arc<dyn Session>> {
        self.0
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn Session>)
            .collect()
    }
}

pub struct RecordingTransport {
    sent: UnboundedSender<(String, serde_json::Value)>,
}

#[async_trait]
impl WebhookTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<(), WebhookError> {
        let body = serde_json::from_str(&body)?;
        let _ = self.sent.send((url.to_string(), body));
        Ok(())
    }
}

pub fn recording_transport() -> (Arc<RecordingTransport>, UnboundedReceiver<(String, serde_json::Value)>) {
    let (sent, recv) = unbounded_channel();
    (Arc::new(RecordingTransport { sent }), recv)
}

pub const BASE_CONFIG: &str = r#"{
    "allowed-domains": ["example.net"],
    "reserved-uuid": { steve: { uuid: "1234" } },
}"#;

/// Replace a file's content in one step, so a concurrent reader never sees it half-written
pub fn replace_file(path: &Path, content: &str) {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, content).unwrap();
    std::fs::rename(&tmp, path).unwrap();
}

pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub gatekeeper: Gatekeeper,
    pub admin: Arc<TestSession>,
    pub player: Arc<TestSession>,
    pub webhooks: UnboundedReceiver<(String, serde_json::Value)>,
}

impl Fixture {
    /// Webhooks are only dispatched when called from within a tokio runtime
    pub fn new(config: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = DataDirectory::new(dir.path());
        std::fs::write(data_dir.config_file(), config).unwrap();

        let admin = TestSession::new("admin", &[PERMISSION_NOTIFY, PERMISSION_RELOAD]);
        let player = TestSession::new("player", &[]);
        let (transport, webhooks) = recording_transport();

        let notifier = Notifier::new(
            Arc::new(TestDirectory(vec![Arc::clone(&admin), Arc::clone(&player)])),
            WebhookDispatcher::new(transport),
        );
        let gatekeeper = Gatekeeper::new(ReloadCoordinator::bootstrap(data_dir), notifier);

        Self {
            dir,
            gatekeeper,
            admin,
            player,
            webhooks,
        }
    }

    pub fn data_dir(&self) -> DataDirectory {
        DataDirectory::new(self.dir.path())
    }

    pub fn login(&self, host: Option<&str>, username: &str, uuid: &str) -> (Decision, Vec<Resolution>) {
        let (event, resolution) = TestLogin::new(host, username, uuid);
        let decision = self.gatekeeper.on_login(event);
        let resolution = resolution.lock().clone();
        (decision, resolution)
    }
}
