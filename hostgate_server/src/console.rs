//! A minimal stand-in host: login attempts arrive as JSON lines, results are
//! written back as JSON lines, and the operator's console is the only session.

use hostgate_core::prelude::*;
use hostgate_notify::SessionDirectory;
use serde::{Deserialize, Serialize};

use std::{
    io::Write,
    sync::Arc,
};

/// The operator console. Holds every permission and prints to standard error.
pub struct ConsoleSession;

impl Session for ConsoleSession {
    fn name(&self) -> &str {
        "console"
    }

    fn has_permission(&self, _permission: &str) -> bool {
        true
    }

    fn send_message(&self, message: &str) -> Result<(), DeliveryError> {
        writeln!(std::io::stderr(), "{}", message).map_err(|e| DeliveryError::Other(e.to_string()))
    }
}

/// Session directory containing only the console
pub struct ConsoleDirectory(pub Arc<ConsoleSession>);

impl SessionDirectory for ConsoleDirectory {
    fn sessions(&self) -> Vec<Arc<dyn Session>> {
        vec![Arc::clone(&self.0) as Arc<dyn Session>]
    }
}

/// One login, as read from input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginLine {
    pub username: String,
    pub uuid: String,
    #[serde(default)]
    pub host: Option<String>,
    pub address: String,
}

/// The result written for each login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "result")]
pub enum LoginReply {
    Allow { username: String },
    Deny { username: String, message: String },
}

/// A [`LoginEvent`](crate::LoginEvent) that writes its resolution to `out`
pub struct ConsoleLogin<W: Write> {
    line: LoginLine,
    out: W,
}

impl<W: Write> ConsoleLogin<W> {
    pub fn new(line: LoginLine, out: W) -> Self {
        Self { line, out }
    }

    fn reply(mut self, reply: LoginReply) {
        let result = serde_json::to_string(&reply)
            .map_err(std::io::Error::from)
            .and_then(|json| writeln!(self.out, "{}", json));
        result.or_log("writing login result");
    }
}

impl<W: Write> crate::LoginEvent for ConsoleLogin<W> {
    fn username(&self) -> &str {
        &self.line.username
    }

    fn uuid(&self) -> &str {
        &self.line.uuid
    }

    fn virtual_host(&self) -> Option<&str> {
        self.line.host.as_deref()
    }

    fn remote_address(&self) -> String {
        self.line.address.clone()
    }

    fn allow(self) {
        let username = self.line.username.clone();
        self.reply(LoginReply::Allow { username });
    }

    fn deny(self, message: String) {
        let username = self.line.username.clone();
        self.reply(LoginReply::Deny { username, message });
    }
}
