use std::{collections::HashMap, path::Path};

use crate::config::{write_default_resource, ConfigError, DataDirectory};

/// Localised message templates.
///
/// Templates contain `{name}` placeholders which are filled in by
/// [`get`](Self::get). A missing key renders as the key itself, and
/// placeholders with no supplied value are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    language: String,
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(language: impl Into<String>, templates: HashMap<String, String>) -> Self {
        Self {
            language: language.into(),
            templates,
        }
    }

    /// The default catalog shipped for a language, if there is one
    pub fn default_resource(language: &str) -> Option<&'static str> {
        match language {
            "en" => Some(include_str!("../resources/messages_en.json5")),
            "es" => Some(include_str!("../resources/messages_es.json5")),
            _ => None,
        }
    }

    /// Load the catalog for `language` from the data directory.
    ///
    /// If the file doesn't exist, the shipped default is written there first.
    /// An unreadable or malformed file gives an empty catalog, in which every
    /// message renders as its key.
    pub fn load(data_dir: &DataDirectory, language: &str) -> Self {
        let path = data_dir.message_file(language);

        if !path.exists() {
            write_default_resource(&path, Self::default_resource(language));
        }

        match Self::read_file(&path) {
            Ok(templates) => Self::new(language, templates),
            Err(e) => {
                tracing::warn!(path=%path.display(), error=%e, "Couldn't load messages; using message keys");
                Self::new(language, HashMap::new())
            }
        }
    }

    /// Read the catalog for `language` without writing anything to the data
    /// directory.
    ///
    /// A missing file is read from the shipped default instead; a language
    /// with neither gives an empty catalog. An unreadable or malformed file
    /// is an error.
    pub fn try_load(data_dir: &DataDirectory, language: &str) -> Result<Self, ConfigError> {
        let path = data_dir.message_file(language);

        if path.exists() {
            return Ok(Self::new(language, Self::read_file(&path)?));
        }

        let templates = match Self::default_resource(language) {
            Some(text) => json5::from_str(text).map_err(|e| ConfigError::ParseError(e, path))?,
            None => HashMap::new(),
        };
        Ok(Self::new(language, templates))
    }

    fn read_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e, path.to_owned()))?;
        json5::from_str(&text).map_err(|e| ConfigError::ParseError(e, path.to_owned()))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Render the message `key`, substituting each `(name, value)` pair
    /// for `{name}` in order.
    pub fn get(&self, key: &str, placeholders: &[(&str, &str)]) -> String {
        let template = self.templates.get(key).map(String::as_str).unwrap_or(key);
        fill_placeholders(template, placeholders)
    }
}

/// Substitute `{name}` for each `(name, value)` pair in turn. Unmatched
/// placeholders remain in the output.
pub fn fill_placeholders(template: &str, placeholders: &[(&str, &str)]) -> String {
    let mut message = template.to_owned();
    for (name, value) in placeholders {
        message = message.replace(&format!("{{{}}}", name), value);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MessageCatalog {
        let mut templates = HashMap::new();
        templates.insert("greeting".to_string(), "Hello {name}, from {place}".to_string());
        MessageCatalog::new("en", templates)
    }

    #[test]
    fn substitutes_placeholders() {
        assert_eq!(
            catalog().get("greeting", &[("name", "Steve"), ("place", "spawn")]),
            "Hello Steve, from spawn"
        );
    }

    #[test]
    fn unresolved_placeholders_left_verbatim() {
        assert_eq!(
            catalog().get("greeting", &[("name", "Steve")]),
            "Hello Steve, from {place}"
        );
        assert_eq!(
            catalog().get("greeting", &[("unused", "x")]),
            "Hello {name}, from {place}"
        );
    }

    #[test]
    fn missing_key_renders_key() {
        assert_eq!(catalog().get("no-such-key", &[]), "no-such-key");
        assert_eq!(
            catalog().get("{name} missing", &[("name", "Steve")]),
            "Steve missing"
        );
    }

    #[test]
    fn shipped_defaults_parse() {
        for lang in ["en", "es"] {
            let text = MessageCatalog::default_resource(lang).unwrap();
            let templates: HashMap<String, String> = json5::from_str(text).unwrap();
            for key in [
                "reason-invalid-domain",
                "reason-uuid-mismatch",
                "kick-message",
                "kick-reserved-uuid",
                "alert-message",
                "debug-message",
                "webhook-title",
                "webhook-description",
                "reload-success",
                "reload-no-permission",
            ] {
                assert!(templates.contains_key(key), "{} missing {}", lang, key);
            }
        }
        assert!(MessageCatalog::default_resource("xx").is_none());
    }

    #[test]
    fn load_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = DataDirectory::new(dir.path());

        let messages = MessageCatalog::load(&data_dir, "en");

        assert!(data_dir.message_file("en").exists());
        assert_eq!(messages.language(), "en");
        assert_ne!(messages.get("reload-success", &[]), "reload-success");
    }

    #[test]
    fn unknown_language_falls_back_to_keys() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = DataDirectory::new(dir.path());

        let messages = MessageCatalog::load(&data_dir, "xx");

        assert!(!data_dir.message_file("xx").exists());
        assert_eq!(messages.get("reload-success", &[]), "reload-success");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = DataDirectory::new(dir.path());
        std::fs::write(data_dir.message_file("en"), "{ broken").unwrap();

        match MessageCatalog::try_load(&data_dir, "en") {
            Err(ConfigError::ParseError(_, path)) => assert_eq!(path, data_dir.message_file("en")),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert_eq!(
            MessageCatalog::load(&data_dir, "en").get("reload-success", &[]),
            "reload-success"
        );
    }

    #[test]
    fn try_load_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = DataDirectory::new(dir.path());

        let messages = MessageCatalog::try_load(&data_dir, "es").unwrap();

        assert!(!data_dir.message_file("es").exists());
        assert_eq!(messages.language(), "es");
        assert_eq!(
            messages.get("reload-success", &[]),
            "Configuración de hostgate recargada."
        );
        assert_eq!(
            MessageCatalog::try_load(&data_dir, "xx").unwrap().get("x", &[]),
            "x"
        );
    }
}
