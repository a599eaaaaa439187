//! Server settings
//!
//! Defaults first, then `casebook.toml` in the working directory, then
//! environment variables. The file is a flat string map so a partial file
//! only overrides the keys it names.

use std::collections::HashMap;
use std::fs;

/// Settings file read from the server's working directory
pub const SETTINGS_FILE: &str = "casebook.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the server listens on
    pub bind: String,
    /// Origin permitted by the CORS layer
    pub allowed_origin: String,
    /// Optional path to a catalog JSON file replacing the embedded dataset
    pub data_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            allowed_origin: "http://localhost:3000".to_string(),
            data_path: None,
        }
    }
}

/// Load settings, applying file values and then environment overrides
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(bind) = file_cfg.get("bind") {
                settings.bind = bind.clone();
            }
            if let Some(origin) = file_cfg.get("allowed_origin") {
                settings.allowed_origin = origin.clone();
            }
            if let Some(path) = file_cfg.get("data_path") {
                settings.data_path = Some(path.clone());
            }
        }
    }

    if let Ok(bind) = std::env::var("CASEBOOK_BIND") {
        settings.bind = bind;
    }
    if let Ok(origin) = std::env::var("CASEBOOK_ALLOWED_ORIGIN") {
        settings.allowed_origin = origin;
    }
    if let Ok(path) = std::env::var("CASEBOOK_DATA_PATH") {
        settings.data_path = Some(path);
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::time::{SystemTime, UNIX_EPOCH};

    // One ordered test: the steps share the working directory and the
    // CASEBOOK_* variables, both process-global.
    #[test]
    fn test_settings_precedence() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        let dir = env::temp_dir().join(format!("casebook_settings_{}", nanos));
        fs::create_dir_all(&dir).unwrap();
        let prev_dir = env::current_dir().unwrap();
        env::set_current_dir(&dir).unwrap();

        // No file, no environment: defaults.
        let settings = load_settings();
        assert_eq!(settings.bind, "127.0.0.1:5000");
        assert_eq!(settings.allowed_origin, "http://localhost:3000");
        assert_eq!(settings.data_path, None);

        // File values override defaults; unnamed keys keep defaults.
        fs::write(
            SETTINGS_FILE,
            "bind = \"0.0.0.0:5000\"\ndata_path = \"fixtures/catalog.json\"\n",
        )
        .unwrap();
        let settings = load_settings();
        assert_eq!(settings.bind, "0.0.0.0:5000");
        assert_eq!(settings.allowed_origin, "http://localhost:3000");
        assert_eq!(settings.data_path.as_deref(), Some("fixtures/catalog.json"));

        // Environment overrides the file.
        env::set_var("CASEBOOK_BIND", "127.0.0.1:5999");
        env::set_var("CASEBOOK_ALLOWED_ORIGIN", "http://localhost:8080");
        let settings = load_settings();
        assert_eq!(settings.bind, "127.0.0.1:5999");
        assert_eq!(settings.allowed_origin, "http://localhost:8080");

        env::remove_var("CASEBOOK_BIND");
        env::remove_var("CASEBOOK_ALLOWED_ORIGIN");
        env::set_current_dir(prev_dir).unwrap();
        let _ = fs::remove_dir_all(&dir);
    }
}
