//! Client settings assembled at build time.

use store::VoidNotesConfig;
use ui::ClientSettings;

const BUNDLED_CONFIG: &str = include_str!("../void-notes.toml");

/// Settings from the bundled `void-notes.toml` plus build-environment
/// overrides.
pub fn load_settings() -> ClientSettings {
    settings_from(
        BUNDLED_CONFIG,
        option_env!("VOID_NOTES_API_URL"),
        option_env!("VOID_NOTES_OPENAI_API_KEY"),
    )
}

fn settings_from(raw: &str, api_url: Option<&str>, openai_key: Option<&str>) -> ClientSettings {
    let config = match VoidNotesConfig::from_toml(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid {}: {e}, using defaults", VoidNotesConfig::filename());
            VoidNotesConfig::default()
        }
    };

    ClientSettings {
        config: config.with_base_url_override(api_url),
        openai_api_key: openai_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{AiBackendKind, AuthScheme};

    #[test]
    fn test_bundled_config_parses() {
        let settings = settings_from(BUNDLED_CONFIG, None, None);
        assert_eq!(settings.config, VoidNotesConfig::default());
        assert!(settings.openai_api_key.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = settings_from(
            "[api]\nauth_scheme = \"raw\"\n[ai]\nbackend = \"openai\"\n",
            Some("http://localhost:10000"),
            Some(" sk-test "),
        );
        assert_eq!(settings.config.api.base_url, "http://localhost:10000");
        assert_eq!(settings.config.api.auth_scheme, AuthScheme::Raw);
        assert_eq!(settings.config.ai.backend, AiBackendKind::OpenAi);
        assert_eq!(settings.openai_api_key.as_deref(), Some("sk-test"));
        assert!(settings.ai_backend().is_ok());
    }

    #[test]
    fn test_broken_config_falls_back() {
        let settings = settings_from("[api\nbase_url = 3", Some(""), Some("  "));
        assert_eq!(settings.config, VoidNotesConfig::default());
        assert!(settings.openai_api_key.is_none());
    }
}
