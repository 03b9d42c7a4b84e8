//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pantry_config::PantryConfig;

fn layered(file: &str) -> Figment {
    Figment::from(Serialized::defaults(PantryConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed("PANTRY_").split("__"))
}

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://recipes.example.com/api/v1"
timeout_secs = 30
user_agent = "pantry-test"
"#,
        )?;

        let config: PantryConfig = layered("config.toml").extract()?;

        assert_eq!(config.api.base_url, "https://recipes.example.com/api/v1");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.user_agent, "pantry-test");
        assert_eq!(
            config.api.normalized_base_url().expect("valid url"),
            "https://recipes.example.com/api/v1/"
        );
        Ok(())
    });
}

#[test]
fn partial_section_keeps_field_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
page_size = 50
"#,
        )?;

        let config: PantryConfig = layered("config.toml").extract()?;

        assert_eq!(config.general.page_size, 50);
        assert_eq!(config.general.toast_duration_ms, 4000);
        assert_eq!(config.api.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("PANTRY_AUTH__TOKEN", "from-env");
        jail.create_file(
            "config.toml",
            r#"
[auth]
token = "from-toml"

[api]
base_url = "http://toml.local/api/v1/"
"#,
        )?;

        let config: PantryConfig = layered("config.toml").extract()?;

        // Env should win over TOML
        assert_eq!(config.auth.token, "from-env");
        // TOML value not overridden by env should remain
        assert_eq!(config.api.base_url, "http://toml.local/api/v1/");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("PANTRY_GENERAL__TOAST_DURATION_MS", "1500");

        let config: PantryConfig = Figment::from(Serialized::defaults(PantryConfig::default()))
            .merge(Env::prefixed("PANTRY_").split("__"))
            .extract()?;

        assert_eq!(config.general.toast_duration_ms, 1500);
        Ok(())
    });
}

/// Single-underscore keys do not reach nested sections; the value stays at
/// its default. The CLI warns about this case.
#[test]
fn single_underscore_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("PANTRY_AUTH_TOKEN", "typo");

        let config: PantryConfig = Figment::from(Serialized::defaults(PantryConfig::default()))
            .merge(Env::prefixed("PANTRY_").split("__"))
            .extract()?;

        assert!(!config.auth.is_configured());
        Ok(())
    });
}

#[test]
fn wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
page_size = "lots"
"#,
        )?;

        let result: Result<PantryConfig, _> = layered("config.toml").extract();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".pantry")?;
        jail.create_file(
            ".pantry/config.toml",
            r#"
[api]
base_url = "http://project.local/api/v1/"
"#,
        )?;

        let config = PantryConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://project.local/api/v1/");
        Ok(())
    });
}
