use crate::enums::Role;
use crate::shared::async_action::{ActionKind, SimulatedAction};
use crate::shared::error::{DashboardError, DashboardResult};
use crate::shared::onboarding::OnboardingKey;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub timings: TimingsConfig,
    pub qr: QrConfig,
    pub storage: StorageConfig,
}

/// Задержки имитируемых действий, мс
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TimingsConfig {
    pub qr_scan_ms: u32,
    pub form_submit_ms: u32,
    pub send_message_ms: u32,
    pub toast_ttl_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct QrConfig {
    /// What every simulated scan decodes to
    pub scan_result: String,
    /// Payload shown by the generator before the user picks anything
    pub default_payload: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub visited_suffix: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[timings]
qr_scan_ms = 2000
form_submit_ms = 1000
send_message_ms = 500
toast_ttl_ms = 4000

[qr]
scan_result = "PRODUCT_123_QTY_100"
default_payload = "PRODUCT_123_QTY_500"

[storage]
visited_suffix = "_visited"
"#;

impl DashboardConfig {
    pub fn parse(contents: &str) -> DashboardResult<Self> {
        toml::from_str(contents).map_err(|e| DashboardError::Config(e.to_string()))
    }

    pub fn embedded() -> DashboardResult<Self> {
        Self::parse(DEFAULT_CONFIG)
    }

    /// Delay and result for a simulated action kind.
    pub fn action(&self, kind: ActionKind) -> SimulatedAction {
        let (delay_ms, result) = match kind {
            ActionKind::QrScan => (self.timings.qr_scan_ms, self.qr.scan_result.clone()),
            ActionKind::LoginSubmit => (self.timings.form_submit_ms, "ok".to_string()),
            ActionKind::RegistrationSubmit => {
                (self.timings.form_submit_ms, "submitted".to_string())
            }
            ActionKind::SendMessage => (self.timings.send_message_ms, "delivered".to_string()),
        };
        SimulatedAction {
            kind,
            delay_ms,
            result,
        }
    }

    pub fn visited_key(&self, role: Role) -> OnboardingKey {
        OnboardingKey::with_suffix(role, &self.storage.visited_suffix)
    }
}

/// Load configuration
///
/// Search order:
/// 1. `override_toml` if given (the frontend reads it from localStorage)
/// 2. Falls back to embedded default config
///
/// A malformed override is an error; the caller decides whether to fall back.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<DashboardConfig> {
    if let Some(contents) = override_toml {
        log::info!("Loading config from override ({} bytes)", contents.len());
        let config = DashboardConfig::parse(contents)?;
        return Ok(config);
    }

    log::info!("Using default embedded configuration");
    let config = DashboardConfig::embedded()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DashboardConfig::embedded();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.timings.qr_scan_ms, 2000);
        assert_eq!(config.timings.form_submit_ms, 1000);
        assert_eq!(config.qr.scan_result, "PRODUCT_123_QTY_100");
        assert_eq!(config.storage.visited_suffix, "_visited");
    }

    #[test]
    fn test_load_without_override_uses_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config, DashboardConfig::embedded().unwrap());
    }

    #[test]
    fn test_override_replaces_values() {
        let custom = DEFAULT_CONFIG.replace("qr_scan_ms = 2000", "qr_scan_ms = 50");
        let config = load_config(Some(&custom)).unwrap();
        assert_eq!(config.action(ActionKind::QrScan).delay_ms, 50);
    }

    #[test]
    fn test_malformed_override_is_error() {
        assert!(load_config(Some("[timings]\nqr_scan_ms = \"soon\"")).is_err());
        assert!(matches!(
            DashboardConfig::parse("not toml at all ="),
            Err(DashboardError::Config(_))
        ));
    }

    #[test]
    fn test_action_table() {
        let config = DashboardConfig::embedded().unwrap();
        let scan = config.action(ActionKind::QrScan);
        assert_eq!(scan.delay_ms, 2000);
        assert_eq!(scan.result, "PRODUCT_123_QTY_100");
        assert_eq!(config.action(ActionKind::SendMessage).delay_ms, 500);
        assert_eq!(config.action(ActionKind::RegistrationSubmit).delay_ms, 1000);
        assert_eq!(config.visited_key(Role::Distributor).as_str(), "distributor_visited");
    }
}
