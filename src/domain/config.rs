//! Config - Application Configuration

use serde::{Deserialize, Serialize};

/// Persisted UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Window geometry
    pub window: WindowConfig,
}

/// Window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 700.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_geometry() {
        let config = UiConfig::default();
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 700.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: UiConfig = serde_json::from_str("{}").expect("parse empty config");
        assert_eq!(config.window.width, 1024.0);

        let config: UiConfig =
            serde_json::from_str(r#"{"window":{"width":800.0}}"#).expect("parse partial config");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 700.0);
    }
}
