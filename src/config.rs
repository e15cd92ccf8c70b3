use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "http://localhost:5000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            toast_duration_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self::from_values(
            option_env!("BACKEND_URL_DEVELOPMENT"),
            option_env!("BACKEND_URL_PRODUCTION"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("TOAST_DURATION_MS"),
        )
        .or_defaults(defaults)
    }

    fn from_values(
        backend_url_development: Option<&str>,
        backend_url_production: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> PartialConfig {
        PartialConfig {
            backend_url_development: backend_url_development.map(str::to_string),
            backend_url_production: backend_url_production.map(str::to_string),
            environment: environment.map(str::to_string),
            enable_logging: enable_logging.and_then(|v| v.parse().ok()),
            toast_duration_ms: toast_duration_ms.and_then(|v| v.parse().ok()),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Valores leídos del entorno, cada uno opcional
struct PartialConfig {
    backend_url_development: Option<String>,
    backend_url_production: Option<String>,
    environment: Option<String>,
    enable_logging: Option<bool>,
    toast_duration_ms: Option<u32>,
}

impl PartialConfig {
    fn or_defaults(self, defaults: AppConfig) -> AppConfig {
        AppConfig {
            backend_url_development: self
                .backend_url_development
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: self
                .backend_url_production
                .unwrap_or(defaults.backend_url_production),
            environment: self.environment.unwrap_or(defaults.environment),
            enable_logging: self.enable_logging.unwrap_or(defaults.enable_logging),
            toast_duration_ms: self.toast_duration_ms.unwrap_or(defaults.toast_duration_ms),
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:5000");
        assert!(config.is_logging_enabled());
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn production_environment_selects_production_url() {
        let config = AppConfig::from_values(
            Some("http://localhost:5000"),
            Some("https://api.example.com"),
            Some("production"),
            None,
            None,
        )
        .or_defaults(AppConfig::default());
        assert_eq!(config.backend_url(), "https://api.example.com");
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, Some("maybe"), Some("soon"))
            .or_defaults(AppConfig::default());
        assert!(config.enable_logging);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.environment, "development");
    }
}
