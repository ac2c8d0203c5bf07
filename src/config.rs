// src/config.rs

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Clave del servicio de generación. `Missing` es un estado válido: la app arranca
/// igual y cada petición falla al enviarse.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    ApiKey(String),
    Missing,
}

impl Credential {
    pub fn from_value(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Credential::ApiKey(v),
            _ => Credential::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Credential::Missing)
    }
}

// No imprimir nunca la clave en los logs
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credential::Missing => f.write_str("Missing"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: Credential,
    pub model: String,
    pub endpoint: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: Credential::Missing,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Construye la configuración a partir de una función de lookup de variables,
    /// para poder probarla sin tocar el entorno del proceso.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = Credential::from_value(non_empty("API_KEY").or_else(|| non_empty("GEMINI_API_KEY")));
        let model = non_empty("AURABOOK_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let endpoint = non_empty("AURABOOK_ENDPOINT")
            .map(|e| e.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            api_key,
            model,
            endpoint,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        // Un .env local es opcional
        if let Err(err) = dotenv::dotenv() {
            log::debug!("sin fichero .env: {err}");
        }
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        config.warn_if_degraded();
        config
    }

    /// En WASM no hay entorno de proceso: las claves se fijan al compilar.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| {
            match key {
                "API_KEY" => option_env!("API_KEY"),
                "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
                "AURABOOK_MODEL" => option_env!("AURABOOK_MODEL"),
                "AURABOOK_ENDPOINT" => option_env!("AURABOOK_ENDPOINT"),
                _ => None,
            }
            .map(str::to_string)
        });
        config.warn_if_degraded();
        config
    }

    fn warn_if_degraded(&self) {
        if self.api_key.is_missing() {
            log::warn!("API_KEY no definida: AuraBot no podrá contestar hasta configurarla");
        }
        log::info!(
            "asistente configurado: modelo {}, endpoint {}, clave {:?}",
            self.model,
            self.endpoint,
            self.api_key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    /// Logger de pruebas que guarda los avisos emitidos.
    struct CapturedWarnings(Mutex<Vec<String>>);

    impl log::Log for CapturedWarnings {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    fn captured() -> &'static CapturedWarnings {
        static LOGGER: OnceLock<CapturedWarnings> = OnceLock::new();
        let logger = LOGGER.get_or_init(|| CapturedWarnings(Mutex::new(Vec::new())));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(log::LevelFilter::Warn);
        }
        logger
    }

    fn warnings_mentioning(needle: &str) -> usize {
        captured()
            .0
            .lock()
            .map(|lines| lines.iter().filter(|l| l.contains(needle)).count())
            .unwrap_or(0)
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AssistantConfig::from_lookup(lookup(&[]));
        assert!(config.api_key.is_missing());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn api_key_takes_precedence_over_gemini_key() {
        let config = AssistantConfig::from_lookup(lookup(&[("API_KEY", "a"), ("GEMINI_API_KEY", "b")]));
        assert_eq!(config.api_key, Credential::ApiKey("a".into()));

        let config = AssistantConfig::from_lookup(lookup(&[("API_KEY", "  "), ("GEMINI_API_KEY", "b")]));
        assert_eq!(config.api_key, Credential::ApiKey("b".into()));
    }

    #[test]
    fn overrides_model_and_endpoint() {
        let config = AssistantConfig::from_lookup(lookup(&[
            ("AURABOOK_MODEL", "gemini-2.5-pro"),
            ("AURABOOK_ENDPOINT", "http://127.0.0.1:9000/v1beta/"),
        ]));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/v1beta");
    }

    #[test]
    fn debug_hides_the_key() {
        let shown = format!("{:?}", Credential::ApiKey("secreto".into()));
        assert!(!shown.contains("secreto"));
    }

    #[test]
    fn missing_key_logs_a_warning() {
        captured();
        let before = warnings_mentioning("API_KEY no definida");

        AssistantConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).warn_if_degraded();
        assert_eq!(warnings_mentioning("API_KEY no definida"), before);

        AssistantConfig::from_lookup(lookup(&[])).warn_if_degraded();
        assert_eq!(warnings_mentioning("API_KEY no definida"), before + 1);
    }
}
