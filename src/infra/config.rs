//! Environment configuration for the service binary.

use std::env;
use std::time::Duration;

use crate::domain::ConfigError;
use crate::infra::peer::PeerClientConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_GERENCIAMENTO_URL: &str = "http://gerenciamento:5000";
const DEFAULT_PEER_TIMEOUT_SECS: u64 = 3;

/// Which of the three services this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceName {
    Gerenciamento,
    Tarefas,
    Reservas,
}

impl ServiceName {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "gerenciamento" => Ok(ServiceName::Gerenciamento),
            "tarefas" => Ok(ServiceName::Tarefas),
            "reservas" => Ok(ServiceName::Reservas),
            other => Err(ConfigError::InvalidValue {
                key: "SERVICE".to_string(),
                message: format!("unknown service '{other}'"),
            }),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceName::Gerenciamento => "gerenciamento",
            ServiceName::Tarefas => "tarefas",
            ServiceName::Reservas => "reservas",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service: ServiceName,
    pub bind_addr: String,
    pub peer: PeerClientConfig,
}

impl ServiceConfig {
    /// Reads `SERVICE`, `BIND_ADDR`, `GERENCIAMENTO_URL` and
    /// `PEER_TIMEOUT_SECS`, falling back to the documented defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let service = match env::var("SERVICE") {
            Ok(value) => ServiceName::parse(&value)?,
            Err(_) => ServiceName::Gerenciamento,
        };

        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let base_url = env::var("GERENCIAMENTO_URL")
            .unwrap_or_else(|_| DEFAULT_GERENCIAMENTO_URL.to_string());

        let timeout_secs = match env::var("PEER_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: "PEER_TIMEOUT_SECS".to_string(),
                message: e.to_string(),
            })?,
            Err(_) => DEFAULT_PEER_TIMEOUT_SECS,
        };

        Ok(Self {
            service,
            bind_addr,
            peer: PeerClientConfig::new(base_url, Duration::from_secs(timeout_secs)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_name_parse() {
        assert_eq!(
            ServiceName::parse("gerenciamento").unwrap(),
            ServiceName::Gerenciamento
        );
        assert_eq!(ServiceName::parse("tarefas").unwrap(), ServiceName::Tarefas);
        assert_eq!(
            ServiceName::parse("reservas").unwrap(),
            ServiceName::Reservas
        );
        assert!(ServiceName::parse("matriculas").is_err());
    }

    #[test]
    fn test_service_name_round_trip() {
        for name in ["gerenciamento", "tarefas", "reservas"] {
            assert_eq!(ServiceName::parse(name).unwrap().as_str(), name);
        }
    }

    // from_env tests are skipped because std::env::set_var/remove_var
    // are unsafe in Rust 2024 edition
}
