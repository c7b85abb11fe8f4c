//! # Configuração
//!
//! Valores padrão como constantes, sobrescritos por variáveis de ambiente.
//! O nível de log segue `RUST_LOG` e é configurado em `main`.
//!
//! | Variável | Padrão | Uso |
//! |----------|--------|-----|
//! | `RESTO_INPUT` | `data/restoran.json` | planilha de entrada |
//! | `RESTO_OUTPUT` | `data/peringkat.json` | planilha de ranking |
//! | `RESTO_TOP_N` | `10` | tamanho do ranking |
//! | `RESTO_RESOLUTION` | `1` | amostras por unidade na defuzzificação (1..=1000) |
//! | `RESTO_LENIENT` | `false` | pula linhas inválidas em vez de falhar |
//! | `RESTO_ADDR` | `0.0.0.0:3000` | endereço do modo `serve` |

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::inference::defuzzifier::{DEFAULT_RESOLUTION, MAX_RESOLUTION};

/// Planilha de entrada padrão (relativa à raiz do projeto).
const DEFAULT_INPUT: &str = "data/restoran.json";

/// Planilha de saída padrão.
const DEFAULT_OUTPUT: &str = "data/peringkat.json";

/// Tamanho padrão do ranking.
pub const DEFAULT_TOP_N: usize = 10;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Configuração do processo.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub top_n: usize,
    pub resolution: u32,
    pub lenient: bool,
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            top_n: DEFAULT_TOP_N,
            resolution: DEFAULT_RESOLUTION,
            lenient: false,
            bind_addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Lê a configuração das variáveis de ambiente do processo.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração a partir de uma função de busca de chaves.
    ///
    /// Separado de [`from_env`](Self::from_env) para testes não
    /// dependerem do ambiente global.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("RESTO_INPUT") {
            config.input_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("RESTO_OUTPUT") {
            config.output_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("RESTO_TOP_N") {
            config.top_n = parse_positive("RESTO_TOP_N", &raw)?;
        }
        if let Some(raw) = lookup("RESTO_RESOLUTION") {
            let resolution = parse_positive("RESTO_RESOLUTION", &raw)?;
            config.resolution = u32::try_from(resolution)
                .ok()
                .filter(|&r| r <= MAX_RESOLUTION)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "RESTO_RESOLUTION",
                    value: raw.clone(),
                    reason: "máximo de 1000 amostras por unidade",
                })?;
        }
        if let Some(raw) = lookup("RESTO_LENIENT") {
            config.lenient = parse_bool("RESTO_LENIENT", &raw)?;
        }
        if let Some(addr) = lookup("RESTO_ADDR") {
            config.bind_addr = addr;
        }

        Ok(config)
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            reason: "deve ser maior que zero",
        }),
        Ok(n) => Ok(n),
        Err(_) => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            reason: "esperado inteiro positivo",
        }),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            reason: "esperado true/false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.top_n, 10);
        assert_eq!(config.resolution, 1);
        assert!(!config.lenient);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("RESTO_INPUT", "/tmp/in.json"),
            ("RESTO_TOP_N", "3"),
            ("RESTO_RESOLUTION", "10"),
            ("RESTO_LENIENT", "TRUE"),
            ("RESTO_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("/tmp/in.json"));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.top_n, 3);
        assert_eq!(config.resolution, 10);
        assert!(config.lenient);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    /// Zero e lixo são rejeitados com o nome da variável na mensagem
    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[("RESTO_TOP_N", "0")])).unwrap_err();
        assert!(err.to_string().contains("RESTO_TOP_N"));

        let err = Config::from_lookup(lookup(&[("RESTO_RESOLUTION", "fino")])).unwrap_err();
        assert!(err.to_string().contains("RESTO_RESOLUTION"));

        assert!(Config::from_lookup(lookup(&[("RESTO_LENIENT", "talvez")])).is_err());
    }

    /// Resoluções enormes travariam o centroide; o limite é 1000
    #[test]
    fn test_resolution_upper_bound() {
        let config = Config::from_lookup(lookup(&[("RESTO_RESOLUTION", "1000")])).unwrap();
        assert_eq!(config.resolution, MAX_RESOLUTION);

        for raw in ["1001", "4000000000", "99999999999999999999"] {
            let err = Config::from_lookup(lookup(&[("RESTO_RESOLUTION", raw)])).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid { var: "RESTO_RESOLUTION", .. }
            ));
        }
    }
}
