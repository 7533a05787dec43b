//! Pasa a `rustc-env` las claves de `.env` que lee `src/config.rs`, para que
//! `option_env!` las vea en tiempo de compilación.

use std::env;
use std::fs;

const ENV_FILE: &str = ".env";

/// Claves que consume `AppConfig::from_env`
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "MAP_CONTAINER_ID",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
];

/// `KEY=VALUE` por línea; comentarios `#`, `export` opcional, comillas fuera
fn parse_env(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim();
            let key = key.strip_prefix("export ").unwrap_or(key).trim();
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            (key, value)
        })
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", ENV_FILE);
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let contents = match fs::read_to_string(ENV_FILE) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=Sin {ENV_FILE}: se usan los valores por defecto de config.rs");
            return;
        }
    };

    for (key, value) in parse_env(&contents) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning={ENV_FILE}: clave desconocida `{key}`, se ignora");
            continue;
        }
        // El entorno real manda sobre .env
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
