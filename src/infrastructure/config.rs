use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::application::dashboard_service::DEFAULT_PERIOD;

const ENV_PREFIX: &str = "DASHGEN";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorSettings {
    #[serde(default = "default_period")]
    pub period: u32,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default = "default_recommendation_dir")]
    pub recommendation_dir: PathBuf,
}

fn default_period() -> u32 {
    DEFAULT_PERIOD
}

fn default_output() -> PathBuf {
    PathBuf::from("dashboard.json")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("dashboard.log")
}

fn default_recommendation_dir() -> PathBuf {
    PathBuf::from("./recommendation")
}

impl GeneratorSettings {
    /// Bundled CSV for a namespace, e.g. `kafka-recommended-metrics.csv`
    /// for `AWS/Kafka`.
    pub fn recommended_csv(&self, namespace: &str) -> PathBuf {
        let service = namespace.replace("AWS/", "").to_lowercase();
        self.recommendation_dir
            .join(format!("{}-recommended-metrics.csv", service))
    }
}

/// Defaults, then `config/generator.*` if present, then `DASHGEN_*` variables.
pub fn load_generator_config() -> anyhow::Result<GeneratorSettings> {
    load_generator_config_from(Path::new("config/generator"))
}

pub fn load_generator_config_from(base: &Path) -> anyhow::Result<GeneratorSettings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(&base.to_string_lossy()).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_generator_config_from(&dir.path().join("absent")).unwrap();

        assert_eq!(settings.period, 60);
        assert_eq!(settings.output, PathBuf::from("dashboard.json"));
        assert_eq!(settings.log_file, PathBuf::from("dashboard.log"));
        assert_eq!(settings.recommendation_dir, PathBuf::from("./recommendation"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("generator.toml"),
            "period = 300\noutput = \"out/kafka.json\"\n",
        )
        .unwrap();

        let settings = load_generator_config_from(&dir.path().join("generator")).unwrap();

        assert_eq!(settings.period, 300);
        assert_eq!(settings.output, PathBuf::from("out/kafka.json"));
        assert_eq!(settings.log_file, PathBuf::from("dashboard.log"));
    }

    #[test]
    fn test_recommended_csv() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_generator_config_from(&dir.path().join("absent")).unwrap();

        assert_eq!(
            settings.recommended_csv("AWS/Kafka"),
            PathBuf::from("./recommendation/kafka-recommended-metrics.csv")
        );
        assert_eq!(
            settings.recommended_csv("AWS/ES"),
            PathBuf::from("./recommendation/es-recommended-metrics.csv")
        );
    }
}
