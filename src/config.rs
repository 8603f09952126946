use crate::classify::ClassifierConfig;
use crate::report::ScriptConfig;
use crate::synth::command::SynthConfig;
use crate::text::SegmenterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "fetch")]
use crate::source::remote::SourceConfig;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub script: ScriptConfig,
    pub segmenter: SegmenterConfig,
    pub classifier: ClassifierConfig,
    pub synth: SynthConfig,
    #[cfg(feature = "fetch")]
    pub source: SourceConfig,
    pub output: OutputConfig,
}

/// Artifact output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the WAV artifact is written into. Defaults to the
    /// current working directory.
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    /// Missing fields use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if the file
    /// doesn't exist. Invalid TOML is still an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                let missing = e
                    .downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false);
                if missing {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - RETELL_SYNTH_COMMAND → synth.command
    /// - RETELL_OUTPUT_DIR → output.directory
    /// - RETELL_BASE_URL → source.base_url (fetch builds only)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(command) = std::env::var("RETELL_SYNTH_COMMAND")
            && !command.is_empty()
        {
            self.synth.command = command;
        }

        if let Ok(dir) = std::env::var("RETELL_OUTPUT_DIR")
            && !dir.is_empty()
        {
            self.output.directory = Some(PathBuf::from(dir));
        }

        #[cfg(feature = "fetch")]
        if let Ok(base_url) = std::env::var("RETELL_BASE_URL")
            && !base_url.is_empty()
        {
            self.source.base_url = base_url;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/retell/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("retell")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Mutex to serialize tests that modify environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    // SAFETY: These helpers are only used in tests with ENV_LOCK held,
    // ensuring no concurrent access to environment variables.
    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) }
    }

    fn clear_retell_env() {
        remove_env("RETELL_SYNTH_COMMAND");
        remove_env("RETELL_OUTPUT_DIR");
        remove_env("RETELL_BASE_URL");
    }

    #[test]
    fn test_default_config_has_correct_values() {
        let config = Config::default();

        assert!(config.script.intro);
        assert!(config.script.outro);

        assert!(!config.segmenter.split_on_clauses);
        assert_eq!(config.segmenter.sentence_pause_secs, 1.0);
        assert_eq!(config.segmenter.clause_pause_secs, 0.15);
        assert_eq!(config.segmenter.default_pause_secs, 0.3);

        assert_eq!(config.classifier.vocabulary[0], "LSD");
        assert_eq!(config.classifier.dose_weight, 2);

        assert_eq!(config.synth.command, "piper");
        assert_eq!(config.output.directory, None);
    }

    #[test]
    fn test_load_from_toml_file() {
        let toml_content = r#"
            [script]
            intro = false

            [segmenter]
            split_on_clauses = true
            sentence_pause_secs = 0.6

            [classifier]
            vocabulary = ["DMT", "LSD"]
            dose_weight = 3

            [synth]
            command = "espeak-ng"
            args = ["--stdout"]

            [output]
            directory = "/tmp/narrations"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert!(!config.script.intro);
        assert!(config.script.outro); // untouched default
        assert!(config.segmenter.split_on_clauses);
        assert_eq!(config.segmenter.sentence_pause_secs, 0.6);
        assert_eq!(config.segmenter.clause_pause_secs, 0.15); // default
        assert_eq!(config.classifier.vocabulary, vec!["DMT", "LSD"]);
        assert_eq!(config.classifier.dose_weight, 3);
        assert_eq!(config.synth.command, "espeak-ng");
        assert_eq!(config.synth.args, vec!["--stdout"]);
        assert_eq!(
            config.output.directory,
            Some(PathBuf::from("/tmp/narrations"))
        );
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let toml_content = r#"
            [synth]
            command = "say"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.synth.command, "say");
        assert_eq!(config.segmenter, SegmenterConfig::default());
        assert_eq!(config.classifier, ClassifierConfig::default());
    }

    #[test]
    fn test_env_override_synth_command() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_retell_env();

        set_env("RETELL_SYNTH_COMMAND", "espeak-ng");
        let config = Config::default().with_env_overrides();

        assert_eq!(config.synth.command, "espeak-ng");

        clear_retell_env();
    }

    #[test]
    fn test_env_override_output_dir() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_retell_env();

        set_env("RETELL_OUTPUT_DIR", "/data/tracks");
        let config = Config::default().with_env_overrides();

        assert_eq!(config.output.directory, Some(PathBuf::from("/data/tracks")));

        clear_retell_env();
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_env_override_base_url() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_retell_env();

        set_env("RETELL_BASE_URL", "http://localhost:8080/api/v1");
        let config = Config::default().with_env_overrides();

        assert_eq!(config.source.base_url, "http://localhost:8080/api/v1");

        clear_retell_env();
    }

    #[test]
    fn test_env_override_empty_string_ignored() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_retell_env();

        set_env("RETELL_SYNTH_COMMAND", "");
        let config = Config::default().with_env_overrides();

        assert_eq!(config.synth.command, "piper");

        clear_retell_env();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let invalid_toml = r#"
            [synth
            command = "broken
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_toml.as_bytes()).unwrap();

        assert!(Config::load(temp_file.path()).is_err());
        assert!(Config::load_or_default(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_returns_default_for_missing_file() {
        let missing_path = Path::new("/tmp/nonexistent_retell_config_12345.toml");
        let config = Config::load_or_default(missing_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_path_is_xdg_compliant() {
        let path = Config::default_path();
        let path_str = path.to_string_lossy();

        assert!(path_str.contains("retell"));
        assert!(path_str.ends_with("config.toml"));
    }
}
