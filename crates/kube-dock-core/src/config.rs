use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "kube-dock.toml";

/// kube-dock.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockConfig {
    #[serde(default)]
    pub dockerfile: DockerfileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerfileConfig {
    /// Descriptor file edited when `--config` is not given
    #[serde(default = "default_dockerfile_path")]
    pub path: PathBuf,
}

impl Default for DockerfileConfig {
    fn default() -> Self {
        Self {
            path: default_dockerfile_path(),
        }
    }
}

impl DockConfig {
    /// Load from kube-dock.toml in the given directory, or return defaults if not found.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                path: config_path.clone(),
                source: e,
            })?;
        toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    /// Descriptor path to edit: the explicit override if any, else the configured one.
    pub fn dockerfile_path(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self.dockerfile.path.clone(),
        }
    }
}

fn default_dockerfile_path() -> PathBuf {
    PathBuf::from("Dockerfile")
}
