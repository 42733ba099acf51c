use crate::app::App;
use crate::demo;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Dashboard content, either read from a YAML file or the built-in demo set.
#[derive(Debug, Clone, Default)]
pub struct ContentSource {
    pub source: Option<String>,
    file: ContentFile,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ContentFile {
    #[serde(default)]
    context: Option<ContextSpec>,
    #[serde(default)]
    pods: Option<Vec<String>>,
    #[serde(default)]
    services: Option<Vec<String>>,
    #[serde(default, alias = "deploy")]
    deployments: Option<Vec<String>>,
    #[serde(default)]
    info: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ContextSpec {
    #[serde(default = "default_cluster")]
    cluster: String,
    #[serde(default = "default_namespace", alias = "ns")]
    namespace: String,
}

impl ContentSource {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = explicit
            .map(Path::to_path_buf)
            .or_else(discover_config_path)
        else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read content file {}", path.display()))?;
        let mut source = Self::parse(&raw)
            .with_context(|| format!("failed to parse content file {}", path.display()))?;
        source.source = Some(path.display().to_string());
        Ok(source)
    }

    fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        // A comment-only document deserializes to null.
        let file = serde_yaml::from_str::<Option<ContentFile>>(raw)?.unwrap_or_default();
        Ok(Self { source: None, file })
    }

    pub fn apply(&self, app: &mut App) {
        match &self.file.context {
            Some(context) => app.set_context(&context.cluster, &context.namespace),
            None => app.set_context(demo::CLUSTER, demo::NAMESPACE),
        }
        match &self.file.pods {
            Some(pods) => app.set_pods(pods),
            None => app.set_pods(&demo::pods()),
        }
        match &self.file.services {
            Some(services) => app.set_services(services),
            None => app.set_services(&demo::services()),
        }
        match &self.file.deployments {
            Some(deployments) => app.set_deployments(deployments),
            None => app.set_deployments(&demo::deployments()),
        }
        app.set_info(self.file.info.as_deref().unwrap_or(demo::INFO));
    }
}

fn default_cluster() -> String {
    demo::CLUSTER.to_string()
}

fn default_namespace() -> String {
    demo::NAMESPACE.to_string()
}

fn discover_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("KPANES_CONFIG")
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }

    let cwd_candidates = [
        PathBuf::from("kpanes.yaml"),
        PathBuf::from("kpanes.yml"),
        PathBuf::from(".kpanes.yaml"),
    ];
    for candidate in cwd_candidates {
        if candidate.exists() {
            return Some(candidate);
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        let user_candidates = [
            PathBuf::from(&home).join(".config/kpanes/config.yaml"),
            PathBuf::from(&home).join(".config/kpanes/config.yml"),
        ];
        for candidate in user_candidates {
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    None
}
