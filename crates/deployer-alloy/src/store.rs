use deployer_trait::{DeploymentRecord, DeploymentStore};
use std::path::{Path, PathBuf};

/// Deployment records for one network, one JSON file per contract:
/// `<root>/<network>/<contract>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>, network: &str) -> Self {
        Self {
            dir: root.as_ref().join(network),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, contract: &str) -> PathBuf {
        self.dir.join(format!("{contract}.json"))
    }
}

#[async_trait::async_trait]
impl DeploymentStore for FileStore {
    async fn save(&self, record: &DeploymentRecord) -> eyre::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let contents = serde_json::to_string_pretty(record)?;
        tokio::fs::write(self.record_path(&record.contract), contents).await?;
        Ok(())
    }

    async fn get(&self, contract: &str) -> eyre::Result<Option<DeploymentRecord>> {
        match tokio::fs::read_to_string(self.record_path(contract)).await {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
