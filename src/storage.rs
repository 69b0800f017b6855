use crate::errors::AppError;
use crate::models::{AppData, Article};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub const DEFAULT_DATA_PATH: &str = "data/articles.json";

pub fn resolve_data_path() -> PathBuf {
    env::var("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH))
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<AppData>(&bytes) {
            Ok(data) => {
                info!("loaded {} articles from {}", data.articles.len(), path.display());
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

impl AppData {
    /// Inserts or replaces articles by id, keeping the position of articles
    /// already present so ranking ties stay stable across ingests.
    pub fn upsert(&mut self, articles: Vec<Article>) {
        for article in articles {
            match self.articles.iter_mut().find(|existing| existing.id == article.id) {
                Some(existing) => *existing = article,
                None => self.articles.push(article),
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Article> {
        let idx = self.articles.iter().position(|article| article.id == id)?;
        Some(self.articles.remove(idx))
    }
}
