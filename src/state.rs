use crate::models::AppData;
use crate::ranking::DEFAULT_AUTHOR_LIMIT;
use std::{env, path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handler state: the article store, where it is persisted, and how
/// many writers the dashboard lists when the request does not say.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub author_limit: usize,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            author_limit: DEFAULT_AUTHOR_LIMIT,
        }
    }

    pub fn with_author_limit(mut self, author_limit: usize) -> Self {
        self.author_limit = author_limit;
        self
    }
}

/// Reads `DASHBOARD_AUTHOR_LIMIT`, falling back to the default on absent or
/// unparsable values.
pub fn resolve_author_limit() -> usize {
    env::var("DASHBOARD_AUTHOR_LIMIT")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_AUTHOR_LIMIT)
}
