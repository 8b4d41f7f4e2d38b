use crate::models::Record;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared application state: the persisted record collection and where it
/// lives on disk. The mutex is the single event-processing discipline; every
/// handler runs its read-modify-persist cycle to completion under it.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub records: Arc<Mutex<Vec<Record>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, records: Vec<Record>) -> Self {
        Self {
            data_path,
            records: Arc::new(Mutex::new(records)),
        }
    }
}
