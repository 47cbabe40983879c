use std::sync::Arc;

use crate::{config::Config, store::HrStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HrStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(HrStore::new()),
            config,
        }
    }
}
