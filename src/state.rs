use crate::pages::PageCharts;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub csv_path: PathBuf,
    pub template: Arc<str>,
    pub pages: Arc<Mutex<PageCharts>>,
}

impl AppState {
    pub fn new(csv_path: PathBuf, template: impl Into<Arc<str>>) -> Self {
        Self {
            csv_path,
            template: template.into(),
            pages: Arc::new(Mutex::new(PageCharts::default())),
        }
    }
}
