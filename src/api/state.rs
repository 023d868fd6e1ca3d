use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::cache::TtlCache;
use crate::model::Shaped;
use crate::pipeline::schema::SheetSchema;

#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    /// Directory holding the CSV workbook; re-opened on every refresh.
    pub workbook_dir: PathBuf,
    pub schema: SheetSchema,
    pub refresh_secs: u64,
    /// Shaped-data cache so concurrent page polls within the refresh
    /// window share one source read.
    pub cache: Mutex<TtlCache<Shaped>>,
}

impl AppState {
    pub fn new(workbook_dir: PathBuf, schema: SheetSchema, refresh_secs: u64) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                workbook_dir,
                schema,
                refresh_secs,
                cache: Mutex::new(TtlCache::new(Duration::from_secs(refresh_secs))),
            }),
        }
    }
}
