use std::path::Path;

use veille_config::VeilleConfig;
use veille_service::MonitorService;
use veille_store::FileBlobStore;

use crate::context::AppGateway;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: MonitorService<AppGateway, FileBlobStore>,
    pub config: VeilleConfig,
}

impl AppContext {
    /// Open the blob store under `data_dir` and wire the service.
    ///
    /// A missing Gemini key is not an error here: commands that need the
    /// gateway fail when they call it.
    pub fn init(config: VeilleConfig, data_dir: &Path) -> Self {
        let gateway = AppGateway::from_config(&config);
        if !gateway.is_configured() {
            tracing::debug!("gemini gateway not configured; research commands will fail");
        }
        let blob = FileBlobStore::new(data_dir);
        tracing::debug!(data_dir = %data_dir.display(), "opening record store");
        let service = MonitorService::new(gateway, blob, config.general.locale);

        Self { service, config }
    }
}
