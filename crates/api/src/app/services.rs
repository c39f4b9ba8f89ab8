use stockroom_store::WarehouseService;

/// Application services shared across handlers via `Extension<Arc<_>>`.
#[derive(Debug, Default)]
pub struct AppServices {
    warehouse: WarehouseService,
}

impl AppServices {
    /// Wire up the in-memory warehouse (single-process deployment).
    pub fn build() -> Self {
        Self {
            warehouse: WarehouseService::new(),
        }
    }

    pub fn warehouse(&self) -> &WarehouseService {
        &self.warehouse
    }
}
