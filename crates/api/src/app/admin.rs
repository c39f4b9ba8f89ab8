//! Admin-panel presentation configuration.
//!
//! Pure configuration values with no behavioral semantics; kept static
//! rather than as process state.

/// Main heading shown on the admin panel.
pub const SITE_HEADER: &str = "Warehouse Management Panel";

/// Browser title.
pub const SITE_TITLE: &str = "Warehouse administration";

/// Dashboard greeting.
pub const INDEX_TITLE: &str = "Welcome to the warehouse dashboard";

/// Default number of rows per list page.
pub const LIST_PER_PAGE: usize = 20;
