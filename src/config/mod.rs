mod loader;

pub use loader::{Config, ExcludeSet, InvalidPattern, ReportConfig};
