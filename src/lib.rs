// Library interface for swinglab
// This allows integration tests to access internal modules

pub mod dashboard;
pub mod drills;
pub mod errors;
pub mod icons;
pub mod metrics;
pub mod performance;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use errors::SwingLabError;
pub use metrics::{MetricKey, MetricSeries, MetricSummary, TimeRange};
pub use performance::{FilterType, PerformanceViewState, SelectionSet, TabKey};
pub use session::{Session, SessionKind, SessionMetrics};
