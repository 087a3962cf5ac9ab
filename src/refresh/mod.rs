mod orchestrator;
mod refresh_summary;
mod supervisor;

pub use orchestrator::RefreshOrchestrator;
pub use refresh_summary::{RefreshSource, RefreshSummary};
pub use supervisor::RefreshSupervisor;
