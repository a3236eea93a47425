use std::path::PathBuf;

use mapdraw_cli::script::ReplayReport;
use mapdraw_model::{CommittedShape, Limits, Tool};

/// Everything the summary needs after a replay.
#[derive(Debug)]
pub struct ReplayResult {
    pub script: PathBuf,
    pub report: ReplayReport,
    /// Store contents after the last event, in commit order.
    pub shapes: Vec<CommittedShape>,
    /// Committed shapes per tool, in `Tool::ALL` order.
    pub counts: [(Tool, usize); 4],
    pub limits: Limits,
    pub export: Option<PathBuf>,
}
