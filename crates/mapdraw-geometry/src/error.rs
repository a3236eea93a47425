use mapdraw_model::Tool;
use thiserror::Error;

/// Failure to build a candidate from collected points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Not enough points for the tool yet. Callers discard this silently.
    #[error("{tool} needs at least {required} points, got {got}")]
    Incomplete {
        tool: Tool,
        required: usize,
        got: usize,
    },
}
