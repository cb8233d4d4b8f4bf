use thiserror::Error;

use crate::{options::TraceId, render::RenderHandle};

/// Errors reported by [`Scene`](crate::Scene) bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("no trace with id {0}")]
    UnknownTrace(TraceId),
    #[error("render handle {0} does not belong to any trace")]
    UnknownHandle(RenderHandle),
    #[error("trace {0} is already in the scene")]
    DuplicateTrace(TraceId),
    #[error("point id {point_id} is out of range for {trace}")]
    PointOutOfRange { trace: TraceId, point_id: usize },
}
