//! Engine error taxonomy.
//!
//! These are programmer-error guards, not user-recoverable conditions:
//! correct host wiring never produces them. Expected absences (no shape
//! under an id, nothing selected) are `Option`s, and external-resource
//! failures (bad image input) are logged no-ops — neither surfaces here.

/// Faults raised by the interaction engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A session was started while another was still active.
    #[error("a session is already in progress; complete it first")]
    SessionInProgress,
    /// A session could not capture its target shape.
    #[error("no selected or captured shape for this interaction")]
    NoActiveShape,
    /// A handle drag referenced a handle the captured shape does not have.
    #[error("the captured shape has no such endpoint handle")]
    UnknownHandle,
    /// A bounds resize was started on a shape edited through handles.
    #[error("shape geometry is edited through handles, not bounds")]
    NotTransformable,
    /// A document failed to hydrate or serialize.
    #[error("malformed document: {0}")]
    Document(#[from] serde_json::Error),
}
