use thiserror::Error;

/// The payload could not be decoded as a JSON object.
///
/// This is the only error the payload parser produces. It covers both
/// malformed JSON and well-formed JSON whose top level is not an object,
/// since the parser contract promises a keyed mapping.
#[derive(Debug, Error)]
#[error("invalid JSON payload: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Errors that can cross the handler boundary on the intake path.
///
/// Every variant is terminal for the single message it occurred on: the
/// dispatcher logs it and moves on, nothing is retried or surfaced to
/// the transport layer.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Any non-parse failure raised while a handler executes.
    #[error("handler failure: {0}")]
    Handler(#[from] anyhow::Error),
}
