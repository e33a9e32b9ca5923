use thiserror::Error;

/// Fatal failures of a single resolution call.
///
/// Non-fatal rejections (a stage change that would leave [-6, 6], a persistent
/// condition applied over an existing one) are reported as `bool` by the
/// mutating call instead and leave state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A non-empty outcome set whose probabilities do not sum to 1.0.
    /// Never silently renormalized; a bad sum means a bad move definition.
    #[error("outcome probabilities sum to {sum}, expected 1.0")]
    InvalidDistribution { sum: f64 },

    /// A chance-gated effect with a chance outside (0.0, 1.0].
    #[error("chance {0} is outside (0.0, 1.0]")]
    ChanceOutOfRange(f64),

    /// A move resolved against a state it does not support.
    #[error("precondition failed: {0}")]
    Precondition(&'static str),
}
