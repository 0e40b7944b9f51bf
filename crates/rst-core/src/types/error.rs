use crate::types::action::Action;

/// Every error a parsing or oracle-replay run can produce.
///
/// Mirrors the taxonomy the driver commits to: most variants are
/// recoverable at the document level, `InvalidReduce` is the one that
/// should never actually be reachable if [`crate::compile::validity`] is
/// correct.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RstError {
  #[error("gold action {action:?} is invalid at step {step} (stack={stack_len}, queue={queue_len})")]
  InvalidGoldAction { action: Action, step: usize, stack_len: usize, queue_len: usize },

  #[error("gold action sequence exhausted after {consumed} actions with the tree still incomplete")]
  ExhaustedGoldActions { consumed: usize },

  #[error("invalid reduce: neither child of a binary reduction is a nucleus or partial ({lc_nt} / {rc_nt})")]
  InvalidReduce { lc_nt: String, rc_nt: String },

  #[error("no complete ROOT derivation found; falling back to a flat tree")]
  NoCompleteParse,

  #[error("document has a single EDU; returning a trivial ROOT tree")]
  DegenerateInput,

  #[error("failed to parse bracketed syntax tree: {0}")]
  MalformedSyntaxTree(String),
}

pub type RstResult<T> = Result<T, RstError>;
