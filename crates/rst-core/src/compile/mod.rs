//! The parser's compiled behavior: validity checking, action application,
//! feature extraction, beam search, and oracle replay.

pub mod apply;
pub mod beam;
pub mod features;
pub mod oracle;
pub mod validity;

pub use apply::apply;
pub use beam::{run as run_beam, run_cancellable as run_beam_cancellable, ParseResult};
pub use features::FeatureBag;
pub use oracle::{run as run_oracle, OracleDriver};
pub use validity::is_valid;
