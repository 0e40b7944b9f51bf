//! # rst_core
//!
//! A shift-reduce, transition-based parser for Rhetorical Structure Theory
//! (RST) discourse trees: parser state, action validity and application,
//! feature extraction, beam search, and the training oracle driver.
//!
//! Scoring candidate actions is delegated to an external [`Classifier`]
//! implementation; this crate only consumes `Score(features) -> distribution`,
//! it never trains one.

pub mod compile;
pub mod journal;
pub mod types;

pub use compile::{run_beam, run_beam_cancellable, run_oracle, FeatureBag, OracleDriver, ParseResult};
pub use journal::Journal;
pub use types::{Action, Classifier, DocumentContext, Edu, ParserConfig, RstError, RstLabel, RstResult, SyntaxTree};

/// A tied-together facade over [`compile::beam`] and [`compile::oracle`]:
/// a loaded classifier plus its configuration, ready to parse documents.
pub struct Parser<'a> {
  classifier: &'a dyn Classifier,
  config: ParserConfig,
}

impl<'a> Parser<'a> {
  pub fn new(classifier: &'a dyn Classifier, config: ParserConfig) -> Self {
    Self { classifier, config }
  }

  /// Runs the beam search against `doc`, returning the n-best complete
  /// derivations and appending any diagnostics to `journal`.
  pub fn parse(&self, doc: &DocumentContext, journal: &mut Journal) -> Vec<ParseResult> {
    run_beam(doc, self.classifier, &self.config, journal)
  }

  /// As [`Parser::parse`], but checks `should_stop` once per state pop.
  pub fn parse_cancellable(&self, doc: &DocumentContext, journal: &mut Journal, should_stop: &mut dyn FnMut() -> bool) -> Vec<ParseResult> {
    run_beam_cancellable(doc, self.classifier, &self.config, journal, should_stop)
  }

  /// Replays `gold` against `doc`, yielding training pairs. Does not touch
  /// the loaded classifier; the oracle only needs [`ParserConfig`].
  pub fn run_oracle(&self, doc: &'a DocumentContext, gold: Vec<Action>) -> OracleDriver<'a> {
    run_oracle(doc, &self.config, gold)
  }
}
