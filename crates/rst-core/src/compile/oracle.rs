//! The training oracle driver: single-state greedy replay of a supplied
//! gold action sequence, yielding `(label, features)` pairs suitable for
//! training the external classifier.

use crate::compile::{apply::apply, features, features::FeatureBag, validity::is_valid};
use crate::types::{action::Action, classifier::ActionLabel, config::ParserConfig, document::DocumentContext, error::RstError, state::ParserState};
use crate::types::error::RstResult;

/// Drives a single state through a fixed `gold` action sequence, emitting
/// one `(label, features)` pair per consumed action (minus suppressed
/// repeated-unary steps). Yields an `Err` and then ends the moment the
/// gold sequence turns out to be invalid or runs out early; neither case
/// panics.
pub struct OracleDriver<'a> {
  doc: &'a DocumentContext,
  config: &'a ParserConfig,
  gold: std::vec::IntoIter<Action>,
  state: Option<ParserState>,
  consumed: usize,
  done: bool,
}

impl<'a> OracleDriver<'a> {
  pub fn new(doc: &'a DocumentContext, config: &'a ParserConfig, gold: Vec<Action>) -> Self {
    Self { doc, config, gold: gold.into_iter(), state: Some(ParserState::initial(doc)), consumed: 0, done: false }
  }
}

/// Builds an oracle driver for `doc` replaying `gold`.
pub fn run<'a>(doc: &'a DocumentContext, config: &'a ParserConfig, gold: Vec<Action>) -> OracleDriver<'a> {
  OracleDriver::new(doc, config, gold)
}

impl<'a> Iterator for OracleDriver<'a> {
  type Item = RstResult<(ActionLabel, FeatureBag)>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    if self.state.as_ref().expect("state always present while not done").is_complete() {
      self.done = true;
      return None;
    }

    let action = match self.gold.next() {
      Some(a) => a,
      None => {
        self.done = true;
        return Some(Err(RstError::ExhaustedGoldActions { consumed: self.consumed }));
      }
    };

    let state_ref = self.state.as_ref().expect("state always present while not done");
    if !is_valid(&action, state_ref, self.config) {
      self.done = true;
      return Some(Err(RstError::InvalidGoldAction {
        action: action.clone(),
        step: self.consumed,
        stack_len: state_ref.stack.len(),
        queue_len: state_ref.queue.len(),
      }));
    }

    let suppress = matches!(&action, Action::Unary(_)) && action == state_ref.prevact;
    let feats = features::extract(state_ref, self.doc);

    let current = self.state.take().expect("state always present while not done");
    match apply(action.clone(), current) {
      Ok(next_state) => self.state = Some(next_state),
      Err(err) => {
        self.done = true;
        return Some(Err(err));
      }
    }
    self.consumed += 1;

    if suppress {
      self.next()
    } else {
      Some(Ok((action_to_label(&action), feats)))
    }
  }
}

fn action_to_label(action: &Action) -> ActionLabel {
  ActionLabel { type_code: action.type_code(), label: action.label().to_string() }
}
