//! The beam search driver: priority-ordered expansion of parser states
//! under a bounded per-state fan-out and a bounded global beam width,
//! collecting an n-best list of complete derivations.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::compile::{apply::apply, features, validity::is_valid};
use crate::journal::Journal;
use crate::types::{classifier::Classifier, config::ParserConfig, discourse_tree::DiscourseTree, document::DocumentContext, state::ParserState};

/// One complete derivation: its collapsed tree and cumulative log-score.
#[derive(Debug, Clone)]
pub struct ParseResult {
  pub tree: Rc<DiscourseTree>,
  pub score: f64,
}

/// Runs the beam search to completion, with no cancellation surface.
pub fn run(doc: &DocumentContext, classifier: &dyn Classifier, config: &ParserConfig, journal: &mut Journal) -> Vec<ParseResult> {
  run_cancellable(doc, classifier, config, journal, &mut || false)
}

/// Runs the beam search, checking `should_stop` once per state pop. On
/// cancellation, whatever derivations have already been collected (or the
/// fallback tree, if none) are returned.
pub fn run_cancellable(
  doc: &DocumentContext,
  classifier: &dyn Classifier,
  config: &ParserConfig,
  journal: &mut Journal,
  should_stop: &mut dyn FnMut() -> bool,
) -> Vec<ParseResult> {
  if doc.is_empty() {
    return Vec::new();
  }

  if doc.len() == 1 {
    journal.warn(format!("document {:?} has a single EDU; returning a trivial ROOT tree", doc.id));
    let tree = DiscourseTree::unary(crate::types::RstLabel::new("ROOT"), DiscourseTree::leaf(0));
    return vec![ParseResult { tree, score: 0.0 }];
  }

  let mut pool = vec![ParserState::initial(doc)];
  let mut completed: Vec<ParseResult> = Vec::new();

  while !pool.is_empty() {
    pool.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    pool.truncate(config.max_states.max(1));

    if should_stop() {
      break;
    }

    let state = pool.remove(0);

    if state.is_complete() {
      let tree = state.stack[0].tree.clone().expect("ROOT node always carries a tree").collapse();
      completed.push(ParseResult { tree, score: state.score });
      if completed.len() >= config.n_best.max(1) {
        break;
      }
      continue;
    }

    let feats = features::extract(&state, doc);
    let mut scored = classifier.scored_actions(&feats);
    scored.retain(|(action, _)| is_valid(action, &state, config));
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(config.max_acts.max(1));

    for (action, logp) in scored {
      let mut next = state.clone();
      next.score = state.score + logp;
      match apply(action, next) {
        Ok(next) => pool.push(next),
        Err(err) => journal.warn(format!("dropping an unreachable reduction for document {:?}: {err}", doc.id)),
      }
    }
  }

  if completed.is_empty() {
    journal.warn(format!("no complete ROOT derivation found for document {:?}; using the fallback flat tree", doc.id));
    completed.push(ParseResult { tree: fallback_flat_tree(doc), score: 0.0 });
  }

  completed
}

fn fallback_flat_tree(doc: &DocumentContext) -> Rc<DiscourseTree> {
  let leaves: Vec<Rc<DiscourseTree>> = (0..doc.len()).map(DiscourseTree::leaf).collect();
  let mut iter = leaves.into_iter();
  let first = iter.next().expect("non-empty document");
  // ROOT needs at least 2 children conceptually, but a flat fallback is
  // built by folding every EDU in as a sibling under one ROOT node, so we
  // special-case the fold's seed below instead of using `binary`.
  let children: Vec<Rc<DiscourseTree>> = std::iter::once(first).chain(iter).collect();
  Rc::new(DiscourseTree::Node { label: crate::types::RstLabel::new("ROOT"), children })
}
