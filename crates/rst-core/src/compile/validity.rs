//! The action-validity predicate: depends only on the pre-state, which is
//! what makes re-checking an action against the same state before and
//! after some unrelated mutation give the same answer, since nothing here
//! ever looks past `action` and `state`.

use crate::types::{action::Action, config::ParserConfig, state::ParserState};

/// Returns true iff `action` may be applied to `state` under `config`.
pub fn is_valid(action: &Action, state: &ParserState, config: &ParserConfig) -> bool {
  match action {
    Action::Shift => !state.queue.is_empty(),
    Action::Unary(label) => is_valid_unary(label, state, config),
    Action::Binary(label) => is_valid_binary(label, state),
  }
}

fn is_valid_unary(label: &crate::types::RstLabel, state: &ParserState, config: &ParserConfig) -> bool {
  if state.ucnt > config.max_consecutive_unary_reduce {
    return false;
  }
  let Some(top) = state.stack_top() else {
    return false;
  };
  if top.nt.is_partial() {
    return false;
  }
  if top.nt.is_satellite() {
    return false;
  }
  if label.is_satellite() && state.queue.is_empty() && state.stack.len() >= 2 {
    let below = state.stack_top_minus_1().expect("len >= 2");
    if !below.nt.is_nucleus() && !below.nt.is_partial() {
      return false;
    }
  }
  true
}

fn is_valid_binary(label: &crate::types::RstLabel, state: &ParserState) -> bool {
  if state.stack.len() < 2 {
    return false;
  }

  let total_remaining = state.stack.len() + state.queue.len();
  if label.is_root() != (total_remaining == 2) {
    return false;
  }

  let lc = state.stack_top_minus_1().expect("len >= 2");
  let rc = state.stack_top().expect("len >= 2");

  let lc_has_nucleus = lc.nt.is_nucleus() || lc.nt.is_partial();
  let rc_has_nucleus = rc.nt.is_nucleus() || rc.nt.is_partial();
  if !lc_has_nucleus && !rc_has_nucleus {
    return false;
  }

  if lc.nt.is_partial() && label.as_str() != lc.nt.as_str() && label.as_str() != lc.nt.unstarred() {
    return false;
  }
  if rc.nt.is_partial() && label.as_str() != rc.nt.as_str() && label.as_str() != rc.nt.unstarred() {
    return false;
  }

  let label_is_satellite = label.is_satellite();
  let label_is_partial = label.is_partial();
  let next = state.stack_top_minus_2();
  let next_is_nucleus = next.map(|n| n.nt.is_nucleus()).unwrap_or(false);
  let next_is_partial = next.map(|n| n.nt.is_partial()).unwrap_or(false);

  if state.queue.is_empty() && label_is_satellite && !label_is_partial && !next_is_nucleus && !next_is_partial {
    return false;
  }
  if state.queue.is_empty() && next_is_partial && label_is_partial {
    return false;
  }

  true
}

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;

  use super::*;
  use crate::types::{Action, DocumentContext, Edu, ParserState, RstLabel, TreeNode};

  fn doc_with(n: usize) -> DocumentContext {
    let edus = (0..n).map(|i| Edu::new(vec![format!("w{i}")], vec!["NN".into()], 0, i, false)).collect();
    DocumentContext::new("d", edus, vec![])
  }

  #[test]
  fn unary_rejected_on_satellite() {
    let doc = doc_with(1);
    let mut state = ParserState::initial(&doc);
    let edu = &doc.edus[0];
    state.stack.push(TreeNode::leaf(0, edu));
    state.stack[0].nt = RstLabel::new("satellite:attribution");
    state.queue = VecDeque::new();

    let cfg = ParserConfig::default();
    for l in ["X", "nucleus:elaboration", "satellite:background"] {
      assert!(!is_valid(&Action::Unary(RstLabel::new(l)), &state, &cfg), "label {l} should be rejected");
    }
  }

  #[test]
  fn premature_root_is_rejected() {
    let doc = doc_with(3);
    let mut state = ParserState::initial(&doc);
    state.stack.push(TreeNode::leaf(0, &doc.edus[0]));
    state.stack[0].nt = RstLabel::new("nucleus:span");
    state.stack.push(TreeNode::leaf(1, &doc.edus[1]));
    state.stack[1].nt = RstLabel::new("satellite:elaboration");
    // queue still has edu 2 in it, so stack+queue = 3 > 2.
    let cfg = ParserConfig::default();
    assert!(!is_valid(&Action::Binary(RstLabel::new("ROOT")), &state, &cfg));
  }

  #[test]
  fn root_required_exactly_when_derivation_would_complete() {
    let doc = doc_with(2);
    let mut state = ParserState::initial(&doc);
    state.stack.push(TreeNode::leaf(0, &doc.edus[0]));
    state.stack[0].nt = RstLabel::new("nucleus:span");
    state.stack.push(TreeNode::leaf(1, &doc.edus[1]));
    state.stack[1].nt = RstLabel::new("satellite:elaboration");
    state.queue.clear();
    let cfg = ParserConfig::default();
    assert!(is_valid(&Action::Binary(RstLabel::new("ROOT")), &state, &cfg));
    assert!(!is_valid(&Action::Binary(RstLabel::new("nucleus:span")), &state, &cfg));
  }

  #[test]
  fn shift_requires_nonempty_queue() {
    let doc = doc_with(0);
    let state = ParserState::initial(&doc);
    let cfg = ParserConfig::default();
    assert!(!is_valid(&Action::Shift, &state, &cfg));
  }
}
