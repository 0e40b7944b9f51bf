use rst_core::{Action, ParserConfig, RstLabel};

use crate::fixtures::two_edu_doc;

#[test]
fn oracle_replay_faithfully_emits_every_gold_step_and_completes() {
  let doc = two_edu_doc();
  let config = ParserConfig::default();
  let gold = vec![Action::Shift, Action::Shift, Action::Unary(RstLabel::new("nucleus:span")), Action::Binary(RstLabel::new("ROOT"))];

  let pairs: Vec<_> = rst_core::run_oracle(&doc, &config, gold).collect();
  assert_eq!(pairs.len(), 4);
  assert!(pairs.iter().all(|p| p.is_ok()));

  let last = pairs.last().unwrap().as_ref().unwrap();
  assert_eq!(last.0.type_code, "B");
  assert_eq!(last.0.label, "ROOT");
  // the feature bag for the final step should at least describe the
  // nonterminal conjunction of the two stack items being reduced.
  assert!(last.1.len() > 0);
}

#[test]
fn oracle_replay_stops_with_invalid_gold_action_error() {
  let doc = two_edu_doc();
  let config = ParserConfig::default();
  // ROOT is unreachable before anything has been shifted.
  let gold = vec![Action::Binary(RstLabel::new("ROOT"))];

  let pairs: Vec<_> = rst_core::run_oracle(&doc, &config, gold).collect();
  assert_eq!(pairs.len(), 1);
  assert!(matches!(pairs[0], Err(rst_core::RstError::InvalidGoldAction { .. })));
}
