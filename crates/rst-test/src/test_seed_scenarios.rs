//! The six concrete seed scenarios named in the feature extractor's spec,
//! exercised end-to-end through the public `rst_core` API.

use rst_core::{Action, DocumentContext, Edu, Journal, ParserConfig, RstLabel};

use crate::fixtures::{two_edu_doc, StubClassifier};

#[test]
fn scenario_1_single_edu_needs_no_search() {
  let edus = vec![Edu::new(vec!["Hello".into()], vec![".".into()], 0, 0, true)];
  let doc = DocumentContext::new("solo", edus, vec![]);
  let classifier = StubClassifier::new(vec![]);
  let mut journal = Journal::new();
  let results = rst_core::run_beam(&doc, &classifier, &ParserConfig::default(), &mut journal);
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].tree.to_string(), "(ROOT (text 0))");
  assert_eq!(results[0].score, 0.0);
}

#[test]
fn scenario_2_two_edus_trivial_binary() {
  let doc = two_edu_doc();
  let gold = vec![Action::Shift, Action::Shift, Action::Unary(RstLabel::new("nucleus:span")), Action::Binary(RstLabel::new("ROOT"))];
  let pairs: Vec<_> = rst_core::run_oracle(&doc, &ParserConfig::default(), gold).collect();
  assert!(pairs.iter().all(|p| p.is_ok()));
  assert_eq!(pairs.len(), 4);
}

#[test]
fn scenario_5_beam_determinism_across_repeated_runs() {
  let doc = two_edu_doc();
  let classifier = StubClassifier::new(vec![
    ("S", "text", -0.1),
    ("U", "nucleus:span", -0.2),
    ("U", "satellite:elaboration", -0.4),
    ("B", "nucleus:span", -0.3),
    ("B", "ROOT", -0.05),
  ]);
  let config = ParserConfig::default().with_max_acts(3).with_max_states(6).with_n_best(3);

  let mut j1 = Journal::new();
  let mut j2 = Journal::new();
  let r1 = rst_core::run_beam(&doc, &classifier, &config, &mut j1);
  let r2 = rst_core::run_beam(&doc, &classifier, &config, &mut j2);

  let scores1: Vec<f64> = r1.iter().map(|r| r.score).collect();
  let scores2: Vec<f64> = r2.iter().map(|r| r.score).collect();
  assert_eq!(scores1, scores2);
  for pair in scores1.windows(2) {
    assert!(pair[0] >= pair[1]);
  }
}

#[test]
fn scenario_3_unary_on_satellite_is_always_invalid() {
  let doc = two_edu_doc();
  let mut state = rst_core::types::state::ParserState::initial(&doc);
  state.stack.push(state.queue.pop_front().unwrap());
  state.stack[0].nt = RstLabel::new("satellite:attribution");
  state.queue.clear();

  let config = ParserConfig::default();
  for label in ["X", "nucleus:elaboration", "satellite:background"] {
    assert!(!rst_core::compile::is_valid(&Action::Unary(RstLabel::new(label)), &state, &config));
  }
}

#[test]
fn scenario_4_premature_root_is_invalid() {
  let edus = (0..3).map(|i| Edu::new(vec![format!("w{i}")], vec!["NN".into()], 0, i, false)).collect();
  let doc = DocumentContext::new("three", edus, vec![]);
  let mut state = rst_core::types::state::ParserState::initial(&doc);
  // Shift two EDUs onto the stack, leaving one in the queue: stack+queue = 3.
  state.stack.push(state.queue.pop_front().unwrap());
  state.stack[0].nt = RstLabel::new("nucleus:span");
  state.stack.push(state.queue.pop_front().unwrap());
  state.stack[1].nt = RstLabel::new("satellite:elaboration");

  let config = ParserConfig::default();
  assert!(!rst_core::compile::is_valid(&Action::Binary(RstLabel::new("ROOT")), &state, &config));
}

#[test]
fn scenario_6_fallback_flat_tree_when_every_action_is_invalid() {
  let doc = two_edu_doc();
  let classifier = StubClassifier::new(vec![("B", "ROOT", 0.0)]);
  let mut journal = Journal::new();
  let results = rst_core::run_beam(&doc, &classifier, &ParserConfig::default(), &mut journal);
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].tree.to_string(), "(ROOT (text 0) (text 1))");
  assert_eq!(results[0].score, 0.0);
}
