use rst_core::{Journal, ParserConfig};

use crate::fixtures::{four_edu_doc, two_edu_doc, StubClassifier};

#[test]
fn beam_search_covers_every_edu_exactly_once_in_order() {
  let doc = four_edu_doc();
  let classifier = StubClassifier::new(vec![
    ("S", "text", 0.0),
    ("U", "nucleus:span", -0.3),
    ("U", "satellite:elaboration", -0.5),
    ("B", "nucleus:span", -0.2),
    ("B", "satellite:elaboration", -0.4),
    ("B", "ROOT", -0.1),
  ]);
  let config = ParserConfig::default().with_max_acts(3).with_max_states(6).with_n_best(2);
  let mut journal = Journal::new();
  let results = rst_core::run_beam(&doc, &classifier, &config, &mut journal);

  assert!(!results.is_empty());
  for result in &results {
    assert_eq!(result.tree.leaf_indices(), vec![0, 1, 2, 3]);
  }
  let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
  for pair in scores.windows(2) {
    assert!(pair[0] >= pair[1]);
  }
}

#[test]
fn fallback_tree_used_when_classifier_only_proposes_invalid_actions() {
  let doc = two_edu_doc();
  // B:ROOT on an empty stack is always invalid, so every step is filtered.
  let classifier = StubClassifier::new(vec![("B", "ROOT", 0.0)]);
  let mut journal = Journal::new();
  let results = rst_core::run_beam(&doc, &classifier, &ParserConfig::default(), &mut journal);

  assert_eq!(results.len(), 1);
  assert_eq!(results[0].tree.to_string(), "(ROOT (text 0) (text 1))");
  assert!(journal.warnings().count() >= 1);
}

#[test]
fn single_edu_document_needs_no_search() {
  let edus = vec![rst_core::Edu::new(vec!["Hi".into()], vec!["UH".into()], 0, 0, true)];
  let doc = rst_core::DocumentContext::new("solo", edus, vec![]);
  let classifier = StubClassifier::new(vec![]);
  let mut journal = Journal::new();
  let results = rst_core::run_beam(&doc, &classifier, &ParserConfig::default(), &mut journal);
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].tree.to_string(), "(ROOT (text 0))");
  assert_eq!(results[0].score, 0.0);
}
