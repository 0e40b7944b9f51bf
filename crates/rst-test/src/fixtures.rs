use rst_core::compile::FeatureBag;
use rst_core::types::classifier::ActionLabel;
use rst_core::{Classifier, DocumentContext, Edu, SyntaxTree};

/// A feature-blind classifier driven purely by a fixed label/score table,
/// for exercising the beam search and oracle driver without a trained
/// model.
pub struct StubClassifier {
  labels: Vec<ActionLabel>,
  log_probs: Vec<f64>,
}

impl StubClassifier {
  pub fn new(entries: Vec<(&str, &str, f64)>) -> Self {
    let mut labels = Vec::with_capacity(entries.len());
    let mut log_probs = Vec::with_capacity(entries.len());
    for (type_code, label, log_p) in entries {
      let type_code = match type_code {
        "S" => "S",
        "U" => "U",
        "B" => "B",
        other => panic!("unknown action type code {other:?}"),
      };
      labels.push(ActionLabel { type_code, label: label.to_string() });
      log_probs.push(log_p);
    }
    Self { labels, log_probs }
  }
}

impl Classifier for StubClassifier {
  fn action_labels(&self) -> &[ActionLabel] {
    &self.labels
  }

  fn predict(&self, _features: &FeatureBag) -> Vec<f64> {
    self.log_probs.iter().map(|lp| lp.exp()).collect()
  }
}

/// A two-sentence, four-EDU document: "The dog barked." / "It was loud."
pub fn four_edu_doc() -> DocumentContext {
  let edus = vec![
    Edu::new(vec!["The".into(), "dog".into()], vec!["DT".into(), "NN".into()], 0, 0, true),
    Edu::new(vec!["barked".into()], vec!["VBD".into()], 0, 2, false),
    Edu::new(vec!["It".into()], vec!["PRP".into()], 1, 0, true),
    Edu::new(vec!["was".into(), "loud".into()], vec!["VBD".into(), "JJ".into()], 1, 1, false),
  ];
  let trees = vec![
    SyntaxTree::from_bracketed("(S (NP (DT The) (NN dog)) (VP (VBD barked)))").unwrap(),
    SyntaxTree::from_bracketed("(S (NP (PRP It)) (VP (VBD was) (ADJP (JJ loud))))").unwrap(),
  ];
  DocumentContext::new("four-edu", edus, trees)
}

/// A one-sentence, two-EDU document: "Hello . world ."
pub fn two_edu_doc() -> DocumentContext {
  let edus = vec![Edu::new(vec!["Hello".into()], vec!["UH".into()], 0, 0, true), Edu::new(vec!["world".into()], vec!["NN".into()], 0, 1, false)];
  let tree = SyntaxTree::from_bracketed("(S (UH Hello) (NN world))").unwrap();
  DocumentContext::new("two-edu", edus, vec![tree])
}
