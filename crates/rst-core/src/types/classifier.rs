use crate::compile::features::FeatureBag;
use crate::types::action::Action;

/// An action label as reported by a classifier: the canonical
/// `"<type>:<label>"` pair, kept split rather than pre-joined so a
/// `Classifier` impl doesn't need to parse its own output back apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabel {
  pub type_code: &'static str,
  pub label: String,
}

impl ActionLabel {
  pub fn to_action(&self) -> Action {
    match self.type_code {
      "S" => Action::Shift,
      "U" => Action::Unary(self.label.as_str().into()),
      "B" => Action::Binary(self.label.as_str().into()),
      other => panic!("unknown action type code {other:?}"),
    }
  }
}

/// The external collaborator that scores candidate actions from a feature
/// bag. Training the underlying model is out of scope for this crate,
/// which only ever calls `predict`.
pub trait Classifier {
  /// The canonical, fixed-order list of action labels this classifier's
  /// `predict` output is aligned with.
  fn action_labels(&self) -> &[ActionLabel];

  /// Returns a probability distribution aligned 1:1 with
  /// [`Classifier::action_labels`].
  fn predict(&self, features: &FeatureBag) -> Vec<f64>;

  /// Scores every action label the classifier knows about, pairing each
  /// with its natural-log probability, in classifier-label order.
  fn scored_actions(&self, features: &FeatureBag) -> Vec<(Action, f64)> {
    let probs = self.predict(features);
    self
      .action_labels()
      .iter()
      .zip(probs)
      .map(|(label, p)| (label.to_action(), p.max(f64::MIN_POSITIVE).ln()))
      .collect()
  }
}
