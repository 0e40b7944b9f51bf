use std::fmt::{self, Display};

/// An RST nuclearity:relation label, or one of the two special labels
/// `text` (leaf EDU) and `ROOT`.
///
/// Labels are compared and hashed by value; at the document sizes this
/// parser targets, interning buys nothing over a plain `String`, so this
/// newtype exists only to keep "this is a label, not arbitrary text" as a
/// distinct type rather than passing bare `String`s around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RstLabel(pub String);

impl RstLabel {
  pub fn new(s: impl Into<String>) -> Self {
    Self(s.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_text(&self) -> bool {
    self.0 == "text"
  }

  pub fn is_root(&self) -> bool {
    self.0 == "ROOT"
  }

  pub fn is_partial(&self) -> bool {
    self.0.ends_with('*')
  }

  pub fn is_nucleus(&self) -> bool {
    self.0.starts_with("nucleus")
  }

  /// `nucleus:` specifically (used for left-child head percolation, which
  /// is slightly stricter than the general `is_nucleus` used elsewhere).
  pub fn is_nucleus_colon(&self) -> bool {
    self.0.starts_with("nucleus:")
  }

  pub fn is_satellite(&self) -> bool {
    self.0.starts_with("satellite")
  }

  /// Strip a trailing `*`, if present.
  pub fn unstarred(&self) -> &str {
    self.0.strip_suffix('*').unwrap_or(&self.0)
  }
}

impl Display for RstLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for RstLabel {
  fn from(s: &str) -> Self {
    Self::new(s)
  }
}

impl From<String> for RstLabel {
  fn from(s: String) -> Self {
    Self::new(s)
  }
}

/// The three-member action algebra a transition state can take.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
  Shift,
  Unary(RstLabel),
  Binary(RstLabel),
}

impl Action {
  /// The single-letter type code used in the `"<type>:<label>"` wire
  /// format (`S`, `U`, `B`).
  pub fn type_code(&self) -> &'static str {
    match self {
      Action::Shift => "S",
      Action::Unary(_) => "U",
      Action::Binary(_) => "B",
    }
  }

  pub fn label(&self) -> &str {
    match self {
      Action::Shift => "text",
      Action::Unary(l) | Action::Binary(l) => l.as_str(),
    }
  }

  /// The initial sentinel `prevact` a fresh `ParserState` starts with.
  pub fn initial_sentinel() -> Self {
    Action::Shift
  }
}

impl Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.type_code(), self.label())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_matches_wire_format() {
    assert_eq!(Action::Shift.to_string(), "S:text");
    assert_eq!(Action::Unary(RstLabel::new("nucleus:elaboration")).to_string(), "U:nucleus:elaboration");
    assert_eq!(Action::Binary(RstLabel::new("ROOT")).to_string(), "B:ROOT");
  }

  #[test]
  fn label_predicates() {
    let partial = RstLabel::new("nucleus:span*");
    assert!(partial.is_partial());
    assert!(partial.is_nucleus());
    assert_eq!(partial.unstarred(), "nucleus:span");

    let sat = RstLabel::new("satellite:attribution");
    assert!(sat.is_satellite());
    assert!(!sat.is_nucleus());
  }
}
