use crate::types::{edu::Edu, tree::SyntaxTree};

/// Read-only context shared by every state in a single document's beam
/// search: the EDU sequence and the per-sentence syntax trees it was
/// segmented from.
#[derive(Debug, Clone)]
pub struct DocumentContext {
  pub id: String,
  pub edus: Vec<Edu>,
  pub syntax_trees: Vec<SyntaxTree>,
}

impl DocumentContext {
  pub fn new(id: impl Into<String>, edus: Vec<Edu>, syntax_trees: Vec<SyntaxTree>) -> Self {
    Self { id: id.into(), edus, syntax_trees }
  }

  pub fn len(&self) -> usize {
    self.edus.len()
  }

  pub fn is_empty(&self) -> bool {
    self.edus.is_empty()
  }

  /// `edu_start_indices[i] = (sentence_idx, token_idx_within_sentence, edu_idx)`.
  pub fn edu_start_index(&self, edu_idx: usize) -> (usize, usize, usize) {
    let edu = &self.edus[edu_idx];
    (edu.sentence_idx, edu.start_token_idx, edu_idx)
  }

  pub fn edu_starts_paragraph(&self, edu_idx: usize) -> bool {
    self.edus[edu_idx].starts_paragraph
  }

  pub fn syntax_tree_for_edu(&self, edu_idx: usize) -> &SyntaxTree {
    &self.syntax_trees[self.edus[edu_idx].sentence_idx]
  }
}
