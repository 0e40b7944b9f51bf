//! [`TreeNode`]: a stack/queue item, expressed as a closed record with
//! explicit optional fields rather than an open-ended dictionary.

use std::rc::Rc;

use crate::types::{action::RstLabel, discourse_tree::DiscourseTree, edu::Edu};

pub const LEFTWALL: &str = "LEFTWALL";
pub const RIGHTWALL: &str = "RIGHTWALL";

/// A subtree item living on the parser stack or queue.
#[derive(Debug, Clone)]
pub struct TreeNode {
  pub nt: RstLabel,
  /// `None` only for the `LEFTWALL`/`RIGHTWALL` sentinels.
  pub tree: Option<Rc<DiscourseTree>>,
  pub head: Vec<String>,
  pub hpos: Vec<String>,
  pub head_idx: Option<usize>,
  pub start_idx: Option<usize>,
  pub end_idx: Option<usize>,
}

impl TreeNode {
  /// A leaf stack/queue item for EDU `edu_index`.
  pub fn leaf(edu_index: usize, edu: &Edu) -> Self {
    Self {
      nt: RstLabel::new("text"),
      tree: Some(DiscourseTree::leaf(edu_index)),
      head: edu.lowercased_words(),
      hpos: edu.pos_tags.clone(),
      head_idx: Some(edu_index),
      start_idx: Some(edu_index),
      end_idx: Some(edu_index),
    }
  }

  /// The sentinel substituted for `S0`/`S1`/`S2` when the stack doesn't
  /// have that many items.
  pub fn left_wall() -> Self {
    Self::wall(LEFTWALL)
  }

  /// The sentinel substituted for `Q0` when the queue is empty.
  pub fn right_wall() -> Self {
    Self::wall(RIGHTWALL)
  }

  fn wall(word: &str) -> Self {
    Self { nt: RstLabel::new("TOP"), tree: None, head: vec![word.to_string()], hpos: vec![word.to_string()], head_idx: None, start_idx: None, end_idx: None }
  }

  pub fn is_wall(&self) -> bool {
    self.tree.is_none()
  }

  /// True for leaf EDU items (`nt == "text"`).
  pub fn is_leaf(&self) -> bool {
    self.nt.is_text()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn leaf_node_has_matching_span() {
    let edu = Edu::new(vec!["Hello".into()], vec![".".into()], 0, 0, true);
    let node = TreeNode::leaf(3, &edu);
    assert_eq!(node.start_idx, Some(3));
    assert_eq!(node.end_idx, Some(3));
    assert_eq!(node.head_idx, Some(3));
    assert_eq!(node.head, vec!["hello".to_string()]);
  }

  #[test]
  fn wall_nodes_have_no_tree_or_indices() {
    let w = TreeNode::left_wall();
    assert!(w.is_wall());
    assert_eq!(w.head_idx, None);
    assert_eq!(w.nt.as_str(), "TOP");
  }
}
