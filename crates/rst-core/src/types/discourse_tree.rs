//! The output RST tree: an immutable, `Rc`-shared phrase-structure tree
//! whose internal nodes carry RST labels and whose leaves reference an
//! EDU by index. Structural sharing across search states relies on these
//! nodes never being mutated once published.

use std::fmt::{self, Display};
use std::rc::Rc;

use crate::types::action::RstLabel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscourseTree {
  /// `(text <edu_index>)`.
  Leaf { edu_index: usize },
  /// An internal node with an RST (or `ROOT`) label and ordered children.
  Node { label: RstLabel, children: Vec<Rc<DiscourseTree>> },
}

impl DiscourseTree {
  pub fn leaf(edu_index: usize) -> Rc<Self> {
    Rc::new(DiscourseTree::Leaf { edu_index })
  }

  pub fn unary(label: RstLabel, child: Rc<DiscourseTree>) -> Rc<Self> {
    Rc::new(DiscourseTree::Node { label, children: vec![child] })
  }

  pub fn binary(label: RstLabel, left: Rc<DiscourseTree>, right: Rc<DiscourseTree>) -> Rc<Self> {
    Rc::new(DiscourseTree::Node { label, children: vec![left, right] })
  }

  pub fn label(&self) -> &str {
    match self {
      DiscourseTree::Leaf { .. } => "text",
      DiscourseTree::Node { label, .. } => label.as_str(),
    }
  }

  pub fn children(&self) -> &[Rc<DiscourseTree>] {
    match self {
      DiscourseTree::Leaf { .. } => &[],
      DiscourseTree::Node { children, .. } => children,
    }
  }

  /// In-order sequence of leaf EDU indices spanned by this subtree.
  pub fn leaf_indices(&self) -> Vec<usize> {
    let mut out = Vec::new();
    self.collect_leaf_indices(&mut out);
    out
  }

  fn collect_leaf_indices(&self, out: &mut Vec<usize>) {
    match self {
      DiscourseTree::Leaf { edu_index } => out.push(*edu_index),
      DiscourseTree::Node { children, .. } => {
        for c in children {
          c.collect_leaf_indices(out);
        }
      }
    }
  }

  /// Collapses every node whose label ends with `*`: the starred node
  /// disappears and its parent inherits its children in place, in order.
  pub fn collapse(self: &Rc<Self>) -> Rc<Self> {
    match self.as_ref() {
      DiscourseTree::Leaf { .. } => self.clone(),
      DiscourseTree::Node { label, children } => {
        let mut new_children = Vec::with_capacity(children.len());
        for child in children {
          let collapsed = child.collapse();
          splice_starred(collapsed, &mut new_children);
        }
        Rc::new(DiscourseTree::Node { label: label.clone(), children: new_children })
      }
    }
  }
}

fn splice_starred(node: Rc<DiscourseTree>, out: &mut Vec<Rc<DiscourseTree>>) {
  match node.as_ref() {
    DiscourseTree::Node { label, children } if label.is_partial() => {
      for c in children {
        out.push(c.clone());
      }
    }
    _ => out.push(node),
  }
}

impl Display for DiscourseTree {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DiscourseTree::Leaf { edu_index } => write!(f, "(text {edu_index})"),
      DiscourseTree::Node { label, children } => {
        write!(f, "({label}")?;
        for c in children {
          write!(f, " {c}")?;
        }
        write!(f, ")")
      }
    }
  }
}
