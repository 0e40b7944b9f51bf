use std::collections::VecDeque;

use crate::types::{action::Action, document::DocumentContext, node::TreeNode};

/// A single point in the transition-based search: the stack, the
/// remaining queue, and the bookkeeping needed to score and terminate a
/// derivation.
///
/// Subtrees referenced from `stack` items are never mutated once
/// published, so cloning a `ParserState` to expand it during search is
/// cheap: it only clones the `Vec`/`VecDeque` spines, not the
/// `Rc`-shared tree contents.
#[derive(Debug, Clone)]
pub struct ParserState {
  pub stack: Vec<TreeNode>,
  pub queue: VecDeque<TreeNode>,
  pub prevact: Action,
  pub ucnt: u32,
  pub score: f64,
  pub nsteps: usize,
}

impl ParserState {
  /// The initial configuration: empty stack, queue loaded with every EDU
  /// as a leaf item, in document order.
  pub fn initial(doc: &DocumentContext) -> Self {
    let queue = doc.edus.iter().enumerate().map(|(i, edu)| TreeNode::leaf(i, edu)).collect();
    Self { stack: Vec::new(), queue, prevact: Action::initial_sentinel(), ucnt: 0, score: 0.0, nsteps: 0 }
  }

  pub fn stack_top(&self) -> Option<&TreeNode> {
    self.stack.last()
  }

  pub fn stack_top_minus_1(&self) -> Option<&TreeNode> {
    self.stack.len().checked_sub(2).map(|i| &self.stack[i])
  }

  pub fn stack_top_minus_2(&self) -> Option<&TreeNode> {
    self.stack.len().checked_sub(3).map(|i| &self.stack[i])
  }

  pub fn queue_front(&self) -> Option<&TreeNode> {
    self.queue.front()
  }

  /// True iff this state represents a complete derivation: empty queue and
  /// a single `ROOT`-labelled stack item.
  pub fn is_complete(&self) -> bool {
    self.queue.is_empty() && self.stack.len() == 1 && self.stack[0].nt.is_root()
  }
}
