//! Action application. Callers must only invoke `apply` on actions that
//! passed [`crate::compile::validity::is_valid`] against the same state;
//! this module itself only guards against the one case that's a genuine
//! programmer error rather than a validity gap (`InvalidReduce`).

use crate::types::{
  action::{Action, RstLabel},
  discourse_tree::DiscourseTree,
  error::{RstError, RstResult},
  node::TreeNode,
  state::ParserState,
};

/// Applies `action` to `state`, returning the successor state. `state` is
/// consumed by value so callers decide explicitly when to clone (the beam
/// driver clones before calling this for every candidate action).
pub fn apply(action: Action, mut state: ParserState) -> RstResult<ParserState> {
  state.ucnt = if matches!(action, Action::Unary(_)) { state.ucnt + 1 } else { 0 };

  match &action {
    Action::Shift => {
      let item = state.queue.pop_front().expect("validity guarantees a non-empty queue");
      state.stack.push(item);
    }
    Action::Unary(label) => {
      let child = state.stack.pop().expect("validity guarantees a non-empty stack");
      if child.nt.is_satellite() {
        return Err(RstError::InvalidReduce { lc_nt: child.nt.to_string(), rc_nt: String::new() });
      }
      state.stack.push(unary_node(label.clone(), child));
    }
    Action::Binary(label) => {
      let rc = state.stack.pop().expect("validity guarantees >= 2 stack items");
      let lc = state.stack.pop().expect("validity guarantees >= 2 stack items");
      state.stack.push(binary_node(label.clone(), lc, rc)?);
    }
  }

  state.nsteps += 1;
  state.prevact = action;
  Ok(state)
}

fn unary_node(label: RstLabel, child: TreeNode) -> TreeNode {
  let tree = child.tree.as_ref().map(|t| DiscourseTree::unary(label.clone(), t.clone()));
  TreeNode { nt: label, tree, head: child.head, hpos: child.hpos, head_idx: child.head_idx, start_idx: child.start_idx, end_idx: child.end_idx }
}

fn binary_node(label: RstLabel, lc: TreeNode, rc: TreeNode) -> RstResult<TreeNode> {
  // Left nucleus wins when both children are nuclei.
  let left_is_nucleus = lc.nt.is_nucleus_colon() || lc.nt.is_partial() || label.is_root();
  let right_is_nucleus = rc.nt.is_nucleus() || rc.nt.is_partial();

  let (head, hpos, head_idx) = if left_is_nucleus {
    (lc.head.clone(), lc.hpos.clone(), lc.head_idx)
  } else if right_is_nucleus {
    (rc.head.clone(), rc.hpos.clone(), rc.head_idx)
  } else {
    return Err(RstError::InvalidReduce { lc_nt: lc.nt.to_string(), rc_nt: rc.nt.to_string() });
  };

  let tree = match (&lc.tree, &rc.tree) {
    (Some(l), Some(r)) => Some(DiscourseTree::binary(label.clone(), l.clone(), r.clone())),
    _ => None,
  };

  Ok(TreeNode { nt: label, tree, head, hpos, head_idx, start_idx: lc.start_idx, end_idx: rc.end_idx })
}
