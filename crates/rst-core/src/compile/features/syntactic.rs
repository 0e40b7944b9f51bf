//! The syntactic half of feature extraction: locating the constituent-tree
//! node that supplies an EDU's lexical head, and checking syntactic
//! dominance between two such nodes.

use crate::types::{document::DocumentContext, tree::NodeId};

/// A syntax-tree node identified by (sentence index, node id within that
/// sentence's tree).
pub type HeadNodeRef = (usize, NodeId);

/// Finds the EDU head syntactic node for the EDU at `head_idx`. Returns
/// `None` for the left/right wall sentinels (`head_idx = None`) and for
/// EDUs whose span is empty or out of range; an all-punctuation span still
/// resolves to a head node, since punctuation-only spans retain every
/// preterminal as a candidate.
pub fn find_edu_head_node(doc: &DocumentContext, head_idx: Option<usize>) -> Option<HeadNodeRef> {
  let h = head_idx?;
  let (sentence_idx, start_tok, _) = doc.edu_start_index(h);
  let tree = &doc.syntax_trees[sentence_idx];
  let end_tok = start_tok + doc.edus[h].words.len();

  let preterminals = tree.preterminals();
  if start_tok >= preterminals.len() || end_tok > preterminals.len() || start_tok >= end_tok {
    return None;
  }
  let span = &preterminals[start_tok..end_tok];

  let any_letter = span.iter().any(|&id| tree.label(id).chars().any(|c| c.is_ascii_alphabetic()));
  let candidates: Vec<NodeId> = if any_letter {
    span.iter().copied().filter(|&id| tree.label(id).chars().any(|c| c.is_ascii_alphabetic())).collect()
  } else {
    span.to_vec()
  };
  if candidates.is_empty() {
    return None;
  }

  let mut best: Option<(NodeId, usize)> = None;
  for id in candidates {
    let maximal = tree.find_maximal_head_node(id);
    let depth = tree.treeposition(maximal).len();
    let better = match best {
      None => true,
      Some((_, best_depth)) => depth < best_depth,
    };
    if better {
      best = Some((maximal, depth));
    }
  }
  best.map(|(id, _)| (sentence_idx, id))
}

/// True iff `ancestor` and `descendant` are in the same sentence's syntax
/// tree and `ancestor` is a strict ancestor of `descendant`.
pub fn dominates(doc: &DocumentContext, ancestor: HeadNodeRef, descendant: HeadNodeRef) -> bool {
  let (sent_a, node_a) = ancestor;
  let (sent_b, node_b) = descendant;
  if sent_a != sent_b {
    return false;
  }
  let tree = &doc.syntax_trees[sent_a];
  let tp_a = tree.treeposition(node_a);
  let tp_b = tree.treeposition(node_b);
  if tp_a.len() >= tp_b.len() {
    return false;
  }
  tp_b[..tp_a.len()] == tp_a[..]
}
