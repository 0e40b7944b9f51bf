//! The feature extractor: a deterministic map from a parser state plus
//! document context to a multiset of string features.

pub mod syntactic;

use indexmap::IndexMap;

use crate::types::{document::DocumentContext, node::TreeNode, state::ParserState};
use syntactic::{dominates, find_edu_head_node, HeadNodeRef};

/// A counted multiset of feature names, iteration-ordered by first
/// insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureBag(IndexMap<String, u32>);

impl FeatureBag {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, feature: impl Into<String>) {
    *self.0.entry(feature.into()).or_insert(0) += 1;
  }

  pub fn count(&self, feature: &str) -> u32 {
    self.0.get(feature).copied().unwrap_or(0)
  }

  pub fn contains(&self, feature: &str) -> bool {
    self.0.contains_key(feature)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
    self.0.iter().map(|(k, v)| (k.as_str(), *v))
  }
}

/// Extracts the feature bag for `state` in the context of `doc`.
pub fn extract(state: &ParserState, doc: &DocumentContext) -> FeatureBag {
  let mut feats = FeatureBag::new();

  let s0 = stack_item(state, 0);
  let s1 = stack_item(state, 1);
  let s2 = stack_item(state, 2);
  let q0 = queue_front(state);

  // 1. Previous-action feature.
  feats.insert(format!("PREV:{}:{}", state.prevact.type_code(), state.prevact.label()));

  // 2. Stack nonterminal labels and conjunctions.
  feats.insert(format!("S0nt:{}", s0.nt));
  feats.insert(format!("S1nt:{}", s1.nt));
  feats.insert(format!("S2nt:{}", s2.nt));
  feats.insert(format!("S0nt:{}^S1nt:{}", s0.nt, s1.nt));
  feats.insert(format!("S1nt:{}^S2nt:{}", s1.nt, s2.nt));
  feats.insert(format!("S0nt:{}^S2nt:{}", s0.nt, s2.nt));
  feats.insert(format!("S0nt:{}^S1nt:{}^S2nt:{}", s0.nt, s1.nt, s2.nt));

  // 3. Immediate child nonterminals of non-leaf stack items.
  child_nt_features(&mut feats, "S0", &s0);
  child_nt_features(&mut feats, "S1", &s1);
  child_nt_features(&mut feats, "S2", &s2);

  // 4. Head-EDU lexical features for S0, S1, Q0.
  word_and_pos_feats(&mut feats, "S0", &s0.head, &s0.hpos);
  word_and_pos_feats(&mut feats, "S1", &s1.head, &s1.hpos);
  word_and_pos_feats(&mut feats, "Q0", &q0.head, &q0.hpos);

  // Q0,S0,S1,S2 in that order, filtered to items with a known head EDU.
  let labelled_idx: Vec<(&str, usize)> =
    [("Q0", q0.head_idx), ("S0", s0.head_idx), ("S1", s1.head_idx), ("S2", s2.head_idx)].into_iter().filter_map(|(l, idx)| idx.map(|i| (l, i))).collect();

  // 5. EDU-distance features.
  for i in 0..labelled_idx.len() {
    for j in (i + 1)..labelled_idx.len() {
      let (label_a, idx_a) = labelled_idx[i];
      let (label_b, idx_b) = labelled_idx[j];
      let dist = idx_a.abs_diff(idx_b);
      for k in 1..=4u32 {
        if dist as u32 > k {
          feats.insert(format!("edu_dist_{label_a}{label_b}>{k}"));
        }
      }
    }
  }

  // 6. Same-sentence features.
  for i in 0..labelled_idx.len() {
    for j in (i + 1)..labelled_idx.len() {
      let (label_a, idx_a) = labelled_idx[i];
      let (label_b, idx_b) = labelled_idx[j];
      if doc.edu_start_index(idx_a).0 == doc.edu_start_index(idx_b).0 {
        feats.insert(format!("same_sentence_{label_a}{label_b}"));
      }
    }
  }

  // 7/8. Syntactic head-node features and dominance.
  let head_s0 = find_edu_head_node(doc, s0.head_idx);
  let head_s1 = find_edu_head_node(doc, s1.head_idx);
  let head_s2 = find_edu_head_node(doc, s2.head_idx);
  let head_q0 = find_edu_head_node(doc, q0.head_idx);

  // Computed for all four stack/queue positions above, but deliberately
  // not emitted for S2: only S0/S1/Q0 get lexical head-node features.
  emit_head_node_feats(&mut feats, doc, "S0", head_s0);
  emit_head_node_feats(&mut feats, doc, "S1", head_s1);
  emit_head_node_feats(&mut feats, doc, "Q0", head_q0);

  let labelled_nodes: [(&str, Option<HeadNodeRef>); 4] = [("Q0", head_q0), ("S0", head_s0), ("S1", head_s1), ("S2", head_s2)];
  for &(label_x, node_x) in &labelled_nodes {
    for &(label_y, node_y) in &labelled_nodes {
      if label_x == label_y {
        continue;
      }
      if let (Some(x), Some(y)) = (node_x, node_y) {
        if dominates(doc, x, y) {
          feats.insert(format!("syn_dominates_{label_x}{label_y}"));
        }
      }
    }
  }

  // 9. Paragraph-start features.
  for (prefix, node) in [("s0", &s0), ("s1", &s1), ("s2", &s2), ("q0", &q0)] {
    if let Some(idx) = node.start_idx {
      if doc.edu_starts_paragraph(idx) {
        feats.insert(format!("{prefix}_starts_paragraph"));
      }
    }
  }

  feats
}

fn stack_item(state: &ParserState, from_top: usize) -> TreeNode {
  let len = state.stack.len();
  if from_top < len {
    state.stack[len - 1 - from_top].clone()
  } else {
    TreeNode::left_wall()
  }
}

fn queue_front(state: &ParserState) -> TreeNode {
  state.queue.front().cloned().unwrap_or_else(TreeNode::right_wall)
}

fn child_nt_features(feats: &mut FeatureBag, prefix: &str, item: &TreeNode) {
  let Some(tree) = &item.tree else { return };
  if tree.label() == "text" {
    return;
  }
  for child in tree.children() {
    feats.insert(format!("{prefix}childnt:{}", child.label()));
  }
}

fn word_and_pos_feats(feats: &mut FeatureBag, prefix: &str, words: &[String], pos_tags: &[String]) {
  if words == ["LEFTWALL"] || words == ["RIGHTWALL"] {
    return;
  }
  feats.insert(format!("{prefix}w:{}:::0", words[0]));
  feats.insert(format!("{prefix}p:{}:::0", pos_tags[0]));
  feats.insert(format!("{prefix}w:{}:::-1", words.last().unwrap()));
  feats.insert(format!("{prefix}p:{}:::-1", pos_tags.last().unwrap()));
  feats.insert(format!("{prefix}w:{}:::1", words.get(1).map(String::as_str).unwrap_or("")));
  feats.insert(format!("{prefix}p:{}:::1", pos_tags.get(1).map(String::as_str).unwrap_or("")));

  for w in words {
    feats.insert(format!("{prefix}w:{w}"));
  }
  for p in pos_tags {
    feats.insert(format!("{prefix}p:{p}"));
  }
}

fn emit_head_node_feats(feats: &mut FeatureBag, doc: &DocumentContext, prefix: &str, node: Option<HeadNodeRef>) {
  let Some((sentence_idx, node_id)) = node else { return };
  let tree = &doc.syntax_trees[sentence_idx];
  feats.insert(format!("{prefix}headnt:{}", tree.label(node_id)));
  feats.insert(format!("{prefix}headw:{}", tree.head_word(node_id)));
  feats.insert(format!("{prefix}headp:{}", tree.head_pos(node_id)));
}
