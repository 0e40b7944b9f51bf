//! A parented, lexically-headed phrase-structure tree ("syntax tree"),
//! one instance per sentence in the source document.
//!
//! Head percolation itself is, per the specification, the concern of the
//! upstream constituent parser: a real document arrives with heads already
//! assigned. `from_bracketed` nonetheless ships a simple rightmost-child
//! default rule so the type is self-contained for tests and small demos;
//! callers that already know the head child of each constituent should
//! build the tree with [`SyntaxTreeBuilder`] directly instead.

use crate::types::error::{RstError, RstResult};

pub type NodeId = usize;

#[derive(Debug, Clone)]
struct SyntaxNodeData {
  /// The constituent label (`"NP"`, `"VBD"`, ...).
  label: String,
  parent: Option<NodeId>,
  children: Vec<NodeId>,
  /// `Some(word)` for preterminals (POS-tagged leaves); `None` for phrasal
  /// nodes.
  token: Option<String>,
  /// The preterminal node whose word is this node's lexical head. Equal to
  /// the node's own id for preterminals.
  head_node: NodeId,
}

/// One sentence's headed, parented phrase-structure tree.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
  nodes: Vec<SyntaxNodeData>,
  root: NodeId,
}

impl SyntaxTree {
  pub fn root(&self) -> NodeId {
    self.root
  }

  pub fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.nodes[id].parent
  }

  pub fn children(&self, id: NodeId) -> &[NodeId] {
    &self.nodes[id].children
  }

  pub fn is_preterminal(&self, id: NodeId) -> bool {
    self.nodes[id].token.is_some()
  }

  pub fn label(&self, id: NodeId) -> &str {
    &self.nodes[id].label
  }

  pub fn token(&self, id: NodeId) -> Option<&str> {
    self.nodes[id].token.as_deref()
  }

  /// Lexical head word of the subtree rooted at `id`, lowercased.
  pub fn head_word(&self, id: NodeId) -> String {
    let head = self.nodes[id].head_node;
    self.nodes[head].token.clone().unwrap_or_default().to_lowercase()
  }

  /// POS tag of the lexical head of the subtree rooted at `id`.
  pub fn head_pos(&self, id: NodeId) -> &str {
    let head = self.nodes[id].head_node;
    &self.nodes[head].label
  }

  /// The preterminal (POS-tagged leaf) nodes of the tree, left to right.
  pub fn preterminals(&self) -> Vec<NodeId> {
    let mut out = Vec::new();
    self.collect_preterminals(self.root, &mut out);
    out
  }

  fn collect_preterminals(&self, id: NodeId, out: &mut Vec<NodeId>) {
    if self.nodes[id].token.is_some() {
      out.push(id);
      return;
    }
    for &child in &self.nodes[id].children {
      self.collect_preterminals(child, out);
    }
  }

  /// The child-index path from the root to `id`.
  pub fn treeposition(&self, id: NodeId) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = id;
    while let Some(parent) = self.nodes[current].parent {
      let idx = self.nodes[parent].children.iter().position(|&c| c == current).expect("child indexed in its own parent");
      path.push(idx);
      current = parent;
    }
    path.reverse();
    path
  }

  /// The highest ancestor of `id` (possibly `id` itself) whose lexical
  /// head is still the same preterminal that supplies `id`'s head.
  pub fn find_maximal_head_node(&self, id: NodeId) -> NodeId {
    let head_id = self.nodes[id].head_node;
    let mut current = id;
    while let Some(parent) = self.nodes[current].parent {
      if self.nodes[parent].head_node == head_id {
        current = parent;
      } else {
        break;
      }
    }
    current
  }

  /// Parses Penn-Treebank-style bracket notation, e.g.
  /// `"(S (NP (DT the) (NN dog)) (VP (VBD sat)))"`, assigning heads with a
  /// simple rightmost-child-is-head default rule.
  pub fn from_bracketed(src: &str) -> RstResult<Self> {
    let tokens = tokenize_brackets(src);
    let mut builder = SyntaxTreeBuilder::new();
    let mut pos = 0usize;
    let root = parse_node(&tokens, &mut pos, &mut builder)?;
    if pos != tokens.len() {
      return Err(RstError::MalformedSyntaxTree(format!("trailing tokens after root node in {src:?}")));
    }
    Ok(builder.finish(root))
  }
}

/// Incrementally assembles a [`SyntaxTree`], used both by
/// [`SyntaxTree::from_bracketed`] and by callers that already know heads
/// precisely and want to bypass the default head rule.
pub struct SyntaxTreeBuilder {
  nodes: Vec<SyntaxNodeData>,
}

impl SyntaxTreeBuilder {
  pub fn new() -> Self {
    Self { nodes: Vec::new() }
  }

  /// Adds a preterminal leaf (`label` = POS tag, `token` = surface word).
  /// Returns its id. Its own head is itself.
  pub fn add_preterminal(&mut self, label: impl Into<String>, token: impl Into<String>) -> NodeId {
    let id = self.nodes.len();
    self.nodes.push(SyntaxNodeData { label: label.into(), parent: None, children: Vec::new(), token: Some(token.into()), head_node: id });
    id
  }

  /// Adds a phrasal node over `children`, using `head_child_index` (an
  /// index into `children`) to determine head percolation.
  pub fn add_phrase(&mut self, label: impl Into<String>, children: Vec<NodeId>, head_child_index: usize) -> NodeId {
    let head_node = self.nodes[children[head_child_index]].head_node;
    let id = self.nodes.len();
    for &c in &children {
      self.nodes[c].parent = Some(id);
    }
    self.nodes.push(SyntaxNodeData { label: label.into(), parent: None, children, token: None, head_node });
    id
  }

  pub fn finish(self, root: NodeId) -> SyntaxTree {
    SyntaxTree { nodes: self.nodes, root }
  }
}

impl Default for SyntaxTreeBuilder {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BracketToken {
  Open,
  Close,
  Atom(String),
}

fn tokenize_brackets(src: &str) -> Vec<BracketToken> {
  let mut out = Vec::new();
  let mut atom = String::new();
  let flush = |atom: &mut String, out: &mut Vec<BracketToken>| {
    if !atom.is_empty() {
      out.push(BracketToken::Atom(std::mem::take(atom)));
    }
  };
  for ch in src.chars() {
    match ch {
      '(' => {
        flush(&mut atom, &mut out);
        out.push(BracketToken::Open);
      }
      ')' => {
        flush(&mut atom, &mut out);
        out.push(BracketToken::Close);
      }
      c if c.is_whitespace() => flush(&mut atom, &mut out),
      c => atom.push(c),
    }
  }
  flush(&mut atom, &mut out);
  out
}

fn parse_node(tokens: &[BracketToken], pos: &mut usize, builder: &mut SyntaxTreeBuilder) -> RstResult<NodeId> {
  match tokens.get(*pos) {
    Some(BracketToken::Open) => *pos += 1,
    other => return Err(RstError::MalformedSyntaxTree(format!("expected '(', found {other:?}"))),
  }

  let label = match tokens.get(*pos) {
    Some(BracketToken::Atom(s)) => {
      *pos += 1;
      s.clone()
    }
    other => return Err(RstError::MalformedSyntaxTree(format!("expected a label, found {other:?}"))),
  };

  // A preterminal is `(POS token)`: its sole content is a single atom.
  if let Some(BracketToken::Atom(tok)) = tokens.get(*pos) {
    if matches!(tokens.get(*pos + 1), Some(BracketToken::Close)) {
      *pos += 1;
      let id = builder.add_preterminal(label, tok.clone());
      expect_close(tokens, pos)?;
      return Ok(id);
    }
  }

  let mut children = Vec::new();
  while !matches!(tokens.get(*pos), Some(BracketToken::Close) | None) {
    children.push(parse_node(tokens, pos, builder)?);
  }
  expect_close(tokens, pos)?;

  if children.is_empty() {
    return Err(RstError::MalformedSyntaxTree(format!("node {label:?} has no children and no token")));
  }
  // Default head rule: rightmost child. Real documents should prefer
  // `SyntaxTreeBuilder::add_phrase` with a rule informed by the actual
  // parser's head percolation.
  let head_idx = children.len() - 1;
  Ok(builder.add_phrase(label, children, head_idx))
}

fn expect_close(tokens: &[BracketToken], pos: &mut usize) -> RstResult<()> {
  match tokens.get(*pos) {
    Some(BracketToken::Close) => {
      *pos += 1;
      Ok(())
    }
    other => Err(RstError::MalformedSyntaxTree(format!("expected ')', found {other:?}"))),
  }
}
