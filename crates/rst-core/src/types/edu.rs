/// One elementary discourse unit: a pre-segmented span of (word, POS-tag)
/// pairs. EDU segmentation itself is an external collaborator — this type
/// only stores the result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edu {
  /// Surface-form words, in order, case preserved as given.
  pub words: Vec<String>,
  /// POS tags aligned 1:1 with `words`.
  pub pos_tags: Vec<String>,
  /// Index of the sentence (and therefore syntax tree) this EDU was
  /// extracted from. EDUs never cross sentence boundaries.
  pub sentence_idx: usize,
  /// Token offset of this EDU's first word within its sentence.
  pub start_token_idx: usize,
  /// True iff this EDU begins a new paragraph.
  pub starts_paragraph: bool,
}

impl Edu {
  pub fn new(words: Vec<String>, pos_tags: Vec<String>, sentence_idx: usize, start_token_idx: usize, starts_paragraph: bool) -> Self {
    debug_assert_eq!(words.len(), pos_tags.len(), "words/pos_tags must be aligned");
    Self { words, pos_tags, sentence_idx, start_token_idx, starts_paragraph }
  }

  /// Token offset one past this EDU's last word within its sentence.
  pub fn end_token_idx(&self) -> usize {
    self.start_token_idx + self.words.len()
  }

  pub fn lowercased_words(&self) -> Vec<String> {
    self.words.iter().map(|w| w.to_lowercase()).collect()
  }
}
