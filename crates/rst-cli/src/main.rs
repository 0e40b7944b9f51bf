use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, value_parser, ArgMatches, Command};
use serde::Deserialize;

use rst_core::compile::FeatureBag;
use rst_core::types::classifier::ActionLabel;
use rst_core::{Action, Classifier, DocumentContext, Edu, Journal, ParserConfig, RstLabel, SyntaxTree};

fn command() -> ArgMatches {
  Command::new("rst")
    .version("0.1.0")
    .author("Anthony Weathersby <acweathersby.codes@gmail.com>")
    .subcommand(
      Command::new("parse")
        .about("Parses a document into an n-best list of RST trees using a scored classifier.")
        .arg(arg!(--doc <DOC_PATH> "Path to a document descriptor (JSON)").required(true).value_parser(value_parser!(PathBuf)))
        .arg(arg!(--classifier <CLASSIFIER_PATH> "Path to a classifier weight table (JSON)").required(true).value_parser(value_parser!(PathBuf)))
        .arg(arg!(--"max-acts" <N> "Per-state action fan-out").required(false).value_parser(value_parser!(usize)).default_value("1"))
        .arg(arg!(--"max-states" <N> "Beam width").required(false).value_parser(value_parser!(usize)).default_value("1"))
        .arg(arg!(--"n-best" <N> "Number of derivations to collect").required(false).value_parser(value_parser!(usize)).default_value("1")),
    )
    .subcommand(
      Command::new("oracle")
        .about("Replays a gold action sequence against a document, emitting training pairs.")
        .arg(arg!(--doc <DOC_PATH> "Path to a document descriptor (JSON)").required(true).value_parser(value_parser!(PathBuf)))
        .arg(arg!(--gold <GOLD_PATH> "Path to a gold action sequence (JSON)").required(true).value_parser(value_parser!(PathBuf))),
    )
    .get_matches()
}

#[derive(Deserialize)]
struct EduInput {
  words: Vec<String>,
  pos_tags: Vec<String>,
  sentence_idx: usize,
  start_token_idx: usize,
  starts_paragraph: bool,
}

#[derive(Deserialize)]
struct DocumentInput {
  id: String,
  edus: Vec<EduInput>,
  /// One bracketed Penn-Treebank string per sentence, in sentence order.
  syntax_trees: Vec<String>,
}

#[derive(Deserialize)]
struct ActionLabelInput {
  #[serde(rename = "type")]
  type_code: String,
  label: Option<String>,
}

impl ActionLabelInput {
  fn to_action(&self) -> Action {
    match self.type_code.as_str() {
      "S" => Action::Shift,
      "U" => Action::Unary(RstLabel::new(self.label.clone().unwrap_or_default())),
      "B" => Action::Binary(RstLabel::new(self.label.clone().unwrap_or_default())),
      other => panic!("unknown action type code {other:?} in gold action file"),
    }
  }
}

#[derive(Deserialize)]
struct ClassifierInput {
  labels: Vec<ActionLabelInput>,
  /// Unnormalized scores, softmax-normalized at load time. This is a toy,
  /// feature-blind stand-in classifier for exercising the beam search from
  /// the command line; it is not the trained RST relation classifier.
  weights: Vec<f64>,
}

struct TableClassifier {
  labels: Vec<ActionLabel>,
  probs: Vec<f64>,
}

impl TableClassifier {
  fn from_input(input: ClassifierInput) -> Self {
    let max = input.weights.iter().cloned().fold(f64::MIN, f64::max);
    let exps: Vec<f64> = input.weights.iter().map(|w| (w - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    let probs = exps.into_iter().map(|e| e / sum).collect();
    let labels = input.labels.into_iter().map(|l| ActionLabel { type_code: leak_type_code(&l.type_code), label: l.label.unwrap_or_else(|| "text".to_string()) }).collect();
    Self { labels, probs }
  }
}

fn leak_type_code(s: &str) -> &'static str {
  match s {
    "S" => "S",
    "U" => "U",
    "B" => "B",
    other => panic!("unknown action type code {other:?} in classifier file"),
  }
}

impl Classifier for TableClassifier {
  fn action_labels(&self) -> &[ActionLabel] {
    &self.labels
  }

  fn predict(&self, _features: &FeatureBag) -> Vec<f64> {
    self.probs.clone()
  }
}

fn load_document(path: &PathBuf) -> DocumentContext {
  let raw = fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));
  let input: DocumentInput = serde_json::from_str(&raw).unwrap_or_else(|e| panic!("failed to parse document descriptor {path:?}: {e}"));
  let edus = input.edus.into_iter().map(|e| Edu::new(e.words, e.pos_tags, e.sentence_idx, e.start_token_idx, e.starts_paragraph)).collect();
  let syntax_trees =
    input.syntax_trees.iter().map(|s| SyntaxTree::from_bracketed(s).unwrap_or_else(|e| panic!("malformed syntax tree in {path:?}: {e}"))).collect();
  DocumentContext::new(input.id, edus, syntax_trees)
}

fn run_parse(matches: &ArgMatches) -> ExitCode {
  let doc_path = matches.get_one::<PathBuf>("doc").unwrap();
  let classifier_path = matches.get_one::<PathBuf>("classifier").unwrap();
  let doc = load_document(doc_path);

  let raw = fs::read_to_string(classifier_path).unwrap_or_else(|e| panic!("failed to read {classifier_path:?}: {e}"));
  let input: ClassifierInput = serde_json::from_str(&raw).unwrap_or_else(|e| panic!("failed to parse classifier {classifier_path:?}: {e}"));
  let classifier = TableClassifier::from_input(input);

  let config = ParserConfig::default()
    .with_max_acts(*matches.get_one::<usize>("max-acts").unwrap())
    .with_max_states(*matches.get_one::<usize>("max-states").unwrap())
    .with_n_best(*matches.get_one::<usize>("n-best").unwrap());

  let mut journal = Journal::new();
  let results = rst_core::run_beam(&doc, &classifier, &config, &mut journal);

  for entry in journal.entries() {
    eprintln!("[{}] {}", entry.severity, entry.message);
  }
  for result in &results {
    println!("{}\t{}", result.score, result.tree);
  }
  ExitCode::SUCCESS
}

fn run_oracle(matches: &ArgMatches) -> ExitCode {
  let doc_path = matches.get_one::<PathBuf>("doc").unwrap();
  let gold_path = matches.get_one::<PathBuf>("gold").unwrap();
  let doc = load_document(doc_path);

  let raw = fs::read_to_string(gold_path).unwrap_or_else(|e| panic!("failed to read {gold_path:?}: {e}"));
  let gold_input: Vec<ActionLabelInput> = serde_json::from_str(&raw).unwrap_or_else(|e| panic!("failed to parse gold actions {gold_path:?}: {e}"));
  let gold: Vec<Action> = gold_input.iter().map(ActionLabelInput::to_action).collect();

  let config = ParserConfig::default();
  let mut exit = ExitCode::SUCCESS;
  for pair in rst_core::run_oracle(&doc, &config, gold) {
    match pair {
      Ok((label, features)) => {
        let feats: Vec<_> = features.iter().map(|(name, count)| serde_json::json!({"feature": name, "count": count})).collect();
        let out = serde_json::json!({"type": label.type_code, "label": label.label, "features": feats});
        println!("{out}");
      }
      Err(err) => {
        eprintln!("oracle replay stopped: {err}");
        exit = ExitCode::FAILURE;
      }
    }
  }
  exit
}

fn main() -> ExitCode {
  let matches = command();
  match matches.subcommand() {
    Some(("parse", sub)) => run_parse(sub),
    Some(("oracle", sub)) => run_oracle(sub),
    _ => {
      eprintln!("expected a subcommand: parse | oracle");
      ExitCode::FAILURE
    }
  }
}
