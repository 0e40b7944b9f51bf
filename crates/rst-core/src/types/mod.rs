pub mod action;
pub mod classifier;
pub mod config;
pub mod discourse_tree;
pub mod document;
pub mod edu;
pub mod error;
pub mod node;
pub mod state;
pub mod tree;

pub use action::{Action, RstLabel};
pub use classifier::{ActionLabel, Classifier};
pub use config::ParserConfig;
pub use discourse_tree::DiscourseTree;
pub use document::DocumentContext;
pub use edu::Edu;
pub use error::{RstError, RstResult};
pub use node::TreeNode;
pub use state::ParserState;
pub use tree::{NodeId, SyntaxTree, SyntaxTreeBuilder};
