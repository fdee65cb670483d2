pub mod types;
pub mod rules;
pub mod stemmer;
pub mod tokenize;
pub mod frequency;
pub mod decode;
pub mod output;
pub mod report;
pub mod config;
pub mod error;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use frequency::RootIndex;
pub use rules::RuleSet;
pub use stemmer::{recover_root_from_prefix, stem, MalayStemmer, MIN_ROOT_LEN};
pub use tokenize::tokenize;
pub use types::{Analysis, RootEntry, Stage, Statistics};
