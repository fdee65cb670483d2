use serde::{Deserialize, Serialize};

/// A pipeline stage that committed a transformation for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Exception,
    Reduplication,
    Circumfix,
    /// A nasalized or transparent prefix resolved through the rule table.
    Nasalization,
    /// Plain prefix removal after the nasalization table found nothing.
    Prefix,
    Suffix,
}

/// How a surface prefix relates to the root-initial consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NasalizationRule {
    /// The prefix attaches without mutating the root (e.g. {ber-}, {di-}).
    Transparent,
    /// The prefix may have replaced `dropped`; root-initial letters in
    /// `survivors` other than `dropped` are kept as-is.
    Nasalizing {
        dropped: char,
        survivors: &'static str,
    },
}

/// A discontinuous prefix + suffix pair stripped as a unit (e.g. {ke-...-an}).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircumfixRule {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// Result of stemming a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub word: String,
    pub root: String,
    /// Stages that committed, in pipeline order. Empty when nothing applied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<Stage>,
}

impl Analysis {
    /// True if no stage changed the word.
    pub fn is_unchanged(&self) -> bool {
        self.stages.is_empty()
    }
}

/// A surface form and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormCount {
    pub form: String,
    pub frequency: u64,
}

/// All forms grouped under one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootEntry {
    pub root: String,
    /// Sum of the frequencies of every form.
    pub frequency: u64,
    /// Most frequent first.
    pub forms: Vec<FormCount>,
}

/// Corpus-level counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_words: u64,
    pub unique_forms: usize,
    pub unique_roots: usize,
    pub average_forms_per_root: f64,
}
