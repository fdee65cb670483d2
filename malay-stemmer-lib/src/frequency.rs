// Form and root frequency aggregation.

use std::collections::HashMap;

use crate::stemmer::{MalayStemmer, MIN_ROOT_LEN};
use crate::tokenize::tokenize;
use crate::types::*;

/// Forms grouped under their roots, with occurrence counts.
#[derive(Debug, Clone, Default)]
pub struct RootIndex {
    total_words: u64,
    /// form -> occurrences, for every distinct token.
    form_freq: HashMap<String, u64>,
    /// root -> (form -> occurrences), for forms long enough to stem.
    roots: HashMap<String, HashMap<String, u64>>,
}

impl RootIndex {
    /// Count tokens and group every distinct form of at least
    /// [`MIN_ROOT_LEN`] characters under its root. Each form is stemmed once.
    pub fn from_tokens<I, S>(tokens: I, stemmer: &MalayStemmer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total_words = 0u64;
        let mut form_freq: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            total_words += 1;
            *form_freq.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }

        let mut roots: HashMap<String, HashMap<String, u64>> = HashMap::new();
        for (form, &count) in &form_freq {
            if form.chars().count() < MIN_ROOT_LEN {
                continue;
            }
            let root = stemmer.stem(form);
            *roots
                .entry(root)
                .or_default()
                .entry(form.clone())
                .or_insert(0) += count;
        }

        tracing::info!(
            total_words,
            unique_forms = form_freq.len(),
            unique_roots = roots.len(),
            "aggregated word forms"
        );

        Self {
            total_words,
            form_freq,
            roots,
        }
    }

    /// Tokenize `text` and aggregate the tokens.
    pub fn from_text(text: &str, stemmer: &MalayStemmer) -> Self {
        Self::from_tokens(tokenize(text), stemmer)
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn unique_forms(&self) -> usize {
        self.form_freq.len()
    }

    pub fn unique_roots(&self) -> usize {
        self.roots.len()
    }

    /// How often a surface form occurred (0 if never seen).
    pub fn form_frequency(&self, form: &str) -> u64 {
        self.form_freq.get(form).copied().unwrap_or(0)
    }

    /// Total occurrences of every form grouped under `root`.
    pub fn root_frequency(&self, root: &str) -> u64 {
        self.roots
            .get(root)
            .map(|forms| forms.values().sum())
            .unwrap_or(0)
    }

    /// Roots by descending frequency, ties broken alphabetically. Forms
    /// within a root are ordered the same way.
    pub fn entries(&self) -> Vec<RootEntry> {
        let mut entries: Vec<RootEntry> = self
            .roots
            .iter()
            .map(|(root, forms)| {
                let mut forms: Vec<FormCount> = forms
                    .iter()
                    .map(|(form, &frequency)| FormCount {
                        form: form.clone(),
                        frequency,
                    })
                    .collect();
                forms.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.form.cmp(&b.form)));
                RootEntry {
                    root: root.clone(),
                    frequency: forms.iter().map(|f| f.frequency).sum(),
                    forms,
                }
            })
            .collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.root.cmp(&b.root)));
        entries
    }

    pub fn statistics(&self) -> Statistics {
        let unique_roots = self.roots.len();
        let grouped_forms: usize = self.roots.values().map(|forms| forms.len()).sum();
        let average_forms_per_root = if unique_roots == 0 {
            0.0
        } else {
            grouped_forms as f64 / unique_roots as f64
        };
        Statistics {
            total_words: self.total_words,
            unique_forms: self.form_freq.len(),
            unique_roots,
            average_forms_per_root,
        }
    }
}
