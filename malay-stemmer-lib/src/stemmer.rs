// Rule-based Malay stemmer.
//
// Stages run in a fixed order:
//   1. Exception lookup (against the word as given)
//   2. Reduplication collapse ({mata-mata} -> {mata})
//   3. Circumfix stripping, with a nasalization re-check for {me-} allomorphs
//   4. Prefix stripping with nasalization recovery
//   5. Suffix stripping
//   6. Minimum-length validation
//
// Stages 1-3 resolve the root outright when they apply. Stages 4 and 5
// rewrite a working form; stage 6 may discard both rewrites.

use crate::rules::RuleSet;
use crate::types::*;

/// Shortest root any stage may produce.
pub const MIN_ROOT_LEN: usize = 3;

/// Outcome of a single pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// The stage produced the final root; later stages do not run.
    Resolved(String),
    /// The stage did not apply.
    Pass,
}

/// Stateless stemmer over the process-wide rule tables.
#[derive(Debug, Clone, Copy)]
pub struct MalayStemmer {
    rules: &'static RuleSet,
}

impl MalayStemmer {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::global())
    }

    pub fn with_rules(rules: &'static RuleSet) -> Self {
        Self { rules }
    }

    /// Reduce a word to its root. Never fails: a word no rule can shorten to
    /// at least [`MIN_ROOT_LEN`] characters comes back lowercased.
    pub fn stem(&self, word: &str) -> String {
        self.analyze(word).root
    }

    /// Stem a word and report which stages committed.
    pub fn analyze(&self, word: &str) -> Analysis {
        // Exceptions are matched before lowercasing, so {Memahami} misses the
        // {memahami} entry.
        if let Step::Resolved(root) = self.lookup_exception(word) {
            return resolved(word, root, Stage::Exception);
        }

        let original = word.to_lowercase();

        if let Step::Resolved(root) = collapse_reduplication(&original) {
            return resolved(word, root, Stage::Reduplication);
        }

        if let Step::Resolved(root) = self.strip_circumfix(&original) {
            return resolved(word, root, Stage::Circumfix);
        }

        let mut stages = Vec::new();
        let mut result = original.clone();

        if let Some((rest, stage)) = self.strip_prefix(&original) {
            tracing::trace!(word, rest = %rest, ?stage, "prefix stripped");
            result = rest;
            stages.push(stage);
        }

        if let Some(rest) = self.strip_suffix(&result) {
            tracing::trace!(word, rest = %rest, "suffix stripped");
            result = rest;
            stages.push(Stage::Suffix);
        }

        if char_len(&result) < MIN_ROOT_LEN {
            tracing::trace!(word, candidate = %result, "candidate too short, keeping word");
            return Analysis {
                word: word.to_string(),
                root: original,
                stages: vec![],
            };
        }

        Analysis {
            word: word.to_string(),
            root: result,
            stages,
        }
    }

    /// Strip a (possibly nasalized) prefix and restore the root-initial
    /// consonant it replaced. Returns the word unchanged when no rule applies.
    ///
    /// Examples:
    /// - {membaca}: {b} survives {mem-} -> {baca}
    /// - {memukul}: {p} was dropped -> {pukul}
    /// - {menggambar}: {g} survives {meng-} -> {gambar}
    /// - {menyapu}: {s} was dropped -> {sapu}
    ///
    /// A remainder starting with the dropped letter itself is ambiguous and
    /// always gets the letter prepended again.
    pub fn recover_root_from_prefix(&self, word: &str) -> String {
        self.resolve_nasalization(word)
            .unwrap_or_else(|| word.to_string())
    }

    // -----------------------------------------------------------------------
    // Stages
    // -----------------------------------------------------------------------

    fn lookup_exception(&self, word: &str) -> Step {
        match self.rules.exception(word) {
            Some(root) => Step::Resolved(root.to_string()),
            None => Step::Pass,
        }
    }

    /// Strip the first circumfix whose interior is long enough. Once a pair
    /// commits, later pairs are never tried, even if they would leave a
    /// better root.
    fn strip_circumfix(&self, word: &str) -> Step {
        for rule in self.rules.circumfixes() {
            let interior = match word
                .strip_prefix(rule.prefix)
                .and_then(|rest| rest.strip_suffix(rule.suffix))
            {
                Some(interior) => interior,
                None => continue,
            };
            if char_len(interior) < MIN_ROOT_LEN {
                continue;
            }

            if self.rules.is_nasal_circumfix_prefix(rule.prefix) {
                let prefixed = format!("{}{interior}", rule.prefix);
                let recovered = self.recover_root_from_prefix(&prefixed);
                if recovered != prefixed {
                    return Step::Resolved(recovered);
                }
            }

            return Step::Resolved(interior.to_string());
        }

        Step::Pass
    }

    /// Remove a general prefix. Tries nasalization recovery first, then plain
    /// removal of the longest matching prefix.
    fn strip_prefix(&self, word: &str) -> Option<(String, Stage)> {
        if !self.rules.prefixes().iter().any(|&p| word.starts_with(p)) {
            return None;
        }

        let recovered = self.recover_root_from_prefix(word);
        if recovered != word {
            return Some((recovered, Stage::Nasalization));
        }

        self.rules.prefixes_by_length().iter().find_map(|&prefix| {
            word.strip_prefix(prefix)
                .filter(|rest| char_len(rest) >= MIN_ROOT_LEN)
                .map(|rest| (rest.to_string(), Stage::Prefix))
        })
    }

    /// Remove the first suffix in table order that leaves a long enough root.
    fn strip_suffix(&self, word: &str) -> Option<String> {
        self.rules.suffixes().iter().find_map(|&suffix| {
            word.strip_suffix(suffix)
                .filter(|rest| char_len(rest) >= MIN_ROOT_LEN)
                .map(str::to_string)
        })
    }

    fn resolve_nasalization(&self, word: &str) -> Option<String> {
        for &(prefix, rule) in self.rules.nasalization_rules() {
            let remainder = match word.strip_prefix(prefix) {
                Some(r) => r,
                None => continue,
            };
            // Too little left for a root; a later, shorter prefix may fit.
            if char_len(remainder) < MIN_ROOT_LEN {
                continue;
            }

            let root = match rule {
                NasalizationRule::Transparent => remainder.to_string(),
                NasalizationRule::Nasalizing { dropped, survivors } => {
                    match remainder.chars().next() {
                        Some(first) if first != dropped && survivors.contains(first) => {
                            remainder.to_string()
                        }
                        _ => format!("{dropped}{remainder}"),
                    }
                }
            };
            return Some(root);
        }

        None
    }
}

impl Default for MalayStemmer {
    fn default() -> Self {
        Self::new()
    }
}

/// Stem a word with the process-wide rule tables.
pub fn stem(word: &str) -> String {
    MalayStemmer::new().stem(word)
}

/// Nasalization recovery with the process-wide rule tables.
pub fn recover_root_from_prefix(word: &str) -> String {
    MalayStemmer::new().recover_root_from_prefix(word)
}

/// Collapse full reduplication ({X-X}) to {X}.
fn collapse_reduplication(word: &str) -> Step {
    let mut parts = word.split('-');
    let (first, second) = match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => (first, second),
        _ => return Step::Pass,
    };
    if first == second && char_len(first) >= MIN_ROOT_LEN {
        Step::Resolved(first.to_string())
    } else {
        Step::Pass
    }
}

fn resolved(word: &str, root: String, stage: Stage) -> Analysis {
    tracing::trace!(word, root = %root, ?stage, "resolved");
    Analysis {
        word: word.to_string(),
        root,
        stages: vec![stage],
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stemmer() -> MalayStemmer {
        MalayStemmer::new()
    }

    #[test]
    fn test_exception_wins_over_circumfix() {
        let a = stemmer().analyze("kerajaan");
        assert_eq!(a.root, "raja");
        assert_eq!(a.stages, vec![Stage::Exception]);
    }

    #[test]
    fn test_exception_is_case_sensitive() {
        // {memahami} maps to {faham}, but the capitalized form goes through
        // the general rules: mem- + {ahami} -> {pahami}, then -i.
        let a = stemmer().analyze("Memahami");
        assert_eq!(a.root, "paham");
        assert_eq!(a.stages, vec![Stage::Nasalization, Stage::Suffix]);
        assert_eq!(stemmer().stem("memahami"), "faham");
    }

    #[test]
    fn test_reduplication() {
        let a = stemmer().analyze("mata-mata");
        assert_eq!(a.root, "mata");
        assert_eq!(a.stages, vec![Stage::Reduplication]);
        assert_eq!(stemmer().stem("kura-kura"), "kura");
    }

    #[test]
    fn test_reduplication_requires_two_equal_parts() {
        assert_eq!(collapse_reduplication("anak-anak-anak"), Step::Pass);
        assert_eq!(collapse_reduplication("ibu-bapa"), Step::Pass);
        assert_eq!(collapse_reduplication("di-di"), Step::Pass);
        assert_eq!(stemmer().stem("anak-anak-anak"), "anak-anak-anak");
        assert_eq!(stemmer().stem("ibu-bapa"), "ibu-bapa");
    }

    #[test]
    fn test_nasalization_letter_preserved() {
        let a = stemmer().analyze("menggambar");
        assert_eq!(a.root, "gambar");
        assert_eq!(a.stages, vec![Stage::Nasalization]);
    }

    #[test]
    fn test_nasalization_letter_restored() {
        assert_eq!(stemmer().stem("memukul"), "pukul");
        assert_eq!(stemmer().stem("menangkap"), "tangkap");
        assert_eq!(stemmer().stem("menyapu"), "sapu");
    }

    #[test]
    fn test_circumfix_with_nasal_prefix() {
        let a = stemmer().analyze("membacakan");
        assert_eq!(a.root, "baca");
        assert_eq!(a.stages, vec![Stage::Circumfix]);
        assert_eq!(stemmer().stem("mengajarkan"), "ajar");
        assert_eq!(stemmer().stem("menyelesaikan"), "selesai");
        assert_eq!(stemmer().stem("menjalankan"), "jalan");
    }

    #[test]
    fn test_circumfix_plain() {
        assert_eq!(stemmer().stem("pembacaan"), "baca");
        assert_eq!(stemmer().stem("pengajaran"), "ajar");
        assert_eq!(stemmer().stem("pertanyaan"), "tanya");
        assert_eq!(stemmer().stem("melihatkan"), "lihat");
        assert_eq!(stemmer().stem("dilakukan"), "laku");
        assert_eq!(stemmer().stem("terdapatkan"), "dapat");
        assert_eq!(stemmer().stem("sebaliknya"), "balik");
    }

    #[test]
    fn test_circumfix_first_match_commits() {
        // pem-...-an commits to {andang}; neither a nasalization re-check
        // (pem- is not a {me-} allomorph) nor the later pe-...-an pair runs.
        let a = stemmer().analyze("pemandangan");
        assert_eq!(a.root, "andang");
        assert_eq!(a.stages, vec![Stage::Circumfix]);
    }

    #[test]
    fn test_circumfix_short_interior_tries_next_pair() {
        // per-...-an leaves {ah}; pe-...-an leaves {rah}.
        assert_eq!(stemmer().strip_circumfix("perahan"), Step::Resolved("rah".into()));
    }

    #[test]
    fn test_suffix_table_order() {
        // -i is tried before -wati.
        let a = stemmer().analyze("olahragawati");
        assert_eq!(a.root, "olahragawat");
        assert_eq!(a.stages, vec![Stage::Suffix]);
        assert_eq!(stemmer().stem("rumahnya"), "rumah");
        assert_eq!(stemmer().stem("bukulah"), "buku");
    }

    #[test]
    fn test_prefix_then_suffix() {
        let a = stemmer().analyze("bermain");
        assert_eq!(a.root, "main");
        assert_eq!(a.stages, vec![Stage::Nasalization]);
    }

    #[test]
    fn test_short_root_unchanged() {
        let a = stemmer().analyze("meja");
        assert_eq!(a.root, "meja");
        assert!(a.is_unchanged());
        assert_eq!(stemmer().stem("xyz"), "xyz");
    }

    #[test]
    fn test_short_input_returned_as_is() {
        assert_eq!(stemmer().stem("di"), "di");
        assert_eq!(stemmer().stem("a"), "a");
        assert_eq!(stemmer().stem(""), "");
    }

    #[test]
    fn test_lowercases_output() {
        assert_eq!(stemmer().stem("XYZ"), "xyz");
        assert_eq!(stemmer().stem("MATA-MATA"), "mata");
    }

    #[test]
    fn test_recover_root_from_prefix() {
        let s = stemmer();
        assert_eq!(s.recover_root_from_prefix("memukul"), "pukul");
        assert_eq!(s.recover_root_from_prefix("membaca"), "baca");
        assert_eq!(s.recover_root_from_prefix("menggambar"), "gambar");
        assert_eq!(s.recover_root_from_prefix("bermain"), "main");
        assert_eq!(s.recover_root_from_prefix("xyz"), "xyz");
    }

    #[test]
    fn test_recover_dropped_letter_ambiguity() {
        // {p} is a survivor of mem- but also the dropped letter, so it is
        // always restored.
        assert_eq!(recover_root_from_prefix("memproses"), "pproses");
    }

    #[test]
    fn test_recover_per_falls_to_pe() {
        // pe- is declared before per-, so only {pe} is ever stripped.
        assert_eq!(recover_root_from_prefix("permain"), "rmain");
        assert_eq!(recover_root_from_prefix("perbuat"), "rbuat");
    }

    #[test]
    fn test_recover_skips_short_remainders() {
        // men- leaves {an}; the later me- rule leaves {nan}.
        assert_eq!(recover_root_from_prefix("menan"), "nan");
        // ber- leaves {at} and nothing else matches.
        assert_eq!(recover_root_from_prefix("berat"), "berat");
        assert_eq!(recover_root_from_prefix("meja"), "meja");
    }

    #[test]
    fn test_stemmer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MalayStemmer>();
    }
}
