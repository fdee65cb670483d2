// Malay affix and exception tables.
//
// Morphological rules follow Abdullah Hassan, "Morfologi Bahasa Melayu"
// (2006), Nik Safiah Karim et al., "Tatabahasa Dewan" (2008) and Asmah Haji
// Omar, "Nahu Melayu Mutakhir" (2009).
//
// Every table except the exception map is an ordered slice: the first
// matching entry wins, so a longer prefix must precede any shorter prefix it
// extends.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::NasalizationRule::{Nasalizing, Transparent};
use crate::types::{CircumfixRule, NasalizationRule};

// ---------------------------------------------------------------------------
// Prefix / suffix constants
// ---------------------------------------------------------------------------

// All prefixes including nasalized allomorphs of {me-} and {pe-}.
const PREFIXES: &[&str] = &[
    "meng", "meny", "mem", "men", "me", //
    "peng", "peny", "pem", "pen", "pe", //
    "ber", "ter", "per", "di", "ke", "se",
];

// Checked in this order, not by length.
const SUFFIXES: &[&str] = &[
    "kan", "an", "i", "nya", "lah", "kah", "pun", "wan", "wati", "isme",
];

const fn circumfix(prefix: &'static str, suffix: &'static str) -> CircumfixRule {
    CircumfixRule { prefix, suffix }
}

const CIRCUMFIXES: &[CircumfixRule] = &[
    circumfix("ke", "an"),    // kerajaan
    circumfix("per", "an"),   // perjalanan
    circumfix("peng", "an"),  // pengajaran
    circumfix("peny", "an"),
    circumfix("pem", "an"),   // pembacaan
    circumfix("pen", "an"),   // pendapatan
    circumfix("pe", "an"),    // pelarian
    circumfix("ber", "an"),   // berkenalan
    circumfix("meng", "kan"), // mengajarkan
    circumfix("meny", "kan"), // menyapukan
    circumfix("mem", "kan"),  // membacakan
    circumfix("men", "kan"),  // menuliskan
    circumfix("me", "kan"),   // melihatkan
    circumfix("di", "kan"),   // dilakukan
    circumfix("ter", "kan"),  // terdapatkan
    circumfix("se", "nya"),   // sebaliknya
];

// Circumfix prefixes whose interior is re-checked for a dropped consonant.
const NASAL_CIRCUMFIX_PREFIXES: &[&str] = &["mem", "men", "meng", "meny"];

// me-/pe- + k, g, h, vowel -> meng-/peng- (k drops)
// me-/pe- + s             -> meny-/peny- (s drops)
// me-/pe- + p, b, f, v    -> mem-/pem-   (p drops)
// me-/pe- + t, d, c, j, z -> men-/pen-   (t drops)
const NASALIZATION: &[(&str, NasalizationRule)] = &[
    ("meng", Nasalizing { dropped: 'k', survivors: "kghaeiou" }),
    ("meny", Nasalizing { dropped: 's', survivors: "s" }),
    ("mem", Nasalizing { dropped: 'p', survivors: "pbfv" }),
    ("men", Nasalizing { dropped: 't', survivors: "tdcjz" }),
    ("peng", Nasalizing { dropped: 'k', survivors: "kghaeiou" }),
    ("peny", Nasalizing { dropped: 's', survivors: "s" }),
    ("pem", Nasalizing { dropped: 'p', survivors: "pbfv" }),
    ("pen", Nasalizing { dropped: 't', survivors: "tdcjz" }),
    // me- before l, m, n, r, w, y (melihat, menurun).
    ("me", Transparent),
    ("pe", Transparent),
    ("ber", Transparent),
    ("ter", Transparent),
    ("di", Transparent),
    ("ke", Transparent),
    ("se", Transparent),
    ("per", Transparent),
];

// ---------------------------------------------------------------------------
// Exceptions
// ---------------------------------------------------------------------------

const EXCEPTIONS: &[(&str, &str)] = &[
    // Arabic (and a few Sanskrit) loanwords.
    ("alim", "alim"),
    ("amal", "amal"),
    ("arab", "arab"),
    ("asal", "asal"),
    ("fikir", "fikir"),
    ("hakim", "hakim"),
    ("halal", "halal"),
    ("haram", "haram"),
    ("hikayat", "hikayat"),
    ("hukum", "hukum"),
    ("ilmu", "ilmu"),
    ("islam", "islam"),
    ("kabar", "kabar"),
    ("kadar", "kadar"),
    ("kalam", "kalam"),
    ("khalik", "khalik"),
    ("kitab", "kitab"),
    ("makhluk", "makhluk"),
    ("masjid", "masjid"),
    ("menteri", "menteri"),
    ("musafir", "musafir"),
    ("nabi", "nabi"),
    ("nasib", "nasib"),
    ("quran", "quran"),
    ("raja", "raja"),
    ("rasul", "rasul"),
    ("salam", "salam"),
    ("sultan", "sultan"),
    ("syarat", "syarat"),
    ("wakil", "wakil"),
    ("wali", "wali"),
    ("waktu", "waktu"),
    ("zaman", "zaman"),
    // Derived forms of {fikir}.
    ("berfikir", "fikir"),
    ("berfikiran", "fikir"),
    ("memfikir", "fikir"),
    ("memfikiri", "fikir"),
    ("memfikirkan", "fikir"),
    ("difikir", "fikir"),
    ("difikirkan", "fikir"),
    ("terfikir", "fikir"),
    // Root-initial {p} cannot be recovered from the surface form.
    ("pemimpin", "pimpin"),
    ("kepimpinan", "pimpin"),
    ("berpimpin", "pimpin"),
    ("pimpinan", "pimpin"),
    // Native words that look affixed.
    ("negeri", "negeri"),
    ("negara", "negara"),
    ("duli", "duli"),
    ("paduka", "paduka"),
    // Irregular nasalization.
    ("mengaji", "kaji"),
    ("mengambil", "ambil"),
    ("mengikat", "ikat"),
    ("mengerti", "erti"),
    ("mempunyai", "punya"),
    // Stacked affixes.
    ("berwarna", "warna"),
    ("mewarnai", "warna"),
    ("bersejarah", "sejarah"),
    ("berdasarkan", "dasar"),
    ("kerajaan", "raja"),
    ("kekuasaan", "kuasa"),
    ("kehidupan", "hidup"),
    ("berkenalan", "kenal"),
    ("perjalanan", "jalan"),
    ("permulaan", "mula"),
    ("kemampuan", "mampu"),
    ("kepandaian", "pandai"),
    ("kebijaksanaan", "bijaksana"),
    ("peperangan", "perang"),
    // Reference nasalizations.
    ("melangkah", "langkah"),
    ("menangis", "tangis"),
    ("menulis", "tulis"),
    ("mengajar", "ajar"),
    ("membaca", "baca"),
    ("melihat", "lihat"),
    ("mendengar", "dengar"),
    ("meminta", "minta"),
    ("menerima", "terima"),
    ("memberi", "beri"),
    // {f} surfaces as {p} after mem-.
    ("memahami", "faham"),
];

static GLOBAL: Lazy<RuleSet> = Lazy::new(RuleSet::new);

/// Immutable rule tables shared by every stemming call.
#[derive(Debug)]
pub struct RuleSet {
    exceptions: HashMap<&'static str, &'static str>,
    /// General prefixes, longest first (stable for equal lengths).
    prefixes_by_length: Vec<&'static str>,
}

impl RuleSet {
    /// Build the rule tables. Prefer [`RuleSet::global`], which builds them once.
    pub fn new() -> Self {
        let exceptions: HashMap<&'static str, &'static str> = EXCEPTIONS.iter().copied().collect();

        let mut prefixes_by_length = PREFIXES.to_vec();
        prefixes_by_length.sort_by(|a, b| b.len().cmp(&a.len()));

        tracing::debug!(
            exceptions = exceptions.len(),
            circumfixes = CIRCUMFIXES.len(),
            nasalization_rules = NASALIZATION.len(),
            "built Malay rule tables"
        );

        Self {
            exceptions,
            prefixes_by_length,
        }
    }

    /// The process-wide rule tables.
    pub fn global() -> &'static RuleSet {
        &GLOBAL
    }

    /// Look up the root for an irregular or lexicalized form.
    pub fn exception(&self, word: &str) -> Option<&'static str> {
        self.exceptions.get(word).copied()
    }

    /// All exception entries in declaration order.
    pub fn exceptions(&self) -> &'static [(&'static str, &'static str)] {
        EXCEPTIONS
    }

    pub fn circumfixes(&self) -> &'static [CircumfixRule] {
        CIRCUMFIXES
    }

    /// Whether a circumfix prefix is one of the nasal allomorphs of {me-}.
    pub fn is_nasal_circumfix_prefix(&self, prefix: &str) -> bool {
        NASAL_CIRCUMFIX_PREFIXES.contains(&prefix)
    }

    /// Nasalization rules in priority order.
    pub fn nasalization_rules(&self) -> &'static [(&'static str, NasalizationRule)] {
        NASALIZATION
    }

    /// General prefixes in declaration order.
    pub fn prefixes(&self) -> &'static [&'static str] {
        PREFIXES
    }

    /// General prefixes sorted longest first.
    pub fn prefixes_by_length(&self) -> &[&'static str] {
        &self.prefixes_by_length
    }

    /// Suffixes in the order they are tried.
    pub fn suffixes(&self) -> &'static [&'static str] {
        SUFFIXES
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
