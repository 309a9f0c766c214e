//! Read-only language vocabulary for query normalization
//!
//! This module provides:
//! - Stopword sets for the two source-language variants
//! - Cross-language synonym table (automotive domain)
//! - Technical abbreviation table
//! - Excluded-language character set (Polish diacritics)
//!
//! The vocabulary is built once at process start — either from the built-in
//! automotive seed or from a TOML file — and injected into the
//! `QueryNormalizer`. It is never mutated afterwards and never consulted as
//! ambient global state.

use katalog_core::{Error, Result, TermSet, VocabularyConfig};
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// Built-in automotive seed
// ============================================================================

const UKRAINIAN_STOPWORDS: &[&str] = &[
    "і", "та", "або", "в", "на", "з", "для", "до", "від", "по", "при", "під", "над", "за",
    "перед", "між", "через", "без", "про", "об", "із",
];

const RUSSIAN_STOPWORDS: &[&str] = &[
    "и", "или", "в", "на", "с", "для", "к", "от", "по", "при", "под", "над", "за", "перед",
    "между", "через", "без", "о", "об", "из",
];

/// Characters that mark a token as Polish and therefore excluded
const POLISH_CHARACTERS: &str = "ąćęłńóśźż";

/// Cross-language synonym groups: canonical token → equivalent variants
const SYNONYM_TABLE: &[(&str, &[&str])] = &[
    // Brake systems
    ("тормоз", &["гальмо", "тормоз", "тормозной", "гальмівний"]),
    ("гальмо", &["гальмо", "тормоз", "тормозной", "гальмівний"]),
    ("гальмівний", &["гальмо", "тормоз", "тормозной", "гальмівний"]),
    ("тормозной", &["гальмо", "тормоз", "тормозной", "гальмівний"]),
    ("колодка", &["колодка", "колодки"]),
    ("диск", &["диск", "disc"]),
    ("барабан", &["барабан", "drum"]),
    // Clutch
    ("сцепление", &["зчеплення", "сцепление"]),
    ("зчеплення", &["зчеплення", "сцепление"]),
    // Fasteners
    ("крепление", &["кріплення", "крепление", "креплення"]),
    ("кріплення", &["кріплення", "крепление", "креплення"]),
    ("креплення", &["кріплення", "крепление", "креплення"]),
    ("винт", &["гвинт", "винт", "гвинта", "винта"]),
    ("гвинт", &["гвинт", "винт", "гвинта", "винта"]),
    ("гвинта", &["гвинт", "винт", "гвинта", "винта"]),
    ("винта", &["гвинт", "винт", "гвинта", "винта"]),
    ("болт", &["болт"]),
    // Engine components
    ("цилиндр", &["циліндр", "цилиндр", "cylinder"]),
    ("циліндр", &["циліндр", "цилиндр", "cylinder"]),
    ("палец", &["палець", "палец", "палуч"]),
    ("палець", &["палець", "палец", "палуч"]),
    // Filters
    ("фильтр", &["фільтр", "фильтр", "filter"]),
    ("фільтр", &["фільтр", "фильтр", "filter"]),
    ("воздушный", &["повітряний", "воздушный"]),
    ("повітряний", &["повітряний", "воздушный"]),
    ("масляный", &["масляний", "масляный"]),
    ("масляний", &["масляний", "масляный"]),
    ("топливный", &["паливний", "топливный"]),
    ("паливний", &["паливний", "топливный"]),
    // Suspension
    ("амортизатор", &["амортизатор"]),
    ("пружина", &["пружина"]),
    ("ресора", &["ресора", "ресори"]),
    // Seals and gaskets
    ("сальник", &["сальник", "simering"]),
    ("прокладка", &["прокладка", "gasket"]),
    // Other components
    ("клапан", &["клапан", "valve"]),
    ("втулка", &["втулка", "bushing"]),
    ("патрубок", &["патрубок", "hose"]),
    ("датчик", &["датчик", "sensor"]),
    ("компресор", &["компресор", "компресора", "compressor"]),
    ("компресора", &["компресор", "компресора", "compressor"]),
];

/// Technical acronyms and vehicle-domain abbreviations
const ABBREVIATION_TABLE: &[(&str, &[&str])] = &[
    // Electronic systems
    ("abs", &["abs", "антиблокувальна", "антиблокировочная", "system"]),
    ("ebs", &["ebs", "електронна", "электронная", "тормозная"]),
    ("esp", &["esp", "стабілізація", "стабилизация"]),
    ("tcs", &["tcs", "антипробуксовочная", "антипробуксов"]),
    // Vehicle types (Polish variants are seeded but filtered on expansion)
    ("грузовик", &["вантажівка", "грузовик", "ciężarówka", "truck"]),
    ("вантажівка", &["вантажівка", "грузовик", "ciężarówka", "truck"]),
    ("причеп", &["причіп", "прицеп", "trailer"]),
    ("причіп", &["причіп", "прицеп", "trailer"]),
    ("прицеп", &["причіп", "прицеп", "trailer"]),
    // Manufacturers
    ("bpw", &["bpw"]),
    ("man", &["man"]),
    ("mercedes", &["mercedes", "мерседес"]),
    ("scania", &["scania", "сканія"]),
    ("volvo", &["volvo", "вольво"]),
    ("daf", &["daf", "даф"]),
];

static AUTOMOTIVE: Lazy<Arc<Vocabulary>> = Lazy::new(|| {
    let mut config = VocabularyConfig {
        excluded_characters: POLISH_CHARACTERS.to_string(),
        ..VocabularyConfig::default()
    };
    config.stopwords = UKRAINIAN_STOPWORDS
        .iter()
        .chain(RUSSIAN_STOPWORDS.iter())
        .map(|s| (*s).to_string())
        .collect();
    for (key, variants) in SYNONYM_TABLE {
        config.synonyms.insert(
            (*key).to_string(),
            variants.iter().map(|v| (*v).to_string()).collect(),
        );
    }
    for (key, variants) in ABBREVIATION_TABLE {
        config.abbreviations.insert(
            (*key).to_string(),
            variants.iter().map(|v| (*v).to_string()).collect(),
        );
    }
    Arc::new(Vocabulary::from_config(&config))
});

// ============================================================================
// Vocabulary
// ============================================================================

/// Lookup-optimized, immutable language tables
///
/// # Thread Safety
///
/// Vocabulary is read-only after construction and freely shared across
/// worker threads behind an `Arc` without synchronization.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    stopwords: FxHashSet<String>,
    synonyms: FxHashMap<String, Vec<String>>,
    abbreviations: FxHashMap<String, Vec<String>>,
    excluded_chars: FxHashSet<char>,
}

impl Vocabulary {
    /// Build a vocabulary from raw configuration tables
    pub fn from_config(config: &VocabularyConfig) -> Self {
        Vocabulary {
            stopwords: config.stopwords.iter().map(|s| s.to_lowercase()).collect(),
            synonyms: config
                .synonyms
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.iter().map(|s| s.to_lowercase()).collect()))
                .collect(),
            abbreviations: config
                .abbreviations
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.iter().map(|s| s.to_lowercase()).collect()))
                .collect(),
            excluded_chars: config.excluded_characters.chars().collect(),
        }
    }

    /// Parse a vocabulary from a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: VocabularyConfig =
            toml::from_str(raw).map_err(|e| Error::ConfigError(e.to_string()))?;
        Ok(Vocabulary::from_config(&config))
    }

    /// Load a vocabulary from a TOML file
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Vocabulary::from_toml_str(&raw)
    }

    /// The built-in automotive vocabulary (shared process-wide instance)
    pub fn automotive() -> Arc<Vocabulary> {
        Arc::clone(&AUTOMOTIVE)
    }

    /// True when the lower-cased token is a stopword
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// True when the word contains any excluded-language character
    pub fn contains_excluded_chars(&self, word: &str) -> bool {
        if self.excluded_chars.is_empty() {
            return false;
        }
        word.chars()
            .flat_map(char::to_lowercase)
            .any(|c| self.excluded_chars.contains(&c))
    }

    /// Expand a token into its synonym and abbreviation variants
    ///
    /// Returns `{token} ∪ synonyms(token) ∪ abbreviations(token)`; just
    /// `{token}` when the tables have no entry.
    pub fn expand_variants(&self, token: &str) -> TermSet {
        let mut variants = TermSet::new();
        variants.insert(token.to_string());
        if let Some(entries) = self.synonyms.get(token) {
            variants.extend(entries.iter().cloned());
        }
        if let Some(entries) = self.abbreviations.get(token) {
            variants.extend(entries.iter().cloned());
        }
        variants
    }

    /// Number of stopwords loaded
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Number of synonym entries loaded
    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }
}
