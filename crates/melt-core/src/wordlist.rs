//! Wordlist registry
//!
//! Maps free-form language identifiers (BCP-47-ish tags or English display
//! names, in any case, with spaces, hyphens or underscores) to one of the
//! BIP-39 wordlists shipped with the `bip39` crate.
//!
//! Lookup order:
//! 1. canonical tag table (`en`, `en-gb`, `zh-hant`, ...)
//! 2. English display names (`british english`, `Simplified Chinese`, ...)
//! 3. the tag with trailing subtags removed one at a time (`es-ar` → `es`)

use std::fmt;

use bip39::Language;

use crate::error::MeltError;

/// Number of words in every BIP-39 wordlist.
pub const WORDLIST_LEN: usize = 2048;

/// An immutable 2048-word list bound to one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Wordlist {
    language: Language,
    tag: &'static str,
    name: &'static str,
}

impl Wordlist {
    const fn new(language: Language, tag: &'static str, name: &'static str) -> Self {
        Self {
            language,
            tag,
            name,
        }
    }

    /// Canonical language tag, e.g. `zh-hant`.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// English display name, e.g. `Traditional Chinese`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn words(&self) -> &'static [&'static str; WORDLIST_LEN] {
        self.language.word_list()
    }

    /// Word at `index`. Only the low 11 bits are used.
    pub fn word(&self, index: u16) -> &'static str {
        self.words()[usize::from(index) & (WORDLIST_LEN - 1)]
    }
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.tag)
    }
}

pub static CHINESE_SIMPLIFIED: Wordlist =
    Wordlist::new(Language::SimplifiedChinese, "zh-hans", "Simplified Chinese");
pub static CHINESE_TRADITIONAL: Wordlist =
    Wordlist::new(Language::TraditionalChinese, "zh-hant", "Traditional Chinese");
pub static CZECH: Wordlist = Wordlist::new(Language::Czech, "cs", "Czech");
pub static ENGLISH: Wordlist = Wordlist::new(Language::English, "en", "English");
pub static FRENCH: Wordlist = Wordlist::new(Language::French, "fr", "French");
pub static ITALIAN: Wordlist = Wordlist::new(Language::Italian, "it", "Italian");
pub static JAPANESE: Wordlist = Wordlist::new(Language::Japanese, "ja", "Japanese");
pub static KOREAN: Wordlist = Wordlist::new(Language::Korean, "ko", "Korean");
pub static PORTUGUESE: Wordlist = Wordlist::new(Language::Portuguese, "pt", "Portuguese");
pub static SPANISH: Wordlist = Wordlist::new(Language::Spanish, "es", "Spanish");

static SUPPORTED: [&Wordlist; 10] = [
    &CHINESE_SIMPLIFIED,
    &CHINESE_TRADITIONAL,
    &CZECH,
    &ENGLISH,
    &FRENCH,
    &ITALIAN,
    &JAPANESE,
    &KOREAN,
    &PORTUGUESE,
    &SPANISH,
];

static TAGS: &[(&str, &Wordlist)] = &[
    ("zh", &CHINESE_SIMPLIFIED),
    ("zh-hans", &CHINESE_SIMPLIFIED),
    ("zh-cn", &CHINESE_SIMPLIFIED),
    ("zh-sg", &CHINESE_SIMPLIFIED),
    ("zh-hant", &CHINESE_TRADITIONAL),
    ("zh-tw", &CHINESE_TRADITIONAL),
    ("zh-hk", &CHINESE_TRADITIONAL),
    ("zh-mo", &CHINESE_TRADITIONAL),
    ("cs", &CZECH),
    ("en", &ENGLISH),
    ("en-us", &ENGLISH),
    ("en-gb", &ENGLISH),
    ("fr", &FRENCH),
    ("it", &ITALIAN),
    ("ja", &JAPANESE),
    ("ko", &KOREAN),
    ("pt", &PORTUGUESE),
    ("pt-br", &PORTUGUESE),
    ("pt-pt", &PORTUGUESE),
    ("es", &SPANISH),
    ("es-es", &SPANISH),
    ("es-419", &SPANISH),
];

static NAMES: &[(&str, &Wordlist)] = &[
    ("chinese", &CHINESE_SIMPLIFIED),
    ("simplified-chinese", &CHINESE_SIMPLIFIED),
    ("chinese-simplified", &CHINESE_SIMPLIFIED),
    ("traditional-chinese", &CHINESE_TRADITIONAL),
    ("chinese-traditional", &CHINESE_TRADITIONAL),
    ("czech", &CZECH),
    ("english", &ENGLISH),
    ("american-english", &ENGLISH),
    ("british-english", &ENGLISH),
    ("french", &FRENCH),
    ("italian", &ITALIAN),
    ("japanese", &JAPANESE),
    ("korean", &KOREAN),
    ("portuguese", &PORTUGUESE),
    ("brazilian-portuguese", &PORTUGUESE),
    ("european-portuguese", &PORTUGUESE),
    ("spanish", &SPANISH),
    ("european-spanish", &SPANISH),
    ("latin-american-spanish", &SPANISH),
];

/// Every wordlist this crate can resolve to.
pub fn supported() -> &'static [&'static Wordlist] {
    &SUPPORTED
}

/// Resolve a language tag or English language name to its wordlist.
///
/// # Example
/// ```
/// use melt_core::wordlist::{resolve, ENGLISH};
/// assert_eq!(resolve("British English").unwrap(), &ENGLISH);
/// assert_eq!(resolve("en_GB").unwrap(), &ENGLISH);
/// assert!(resolve("klingon").is_err());
/// ```
pub fn resolve(language: &str) -> Result<&'static Wordlist, MeltError> {
    let tag = sanitize(language);

    if let Some(list) = lookup(TAGS, &tag).or_else(|| lookup(NAMES, &tag)) {
        log::debug!("language {:?} resolved to {}", language, list);
        return Ok(list);
    }

    let mut base = tag.as_str();
    while let Some((head, _)) = base.rsplit_once('-') {
        base = head;
        if let Some(list) = lookup(TAGS, base) {
            log::debug!("language {:?} resolved to {} via {:?}", language, list, base);
            return Ok(list);
        }
    }

    Err(MeltError::NotFound(language.to_string()))
}

fn sanitize(language: &str) -> String {
    language
        .trim()
        .to_lowercase()
        .replace([' ', '_'], "-")
}

fn lookup(table: &'static [(&str, &'static Wordlist)], key: &str) -> Option<&'static Wordlist> {
    table
        .iter()
        .find(|(tag, _)| *tag == key)
        .map(|(_, list)| *list)
}
