use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};

use crate::scanner;
use crate::token::TokenGenerator;

/// Comment block prepended verbatim to every transformed artifact.
pub const ATTRIBUTION_HEADER: &str = "/*\n * Obfuscated release build.\n * Readable sources live in the project repository; do not edit this file.\n */\n";

/// Identifier-like word: letter or underscore start, word characters, at
/// most one hyphen-joined trailing segment.
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*(?:-[A-Za-z0-9_]+)?").unwrap());

/// A word right after a styling property access is never rewritten.
const STYLE_PREFIX: &str = "style.";

/// One obfuscation session, normally one build run. The mapping table, the
/// used-word set and the token counter live here and accumulate across every
/// artifact the session processes, so a word renamed in one artifact gets
/// the same replacement everywhere. Calls are sequential; there is no
/// interior locking.
pub struct Obfuscator {
    eligible: HashSet<String>,
    mapping: HashMap<String, String>,
    used_words: HashSet<String>,
    tokens: TokenGenerator,
}

impl Obfuscator {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            eligible: words.into_iter().collect(),
            mapping: HashMap::new(),
            used_words: HashSet::new(),
            tokens: TokenGenerator::new(),
        }
    }

    /// Runs the full transform over one artifact text: strip block comments,
    /// protect string whitespace, rewrite eligible words, collapse and
    /// restore whitespace, prepend the attribution header. The input is
    /// never mutated; an empty input yields exactly the header.
    pub fn obfuscate_text(&mut self, input: &str) -> String {
        let stripped = scanner::strip_block_comments(input);
        let protected = scanner::protect_string_whitespace(&stripped);
        let replaced = self.replace_words(&protected);
        let body = scanner::normalize_whitespace(&replaced);
        format!("{}{}", ATTRIBUTION_HEADER, body)
    }

    /// One left-to-right `replace_all` sweep. The `regex` crate has no
    /// lookaround, so the guards run in the closure against the haystack:
    /// skip after `style.`, skip URL scheme position, skip words touching a
    /// quote. Replacement output is never re-scanned within the sweep.
    fn replace_words(&mut self, text: &str) -> String {
        let eligible = &self.eligible;
        let mapping = &mut self.mapping;
        let used_words = &mut self.used_words;
        let tokens = &mut self.tokens;

        WORD.replace_all(text, |caps: &Captures| {
            let m = caps.get(0).unwrap();
            let word = m.as_str();

            if text[..m.start()].ends_with(STYLE_PREFIX) {
                return word.to_string();
            }
            let rest = &text[m.end()..];
            if rest.starts_with("://") {
                return word.to_string();
            }
            if matches!(rest.chars().next(), Some('"') | Some('\'')) {
                return word.to_string();
            }

            if let Some(token) = mapping.get(word) {
                return token.clone();
            }
            if eligible.contains(word) {
                let token = tokens.next_token();
                mapping.insert(word.to_string(), token.clone());
                used_words.insert(word.to_string());
                return token;
            }
            word.to_string()
        })
        .into_owned()
    }

    /// Original word to replacement token, accumulated over the session.
    pub fn mapping(&self) -> &HashMap<String, String> {
        &self.mapping
    }

    /// Eligible words substituted at least once.
    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }
}
