//! Keyword extraction for the inverted search index.

use crate::model::OidNode;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Name fragments shorter than this are too generic to index.
pub const MIN_NAME_TOKEN_LEN: usize = 3;

/// Only the first this-many significant description words are indexed.
pub const DESCRIPTION_KEYWORD_CAP: usize = 20;

static DESCRIPTION_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("description word pattern"));

/// Collect every lowercase keyword one node contributes to the index.
pub fn node_keywords(node: &OidNode) -> FxHashSet<String> {
    let mut keywords = FxHashSet::default();

    keywords.insert(node.name.to_lowercase());
    keywords.insert(node.module.to_lowercase());

    for token in split_name_tokens(&node.name) {
        if token.len() >= MIN_NAME_TOKEN_LEN {
            keywords.insert(token.to_lowercase());
        }
    }

    if !node.description.is_empty() {
        let lowered = node.description.to_lowercase();
        for word in DESCRIPTION_WORD
            .find_iter(&lowered)
            .take(DESCRIPTION_KEYWORD_CAP)
        {
            keywords.insert(word.as_str().to_string());
        }
    }

    keywords
}

/// Split an object name at case and digit boundaries: a run of lowercase
/// letters optionally led by one capital, a run of capitals not followed
/// by a lowercase letter, or a run of digits. Separator characters are
/// dropped.
pub fn split_name_tokens(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else if c.is_ascii_lowercase() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else if c.is_ascii_uppercase() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_uppercase() {
                i += 1;
            }
            if i < chars.len() && chars[i].is_ascii_lowercase() {
                if i - start == 1 {
                    // single capital leading a lowercase run
                    while i < chars.len() && chars[i].is_ascii_lowercase() {
                        i += 1;
                    }
                } else {
                    // the last capital opens the next word
                    i -= 1;
                }
            }
            tokens.push(chars[start..i].iter().collect());
        } else {
            i += 1;
        }
    }

    tokens
}
