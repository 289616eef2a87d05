//! Dictionary-backed English lemmatizer.
//!
//! Reduces an inflected word to its dictionary form the way WordNet's `morphy`
//! does: irregular forms come from an exception table, regular forms are found
//! by detaching inflectional endings and keeping the first candidate that is a
//! known base form. Unlike suffix stripping, a candidate that is not in the
//! lexicon is never produced, so "developer" stays "developer" while
//! "developed" becomes "develop".
//!
//! Every lemma is either a lexicon entry or the unchanged input, which makes a
//! second pass over lemmatized text a fixed point.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

const LEXICON_SOURCE: &str = include_str!("../../data/lexicon.txt");

static LEXICON: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    LEXICON_SOURCE
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// Irregular inflections that no detachment rule can recover.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    // verbs
    ("ran", "run"),
    ("built", "build"),
    ("wrote", "write"),
    ("written", "write"),
    ("led", "lead"),
    ("taught", "teach"),
    ("thought", "think"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("caught", "catch"),
    ("sought", "seek"),
    ("made", "make"),
    ("began", "begin"),
    ("begun", "begin"),
    ("became", "become"),
    ("came", "come"),
    ("went", "go"),
    ("gone", "go"),
    ("gave", "give"),
    ("given", "give"),
    ("took", "take"),
    ("taken", "take"),
    ("knew", "know"),
    ("known", "know"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("held", "hold"),
    ("kept", "keep"),
    ("left", "leave"),
    ("lent", "lend"),
    ("lost", "lose"),
    ("met", "meet"),
    ("paid", "pay"),
    ("said", "say"),
    ("sent", "send"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("told", "tell"),
    ("understood", "understand"),
    ("felt", "feel"),
    ("got", "get"),
    ("gotten", "get"),
    ("heard", "hear"),
    ("laid", "lay"),
    ("meant", "mean"),
    ("saw", "see"),
    ("seen", "see"),
    ("shown", "show"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    // nouns
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("curricula", "curriculum"),
    // adjectives
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

static EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR_FORMS.iter().copied().collect());

const NOUN_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("s", ""),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("s", ""),
    ("ied", "y"),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Gradable adjectives. Comparative rules only fire for these, otherwise
/// agent nouns such as "server" or "manager" would collapse onto verbs.
const GRADABLE_ADJECTIVES: &[&str] = &[
    "big", "bright", "broad", "busy", "cheap", "clean", "clear", "close", "cold", "deep",
    "early", "easy", "fast", "fine", "firm", "fresh", "full", "great", "hard", "heavy", "high",
    "hot", "large", "late", "lean", "light", "long", "low", "near", "new", "nice", "old", "poor",
    "pure", "quick", "rare", "rich", "safe", "sharp", "short", "simple", "slow", "small", "smart",
    "soft", "strict", "strong", "tall", "tight", "tough", "warm", "weak", "wide", "wise", "young",
];

static ADJECTIVES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| GRADABLE_ADJECTIVES.iter().copied().collect());

/// Returns the dictionary form of a lowercase ASCII word.
pub fn lemmatize(word: &str) -> String {
    if word.len() <= 2 {
        return word.to_string();
    }
    if let Some(base) = EXCEPTIONS.get(word) {
        return (*base).to_string();
    }
    if LEXICON.contains(word) || ADJECTIVES.contains(word) {
        return word.to_string();
    }

    for (suffix, replacement) in NOUN_RULES.iter().chain(VERB_RULES) {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        let candidate = format!("{stem}{replacement}");
        if is_base_form(&candidate) {
            return candidate;
        }
        // "running" -> "runn" -> "run", "planned" -> "plann" -> "plan"
        if replacement.is_empty() && matches!(*suffix, "ed" | "ing") {
            if let Some(undoubled) = undouble_final_consonant(stem) {
                if is_base_form(undoubled) {
                    return undoubled.to_string();
                }
            }
        }
    }

    for (suffix, replacement) in ADJECTIVE_RULES {
        if let Some(stem) = word.strip_suffix(suffix) {
            let candidate = format!("{stem}{replacement}");
            if ADJECTIVES.contains(candidate.as_str()) {
                return candidate;
            }
            if let Some(undoubled) = undouble_final_consonant(stem) {
                if ADJECTIVES.contains(undoubled) {
                    return undoubled.to_string();
                }
            }
        }
    }

    word.to_string()
}

fn is_base_form(candidate: &str) -> bool {
    candidate.len() >= 2 && LEXICON.contains(candidate)
}

fn undouble_final_consonant(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 3 {
        return None;
    }
    let last = bytes[n - 1];
    if last == bytes[n - 2] && !matches!(last, b'a' | b'e' | b'i' | b'o' | b'u') {
        Some(&stem[..n - 1])
    } else {
        None
    }
}
