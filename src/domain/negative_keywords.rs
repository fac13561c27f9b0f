use std::collections::{HashMap, HashSet};

/// Phrases containing any of these are dropped during expansion.
///
/// Single words must match a whole word of the phrase; multi-word entries
/// match anywhere in it.
#[derive(Debug, Default, Clone)]
pub struct NegativeKeywords {
    words: HashSet<String>,
    phrases: Vec<String>,
}

impl NegativeKeywords {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut negatives = NegativeKeywords::default();
        for entry in entries {
            let entry = entry.as_ref().trim().to_lowercase();
            if entry.is_empty() {
                continue;
            }
            match entry.split_whitespace().count() {
                1 => {
                    negatives.words.insert(entry);
                }
                _ => negatives.phrases.push(entry),
            }
        }
        negatives
    }

    pub fn len(&self) -> usize {
        self.words.len() + self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        text.split_whitespace().any(|w| self.words.contains(w))
            || self.phrases.iter().any(|p| text.contains(p.as_str()))
    }
}

/// Keeps the highest volume seen for each lower-cased phrase.
pub fn merge_max(target: &mut HashMap<String, u64>, phrase: &str, volume: u64) {
    let key = phrase.trim().to_lowercase();
    let entry = target.entry(key).or_insert(volume);
    if *entry < volume {
        *entry = volume;
    }
}
