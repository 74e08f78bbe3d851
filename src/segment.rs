//! Splits display text into per-word and per-character units so each unit
//! can be animated on its own.

/// A word that must not be broken across lines, holding its characters in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordUnit {
    pub chars: Vec<char>,
}

impl WordUnit {
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Output of a single segmentation pass. Only constructible from raw text,
/// so already-segmented output can't be fed back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented<T> {
    units: Vec<T>,
}

impl<T> Segmented<T> {
    pub fn units(&self) -> &[T] {
        &self.units
    }
}

impl Segmented<WordUnit> {
    pub fn chars(text: &str) -> Self {
        Self {
            units: split_chars(text),
        }
    }
}

impl Segmented<String> {
    pub fn words(text: &str) -> Self {
        Self {
            units: split_words(text).into_iter().map(str::to_string).collect(),
        }
    }
}

pub fn split_chars(text: &str) -> Vec<WordUnit> {
    text.split(' ')
        .map(|w| WordUnit {
            chars: w.chars().collect(),
        })
        .collect()
}

pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

pub fn join_chars(words: &[WordUnit]) -> String {
    words
        .iter()
        .map(WordUnit::text)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
