use {
    unicode_segmentation::UnicodeSegmentation,
    crate::{
        engine::ratio,
        syllables::count_syllables,
        text_cleaner::word_tokenize,
    },
};

// lowercase, without the trailing period
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "inc", "ltd", "co", "corp",
    "dept", "est", "fig", "no", "vol", "approx", "e.g", "i.e", "a.m", "p.m", "u.s", "u.k",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Readability {
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub fog_index: f64,
}

/// Splits text into trimmed sentences on `.`, `!` and `?` boundaries. A
/// boundary right after a known abbreviation or a single-letter initial does
/// not end the sentence.
pub fn sent_tokenize(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = None;

    for (offset, segment) in text.split_sentence_bound_indices() {
        let start_offset = *start.get_or_insert(offset);
        if ends_with_abbreviation(segment) {
            continue;
        }

        let sentence = text[start_offset..offset + segment.len()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = None;
    }

    if let Some(start_offset) = start {
        let sentence = text[start_offset..].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
    }

    sentences
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let segment = segment.trim_end();
    let Some(without_period) = segment.strip_suffix('.') else {
        return false;
    };

    let last_word = without_period
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    let is_initial = last_word.chars().count() == 1 && last_word.chars().all(char::is_alphabetic);
    is_initial || ABBREVIATIONS.contains(&last_word.as_str())
}

/// A complex word is longer than six characters and has more than three syllables.
pub fn is_complex_word(word: &str) -> bool {
    word.chars().count() > 6 && count_syllables(word) > 3
}

/// `text` is split into sentences and words as is; complex words and the
/// fog index word ratio come from `cleaned_words`.
pub fn analyze(text: &str, cleaned_words: &[&str]) -> Readability {
    let sentences = sent_tokenize(text);
    let total_words: usize = sentences.iter().map(|sentence| word_tokenize(sentence).len()).sum();

    let avg_words_per_sentence = ratio(total_words as f64, sentences.len());
    let complex_word_count = cleaned_words.iter().filter(|word| is_complex_word(word)).count();

    Readability {
        avg_words_per_sentence,
        complex_word_count,
        fog_index: fog_index(avg_words_per_sentence, complex_word_count, cleaned_words.len()),
    }
}

pub fn fog_index(avg_words_per_sentence: f64, complex_word_count: usize, word_count: usize) -> f64 {
    0.4 * (avg_words_per_sentence + ratio(complex_word_count as f64, word_count))
}
