use crate::engine::ratio;

pub fn average_word_length(words: &[&str]) -> f64 {
    let total_characters: usize = words.iter().map(|word| word.chars().count()).sum();
    ratio(total_characters as f64, words.len())
}
