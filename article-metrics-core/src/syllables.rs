use crate::engine::ratio;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Counts maximal runs of lowercase vowels. No dictionary, no silent-e or
/// diphthong handling, and `y` is never a vowel.
pub fn count_syllables(word: &str) -> usize {
    let mut syllables = 0;
    let mut prev_char_was_vowel = false;

    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_char_was_vowel {
            syllables += 1;
        }
        prev_char_was_vowel = is_vowel;
    }

    syllables
}

pub fn syllables_per_word(words: &[&str]) -> f64 {
    let total_syllables: usize = words.iter().map(|word| count_syllables(word)).sum();
    ratio(total_syllables as f64, words.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_vowel_groups() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("rhythm"), 0);
        assert_eq!(count_syllables("sky"), 0);
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("queue"), 1);
        assert_eq!(count_syllables("communication"), 5);
    }

    #[test]
    fn vowels_are_case_sensitive() {
        assert_eq!(count_syllables("AEIOU"), 0);
        assert_eq!(count_syllables("Apple"), 1);
    }

    #[test]
    fn average_over_words() {
        assert_eq!(syllables_per_word(&["cat", "beautiful"]), 2.0);
        assert_eq!(syllables_per_word(&[]), 0.0);
    }
}
