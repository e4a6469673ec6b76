use {
    unicode_segmentation::UnicodeSegmentation,
    crate::lexicon::Stopwords,
};

/// Splits text into word tokens on Unicode word boundaries. Punctuation and
/// whitespace never form tokens, while inner apostrophes and periods stay
/// attached ("don't", "3.14").
pub fn word_tokenize(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Lowercased, alphanumeric-only tokens with stopwords removed, joined by
/// single spaces. Tokens containing any punctuation are dropped whole.
pub fn clean(text: &str, stopwords: &Stopwords) -> String {
    word_tokenize(text)
        .into_iter()
        .filter(|token| is_alphanumeric(token))
        .map(str::to_lowercase)
        .filter(|token| !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
