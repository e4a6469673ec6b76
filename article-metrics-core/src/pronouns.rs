use {
    once_cell::sync::Lazy,
    regex::Regex,
};

const PERSONAL_PRONOUNS: &[&str] = &["i", "we", "my", "ours", "us"];

static PERSONAL_PRONOUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", PERSONAL_PRONOUNS.join("|")))
        .expect("personal pronoun pattern is valid")
});

/// Whole-word matches of the personal pronoun set, ignoring case. Meant for
/// raw article text: cleaned text has these words removed as stopwords.
pub fn count_personal_pronouns(text: &str) -> usize {
    PERSONAL_PRONOUN_RE.find_iter(&text.to_lowercase()).count()
}
