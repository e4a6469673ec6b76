use crate::lexicon::OpinionLexicon;

/// Additive smoothing applied to both sentiment ratio denominators.
pub const SMOOTHING: f64 = 0.000001;

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
    pub polarity: f64,
    pub subjectivity: f64,
}

pub fn score<S: AsRef<str>>(tokens: &[S], lexicon: &OpinionLexicon) -> SentimentScore {
    let positive = tokens.iter().filter(|token| lexicon.is_positive(token.as_ref())).count();
    let negative = tokens.iter().filter(|token| lexicon.is_negative(token.as_ref())).count();

    let polarity = (positive as f64 - negative as f64) / (positive as f64 + negative as f64 + SMOOTHING);
    let subjectivity = (positive + negative) as f64 / (tokens.len() as f64 + SMOOTHING);

    SentimentScore {
        positive,
        negative,
        polarity,
        subjectivity,
    }
}
