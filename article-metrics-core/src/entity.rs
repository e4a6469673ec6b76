use {
    typed_builder::TypedBuilder,
    serde::Serialize,
    crate::engine::ArticleMetrics,
};

// field order is the output column order
#[derive(TypedBuilder, Serialize, Debug, Clone, PartialEq)]
pub struct MetricsRecord {
    #[serde(rename = "URL_ID")]
    url_id: Option<String>,
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "POSITIVE SCORE")]
    positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    percentage_of_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    avg_number_of_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    syllable_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    avg_word_length: f64,
}

impl MetricsRecord {
    pub fn url_id(&self) -> Option<&str> {
        self.url_id.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn polarity_score(&self) -> f64 {
        self.polarity_score
    }
}

pub fn into_metrics_record(url_id: Option<String>, url: String, metrics: ArticleMetrics) -> MetricsRecord {
    MetricsRecord::builder()
        .url_id(url_id)
        .url(url)
        .positive_score(metrics.positive_score)
        .negative_score(metrics.negative_score)
        .polarity_score(metrics.polarity_score)
        .subjectivity_score(metrics.subjectivity_score)
        .avg_sentence_length(metrics.avg_sentence_length)
        .percentage_of_complex_words(metrics.percentage_of_complex_words)
        .fog_index(metrics.fog_index)
        .avg_number_of_words_per_sentence(metrics.avg_number_of_words_per_sentence)
        .complex_word_count(metrics.complex_word_count)
        .word_count(metrics.word_count)
        .syllable_per_word(metrics.syllable_per_word)
        .personal_pronouns(metrics.personal_pronouns)
        .avg_word_length(metrics.avg_word_length)
        .build()
}
