pub mod config;
pub mod engine;
pub mod entity;
pub mod fetcher;
pub mod lexicon;
pub mod pronouns;
pub mod readability;
pub mod sentiment;
pub mod syllables;
pub mod table;
pub mod text_cleaner;
pub mod word_length;
