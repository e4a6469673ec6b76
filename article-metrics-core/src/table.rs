use {
    std::{fs::File, io::{Read, Write}, path::Path},
    anyhow::{anyhow, Context, Result},
    serde::Deserialize,
    tracing::warn,
    crate::entity::MetricsRecord,
};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InputRow {
    #[serde(rename = "URL_ID", default)]
    pub url_id: Option<String>,
    #[serde(rename = "URL")]
    pub url: String,
}

pub fn read_input_rows(path: &Path) -> Result<Vec<InputRow>> {
    let file = File::open(path).with_context(|| format!("failed to open input table {}", path.display()))?;
    read_input_rows_from(file)
}

/// Rows that fail to parse are logged and skipped; a table without a `URL`
/// column is rejected as a whole.
pub fn read_input_rows_from<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    if !headers.iter().any(|header| header == "URL") {
        return Err(anyhow!("input table has no URL column"));
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row: Result<InputRow, csv::Error> = record.and_then(|record| record.deserialize(Some(&headers)));
        match row {
            Ok(row) if row.url.trim().is_empty() => warn!("skipping input row {}: empty url", index + 1),
            Ok(row) => rows.push(row),
            Err(err) => warn!("skipping input row {}: {}", index + 1, err),
        }
    }

    Ok(rows)
}

pub fn write_records(path: &Path, records: &[MetricsRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create output table {}", path.display()))?;
    write_records_to(file, records)
}

pub fn write_records_to<W: Write>(writer: W, records: &[MetricsRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{engine::ArticleMetrics, entity::into_metrics_record},
    };

    fn metrics() -> ArticleMetrics {
        ArticleMetrics {
            positive_score: 3,
            negative_score: 1,
            polarity_score: 0.5,
            subjectivity_score: 0.25,
            avg_sentence_length: 16.0,
            percentage_of_complex_words: 0.125,
            fog_index: 6.45,
            avg_number_of_words_per_sentence: 16.0,
            complex_word_count: 2,
            word_count: 16,
            syllable_per_word: 2.5,
            personal_pronouns: 4,
            avg_word_length: 6.75,
        }
    }

    #[test]
    fn reads_url_and_optional_id() {
        let input = "URL_ID,URL\nblackassign0001,https://example.com/a\n,https://example.com/b\n";
        let rows = read_input_rows_from(input.as_bytes()).unwrap();

        assert_eq!(rows, vec![
            InputRow { url_id: Some("blackassign0001".to_owned()), url: "https://example.com/a".to_owned() },
            InputRow { url_id: None, url: "https://example.com/b".to_owned() },
        ]);
    }

    #[test]
    fn url_id_column_is_optional() {
        let rows = read_input_rows_from("URL\nhttps://example.com/a\n".as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].url_id, None);
    }

    #[test]
    fn rows_with_empty_url_are_skipped() {
        let rows = read_input_rows_from("URL_ID,URL\n1,\n2,https://example.com/b\n".as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].url_id.as_deref(), Some("2"));
    }

    #[test]
    fn table_without_url_column_is_rejected() {
        assert!(read_input_rows_from("ID,LINK\n1,https://example.com\n".as_bytes()).is_err());
    }

    #[test]
    fn writes_header_and_one_row_per_record() {
        let records = vec![
            into_metrics_record(Some("1".to_owned()), "https://example.com/a".to_owned(), metrics()),
            into_metrics_record(None, "https://example.com/b".to_owned(), metrics()),
        ];

        let mut output = Vec::new();
        write_records_to(&mut output, &records).unwrap();
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE,POLARITY SCORE,SUBJECTIVITY SCORE,\
             AVG SENTENCE LENGTH,PERCENTAGE OF COMPLEX WORDS,FOG INDEX,AVG NUMBER OF WORDS PER SENTENCE,\
             COMPLEX WORD COUNT,WORD COUNT,SYLLABLE PER WORD,PERSONAL PRONOUNS,AVG WORD LENGTH",
        );
        assert_eq!(lines[1], "1,https://example.com/a,3,1,0.5,0.25,16.0,0.125,6.45,16.0,2,16,2.5,4,6.75");
        assert!(lines[2].starts_with(",https://example.com/b,3,1,"));
    }
}
