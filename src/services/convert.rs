use crate::model::record::{ExampleSentence, WordRootRecord};
use crate::model::row::SourceRow;
use crate::model::settings::AssetSettings;
use crate::services::sanitize::sanitize;

/// Korean word-class suffix ("접두사" -> "접두"), removed from the id's type part.
pub const TYPE_CLASS_MARKER: &str = "사";

/// Maps one source row to its output record. `index` is the 0-based row
/// position, used when the row has no usable ordinal.
pub fn convert_row(row: &SourceRow, index: usize, assets: &AssetSettings) -> WordRootRecord {
    let no = parse_ordinal(row.no.as_deref()).unwrap_or(index as i64 + 1);

    let element = text(&row.element);
    let example_word = text(&row.example_word);

    let example_sentences = row
        .sentences
        .iter()
        .map(|(english, korean)| ExampleSentence {
            english: text(english),
            korean: text(korean),
        })
        .filter(|s| !s.english.is_empty() || !s.korean.is_empty())
        .collect();

    // Non-empty check is on the field text, not on the sanitized stem.
    let audio_url_element = if element.is_empty() {
        String::new()
    } else {
        assets.audio_url(&sanitize(&element))
    };

    let (audio_url_example_word, image_url) = if example_word.is_empty() {
        (String::new(), String::new())
    } else {
        let stem = sanitize(&example_word);
        (assets.audio_url(&stem), assets.image_url(&stem))
    };

    WordRootRecord {
        id: record_id(row, no),
        no,
        kind: text(&row.kind),
        element,
        meaning: text(&row.meaning),
        display_text_root: text(&row.display_text_root),
        example_word,
        ipa_transcription: text(&row.ipa_transcription),
        example_word_korean_meaning: text(&row.example_word_korean_meaning),
        morphological_breakdown_with_meaning: text(&row.morphological_breakdown),
        synonym: text(&row.synonym),
        antonym: text(&row.antonym),
        word_analysis: text(&row.word_analysis),
        example_sentences,
        image_url,
        audio_url_element,
        audio_url_example_word,
    }
}

/// `{element}_{type}_{nnn}` built from the raw (untrimmed) cells.
fn record_id(row: &SourceRow, no: i64) -> String {
    let element = sanitize(row.element.as_deref().unwrap_or("")).replace('-', "");
    let kind = sanitize(row.kind.as_deref().unwrap_or("")).replace(TYPE_CLASS_MARKER, "");

    format!("{element}_{kind}_{no:03}")
}

/// Integer text, or decimal text truncated toward zero ("3.0" from a numeric
/// spreadsheet cell). Anything else is treated as absent.
fn parse_ordinal(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim();

    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }

    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f.trunc() as i64)
}

fn text(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn assets() -> AssetSettings {
        AssetSettings {
            base_url: "https://assets.test/wordroot/".into(),
            audio_dir: "audios/".into(),
            image_dir: "images/".into(),
        }
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn unhappy_row() -> SourceRow {
        SourceRow {
            no: some("1"),
            kind: some("prefix"),
            element: some("un-"),
            meaning: some("not"),
            example_word: some("unhappy"),
            sentences: [
                (some("He is unhappy."), some("그는 불행하다.")),
                (None, None),
            ],
            ..SourceRow::default()
        }
    }

    #[test]
    fn converts_prefix_row() {
        let record = convert_row(&unhappy_row(), 0, &assets());

        assert_eq!(record.id, "un_prefix_001");
        assert_eq!(record.no, 1);
        assert_eq!(record.kind, "prefix");
        assert_eq!(record.element, "un-");
        assert_eq!(record.meaning, "not");
        assert_eq!(
            record.example_sentences,
            vec![ExampleSentence {
                english: "He is unhappy.".into(),
                korean: "그는 불행하다.".into(),
            }]
        );
        assert_eq!(
            record.image_url,
            "https://assets.test/wordroot/images/unhappy.png"
        );
        assert_eq!(
            record.audio_url_example_word,
            "https://assets.test/wordroot/audios/unhappy.mp3"
        );
        assert_eq!(
            record.audio_url_element,
            "https://assets.test/wordroot/audios/un-.mp3"
        );
        assert_eq!(record.synonym, "");
        assert_eq!(record.word_analysis, "");
    }

    #[test]
    fn element_url_keeps_hyphen_but_id_strips_it() {
        let row = SourceRow {
            element: some("-ness"),
            kind: some("suffix"),
            no: some("7"),
            ..SourceRow::default()
        };
        let record = convert_row(&row, 0, &assets());

        assert_eq!(record.id, "ness_suffix_007");
        assert!(record.audio_url_element.ends_with("/-ness.mp3"));
    }

    #[test]
    fn missing_example_word_yields_no_word_urls() {
        let row = SourceRow {
            example_word: None,
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());

        assert_eq!(record.example_word, "");
        assert_eq!(record.image_url, "");
        assert_eq!(record.audio_url_example_word, "");
        assert!(!record.audio_url_element.is_empty());
    }

    #[test]
    fn missing_element_yields_no_element_url() {
        let row = SourceRow {
            element: None,
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());

        assert_eq!(record.audio_url_element, "");
        assert_eq!(record.id, "_prefix_001");
    }

    #[test]
    fn whitespace_only_example_word_counts_as_empty() {
        let row = SourceRow {
            example_word: some("   "),
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());

        assert_eq!(record.image_url, "");
        assert_eq!(record.audio_url_example_word, "");
    }

    #[test]
    fn word_that_sanitizes_to_nothing_still_gets_urls() {
        let row = SourceRow {
            example_word: some("불행한"),
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());

        assert_eq!(record.image_url, "https://assets.test/wordroot/images/.png");
        assert_eq!(
            record.audio_url_example_word,
            "https://assets.test/wordroot/audios/.mp3"
        );
    }

    #[test]
    fn missing_ordinal_falls_back_to_position() {
        let row = SourceRow {
            no: None,
            ..unhappy_row()
        };
        let record = convert_row(&row, 4, &assets());

        assert_eq!(record.no, 5);
        assert_eq!(record.id, "un_prefix_005");
    }

    #[test]
    fn unparseable_ordinal_falls_back_to_position() {
        let row = SourceRow {
            no: some("first"),
            ..unhappy_row()
        };
        assert_eq!(convert_row(&row, 9, &assets()).no, 10);

        let row = SourceRow {
            no: some("nan"),
            ..unhappy_row()
        };
        assert_eq!(convert_row(&row, 2, &assets()).no, 3);
    }

    #[test]
    fn decimal_ordinal_is_truncated() {
        assert_eq!(parse_ordinal(Some("12.0")), Some(12));
        assert_eq!(parse_ordinal(Some(" 3.9 ")), Some(3));
        assert_eq!(parse_ordinal(Some("42")), Some(42));
        assert_eq!(parse_ordinal(Some("")), None);
        assert_eq!(parse_ordinal(None), None);
    }

    #[test]
    fn large_ordinal_is_not_truncated_in_id() {
        let row = SourceRow {
            no: some("1234"),
            ..unhappy_row()
        };
        assert_eq!(convert_row(&row, 0, &assets()).id, "un_prefix_1234");
    }

    #[test]
    fn scalars_are_trimmed() {
        let row = SourceRow {
            meaning: some("  not \n"),
            ipa_transcription: some("\t/ʌnˈhæpi/ "),
            synonym: some(" sad "),
            antonym: some(" happy"),
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());

        assert_eq!(record.meaning, "not");
        assert_eq!(record.ipa_transcription, "/ʌnˈhæpi/");
        assert_eq!(record.synonym, "sad");
        assert_eq!(record.antonym, "happy");
    }

    #[test]
    fn id_uses_raw_cells_and_url_uses_trimmed_field() {
        let row = SourceRow {
            element: some(" un- "),
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());

        assert_eq!(record.element, "un-");
        assert_eq!(record.id, "_un__prefix_001");
        assert!(record.audio_url_element.ends_with("/un-.mp3"));
    }

    #[test]
    fn korean_type_marker_is_removed_from_id() {
        let row = SourceRow {
            kind: some("접두사"),
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());

        assert_eq!(record.kind, "접두사");
        assert_eq!(record.id, "un__001");
    }

    #[test]
    fn example_sentences_skip_empty_slots_and_keep_order() {
        let row = SourceRow {
            sentences: [
                (some("  "), some("")),
                (some("Second."), None),
            ],
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());
        assert_eq!(
            record.example_sentences,
            vec![ExampleSentence {
                english: "Second.".into(),
                korean: String::new(),
            }]
        );

        let row = SourceRow {
            sentences: [
                (some("One."), some("하나.")),
                (None, some("둘.")),
            ],
            ..unhappy_row()
        };
        let record = convert_row(&row, 0, &assets());
        assert_eq!(record.example_sentences.len(), 2);
        assert_eq!(record.example_sentences[0].english, "One.");
        assert_eq!(record.example_sentences[1].korean, "둘.");

        let record = convert_row(&SourceRow::default(), 0, &assets());
        assert!(record.example_sentences.is_empty());
    }

    #[test]
    fn distinct_triples_give_distinct_ids() {
        let triples = [
            ("un-", "prefix", "1"),
            ("un-", "prefix", "2"),
            ("un-", "suffix", "1"),
            ("re-", "prefix", "1"),
            ("dis", "root", "10"),
        ];

        let mut ids: Vec<String> = triples
            .iter()
            .map(|(element, kind, no)| {
                let row = SourceRow {
                    element: some(element),
                    kind: some(kind),
                    no: some(no),
                    ..SourceRow::default()
                };
                convert_row(&row, 0, &assets()).id
            })
            .collect();

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), triples.len());
    }

    #[test]
    fn empty_row_produces_blank_record() {
        let record = convert_row(&SourceRow::default(), 0, &assets());

        assert_eq!(record.id, "__001");
        assert_eq!(record.no, 1);
        assert_eq!(record.kind, "");
        assert_eq!(record.image_url, "");
        assert_eq!(record.audio_url_element, "");
        assert_eq!(record.audio_url_example_word, "");
    }

    fn triple() -> impl Strategy<Value = (String, String, i64)> {
        ("-?[a-z]{1,6}-?", "[a-z]{1,8}", 1_i64..2000)
    }

    proptest! {
        #[test]
        fn ids_differ_exactly_when_triples_differ(a in triple(), b in triple()) {
            let id_of = |(element, kind, no): &(String, String, i64)| {
                let row = SourceRow {
                    element: Some(element.clone()),
                    kind: Some(kind.clone()),
                    no: Some(no.to_string()),
                    ..SourceRow::default()
                };
                convert_row(&row, 0, &assets()).id
            };
            // Hyphens never reach the id, so compare triples without them.
            let key = |(element, kind, no): &(String, String, i64)| {
                (element.replace('-', ""), kind.clone(), *no)
            };

            prop_assert_eq!(id_of(&a) == id_of(&b), key(&a) == key(&b));
        }
    }
}
