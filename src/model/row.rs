pub const COLUMN_NO: &str = "No";
pub const COLUMN_TYPE: &str = "type";
pub const COLUMN_ELEMENT: &str = "element";
pub const COLUMN_MEANING_ELEMENT: &str = "meaning";
pub const COLUMN_DISPLAY_TEXT_ROOT: &str = "pre_suf_root_korean_meaning";
pub const COLUMN_EXAMPLE_WORD: &str = "english_word";
pub const COLUMN_IPA_TRANSCRIPTION: &str = "ipa_transcription";
pub const COLUMN_EXAMPLE_WORD_KOREAN_MEANING: &str = "korean_meaning";
pub const COLUMN_MORPHOLOGICAL_BREAKDOWN: &str = "morphological_breakdown_with_meaning";
pub const COLUMN_SYNONYM: &str = "synonym";
pub const COLUMN_ANTONYM: &str = "antonym";
pub const COLUMN_WORD_ANALYSIS: &str = "word_analysis";

/// (english, korean) column pairs, one per sentence slot, in output order.
pub const EXAMPLE_SENTENCE_COLUMNS: [(&str, &str); 2] = [
    ("english_example_sentence1", "korean_example_translation1"),
    ("english_example_sentence2", "korean_example_translation2"),
];

pub const REQUIRED_COLUMNS: [&str; 16] = [
    COLUMN_NO,
    COLUMN_TYPE,
    COLUMN_ELEMENT,
    COLUMN_MEANING_ELEMENT,
    COLUMN_DISPLAY_TEXT_ROOT,
    COLUMN_EXAMPLE_WORD,
    COLUMN_IPA_TRANSCRIPTION,
    COLUMN_EXAMPLE_WORD_KOREAN_MEANING,
    COLUMN_MORPHOLOGICAL_BREAKDOWN,
    COLUMN_SYNONYM,
    COLUMN_ANTONYM,
    COLUMN_WORD_ANALYSIS,
    EXAMPLE_SENTENCE_COLUMNS[0].0,
    EXAMPLE_SENTENCE_COLUMNS[1].0,
    EXAMPLE_SENTENCE_COLUMNS[0].1,
    EXAMPLE_SENTENCE_COLUMNS[1].1,
];

/// One spreadsheet row as raw cell text. `None` means the cell was absent,
/// blank, or an error value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    pub no: Option<String>,
    pub kind: Option<String>,
    pub element: Option<String>,
    pub meaning: Option<String>,
    pub display_text_root: Option<String>,
    pub example_word: Option<String>,
    pub ipa_transcription: Option<String>,
    pub example_word_korean_meaning: Option<String>,
    pub morphological_breakdown: Option<String>,
    pub synonym: Option<String>,
    pub antonym: Option<String>,
    pub word_analysis: Option<String>,

    /// (english, korean) per sentence slot.
    pub sentences: [(Option<String>, Option<String>); 2],
}

impl SourceRow {
    /// Builds a row by asking `cell` for each column by name.
    pub fn from_columns<F>(mut cell: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let [(en1, ko1), (en2, ko2)] = EXAMPLE_SENTENCE_COLUMNS;

        SourceRow {
            no: cell(COLUMN_NO),
            kind: cell(COLUMN_TYPE),
            element: cell(COLUMN_ELEMENT),
            meaning: cell(COLUMN_MEANING_ELEMENT),
            display_text_root: cell(COLUMN_DISPLAY_TEXT_ROOT),
            example_word: cell(COLUMN_EXAMPLE_WORD),
            ipa_transcription: cell(COLUMN_IPA_TRANSCRIPTION),
            example_word_korean_meaning: cell(COLUMN_EXAMPLE_WORD_KOREAN_MEANING),
            morphological_breakdown: cell(COLUMN_MORPHOLOGICAL_BREAKDOWN),
            synonym: cell(COLUMN_SYNONYM),
            antonym: cell(COLUMN_ANTONYM),
            word_analysis: cell(COLUMN_WORD_ANALYSIS),
            sentences: [(cell(en1), cell(ko1)), (cell(en2), cell(ko2))],
        }
    }
}
