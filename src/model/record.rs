use serde::{Deserialize, Serialize};

/// One entry of the exported JSON array. Field order is the wire order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WordRootRecord {
    pub id: String,

    pub no: i64,

    #[serde(rename = "type")]
    pub kind: String,

    pub element: String,

    pub meaning: String,

    pub display_text_root: String,

    pub example_word: String,

    pub ipa_transcription: String,

    pub example_word_korean_meaning: String,

    pub morphological_breakdown_with_meaning: String,

    pub synonym: String,

    pub antonym: String,

    pub word_analysis: String,

    #[serde(default)]
    pub example_sentences: Vec<ExampleSentence>,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub audio_url_element: String,

    #[serde(default)]
    pub audio_url_example_word: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExampleSentence {
    #[serde(default)]
    pub english: String,

    #[serde(default)]
    pub korean: String,
}
