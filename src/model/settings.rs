use std::path::PathBuf;

pub const INPUT_FILE: &str = "final_structured_data_with_all_info_중급예문_최종.xlsx";
pub const OUTPUT_DIR: &str = "wordroot-project/data";
pub const OUTPUT_FILE: &str = "wordroot_data.json";

/// Must include the trailing slash; asset directories are appended verbatim.
pub const ASSETS_BASE_URL: &str = "https://wordsbean.github.io/wordroot-asset/wordroot-project/";
pub const AUDIO_DIR: &str = "audios/";
pub const IMAGE_DIR: &str = "images/";

#[derive(Debug, Clone)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub assets: AssetSettings,
}

impl Settings {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input_path: PathBuf::from(INPUT_FILE),
            output_dir: PathBuf::from(OUTPUT_DIR),
            output_file: OUTPUT_FILE.to_string(),
            assets: AssetSettings::default(),
        }
    }
}

/// URL parts for composed asset links. Plain concatenation, no URL parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSettings {
    pub base_url: String,
    pub audio_dir: String,
    pub image_dir: String,
}

impl AssetSettings {
    pub fn audio_url(&self, stem: &str) -> String {
        format!("{}{}{}.mp3", self.base_url, self.audio_dir, stem)
    }

    pub fn image_url(&self, stem: &str) -> String {
        format!("{}{}{}.png", self.base_url, self.image_dir, stem)
    }
}

impl Default for AssetSettings {
    fn default() -> Self {
        AssetSettings {
            base_url: ASSETS_BASE_URL.to_string(),
            audio_dir: AUDIO_DIR.to_string(),
            image_dir: IMAGE_DIR.to_string(),
        }
    }
}
