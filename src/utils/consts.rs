pub const DEVELOPMENT: &str = "development";

pub const DEFAULT_CONFIG_FILE: &str = "langdetect.json";
pub const CONFIG_PATH_ENV: &str = "LANGDETECT_CONFIG";
pub const CONFIG_ENV_PREFIX: &str = "LANGDETECT_";

pub const SHORT_INPUT_TOKENS: usize = 5;
pub const DIACRITIC_SATURATION: f64 = 3.0;
