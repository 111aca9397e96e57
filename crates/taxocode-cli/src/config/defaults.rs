use std::path::PathBuf;

pub struct DefaultsConfig {
    pub input_path: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("GenusSpecies.csv"),
        }
    }
}
