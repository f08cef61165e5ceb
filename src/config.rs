use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of the bundled Life soup run by the `lattice` binary.
/// Missing JSON fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Lattice
    pub width: i32,
    pub height: i32,

    // Seeding
    pub seed: u64,
    pub density: f32,

    // Rule, as neighbour counts: B3/S23 is birth [3], survive [2, 3]
    pub birth: Vec<u8>,
    pub survive: Vec<u8>,

    // Run
    pub generations: u64,
    pub report_every: u64,
    pub parallel: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            seed: 42,
            density: 0.35,
            birth: vec![3],
            survive: vec![2, 3],
            generations: 500,
            report_every: 100,
            parallel: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed params: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid params: {0}")]
    Invalid(String),
}

impl Params {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let params: Params = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::Invalid(format!(
                "lattice must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Invalid(format!(
                "density {} outside [0, 1]",
                self.density
            )));
        }
        if let Some(n) = self.birth.iter().chain(&self.survive).find(|&&n| n > 8) {
            return Err(ConfigError::Invalid(format!(
                "neighbour count {n} exceeds the 8 cells of a Moore neighbourhood"
            )));
        }
        if self.report_every == 0 {
            return Err(ConfigError::Invalid("report_every must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Params::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p = Params::from_json(r#"{ "width": 64, "parallel": false }"#).unwrap();
        assert_eq!(p.width, 64);
        assert!(!p.parallel);
        assert_eq!(p.height, Params::default().height);
        assert_eq!(p.survive, vec![2, 3]);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Params::from_json(r#"{ "height": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Params::from_json(r#"{ "density": 1.5 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Params::from_json(r#"{ "birth": [9] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Params::from_json("{ width: 3 }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = Params::load("/nonexistent/params.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
