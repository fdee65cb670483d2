// Input and output locations for a corpus run.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable naming the default input file.
pub const INPUT_ENV: &str = "MALAY_STEMMER_INPUT";
/// Environment variable naming the default output directory.
pub const OUTPUT_ENV: &str = "MALAY_STEMMER_OUTPUT";

const FALLBACK_INPUT: &str = "input.txt";
const FALLBACK_OUTPUT: &str = "output";

/// Where to read text from and where to write reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Text file to analyse.
    pub input: PathBuf,
    /// Directory receiving the report files. Created if missing.
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Default locations from the environment, falling back to `input.txt`
    /// and `output/`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve command-line paths against the defaults. With `use_default`,
    /// or when neither path is given, both defaults are used; otherwise a
    /// missing path takes its default.
    pub fn resolve(
        input: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        use_default: bool,
    ) -> Result<Self> {
        let defaults = Self::from_env()?;
        Ok(defaults.with_overrides(input, output_dir, use_default))
    }

    fn with_overrides(
        self,
        input: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        use_default: bool,
    ) -> Self {
        if use_default || (input.is_none() && output_dir.is_none()) {
            tracing::info!(input = %self.input.display(), output = %self.output_dir.display(), "using default paths");
            return self;
        }
        Self {
            input: input.unwrap_or(self.input),
            output_dir: output_dir.unwrap_or(self.output_dir),
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let path_var = |key: &str, fallback: &str| -> Result<PathBuf> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => {
                    Err(Error::Config(format!("{key} is set but empty")))
                }
                Some(value) => Ok(PathBuf::from(value)),
                None => Ok(PathBuf::from(fallback)),
            }
        };

        Ok(Self {
            input: path_var(INPUT_ENV, FALLBACK_INPUT)?,
            output_dir: path_var(OUTPUT_ENV, FALLBACK_OUTPUT)?,
        })
    }
}
