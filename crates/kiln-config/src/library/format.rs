use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format for a library artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Native ES module (`import`/`export`)
    #[serde(alias = "esm")]
    Es,
    /// Universal module definition (AMD, CommonJS and a browser global)
    Umd,
    /// Immediately invoked function expression assigned to a global
    Iife,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Es, OutputFormat::Umd, OutputFormat::Iife];

    /// Short name used in file names and config (`es`, `umd`, `iife`).
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Es => "es",
            OutputFormat::Umd => "umd",
            OutputFormat::Iife => "iife",
        }
    }

    /// Native module formats import externals by specifier; every other
    /// format reads them from a global variable.
    pub fn is_module(&self) -> bool {
        matches!(self, OutputFormat::Es)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es" | "esm" => Ok(OutputFormat::Es),
            "umd" => Ok(OutputFormat::Umd),
            "iife" => Ok(OutputFormat::Iife),
            other => Err(format!(
                "unknown output format '{}' (expected es, umd or iife)",
                other
            )),
        }
    }
}
