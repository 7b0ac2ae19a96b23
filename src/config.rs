//! Source-path configuration.
//!
//! The dashboard reads exactly two workbooks. By default they sit in the
//! working directory under the filenames the program office ships them
//! with; a YAML file or CLI flags can point elsewhere.

use crate::error::BoardResult;
use crate::store::WorkbookSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Key prefix for sheets from the MIS workbook
pub const CSR_MIS_PREFIX: &str = "CSR_MIS";
/// Key prefix for sheets from the plant data-input workbook
pub const JSPL_PREFIX: &str = "JSPL";

const DEFAULT_CSR_MIS: &str = "CSR MIS.xlsx";
const DEFAULT_JSPL_INPUT: &str = "JSPL CSR Data Input.xlsx";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the CSR MIS workbook
    #[serde(default = "default_csr_mis")]
    pub csr_mis: PathBuf,
    /// Path to the JSPL data-input workbook
    #[serde(default = "default_jspl_input")]
    pub jspl_input: PathBuf,
}

fn default_csr_mis() -> PathBuf {
    PathBuf::from(DEFAULT_CSR_MIS)
}

fn default_jspl_input() -> PathBuf {
    PathBuf::from(DEFAULT_JSPL_INPUT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csr_mis: default_csr_mis(),
            jspl_input: default_jspl_input(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file; unknown keys are an error
    pub fn from_file<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// The two workbook sources, in ingestion order
    pub fn sources(&self) -> [WorkbookSource; 2] {
        [
            WorkbookSource::new(&self.csr_mis, CSR_MIS_PREFIX),
            WorkbookSource::new(&self.jspl_input, JSPL_PREFIX),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_shipped_filenames() {
        let config = Config::default();
        assert_eq!(config.csr_mis, PathBuf::from("CSR MIS.xlsx"));
        assert_eq!(config.jspl_input, PathBuf::from("JSPL CSR Data Input.xlsx"));
    }

    #[test]
    fn sources_keep_mis_before_input() {
        let sources = Config::default().sources();
        assert_eq!(sources[0].prefix, "CSR_MIS");
        assert_eq!(sources[1].prefix, "JSPL");
    }

    #[test]
    fn yaml_overrides_both_paths() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "csr_mis: /data/mis.xlsx").unwrap();
        writeln!(file, "jspl_input: /data/input.xlsx").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.csr_mis, PathBuf::from("/data/mis.xlsx"));
        assert_eq!(config.jspl_input, PathBuf::from("/data/input.xlsx"));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "csr_mis: /data/mis.xlsx").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.jspl_input, PathBuf::from("JSPL CSR Data Input.xlsx"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "csr_miss: typo.xlsx").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
