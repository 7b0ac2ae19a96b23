//! The table store: every non-empty sheet from the configured workbooks,
//! keyed by `{prefix}_{sheet name}`.

use crate::error::BoardResult;
use crate::excel::WorkbookReader;
use crate::types::Table;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// One configured workbook: a filesystem path plus the prefix that
/// disambiguates its sheets from the other source's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookSource {
    pub path: PathBuf,
    pub prefix: String,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            prefix: prefix.into(),
        }
    }
}

/// Immutable mapping from composite key to table, built once at startup.
///
/// Insertion order is observable: sources are ingested in configured order
/// and sheets in workbook order, and the substring fallback in
/// [`TableStore::resolve_program`] depends on it.
#[derive(Debug)]
pub struct TableStore {
    keys: Vec<String>,
    tables: HashMap<String, Table>,
    prefixes: Vec<String>,
}

impl TableStore {
    /// Ingest every sheet from every source, in order.
    ///
    /// A source that is missing or cannot be opened aborts construction.
    /// A single sheet that fails to parse is logged and skipped; sheets
    /// with no data rows are dropped without a warning.
    pub fn load(sources: &[WorkbookSource]) -> BoardResult<Self> {
        let mut store = Self {
            keys: Vec::new(),
            tables: HashMap::new(),
            prefixes: sources.iter().map(|s| s.prefix.clone()).collect(),
        };

        for source in sources {
            let mut reader = WorkbookReader::open(&source.path)?;
            for sheet_name in reader.sheet_names() {
                let table = match reader.read_sheet(&sheet_name) {
                    Ok(table) => table,
                    Err(err) => {
                        warn!(
                            sheet = %sheet_name,
                            source = %source.prefix,
                            error = %err,
                            "skipping sheet that failed to parse"
                        );
                        continue;
                    }
                };
                if table.is_empty() {
                    continue;
                }
                store.insert(format!("{}_{}", source.prefix, sheet_name), table);
            }
        }

        Ok(store)
    }

    fn insert(&mut self, key: String, table: Table) {
        if self.tables.insert(key.clone(), table).is_none() {
            self.keys.push(key);
        }
    }

    /// Exact, case-sensitive key lookup
    pub fn get(&self, key: &str) -> Option<&Table> {
        self.tables.get(key)
    }

    /// All composite keys in insertion order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// An empty store is a valid construction result; whether it is an
    /// error is the caller's call.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Resolve a loose program label to its table.
    ///
    /// The probe order is fixed: each prefix with the name as given, then
    /// each prefix with underscores turned into spaces, then the first
    /// stored key containing the name case-insensitively. The two source
    /// workbooks use inconsistent human-authored sheet names (spaces vs.
    /// underscores, abbreviations), and callers only know a loose label.
    ///
    /// The substring pass matches against the whole key, prefix included,
    /// so a very short label can hit an unrelated sheet. Deployed behavior,
    /// kept as is.
    pub fn resolve_program(&self, name: &str) -> Option<&Table> {
        let spaced = name.replace('_', " ");
        let exact = self
            .prefixes
            .iter()
            .map(|p| format!("{}_{}", p, name))
            .chain(self.prefixes.iter().map(|p| format!("{}_{}", p, spaced)));
        for key in exact {
            if let Some(table) = self.tables.get(&key) {
                return Some(table);
            }
        }

        let needle = name.to_lowercase();
        self.keys
            .iter()
            .find(|key| key.to_lowercase().contains(&needle))
            .map(|key| &self.tables[key])
    }

    /// Every entry whose key contains "master", in insertion order
    pub fn master_tables(&self) -> Vec<(&str, &Table)> {
        self.keys
            .iter()
            .filter(|key| key.to_lowercase().contains("master"))
            .map(|key| (key.as_str(), &self.tables[key]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue;
    use pretty_assertions::assert_eq;

    fn table(name: &str) -> Table {
        Table::new(
            name.to_string(),
            vec!["Value".to_string()],
            vec![vec![CellValue::Int(1)]],
        )
    }

    fn store_with(keys: &[&str]) -> TableStore {
        let mut store = TableStore {
            keys: Vec::new(),
            tables: HashMap::new(),
            prefixes: vec!["CSR_MIS".to_string(), "JSPL".to_string()],
        };
        for key in keys {
            store.insert(key.to_string(), table(key));
        }
        store
    }

    #[test]
    fn get_is_exact_and_case_sensitive() {
        let store = store_with(&["CSR_MIS_Data"]);
        assert!(store.get("CSR_MIS_Data").is_some());
        assert!(store.get("csr_mis_data").is_none());
        assert!(store.get("CSR_MIS_Data ").is_none());
    }

    #[test]
    fn keys_keep_insertion_order() {
        let store = store_with(&["CSR_MIS_B", "CSR_MIS_A", "JSPL_C"]);
        assert_eq!(store.keys(), ["CSR_MIS_B", "CSR_MIS_A", "JSPL_C"]);
    }

    #[test]
    fn resolve_prefers_first_source_on_exact_match() {
        let store = store_with(&["CSR_MIS_Foo", "JSPL_Foo_Bar"]);
        let hit = store.resolve_program("Foo").unwrap();
        assert_eq!(hit.name(), "CSR_MIS_Foo");
    }

    #[test]
    fn resolve_tries_both_exact_keys_before_space_conversion() {
        let store = store_with(&["JSPL_Kishori_Express", "CSR_MIS_Kishori Express"]);
        let hit = store.resolve_program("Kishori_Express").unwrap();
        assert_eq!(hit.name(), "JSPL_Kishori_Express");
    }

    #[test]
    fn resolve_converts_underscores_in_first_source_order() {
        // No exact key matches; the spaced probe hits the first prefix
        // before the second.
        let store = store_with(&["JSPL_Kishori Express", "CSR_MIS_Kishori Express"]);
        let hit = store.resolve_program("Kishori_Express").unwrap();
        assert_eq!(hit.name(), "CSR_MIS_Kishori Express");
    }

    #[test]
    fn resolve_falls_back_to_case_insensitive_substring() {
        let store = store_with(&["JSPL_SwastiExpressProgram"]);
        let hit = store.resolve_program("swasti").unwrap();
        assert_eq!(hit.name(), "JSPL_SwastiExpressProgram");
    }

    #[test]
    fn substring_fallback_takes_earliest_inserted_key() {
        let store = store_with(&["CSR_MIS_Vatsalya Camp", "JSPL_Vatsalya Register"]);
        let hit = store.resolve_program("vatsalya").unwrap();
        assert_eq!(hit.name(), "CSR_MIS_Vatsalya Camp");
    }

    #[test]
    fn resolve_misses_return_none() {
        let store = store_with(&["CSR_MIS_Data"]);
        assert!(store.resolve_program("nonexistent").is_none());
    }

    #[test]
    fn master_tables_filters_any_case() {
        let store = store_with(&["CSR_MIS_State Master", "CSR_MIS_Data", "JSPL_master_log"]);
        let masters: Vec<&str> = store.master_tables().into_iter().map(|(k, _)| k).collect();
        assert_eq!(masters, ["CSR_MIS_State Master", "JSPL_master_log"]);
    }

    #[test]
    fn empty_store_is_valid() {
        let store = store_with(&[]);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.resolve_program("anything").is_none());
    }
}
