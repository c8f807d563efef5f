use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::debug;

use crate::models::{AddOutcome, PRODUCT_HEADER, RemoveOutcome};

/// How product names are normalized before they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCase {
    /// Fridge products are stored lower-case.
    Lower,
    /// Shopping list products are stored as entered.
    Verbatim,
}

impl ItemCase {
    #[must_use]
    pub fn normalize(self, name: &str) -> String {
        let name = name.trim();
        match self {
            ItemCase::Lower => name.to_lowercase(),
            ItemCase::Verbatim => name.to_string(),
        }
    }
}

/// Case-insensitive product name comparison.
#[must_use]
pub fn same_product(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// A single-column list of unique product names.
///
/// Implementations only provide reading and whole-store rewriting; every
/// mutation reads all rows, changes them in memory and writes all rows back.
pub trait RecordStore {
    fn case(&self) -> ItemCase;

    /// All products in insertion order, header excluded.
    fn list(&self) -> Result<Vec<String>>;

    /// Replace the stored products, keeping the header.
    fn replace_all(&mut self, items: &[String]) -> Result<()>;

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|item| same_product(item, name)))
    }

    fn add(&mut self, name: &str) -> Result<AddOutcome> {
        let normalized = self.case().normalize(name);
        if normalized.is_empty() {
            bail!("Product name cannot be empty");
        }

        let mut items = self.list()?;
        if items.iter().any(|item| same_product(item, &normalized)) {
            return Ok(AddOutcome::AlreadyExists(name.trim().to_string()));
        }

        items.push(normalized.clone());
        self.replace_all(&items)?;
        Ok(AddOutcome::Added(normalized))
    }

    /// Remove one product by name, or every product when `name` is `None`.
    ///
    /// Clearing the whole store only happens when `confirm` returns true.
    fn remove(
        &mut self,
        name: Option<&str>,
        confirm: &mut dyn FnMut() -> bool,
    ) -> Result<RemoveOutcome> {
        let items = self.list()?;

        let Some(name) = name else {
            if items.is_empty() {
                return Ok(RemoveOutcome::AlreadyEmpty);
            }
            if !confirm() {
                return Ok(RemoveOutcome::Cancelled);
            }
            self.replace_all(&[])?;
            return Ok(RemoveOutcome::Cleared(items.len()));
        };

        let name = name.trim();
        let remaining: Vec<String> = items
            .iter()
            .filter(|item| !same_product(item, name))
            .cloned()
            .collect();

        if remaining.len() == items.len() {
            return Ok(RemoveOutcome::NotFound(name.to_string()));
        }

        self.replace_all(&remaining)?;
        Ok(RemoveOutcome::Removed(name.to_string()))
    }
}

/// Products kept in a CSV file with a `product_name` header row.
pub struct CsvStore {
    path: PathBuf,
    case: ItemCase,
}

impl CsvStore {
    /// Open a store, creating the file (and its directory) with only the
    /// header row when it does not exist yet.
    pub fn open(path: &Path, case: ItemCase) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let store = CsvStore {
            path: path.to_path_buf(),
            case,
        };
        if !path.is_file() {
            debug!("creating {}", path.display());
            store.write_items(&[])?;
        }
        Ok(store)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_items(&self, items: &[String]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        wtr.write_record([PRODUCT_HEADER])?;
        for item in items {
            wtr.write_record([item])?;
        }
        wtr.flush()
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!("wrote {} product(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}

impl RecordStore for CsvStore {
    fn case(&self) -> ItemCase {
        self.case
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let mut items = Vec::new();
        for (line_num, result) in rdr.records().enumerate() {
            let record = result.with_context(|| {
                format!("Failed to parse {} row {}", self.path.display(), line_num + 2)
            })?;
            let name = record.get(0).unwrap_or("");
            if name.is_empty() {
                continue;
            }
            items.push(name.to_string());
        }
        Ok(items)
    }

    fn replace_all(&mut self, items: &[String]) -> Result<()> {
        self.write_items(items)
    }
}

/// In-memory store with the same semantics as [`CsvStore`].
#[derive(Debug, Clone)]
pub struct MemoryStore {
    items: Vec<String>,
    case: ItemCase,
}

impl MemoryStore {
    #[must_use]
    pub fn new(case: ItemCase) -> Self {
        Self {
            items: Vec::new(),
            case,
        }
    }

    #[must_use]
    pub fn with_items(case: ItemCase, items: &[&str]) -> Self {
        Self {
            items: items.iter().map(ToString::to_string).collect(),
            case,
        }
    }
}

impl RecordStore for MemoryStore {
    fn case(&self) -> ItemCase {
        self.case
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.items.clone())
    }

    fn replace_all(&mut self, items: &[String]) -> Result<()> {
        self.items = items.to_vec();
        Ok(())
    }
}
