//! Startup validation of the business error catalog.
//!
//! The catalog is only usable once every business code has been shown to be
//! unique. [`init`] performs that check exactly once per process and hands out
//! a `&'static Registry` afterwards; a duplicate aborts startup with
//! [`RegistryError::DuplicateCode`].
//!
//! ```rust
//! use bizcode_common::errors::BizError;
//! use bizcode_common::registry;
//!
//! let registry = registry::init()?;
//! assert_eq!(registry.by_code(5004), Some(BizError::DuplicateKey));
//! # Ok::<(), bizcode_common::registry::RegistryError>(())
//! ```

use crate::errors::{BizError, ErrorDefinition};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, error};

/// Fatal catalog definition defects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two or more variants share a business code.
    #[error("Duplicate business code {code} shared by {}", .variants.join(", "))]
    DuplicateCode { code: u32, variants: Vec<String> },
}

/// A key that appears more than once, with the labels of every item carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate<K> {
    pub key: K,
    pub labels: Vec<String>,
}

/// Checks that `key` is distinct across `items` in a single pass.
///
/// Stops at the first repeated key. The returned [`Duplicate`] lists the
/// labels of all items sharing that key, in input order.
pub fn check_duplicates<T, K, F, L>(items: &[T], key: F, label: L) -> Result<(), Duplicate<K>>
where
    K: Eq + Hash + Copy,
    F: Fn(&T) -> K,
    L: Fn(&T) -> String,
{
    let mut seen: HashMap<K, usize> = HashMap::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        let k = key(item);
        match seen.entry(k) {
            Entry::Vacant(slot) => {
                slot.insert(idx);
            }
            Entry::Occupied(first) => {
                // Nothing between the first holder and `idx` shares the key,
                // so the rest only needs scanning from `idx` on.
                let labels = std::iter::once(&items[*first.get()])
                    .chain(items[idx..].iter().filter(|other| key(other) == k))
                    .map(&label)
                    .collect();
                return Err(Duplicate { key: k, labels });
            }
        }
    }

    Ok(())
}

/// Validates that business codes are unique across `definitions`.
///
/// Pure: running it again on the same input gives the same result.
pub fn validate(definitions: &[ErrorDefinition]) -> Result<(), RegistryError> {
    check_duplicates(
        definitions,
        |def| def.biz_code,
        |def| def.name.to_string(),
    )
    .map_err(|dup| RegistryError::DuplicateCode {
        code: dup.key,
        variants: dup.labels,
    })
}

/// The validated, read-only business error catalog.
#[derive(Debug)]
pub struct Registry {
    definitions: Vec<ErrorDefinition>,
    variants: Vec<Option<BizError>>,
    by_code: HashMap<u32, usize>,
}

impl Registry {
    /// Materializes the shipped catalog and validates it.
    pub fn build() -> Result<Self, RegistryError> {
        let definitions = BizError::all().iter().map(BizError::definition).collect();
        let variants = BizError::all().iter().copied().map(Some).collect();
        Self::assemble(definitions, variants)
    }

    /// Validates an arbitrary catalog, e.g. one assembled by a test.
    ///
    /// Definitions whose name is not a [`BizError`] identifier are kept but
    /// resolve to no variant in [`Registry::by_code`].
    pub fn from_definitions(definitions: &[ErrorDefinition]) -> Result<Self, RegistryError> {
        let variants = definitions
            .iter()
            .map(|def| BizError::from_name(def.name))
            .collect();
        Self::assemble(definitions.to_vec(), variants)
    }

    fn assemble(
        definitions: Vec<ErrorDefinition>,
        variants: Vec<Option<BizError>>,
    ) -> Result<Self, RegistryError> {
        validate(&definitions)?;

        let by_code = definitions
            .iter()
            .enumerate()
            .map(|(idx, def)| (def.biz_code, idx))
            .collect();

        Ok(Self {
            definitions,
            variants,
            by_code,
        })
    }

    /// Returns the attributes attached to `error`.
    ///
    /// Reads the static table directly; the table needs no initialization,
    /// so this does not depend on which catalog the registry was built from.
    #[must_use]
    pub fn lookup(&self, error: BizError) -> ErrorDefinition {
        error.definition()
    }

    /// Returns the variant owning `code`, if any.
    #[must_use]
    pub fn by_code(&self, code: u32) -> Option<BizError> {
        self.by_code.get(&code).and_then(|idx| self.variants[*idx])
    }

    /// Returns the definition owning `code`, if any.
    #[must_use]
    pub fn definition_by_code(&self, code: u32) -> Option<&ErrorDefinition> {
        self.by_code.get(&code).map(|idx| &self.definitions[*idx])
    }

    /// Returns every definition in declaration order.
    #[must_use]
    pub fn definitions(&self) -> &[ErrorDefinition] {
        &self.definitions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Validates the catalog and installs it as process-wide state.
///
/// Must run before the process starts serving. Later calls return the
/// already installed registry.
pub fn init() -> Result<&'static Registry, RegistryError> {
    install(&REGISTRY, Registry::build)
}

/// Builds a registry into `cell` unless one is already there.
///
/// Nothing is installed when `build` fails.
fn install<F>(
    cell: &'static OnceLock<Registry>,
    build: F,
) -> Result<&'static Registry, RegistryError>
where
    F: FnOnce() -> Result<Registry, RegistryError>,
{
    if let Some(registry) = cell.get() {
        return Ok(registry);
    }

    let registry = build().inspect_err(|err| {
        error!(error = %err, "Business error catalog failed validation");
    })?;
    debug!(variants = registry.len(), "Business error catalog validated");

    Ok(cell.get_or_init(|| registry))
}

/// Returns the registry if [`init`] has succeeded.
#[must_use]
pub fn get() -> Option<&'static Registry> {
    REGISTRY.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorLogType;

    fn scenario_catalog() -> Vec<ErrorDefinition> {
        vec![
            ErrorDefinition::new("A", 500, 5000),
            ErrorDefinition::new("B", 500, 5004).verbose(),
            ErrorDefinition::new("C", 400, 5200),
        ]
    }

    #[test]
    fn test_scenario_catalog_validates() {
        let catalog = scenario_catalog();
        assert_eq!(validate(&catalog), Ok(()));

        let b = catalog[1];
        assert_eq!(
            (b.http_status, b.biz_code, b.log_type),
            (500, 5004, ErrorLogType::Verbose)
        );
        assert!(b.is_verbose());
        assert!(!catalog[0].is_verbose());
    }

    #[test]
    fn test_scenario_collision_reports_code() {
        let mut catalog = scenario_catalog();
        catalog[2].biz_code = 5000;

        let err = validate(&catalog).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateCode {
                code: 5000,
                variants: vec!["A".to_string(), "C".to_string()],
            }
        );
        assert!(err.to_string().contains("5000"));
    }

    #[test]
    fn test_reports_every_variant_sharing_the_code() {
        let catalog = vec![
            ErrorDefinition::new("FIRST", 500, 7),
            ErrorDefinition::new("OTHER", 500, 8),
            ErrorDefinition::new("SECOND", 400, 7),
            ErrorDefinition::new("LATER", 400, 9),
            ErrorDefinition::new("THIRD", 409, 7),
        ];

        match validate(&catalog) {
            Err(RegistryError::DuplicateCode { code, variants }) => {
                assert_eq!(code, 7);
                assert_eq!(variants, vec!["FIRST", "SECOND", "THIRD"]);
            }
            other => panic!("expected duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_first_collision_wins() {
        let catalog = vec![
            ErrorDefinition::new("A", 500, 1),
            ErrorDefinition::new("B", 500, 2),
            ErrorDefinition::new("C", 500, 2),
            ErrorDefinition::new("D", 500, 1),
        ];

        let err = validate(&catalog).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCode { code: 2, .. }));
    }

    #[test]
    fn test_empty_catalog_validates() {
        assert_eq!(validate(&[]), Ok(()));
    }

    #[test]
    fn test_http_status_is_not_validated() {
        let catalog = vec![ErrorDefinition::new("ODD", 999, 1)];
        assert_eq!(validate(&catalog), Ok(()));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let catalog = scenario_catalog();
        let first = validate(&catalog);
        let second = validate(&catalog);
        assert_eq!(first, second);
        assert!(first.is_ok());
    }

    #[test]
    fn test_check_duplicates_generic_keys() {
        let words = ["alpha", "beta", "gamma", "apex"];
        let dup = check_duplicates(&words, |w| w.as_bytes()[0], |w| (*w).to_string())
            .unwrap_err();
        assert_eq!(dup.key, b'a');
        assert_eq!(dup.labels, vec!["alpha", "apex"]);

        assert!(check_duplicates(&words, |w| w.len(), |w| (*w).to_string()).is_err());
        assert!(check_duplicates(&[1u8, 2, 3], |n| *n, |n| n.to_string()).is_ok());
    }

    #[test]
    fn test_build_real_catalog() {
        let registry = Registry::build().expect("catalog must validate");
        assert_eq!(registry.len(), BizError::all().len());
        assert!(!registry.is_empty());

        for error in BizError::all() {
            assert_eq!(registry.by_code(error.biz_code()), Some(*error));
            assert_eq!(registry.lookup(*error), error.definition());
        }
        assert_eq!(registry.by_code(4999), None);
        assert_eq!(registry.definitions()[0].name, "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_from_definitions_rejects_duplicate() {
        let mut catalog = scenario_catalog();
        catalog[2].biz_code = 5000;

        let err = Registry::from_definitions(&catalog).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCode { code: 5000, .. }));
    }

    #[test]
    fn test_from_definitions_indexes_codes() {
        let catalog = vec![
            ErrorDefinition::new("REDIRECT", 302, 5011),
            ErrorDefinition::new("NOT_IN_ENUM", 400, 9000),
        ];
        let registry = Registry::from_definitions(&catalog).expect("distinct codes");

        assert_eq!(registry.by_code(5011), Some(BizError::Redirect));
        assert_eq!(registry.by_code(9000), None);
        assert_eq!(
            registry.definition_by_code(9000).map(|def| def.name),
            Some("NOT_IN_ENUM")
        );
        assert_eq!(registry.definition_by_code(1), None);
    }

    #[test]
    fn test_lookup_reads_static_table() {
        let synthetic = Registry::from_definitions(&scenario_catalog()).expect("distinct codes");
        let real = Registry::build().expect("catalog must validate");

        for error in [BizError::DuplicateKey, BizError::PayloadTooLarge] {
            assert_eq!(synthetic.lookup(error), error.definition());
            assert_eq!(synthetic.lookup(error), real.lookup(error));
        }
    }

    #[test]
    fn test_failed_install_leaves_cell_empty() {
        static CELL: OnceLock<Registry> = OnceLock::new();
        let mut catalog = scenario_catalog();
        catalog[1].biz_code = 5200;

        let err = install(&CELL, || Registry::from_definitions(&catalog)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateCode {
                code: 5200,
                variants: vec!["B".to_string(), "C".to_string()],
            }
        );
        assert!(CELL.get().is_none());

        let installed = install(&CELL, || Registry::from_definitions(&scenario_catalog()))
            .expect("valid catalog installs");
        assert_eq!(installed.len(), 3);
        assert!(CELL.get().is_some());
    }

    #[test]
    fn test_init_returns_same_instance() {
        let first = init().expect("catalog must validate");
        let second = init().expect("catalog must validate");
        assert!(std::ptr::eq(first, second));
        assert!(get().is_some());
    }
}
