//! Process-wide cache of CRC lookup tables.
//!
//! Tables are built on first use of a `(width, polynomial)` pair and shared
//! through `Arc` afterwards. A table is fully built before it is inserted, so
//! readers never observe a partial table. Concurrent first uses of the same
//! key may each build a table, but only the first one inserted is ever
//! handed out.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::crc::custom_crc::CustomCrc;
use crate::crc::params::CrcWidth;

/// Immutable 256-entry table for one polynomial at one width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTable {
    width: CrcWidth,
    polynomial: u32,
    entries: [u32; 256],
}

impl LookupTable {
    pub fn new(polynomial: u32, width: CrcWidth) -> Self {
        Self {
            width,
            polynomial,
            entries: CustomCrc::generate_lookup_table(polynomial, width),
        }
    }

    pub fn width(&self) -> CrcWidth {
        self.width
    }

    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    pub fn entries(&self) -> &[u32; 256] {
        &self.entries
    }

    pub fn get(&self, index: u8) -> u32 {
        self.entries[index as usize]
    }
}

type TableKey = (CrcWidth, u32);

/// Cache of lookup tables keyed by `(width, polynomial)`.
pub struct TableCache {
    tables: RwLock<HashMap<TableKey, Arc<LookupTable>>>,
}

impl TableCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Get the global cache shared by every lookup engine that does not
    /// bring its own.
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<TableCache> = OnceLock::new();
        INSTANCE.get_or_init(TableCache::new)
    }

    /// Returns the table for `polynomial` at `width`, building it on first use.
    pub fn get_or_build(&self, polynomial: u32, width: CrcWidth) -> Arc<LookupTable> {
        let key = (width, polynomial);

        // Entries are never mutated after insertion, so a poisoned map is
        // still consistent.
        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            trace!(width = width.bits(), polynomial, "crc table cache hit");
            return Arc::clone(table);
        }

        let built = Arc::new(LookupTable::new(polynomial, width));
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let table = tables.entry(key).or_insert_with(|| {
            debug!(
                width = width.bits(),
                polynomial = format_args!("{polynomial:#X}"),
                "built crc lookup table"
            );
            built
        });
        Arc::clone(table)
    }

    pub fn contains(&self, polynomial: u32, width: CrcWidth) -> bool {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&(width, polynomial))
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}
