use std::sync::Arc;

use crate::crc::custom_crc::CustomCrc;
use crate::crc::params::CrcParams;
use crate::crc::table_cache::{LookupTable, TableCache};
use crate::crc::CrcDigest;

/// Incremental CRC over any validated parameter set.
#[derive(Clone, Debug)]
pub struct Crc {
    params: CrcParams,
    state: u32,
    table: Option<Arc<LookupTable>>,
}

impl Crc {
    /// Creates a new `Crc` using the bit-by-bit approach
    pub fn new_naive(params: CrcParams) -> Self {
        Self {
            params,
            state: params.initial(),
            table: None,
        }
    }

    /// Creates a new `Crc` using a table lookup approach, with the table
    /// taken from the global cache
    pub fn new_lookup(params: CrcParams) -> Self {
        Self::new_lookup_with_cache(params, TableCache::global())
    }

    /// Creates a new `Crc` using a table lookup approach, with the table
    /// taken from `cache`
    pub fn new_lookup_with_cache(params: CrcParams, cache: &TableCache) -> Self {
        Self {
            params,
            state: params.initial(),
            table: Some(cache.get_or_build(params.polynomial(), params.width())),
        }
    }

    /// One-shot table-driven checksum of `data`.
    pub fn checksum(params: CrcParams, data: &[u8]) -> u32 {
        let mut crc = Self::new_lookup(params);
        crc.update(data);
        crc.digest()
    }

    pub fn params(&self) -> &CrcParams {
        &self.params
    }

    pub fn is_lookup(&self) -> bool {
        self.table.is_some()
    }

    /// Restores the register to the initial value, keeping the engine.
    pub fn reset(&mut self) {
        self.state = self.params.initial();
    }
}

impl CrcDigest for Crc {
    fn update(&mut self, data: &[u8]) {
        self.state = match &self.table {
            Some(table) => CustomCrc::crc_lookup(self.state, &self.params, table.entries(), data),
            None => CustomCrc::crc_naive(self.state, &self.params, data),
        };
    }

    fn digest(&self) -> u32 {
        CustomCrc::finalize(self.state, &self.params)
    }
}
