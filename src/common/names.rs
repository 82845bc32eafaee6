//! Human-readable color names.
//!
//! Lookups never fail: anything that cannot be named is [`UNKNOWN`].

use lru::LruCache;
use phf::phf_map;
use std::num::NonZeroUsize;

use crate::common::color::parse_hex;
use crate::common::fetch::{fetch_color_table, ColorTable};
use crate::config::AnalyzerConfig;

pub const UNKNOWN: &str = "Unknown";

pub trait NameLookup {
    /// Name for a hex code, or [`UNKNOWN`].
    fn lookup_name(&self, canonical_hex: &str) -> String;
}

fn table_key(hex: &str) -> Option<String> {
    parse_hex(hex, true).ok().map(|color| color.hex())
}

static BASIC_COLOR_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "#FFFFFF" => "White",
    "#000000" => "Black",
    "#FF0000" => "Red",
    "#00FF00" => "Green",
    "#0000FF" => "Blue",
    "#AABBCC" => "Pale Blue",
    "#154331" => "Dark Green",
    "#A0B1C2" => "Grayish Blue",
};

/// Small built-in table that works offline.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicColorNames;

impl NameLookup for BasicColorNames {
    fn lookup_name(&self, canonical_hex: &str) -> String {
        table_key(canonical_hex)
            .and_then(|key| BASIC_COLOR_NAMES.get(key.as_str()).copied())
            .unwrap_or(UNKNOWN)
            .to_owned()
    }
}

/// Names from a remote color table, fetched once up front.
#[derive(Debug, Default, Clone)]
pub struct ColorNameService {
    table: ColorTable,
}

impl ColorNameService {
    pub fn from_table(table: ColorTable) -> Self {
        Self { table }
    }

    /// A service with no names; every lookup is [`UNKNOWN`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fetch the table from `config.lookup_url`. Failures are logged and
    /// leave the service empty.
    pub async fn fetch(config: &AnalyzerConfig) -> Self {
        match fetch_color_table(&config.lookup_url, config.lookup_timeout()).await {
            Ok(table) => Self::from_table(table),
            Err(e) => {
                tracing::warn!("Could not fetch color names from {}: {e}", config.lookup_url);
                Self::empty()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl NameLookup for ColorNameService {
    fn lookup_name(&self, canonical_hex: &str) -> String {
        table_key(canonical_hex)
            .and_then(|key| self.table.get(&key).cloned())
            .unwrap_or_else(|| UNKNOWN.to_owned())
    }
}

/// Ask `primary` first and `secondary` only when `primary` has no name.
#[derive(Debug, Clone)]
pub struct Fallback<A, B> {
    primary: A,
    secondary: B,
}

impl<A: NameLookup, B: NameLookup> Fallback<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: NameLookup, B: NameLookup> NameLookup for Fallback<A, B> {
    fn lookup_name(&self, canonical_hex: &str) -> String {
        let name = self.primary.lookup_name(canonical_hex);
        if name == UNKNOWN {
            self.secondary.lookup_name(canonical_hex)
        } else {
            name
        }
    }
}

/// Bounded memo of lookups, owned by the caller. The least recently used
/// entry is evicted once full; a capacity of 0 caches nothing.
#[derive(Debug)]
pub struct NameCache {
    entries: Option<LruCache<String, String>>,
}

impl NameCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
        }
    }

    /// Cached name, without counting as a use.
    pub fn get(&self, canonical_hex: &str) -> Option<&str> {
        self.entries
            .as_ref()
            .and_then(|entries| entries.peek(canonical_hex))
            .map(String::as_str)
    }

    pub fn get_or_lookup(&mut self, canonical_hex: &str, lookup: &dyn NameLookup) -> String {
        let Some(entries) = self.entries.as_mut() else {
            return lookup.lookup_name(canonical_hex);
        };
        if let Some(name) = entries.get(canonical_hex) {
            tracing::debug!("Name cache hit for {canonical_hex}");
            return name.clone();
        }
        let name = lookup.lookup_name(canonical_hex);
        entries.put(canonical_hex.to_owned(), name.clone());
        name
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
