//! Geolocation of anonymous editors.
//!
//! Lookups go through the [`GeoLocator`] trait; [`MaxMindLocator`] reads a
//! local GeoLite2-City database. [`GeoCache`] memoizes results per IP string
//! for the lifetime of one collection run.

use std::collections::HashMap;
use std::net::IpAddr;
use std::path::Path;

use maxminddb::{geoip2, Reader};

use super::types::GeoLocation;
use crate::error_handling::InitializationError;

/// Resolves an IP address string to a location.
pub trait GeoLocator: Send + Sync {
    /// Returns `None` when the address is malformed or not in the database.
    fn locate(&self, ip: &str) -> Option<GeoLocation>;
}

/// Locator backed by a MaxMind GeoLite2-City database file.
pub struct MaxMindLocator {
    reader: Reader<Vec<u8>>,
}

impl MaxMindLocator {
    /// Opens the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::GeoIpError` if the file cannot be read
    /// or is not a MaxMind database.
    pub fn open(path: &Path) -> Result<Self, InitializationError> {
        let reader = Reader::open_readfile(path).map_err(|source| InitializationError::GeoIpError {
            path: path.display().to_string(),
            source,
        })?;
        log::info!(
            "GeoIP database loaded: {} (build epoch {})",
            path.display(),
            reader.metadata.build_epoch
        );
        Ok(Self { reader })
    }
}

impl GeoLocator for MaxMindLocator {
    fn locate(&self, ip: &str) -> Option<GeoLocation> {
        let address: IpAddr = ip.parse().ok()?;
        let city: geoip2::City = match self.reader.lookup(address) {
            Ok(city) => city,
            Err(e) => {
                log::debug!("GeoIP lookup failed for {}: {}", ip, e);
                return None;
            }
        };

        let english = |names: &Option<std::collections::BTreeMap<&str, &str>>| {
            names
                .as_ref()
                .and_then(|n| n.get("en"))
                .map(|s| s.to_string())
        };

        Some(GeoLocation {
            country_code: city
                .country
                .as_ref()
                .and_then(|c| c.iso_code)
                .map(str::to_string),
            country_name: city.country.as_ref().and_then(|c| english(&c.names)),
            region: city
                .subdivisions
                .as_ref()
                .and_then(|s| s.last())
                .and_then(|s| english(&s.names)),
            city: city.city.as_ref().and_then(|c| english(&c.names)),
        })
    }
}

/// Per-run memo of geolocation results, keyed by the IP string.
///
/// Misses are cached too, so the underlying locator sees each distinct
/// address at most once.
pub struct GeoCache<'a> {
    locator: &'a dyn GeoLocator,
    cache: HashMap<String, Option<GeoLocation>>,
}

impl<'a> GeoCache<'a> {
    /// Creates an empty cache in front of `locator`.
    pub fn new(locator: &'a dyn GeoLocator) -> Self {
        Self {
            locator,
            cache: HashMap::new(),
        }
    }

    /// Looks up `ip`, consulting the locator only on first sight.
    pub fn locate(&mut self, ip: &str) -> Option<GeoLocation> {
        if let Some(hit) = self.cache.get(ip) {
            return hit.clone();
        }
        let location = self.locator.locate(ip);
        self.cache.insert(ip.to_string(), location.clone());
        location
    }

    /// Number of distinct addresses looked up so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing has been looked up yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
