//! Filter configuration, built once and shared read-only by every visit

use glob::Pattern;

use crate::entry::TypeSet;
use crate::error::ConfigError;

/// Which owner criterion is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerFilter {
    /// The entry's owning uid must equal this uid.
    User(u32),
    /// The entry's owning uid must not resolve to any known account.
    Unowned,
}

/// The active filters for one invocation.
///
/// A field left `None` means that filter is inactive and vacuously
/// satisfied. The two owner criteria are mutually exclusive; the builder
/// methods enforce this at construction time.
#[derive(Debug, Default)]
pub struct FilterConfig {
    pub types: Option<TypeSet>,
    pub owner: Option<OwnerFilter>,
    pub name: Option<Pattern>,
    pub path: Option<Pattern>,
}

impl FilterConfig {
    pub fn new() -> FilterConfig {
        FilterConfig::default()
    }

    pub fn with_types(mut self, types: TypeSet) -> Self {
        self.types = Some(types);
        self
    }

    /// Activate the owner-uid filter.
    pub fn with_owner(mut self, uid: u32) -> Result<Self, ConfigError> {
        if self.owner.is_some() {
            return Err(ConfigError::ConflictingOwnerFilters);
        }
        self.owner = Some(OwnerFilter::User(uid));
        Ok(self)
    }

    /// Activate the no-owner filter.
    pub fn with_unowned(mut self) -> Result<Self, ConfigError> {
        if self.owner.is_some() {
            return Err(ConfigError::ConflictingOwnerFilters);
        }
        self.owner = Some(OwnerFilter::Unowned);
        Ok(self)
    }

    /// Activate the base-name glob filter.
    pub fn with_name_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.name = Some(parse_pattern(pattern)?);
        Ok(self)
    }

    /// Activate the full-path glob filter.
    pub fn with_path_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.path = Some(parse_pattern(pattern)?);
        Ok(self)
    }
}

fn parse_pattern(pattern: &str) -> Result<Pattern, ConfigError> {
    Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
