//! Reference timezone table and its grouping into select option groups.

mod zones;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::option::{SelectOption, SelectOptionGroup};
use crate::errors::TimezoneTableError;

/// Upper bound on the size of one option group accepted by the platform.
pub const MAX_OPTION_GROUP_SIZE: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneRecord {
    #[serde(rename = "zoneName")]
    pub zone_name: String,
}

/// Ordered list of timezone names; enumeration order drives grouping output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimezoneTable {
    zones: Vec<TimezoneRecord>,
}

impl TimezoneTable {
    pub fn new(zones: Vec<TimezoneRecord>) -> Self {
        Self { zones }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(|name| TimezoneRecord { zone_name: name.into() }).collect())
    }

    /// The table shipped with the crate.
    pub fn bundled() -> &'static TimezoneTable {
        static BUNDLED: OnceLock<TimezoneTable> = OnceLock::new();
        BUNDLED.get_or_init(|| Self::from_names(zones::BUNDLED_ZONE_NAMES.iter().copied()))
    }

    /// Parses a JSON array of `{"zoneName": ".."}` records.
    pub fn from_json_str(raw: &str) -> Result<Self, TimezoneTableError> {
        let zones: Vec<TimezoneRecord> = serde_json::from_str(raw)?;
        if zones.is_empty() {
            return Err(TimezoneTableError::Empty);
        }
        Ok(Self::new(zones))
    }

    pub fn load(path: &Path) -> Result<Self, TimezoneTableError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| TimezoneTableError::ReadFile { path: path.to_path_buf(), source })?;
        let table = Self::from_json_str(&raw).map_err(|error| match error {
            TimezoneTableError::Parse(source) => {
                TimezoneTableError::ParseFile { path: path.to_path_buf(), source }
            }
            other => other,
        })?;

        info!(
            event_name = "blockkit.timezones.table_loaded",
            path = %path.display(),
            zones = table.len(),
            "loaded timezone table"
        );
        Ok(table)
    }

    pub fn zones(&self) -> &[TimezoneRecord] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Buckets zone names by the text before their first `/`, in first-seen
/// order. A bucket over [`MAX_OPTION_GROUP_SIZE`] is split into `<region>-1`
/// holding the first hundred names and `<region>-2` holding the rest.
pub fn group_timezones(table: &TimezoneTable) -> Vec<SelectOptionGroup> {
    let mut regions: Vec<(String, Vec<SelectOption>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for TimezoneRecord { zone_name } in table.zones() {
        let region = zone_name.split('/').next().unwrap_or_default();
        let position = *positions.entry(region.to_owned()).or_insert_with(|| {
            regions.push((region.to_owned(), Vec::new()));
            regions.len() - 1
        });
        if let Some((_, options)) = regions.get_mut(position) {
            options.push(SelectOption::new(zone_name.as_str(), zone_name.as_str()));
        }
    }

    let mut groups = Vec::with_capacity(regions.len());
    for (region, mut options) in regions {
        if options.len() > MAX_OPTION_GROUP_SIZE {
            let remainder = options.split_off(MAX_OPTION_GROUP_SIZE);
            groups.push(SelectOptionGroup::new(format!("{region}-1"), options));
            groups.push(SelectOptionGroup::new(format!("{region}-2"), remainder));
        } else {
            groups.push(SelectOptionGroup::new(region, options));
        }
    }
    groups
}
