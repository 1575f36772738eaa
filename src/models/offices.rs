use std::collections::BTreeMap;

use crate::scraping::constants::OFFICES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Office {
    pub name: String,
    pub code: String,
}

/// Office name -> remote office code. Names are unique; a later entry with
/// an already-seen name replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeTable {
    entries: BTreeMap<String, String>,
}

impl OfficeTable {
    pub fn iter(&self) -> impl Iterator<Item = Office> + '_ {
        self.entries.iter().map(|(name, code)| Office {
            name: name.clone(),
            code: code.clone(),
        })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn code(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for OfficeTable {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        OfficeTable {
            entries: iter
                .into_iter()
                .map(|(name, code)| (name.into(), code.into()))
                .collect(),
        }
    }
}

pub fn default_offices() -> OfficeTable {
    OFFICES.iter().copied().collect()
}
