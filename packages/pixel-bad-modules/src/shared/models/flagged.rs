use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::UnitId;
use crate::errors::{AnalysisError, Result};

/// Deduplicated set of units reported non-functional.
///
/// Iteration is in ascending id order, which fixes the seed order of the
/// cluster flood fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlaggedSet {
    ids: BTreeSet<UnitId>,
}

impl FlaggedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = UnitId>,
    {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Parse a list of decimal ids separated by whitespace or commas.
    /// `#` starts a comment running to the end of the line.
    pub fn parse_list(text: &str) -> Result<Self> {
        let mut ids = BTreeSet::new();
        for (line_no, line) in text.lines().enumerate() {
            let content = line.split('#').next().unwrap_or("");
            for token in content
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
            {
                let raw: u32 = token.parse().map_err(|_| {
                    AnalysisError::flagged_list(format!(
                        "line {}: '{}' is not a unit id",
                        line_no + 1,
                        token
                    ))
                })?;
                ids.insert(UnitId(raw));
            }
        }
        Ok(Self { ids })
    }

    pub fn insert(&mut self, id: UnitId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<UnitId> for FlaggedSet {
    fn from_iter<I: IntoIterator<Item = UnitId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_deduplicates_and_sorts() {
        let set = FlaggedSet::from_ids([UnitId(5), UnitId(1), UnitId(5), UnitId(3)]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![UnitId(1), UnitId(3), UnitId(5)]);
    }

    #[test]
    fn test_parse_list_with_comments_and_commas() {
        let text = "# bad modules\n303042564, 303042568\n\n303046660 # noisy\n303042564\n";
        let set = FlaggedSet::parse_list(text).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(UnitId(303046660)));
    }

    #[test]
    fn test_parse_list_rejects_garbage() {
        let err = FlaggedSet::parse_list("12\nabc\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(FlaggedSet::parse_list("").unwrap().is_empty());
    }
}
