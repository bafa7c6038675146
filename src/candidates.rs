//! Ordered list of action identifier guesses to try against the target
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ProbeError;

/// identifier guesses observed against the vulnerable demo deployment, plus
/// the empty identifier
///
/// the empty entry is deliberate: some deployments dispatch the action
/// without consulting the identifier header at all
pub const DEFAULT_ACTION_IDS: [&str; 3] = ["0d1b4c171bf3f5177ea5f7a9be9407b6", "a1b2c3d4e5f6", ""];

/// ordered collection of candidate action identifiers
///
/// duplicates are allowed and the empty string is a valid entry; iteration
/// order is the order in which candidates were added, and is the only
/// ordering guarantee the probe makes
///
/// # Examples
///
/// ```
/// # use action_probe::candidates::CandidateList;
/// # use action_probe::error::ProbeError;
/// # fn main() -> Result<(), ProbeError> {
/// let candidates = CandidateList::new()
///     .candidate("a1b2c3d4e5f6")
///     .candidate("")
///     .build()?;
///
/// assert_eq!(candidates.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateList {
    items: Vec<String>,
}

/// non-consuming iterator over [`CandidateList`]
///
/// # Examples
///
/// ```
/// # use action_probe::candidates::CandidateList;
/// # use action_probe::error::ProbeError;
/// # fn main() -> Result<(), ProbeError> {
/// let expected = vec!["1", "2", "3"];
/// let candidates = CandidateList::with_candidates(expected.clone()).build()?;
///
/// let mut gathered = vec![];
///
/// for candidate in &candidates {
///     gathered.push(candidate.as_str());
/// }
///
/// assert_eq!(gathered, expected);
/// # Ok(())
/// # }
/// ```
impl<'i> IntoIterator for &'i CandidateList {
    /// the type of the elements being iterated over
    type Item = <&'i [String] as IntoIterator>::Item;

    /// the kind of iterator we're turning `CandidateList` into
    type IntoIter = <&'i [String] as IntoIterator>::IntoIter;

    /// creates an iterator from `CandidateList.items`
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// consuming iterator over [`CandidateList`]
impl IntoIterator for CandidateList {
    /// the type of the elements being iterated over
    type Item = <Vec<String> as IntoIterator>::Item;

    /// the kind of iterator we're turning `CandidateList` into
    type IntoIter = <Vec<String> as IntoIterator>::IntoIter;

    /// creates an iterator from `CandidateList.items`
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl CandidateList {
    /// create a default (empty) `CandidateListBuilder`
    ///
    /// # Note
    ///
    /// `CandidateListBuilder::build` errors until at least one candidate has
    /// been added; use [`CandidateList::default`] for the built-in guesses
    #[must_use]
    pub const fn new() -> CandidateListBuilder {
        CandidateListBuilder { items: Vec::new() }
    }

    /// create a `CandidateListBuilder` pre-populated with the given candidates
    pub fn with_candidates<I, T>(candidates: I) -> CandidateListBuilder
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        CandidateListBuilder {
            items: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// get a reference to the underlying candidates
    #[must_use]
    #[inline]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// get the number of candidates
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// returns true if the list contains no candidates
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for CandidateList {
    /// the built-in identifier guesses from [`DEFAULT_ACTION_IDS`]
    fn default() -> Self {
        Self {
            items: DEFAULT_ACTION_IDS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Display for CandidateList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "CandidateList(len={})", self.len())
    }
}

/// builder for [`CandidateList`]
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CandidateListBuilder {
    items: Vec<String>,
}

impl CandidateListBuilder {
    /// add a single candidate identifier; the empty string is accepted
    #[must_use]
    pub fn candidate(mut self, candidate: impl Into<String>) -> Self {
        self.items.push(candidate.into());
        self
    }

    /// add a collection of candidate identifiers
    #[must_use]
    pub fn candidates<I, T>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.items.extend(candidates.into_iter().map(Into::into));
        self
    }

    /// finalize the builder into a [`CandidateList`]
    ///
    /// # Errors
    ///
    /// returns an error if no candidates were added; a run with nothing to
    /// try is a construction bug, not a useful probe
    #[instrument(level = "trace")]
    pub fn build(self) -> Result<CandidateList, ProbeError> {
        if self.items.is_empty() {
            return Err(ProbeError::EmptyCandidateList);
        }

        Ok(CandidateList { items: self.items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// an empty builder refuses to produce a list
    #[test]
    fn empty_builder_errors() {
        let result = CandidateList::new().build();

        assert!(matches!(result, Err(ProbeError::EmptyCandidateList)));
    }

    /// insertion order is preserved, duplicates and the empty string included
    #[test]
    fn order_and_duplicates_are_preserved() {
        let candidates = CandidateList::new()
            .candidate("abc")
            .candidate("")
            .candidate("abc")
            .build()
            .unwrap();

        assert_eq!(candidates.items(), &["abc", "", "abc"]);
    }

    /// the default list carries the built-in guesses, empty identifier last
    #[test]
    fn default_list_matches_builtin_guesses() {
        let candidates = CandidateList::default();

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates.items()[2], "");
    }
}
