//! Selection editing over a scope tree
//!
//! Checking a scope checks its whole subtree and promotes every ancestor
//! whose children are now all checked. Unchecking clears the subtree and
//! demotes every ancestor left with an unchecked child. Before saving, the
//! selection is minimized to the highest scopes that reproduce it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::tree::{GrantLookup, ScopeTree};
use super::types::ScopeResult;

/// Scope names currently checked in an editing session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeSet<String> {
        self.0
    }

    fn insert(&mut self, name: &str) {
        if !self.0.contains(name) {
            self.0.insert(name.to_string());
        }
    }

    fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }
}

impl GrantLookup for Selection {
    fn has(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Selection(iter.into_iter().map(Into::into).collect())
    }
}

/// Which way a toggle went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
}

impl ScopeTree {
    /// Every defined scope allowed under `granted`
    ///
    /// This is the starting selection of an editing session.
    pub fn expand<G>(&self, granted: &G) -> Selection
    where
        G: GrantLookup + ?Sized,
    {
        self.definitions()
            .filter(|d| self.is_allowed(&d.name, granted))
            .map(|d| d.name.clone())
            .collect()
    }

    /// Flip `name` in `selection`, cascading through the tree
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::UnknownScope` if `name` has no definition.
    pub fn toggle(&self, name: &str, selection: &Selection) -> ScopeResult<Selection> {
        self.toggle_with_outcome(name, selection).map(|(s, _)| s)
    }

    /// Same as [`ScopeTree::toggle`], also reporting the direction taken
    pub fn toggle_with_outcome(
        &self,
        name: &str,
        selection: &Selection,
    ) -> ScopeResult<(Selection, ToggleOutcome)> {
        if selection.contains(name) {
            Ok((self.deselect(name, selection)?, ToggleOutcome::Deselected))
        } else {
            Ok((self.select(name, selection)?, ToggleOutcome::Selected))
        }
    }

    /// Check `name` and its subtree, then promote complete ancestors
    pub fn select(&self, name: &str, selection: &Selection) -> ScopeResult<Selection> {
        let idx = self.lookup(name)?;
        let mut next = selection.clone();

        next.insert(name);
        for d in self.descendant_indices(idx) {
            next.insert(&self.definition_at(d).name);
        }

        for ancestor in self.ancestor_indices(idx) {
            let complete = self
                .child_indices(ancestor)
                .iter()
                .all(|&c| next.contains(&self.definition_at(c).name));
            if complete {
                next.insert(&self.definition_at(ancestor).name);
            }
        }

        Ok(next)
    }

    /// Uncheck `name` and its subtree, then demote incomplete ancestors
    pub fn deselect(&self, name: &str, selection: &Selection) -> ScopeResult<Selection> {
        let idx = self.lookup(name)?;
        let mut next = selection.clone();

        next.remove(name);
        for d in self.descendant_indices(idx) {
            next.remove(&self.definition_at(d).name);
        }

        for ancestor in self.ancestor_indices(idx) {
            let incomplete = self
                .child_indices(ancestor)
                .iter()
                .any(|&c| !next.contains(&self.definition_at(c).name));
            if incomplete {
                next.remove(&self.definition_at(ancestor).name);
            }
        }

        Ok(next)
    }

    /// Minimal grant list reproducing `selection`
    ///
    /// Drops every name whose parent is also selected, along with names that
    /// have no definition. Output follows definition order.
    pub fn save_set(&self, selection: &Selection) -> Vec<String> {
        self.definitions()
            .filter(|d| selection.contains(&d.name))
            .filter(|d| match d.parent.as_deref() {
                Some(parent) => !selection.contains(parent),
                None => true,
            })
            .map(|d| d.name.clone())
            .collect()
    }
}
