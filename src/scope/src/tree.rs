//! Validated index over a list of scope definitions
//!
//! Definitions arrive as a flat parent-pointer list. `ScopeTree` checks that
//! the list forms a forest (unique names, known parents, no cycles) and keeps
//! a name → node index plus child lists so that every walk is bounded.

use std::collections::{BTreeSet, HashMap, HashSet};

use useradmin_core::WILDCARD_SCOPE;

use super::types::{normalize_parent, ScopeDefinition, ScopeError, ScopeResult};

/// Membership test over a set of granted or selected scope names
pub trait GrantLookup {
    /// Whether `name` is present
    fn has(&self, name: &str) -> bool;
}

impl GrantLookup for [String] {
    fn has(&self, name: &str) -> bool {
        self.iter().any(|g| g == name)
    }
}

impl GrantLookup for [&str] {
    fn has(&self, name: &str) -> bool {
        self.iter().any(|g| *g == name)
    }
}

impl GrantLookup for Vec<String> {
    fn has(&self, name: &str) -> bool {
        self.as_slice().has(name)
    }
}

impl GrantLookup for HashSet<String> {
    fn has(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl GrantLookup for BTreeSet<String> {
    fn has(&self, name: &str) -> bool {
        self.contains(name)
    }
}

#[derive(Debug, Clone)]
struct ScopeNode {
    definition: ScopeDefinition,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Forest of scope definitions with parent/child lookups
///
/// # Examples
///
/// ```
/// use useradmin_scope::{ScopeDefinition, ScopeTree};
///
/// let tree = ScopeTree::new(vec![
///     ScopeDefinition::new("users", "Manage users"),
///     ScopeDefinition::new("users:read", "Read users").with_parent("users"),
/// ])
/// .unwrap();
///
/// let granted = vec!["users".to_string()];
/// assert!(tree.is_allowed("users:read", &granted));
/// assert_eq!(tree.parent("users:read"), Some("users"));
/// ```
#[derive(Debug, Clone)]
pub struct ScopeTree {
    nodes: Vec<ScopeNode>,
    index: HashMap<String, usize>,
    roots: Vec<usize>,
}

impl ScopeTree {
    /// Build and validate a tree from definitions
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or duplicated, a definition is its
    /// own parent, a parent is not defined, or the parent chain loops.
    pub fn new<I>(definitions: I) -> ScopeResult<Self>
    where
        I: IntoIterator<Item = ScopeDefinition>,
    {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();

        for mut definition in definitions {
            if definition.name.is_empty() {
                return Err(ScopeError::EmptyName);
            }
            if index.contains_key(&definition.name) {
                return Err(ScopeError::DuplicateScope(definition.name));
            }
            definition.parent = normalize_parent(definition.parent.take());
            if definition.parent.as_deref() == Some(definition.name.as_str()) {
                return Err(ScopeError::SelfParent(definition.name));
            }

            index.insert(definition.name.clone(), nodes.len());
            nodes.push(ScopeNode {
                definition,
                parent: None,
                children: Vec::new(),
            });
        }

        let mut roots = Vec::new();
        for idx in 0..nodes.len() {
            match nodes[idx].definition.parent.clone() {
                Some(parent) => {
                    let parent_idx = *index.get(&parent).ok_or_else(|| ScopeError::UnknownParent {
                        scope: nodes[idx].definition.name.clone(),
                        parent,
                    })?;
                    nodes[idx].parent = Some(parent_idx);
                    nodes[parent_idx].children.push(idx);
                }
                None => roots.push(idx),
            }
        }

        let tree = Self { nodes, index, roots };
        tree.check_cycles()?;
        Ok(tree)
    }

    /// Walk every parent chain once, coloring nodes as they are visited.
    ///
    /// 0 = unvisited, 1 = on the current chain, 2 = known to reach a root.
    fn check_cycles(&self) -> ScopeResult<()> {
        let mut state = vec![0u8; self.nodes.len()];

        for start in 0..self.nodes.len() {
            let mut path = Vec::new();
            let mut current = Some(start);

            while let Some(idx) = current {
                match state[idx] {
                    2 => break,
                    1 => {
                        let cycle_start = path.iter().position(|&n| n == idx).unwrap_or(0);
                        let mut cycle: Vec<&str> =
                            path[cycle_start..].iter().map(|&n| self.name_of(n)).collect();
                        cycle.push(self.name_of(idx));
                        return Err(ScopeError::CircularParent(cycle.join(" -> ")));
                    }
                    _ => {}
                }
                state[idx] = 1;
                path.push(idx);
                current = self.nodes[idx].parent;
            }

            for idx in path {
                state[idx] = 2;
            }
        }

        Ok(())
    }

    fn name_of(&self, idx: usize) -> &str {
        &self.nodes[idx].definition.name
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn lookup(&self, name: &str) -> ScopeResult<usize> {
        self.index_of(name)
            .ok_or_else(|| ScopeError::UnknownScope(name.to_string()))
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `name` has a definition
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Definition for `name`
    pub fn get(&self, name: &str) -> Option<&ScopeDefinition> {
        self.index_of(name).map(|idx| &self.nodes[idx].definition)
    }

    /// All definitions in load order
    pub fn definitions(&self) -> impl Iterator<Item = &ScopeDefinition> + '_ {
        self.nodes.iter().map(|n| &n.definition)
    }

    /// Top-level scope names in load order
    pub fn roots(&self) -> Vec<&str> {
        self.roots.iter().map(|&idx| self.name_of(idx)).collect()
    }

    /// Immediate parent of `name`
    pub fn parent(&self, name: &str) -> Option<&str> {
        let idx = self.index_of(name)?;
        self.nodes[idx].parent.map(|p| self.name_of(p))
    }

    /// Direct children of `name` in load order; empty for unknown names
    pub fn children(&self, name: &str) -> Vec<&str> {
        self.index_of(name)
            .map(|idx| self.child_indices(idx).iter().map(|&c| self.name_of(c)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn child_indices(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].children
    }

    /// Parent chain of `name`, nearest ancestor first
    pub fn ancestors(&self, name: &str) -> Vec<&str> {
        self.index_of(name)
            .map(|idx| self.ancestor_indices(idx).map(|a| self.name_of(a)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn ancestor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.nodes[idx].parent, move |&p| self.nodes[p].parent)
    }

    /// Every scope below `name`, at any depth
    pub fn descendants(&self, name: &str) -> BTreeSet<&str> {
        self.index_of(name)
            .map(|idx| {
                self.descendant_indices(idx)
                    .into_iter()
                    .map(|d| self.name_of(d))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Subtree below `idx` in depth-first order, excluding `idx` itself
    pub(crate) fn descendant_indices(&self, idx: usize) -> Vec<usize> {
        let mut found = Vec::new();
        let mut stack: Vec<usize> = self.nodes[idx].children.iter().rev().copied().collect();

        while let Some(current) = stack.pop() {
            found.push(current);
            stack.extend(self.nodes[current].children.iter().rev().copied());
        }

        found
    }

    /// Depth of `idx` below its root (roots are 0)
    pub(crate) fn depth_of(&self, idx: usize) -> usize {
        self.ancestor_indices(idx).count()
    }

    pub(crate) fn root_indices(&self) -> &[usize] {
        &self.roots
    }

    pub(crate) fn definition_at(&self, idx: usize) -> &ScopeDefinition {
        &self.nodes[idx].definition
    }

    /// Whether `name` is permitted under `granted`
    ///
    /// A scope is allowed when it, or any of its ancestors, is granted, or
    /// when the wildcard scope is granted. Names without a definition are
    /// never allowed.
    pub fn is_allowed<G>(&self, name: &str, granted: &G) -> bool
    where
        G: GrantLookup + ?Sized,
    {
        let Some(idx) = self.index_of(name) else {
            return false;
        };

        if granted.has(WILDCARD_SCOPE) || granted.has(name) {
            return true;
        }

        self.ancestor_indices(idx).any(|a| granted.has(self.name_of(a)))
    }
}
