//! # useradmin scope
//!
//! Hierarchical permission scopes: a validated tree over flat scope
//! definitions, allowance checks with inheritance, cascading selection
//! edits and minimization of grant lists before they are saved.
//!
//! # Example
//!
//! ```
//! use useradmin_scope::{ScopeDefinition, ScopeTree, Selection};
//!
//! let tree = ScopeTree::new(vec![
//!     ScopeDefinition::new("A", "top"),
//!     ScopeDefinition::new("B", "middle").with_parent("A"),
//!     ScopeDefinition::new("C", "leaf").with_parent("B"),
//! ])
//! .unwrap();
//!
//! // Checking B checks its subtree and promotes A, whose only child is B
//! let selection = tree.toggle("B", &Selection::new()).unwrap();
//! assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
//!
//! // Only the top-most scope needs to be stored
//! assert_eq!(tree.save_set(&selection), vec!["A".to_string()]);
//! ```

mod types;
mod tree;
mod resolver;
mod outline;


pub use types::{ScopeDefinition, ScopeError, ScopeResult};
pub use tree::{GrantLookup, ScopeTree};
pub use resolver::{Selection, ToggleOutcome};
