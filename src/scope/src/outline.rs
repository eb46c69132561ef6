//! Plain-text rendering of a scope tree

use std::fmt::Write as _;

use super::resolver::Selection;
use super::tree::{GrantLookup, ScopeTree};

const INDENT: &str = "    ";

impl ScopeTree {
    /// Render the forest as an indented checklist
    ///
    /// Each line reads `[x] name  description`. When `actor` is given, scopes
    /// the actor is not allowed to change are marked `(locked)`.
    pub fn outline<G>(&self, selection: &Selection, actor: Option<&G>) -> String
    where
        G: GrantLookup + ?Sized,
    {
        let mut out = String::new();
        let mut stack: Vec<usize> = self.root_indices().iter().rev().copied().collect();

        while let Some(idx) = stack.pop() {
            let def = self.definition_at(idx);
            let mark = if selection.contains(&def.name) { "x" } else { " " };

            out.push_str(&INDENT.repeat(self.depth_of(idx)));
            // Writing to a String cannot fail
            let _ = write!(out, "[{}] {}", mark, def.name);
            if !def.description.is_empty() {
                let _ = write!(out, "  {}", def.description);
            }
            if let Some(actor) = actor {
                if !self.is_allowed(&def.name, actor) {
                    out.push_str(" (locked)");
                }
            }
            out.push('\n');

            stack.extend(self.child_indices(idx).iter().rev().copied());
        }

        out
    }
}
