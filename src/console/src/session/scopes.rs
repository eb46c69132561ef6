//! Scope grant editor for a user or API client

use std::sync::Arc;

use tracing::{debug, info, warn};
use useradmin_client::AdminApi;
use useradmin_core::{Notice, Notifier, Target, TargetType, UserRecord, WILDCARD_SCOPE};
use useradmin_scope::{ScopeTree, Selection, ToggleOutcome};

use super::guard::InFlight;
use super::{MSG_UPDATE_FAILED, MSG_UPDATE_SUCCESSFUL};
use crate::error::{ConsoleError, Result};

/// Editing session over one target's scope grants
///
/// The selection starts as every scope the target is allowed, changes only
/// through [`ScopeEditor::toggle`], and is sent minimized on save. Saving
/// replaces the target's grants, so it is refused until the current grants
/// have been loaded with [`ScopeEditor::with_granted`] or
/// [`ScopeEditor::with_record`].
pub struct ScopeEditor {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    tree: Arc<ScopeTree>,
    target: Target,
    target_type: TargetType,
    actor: Vec<String>,
    baseline: Option<Vec<String>>,
    selection: Selection,
    in_flight: InFlight,
}

impl ScopeEditor {
    /// Create an editor with an empty selection and an unrestricted actor
    pub fn new(
        api: Arc<dyn AdminApi>,
        notifier: Arc<dyn Notifier>,
        tree: Arc<ScopeTree>,
        target: Target,
        target_type: TargetType,
    ) -> Self {
        Self {
            api,
            notifier,
            tree,
            target,
            target_type,
            actor: vec![WILDCARD_SCOPE.to_string()],
            baseline: None,
            selection: Selection::new(),
            in_flight: InFlight::new(),
        }
    }

    /// Start from the target's current grants
    pub fn with_granted(mut self, granted: &[String]) -> Self {
        self.selection = self.tree.expand(granted);
        self.baseline = Some(granted.to_vec());
        self
    }

    /// Start from the grants stored on a user document
    pub fn with_record(self, record: &UserRecord) -> Self {
        self.with_granted(record.granted_scopes())
    }

    /// Restrict edits to scopes the acting admin holds
    pub fn with_actor(mut self, actor: Vec<String>) -> Self {
        self.actor = actor;
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the acting admin may toggle `name`
    pub fn can_change(&self, name: &str) -> bool {
        self.tree.is_allowed(name, &self.actor)
    }

    /// Toggle `name` with cascading through the tree
    ///
    /// # Errors
    ///
    /// `NotPermitted` if the actor does not hold `name`; `Scope` if `name` is
    /// not defined. The selection is unchanged on error.
    pub fn toggle(&mut self, name: &str) -> Result<ToggleOutcome> {
        if !self.tree.contains(name) {
            return Err(useradmin_scope::ScopeError::UnknownScope(name.to_string()).into());
        }
        if !self.can_change(name) {
            return Err(ConsoleError::NotPermitted(name.to_string()));
        }

        let (selection, outcome) = self.tree.toggle_with_outcome(name, &self.selection)?;
        debug!(scope = name, ?outcome, selected = selection.len(), "Scope toggled");
        self.selection = selection;
        Ok(outcome)
    }

    /// Whether the target's current grants were loaded
    pub fn is_seeded(&self) -> bool {
        self.baseline.is_some()
    }

    /// Grant list that a save would submit
    ///
    /// A wildcard grant is kept while every defined scope stays selected.
    pub fn pending_grants(&self) -> Vec<String> {
        let had_wildcard = self
            .baseline
            .as_ref()
            .is_some_and(|grants| grants.iter().any(|g| g == WILDCARD_SCOPE));
        let all_selected = self
            .tree
            .definitions()
            .all(|d| self.selection.contains(&d.name));

        if had_wildcard && all_selected {
            return vec![WILDCARD_SCOPE.to_string()];
        }
        self.tree.save_set(&self.selection)
    }

    /// Checklist rendering of the current selection
    pub fn outline(&self) -> String {
        self.tree.outline(&self.selection, Some(&self.actor))
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Replace the target's grants with the minimized selection
    ///
    /// Returns the submitted grant list. The selection is kept on failure.
    ///
    /// # Errors
    ///
    /// `GrantsUnknown` if the current grants were never loaded; nothing is
    /// sent in that case.
    pub async fn save(&self) -> Result<Vec<String>> {
        if self.baseline.is_none() {
            return Err(ConsoleError::GrantsUnknown(self.target.to_string()));
        }
        let _guard = self.in_flight.try_begin()?;
        let grants = self.pending_grants();

        match self
            .api
            .set_access(&self.target, self.target_type, &grants)
            .await
        {
            Ok(()) => {
                info!(
                    target_id = %self.target,
                    target_type = %self.target_type,
                    grants = ?grants,
                    "Scope grants replaced"
                );
                self.notifier.notify(&Notice::success(MSG_UPDATE_SUCCESSFUL));
                Ok(grants)
            }
            Err(e) => {
                warn!(target_id = %self.target, error = %e, "Scope grant save failed");
                self.notifier.notify(&Notice::error(MSG_UPDATE_FAILED));
                Err(e.into())
            }
        }
    }
}
