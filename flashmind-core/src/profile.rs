use crate::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub username: String,
    pub bio: String,
    pub avatar: String,
}

impl UserProfile {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Invalid("name must not be empty".into()));
        }
        if !self.email.contains('@') {
            return Err(CoreError::Invalid("email must contain '@'".into()));
        }
        Ok(())
    }

    /// Up to two initials from the name, for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Saved profile plus an editable draft.
#[derive(Clone, Debug, Default)]
pub struct ProfileEditor {
    saved: UserProfile,
    draft: UserProfile,
    editing: bool,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            draft: profile.clone(),
            saved: profile,
            editing: false,
        }
    }

    pub fn saved(&self) -> &UserProfile {
        &self.saved
    }

    pub fn draft(&self) -> &UserProfile {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.draft = self.saved.clone();
        self.editing = true;
    }

    pub fn draft_mut(&mut self) -> &mut UserProfile {
        &mut self.draft
    }

    pub fn save(&mut self) -> Result<UserProfile, CoreError> {
        self.draft.validate()?;
        self.saved = self.draft.clone();
        self.editing = false;
        Ok(self.saved.clone())
    }

    pub fn cancel(&mut self) {
        self.draft = self.saved.clone();
        self.editing = false;
    }

    /// Replaces the profile in one step (begin, overwrite draft, save).
    pub fn replace(&mut self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        self.begin_edit();
        self.draft = profile;
        self.save().inspect_err(|_| self.cancel())
    }
}
