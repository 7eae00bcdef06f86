use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

mod seed;

/// Registry handle shared across request handlers. Listing takes the read
/// lock; sign-up, unregister and reset take the write lock, so each mutation
/// is atomic with respect to the whole registry.
pub type SharedRegistry = Arc<RwLock<ActivityRegistry>>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// In-memory collection of all activities, keyed by unique name.
///
/// Sign-ups live only for the lifetime of the process; a restart (or the
/// test reset hook) returns every participant list to the seed catalog.
#[derive(Debug, Clone)]
pub struct ActivityRegistry {
    activities: HashMap<String, Activity>,
}

impl ActivityRegistry {
    /// Builds a registry holding the fixed seed catalog.
    pub fn seeded() -> Self {
        Self {
            activities: seed::catalog(),
        }
    }

    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Full name → record view. Key order is not part of the contract;
    /// participant order within a record is.
    pub fn all(&self) -> &HashMap<String, Activity> {
        &self.activities
    }

    /// Appends `email` to the activity's participant list.
    ///
    /// No capacity check happens here: `max_participants` is display-only.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::UnknownActivity)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's participant list, leaving the
    /// relative order of the remaining entries untouched.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::UnknownActivity)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotSignedUp)?;

        activity.participants.remove(position);
        Ok(())
    }

    /// Drops all runtime sign-ups and restores the seed catalog.
    pub fn reset(&mut self) {
        self.activities = seed::catalog();
    }
}
