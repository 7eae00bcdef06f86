use serde::{Deserialize, Serialize};

/// One extracurricular offering, keyed in the registry by its name.
///
/// `max_participants` is advisory: it is shown to clients but a sign-up is
/// never rejected for exceeding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Enrolled student emails, unique per activity, in sign-up order.
    pub participants: Vec<String>,
}
