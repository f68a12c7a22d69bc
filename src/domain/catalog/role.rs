//! Respondent roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The organizational role a respondent answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Engineer,
    Finance,
    Operations,
}

impl Role {
    /// All roles in interview order.
    pub const ALL: [Role; 4] = [Role::Manager, Role::Engineer, Role::Finance, Role::Operations];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Engineer => "Engineer",
            Role::Finance => "Finance",
            Role::Operations => "Operations",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
