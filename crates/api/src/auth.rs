// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity and authorization helpers at the API boundary.
//!
//! The identity collaborator authenticates users elsewhere and hands
//! every operation an id and a role; the role is trusted verbatim here.
//! Transition authorization lives in the domain authorizer and runs
//! inside the core `apply`; this module only covers the operations that
//! never reach the core, such as hard deletion.

use cotaq_audit::Actor;
use cotaq_domain::Role;

use crate::error::ApiError;

/// An authenticated actor as supplied by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// This is used when recording history entries to attribute actions
    /// to the acting user.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role)
    }
}

/// Authorization service for API-boundary checks.
///
/// Covers only the operations the domain authorizer never sees; every
/// lifecycle transition is authorized inside the core `apply`.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to hard-delete an aggregate.
    ///
    /// Deletion is irreversible and removes the history trail with the
    /// aggregate; only Admin actors may perform it.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_delete(actor: &AuthenticatedActor) -> Result<(), ApiError> {
        if actor.role == Role::Admin {
            Ok(())
        } else {
            Err(ApiError::Unauthorized {
                action: String::from("delete"),
                role: actor.role.as_str().to_string(),
            })
        }
    }
}
