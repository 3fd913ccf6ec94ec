// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use cotaq_domain::Role;
use serde::{Deserialize, Serialize};

/// Represents the entity performing an action.
///
/// An actor is the authenticated user a mutating operation runs as. The
/// role is recorded alongside the id so a history entry stays meaningful
/// even after the user's role changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role the actor held when acting.
    pub role: Role,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role the actor held when acting
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// The aggregate type a history entry belongs to.
///
/// History rows for both aggregates share one append-only log; this tag
/// keeps their id spaces apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateKind {
    /// A quotation and its line items.
    Quotation,
    /// A pending catalog-registration request.
    PendingRequest,
}

impl AggregateKind {
    /// Returns the wire string for this aggregate kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quotation => "quotation",
            Self::PendingRequest => "pending_request",
        }
    }
}

impl std::fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable history entry recording one status-changing operation.
///
/// Every successful mutating operation must produce exactly one history
/// entry. Entries are append-only: once written they are never edited or
/// deleted, except when their whole aggregate is hard-deleted, which
/// removes the aggregate, its items, and its history together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Which aggregate type this entry belongs to.
    pub aggregate: AggregateKind,
    /// The aggregate's canonical id. `None` only inside the creation
    /// transaction, before the database assigns the id.
    pub aggregate_id: Option<i64>,
    /// The actor who performed the operation.
    pub actor: Actor,
    /// The action tag (e.g. `"respondida"`, `"itens_editados"`).
    pub action: String,
    /// The status before the operation. `None` for creation.
    pub previous_status: Option<String>,
    /// The status after the operation.
    pub new_status: String,
    /// Optional notes supplied with the operation.
    pub notes: Option<String>,
    /// When the operation was recorded (ISO 8601).
    pub recorded_at: String,
}

impl HistoryEntry {
    /// Creates a new `HistoryEntry`.
    ///
    /// Once created, a history entry is immutable.
    ///
    /// # Arguments
    ///
    /// * `aggregate` - The aggregate kind
    /// * `aggregate_id` - The aggregate's id, if already persisted
    /// * `actor` - The acting user
    /// * `action` - The action tag
    /// * `previous_status` - The status before the operation (`None` for creation)
    /// * `new_status` - The status after the operation
    /// * `notes` - Optional notes
    /// * `recorded_at` - When the operation was recorded (ISO 8601)
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        aggregate: AggregateKind,
        aggregate_id: Option<i64>,
        actor: Actor,
        action: String,
        previous_status: Option<String>,
        new_status: String,
        notes: Option<String>,
        recorded_at: String,
    ) -> Self {
        Self {
            aggregate,
            aggregate_id,
            actor,
            action,
            previous_status,
            new_status,
            notes,
            recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> HistoryEntry {
        HistoryEntry::new(
            AggregateKind::Quotation,
            Some(17),
            Actor::new(String::from("user-123"), Role::Compras),
            String::from("respondida"),
            Some(String::from("novo")),
            String::from("respondida"),
            Some(String::from("two of three items priced")),
            String::from("2026-02-01T12:00:00Z"),
        )
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("user-123"), Role::Vendedor);

        assert_eq!(actor.id, "user-123");
        assert_eq!(actor.role, Role::Vendedor);
    }

    #[test]
    fn test_aggregate_kind_wire_strings() {
        assert_eq!(AggregateKind::Quotation.as_str(), "quotation");
        assert_eq!(AggregateKind::PendingRequest.as_str(), "pending_request");
    }

    #[test]
    fn test_history_entry_creation_requires_all_fields() {
        let entry: HistoryEntry = sample_entry();

        assert_eq!(entry.aggregate, AggregateKind::Quotation);
        assert_eq!(entry.aggregate_id, Some(17));
        assert_eq!(entry.actor.id, "user-123");
        assert_eq!(entry.action, "respondida");
        assert_eq!(entry.previous_status, Some(String::from("novo")));
        assert_eq!(entry.new_status, "respondida");
        assert_eq!(entry.recorded_at, "2026-02-01T12:00:00Z");
    }

    #[test]
    fn test_history_entry_is_immutable_once_created() {
        let entry: HistoryEntry = sample_entry();

        // Clone the entry to verify it can be cloned but not mutated
        let cloned: HistoryEntry = entry.clone();
        assert_eq!(entry, cloned);

        // Verify all fields are accessible but cannot be mutated
        // (Rust's type system enforces this - the binding is not mutable)
        assert_eq!(entry.new_status, "respondida");
    }

    #[test]
    fn test_creation_entry_has_no_previous_status() {
        let entry: HistoryEntry = HistoryEntry::new(
            AggregateKind::PendingRequest,
            None,
            Actor::new(String::from("user-9"), Role::Vendedor),
            String::from("criada"),
            None,
            String::from("pending"),
            None,
            String::from("2026-02-01T12:00:00Z"),
        );

        assert_eq!(entry.previous_status, None);
        assert_eq!(entry.aggregate_id, None);
    }
}
