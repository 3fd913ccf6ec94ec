// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The state-transition authorizer.
//!
//! Pure decision functions over (status, action, actor context). Every
//! mutating operation evaluates these authoritatively before any write;
//! UI gating is a convenience, never the enforcement point.
//!
//! Denials distinguish two kinds:
//! - [`TransitionDenied::NotPermitted`] — the role/ownership qualification
//!   fails, whatever the status.
//! - [`TransitionDenied::WrongState`] — the actor qualifies but the
//!   current status does not admit the action (including terminal sinks).

use crate::pending::PendingRequest;
use crate::status::{PendingStatus, QuotationStatus, Role};

/// Actions that mutate a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotationAction {
    /// A buyer takes the quotation (`novo` → `em_cotacao`).
    Assume,
    /// Record a pricing response.
    Respond,
    /// Requester approval.
    Approve,
    /// Purchase finalization.
    Purchase,
    /// Soft-terminal cancellation.
    Cancel,
    /// Line-item upsert/remove.
    Edit,
}

impl QuotationAction {
    /// Returns the wire string for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assume => "assume",
            Self::Respond => "respond",
            Self::Approve => "approve",
            Self::Purchase => "purchase",
            Self::Cancel => "cancel",
            Self::Edit => "edit",
        }
    }
}

impl std::fmt::Display for QuotationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actions that mutate a pending-registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// A handler takes the request (`pending` → `in_progress`).
    Assign,
    /// Record the catalog code. Does not change status.
    Respond,
    /// Conclude the request (`completed`).
    Conclude,
    /// Reject the request with a reason.
    Reject,
    /// Overlay cancellation.
    Cancel,
}

impl PendingAction {
    /// Returns the wire string for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "assign",
            Self::Respond => "respond",
            Self::Conclude => "conclude",
            Self::Reject => "reject",
            Self::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for PendingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The caller's relationship to the aggregate being mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorContext {
    /// The caller's role, trusted verbatim from the identity collaborator.
    pub role: Role,
    /// Whether the caller originated the aggregate.
    pub is_requester: bool,
    /// Whether the caller is the assigned buyer/handler. Carried for
    /// completeness; assignment does not narrow procurement authority.
    pub is_buyer: bool,
}

impl ActorContext {
    /// Creates a new `ActorContext`.
    #[must_use]
    pub const fn new(role: Role, is_requester: bool, is_buyer: bool) -> Self {
        Self {
            role,
            is_requester,
            is_buyer,
        }
    }
}

/// A denied transition, split by denial kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionDenied {
    /// The role/ownership qualification fails for this action.
    NotPermitted {
        /// The action that was attempted.
        action: &'static str,
        /// The caller's role.
        role: Role,
    },
    /// The actor qualifies but the current status does not admit the
    /// action.
    WrongState {
        /// The action that was attempted.
        action: &'static str,
        /// The status the aggregate was in.
        status: &'static str,
    },
}

impl std::fmt::Display for TransitionDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPermitted { action, role } => {
                write!(f, "Role '{role}' may not perform '{action}'")
            }
            Self::WrongState { action, status } => {
                write!(f, "Cannot '{action}' while status is '{status}'")
            }
        }
    }
}

impl std::error::Error for TransitionDenied {}

/// Authorizes a quotation action for the given status and actor.
///
/// This is a pure function: identical inputs always yield the identical
/// decision. The decision table:
///
/// | action   | allowed when |
/// |----------|--------------|
/// | assume   | status = `novo`, role procurement |
/// | respond  | status ∈ {`novo`, `em_cotacao`}, role procurement |
/// | approve  | status = `respondida`, admin or requester |
/// | purchase | status = `aprovada_para_compra`, role procurement |
/// | cancel   | status non-terminal, admin, requester, or procurement |
/// | edit     | admin: any non-terminal; requester: {`novo`, `em_cotacao`}; `compras`/`gerente`: `em_cotacao` |
///
/// Terminal statuses deny everything, admin included.
///
/// # Errors
///
/// Returns [`TransitionDenied::NotPermitted`] when the role/ownership
/// qualification fails, [`TransitionDenied::WrongState`] when the status
/// does not admit the action.
pub const fn authorize_quotation(
    status: QuotationStatus,
    action: QuotationAction,
    ctx: ActorContext,
) -> Result<(), TransitionDenied> {
    let role: Role = ctx.role;
    let permitted: bool = match action {
        QuotationAction::Assume | QuotationAction::Respond | QuotationAction::Purchase => {
            role.is_procurement()
        }
        QuotationAction::Approve => matches!(role, Role::Admin) || ctx.is_requester,
        QuotationAction::Cancel | QuotationAction::Edit => {
            role.is_procurement() || ctx.is_requester
        }
    };
    if !permitted {
        return Err(TransitionDenied::NotPermitted {
            action: action.as_str(),
            role,
        });
    }

    let state_ok: bool = match action {
        QuotationAction::Assume => matches!(status, QuotationStatus::Novo),
        QuotationAction::Respond => {
            matches!(status, QuotationStatus::Novo | QuotationStatus::EmCotacao)
        }
        QuotationAction::Approve => matches!(status, QuotationStatus::Respondida),
        QuotationAction::Purchase => matches!(status, QuotationStatus::AprovadaParaCompra),
        QuotationAction::Cancel => !status.is_terminal(),
        QuotationAction::Edit => {
            if matches!(role, Role::Admin) {
                !status.is_terminal()
            } else {
                // Requester and procurement qualifications admit different
                // windows; either suffices.
                (ctx.is_requester
                    && matches!(status, QuotationStatus::Novo | QuotationStatus::EmCotacao))
                    || (matches!(role, Role::Compras | Role::Gerente)
                        && matches!(status, QuotationStatus::EmCotacao))
            }
        }
    };
    if !state_ok {
        return Err(TransitionDenied::WrongState {
            action: action.as_str(),
            status: status.as_str(),
        });
    }

    Ok(())
}

/// Authorizes a pending-registration action for the given request and
/// actor.
///
/// Procurement roles handle the workflow (`assign`, `respond`, `conclude`,
/// `reject`); cancellation is additionally open to the requester. Terminal
/// statuses and the cancellation overlay freeze the request for everyone.
///
/// # Errors
///
/// Returns [`TransitionDenied::NotPermitted`] when the role/ownership
/// qualification fails, [`TransitionDenied::WrongState`] when the request
/// is frozen or the status does not admit the action.
pub const fn authorize_pending(
    request: &PendingRequest,
    action: PendingAction,
    ctx: ActorContext,
) -> Result<(), TransitionDenied> {
    let role: Role = ctx.role;
    let permitted: bool = match action {
        PendingAction::Assign
        | PendingAction::Respond
        | PendingAction::Conclude
        | PendingAction::Reject => role.is_procurement(),
        PendingAction::Cancel => role.is_procurement() || ctx.is_requester,
    };
    if !permitted {
        return Err(TransitionDenied::NotPermitted {
            action: action.as_str(),
            role,
        });
    }

    let state_ok: bool = if request.is_frozen() {
        false
    } else {
        match action {
            PendingAction::Assign => matches!(request.status, PendingStatus::Pending),
            PendingAction::Respond
            | PendingAction::Conclude
            | PendingAction::Reject
            | PendingAction::Cancel => {
                matches!(
                    request.status,
                    PendingStatus::Pending | PendingStatus::InProgress
                )
            }
        }
    };
    if !state_ok {
        return Err(TransitionDenied::WrongState {
            action: action.as_str(),
            status: request.display_status(),
        });
    }

    Ok(())
}
