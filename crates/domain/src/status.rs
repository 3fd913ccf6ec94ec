// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle status of a quotation.
///
/// Status values are the Portuguese wire strings used by the surrounding
/// procurement system. `comprada` and `cancelada` are terminal sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    /// Initial state after creation. Awaiting a buyer.
    #[default]
    Novo,
    /// A buyer has assumed the quotation and is pricing it.
    EmCotacao,
    /// Pricing response recorded. Awaiting requester approval.
    Respondida,
    /// Approved by the requester. Awaiting purchase.
    AprovadaParaCompra,
    /// Purchased. Terminal.
    Comprada,
    /// Cancelled with a mandatory reason. Terminal.
    Cancelada,
}

impl FromStr for QuotationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "novo" => Ok(Self::Novo),
            "em_cotacao" => Ok(Self::EmCotacao),
            "respondida" => Ok(Self::Respondida),
            "aprovada_para_compra" => Ok(Self::AprovadaParaCompra),
            "comprada" => Ok(Self::Comprada),
            "cancelada" => Ok(Self::Cancelada),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl QuotationStatus {
    /// Converts this status to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Novo => "novo",
            Self::EmCotacao => "em_cotacao",
            Self::Respondida => "respondida",
            Self::AprovadaParaCompra => "aprovada_para_compra",
            Self::Comprada => "comprada",
            Self::Cancelada => "cancelada",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `novo` → `em_cotacao`
    /// - `novo` → `respondida`
    /// - `em_cotacao` → `respondida`
    /// - `respondida` → `aprovada_para_compra`
    /// - `aprovada_para_compra` → `comprada`
    /// - any non-terminal status → `cancelada`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        if matches!(target, Self::Cancelada) {
            return !self.is_terminal();
        }
        matches!(
            (self, target),
            (Self::Novo, Self::EmCotacao)
                | (Self::Novo | Self::EmCotacao, Self::Respondida)
                | (Self::Respondida, Self::AprovadaParaCompra)
                | (Self::AprovadaParaCompra, Self::Comprada)
        )
    }

    /// Returns whether this status is a terminal sink.
    ///
    /// No operation may move a quotation out of `comprada` or `cancelada`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Comprada | Self::Cancelada)
    }

    /// Returns whether a quotation in this status counts as finalized for
    /// list filtering (the "include finalized" toggle).
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.is_terminal()
    }
}

/// Represents the status of a pending-registration request.
///
/// The cancellation overlay is tracked separately on the request itself and
/// never overwrites this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PendingStatus {
    /// Initial state after creation.
    #[default]
    Pending,
    /// A handler has been assigned and is working the request.
    InProgress,
    /// Registration completed in the external catalog. Terminal.
    Completed,
    /// Rejected with a reason. Terminal.
    Rejected,
}

impl FromStr for PendingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidPendingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PendingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PendingStatus {
    /// Converts this status to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    /// Returns whether this status is a terminal sink.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }
}

/// Represents what the requester is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Pricing only.
    Quote,
    /// Technical specification only.
    TechnicalSpec,
    /// Both pricing and technical specification.
    Both,
}

impl RequestType {
    /// Parses a request type from its wire string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid request type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "quote" => Ok(Self::Quote),
            "technical_spec" => Ok(Self::TechnicalSpec),
            "both" => Ok(Self::Both),
            _ => Err(DomainError::InvalidRequestType(s.to_string())),
        }
    }

    /// Returns the wire string representation of this request type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::TechnicalSpec => "technical_spec",
            Self::Both => "both",
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actor roles for authorization.
///
/// Roles form a closed enumeration; free-form role strings are rejected at
/// the boundary so a typo can never grant or deny access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System administrators with full corrective authority.
    Admin,
    /// Procurement buyers. Price, assume, and purchase quotations.
    Compras,
    /// Managers. Same procurement authority as buyers.
    Gerente,
    /// Sales/requesting staff. Create quotations and approve their own.
    Vendedor,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "compras" => Ok(Self::Compras),
            "gerente" => Ok(Self::Gerente),
            "vendedor" => Ok(Self::Vendedor),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Compras => "compras",
            Self::Gerente => "gerente",
            Self::Vendedor => "vendedor",
        }
    }

    /// Returns whether this role carries procurement authority.
    ///
    /// Procurement roles may respond to, purchase, and assume quotations,
    /// and see all pending-registration requests rather than only their own.
    #[must_use]
    pub const fn is_procurement(&self) -> bool {
        matches!(self, Self::Admin | Self::Compras | Self::Gerente)
    }
}
