use serde::{Deserialize, Serialize};

/// Status of an RFQ/supplier pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfqSupplierStatus {
    Invited,
    Responded,
}

impl RfqSupplierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RfqSupplierStatus::Invited => "invited",
            RfqSupplierStatus::Responded => "responded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invited" => Some(RfqSupplierStatus::Invited),
            "responded" => Some(RfqSupplierStatus::Responded),
            _ => None,
        }
    }
}

/// Coarse status of a supplier response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Received,
    Review,
    Approved,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Received => "received",
            ResponseStatus::Review => "review",
            ResponseStatus::Approved => "approved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "received" => Some(ResponseStatus::Received),
            "review" => Some(ResponseStatus::Review),
            "approved" => Some(ResponseStatus::Approved),
            _ => None,
        }
    }
}

/// What the supplier actually said about a requested item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierReplyStatus {
    #[serde(rename = "QUOTED")]
    Quoted,
    #[serde(rename = "NO_STOCK")]
    NoStock,
    #[serde(rename = "DISCONTINUED")]
    Discontinued,
    #[serde(rename = "NEEDS_CLARIFICATION")]
    NeedsClarification,
    #[serde(rename = "NO_RESPONSE")]
    NoResponse,
}

impl SupplierReplyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierReplyStatus::Quoted => "QUOTED",
            SupplierReplyStatus::NoStock => "NO_STOCK",
            SupplierReplyStatus::Discontinued => "DISCONTINUED",
            SupplierReplyStatus::NeedsClarification => "NEEDS_CLARIFICATION",
            SupplierReplyStatus::NoResponse => "NO_RESPONSE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "QUOTED" => Some(SupplierReplyStatus::Quoted),
            "NO_STOCK" => Some(SupplierReplyStatus::NoStock),
            "DISCONTINUED" => Some(SupplierReplyStatus::Discontinued),
            "NEEDS_CLARIFICATION" => Some(SupplierReplyStatus::NeedsClarification),
            "NO_RESPONSE" => Some(SupplierReplyStatus::NoResponse),
            _ => None,
        }
    }
}

/// Audit action recorded against a response line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineActionType {
    #[serde(rename = "CREATE")]
    Create,
    #[serde(rename = "NEGOTIATION")]
    Negotiation,
    #[serde(rename = "LINK_SUPPLIER_PART")]
    LinkSupplierPart,
}

impl LineActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineActionType::Create => "CREATE",
            LineActionType::Negotiation => "NEGOTIATION",
            LineActionType::LinkSupplierPart => "LINK_SUPPLIER_PART",
        }
    }
}

/// Resolution state of a (supplier, RFQ item) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStatusKind {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "REQUEST")]
    Request,
    #[serde(rename = "ACCEPTED_EXISTING")]
    AcceptedExisting,
    #[serde(rename = "ARCHIVED")]
    Archived,
}

impl LineStatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStatusKind::None => "NONE",
            LineStatusKind::Request => "REQUEST",
            LineStatusKind::AcceptedExisting => "ACCEPTED_EXISTING",
            LineStatusKind::Archived => "ARCHIVED",
        }
    }
}

/// Structural role a selection row describes within an RFQ item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionType {
    #[serde(rename = "BOM_COMPONENT")]
    BomComponent,
    #[serde(rename = "KIT_ROLE")]
    KitRole,
    #[serde(rename = "ALTERNATE")]
    Alternate,
}

impl SelectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionType::BomComponent => "BOM_COMPONENT",
            SelectionType::KitRole => "KIT_ROLE",
            SelectionType::Alternate => "ALTERNATE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BOM_COMPONENT" => Some(SelectionType::BomComponent),
            "KIT_ROLE" => Some(SelectionType::KitRole),
            "ALTERNATE" => Some(SelectionType::Alternate),
            _ => None,
        }
    }
}

/// Lifecycle of a supplier price list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceListStatus {
    Draft,
    Active,
    Superseded,
}

impl PriceListStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceListStatus::Draft => "draft",
            PriceListStatus::Active => "active",
            PriceListStatus::Superseded => "superseded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(PriceListStatus::Draft),
            "active" => Some(PriceListStatus::Active),
            "superseded" => Some(PriceListStatus::Superseded),
            _ => None,
        }
    }
}

/// Classification of an imported price-list row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceListLineStatus {
    Pending,
    Matched,
    Ambiguous,
    NewPartRequired,
    Error,
    Ignored,
}

impl PriceListLineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceListLineStatus::Pending => "pending",
            PriceListLineStatus::Matched => "matched",
            PriceListLineStatus::Ambiguous => "ambiguous",
            PriceListLineStatus::NewPartRequired => "new_part_required",
            PriceListLineStatus::Error => "error",
            PriceListLineStatus::Ignored => "ignored",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PriceListLineStatus::Pending),
            "matched" => Some(PriceListLineStatus::Matched),
            "ambiguous" => Some(PriceListLineStatus::Ambiguous),
            "new_part_required" => Some(PriceListLineStatus::NewPartRequired),
            "error" => Some(PriceListLineStatus::Error),
            "ignored" => Some(PriceListLineStatus::Ignored),
            _ => None,
        }
    }

    /// Statuses that block activation of the owning list.
    pub fn blocks_activation(&self) -> bool {
        matches!(
            self,
            PriceListLineStatus::Error
                | PriceListLineStatus::Ambiguous
                | PriceListLineStatus::NewPartRequired
        )
    }
}

/// How a price-list row was matched to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    ExactCanonical,
    Alias,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::ExactCanonical => "exact_canonical",
            MatchMethod::Alias => "alias",
        }
    }

    pub fn confidence(self) -> f64 {
        match self {
            MatchMethod::ExactCanonical => 1.0,
            MatchMethod::Alias => 0.9,
        }
    }
}
