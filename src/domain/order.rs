/// Raw order submission as it arrives from the client, before validation.
/// Every field is optional here; `OrderService::place` decides which are
/// required and what the rest default to.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub artwork_id: Option<i32>,
    pub shipping_address: Option<String>,
    pub notes: Option<String>,
}

/// A validated order, ready to hand to the storage layer. Optional fields
/// have been defaulted to empty strings, never null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub artwork_id: i32,
    pub shipping_address: String,
    pub notes: String,
}

/// Result of the atomic placement transaction. A rejection is a normal
/// business outcome (the artwork was no longer available), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed { order_id: i32 },
    Rejected { reason: String },
}
