//! Purchase and revenue events.

use serde::{Deserialize, Serialize};

/// A single revenue event tied to an existing install record.
///
/// Only `game_install_id` is required. A `quantity` of 0 leaves the field out
/// of the payload and the backend assumes 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseData {
    /// UUID of the install record returned when the install was created.
    pub game_install_id: String,
    /// e.g. "in_app", "ad_revenue", "crypto".
    pub purchase_type: String,
    /// Monetary value. Sent only when finite and positive.
    pub purchase_amount: f64,
    /// ISO 4217 code, e.g. "USD".
    pub currency: String,
    /// Third-party (store) transaction ID.
    pub transaction_id: String,
    /// Product SKU.
    pub item_sku: String,
    /// Human-readable product name.
    pub item_name: String,
    /// Number of units.
    pub quantity: u32,
    /// Extra data as a JSON object, embedded verbatim.
    ///
    /// Not validated: malformed text here produces a malformed payload.
    pub metadata_json: String,
}

impl PurchaseData {
    /// Creates a purchase for the given install with no optional fields set.
    #[must_use]
    pub fn new(game_install_id: impl Into<String>) -> Self {
        Self {
            game_install_id: game_install_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_purchase_type(mut self, purchase_type: impl Into<String>) -> Self {
        self.purchase_type = purchase_type.into();
        self
    }

    /// Sets the amount and its currency together.
    #[must_use]
    pub fn with_amount(mut self, amount: f64, currency: impl Into<String>) -> Self {
        self.purchase_amount = amount;
        self.currency = currency.into();
        self
    }

    #[must_use]
    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = transaction_id.into();
        self
    }

    /// Sets the SKU and display name of the purchased item.
    #[must_use]
    pub fn with_item(mut self, sku: impl Into<String>, name: impl Into<String>) -> Self {
        self.item_sku = sku.into();
        self.item_name = name.into();
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_metadata_json(mut self, metadata_json: impl Into<String>) -> Self {
        self.metadata_json = metadata_json.into();
        self
    }
}
