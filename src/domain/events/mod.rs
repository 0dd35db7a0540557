//! Domain events published to the message broker.

use serde::{Deserialize, Serialize};

/// Subject the order intake service publishes to.
pub const ORDER_CREATED_SUBJECT: &str = "order.created";

/// Emitted when an order is accepted. Carries the product id untouched; the
/// intake service performs no other transformation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedEvent {
    pub product_id: String,
}
