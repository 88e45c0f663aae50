use serde::Serialize;

use crate::fields::{FieldKind, FieldSpec, FieldValue};
use crate::query::ViewSchema;
use crate::record::Record;

tag_enum! {
    /// Fulfilment state of an order.
    OrderStatus, ORDER_STATUSES {
        Pending => "pending", "Pending",
        Processing => "processing", "Processing",
        Delivered => "delivered", "Delivered",
        Canceled => "canceled", "Canceled",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    /// `YYYY-MM-DD hh:mm AM`
    pub date: String,
    pub items: u32,
    pub total_cents: i64,
    pub status: OrderStatus,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", FieldKind::Text),
    FieldSpec::new("customer", FieldKind::Text),
    FieldSpec::new("date", FieldKind::Date),
    FieldSpec::new("items", FieldKind::Int),
    FieldSpec::new("total_cents", FieldKind::Int),
    FieldSpec::tagged("status", ORDER_STATUSES).mutable(),
];

impl Order {
    /// Orders page: search by customer or order id, partition by status.
    pub fn view_schema() -> ViewSchema {
        ViewSchema::new(&["customer", "id"], "status")
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "customer" => Some(FieldValue::Text(self.customer.clone())),
            "date" => Some(FieldValue::Date(self.date.clone())),
            "items" => Some(FieldValue::Int(i64::from(self.items))),
            "total_cents" => Some(FieldValue::Int(self.total_cents)),
            "status" => Some(FieldValue::Tag(self.status.as_str().to_string())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Option<()> {
        match name {
            "status" => self.status = value.as_tag()?.parse().ok()?,
            _ => return None,
        }
        Some(())
    }
}
