use serde::Serialize;

use super::as_count;
use crate::fields::{FieldKind, FieldSpec, FieldValue};
use crate::query::ViewSchema;
use crate::record::Record;

tag_enum! {
    /// Loyalty tier.
    CustomerTier, CUSTOMER_TIERS {
        Bronze => "bronze", "Bronze",
        Silver => "silver", "Silver",
        Gold => "gold", "Gold",
        Platinum => "platinum", "Platinum",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub last_order: String,
    pub total_spent_cents: i64,
    pub order_count: u32,
    pub tier: CustomerTier,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", FieldKind::Text),
    FieldSpec::new("name", FieldKind::Text),
    FieldSpec::new("email", FieldKind::Text),
    FieldSpec::new("phone", FieldKind::Text),
    FieldSpec::new("last_order", FieldKind::Date).mutable(),
    FieldSpec::new("total_spent_cents", FieldKind::Int),
    FieldSpec::new("order_count", FieldKind::Int).mutable(),
    FieldSpec::tagged("tier", CUSTOMER_TIERS).mutable(),
];

impl Customer {
    /// First letter of each word of the name: "Emma Johnson" -> "EJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Customers page: search by name, email or id, partition by tier.
    pub fn view_schema() -> ViewSchema {
        ViewSchema::new(&["name", "email", "id"], "tier")
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "phone" => Some(FieldValue::Text(self.phone.clone())),
            "last_order" => Some(FieldValue::Date(self.last_order.clone())),
            "total_spent_cents" => Some(FieldValue::Int(self.total_spent_cents)),
            "order_count" => Some(FieldValue::Int(i64::from(self.order_count))),
            "tier" => Some(FieldValue::Tag(self.tier.as_str().to_string())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Option<()> {
        match name {
            "last_order" => self.last_order = value.as_date()?.to_string(),
            "order_count" => self.order_count = as_count(&value)?,
            "tier" => self.tier = value.as_tag()?.parse().ok()?,
            _ => return None,
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::customer;

    #[test]
    fn initials_take_first_letters() {
        let mut c = customer("CUST-1", "2024-03-28", CustomerTier::Gold);
        c.name = "Emma Johnson".into();
        assert_eq!(c.initials(), "EJ");
        c.name = "  Cher ".into();
        assert_eq!(c.initials(), "C");
        c.name = String::new();
        assert_eq!(c.initials(), "");
    }

    #[test]
    fn tier_is_settable() {
        let mut c = customer("CUST-1", "2024-03-28", CustomerTier::Bronze);
        c.set_field("tier", FieldValue::Tag("platinum".into())).unwrap();
        assert_eq!(c.tier, CustomerTier::Platinum);
    }

    #[test]
    fn last_order_takes_a_date() {
        let mut c = customer("CUST-1", "2024-03-28", CustomerTier::Bronze);
        assert!(c.set_field("last_order", FieldValue::Text("2024-04-01".into())).is_none());
        c.set_field("last_order", FieldValue::Date("2024-04-01".into())).unwrap();
        assert_eq!(c.last_order, "2024-04-01");
    }

    #[test]
    fn email_is_a_search_field() {
        assert!(Customer::view_schema().search_fields.contains(&"email"));
    }
}
