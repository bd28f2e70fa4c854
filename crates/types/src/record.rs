//! The order/quote snapshot consumed by the composition engine.
//!
//! Records arrive fully assembled from the surrounding application (typically
//! as camelCase JSON) and are read-only here: the engine never recomputes
//! upstream business figures, it only lays them out.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One order or quote, with everything the rendered document shows.
///
/// `total_value` is authoritative and displayed verbatim as the grand total;
/// the subtotal shown next to it is recomputed from the line items and may
/// legitimately differ (upstream discounts and surcharges land in
/// `total_value`, not in the item sum).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub number: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub issued_on: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub delivery_deadline: Option<String>,
    pub total_value: f64,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub client: Option<Party>,
    #[serde(default)]
    pub counterpart: Option<Party>,
    #[serde(default)]
    pub branch: Option<Branch>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub payment: Option<PaymentPlan>,
    #[serde(default)]
    pub shipping: Option<ShippingPlan>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DocumentRecord {
    /// Sum of the line totals as given. Never substituted for `total_value`.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }
}

/// A document-level discount. The two modes are mutually exclusive by
/// construction; the wire form is `{"type": "percentage"|"flat", "value": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Discount {
    /// Percent of the subtotal, e.g. `10.0` for 10%.
    Percentage(f64),
    /// Absolute amount, displayed verbatim.
    Flat(f64),
}

impl Discount {
    pub fn amount_for(self, subtotal: f64) -> f64 {
        match self {
            Discount::Percentage(pct) => subtotal * pct / 100.0,
            Discount::Flat(value) => value,
        }
    }
}

/// A named party on the document. Every contact field is optional; absent
/// fields are simply not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// The issuing branch. `pin_to_first_page` selects the fixed letterhead box
/// in the top-right corner of page one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(flatten)]
    pub party: Party,
    #[serde(default = "default_true")]
    pub pin_to_first_page: bool,
}

fn default_true() -> bool {
    true
}

/// One product row of the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub quantity: Quantity,
    pub unit_price: f64,
    /// Accepted as given; may already include per-item surcharges.
    pub total_price: f64,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub customization: Option<ItemCustomization>,
}

/// Physical dimensions in centimeters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \u{d7} {} \u{d7} {} cm",
            self.width, self.height, self.depth
        )
    }
}

/// A per-item customization. The surcharge itself is already folded into the
/// line total upstream; it is carried for display only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCustomization {
    #[serde(default)]
    pub adjustment: Option<Discount>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlan {
    pub method: String,
    #[serde(default)]
    pub installments: Option<u32>,
    #[serde(default)]
    pub down_payment: Option<f64>,
    #[serde(default)]
    pub remaining: Option<f64>,
    #[serde(default)]
    pub card_interest: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPlan {
    pub method: String,
    #[serde(default)]
    pub cost: Option<f64>,
}

/// An integer item count that callers frequently supply as a numeric string
/// (`"10"`). Deserializes from integers, floats (truncated) and numeric
/// strings; always displays as a bare integer, never grouped, never `10.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer quantity, possibly encoded as a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quantity, E> {
        Ok(Quantity(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
        Ok(Quantity(v as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Quantity, E> {
        Ok(Quantity(v.trunc() as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
        let trimmed = v.trim();
        if let Ok(int) = trimmed.parse::<i64>() {
            return Ok(Quantity(int));
        }
        if let Ok(float) = trimmed.parse::<f64>() {
            return Ok(Quantity(float.trunc() as i64));
        }
        Err(E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}
