pub mod color;
pub mod geometry;
pub mod record;

pub use color::Color;
pub use geometry::{PageMetrics, Rect, Size};
pub use record::{
    Branch, Dimensions, Discount, DocumentRecord, ItemCustomization, LineItem, Party, PaymentPlan,
    Quantity, ShippingPlan,
};
