//! Renders a representative quote to `sample_quote.pdf` in the current
//! directory, using an in-memory image source so it runs offline.
//!
//! ```sh
//! cargo run --example sample_quote
//! ```

use folio::{
    Branch, Composer, Dimensions, Discount, DocumentRecord, InMemoryImageSource,
    ItemCustomization, LineItem, Party, PaymentPlan, Quantity, ShippingPlan,
};
use std::sync::Arc;

fn flat_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .expect("encode demo png");
    bytes
}

fn sample_record() -> DocumentRecord {
    DocumentRecord {
        number: "Q-2026-0117".to_string(),
        title: Some("Furniture quote".to_string()),
        issued_on: None,
        valid_until: Some("2026-09-15".to_string()),
        delivery_deadline: Some("2026-10-01".to_string()),
        total_value: 1_860.0,
        discount: Some(Discount::Percentage(7.0)),
        client: Some(Party {
            name: "Ada Lovelace".to_string(),
            email: Some("ada@example.com".to_string()),
            phone: Some("+1 555 0100".to_string()),
            tax_id: None,
            address: Some("742 Evergreen Terrace, Springfield".to_string()),
        }),
        counterpart: Some(Party {
            name: "Babbage Works Ltd".to_string(),
            email: Some("orders@babbageworks.example".to_string()),
            phone: None,
            tax_id: Some("98.765.432/0001-10".to_string()),
            address: None,
        }),
        branch: Some(Branch {
            party: Party {
                name: "Springfield Branch".to_string(),
                email: Some("sales@babbageworks.example".to_string()),
                phone: Some("+1 555 0199".to_string()),
                tax_id: Some("12.345.678/0001-00".to_string()),
                address: Some("100 Commerce Avenue, Suite 4, Springfield".to_string()),
            },
            pin_to_first_page: true,
        }),
        items: vec![
            LineItem {
                name: "Oak standing desk".to_string(),
                description: Some("Solid oak, motorized lift, cable tray".to_string()),
                thumbnail_url: Some("/uploads/desk.png".to_string()),
                quantity: Quantity::new(2),
                unit_price: 640.0,
                total_price: 1_280.0,
                dimensions: Some(Dimensions {
                    width: 160.0,
                    height: 120.0,
                    depth: 80.0,
                }),
                customization: Some(ItemCustomization {
                    adjustment: Some(Discount::Flat(120.0)),
                    description: Some("Client logo engraved on the side panel".to_string()),
                    photo_url: Some("/uploads/engraving.png".to_string()),
                }),
            },
            LineItem {
                name: "Ergonomic chair".to_string(),
                description: None,
                thumbnail_url: Some("/uploads/chair.png".to_string()),
                quantity: Quantity::new(4),
                unit_price: 180.0,
                total_price: 720.0,
                dimensions: None,
                customization: None,
            },
        ],
        payment: Some(PaymentPlan {
            method: "Credit card".to_string(),
            installments: Some(6),
            down_payment: Some(500.0),
            remaining: Some(1_360.0),
            card_interest: Some(43.5),
        }),
        shipping: Some(ShippingPlan {
            method: "Courier".to_string(),
            cost: Some(85.0),
        }),
        notes: Some(
            "Lead time is four weeks from approval. Assembly on site is included \
             for the Springfield metropolitan area."
                .to_string(),
        ),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let source = Arc::new(InMemoryImageSource::new());
    source.add("/uploads/letterhead.png", flat_png(64, 96, [246, 243, 236]));
    source.add("/uploads/desk.png", flat_png(32, 24, [150, 105, 60]));
    source.add("/uploads/chair.png", flat_png(24, 32, [60, 90, 140]));
    source.add("/uploads/engraving.png", flat_png(48, 32, [90, 90, 90]));

    let composer = Composer::builder()
        .with_background_url("/uploads/letterhead.png")
        .with_image_source(source)
        .build()?;

    let bytes = composer.generate(&sample_record()).await?;
    std::fs::write("sample_quote.pdf", &bytes)?;
    println!("wrote sample_quote.pdf ({} bytes)", bytes.len());
    Ok(())
}
