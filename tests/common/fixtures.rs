use async_trait::async_trait;
use folio::{
    Branch, DocumentRecord, FetchError, ImageSource, InMemoryImageSource, LineItem, Party,
    Quantity,
};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn item(name: &str, qty: i64, unit_price: f64, total_price: f64) -> LineItem {
    LineItem {
        name: name.to_string(),
        description: None,
        thumbnail_url: None,
        quantity: Quantity::new(qty),
        unit_price,
        total_price,
        dimensions: None,
        customization: None,
    }
}

pub fn party(name: &str) -> Party {
    Party {
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        phone: Some("+1 555 0100".to_string()),
        tax_id: None,
        address: Some("742 Evergreen Terrace, Springfield".to_string()),
    }
}

pub fn branch(name: &str) -> Branch {
    Branch {
        party: Party {
            name: name.to_string(),
            email: Some("sales@example.com".to_string()),
            phone: Some("+1 555 0199".to_string()),
            tax_id: Some("12.345.678/0001-00".to_string()),
            address: Some("100 Commerce Avenue, Suite 4, Springfield".to_string()),
        },
        pin_to_first_page: true,
    }
}

pub fn record_with_items(items: Vec<LineItem>) -> DocumentRecord {
    let subtotal: f64 = items.iter().map(|i| i.total_price).sum();
    DocumentRecord {
        number: "Q-2026-0042".to_string(),
        title: None,
        issued_on: Some("2026-08-06".to_string()),
        valid_until: None,
        delivery_deadline: None,
        total_value: subtotal,
        discount: None,
        client: Some(party("Ada Lovelace")),
        counterpart: Some(party("Babbage Works")),
        branch: Some(branch("Springfield Branch")),
        items,
        payment: None,
        shipping: None,
        notes: None,
    }
}

/// A 4x4 solid-color PNG, small enough to decode instantly in tests.
pub fn png_image(r: u8, g: u8, b: u8) -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(4, 4, image::Rgb([r, g, b]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .expect("encode test png");
    bytes
}

/// In-memory source that counts fetches, for cache-behavior assertions.
#[derive(Debug, Default)]
pub struct CountingSource {
    inner: InMemoryImageSource,
    fetches: AtomicUsize,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, url: impl Into<String>, bytes: Vec<u8>) {
        self.inner.add(url, bytes);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSource for CountingSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(url).await
    }

    fn name(&self) -> &'static str {
        "CountingSource"
    }
}
