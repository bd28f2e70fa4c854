mod common;

use common::fixtures::*;
use common::{TestResult, generate_pdf_with};
use folio::{Composer, ItemCustomization};
use std::sync::Arc;

#[test]
fn test_unresolvable_thumbnail_degrades_to_placeholder() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![item("Oak desk", 1, 240.0, 240.0)]);
    record.items[0].thumbnail_url = Some("/uploads/gone.png".to_string());

    // The source has nothing, so the fetch fails; generation must not.
    let source = Arc::new(CountingSource::new());
    let pdf = generate_pdf_with(Composer::builder(), source.clone(), &record)?;

    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Oak desk");
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(common::pdf_assertions::count_image_draws(&pdf.doc, 1), 0);
    Ok(())
}

#[test]
fn test_duplicate_thumbnail_urls_fetch_exactly_once() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![
        item("Oak desk", 1, 240.0, 240.0),
        item("Oak desk XL", 1, 280.0, 280.0),
    ]);
    record.items[0].thumbnail_url = Some("/uploads/shared.png".to_string());
    record.items[1].thumbnail_url = Some("/uploads/shared.png".to_string());

    let source = Arc::new(CountingSource::new());
    source.add("/uploads/shared.png", png_image(40, 90, 160));
    let pdf = generate_pdf_with(Composer::builder(), source.clone(), &record)?;

    assert_eq!(source.fetch_count(), 1);
    // Both rows still draw their thumbnail.
    assert_eq!(common::pdf_assertions::count_image_draws(&pdf.doc, 1), 2);
    Ok(())
}

#[test]
fn test_gallery_draws_customization_photo() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![item("Oak desk", 1, 240.0, 240.0)]);
    record.items[0].customization = Some(ItemCustomization {
        adjustment: None,
        description: Some("engraved top".to_string()),
        photo_url: Some("/uploads/engraving.png".to_string()),
    });

    let source = Arc::new(CountingSource::new());
    source.add("/uploads/engraving.png", png_image(20, 120, 60));
    let pdf = generate_pdf_with(Composer::builder(), source.clone(), &record)?;

    assert_pdf_contains_text!(pdf, "Customization photos");
    assert_pdf_contains_text!(pdf, "engraved top");
    assert_eq!(common::pdf_assertions::count_image_draws(&pdf.doc, 1), 1);
    Ok(())
}

#[test]
fn test_gallery_photo_failure_renders_placeholder_block() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![item("Oak desk", 1, 240.0, 240.0)]);
    record.items[0].customization = Some(ItemCustomization {
        adjustment: None,
        description: None,
        photo_url: Some("/uploads/lost.png".to_string()),
    });

    let source = Arc::new(CountingSource::new());
    let pdf = generate_pdf_with(Composer::builder(), source.clone(), &record)?;

    // Block heading still renders; the image slot degrades to a rectangle.
    assert_pdf_contains_text!(pdf, "Customization photos");
    assert_eq!(common::pdf_assertions::count_image_draws(&pdf.doc, 1), 0);
    Ok(())
}

#[test]
fn test_same_url_as_thumbnail_and_photo_fetches_once() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![item("Oak desk", 1, 240.0, 240.0)]);
    record.items[0].thumbnail_url = Some("/uploads/desk.png".to_string());
    record.items[0].customization = Some(ItemCustomization {
        adjustment: None,
        description: None,
        photo_url: Some("/uploads/desk.png".to_string()),
    });

    let source = Arc::new(CountingSource::new());
    source.add("/uploads/desk.png", png_image(90, 60, 30));
    let pdf = generate_pdf_with(Composer::builder(), source.clone(), &record)?;

    assert_eq!(source.fetch_count(), 1);
    assert_eq!(common::pdf_assertions::count_image_draws(&pdf.doc, 1), 2);
    Ok(())
}
