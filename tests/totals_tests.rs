mod common;

use common::fixtures::*;
use common::{TestResult, generate_pdf};
use folio::Discount;

#[test]
fn test_subtotal_and_grand_total_both_display_verbatim() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![
        item("Oak desk", 1, 100.0, 100.0),
        item("Side chair", 1, 50.0, 50.0),
    ]);
    // The authoritative figure legitimately differs from the item sum.
    record.total_value = 999.99;
    let pdf = generate_pdf(&record)?;

    assert_pdf_contains_text!(pdf, "$ 150.00");
    assert_pdf_contains_text!(pdf, "$ 999.99");
    Ok(())
}

#[test]
fn test_line_totals_are_not_recomputed_from_quantity() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // 2 x 100 would be 200, but upstream already added a surcharge.
    let record = record_with_items(vec![item("Custom desk", 2, 100.0, 230.0)]);
    let pdf = generate_pdf(&record)?;

    assert_pdf_contains_text!(pdf, "$ 230.00");
    assert_pdf_not_contains_text!(pdf, "$ 200.00");
    Ok(())
}

#[test]
fn test_percentage_discount_is_computed_from_subtotal() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![item("Oak desk", 2, 100.0, 200.0)]);
    record.discount = Some(Discount::Percentage(10.0));
    record.total_value = 180.0;
    let pdf = generate_pdf(&record)?;

    assert_pdf_contains_text!(pdf, "Discount (10%)");
    assert_pdf_contains_text!(pdf, "-$ 20.00");
    assert_pdf_contains_text!(pdf, "$ 180.00");
    Ok(())
}

#[test]
fn test_flat_discount_displays_verbatim() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![item("Oak desk", 2, 100.0, 200.0)]);
    record.discount = Some(Discount::Flat(35.5));
    record.total_value = 164.5;
    let pdf = generate_pdf(&record)?;

    assert_pdf_contains_text!(pdf, "-$ 35.50");
    // Flat mode never shows a percentage label.
    assert_pdf_not_contains_text!(pdf, "Discount (");
    Ok(())
}

#[test]
fn test_no_discount_line_without_discount() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let record = record_with_items(vec![item("Oak desk", 1, 100.0, 100.0)]);
    let pdf = generate_pdf(&record)?;
    assert_pdf_not_contains_text!(pdf, "Discount");
    Ok(())
}

#[test]
fn test_empty_item_list_shows_zero_subtotal() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = record_with_items(vec![]);
    record.total_value = 75.0;
    let pdf = generate_pdf(&record)?;

    assert_pdf_contains_text!(pdf, "$ 0.00");
    assert_pdf_contains_text!(pdf, "$ 75.00");
    Ok(())
}
