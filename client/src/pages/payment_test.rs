use super::*;

#[test]
fn summary_shows_discount_against_list_price() {
    let quote = Quote { booking_id: "b4".to_owned(), list_price: 120.0, amount: 108.0, discounted: true };
    assert_eq!(price_summary(&quote), "$108.00 (10% off $120.00)");
}

#[test]
fn summary_without_discount_is_plain_amount() {
    let quote = Quote { booking_id: "b1".to_owned(), list_price: 150.0, amount: 150.0, discounted: false };
    assert_eq!(price_summary(&quote), "$150.00");
}
