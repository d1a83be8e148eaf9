use super::*;

#[test]
fn full_location_keeps_query_once() {
    assert_eq!(full_location("/payment/b1", ""), "/payment/b1");
    assert_eq!(full_location("/payment/b1", "step=2"), "/payment/b1?step=2");
    assert_eq!(full_location("/payment/b1", "?step=2"), "/payment/b1?step=2");
}
