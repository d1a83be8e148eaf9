use super::*;

#[test]
fn booking_request_trims_fields() {
    let booking = booking_request("p1", "ann@example.com", " 2026-11-02 ", " Rahim ").unwrap();
    assert_eq!(booking.package_id, "p1");
    assert_eq!(booking.start_date, "2026-11-02");
    assert_eq!(booking.guide, "Rahim");
}

#[test]
fn booking_request_needs_date_then_guide() {
    assert_eq!(booking_request("p1", "a@b.com", "", "").unwrap_err(), "Pick a tour date.");
    assert_eq!(booking_request("p1", "a@b.com", "2026-11-02", "  ").unwrap_err(), "Pick a tour guide.");
}
