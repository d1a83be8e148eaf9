use super::*;

fn booking(status: Option<BookingStatus>, price: Option<f64>) -> Booking {
    Booking {
        id: "b1".to_owned(),
        package_id: "p1".to_owned(),
        email: None,
        tourist_email: None,
        start_date: None,
        guide: None,
        package_name: None,
        price,
        status,
    }
}

#[test]
fn pending_priced_bookings_are_open() {
    assert!(is_open(&booking(None, Some(150.0))));
    assert!(is_open(&booking(Some(BookingStatus::Pending), Some(150.0))));
}

#[test]
fn settled_or_unpriced_bookings_are_closed() {
    assert!(!is_open(&booking(Some(BookingStatus::Accepted), Some(150.0))));
    assert!(!is_open(&booking(Some(BookingStatus::Rejected), Some(150.0))));
    assert!(!is_open(&booking(None, None)));
    assert!(!is_open(&booking(None, Some(0.0))));
}

#[test]
fn missing_status_reads_as_in_review() {
    assert_eq!(status_label(None), "In Review");
    assert_eq!(status_label(Some(BookingStatus::Accepted)), "Accepted");
}
