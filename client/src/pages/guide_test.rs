use super::*;

fn review(rating: u8) -> Review {
    Review { rating, comment: String::new(), email: "a@b.com".to_owned() }
}

#[test]
fn average_rating_rounds_to_one_decimal() {
    assert_eq!(average_rating(&[review(5), review(4), review(4)]), Some(4.3));
    assert_eq!(average_rating(&[review(3)]), Some(3.0));
}

#[test]
fn no_reviews_has_no_rating() {
    assert_eq!(average_rating(&[]), None);
}
