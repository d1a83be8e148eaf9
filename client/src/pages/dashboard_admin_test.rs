use super::*;

fn form() -> PackageForm {
    PackageForm {
        name: " Sajek Valley ".to_owned(),
        tour_type: "Hiking".to_owned(),
        price: "150".to_owned(),
        images: "https://img/1.jpg, https://img/2.jpg,".to_owned(),
        about: "Hills and clouds".to_owned(),
        plan: "Day 1: Arrive\n\nDay 2: Trek to Konglak\nFree evening".to_owned(),
        guide: "Rahim".to_owned(),
    }
}

#[test]
fn tour_plan_splits_on_first_colon() {
    let plan = parse_tour_plan("Day 1: Arrive: check in\n  \nRest");
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0].day, "Day 1");
    assert_eq!(plan[0].info, "Arrive: check in");
    assert_eq!(plan[1].day, "");
    assert_eq!(plan[1].info, "Rest");
}

#[test]
fn build_trims_and_splits_fields() {
    let package = form().build().unwrap();
    assert_eq!(package.package_name, "Sajek Valley");
    assert_eq!(package.images, vec!["https://img/1.jpg".to_owned(), "https://img/2.jpg".to_owned()]);
    assert_eq!(package.tour_plan.len(), 3);
    assert!((package.price - 150.0).abs() < f64::EPSILON);
}

#[test]
fn build_rejects_bad_price() {
    let mut bad = form();
    bad.price = "cheap".to_owned();
    assert_eq!(bad.build().unwrap_err(), "Price must be a non-negative number.");
    bad.price = "-5".to_owned();
    assert!(bad.build().is_err());
}

#[test]
fn build_requires_name_first() {
    let empty = PackageForm::default();
    assert_eq!(empty.build().unwrap_err(), "Package name is required.");
}
