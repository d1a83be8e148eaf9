use super::*;

#[test]
fn static_routes_have_content() {
    for route in [AppRoute::Community, AppRoute::ContactUs, AppRoute::Blogs, AppRoute::AboutUs] {
        let (title, body) = content(&route).unwrap();
        assert!(!title.is_empty() && !body.is_empty());
    }
    assert_eq!(content(&AppRoute::Home), None);
}
