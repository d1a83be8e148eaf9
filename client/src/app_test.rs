use std::sync::Arc;

use super::*;
use tourbook::nav::History;
use tourbook::session::SessionPhase;
use tourbook::storage::MemoryStore;

#[test]
fn services_share_one_session_provider() {
    let config = AppConfig { api_base_url: "https://api.test".to_owned(), ..AppConfig::default() };
    let services = Services::new(
        &config,
        Arc::new(BrowserTransport),
        Arc::new(MemoryStore::new()),
        Arc::new(History::new()),
    );

    assert_eq!(services.api.base_url(), "https://api.test");
    assert!(Arc::ptr_eq(&services.session, services.secure.session()));
    assert_eq!(services.session.phase(), SessionPhase::Authenticating);
}

#[test]
fn services_read_theme_from_shared_store() {
    let store = Arc::new(MemoryStore::new());
    let services = Services::new(&AppConfig::default(), Arc::new(BrowserTransport), store.clone(), Arc::new(History::new()));
    services.theme.save(tourbook::theme::Theme::Dark);
    assert_eq!(dark_mode::read_preference(store.as_ref()), tourbook::theme::Theme::Dark);
}
