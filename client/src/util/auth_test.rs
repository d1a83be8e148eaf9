use super::*;
use tourbook::storage::MemoryStore;

fn challenge() -> SocialChallenge {
    SocialChallenge {
        provider_id: "github.com".to_owned(),
        auth_uri: "https://github.com/login/oauth/authorize?x=1".to_owned(),
        session_id: "s-1".to_owned(),
        continue_uri: "https://tourbook.test/auth/callback".to_owned(),
    }
}

#[test]
fn callback_uri_joins_origin() {
    assert_eq!(callback_uri("https://tourbook.test/"), "https://tourbook.test/auth/callback");
}

#[test]
fn challenge_is_consumed_once() {
    let store = MemoryStore::new();
    stash_challenge(&store, &challenge()).unwrap();
    assert_eq!(take_challenge(&store), Some(challenge()));
    assert_eq!(take_challenge(&store), None);
}

#[test]
fn unreadable_challenge_is_discarded() {
    let store = MemoryStore::new();
    store.set(CHALLENGE_STORAGE_KEY, "{not json").unwrap();
    assert_eq!(take_challenge(&store), None);
    assert_eq!(store.get(CHALLENGE_STORAGE_KEY).unwrap(), None);
}
