//! Flag switch sessions: optimistic updates with rollback

mod common;

use common::{target, ApiCall, FakeAdminApi, RecordingNotifier, Reply};
use useradmin_console::{ConsoleError, FlagSwitches};
use useradmin_core::{AdminFlag, NoticeLevel, UserRecord};

#[tokio::test]
async fn test_successful_switch_keeps_new_state() {
    let api = FakeAdminApi::new();
    let notifier = RecordingNotifier::new();
    let mut switches = FlagSwitches::new(api.clone(), notifier.clone(), target());

    switches.set(AdminFlag::Verified, true).await.unwrap();

    assert!(switches.get(AdminFlag::Verified));
    assert_eq!(
        api.calls(),
        vec![ApiCall::Flag(AdminFlag::Verified, "64f0c2a1".to_string(), true)]
    );
    assert_eq!(notifier.last().unwrap().level, NoticeLevel::Success);
}

#[tokio::test]
async fn test_failed_switch_rolls_back() {
    let api = FakeAdminApi::new();
    api.reply_with(Reply::ServerError);
    let notifier = RecordingNotifier::new();
    let mut switches = FlagSwitches::new(api.clone(), notifier.clone(), target());

    let err = switches.set(AdminFlag::Suspended, true).await.unwrap_err();

    assert!(matches!(err, ConsoleError::Client(_)));
    assert!(!switches.get(AdminFlag::Suspended));
    assert!(notifier.last().unwrap().is_error());
}

#[tokio::test]
async fn test_rollback_restores_seeded_value() {
    let api = FakeAdminApi::new();
    api.reply_with(Reply::Unreachable);
    let record = UserRecord {
        id: "64f0c2a1".to_string(),
        is_restricted: Some(true),
        ..Default::default()
    };
    let mut switches =
        FlagSwitches::new(api.clone(), RecordingNotifier::new(), target()).with_record(&record);
    assert!(switches.get(AdminFlag::Restricted));

    assert!(switches.toggle(AdminFlag::Restricted).await.is_err());
    assert!(switches.get(AdminFlag::Restricted));
    assert_eq!(
        api.calls(),
        vec![ApiCall::Flag(AdminFlag::Restricted, "64f0c2a1".to_string(), false)]
    );
}

#[tokio::test]
async fn test_flags_are_independent() {
    let api = FakeAdminApi::new();
    let mut switches = FlagSwitches::new(api.clone(), RecordingNotifier::new(), target());

    switches.set(AdminFlag::Verified, true).await.unwrap();
    api.reply_with(Reply::ServerError);
    assert!(switches.set(AdminFlag::Suspended, true).await.is_err());

    assert!(switches.get(AdminFlag::Verified));
    assert!(!switches.get(AdminFlag::Suspended));
    assert!(!switches.get(AdminFlag::Restricted));
}

#[test]
fn test_toggle_returns_requested_state() {
    let api = FakeAdminApi::new();
    let mut switches = FlagSwitches::new(api, RecordingNotifier::new(), target());

    let state = tokio_test::block_on(switches.toggle(AdminFlag::Verified)).unwrap();
    assert!(state);
    let state = tokio_test::block_on(switches.toggle(AdminFlag::Verified)).unwrap();
    assert!(!state);
}
