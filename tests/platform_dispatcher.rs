//! Process-wide dispatcher configuration.
//!
//! Kept in its own test binary: the platform dispatcher is created once per
//! process, so these checks must not share it with other tests.

use web_notifications::{Dispatcher, NotificationConfig};

/// Test: the first configuration wins and later ones are ignored
#[test]
fn test_init_platform_before_first_use() {
    let config = NotificationConfig {
        app_name: "Browser".into(),
        ..Default::default()
    };

    assert!(Dispatcher::init_platform(&config));
    assert!(!Dispatcher::init_platform(&NotificationConfig::default()));

    assert_eq!(Dispatcher::platform().config().app_name, "Browser");
}
