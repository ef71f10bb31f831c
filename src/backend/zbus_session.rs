//! Session bus binding for [`DesktopBusBackend`] using zbus.

use super::desktop_bus::{
    BusConnector, DesktopBusBackend, NotificationsProxy, NotifyCall, NOTIFICATIONS_INTERFACE,
    NOTIFICATIONS_PATH, NOTIFICATIONS_SERVICE, NOTIFY_METHOD,
};
use super::{BackendError, NotificationBackend};
use crate::config::NotificationConfig;
use std::collections::HashMap;
use zbus::blocking::fdo::DBusProxy;
use zbus::blocking::{Connection, Proxy};
use zbus::names::BusName;
use zbus::Message;
use zbus::zvariant::Value;

/// Connects to the user's session bus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionBusConnector;

impl BusConnector for SessionBusConnector {
    type Proxy = SessionNotificationsProxy;

    fn session_proxy(&self) -> Result<SessionNotificationsProxy, BackendError> {
        let connection = Connection::session()
            .map_err(|e| BackendError::SessionBusUnavailable(e.to_string()))?;

        let proxy = Proxy::new(
            &connection,
            NOTIFICATIONS_SERVICE,
            NOTIFICATIONS_PATH,
            NOTIFICATIONS_INTERFACE,
        )
        .map_err(|e| BackendError::Bus(e.to_string()))?;

        let valid = match service_available(&connection) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("[dbus] Could not query {}: {}", NOTIFICATIONS_SERVICE, e);
                false
            }
        };

        Ok(SessionNotificationsProxy { proxy, valid })
    }
}

/// Whether the notification service is running or can be activated.
fn service_available(connection: &Connection) -> Result<bool, String> {
    let dbus = DBusProxy::new(connection).map_err(|e| e.to_string())?;
    let name = BusName::try_from(NOTIFICATIONS_SERVICE).map_err(|e| e.to_string())?;

    if dbus.name_has_owner(name).map_err(|e| e.to_string())? {
        return Ok(true);
    }

    let activatable = dbus.list_activatable_names().map_err(|e| e.to_string())?;
    Ok(activatable
        .iter()
        .any(|n| n.as_str() == NOTIFICATIONS_SERVICE))
}

/// Proxy for `/org/freedesktop/Notifications` on the session bus.
pub struct SessionNotificationsProxy {
    proxy: Proxy<'static>,
    valid: bool,
}

impl NotificationsProxy for SessionNotificationsProxy {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn notify(&self, call: &NotifyCall) -> Result<u32, BackendError> {
        let reply = self
            .proxy
            .call_method(NOTIFY_METHOD, &notify_args(call))
            .map_err(map_call_error)?;

        parse_reply(&reply)
    }
}

/// `Notify` arguments in wire order, signature `susssasa{sv}i`.
type NotifyArgs<'a> = (
    &'a str,
    u32,
    &'a str,
    &'a str,
    &'a str,
    Vec<&'a str>,
    HashMap<&'a str, Value<'a>>,
    i32,
);

fn notify_args(call: &NotifyCall) -> NotifyArgs<'_> {
    (
        call.app_name.as_str(),
        call.replaces_id,
        call.app_icon.as_str(),
        call.summary.as_str(),
        call.body.as_str(),
        call.actions.iter().map(String::as_str).collect(),
        call.hints
            .iter()
            .map(|(k, v)| (k.as_str(), Value::from(v.as_str())))
            .collect(),
        call.expire_timeout,
    )
}

fn map_call_error(error: zbus::Error) -> BackendError {
    match error {
        zbus::Error::MethodError(name, detail, _) => BackendError::ErrorReply {
            name: name.to_string(),
            message: detail.unwrap_or_default(),
        },
        other => BackendError::Bus(other.to_string()),
    }
}

/// Read the notification id from a `Notify` reply.
fn parse_reply(reply: &Message) -> Result<u32, BackendError> {
    reply
        .body()
        .deserialize::<u32>()
        .map_err(|e| BackendError::MalformedReply(e.to_string()))
}

pub(crate) fn create_backend(config: &NotificationConfig) -> Box<dyn NotificationBackend> {
    Box::new(DesktopBusBackend::new(SessionBusConnector, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zbus::names::{ErrorName, OwnedErrorName};
    use zbus::zvariant::DynamicType;

    fn call_message<B>(body: &B) -> Message
    where
        B: serde::Serialize + DynamicType,
    {
        Message::method_call(NOTIFICATIONS_PATH, NOTIFY_METHOD)
            .unwrap()
            .build(body)
            .unwrap()
    }

    #[test]
    fn test_notify_args_signature() {
        let call = NotifyCall::summary_only("Ladybird", "Hello", -1);
        let args = notify_args(&call);

        assert_eq!(DynamicType::signature(&args).to_string(), "(susssasa{sv}i)");
        assert_eq!(args.0, "Ladybird");
        assert_eq!(args.1, 0);
        assert_eq!(args.3, "Hello");
        assert!(args.5.is_empty());
        assert!(args.6.is_empty());
        assert_eq!(args.7, -1);
    }

    #[test]
    fn test_method_error_maps_to_error_reply() {
        let name: OwnedErrorName = ErrorName::try_from("org.freedesktop.DBus.Error.Failed")
            .unwrap()
            .into();
        let error = zbus::Error::MethodError(
            name,
            Some("Too many notifications".to_string()),
            call_message(&()),
        );

        assert_eq!(
            map_call_error(error),
            BackendError::ErrorReply {
                name: "org.freedesktop.DBus.Error.Failed".into(),
                message: "Too many notifications".into(),
            }
        );
    }

    #[test]
    fn test_other_errors_map_to_bus() {
        assert!(matches!(
            map_call_error(zbus::Error::InvalidReply),
            BackendError::Bus(_)
        ));
    }

    #[test]
    fn test_reply_with_id() {
        assert_eq!(parse_reply(&call_message(&42u32)), Ok(42));
    }

    #[test]
    fn test_reply_of_wrong_type_is_malformed() {
        assert!(matches!(
            parse_reply(&call_message(&"not an id")),
            Err(BackendError::MalformedReply(_))
        ));
    }
}
