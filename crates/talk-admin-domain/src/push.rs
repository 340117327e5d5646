//! Push-notification routing for the messaging service worker.
//!
//! Turns incoming push payloads into notifications to display, decides what a
//! notification click opens, and forwards worker log lines to open pages once
//! a page asks for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_TITLE: &str = "Kotohiro";
pub const DEFAULT_ICON: &str = "/icon-192x192.png";
pub const DEFAULT_BADGE: &str = "/badge-72x72.png";

const PINPOINT_TITLE: &str = "pinpoint.notification.title";
const PINPOINT_BODY: &str = "pinpoint.notification.body";
const PINPOINT_ICON: &str = "pinpoint.notification.icon";

const RESULTS_VIBRATION: [u32; 3] = [200, 100, 200];

pub type PushData = BTreeMap<String, String>;

/// A push message as delivered by the messaging platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub notification: Option<PushData>,
    #[serde(default)]
    pub data: Option<PushData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub data: PushData,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<NotificationAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub require_interaction: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibrate: Option<Vec<u32>>,
}

impl Notification {
    /// Build the notification for a message received while no page is focused.
    pub fn from_background_message(payload: &PushPayload) -> Self {
        let notification = payload.notification.as_ref();
        let data = payload.data.as_ref();

        let title = first_present([
            lookup(notification, "title"),
            lookup(data, PINPOINT_TITLE),
        ])
        .unwrap_or(DEFAULT_TITLE);
        let body = first_present([lookup(notification, PINPOINT_BODY), lookup(data, "body")])
            .unwrap_or_default();
        let icon = first_present([lookup(notification, PINPOINT_ICON), lookup(data, "icon")])
            .unwrap_or(DEFAULT_ICON);

        let mut built = Self {
            title: title.to_string(),
            body: body.to_string(),
            icon: icon.to_string(),
            badge: DEFAULT_BADGE.to_string(),
            data: data.cloned().unwrap_or_default(),
            actions: vec![
                NotificationAction {
                    action: "open".to_string(),
                    title: "開く".to_string(),
                },
                NotificationAction {
                    action: "close".to_string(),
                    title: "閉じる".to_string(),
                },
            ],
            tag: None,
            require_interaction: false,
            vibrate: None,
        };

        if let Some(session_id) = lookup(data, "talk_session_id") {
            built.tag = Some(format!("talk-session-{}", session_id));
            built
                .data
                .insert("url".to_string(), format!("/talk-sessions/{}", session_id));
        }

        match lookup(data, "action") {
            Some("open_talk_session") => built.require_interaction = true,
            Some("open_talk_session_results") => built.vibrate = Some(RESULTS_VIBRATION.to_vec()),
            _ => {}
        }

        built
    }

    /// Notification for a raw push event carrying only a data section.
    ///
    /// Returns `None` when the payload has a notification section (the platform
    /// displays those itself) or no data at all.
    pub fn fallback_for_raw_push(payload: &PushPayload) -> Option<Self> {
        if payload.notification.is_some() {
            return None;
        }
        let data = payload.data.as_ref()?;

        Some(Self {
            title: lookup(Some(data), PINPOINT_TITLE)
                .unwrap_or(DEFAULT_TITLE)
                .to_string(),
            body: lookup(Some(data), PINPOINT_BODY)
                .unwrap_or_default()
                .to_string(),
            icon: lookup(Some(data), "icon").unwrap_or(DEFAULT_ICON).to_string(),
            badge: DEFAULT_BADGE.to_string(),
            data: data.clone(),
            actions: Vec::new(),
            tag: None,
            require_interaction: false,
            vibrate: None,
        })
    }
}

/// What a notification click leads to. The notification itself is always closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "url", rename_all = "snake_case")]
pub enum ClickOutcome {
    OpenWindow(String),
    Ignore,
}

pub fn route_click(data: &PushData, action: Option<&str>) -> ClickOutcome {
    if let Some(url) = lookup(Some(data), "url") {
        return ClickOutcome::OpenWindow(url.to_string());
    }
    match action {
        Some("open") => ClickOutcome::OpenWindow("/".to_string()),
        _ => ClickOutcome::Ignore,
    }
}

/// Message posted from a page to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ControlMessage {
    #[serde(rename = "ENABLE_LOG_FORWARDING")]
    EnableLogForwarding,
    #[serde(other)]
    Unknown,
}

/// Log line relayed from the worker to every open page.
#[derive(Debug, Clone, Serialize)]
pub struct ClientLogMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ClientLogMessage {
    pub fn new(message: String) -> Self {
        Self {
            kind: "SW_LOG",
            message,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct LogForwarder {
    enabled: bool,
}

impl LogForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true when the message switched forwarding on.
    pub fn handle(&mut self, message: &ControlMessage) -> bool {
        match message {
            ControlMessage::EnableLogForwarding if !self.enabled => {
                self.enabled = true;
                true
            }
            _ => false,
        }
    }

    /// Joins log arguments the way the console does; `None` while forwarding is off.
    pub fn forward(&self, args: &[&str]) -> Option<ClientLogMessage> {
        self.enabled.then(|| ClientLogMessage::new(args.join(" ")))
    }
}

fn lookup<'a>(map: Option<&'a PushData>, key: &str) -> Option<&'a str> {
    map.and_then(|m| m.get(key))
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

fn first_present<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> PushData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_background_defaults() {
        let built = Notification::from_background_message(&PushPayload::default());

        assert_eq!(built.title, DEFAULT_TITLE);
        assert_eq!(built.body, "");
        assert_eq!(built.icon, DEFAULT_ICON);
        assert_eq!(built.badge, DEFAULT_BADGE);
        assert_eq!(built.actions.len(), 2);
        assert_eq!(built.actions[0].action, "open");
        assert_eq!(built.actions[1].action, "close");
        assert!(built.tag.is_none());
    }

    #[test]
    fn test_background_prefers_notification_section() {
        let payload = PushPayload {
            notification: Some(data(&[
                ("title", "New opinion"),
                (PINPOINT_BODY, "Someone replied"),
                (PINPOINT_ICON, "/custom.png"),
            ])),
            data: Some(data(&[
                (PINPOINT_TITLE, "ignored"),
                ("body", "ignored"),
                ("icon", "/ignored.png"),
            ])),
        };
        let built = Notification::from_background_message(&payload);

        assert_eq!(built.title, "New opinion");
        assert_eq!(built.body, "Someone replied");
        assert_eq!(built.icon, "/custom.png");
    }

    #[test]
    fn test_background_falls_back_to_data() {
        let payload = PushPayload {
            notification: Some(data(&[("title", "")])),
            data: Some(data(&[
                (PINPOINT_TITLE, "From data"),
                ("body", "Body from data"),
                ("icon", "/data.png"),
            ])),
        };
        let built = Notification::from_background_message(&payload);

        assert_eq!(built.title, "From data");
        assert_eq!(built.body, "Body from data");
        assert_eq!(built.icon, "/data.png");
    }

    #[test]
    fn test_talk_session_tag_and_url() {
        let payload = PushPayload {
            notification: None,
            data: Some(data(&[
                ("talk_session_id", "abc"),
                ("action", "open_talk_session"),
            ])),
        };
        let built = Notification::from_background_message(&payload);

        assert_eq!(built.tag.as_deref(), Some("talk-session-abc"));
        assert_eq!(
            built.data.get("url").map(String::as_str),
            Some("/talk-sessions/abc")
        );
        assert!(built.require_interaction);
        assert!(built.vibrate.is_none());
    }

    #[test]
    fn test_results_action_vibrates() {
        let payload = PushPayload {
            notification: None,
            data: Some(data(&[("action", "open_talk_session_results")])),
        };
        let built = Notification::from_background_message(&payload);

        assert_eq!(built.vibrate, Some(vec![200, 100, 200]));
        assert!(!built.require_interaction);
    }

    #[test]
    fn test_raw_push_fallback() {
        let payload = PushPayload {
            notification: None,
            data: Some(data(&[
                (PINPOINT_TITLE, "Results are in"),
                (PINPOINT_BODY, "Open to see"),
            ])),
        };
        let built = Notification::fallback_for_raw_push(&payload).unwrap();

        assert_eq!(built.title, "Results are in");
        assert_eq!(built.body, "Open to see");
        assert_eq!(built.icon, DEFAULT_ICON);
        assert!(built.actions.is_empty());

        let with_notification = PushPayload {
            notification: Some(data(&[("title", "t")])),
            data: Some(data(&[])),
        };
        assert!(Notification::fallback_for_raw_push(&with_notification).is_none());
        assert!(Notification::fallback_for_raw_push(&PushPayload::default()).is_none());
    }

    #[test]
    fn test_route_click() {
        let with_url = data(&[("url", "/talk-sessions/abc")]);
        assert_eq!(
            route_click(&with_url, Some("close")),
            ClickOutcome::OpenWindow("/talk-sessions/abc".to_string())
        );

        let empty = PushData::new();
        assert_eq!(
            route_click(&empty, Some("open")),
            ClickOutcome::OpenWindow("/".to_string())
        );
        assert_eq!(route_click(&empty, Some("close")), ClickOutcome::Ignore);
        assert_eq!(route_click(&empty, None), ClickOutcome::Ignore);
    }

    #[test]
    fn test_log_forwarding() {
        let mut forwarder = LogForwarder::new();
        assert!(forwarder.forward(&["before"]).is_none());

        let unknown: ControlMessage = serde_json::from_str(r#"{"type":"PING"}"#).unwrap();
        assert!(!forwarder.handle(&unknown));
        assert!(!forwarder.is_enabled());

        let enable: ControlMessage =
            serde_json::from_str(r#"{"type":"ENABLE_LOG_FORWARDING"}"#).unwrap();
        assert!(forwarder.handle(&enable));
        assert!(!forwarder.handle(&enable));

        let message = forwarder.forward(&["push", "received"]).unwrap();
        assert_eq!(message.kind, "SW_LOG");
        assert_eq!(message.message, "push received");
    }

    #[test]
    fn test_notification_serialization() {
        let built = Notification::from_background_message(&PushPayload::default());
        let json = serde_json::to_value(&built).unwrap();

        assert_eq!(json["title"], DEFAULT_TITLE);
        assert!(json.get("tag").is_none());
        assert!(json.get("requireInteraction").is_none());
    }
}
