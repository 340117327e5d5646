use std::io::Read;
use std::path::PathBuf;
use talk_admin_domain::push::{route_click, PushData};
use talk_admin_domain::{Notification, PushPayload};

use crate::cli::PushAction;
use crate::output;

pub fn handle(action: PushAction) -> anyhow::Result<()> {
    match action {
        PushAction::Render { file, raw } => {
            let payload = read_payload(file)?;
            let notification = if raw {
                Notification::fallback_for_raw_push(&payload)
            } else {
                Some(Notification::from_background_message(&payload))
            };
            tracing::debug!(raw, shown = notification.is_some(), "Rendered push payload");
            output::output_success(serde_json::json!({ "notification": notification }));
        }
        PushAction::Click { data, action } => {
            let data: PushData = match data {
                Some(raw) => match serde_json::from_str(&raw) {
                    Ok(data) => data,
                    Err(e) => {
                        return output::output_error(&format!("Invalid notification data: {}", e))
                    }
                },
                None => PushData::new(),
            };
            output::output_success(route_click(&data, action.as_deref()));
        }
    }
    Ok(())
}

fn read_payload(file: Option<PathBuf>) -> anyhow::Result<PushPayload> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    match serde_json::from_str(&raw) {
        Ok(payload) => Ok(payload),
        Err(e) => output::output_error(&format!("Invalid push payload: {}", e)),
    }
}
