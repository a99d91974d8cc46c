//! JSON-lines console.
//!
//! One request per line:
//!
//! ```text
//! {"conversationId": "abc", "call": {"name": "UpdateCharacterClass", "class": "Fighter"}}
//! ```
//!
//! One response per line: `{"ok":true,"result":"..."}` or
//! `{"ok":false,"kind":"invalid_argument","error":"..."}`. Blank lines are
//! ignored.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::App;
use crate::use_cases::ToolError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRequest {
    pub conversation_id: String,
    pub call: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResponse {
    pub fn success(result: String) -> Self {
        Self {
            ok: true,
            result: Some(result),
            kind: None,
            error: None,
        }
    }

    pub fn failure(error: &ToolError) -> Self {
        Self {
            ok: false,
            result: None,
            kind: Some(error.kind()),
            error: Some(error.to_string()),
        }
    }
}

/// Handles one request line. `None` for blank lines.
pub fn handle_line(app: &App, line: &str) -> Option<ToolResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<ToolRequest>(line) {
        Ok(request) => match app
            .use_cases
            .character_tools
            .execute_json(&request.conversation_id, request.call)
        {
            Ok(result) => ToolResponse::success(result),
            Err(e) => ToolResponse::failure(&e),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable request line");
            ToolResponse::failure(&ToolError::BadRequest(e))
        }
    };
    Some(response)
}

/// Serves requests until the reader is exhausted.
pub async fn run<R, W>(app: Arc<App>, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut served = 0usize;
    while let Some(line) = lines.next_line().await? {
        let Some(response) = handle_line(&app, &line) else {
            continue;
        };
        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        writer.write_all(encoded.as_bytes()).await?;
        writer.flush().await?;
        served += 1;
    }
    tracing::info!(served = served, "Console input closed");
    Ok(())
}
