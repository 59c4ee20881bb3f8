//! `gitfolio token`: pure token shape check, no network involved

use anyhow::Result;

use gitfolio_core::identity::{validate_token, TokenKind};

use crate::output;

pub fn run(token: String, json: bool) -> Result<()> {
    let validation = validate_token(&token);

    let kind = match validation.kind {
        Some(TokenKind::FineGrained) => Some("fine-grained"),
        Some(TokenKind::Classic) => Some("classic"),
        None => None,
    };

    if json {
        let payload = serde_json::json!({
            "valid": validation.valid,
            "kind": kind,
        });
        output::print_json(&payload.to_string())?;
        return Ok(());
    }

    if validation.valid {
        // kind is always present when the shape is valid
        let kind = kind.unwrap_or("unknown");
        output::print_text(&format!("✓ Token shape is valid ({kind})"))?;
    } else {
        output::print_text(
            "✗ Token shape is invalid; requests would run as unauthenticated",
        )?;
    }

    Ok(())
}
