/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, bail};

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn load_secret(f: &str) -> Result<String> {
    let s = std::fs::read_to_string(f).with_context(|| format!("Failed to read {}", f))?;
    let s = s.trim().replace(char::from(25), "");

    if s.is_empty() {
        bail!("{} is empty", f);
    }

    Ok(s)
}

/// Query parameters arrive as empty strings when a form field is left blank.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Escapes `%`, `_` and `\` so the input matches literally inside a `LIKE ... ESCAPE '\'`.
pub fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }

        escaped.push(c);
    }

    escaped
}

pub fn validate_price_range(min_price: f64, max_price: f64) -> Result<(), String> {
    if !min_price.is_finite() || !max_price.is_finite() {
        return Err("Prices must be finite numbers".to_string());
    }

    if min_price < 0.0 {
        return Err("Minimum price cannot be negative".to_string());
    }

    if min_price > max_price {
        return Err("Minimum price cannot exceed maximum price".to_string());
    }

    Ok(())
}
