//! Client identification utilities
//!
//! Request metadata recorded alongside sign-up and sign-in log lines.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Who is calling, as far as the headers tell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    /// Client IP address (from X-Forwarded-For or direct connection)
    pub ip: Option<IpAddr>,
    /// Original User-Agent string
    pub user_agent: Option<String>,
}

impl ClientInfo {
    /// IP as string, `-` when unknown (for log fields)
    pub fn ip_string(&self) -> String {
        self.ip.map_or_else(|| "-".to_string(), |ip| ip.to_string())
    }

    /// User-Agent, `-` when absent (for log fields)
    pub fn user_agent_str(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("-")
    }
}

/// Collect client metadata from request headers
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - Direct connection IP address, when known
pub fn extract_client_info(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> ClientInfo {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    ClientInfo {
        ip: extract_client_ip(headers, direct_ip),
        user_agent,
    }
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    // Check X-Forwarded-For header (first IP in the list)
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}
