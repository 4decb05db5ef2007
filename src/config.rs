pub const SITE_TITLE: &str = "DevXdiscovery";

/// Past this many pixels the floating scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
/// Added to `scrollY` before testing section bounds, covers the fixed navbar.
pub const SECTION_LOOKAHEAD: f64 = 100.0;
/// Gap left above a section when scrolling to it.
pub const NAVBAR_CLEARANCE: f64 = 80.0;
/// Navbar switches to its solid "scrolled" style past this offset.
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 10.0;

pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1_500;
pub const SUCCESS_CLEAR_DELAY_MS: u32 = 5_000;

/// Fraction of an element that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where contact submissions go. `None` keeps the simulated handler.
/// Set `CONTACT_ENDPOINT` when building to point at a real endpoint.
pub fn contact_endpoint() -> Option<String> {
    resolve_endpoint(option_env!("CONTACT_ENDPOINT"), get_backend_url())
}

fn resolve_endpoint(raw: Option<&str>, base: &str) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Some(raw.to_string())
    } else {
        Some(format!("{}/{}", base.trim_end_matches('/'), raw.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_endpoint_keeps_simulation() {
        assert_eq!(resolve_endpoint(None, "http://localhost:3001"), None);
        assert_eq!(resolve_endpoint(Some("   "), "http://localhost:3001"), None);
    }

    #[test]
    fn absolute_endpoint_is_used_as_is() {
        assert_eq!(
            resolve_endpoint(Some("https://forms.example.com/contact"), "http://localhost:3001"),
            Some("https://forms.example.com/contact".to_string())
        );
    }

    #[test]
    fn relative_endpoint_joins_backend_url() {
        assert_eq!(
            resolve_endpoint(Some("/api/contact"), "http://localhost:3001/"),
            Some("http://localhost:3001/api/contact".to_string())
        );
        assert_eq!(
            resolve_endpoint(Some("api/contact"), ""),
            Some("/api/contact".to_string())
        );
    }
}
