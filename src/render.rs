//! Work-mode hosts file rendering.

/// Loopback address blocked domains resolve to.
pub const LOOPBACK: &str = "127.0.0.1";

/// Header separating the baseline from the blocked section.
pub const BLOCKED_HEADER: &str = "# Blocked sites:";

/// Renders the work-mode hosts file.
///
/// The output is the baseline, a blank line, [`BLOCKED_HEADER`], a blank
/// line, then one `127.0.0.1  <domain>` line per domain in list order.
/// Domains are neither deduplicated nor validated.
///
/// ```
/// let out = workplay::render(b"127.0.0.1 localhost\n", &["x.com", "y.com"]);
/// assert_eq!(
///     out,
///     b"127.0.0.1 localhost\n\n# Blocked sites:\n\n127.0.0.1  x.com\n127.0.0.1  y.com\n"
/// );
/// ```
#[must_use]
pub fn render<S: AsRef<str>>(baseline: &[u8], domains: &[S]) -> Vec<u8> {
    let mut out = baseline.to_vec();
    if !out.is_empty() && !out.ends_with(b"\n") {
        out.push(b'\n');
    }

    out.push(b'\n');
    out.extend_from_slice(BLOCKED_HEADER.as_bytes());
    out.extend_from_slice(b"\n\n");
    for domain in domains {
        out.extend_from_slice(format!("{LOOPBACK}  {}\n", domain.as_ref()).as_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_expected_bytes() {
        let out = render(b"127.0.0.1 localhost\n", &["x.com", "y.com"]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "127.0.0.1 localhost\n\n# Blocked sites:\n\n127.0.0.1  x.com\n127.0.0.1  y.com\n"
        );
    }

    #[test]
    fn is_deterministic() {
        let domains = vec!["a.com".to_string(), "b.com".to_string()];
        assert_eq!(render(b"base\n", &domains), render(b"base\n", &domains));
    }

    #[test]
    fn preserves_domain_order() {
        let out = String::from_utf8(render(b"", &["b.com", "a.com"])).unwrap();
        let b = out.find("127.0.0.1  b.com").unwrap();
        let a = out.find("127.0.0.1  a.com").unwrap();
        assert!(b < a);
    }

    #[test]
    fn keeps_duplicates() {
        let out = String::from_utf8(render(b"", &["a.com", "a.com"])).unwrap();
        assert_eq!(out.matches("127.0.0.1  a.com\n").count(), 2);
    }

    #[test]
    fn terminates_unterminated_baseline() {
        let out = render(b"127.0.0.1 localhost", &["x.com"]);
        assert_eq!(
            out,
            b"127.0.0.1 localhost\n\n# Blocked sites:\n\n127.0.0.1  x.com\n"
        );
    }

    #[test]
    fn empty_list_still_writes_header() {
        let out = render::<&str>(b"base\n", &[]);
        assert_eq!(out, b"base\n\n# Blocked sites:\n\n");
    }
}
