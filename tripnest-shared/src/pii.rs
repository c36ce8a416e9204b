use std::fmt;

const MASK: &str = "********";

/// A visitor e-mail address rendered with only its domain visible
/// (`********@example.com`), so log lines can be correlated without leaking
/// the mailbox itself.
///
/// Use it in log macros, e.g. `tracing::info!("from {}", MaskedEmail(&email))`.
#[derive(Clone, Copy)]
pub struct MaskedEmail<'a>(pub &'a str);

impl fmt::Display for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.rsplit_once('@') {
            Some((_, domain)) if !domain.is_empty() => write!(f, "{MASK}@{domain}"),
            _ => f.write_str(MASK),
        }
    }
}

impl fmt::Debug for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
