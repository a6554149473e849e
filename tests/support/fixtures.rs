// tests/support/fixtures.rs
use once_cell::sync::Lazy;
use timelabel::domain::timestamp::UtcOffset;

/// UTC-05:00, a typical US Eastern winter offset.
pub static EASTERN: Lazy<UtcOffset> =
    Lazy::new(|| UtcOffset::from_minutes(-5 * 60).expect("valid offset"));

/// UTC+05:30.
pub static INDIA: Lazy<UtcOffset> =
    Lazy::new(|| UtcOffset::from_minutes(5 * 60 + 30).expect("valid offset"));

pub static UTC: Lazy<UtcOffset> = Lazy::new(|| UtcOffset::from_minutes(0).expect("valid offset"));

/// A status page as the standup board renders it, one broken timestamp included.
pub const STATUS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <article class="status">
    <p>Fixed bug 123 #webdev</p>
    <a class="permalink"><time datetime="2024-01-15T21:05:00+00:00">21:05 UTC</time></a>
  </article>
  <article class="status">
    <p>Reviewed pull 45</p>
    <a class="permalink"><time datetime="2024-01-15T14:07:00Z">14:07 UTC</time></a>
  </article>
  <article class="status">
    <p>Broken export</p>
    <a class="permalink"><time datetime="last tuesday">sometime</time></a>
  </article>
  <article class="status">
    <p>Late night deploy</p>
    <a class="permalink"><time datetime="2024-01-16T05:00:00Z">05:00 UTC</time></a>
  </article>
</body>
</html>
"#;
