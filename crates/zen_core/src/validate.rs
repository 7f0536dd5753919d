/// Accepted URL shapes for the supported video host, tested after the
/// optional scheme and optional `www.` prefix are stripped. The path
/// separator after the host is part of the shape: a bare host with no path
/// is not accepted. Later entries are narrower forms of the first and are
/// kept so the table reads as the list of supported link styles.
const ACCEPTED_SHAPES: &[&str] = &[
    "youtube.com/",
    "youtu.be/",
    "youtube-nocookie.com/",
    "youtube.com/watch?v=",
    "youtube.com/embed/",
    "youtube.com/v/",
];

/// Whether `candidate` looks like a supported video URL.
///
/// Trims surrounding whitespace, rejects empty input, then matches the
/// remainder case-insensitively against [`ACCEPTED_SHAPES`] with an
/// optional `http://`/`https://` scheme and optional `www.` prefix.
/// Pure and deterministic; no network, no terminal.
pub fn is_acceptable(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }

    let lowered = trimmed.to_ascii_lowercase();
    let rest = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    ACCEPTED_SHAPES.iter().any(|shape| rest.starts_with(shape))
}
