//! Path and URL helpers for installer artifacts
//!
//! Tool names and source locations come straight from the manifest, so
//! everything that turns them into file names goes through here.

/// Characters that are unsafe in file names on at least one platform.
/// Spaces are included because downloaded installers are named `Tool_Name.exe`.
const FILE_NAME_UNSAFE_CHARS: &[char] = &[' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Turn a tool name into a file stem.
///
/// Spaces and characters that are invalid in Windows file names become
/// underscores. Returns "tool" if nothing usable is left.
///
/// ```ignore
/// assert_eq!(make_file_stem("VLC Media Player"), "VLC_Media_Player");
/// ```
pub fn make_file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if FILE_NAME_UNSAFE_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    if stem.chars().all(|c| c == '_') {
        "tool".to_string()
    } else {
        stem
    }
}

/// Strip any `?query` or `#fragment` from a source location.
fn strip_query(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

/// Last path segment of a URL or relative path, without query string.
///
/// Both `/` and `\` count as separators so manifest paths written on Windows
/// resolve the same way. Returns `None` when the location ends in a separator.
pub fn source_basename(location: &str) -> Option<&str> {
    let path = strip_query(location.trim());
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if name.is_empty() { None } else { Some(name) }
}

/// Whether a source location names an MSI package by its suffix.
pub fn has_msi_suffix(location: &str) -> bool {
    strip_query(location.trim())
        .to_ascii_lowercase()
        .ends_with(".msi")
}

/// Join a base URL and a file name with exactly one slash between them.
pub fn join_url(base: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file_name.trim_start_matches('/')
    )
}
