//! Project-name sanitization for filesystem use.

/// Sanitizes a decoded `name` parameter into a safe project name.
///
/// The result doubles as the archive file stem and the suggested module
/// name, so it has to be a valid Linux filename:
///
/// - NUL, `/`, `\`, control characters, and whitespace become `_`
/// - Consecutive `_` collapse to one
/// - Leading/trailing spaces, dots, and underscores are trimmed
/// - Length is capped at 255 bytes (NAME_MAX)
///
/// The empty string comes back for names that are nothing but junk; callers
/// treat that as "no usable name".
pub fn sanitize_project_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let replacement = if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            '_'
        } else if c.is_whitespace() {
            '_'
        } else {
            c
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
