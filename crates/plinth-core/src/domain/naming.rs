//! Identifier case transforms.
//!
//! Generated file names and symbol names are derived from user-supplied
//! identifiers, which arrive in whatever casing the user typed. These
//! transforms are pure, total over printable input, and idempotent —
//! `to_pascal_case(to_pascal_case(x)) == to_pascal_case(x)`.

/// Convert a string to PascalCase.
///
/// ## Rules
///
/// 1. Split on word boundaries (see `split_words`)
/// 2. Capitalize first letter of each word
/// 3. Join without separator
///
/// ## Examples
///
/// | Input | Output |
/// |-------|--------|
/// | "my-widget" | "MyWidget" |
/// | "HTTPRequest" | "HttpRequest" |
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a string to camelCase.
///
/// ## Rules
///
/// Same word split as `to_pascal_case`, but the first word stays lowercase.
///
/// | Input | Output |
/// |-------|--------|
/// | "user form" | "userForm" |
/// | "XMLHttpRequest" | "xmlHttpRequest" |
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Split a string into words based on casing and separators.
///
/// ## Word Boundary Detection
///
/// 1. **Explicit separators:** `_`, `-`, whitespace → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` → split between `P` and `R`
///    (detected by `Upper Upper Lower` pattern)
///
/// ## Rationale
///
/// This handles the "identifier hell" of programming:
/// - `my_user_store` (snake_case)
/// - `my-user-store` (kebab-case)
/// - `myUserStore` (camelCase)
/// - `MyUserStore` (PascalCase)
/// - `XMLHttpRequest` (acronyms)
/// - `my HTTP request` (natural language)
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    // Peekable allows looking ahead for boundary detection without consuming
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        // Rule 1: Explicit separators always end the current word
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        // Rule 2: camelCase transition (lowercase -> uppercase)
        // "myApp" → "my" + "App"
        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Rule 3: Acronym boundary detection
            // "HTTPServer" → "HTTP" + "Server"
            // Detected by: Uppercase, Next is Uppercase, Next+1 is Lowercase
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    // Don't forget the last word
    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_from_kebab() {
        assert_eq!(to_pascal_case("my-widget"), "MyWidget");
    }

    #[test]
    fn pascal_from_snake() {
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
    }

    #[test]
    fn pascal_from_spaces() {
        assert_eq!(to_pascal_case("my awesome page"), "MyAwesomePage");
    }

    #[test]
    fn pascal_handles_acronyms() {
        assert_eq!(to_pascal_case("HTTPRequest"), "HttpRequest");
        assert_eq!(to_pascal_case("XMLHttpRequest"), "XmlHttpRequest");
    }

    #[test]
    fn camel_from_kebab() {
        assert_eq!(to_camel_case("my-widget"), "myWidget");
    }

    #[test]
    fn camel_from_spaces() {
        assert_eq!(to_camel_case("user form"), "userForm");
    }

    #[test]
    fn pascal_is_idempotent() {
        for input in &["my-widget", "HTTPRequest", "alreadyCamel", "Already", "a"] {
            let once = to_pascal_case(input);
            assert_eq!(to_pascal_case(&once), once, "failed for: {input}");
        }
    }

    #[test]
    fn camel_is_idempotent() {
        for input in &["my-widget", "XMLHttpRequest", "userForm", "user", "U"] {
            let once = to_camel_case(input);
            assert_eq!(to_camel_case(&once), once, "failed for: {input}");
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn single_word_transforms() {
        assert_eq!(to_pascal_case("task"), "Task");
        assert_eq!(to_camel_case("Task"), "task");
    }
}
