//! String transforms shared by package naming and rendering.

use super::keywords::is_kotlin_keyword;

/// Uppercase the first character.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert `snake_case` and `kebab-case` runs to `camelCase`.
///
/// Applied to whole output paths, so `/` and `.` pass through untouched.
pub fn snake_to_camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut upper_next = false;
    for c in input.chars() {
        if c == '_' || c == '-' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Escape an identifier that is not directly expressible in Kotlin.
///
/// Keywords and names containing characters that are illegal in Kotlin
/// identifiers are wrapped in backticks.
pub fn escape_identifier(name: &str) -> String {
    let illegal = name
        .chars()
        .any(|c| !c.is_alphanumeric() && c != '_')
        || name.chars().next().is_some_and(|c| c.is_ascii_digit());

    if is_kotlin_keyword(name) || illegal {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Longest common prefix of several segment sequences.
///
/// An absent or empty first sequence yields the empty prefix; a single
/// sequence is its own prefix.
pub fn common_prefix(sources: &[Vec<String>]) -> Vec<String> {
    let Some(first) = sources.first() else {
        return Vec::new();
    };

    let mut common = first.clone();

    for other in &sources[1..] {
        if other.is_empty() {
            continue;
        }
        let length = common
            .iter()
            .zip(other.iter())
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(length);
    }

    common
}

/// Translate a glob pattern into an anchored regular expression.
///
/// Supports `**` (any path), `*` (any segment run), and `?` (single char);
/// everything else is matched literally.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::from("^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    // swallow a path separator directly after `**`
                    if chars.peek() == Some(&'/') {
                        chars.next();
                        regex.push_str("(?:.*/)?");
                    } else {
                        regex.push_str(".*");
                    }
                } else {
                    regex.push_str("[^/]*");
                }
            }
            '?' => regex.push_str("[^/]"),
            c if "\\.+()[]{}^$|".contains(c) => {
                regex.push('\\');
                regex.push(c);
            }
            c => regex.push(c),
        }
    }

    regex.push('$');
    regex
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pathname", "Pathname")]
    #[case("", "")]
    #[case("p", "P")]
    fn capitalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }

    #[rstest]
    #[case("foo_bar", "fooBar")]
    #[case("foo-bar/baz_qux.kt", "fooBar/bazQux.kt")]
    #[case("plain", "plain")]
    fn snake_to_camel(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(snake_to_camel_case(input), expected);
    }

    #[test]
    fn escapes_keywords_and_illegal_names() {
        assert_eq!(escape_identifier("object"), "`object`");
        assert_eq!(escape_identifier("data-set"), "`data-set`");
        assert_eq!(escape_identifier("pathname"), "pathname");
    }

    fn segments(path: &str) -> Vec<String> {
        path.split('/').map(str::to_string).collect()
    }

    #[test]
    fn common_prefix_of_disjoint_paths_is_empty() {
        let prefix = common_prefix(&[segments("a/b"), segments("c/d")]);
        assert!(prefix.is_empty());
    }

    #[test]
    fn common_prefix_of_nested_paths() {
        let prefix = common_prefix(&[segments("a/b/c"), segments("a/b/d"), segments("a/b")]);
        assert_eq!(prefix, segments("a/b"));
    }

    #[test]
    fn common_prefix_of_single_source_is_itself() {
        assert_eq!(common_prefix(&[segments("a/b")]), segments("a/b"));
        assert!(common_prefix(&[]).is_empty());
    }

    #[rstest]
    #[case("**/*.kt", "out/deep/a.kt", true)]
    #[case("**/*.kt", "a.kt", true)]
    #[case("out/*.kt", "out/deep/a.kt", false)]
    #[case("out/?.kt", "out/a.kt", true)]
    fn glob_matching(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        let re = regex::Regex::new(&glob_to_regex(pattern)).unwrap();
        assert_eq!(re.is_match(path), expected);
    }
}
