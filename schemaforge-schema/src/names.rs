//! Name helpers for generated types.

/// Converts a string to PascalCase.
///
/// Spaces, underscores and hyphens are treated as word separators and
/// removed; the character following a separator is upper-cased.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == ' ' || c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Parses a schema title into a usable type name.
///
/// Titles in the source dialect are free text ("accessor sparse indices");
/// the corresponding type name joins the words in PascalCase.
#[must_use]
pub fn parse_title(title: &str) -> String {
    to_pascal_case(title.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("message_header"), "MessageHeader");
        assert_eq!(to_pascal_case("side"), "Side");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
        assert_eq!(to_pascal_case("accessor sparse indices"), "AccessorSparseIndices");
    }

    #[test]
    fn test_parse_title() {
        assert_eq!(parse_title("Animation Sampler"), "AnimationSampler");
        assert_eq!(parse_title("  buffer view  "), "BufferView");
        assert_eq!(parse_title("Material"), "Material");
    }
}
