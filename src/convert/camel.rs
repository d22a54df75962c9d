/// Convert text to camelCase
///
/// The whole input is lowercased, then the character following each
/// separator run is uppercased and the separators are dropped. The
/// first emitted character stays lowercase even when the input starts
/// with separators. Unlike the kebab converter there is no case
/// splitting: `fooBar` comes out as `foobar`.
pub fn to_camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = false;

    for c in input.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            capitalize_next = true;
        } else if capitalize_next && !result.is_empty() {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
            capitalize_next = false;
        }
    }

    result
}
