//! Identifier sanitizer
//!
//! Turns coordinate strings into identifiers. The mapping is total but not
//! injective; collisions are resolved by the collision resolver.

/// Characters replaced by `_`
const SEPARATORS: [char; 3] = ['-', '.', ':'];

/// Replaces `-`, `.` and `:` with `_` and lower-cases the rest
pub fn escape(raw: &str) -> String {
    raw.chars()
        .map(|c| if SEPARATORS.contains(&c) { '_' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Short identifier, derived from the artifact name alone
pub fn short_identifier(name: &str) -> String {
    escape(name)
}

/// Fully-qualified identifier, derived from group and name
pub fn fdqn_identifier(group: &str, name: &str) -> String {
    escape(&format!("{}_{}", group, name))
}
