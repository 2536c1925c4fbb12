//! Ordering stage

use crate::domain::Dependency;

/// Sorts by `group:name:version`, by code point, keeping equal keys in place
pub fn sort_dependencies(dependencies: &mut [Dependency]) {
    dependencies.sort_by_cached_key(Dependency::coordinate);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinates(deps: &[Dependency]) -> Vec<String> {
        deps.iter().map(Dependency::coordinate).collect()
    }

    #[test]
    fn test_sort_by_coordinate() {
        let mut deps = vec![
            Dependency::new("org.junit", "junit-bom", "5.10.0"),
            Dependency::new("com.google", "guava", "32.0"),
            Dependency::new("com.google", "gson", "2.10"),
        ];
        sort_dependencies(&mut deps);
        assert_eq!(
            coordinates(&deps),
            vec![
                "com.google:gson:2.10",
                "com.google:guava:32.0",
                "org.junit:junit-bom:5.10.0",
            ]
        );
    }

    #[test]
    fn test_sort_is_code_point_order() {
        // Upper case sorts before lower case, '-' (0x2d) before '.' (0x2e)
        let mut deps = vec![
            Dependency::new("a", "lib", "1"),
            Dependency::new("B", "lib", "1"),
            Dependency::new("a.b", "x", "1"),
            Dependency::new("a-b", "x", "1"),
        ];
        sort_dependencies(&mut deps);
        assert_eq!(
            coordinates(&deps),
            vec!["B:lib:1", "a-b:x:1", "a.b:x:1", "a:lib:1"]
        );
    }

    #[test]
    fn test_sort_is_independent_of_input_order() {
        let mut first = vec![
            Dependency::new("b", "y", "1"),
            Dependency::new("a", "x", "2"),
            Dependency::new("a", "x", "1"),
        ];
        let mut second: Vec<_> = first.iter().rev().cloned().collect();
        sort_dependencies(&mut first);
        sort_dependencies(&mut second);
        assert_eq!(first, second);
    }
}
