//! Small environment helpers

/// Value of the first variable in `names` that is set and non-empty
pub fn first_set_env_var(names: &[&str]) -> Option<String> {
    first_set(|name| std::env::var(name).ok(), names)
}

/// [`first_set_env_var`] over an arbitrary lookup
pub fn first_set<F>(lookup: F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}

/// Lenient boolean parse; anything unrecognized is `false`
pub fn str_to_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "t" | "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    #[test]
    fn test_first_set_skips_empty() {
        let env: HashMap<&str, String> =
            HashMap::from([("TOWER_HOST", String::new()), ("AWX_HOST", "https://awx".to_string())]);
        let value = first_set(|name| env.get(name).cloned(), &["TOWER_HOST", "AWX_HOST"]);
        assert_eq!(value.as_deref(), Some("https://awx"));
    }

    #[test]
    fn test_first_set_prefers_earlier() {
        let env: HashMap<&str, String> = HashMap::from([
            ("TOWER_HOST", "https://tower".to_string()),
            ("AWX_HOST", "https://awx".to_string()),
        ]);
        let value = first_set(|name| env.get(name).cloned(), &["TOWER_HOST", "AWX_HOST"]);
        assert_eq!(value.as_deref(), Some("https://tower"));
    }

    #[test]
    fn test_first_set_env_var_reads_process_env() {
        std::env::set_var("AWX_STATE_TEST_FIRST_SET_B", "second");
        std::env::set_var("AWX_STATE_TEST_FIRST_SET_C", "third");
        let value = first_set_env_var(&[
            "AWX_STATE_TEST_FIRST_SET_A",
            "AWX_STATE_TEST_FIRST_SET_B",
            "AWX_STATE_TEST_FIRST_SET_C",
        ]);
        assert_eq!(value.as_deref(), Some("second"));
        assert_eq!(first_set_env_var(&["AWX_STATE_TEST_FIRST_SET_A"]), None);
    }

    #[test]
    fn test_first_set_none() {
        assert_eq!(first_set(|_| None, &["A", "B"]), None);
    }

    #[test_case("true", true)]
    #[test_case("TRUE", true)]
    #[test_case("1", true)]
    #[test_case("t", true)]
    #[test_case("false", false)]
    #[test_case("0", false)]
    #[test_case("yes", false)]
    #[test_case("", false)]
    fn test_str_to_bool(input: &str, expected: bool) {
        assert_eq!(str_to_bool(input), expected);
    }
}
