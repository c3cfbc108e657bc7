//! Text formatting helpers for the dashboard

/// Title-case a value, treating every non-alphanumeric run as one word break.
///
/// `"storm_wolf"` becomes `"Storm Wolf"`, `"FIRE"` becomes `"Fire"`.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut new_word = true;

    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if new_word {
                result.extend(ch.to_uppercase());
                new_word = false;
            } else {
                result.extend(ch.to_lowercase());
            }
        } else {
            if !result.is_empty() && !result.ends_with(' ') {
                result.push(' ');
            }
            new_word = true;
        }
    }

    result.trim().to_owned()
}

/// Join affinities for display, title-cased with a bullet separator
pub fn join_affinities(affinities: &[String]) -> String {
    if affinities.is_empty() {
        return "Unaligned".to_owned();
    }
    affinities
        .iter()
        .map(|affinity| title_case(affinity))
        .collect::<Vec<_>>()
        .join(" \u{2022} ")
}

/// `"1 soul"` / `"3 souls"`
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("fire"), "Fire");
        assert_eq!(title_case("STORM WOLF"), "Storm Wolf");
        assert_eq!(title_case("storm_wolf"), "Storm Wolf");
        assert_eq!(title_case("  spaced  out "), "Spaced Out");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("---"), "");
    }

    #[test]
    fn test_join_affinities() {
        assert_eq!(join_affinities(&[]), "Unaligned");
        assert_eq!(
            join_affinities(&["fire".to_owned(), "METAL".to_owned()]),
            "Fire \u{2022} Metal"
        );
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1, "soul", "souls"), "1 soul");
        assert_eq!(count_label(0, "soul", "souls"), "0 souls");
        assert_eq!(count_label(4, "entry", "entries"), "4 entries");
    }
}
