/// Initials for an avatar: the first character of each whitespace-separated
/// part of the name, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_part_name() {
        assert_eq!(initials("John Doe"), "JD");
    }

    #[test]
    fn test_lowercase_and_extra_spaces() {
        assert_eq!(initials("  alex   de  johnson "), "ADJ");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(initials("élodie ørsted"), "ÉØ");
    }
}
