/// Remove a UTF-8 byte order mark left at the start of a decoded stream
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}1"), "1");
        assert_eq!(strip_bom("1"), "1");
    }
}
