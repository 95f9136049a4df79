/// RFC 4253 7.1: The chosen algorithm is the first algorithm on the client's list that is
/// also on the server's list.
pub fn common_algorithm<'a, C, S>(client: &'a [C], server: &[S]) -> Option<&'a str>
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    client
        .iter()
        .map(|c| -> &'a str { c.as_ref() })
        .find(|c| server.iter().any(|s| s.as_ref() == *c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_algorithm_01() {
        let client = ["a", "b", "c"];
        let server = ["c", "b"];
        assert_eq!(common_algorithm(&client, &server), Some("b"));
    }

    #[test]
    fn test_common_algorithm_02() {
        let client = vec!["a".to_string()];
        let server = vec!["b".to_string()];
        assert_eq!(common_algorithm(&client, &server), None);
    }

    #[test]
    fn test_common_algorithm_03() {
        let client: [&str; 0] = [];
        assert_eq!(common_algorithm(&client, &["a"]), None);
    }
}
