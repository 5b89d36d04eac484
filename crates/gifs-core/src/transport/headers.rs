//! Request header assembly.

/// Ordered `(name, value)` pairs sent with a request.
pub type Headers = Vec<(String, String)>;

/// Header carrying the account API key.
pub const API_KEY_HEADER: &str = "Gifs-Api-Key";

const CONTENT_TYPE: &str = "Content-Type";

/// Caller headers first, then `Content-Type: application/json` and the API
/// key (when non-empty). The last two replace any caller header of the same
/// name, compared case-insensitively.
pub fn merge_headers<'a, I>(custom: I, api_key: Option<&str>) -> Headers
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let api_key = api_key.filter(|k| !k.is_empty());
    let mut out: Headers = custom
        .into_iter()
        .filter(|(name, _)| {
            let name = name.trim();
            !name.eq_ignore_ascii_case(CONTENT_TYPE)
                && !(api_key.is_some() && name.eq_ignore_ascii_case(API_KEY_HEADER))
        })
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    out.push((CONTENT_TYPE.to_string(), "application/json".to_string()));
    if let Some(key) = api_key {
        out.push((API_KEY_HEADER.to_string(), key.to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn get<'a>(h: &'a Headers, name: &str) -> Vec<&'a str> {
        h.iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn json_content_type_always_set() {
        let h = merge_headers(&BTreeMap::<String, String>::new(), None);
        assert_eq!(h, vec![("Content-Type".to_string(), "application/json".to_string())]);
    }

    #[test]
    fn custom_headers_kept_and_key_added() {
        let mut custom = BTreeMap::new();
        custom.insert("X-Trace".to_string(), " abc ".to_string());
        let h = merge_headers(&custom, Some("foo"));
        assert_eq!(get(&h, "x-trace"), vec!["abc"]);
        assert_eq!(get(&h, API_KEY_HEADER), vec!["foo"]);
        assert_eq!(get(&h, "content-type"), vec!["application/json"]);
    }

    #[test]
    fn fixed_headers_override_caller_values() {
        let mut custom = BTreeMap::new();
        custom.insert("content-type".to_string(), "text/plain".to_string());
        custom.insert("gifs-api-key".to_string(), "stale".to_string());
        let h = merge_headers(&custom, Some("fresh"));
        assert_eq!(get(&h, "content-type"), vec!["application/json"]);
        assert_eq!(get(&h, API_KEY_HEADER), vec!["fresh"]);
    }

    #[test]
    fn empty_key_leaves_caller_key_header_alone() {
        let mut custom = BTreeMap::new();
        custom.insert("Gifs-Api-Key".to_string(), "from-headers".to_string());
        let h = merge_headers(&custom, Some(""));
        assert_eq!(get(&h, API_KEY_HEADER), vec!["from-headers"]);
    }
}
