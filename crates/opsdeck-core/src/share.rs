use opsdeck_types::{Error, QueryParams, Result};

/// Encode a query snapshot as a shareable string, e.g.
/// `search=grace%20lee&role=admin&page=2`.
///
/// Only non-default fields are emitted, so the empty query encodes to the
/// empty string.
pub fn encode(params: &QueryParams) -> String {
    params
        .to_pairs()
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a string produced by [`encode`] (or typed by hand) back into a
/// query snapshot. A leading `?` is tolerated; missing keys take their
/// defaults.
pub fn decode(query: &str) -> Result<QueryParams> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut pairs = Vec::new();
    for part in query.split('&').filter(|part| !part.is_empty()) {
        let (key, raw) = part.split_once('=').unwrap_or((part, ""));
        let value = urlencoding::decode(raw)
            .map_err(|err| Error::InvalidArgument(format!("malformed query value: {}", err)))?;
        pairs.push((key.to_string(), value.into_owned()));
    }

    QueryParams::from_pairs(pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_types::{Role, Status};

    #[test]
    fn test_round_trip() {
        let params = QueryParams::new()
            .search("grace lee")
            .role(Role::Admin)
            .status(Status::Pending)
            .page(2);

        let encoded = encode(&params);
        assert_eq!(encoded, "search=grace%20lee&role=admin&status=pending&page=2");
        assert_eq!(decode(&encoded).unwrap(), params);
    }

    #[test]
    fn test_empty_query_encodes_to_empty_string() {
        assert_eq!(encode(&QueryParams::default()), "");
        assert_eq!(decode("").unwrap(), QueryParams::default());
    }

    #[test]
    fn test_leading_question_mark_is_tolerated() {
        let params = decode("?search=bob&page=2").unwrap();
        assert_eq!(params.search, "bob");
        assert_eq!(params.page, 2);
    }

    #[test]
    fn test_bad_page_is_rejected() {
        assert!(decode("page=0").is_err());
        assert!(decode("role=owner").is_err());
    }
}
