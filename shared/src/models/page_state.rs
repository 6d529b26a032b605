//! UI state carried in the address bar: the active tab in the hash and the
//! open edit accordion in `?edit=true`.

pub const EDIT_PARAM: &str = "edit";

/// Splits an href into `(base, query, fragment)`; query and fragment exclude
/// their leading `?` / `#`.
fn split_href(href: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match href.split_once('#') {
        Some((rest, frag)) => (rest, Some(frag)),
        None => (href, None),
    };
    match rest.split_once('?') {
        Some((base, query)) => (base, Some(query), fragment),
        None => (rest, None, fragment),
    }
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|v| v.into_owned())
        .unwrap_or(raw)
}

/// Reads a query parameter from a `location.search` string (with or without
/// the leading `?`).
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k) == key).then(|| decode(v))
        })
}

/// Returns `href` with `key` set to `value`, or removed when `value` is
/// `None`. Other parameters and the fragment are kept in order.
pub fn with_query_param(href: &str, key: &str, value: Option<&str>) -> String {
    let (base, query, fragment) = split_href(href);
    let mut pairs: Vec<String> = query
        .unwrap_or("")
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| decode(pair.split_once('=').map_or(*pair, |(k, _)| k)) != key)
        .map(str::to_string)
        .collect();
    if let Some(value) = value {
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        ));
    }

    let mut out = base.to_string();
    if !pairs.is_empty() {
        out.push('?');
        out.push_str(&pairs.join("&"));
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Whether the edit accordion should start open.
pub fn edit_requested(search: &str) -> bool {
    query_param(search, EDIT_PARAM).as_deref() == Some("true")
}

/// Address after the edit accordion opened or closed.
pub fn edit_href(href: &str, open: bool) -> String {
    with_query_param(href, EDIT_PARAM, open.then_some("true"))
}

/// Tab name from a `location.hash` value, if any.
pub fn tab_from_hash(hash: &str) -> Option<&str> {
    let tab = hash.trim_start_matches('#');
    (!tab.is_empty()).then_some(tab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_param_lookup() {
        assert_eq!(query_param("?edit=true&lang=pt", "lang").as_deref(), Some("pt"));
        assert_eq!(query_param("q=ana+costa", "q").as_deref(), Some("ana costa"));
        assert_eq!(query_param("", "edit"), None);
        assert!(edit_requested("?edit=true"));
        assert!(!edit_requested("?edit=false"));
    }

    #[test]
    fn test_with_query_param_replaces_and_keeps_fragment() {
        assert_eq!(
            with_query_param("https://club.test/league/3?lang=en#teams", "lang", Some("pt")),
            "https://club.test/league/3?lang=pt#teams"
        );
        assert_eq!(
            with_query_param("/league/3", "lang", Some("pt")),
            "/league/3?lang=pt"
        );
    }

    #[test]
    fn test_edit_href_toggles_parameter() {
        let opened = edit_href("/league/3?x=1#games", true);
        assert_eq!(opened, "/league/3?x=1&edit=true#games");
        assert_eq!(edit_href(&opened, false), "/league/3?x=1#games");
        assert_eq!(edit_href("/league/3?edit=true", false), "/league/3");
    }

    #[test]
    fn test_tab_from_hash() {
        assert_eq!(tab_from_hash("#standings"), Some("standings"));
        assert_eq!(tab_from_hash("#"), None);
        assert_eq!(tab_from_hash(""), None);
    }
}
