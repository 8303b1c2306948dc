//! URL predicates used by the traversal policy.

use url::Url;

/// Check whether a discovered link leaves the seed's site.
///
/// Outbound-ness is raw host-string equality: two addresses with the same
/// host but different schemes or ports are treated as non-outbound, and no
/// `www.` normalization is applied.
#[must_use]
pub fn is_outbound_link(seed: &Url, candidate: &Url) -> bool {
    seed.host_str() != candidate.host_str()
}

/// Check whether a URL is fetchable over plain HTTP(S).
///
/// Filters out `mailto:`, `javascript:`, `data:` and similar non-document
/// schemes that an href attribute can legally carry.
#[must_use]
pub fn is_http_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_host_is_not_outbound() {
        let seed = Url::parse("https://a.com/pics").unwrap();
        let link = Url::parse("https://a.com/more/pics").unwrap();
        assert!(!is_outbound_link(&seed, &link));
    }

    #[test]
    fn different_host_is_outbound() {
        let seed = Url::parse("https://a.com/pics").unwrap();
        let link = Url::parse("https://b.com/images").unwrap();
        assert!(is_outbound_link(&seed, &link));
    }

    #[test]
    fn scheme_and_port_do_not_affect_outbound() {
        let seed = Url::parse("https://a.com/").unwrap();
        let http = Url::parse("http://a.com:8080/other").unwrap();
        assert!(!is_outbound_link(&seed, &http));
    }

    #[test]
    fn www_prefix_is_a_different_host() {
        let seed = Url::parse("https://a.com/").unwrap();
        let www = Url::parse("https://www.a.com/").unwrap();
        assert!(is_outbound_link(&seed, &www));
    }

    #[test]
    fn http_url_filter() {
        assert!(is_http_url(&Url::parse("http://a.com/x").unwrap()));
        assert!(is_http_url(&Url::parse("https://a.com/x").unwrap()));
        assert!(!is_http_url(&Url::parse("mailto:me@a.com").unwrap()));
        assert!(!is_http_url(&Url::parse("javascript:void(0)").unwrap()));
        assert!(!is_http_url(&Url::parse("data:text/plain,hi").unwrap()));
    }
}
