//! The target a run points at: one base URL, fixed for the whole run.

use url::Url;

use crate::error::ConfigError;
use crate::services::{IdPlacement, RetrievalEndpoint};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    base: Url,
}

impl Environment {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };

        let base = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", base.scheme())));
        }
        if base.cannot_be_a_base() || base.host_str().is_none() {
            return Err(invalid("URL has no host".to_string()));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(invalid("base URL must not carry a query or fragment".to_string()));
        }

        Ok(Self { base })
    }

    /// Base URL as shown to the operator, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Resolve an endpoint path such as `/edit` against the base URL.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|segment| !segment.is_empty()));
        }
        url
    }

    /// Resolve a retrieval endpoint, placing `id` where the route asks for it.
    ///
    /// URL parsing collapses `.` and `..` segments (percent-encoded or not),
    /// so such ids cannot address a resource by path and are rejected.
    pub fn retrieval(&self, route: RetrievalEndpoint, id: &str) -> Result<Url, String> {
        let mut url = self.endpoint(route.path);
        match route.id {
            IdPlacement::PathSegment => {
                if matches!(id, "." | "..") {
                    return Err(format!("id `{id}` cannot be used as a path segment"));
                }
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.push(id);
                }
            }
            IdPlacement::Query(name) => {
                url.query_pairs_mut().append_pair(name, id);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(raw: &str) -> Environment {
        Environment::parse(raw).unwrap()
    }

    #[test]
    fn endpoint_joins_path() {
        assert_eq!(
            env("http://localhost:8081").endpoint("/edit").as_str(),
            "http://localhost:8081/edit"
        );
        assert_eq!(
            env("http://localhost:8081/").endpoint("/product").as_str(),
            "http://localhost:8081/product"
        );
    }

    #[test]
    fn endpoint_keeps_base_prefix() {
        assert_eq!(
            env("http://example.com/api/v1/").endpoint("/retrieve").as_str(),
            "http://example.com/api/v1/retrieve"
        );
    }

    #[test]
    fn query_placement_encodes_id() {
        let route = RetrievalEndpoint {
            path: "/retrieve",
            id: IdPlacement::Query("id"),
        };
        assert_eq!(
            env("http://localhost:8081").retrieval(route, "42").unwrap().as_str(),
            "http://localhost:8081/retrieve?id=42"
        );
        assert_eq!(
            env("http://localhost:8081").retrieval(route, "a b&c=d").unwrap().as_str(),
            "http://localhost:8081/retrieve?id=a+b%26c%3Dd"
        );
    }

    #[test]
    fn path_placement_is_one_segment() {
        let route = RetrievalEndpoint {
            path: "/product",
            id: IdPlacement::PathSegment,
        };
        assert_eq!(
            env("http://localhost:8081").retrieval(route, "23823").unwrap().as_str(),
            "http://localhost:8081/product/23823"
        );
        assert_eq!(
            env("http://localhost:8081").retrieval(route, "a/b c").unwrap().as_str(),
            "http://localhost:8081/product/a%2Fb%20c"
        );
    }

    #[test]
    fn dot_ids_are_rejected_in_path() {
        let route = RetrievalEndpoint {
            path: "/product",
            id: IdPlacement::PathSegment,
        };
        for id in [".", ".."] {
            let err = env("http://localhost:8081").retrieval(route, id).unwrap_err();
            assert_eq!(err, format!("id `{id}` cannot be used as a path segment"));
        }
        assert_eq!(
            env("http://localhost:8081").retrieval(route, "...").unwrap().as_str(),
            "http://localhost:8081/product/..."
        );
    }

    #[test]
    fn dot_ids_are_fine_in_query() {
        let route = RetrievalEndpoint {
            path: "/retrieve",
            id: IdPlacement::Query("id"),
        };
        assert_eq!(
            env("http://localhost:8081").retrieval(route, "..").unwrap().as_str(),
            "http://localhost:8081/retrieve?id=.."
        );
    }

    #[test]
    fn base_url_display_trims_slash() {
        assert_eq!(env("http://localhost:8081/").base_url(), "http://localhost:8081");
    }

    #[test]
    fn rejects_bad_base_urls() {
        assert!(matches!(
            Environment::parse("localhost:8081"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            Environment::parse("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            Environment::parse("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            Environment::parse("http://example.com/?x=1"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
