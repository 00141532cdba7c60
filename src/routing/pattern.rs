//! Path patterns with named parameters.

use std::collections::HashMap;

/// Named parameters captured from a matched path.
pub type PathParams = HashMap<String, String>;

/// Parsed route path pattern.
///
/// Patterns are `/`-separated; a segment starting with `:` captures the
/// corresponding path segment under that name. `/plan/:platform/:account`
/// matches `/plan/weibo/alice` with `platform=weibo`, `account=alice`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

impl RoutePattern {
    /// Parses a pattern string.
    pub fn parse(pattern: &str) -> Self {
        let segments = split(pattern)
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Matches a concrete path, capturing named parameters.
    ///
    /// Segment counts must agree exactly; trailing slashes do not create
    /// segments, so `/accounts/` matches `/accounts`.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let parts: Vec<&str> = split(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(params)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern_matches_itself() {
        let pattern = RoutePattern::parse("/accounts");
        assert_eq!(pattern.match_path("/accounts"), Some(PathParams::new()));
        assert_eq!(pattern.match_path("/accounts/"), Some(PathParams::new()));
        assert!(pattern.match_path("/platforms").is_none());
    }

    #[test]
    fn test_root_pattern_matches_root_only() {
        let pattern = RoutePattern::parse("/");
        assert!(pattern.match_path("/").is_some());
        assert!(pattern.match_path("/accounts").is_none());
    }

    #[test]
    fn test_named_parameters_capture() {
        let pattern = RoutePattern::parse("/plan/:platform/:account");
        let params = pattern.match_path("/plan/weibo/alice").unwrap();
        assert_eq!(params["platform"], "weibo");
        assert_eq!(params["account"], "alice");
    }

    #[test]
    fn test_segment_count_must_agree() {
        let pattern = RoutePattern::parse("/plan/:platform/:account");
        assert!(pattern.match_path("/plan/weibo").is_none());
        assert!(pattern.match_path("/plan/weibo/alice/extra").is_none());
    }

    #[test]
    fn test_literal_segments_anchor_the_pattern() {
        let pattern = RoutePattern::parse("/plan/:platform/:account");
        assert!(pattern.match_path("/span/weibo/alice").is_none());
    }
}
