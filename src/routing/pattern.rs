//! Pattern compilation.
//!
//! # Responsibilities
//! - Translate a route pattern into an anchored regular expression
//! - Bind each `:name` token to a capture group
//! - Extract parameters from a path that satisfies the pattern
//!
//! # Pattern Syntax
//! ```text
//! literal   matched as-is (regex metacharacters are NOT escaped)
//! *         first occurrence only, one segment:    [,a-zA-Z0-9_-]*
//! **        first occurrence only, spans '/':      [,/a-zA-Z0-9_-]*
//! :name     every occurrence, captured as `name`:  [,a-zA-Z0-9%_-]*
//! ?query    always permitted after the path:       (\?[a-zA-Z0-9%_=&-]*)?
//! ```
//!
//! # Design Decisions
//! - Parameter names may contain `,` `-` and leading digits, none of which
//!   are legal regex group names. Each parameter gets a generated group id
//!   and the matcher keeps the id → name binding.
//! - Only the first `*` and `**` are rewritten; a second `*` keeps its regex
//!   meaning
//! - Named groups written literally in a pattern are extracted alongside
//!   `:name` parameters

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::routing::params::Params;

const SEGMENT_WILDCARD: &str = "[,a-zA-Z0-9_-]*";
const MULTI_SEGMENT_WILDCARD: &str = "[,/a-zA-Z0-9_-]*";
const PARAM_CAPTURE: &str = "[,a-zA-Z0-9%_-]*";
const QUERY_SUFFIX: &str = r"(\?[a-zA-Z0-9%_=&-]*)?";

// Route patterns never contain NUL.
const DOUBLE_WILDCARD_PLACEHOLDER: &str = "\u{0}DOUBLE_WILDCARD\u{0}";

static PARAM_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(":[,a-zA-Z0-9_-]+").expect("parameter token expression is valid")
});

/// Errors raised while compiling a pattern.
#[derive(Debug, Clone, Error)]
pub enum CompileError {
    /// The generated expression was rejected by the regex engine.
    #[error("pattern `{pattern}` produced an invalid expression: {source}")]
    InvalidExpression {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The same parameter name was declared twice.
    #[error("pattern `{pattern}` declares parameter `{name}` more than once")]
    DuplicateParameter { pattern: String, name: String },
}

/// A parameter declared by the pattern and the group that captures it.
#[derive(Debug, Clone)]
struct ParamBinding {
    name: String,
    group: String,
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    regex: Regex,
    params: Vec<ParamBinding>,
}

impl Matcher {
    /// Compile `pattern` into a matcher.
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        let expanded = expand_wildcards(pattern);
        let (body, params) = bind_params(pattern, &expanded)?;
        let source = format!("^{body}{QUERY_SUFFIX}$");

        let regex = Regex::new(&source).map_err(|source| CompileError::InvalidExpression {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            params,
        })
    }

    /// The pattern text this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The generated regular expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and extract its parameters.
    ///
    /// Returns `None` when the path does not satisfy the pattern. A pattern
    /// without parameters yields an empty map on success. Named groups
    /// written literally in the pattern are included; `:name` parameters
    /// win on a name clash.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let mut params = Params::new();

        for name in self.regex.capture_names().flatten() {
            if self.params.iter().any(|p| p.group == name) {
                continue;
            }
            if let Some(m) = caps.name(name) {
                params.insert(name, m.as_str());
            }
        }

        for p in &self.params {
            if let Some(m) = caps.name(&p.group) {
                params.insert(p.name.as_str(), m.as_str());
            }
        }
        Some(params)
    }
}

impl FromStr for Matcher {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile `pattern` into a [`Matcher`].
pub fn compile(pattern: &str) -> Result<Matcher, CompileError> {
    Matcher::new(pattern)
}

/// Rewrite the first `**` and the first remaining `*`.
fn expand_wildcards(pattern: &str) -> String {
    pattern
        .replacen("**", DOUBLE_WILDCARD_PLACEHOLDER, 1)
        .replacen('*', SEGMENT_WILDCARD, 1)
        .replacen(DOUBLE_WILDCARD_PLACEHOLDER, MULTI_SEGMENT_WILDCARD, 1)
}

/// Replace every `:name` token with a generated capture group.
///
/// Replacements contain no `:`, so a single left-to-right pass is equivalent
/// to rescanning after each substitution.
fn bind_params(pattern: &str, expanded: &str) -> Result<(String, Vec<ParamBinding>), CompileError> {
    let mut body = String::with_capacity(expanded.len() + 32);
    let mut params: Vec<ParamBinding> = Vec::new();
    let mut last = 0;

    for token in PARAM_TOKEN.find_iter(expanded) {
        let name = &token.as_str()[1..];
        if params.iter().any(|p| p.name == name) {
            return Err(CompileError::DuplicateParameter {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }

        let group = format!("__p{}", params.len());
        body.push_str(&expanded[last..token.start()]);
        body.push_str(&format!("(?<{group}>{PARAM_CAPTURE})"));
        last = token.end();

        params.push(ParamBinding {
            name: name.to_string(),
            group,
        });
    }
    body.push_str(&expanded[last..]);

    Ok((body, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_literal() {
        let m = compile("/basic/").unwrap();
        assert_eq!(m.as_str(), r"^/basic/(\?[a-zA-Z0-9%_=&-]*)?$");
        assert_eq!(m.pattern(), "/basic/");
    }

    #[test]
    fn test_compile_wildcards() {
        let single = compile("/basic/*").unwrap();
        assert_eq!(single.as_str(), r"^/basic/[,a-zA-Z0-9_-]*(\?[a-zA-Z0-9%_=&-]*)?$");

        let multi = compile("/basic/**").unwrap();
        assert_eq!(multi.as_str(), r"^/basic/[,/a-zA-Z0-9_-]*(\?[a-zA-Z0-9%_=&-]*)?$");
    }

    #[test]
    fn test_compile_params() {
        let m = compile("/user/:name/:message").unwrap();
        assert_eq!(
            m.as_str(),
            r"^/user/(?<__p0>[,a-zA-Z0-9%_-]*)/(?<__p1>[,a-zA-Z0-9%_-]*)(\?[a-zA-Z0-9%_=&-]*)?$"
        );
        assert_eq!(m.param_names().collect::<Vec<_>>(), vec!["name", "message"]);
    }

    #[test]
    fn test_literal_matches_only_itself() {
        let m = compile("/hello/world").unwrap();
        assert!(m.is_match("/hello/world"));
        assert!(m.is_match("/hello/world?lang=en&x=1"));
        assert!(!m.is_match("/hello/world/"));
        assert!(!m.is_match("/hello"));
        assert!(!m.is_match("/Hello/world"));

        let root = compile("/").unwrap();
        assert!(root.is_match("/"));
        assert!(!root.is_match("/x"));
    }

    #[test]
    fn test_param_extraction() {
        let m = compile("/basic/:param").unwrap();

        let params = m.captures("/basic/anything123").unwrap();
        assert_eq!(params.get("param"), Some("anything123"));
        assert_eq!(params.len(), 1);

        let empty = m.captures("/basic/").unwrap();
        assert_eq!(empty.get("param"), Some(""));

        assert!(m.captures("/basic/a/b").is_none());
    }

    #[test]
    fn test_param_allows_percent_encoding() {
        let m = compile("/files/:name").unwrap();
        let params = m.captures("/files/hello%20world").unwrap();
        assert_eq!(params.get("name"), Some("hello%20world"));
    }

    #[test]
    fn test_no_params_yields_empty_map() {
        let m = compile("/static/page").unwrap();
        let params = m.captures("/static/page").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_single_wildcard_stays_in_segment() {
        let m = compile("/basic/*").unwrap();
        assert!(m.is_match("/basic/xyz"));
        assert!(m.is_match("/basic/"));
        assert!(!m.is_match("/basic/a/b"));
    }

    #[test]
    fn test_double_wildcard_crosses_segments() {
        let m = compile("/basic/**").unwrap();
        assert!(m.is_match("/basic/xyz"));
        assert!(m.is_match("/basic/a/b"));

        let catch_all = compile("**").unwrap();
        assert!(catch_all.is_match("/anything/at/all"));
        assert!(catch_all.is_match(""));
    }

    #[test]
    fn test_only_first_single_wildcard_is_expanded() {
        // The second `*` applies to the preceding `/` as a regex quantifier.
        let m = compile("/a/*/b/*").unwrap();
        assert_eq!(m.as_str(), r"^/a/[,a-zA-Z0-9_-]*/b/*(\?[a-zA-Z0-9%_=&-]*)?$");
        assert!(m.is_match("/a/x/b"));
        assert!(m.is_match("/a/x/b//"));
        assert!(!m.is_match("/a/x/b/y"));
    }

    #[test]
    fn test_only_first_double_wildcard_is_expanded() {
        // The second `**` becomes the one-segment class plus a redundant `*`.
        let m = compile("/a/**/b/**").unwrap();
        assert_eq!(
            m.as_str(),
            r"^/a/[,/a-zA-Z0-9_-]*/b/[,a-zA-Z0-9_-]**(\?[a-zA-Z0-9%_=&-]*)?$"
        );
        assert!(m.is_match("/a/x/y/b/z"));
        assert!(!m.is_match("/a/x/b/y/z"));
    }

    #[test]
    fn test_literal_named_groups_are_extracted() {
        let m = compile(r"/(?<year>[0-9]{4})/:slug").unwrap();
        let params = m.captures("/2024/hello").unwrap();
        assert_eq!(params.get("year"), Some("2024"));
        assert_eq!(params.get("slug"), Some("hello"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_unusual_param_names() {
        let m = compile("/:a,b/:2nd-part").unwrap();
        let params = m.captures("/x/y").unwrap();
        assert_eq!(params.get("a,b"), Some("x"));
        assert_eq!(params.get("2nd-part"), Some("y"));
    }

    #[test]
    fn test_param_embedded_in_segment() {
        let m = compile("/@:username/profile").unwrap();
        let params = m.captures("/@bree/profile").unwrap();
        assert_eq!(params.get("username"), Some("bree"));
    }

    #[test]
    fn test_lone_colon_is_literal() {
        let m = compile("/time/:/now").unwrap();
        assert!(m.is_match("/time/:/now"));
        assert_eq!(m.param_names().count(), 0);
    }

    #[test]
    fn test_literal_regex_groups_do_not_shift_params() {
        let m = compile(r"/@(\w{1,16})/get/:id").unwrap();
        let params = m.captures("/@bree/get/7").unwrap();
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_duplicate_param_rejected() {
        let err = compile("/:id/:id").unwrap_err();
        assert!(matches!(err, CompileError::DuplicateParameter { ref name, .. } if name == "id"));
    }

    #[test]
    fn test_invalid_expression_rejected() {
        let err = compile("/broken(").unwrap_err();
        assert!(matches!(err, CompileError::InvalidExpression { .. }));
        assert!(err.to_string().contains("/broken("));
    }

    #[test]
    fn test_from_str() {
        let m: Matcher = "/user/:id".parse().unwrap();
        assert!(m.is_match("/user/1"));
        assert_eq!(m.to_string(), m.as_str());
    }
}
