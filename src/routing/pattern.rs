//! Path patterns with named segments (`/console/project/:projectId`).
//!
//! A path is compared segment by segment. Query strings, fragments and empty
//! segments are ignored, so `/a/b/`, `a//b` and `/a/b?x=1` all address the
//! same logical path. Matching is case-sensitive. A final `*name` segment
//! captures the remaining segments joined by `/`.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::collections::BTreeMap;

/// Error returned by [`PathPattern::parse`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern {pattern:?} has a parameter segment with no name")]
    EmptyParamName { pattern: String },
    #[error("pattern {pattern:?} binds {name:?} more than once")]
    DuplicateParam { pattern: String, name: String },
    #[error("pattern {pattern:?} has a wildcard before its last segment")]
    WildcardNotLast { pattern: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    Wildcard(String),
}

/// A parsed route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse `raw` into segments.
    ///
    /// # Errors
    ///
    /// Returns a `PatternError` for unnamed (`:`), repeated, or non-final
    /// wildcard parameters.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let parts: Vec<&str> = path_segments(raw).collect();
        let mut segments = Vec::with_capacity(parts.len());
        let mut names: Vec<&str> = Vec::new();

        for (i, part) in parts.iter().enumerate() {
            let (name, segment) = if let Some(name) = part.strip_prefix(':') {
                (Some(name), Segment::Param(name.to_owned()))
            } else if let Some(name) = part.strip_prefix('*') {
                if i + 1 != parts.len() {
                    return Err(PatternError::WildcardNotLast { pattern: raw.to_owned() });
                }
                (Some(name), Segment::Wildcard(name.to_owned()))
            } else {
                (None, Segment::Static((*part).to_owned()))
            };

            if let Some(name) = name {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName { pattern: raw.to_owned() });
                }
                if names.contains(&name) {
                    return Err(PatternError::DuplicateParam { pattern: raw.to_owned(), name: name.to_owned() });
                }
                names.push(name);
            }
            segments.push(segment);
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    /// The pattern text as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the pattern has no parameter or wildcard segments.
    pub fn is_static(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Static(_)))
    }

    /// Match `path`, extracting named segments as strings.
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let mut params = Params::default();
        let mut parts = path_segments(path);

        for segment in &self.segments {
            match segment {
                Segment::Static(expected) => {
                    if parts.next()? != expected.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.next()?;
                    params.insert(name, value);
                }
                Segment::Wildcard(name) => {
                    let rest: Vec<&str> = parts.by_ref().collect();
                    params.insert(name, &rest.join("/"));
                }
            }
        }

        if parts.next().is_some() { None } else { Some(params) }
    }

    /// Canonical path of a static pattern, used for shadowing checks.
    pub(crate) fn static_path(&self) -> Option<String> {
        if !self.is_static() {
            return None;
        }
        let joined: Vec<&str> = self
            .segments
            .iter()
            .filter_map(|s| match s {
                Segment::Static(part) => Some(part.as_str()),
                _ => None,
            })
            .collect();
        Some(format!("/{}", joined.join("/")))
    }
}

/// Non-empty segments of `path`, ignoring any query string or fragment.
fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty())
}

/// Named segments extracted by a match. Values are never coerced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_owned(), value.to_owned());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
