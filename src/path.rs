//! JSON Pointer-like paths used both for schema-side error locations
//! (`SchemaError`) and instance-side error locations (`ValidationError`).
use std::fmt;

/// One token of a [`Path`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// An ordered sequence of [`PathSegment`]s identifying a location inside a
/// JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathSegment>);

impl Path {
    #[must_use]
    pub fn root() -> Self {
        Path(Vec::new())
    }

    #[must_use]
    pub(crate) fn with_key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_owned()));
        Path(segments)
    }

    #[must_use]
    pub(crate) fn with_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Path(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<PathSegment> {
        self.0
    }

    pub(crate) fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        assert!(Path::root().segments().is_empty());
    }

    #[test]
    fn extends_without_mutating_parent() {
        let root = Path::root();
        let child = root.with_key("a").with_index(3);
        assert!(root.segments().is_empty());
        assert_eq!(
            child.segments(),
            &[
                PathSegment::Key("a".to_owned()),
                PathSegment::Index(3)
            ]
        );
    }

    #[test]
    fn display_matches_json_pointer_shape() {
        let path = Path::root().with_key("a").with_index(1);
        assert_eq!(path.to_string(), "/a/1");
        assert_eq!(Path::root().to_string(), "/");
    }
}
