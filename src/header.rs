use std::collections::BTreeMap;

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_ACCEPT: &str = "Accept";

pub const MIME_JSON: &str = "application/json";

/// Request headers with case-insensitive names. The spelling of the first
/// insert is kept when a header is overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    inner: BTreeMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let key = self.find_key(&key).unwrap_or(key);
        self.inner.insert(key, value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.find_key(key)
            .and_then(|key| self.inner.get(&key))
            .map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let key = self.find_key(key)?;
        self.inner.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn find_key(&self, key: &str) -> Option<String> {
        self.inner
            .keys()
            .find(|existing| existing.eq_ignore_ascii_case(key))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let mut headers = HeaderMap::new();
        assert!(headers.is_empty());

        headers.insert("Authorization", "Bearer a");
        assert_eq!(headers.get("authorization"), Some("Bearer a"));

        let old = headers.insert("AUTHORIZATION", "Bearer b");
        assert_eq!(old.as_deref(), Some("Bearer a"));
        assert_eq!(headers.len(), 1);

        let (name, value) = headers.iter().next().unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer b");

        assert_eq!(headers.remove("authorization").as_deref(), Some("Bearer b"));
        assert!(headers.get("Authorization").is_none());
    }
}
