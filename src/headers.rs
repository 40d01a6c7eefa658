/// A single response header emitted by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Headers in the order they must be appended to the response.
pub type Headers = Vec<Header>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(3)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: Vec::with_capacity(estimate),
        }
    }

    /// Appends without replacing earlier entries of the same name.
    pub(crate) fn push<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.headers.push(Header::new(name, value));
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.headers.len()
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
