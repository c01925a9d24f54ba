use std::collections::HashMap;

/// Name/value pairs carried by one `Cookie` header value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    values: HashMap<String, String>,
}

impl Cookie {
    /// Parses `a=1; b=2`. Pairs without `=` or with an empty name are
    /// skipped. A repeated name keeps its last value.
    pub fn parse(raw: &str) -> Self {
        let values = raw
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().to_string()))
            })
            .collect();

        Self { values }
    }

    pub fn search(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
