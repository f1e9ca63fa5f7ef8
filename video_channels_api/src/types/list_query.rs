use serde::Serialize;

/// Pagination and ordering for the global channel list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub start: u32,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>, // e.g. "createdAt", "-createdAt"
}

impl ListQuery {
    pub fn new(start: u32, count: u32, sort: Option<&str>) -> Self {
        Self {
            start,
            count,
            sort: sort.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_start_and_count() {
        let q = ListQuery::new(0, 5, None);
        assert_eq!(q.to_query_string().unwrap(), "start=0&count=5");
    }

    #[test]
    fn encodes_sort_when_present() {
        let q = ListQuery::new(1, 1, Some("-createdAt"));
        assert_eq!(q.to_query_string().unwrap(), "start=1&count=1&sort=-createdAt");
    }

    #[test]
    fn empty_sort_is_dropped() {
        let q = ListQuery::new(2, 10, Some(""));
        assert_eq!(q.sort, None);
        assert_eq!(q.to_query_string().unwrap(), "start=2&count=10");
    }
}
