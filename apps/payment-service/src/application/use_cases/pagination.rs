//! Offset pagination for list operations.
//!
//! Page tokens are the decimal offset of the next item. An empty token starts
//! at the beginning; an empty `next_page_token` means there are no more items.

/// Page size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    /// Used when the caller asks for zero items.
    pub default_size: usize,
    /// Larger requests are clamped to this.
    pub max_size: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

/// Rejected page parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// Negative page size.
    #[error("page_size must not be negative, got {0}")]
    NegativeSize(i32),

    /// Token is not one this service issued.
    #[error("page_token {0:?} is not valid")]
    InvalidToken(String),
}

impl PageError {
    /// Request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NegativeSize(_) => "page_size",
            Self::InvalidToken(_) => "page_token",
        }
    }
}

/// Resolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first item.
    pub offset: usize,
    /// Maximum items to return.
    pub size: usize,
}

impl PageRequest {
    /// Resolve raw request fields against the limits.
    ///
    /// # Errors
    ///
    /// Returns `PageError` for a negative size or an unparseable token.
    pub fn parse(
        page_size: i32,
        page_token: &str,
        settings: PageSettings,
    ) -> Result<Self, PageError> {
        let size = match usize::try_from(page_size) {
            Err(_) => return Err(PageError::NegativeSize(page_size)),
            Ok(0) => settings.default_size,
            Ok(n) => n.min(settings.max_size),
        }
        .max(1);

        let token = page_token.trim();
        let offset = if token.is_empty() {
            0
        } else {
            token
                .parse::<usize>()
                .map_err(|_| PageError::InvalidToken(page_token.to_string()))?
        };

        Ok(Self { offset, size })
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Token for the next page; empty on the last page.
    pub next_page_token: String,
    /// Number of items across all pages.
    pub total: usize,
}

/// Cut one page out of a fully filtered, ordered result set.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let end = request.offset.saturating_add(request.size).min(total);
    let items: Vec<T> = items
        .into_iter()
        .skip(request.offset)
        .take(request.size)
        .collect();
    let next_page_token = if end < total {
        end.to_string()
    } else {
        String::new()
    };
    Page {
        items,
        next_page_token,
        total,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const SETTINGS: PageSettings = PageSettings {
        default_size: 20,
        max_size: 100,
    };

    #[test_case(0, 20 ; "zero uses default")]
    #[test_case(5, 5 ; "explicit size")]
    #[test_case(500, 100 ; "clamped to max")]
    fn resolves_size(requested: i32, expected: usize) {
        let page = PageRequest::parse(requested, "", SETTINGS).unwrap();
        assert_eq!(page.size, expected);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn rejects_negative_size() {
        assert_eq!(
            PageRequest::parse(-1, "", SETTINGS),
            Err(PageError::NegativeSize(-1))
        );
    }

    #[test_case("abc" ; "letters")]
    #[test_case("-3" ; "negative")]
    #[test_case("1.5" ; "fraction")]
    fn rejects_bad_tokens(token: &str) {
        let err = PageRequest::parse(10, token, SETTINGS).unwrap_err();
        assert_eq!(err.field(), "page_token");
    }

    #[test]
    fn walks_pages() {
        let items: Vec<u32> = (0..7).collect();
        let first = paginate(items.clone(), PageRequest::parse(3, "", SETTINGS).unwrap());
        assert_eq!(first.items, vec![0, 1, 2]);
        assert_eq!(first.next_page_token, "3");
        assert_eq!(first.total, 7);

        let last = paginate(items.clone(), PageRequest::parse(3, "6", SETTINGS).unwrap());
        assert_eq!(last.items, vec![6]);
        assert!(last.next_page_token.is_empty());

        let beyond = paginate(items, PageRequest::parse(3, "40", SETTINGS).unwrap());
        assert!(beyond.items.is_empty());
        assert!(beyond.next_page_token.is_empty());
        assert_eq!(beyond.total, 7);
    }
}
