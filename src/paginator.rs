use serde::Serialize;

/// A page as asked for by a route: a number, the raw text of a path
/// segment, or nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub enum PageRequest {
    Missing,
    Number(i64),
    Text(String),
}

impl PageRequest {
    /// The requested page as a positive integer, if it is one.
    /// Text is accepted when it reads as a whole number (`"2"`, `" 3 "`, `"2.0"`).
    fn as_page_number(&self) -> Option<usize> {
        match self {
            PageRequest::Missing => None,
            PageRequest::Number(n) => usize::try_from(*n).ok().filter(|n| *n > 0),
            PageRequest::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                let value: f64 = text.parse().ok()?;
                if value.is_finite() && value.fract() == 0.0 && value >= 1.0 && value <= usize::MAX as f64 {
                    Some(value as usize)
                } else {
                    None
                }
            }
        }
    }
}

impl From<i64> for PageRequest {
    fn from(value: i64) -> Self {
        PageRequest::Number(value)
    }
}

impl From<u32> for PageRequest {
    fn from(value: u32) -> Self {
        PageRequest::Number(value as i64)
    }
}

impl From<&str> for PageRequest {
    fn from(value: &str) -> Self {
        PageRequest::Text(value.to_string())
    }
}

impl<T: Into<PageRequest>> From<Option<T>> for PageRequest {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PageRequest::Missing)
    }
}

/// One page of content. `current_page` is 0 when the requested page does
/// not exist; callers turn that into a not-found response.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub total_pages: usize,
    pub current_page: usize,
    pub paginated_content: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn is_not_found(&self) -> bool {
        self.current_page == 0
    }
}

/// `1..=ceil(count / page_size)`; empty when there is nothing to show.
pub fn get_page_numbers(count: usize, page_size: usize) -> Vec<usize> {
    if page_size == 0 {
        return vec![];
    }
    (1..=count.div_ceil(page_size)).collect()
}

pub struct Paginator<'a, T> {
    content: &'a [T],
    page_size: usize,
    page_count: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn from(content: &'a [T], page_size: usize) -> Self {
        let page_count = get_page_numbers(content.len(), page_size).len();
        Paginator {
            content,
            page_size,
            page_count,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.page_count).collect()
    }

    /// The landing page: always page 1, holding the first `page_size` items.
    pub fn index_page(&self) -> Page<'a, T> {
        let end = self.page_size.min(self.content.len());
        Page {
            total_pages: self.page_count,
            current_page: 1,
            paginated_content: &self.content[..end],
        }
    }

    pub fn get_page(&self, request: &PageRequest) -> Page<'a, T> {
        let current_page = request
            .as_page_number()
            .filter(|page| *page <= self.page_count)
            .unwrap_or(0);

        if current_page == 0 {
            return Page {
                total_pages: self.page_count,
                current_page,
                paginated_content: &[],
            };
        }

        let start = (current_page - 1) * self.page_size;
        let end = (current_page * self.page_size).min(self.content.len());
        Page {
            total_pages: self.page_count,
            current_page,
            paginated_content: &self.content[start..end],
        }
    }
}

pub fn get_pagination<'a, T>(content: &'a [T], page: PageRequest, is_index: bool, item_per_page: usize) -> Page<'a, T> {
    let paginator = Paginator::from(content, item_per_page);
    if is_index {
        paginator.index_page()
    } else {
        paginator.get_page(&page)
    }
}
