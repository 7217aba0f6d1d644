//! The search form: raw user inputs and their conversion to query
//! parameters.

/// Filter inputs as the user typed them. Everything is optional text;
/// the server owns numeric interpretation and validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl SearchForm {
    /// Convert the form into query pairs. Blank fields and a category of
    /// `all` are skipped entirely rather than sent as empty parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(q) = non_blank(&self.q) {
            pairs.push(("q", q));
        }
        if let Some(category) = non_blank(&self.category)
            && !category.eq_ignore_ascii_case("all")
        {
            pairs.push(("category", category));
        }
        if let Some(min) = non_blank(&self.min_price) {
            pairs.push(("minPrice", min));
        }
        if let Some(max) = non_blank(&self.max_price) {
            pairs.push(("maxPrice", max));
        }

        pairs
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
