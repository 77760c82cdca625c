//! City selector state

#[derive(Debug, Default, Clone)]
pub struct CitySelector {
    options: Vec<String>,
    selected: Option<usize>,
    highlighted: usize,
}

impl CitySelector {
    /// Replaces the options, keeping their order, and selects `selected`
    /// when it is one of them.
    pub fn populate(&mut self, cities: Vec<String>, selected: Option<&str>) {
        self.options = cities;
        self.selected = selected.and_then(|name| self.options.iter().position(|c| c == name));
        self.highlighted = self.selected.unwrap_or(0);
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn is_selected(&self, city: &str) -> bool {
        self.selected() == Some(city)
    }

    pub fn highlight_next(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.options.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }

    /// Selects the highlighted city and returns it.
    pub fn commit(&mut self) -> Option<String> {
        let city = self.options.get(self.highlighted)?.clone();
        self.selected = Some(self.highlighted);
        Some(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn populate_keeps_order_and_selection() {
        let mut selector = CitySelector::default();
        selector.populate(names(&["Delhi", "Mumbai"]), Some("Delhi"));
        assert_eq!(selector.options(), ["Delhi", "Mumbai"]);
        assert_eq!(selector.selected(), Some("Delhi"));
        assert_eq!(selector.highlighted(), 0);
    }

    #[test]
    fn populate_ignores_unknown_selection() {
        let mut selector = CitySelector::default();
        selector.populate(names(&["Mumbai"]), Some("Delhi"));
        assert_eq!(selector.selected(), None);
    }

    #[test]
    fn highlight_wraps_and_commit_selects() {
        let mut selector = CitySelector::default();
        selector.populate(names(&["Delhi", "Mumbai", "Pune"]), Some("Delhi"));

        selector.highlight_previous();
        assert_eq!(selector.highlighted(), 2);
        selector.highlight_next();
        selector.highlight_next();
        assert_eq!(selector.commit().as_deref(), Some("Mumbai"));
        assert!(selector.is_selected("Mumbai"));
    }

    #[test]
    fn empty_selector_commits_nothing() {
        let mut selector = CitySelector::default();
        selector.highlight_next();
        assert_eq!(selector.commit(), None);
        assert!(selector.is_empty());
    }
}
