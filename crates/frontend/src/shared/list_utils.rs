/// Search and sort helpers shared by the list pages
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Types that can be matched against a search box
pub trait Searchable {
    /// Case-insensitive match of `filter` against the record's display fields
    fn matches_filter(&self, filter: &str) -> bool;

    /// Display value of a named field
    fn get_field_value(&self, field: &str) -> Option<String>;
}

/// Types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// True when any of `fields` contains `filter`, ignoring case.
pub fn contains_ci<'a>(fields: impl IntoIterator<Item = &'a str>, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Items matching `filter`; a blank filter keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Click handler toggling the sort column and direction
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        qty: i64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci([self.name.as_str()], filter)
        }

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                _ => None,
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => self.name.cmp(&other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Battery Pack".into(), qty: 2 },
            Row { name: "Brake System".into(), qty: 1 },
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_list(&rows(), "BATTERY");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get_field_value("name").as_deref(), Some("Battery Pack"));
        assert_eq!(filter_list(&rows(), "  ").len(), 2);
        assert!(filter_list(&rows(), "motor").is_empty());
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "qty", true);
        assert_eq!(items[0].qty, 1);
        sort_list(&mut items, "qty", false);
        assert_eq!(items[0].qty, 2);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "qty", true), " ⇅");
    }
}
