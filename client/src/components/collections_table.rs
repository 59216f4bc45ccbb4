//! Repository collections list.

use leptos::prelude::*;

use super::table::{Cell, DataTable, optional};
use crate::net::types::Collection;

pub fn collection_rows(collections: &[Collection]) -> Vec<Vec<Cell>> {
    collections
        .iter()
        .map(|collection| {
            vec![
                Cell::text(collection.id.to_string()),
                Cell::text(&collection.name),
                optional(collection.description.as_deref()),
            ]
        })
        .collect()
}

#[component]
pub fn CollectionsTable(collections: Vec<Collection>) -> impl IntoView {
    view! {
        <DataTable
            test_id="CollectionsTable"
            headers=vec!["id", "Name", "Description"]
            rows=collection_rows(&collections)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn collection_without_description_renders_blank() {
        let rows = collection_rows(&fixtures::collections());
        assert_eq!(rows[0][2].as_str(), "Template repositories");
        assert_eq!(rows[1][2].as_str(), "");
    }
}
