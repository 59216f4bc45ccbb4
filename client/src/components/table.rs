//! Shared table renderer used by every list view.
//!
//! DESIGN
//! ======
//! Each concrete table converts its DTOs into `Cell` rows with a pure helper
//! and hands them here. Tests assert on the row helpers; this component only
//! maps cells to markup. Cells carry `data-testid` attributes of the form
//! `{test_id}-cell-row-{row}-col-{column}`.

use leptos::prelude::*;

/// One rendered table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Link { text: String, href: String },
    /// Multi-line content such as job logs.
    Pre(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link { text: text.into(), href: href.into() }
    }

    /// Displayed text regardless of kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Pre(text) | Self::Link { text, .. } => text,
        }
    }
}

/// Render an optional column as text, empty when missing.
pub fn optional(value: Option<&str>) -> Cell {
    Cell::text(value.unwrap_or_default())
}

#[component]
pub fn DataTable(
    #[prop(into)] test_id: String,
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
    /// Adds a trailing "Delete" button column; receives the row index.
    #[prop(optional_no_strip)]
    on_delete: Option<Callback<usize>>,
) -> impl IntoView {
    let has_actions = on_delete.is_some();
    let empty = rows.is_empty();
    let column_count = headers.len() + usize::from(has_actions);

    let body = rows
        .into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let cells = cells
                .into_iter()
                .enumerate()
                .map(|(col, cell)| {
                    let cell_id = format!("{test_id}-cell-row-{row}-col-{col}");
                    match cell {
                        Cell::Text(text) => view! { <td data-testid=cell_id>{text}</td> }.into_any(),
                        Cell::Link { text, href } => {
                            view! { <td data-testid=cell_id><a href=href>{text}</a></td> }.into_any()
                        }
                        Cell::Pre(text) => view! { <td data-testid=cell_id><pre>{text}</pre></td> }.into_any(),
                    }
                })
                .collect::<Vec<_>>();
            let action = on_delete.map(|on_delete| {
                let button_id = format!("{test_id}-cell-row-{row}-col-Delete-button");
                view! {
                    <td>
                        <button
                            class="btn btn--danger"
                            data-testid=button_id
                            on:click=move |_| on_delete.run(row)
                        >
                            "Delete"
                        </button>
                    </td>
                }
            });
            view! { <tr>{cells}{action}</tr> }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="data-table" data-testid=test_id.clone()>
            <thead>
                <tr>
                    {headers.into_iter().map(|header| view! { <th>{header}</th> }).collect::<Vec<_>>()}
                    {has_actions.then(|| view! { <th></th> })}
                </tr>
            </thead>
            <tbody>
                {body}
                {empty.then(|| view! {
                    <tr>
                        <td class="data-table__empty" colspan=column_count.to_string()>"No rows"</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
