//! Link Overlay Component
//!
//! SVG layer drawing the active dependency link set along the board's
//! left gutter. The drawn set is always derived from explicit ∪
//! inferred links, never stored on its own.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::links::{parse_node_id, RenderedLink};

const ROW_HEIGHT: f64 = 56.0;
const ROW_OFFSET: f64 = 28.0;
const GUTTER_X: f64 = 12.0;

/// Arrow layer for the tasks board. `order` is the board's render order
/// of card node keys (`task-<n>`); links whose endpoints are not on the
/// board draw nothing.
#[component]
pub fn LinkOverlay(links: Memo<Vec<RenderedLink>>, order: Memo<Vec<String>>) -> impl IntoView {
    let positioned = move || {
        let order = order.get();
        let index: HashMap<u32, usize> = order
            .iter()
            .enumerate()
            .filter_map(|(i, key)| Some((parse_node_id(key)?, i)))
            .collect();
        links
            .get()
            .into_iter()
            .filter_map(|link| {
                let y1 = *index.get(&link.source_id)? as f64 * ROW_HEIGHT + ROW_OFFSET;
                let y2 = *index.get(&link.target_id)? as f64 * ROW_HEIGHT + ROW_OFFSET;
                Some((link, y1, y2))
            })
            .collect::<Vec<_>>()
    };

    view! {
        <svg class="link-overlay">
            <For
                each=positioned
                key=|(link, y1, y2)| (link.source_id, link.target_id, *y1 as i64, *y2 as i64)
                children=move |(link, y1, y2)| {
                    view! {
                        <line
                            x1=GUTTER_X.to_string()
                            y1=y1.to_string()
                            x2=GUTTER_X.to_string()
                            y2=y2.to_string()
                            stroke=link.style.color
                            stroke-width=link.style.width.to_string()
                            stroke-dasharray=link.style.dash.unwrap_or("")
                            data-source=format!("task-{}", link.source_id)
                            data-target=format!("task-{}", link.target_id)
                        />
                    }
                }
            />
        </svg>
    }
}
