//! Project Card Component
//!
//! A draggable card on the projects board.

use leptos::prelude::*;
use leptos_lanedrop::{make_on_mousedown, DndSignals, DragKind, DragSource};

use crate::models::Project;

/// A single project card
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let id = project.id;

    let source = DragSource { kind: DragKind::Project, id, parent_id: None };
    let on_mousedown = make_on_mousedown(dnd, source);

    let is_dragging = move || {
        matches!(dnd.dragging_read.get(), Some(s) if s.kind == DragKind::Project && s.id == id)
    };

    let card_class = move || {
        let mut c = String::from("board-card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        c
    };

    view! {
        <div class=card_class data-node=format!("project-{}", id) on:mousedown=on_mousedown>
            <span class="card-title">{project.title.clone()}</span>
        </div>
    }
}
