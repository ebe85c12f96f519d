//! Task Card Component
//!
//! A draggable card on the tasks/sprint boards, with the link-toggle
//! affordance and the task's sub-task rows.

use leptos::prelude::*;
use leptos_lanedrop::{make_on_mousedown, DndSignals, DragKind, DragSource};

use crate::components::LinkSelection;
use crate::lanes::is_renderable;
use crate::models::{SubTask, Task};

/// A single task card
#[component]
pub fn TaskCard(task: Task, selection: LinkSelection) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let id = task.id;

    let source = DragSource { kind: DragKind::Task, id, parent_id: None };
    let on_mousedown = make_on_mousedown(dnd, source);

    // Visual state
    let is_dragging = move || {
        matches!(dnd.dragging_read.get(), Some(s) if s.kind == DragKind::Task && s.id == id)
    };

    let card_class = move || {
        let mut c = String::from("board-card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if selection.is_source(id) {
            c.push_str(" link-source");
        }
        if selection.is_target(id) {
            c.push_str(" link-target");
        }
        c
    };

    let sub_tasks: Vec<SubTask> = task
        .sub_tasks
        .iter()
        .filter(|s| is_renderable(*s))
        .cloned()
        .collect();

    view! {
        <div class=card_class data-node=format!("task-{}", id) on:mousedown=on_mousedown>
            <div class="card-row">
                <span class="card-title">{task.title.clone()}</span>
                <button
                    class="link-btn"
                    title="Toggle dependency links"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        selection.pick(id);
                    }
                >
                    "∞"
                </button>
            </div>
            <For
                each=move || sub_tasks.clone()
                key=|sub| (sub.id, sub.status.clone(), sub.title.clone())
                children=move |sub| {
                    view! { <SubTaskRow sub=sub owner_id=id /> }
                }
            />
        </div>
    }
}

/// A sub-task row inside its owning task's card. Dragging it moves only
/// the sub-task's own status.
#[component]
fn SubTaskRow(sub: SubTask, owner_id: u32) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let id = sub.id;

    let source = DragSource { kind: DragKind::SubTask, id, parent_id: Some(owner_id) };
    let on_mousedown = make_on_mousedown(dnd, source);

    let is_dragging = move || {
        matches!(dnd.dragging_read.get(), Some(s) if s.kind == DragKind::SubTask && s.id == id)
    };

    let row_class = move || {
        let mut c = String::from("subtask-row");
        if is_dragging() {
            c.push_str(" dragging");
        }
        c
    };

    view! {
        <div class=row_class on:mousedown=on_mousedown>
            <span class="subtask-title">{sub.title.clone()}</span>
            <span class="subtask-status">{sub.status.clone()}</span>
        </div>
    }
}
