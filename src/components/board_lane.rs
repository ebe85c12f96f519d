//! Board Lane Component
//!
//! One kanban column: header plus card list, acting as the drop target
//! for drag-and-drop transfers.

use leptos::prelude::*;
use leptos_lanedrop::{make_on_lane_mouseenter, make_on_mouseleave, DndSignals, DropTarget};

use crate::lanes::LaneDef;

/// A single lane column
#[component]
pub fn BoardLane(def: LaneDef, children: Children) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let title = def.title;

    let on_mouseenter = make_on_lane_mouseenter(dnd, title);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Lane(t)) if t == title)
    };

    let lane_class = move || {
        let mut c = String::from("board-lane");
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    view! {
        <div class=lane_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <div class="lane-header">{title}</div>
            <div class="lane-cards">{children()}</div>
        </div>
    }
}
