//! Sprint Board Section Component
//!
//! Sprint view over the task collection: the Sprint backlog lane plus
//! the Active ("open") lane, with the same transfer and link behavior
//! as the main boards.

use leptos::prelude::*;

use crate::components::{BoardLane, LinkOverlay, LinkSelection, TaskCard};
use crate::lanes::{partition_by_lane, SPRINT_LANES};
use crate::links::{derive_inferred, render_links};
use crate::store::{use_app_store, AppStateStoreFields};

/// Sprint kanban over the task collection
#[component]
pub fn SprintBoardSection() -> impl IntoView {
    let store = use_app_store();
    let selection = LinkSelection::new();

    let partition = Memo::new(move |_| partition_by_lane(&store.tasks().get(), &SPRINT_LANES));

    let rendered_links = Memo::new(move |_| {
        let explicit = store.explicit_links().get();
        let inferred = derive_inferred(&store.tasks().get());
        render_links(&explicit, &inferred)
    });

    let card_order = Memo::new(move |_| {
        partition
            .get()
            .lanes
            .iter()
            .flat_map(|(_, cards)| cards.iter().map(|c| format!("task-{}", c.id)))
            .collect::<Vec<String>>()
    });

    view! {
        <section class="boards-section sprint">
            <div class="section-switch">
                {move || selection.source.get().map(|source| view! {
                    <button class="apply-links-btn" on:click=move |_| selection.apply(&store)>
                        {move || format!("Link {} card(s) to #{}", selection.targets.get().len(), source)}
                    </button>
                })}
            </div>

            <div class="board">
                <LinkOverlay links=rendered_links order=card_order />
                {SPRINT_LANES
                    .iter()
                    .map(|&def| {
                        let cards = Memo::new(move |_| {
                            partition
                                .get()
                                .lanes
                                .into_iter()
                                .find(|(d, _)| d.title == def.title)
                                .map(|(_, c)| c)
                                .unwrap_or_default()
                        });
                        view! {
                            <BoardLane def=def>
                                <For
                                    each=move || cards.get()
                                    key=|task| {
                                        (
                                            task.id,
                                            task.status.clone(),
                                            task.title.clone(),
                                            task.sub_tasks
                                                .iter()
                                                .map(|s| (s.id, s.status.clone()))
                                                .collect::<Vec<_>>(),
                                        )
                                    }
                                    children=move |task| {
                                        view! { <TaskCard task=task selection=selection /> }
                                    }
                                />
                            </BoardLane>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
