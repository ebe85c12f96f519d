//! Boards Section Component
//!
//! The kanban boards for the Tasks and Projects sections: lane columns
//! partitioned from the live collections, drag-and-drop transfers, and
//! the dependency arrow overlay.

use leptos::prelude::*;

use crate::components::{BoardLane, LinkOverlay, LinkSelection, ProjectCard, TaskCard};
use crate::lanes::{partition_by_lane, PROJECT_LANES, TASK_LANES};
use crate::links::{derive_inferred, render_links};
use crate::models::Section;
use crate::store::{store_set_section, use_app_store, AppStateStoreFields};

/// Kanban boards for the active section
#[component]
pub fn BoardsSection() -> impl IntoView {
    let store = use_app_store();
    let selection = LinkSelection::new();

    let section = move || store.active_section().get();

    let task_partition = Memo::new(move |_| partition_by_lane(&store.tasks().get(), &TASK_LANES));
    let project_partition =
        Memo::new(move |_| partition_by_lane(&store.projects().get(), &PROJECT_LANES));

    // Cards with an unrecognized status stay in the collection but render
    // in no lane; log them so the data problem is visible
    Effect::new(move |_| {
        let unmatched = match section() {
            Section::Tasks => task_partition.get().unmatched,
            Section::Projects => project_partition.get().unmatched,
        };
        if !unmatched.is_empty() {
            web_sys::console::warn_1(
                &format!("[BOARD] unrecognized status on cards {:?}", unmatched).into(),
            );
        }
    });

    // Full recompute from the live task set on every change
    let rendered_links = Memo::new(move |_| {
        let explicit = store.explicit_links().get();
        let inferred = derive_inferred(&store.tasks().get());
        render_links(&explicit, &inferred)
    });

    // Render order of task card node keys, for arrow geometry
    let card_order = Memo::new(move |_| {
        task_partition
            .get()
            .lanes
            .iter()
            .flat_map(|(_, cards)| cards.iter().map(|c| format!("task-{}", c.id)))
            .collect::<Vec<String>>()
    });

    let switch_class = move |s: Section| {
        if section() == s {
            "switch-btn active"
        } else {
            "switch-btn"
        }
    };

    view! {
        <section class="boards-section">
            <div class="section-switch">
                <button
                    class=move || switch_class(Section::Tasks)
                    on:click=move |_| store_set_section(&store, Section::Tasks)
                >
                    "Tasks"
                </button>
                <button
                    class=move || switch_class(Section::Projects)
                    on:click=move |_| store_set_section(&store, Section::Projects)
                >
                    "Projects"
                </button>

                // Batch-apply button, shown while a link source is picked
                {move || selection.source.get().map(|source| view! {
                    <button class="apply-links-btn" on:click=move |_| selection.apply(&store)>
                        {move || format!("Link {} card(s) to #{}", selection.targets.get().len(), source)}
                    </button>
                })}
            </div>

            {move || match section() {
                Section::Tasks => view! {
                    <div class="board">
                        <LinkOverlay links=rendered_links order=card_order />
                        {TASK_LANES
                            .iter()
                            .map(|&def| {
                                let cards = Memo::new(move |_| {
                                    task_partition
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
                                                // Use a tuple of all mutable fields to ensure
                                                // changes cause re-render
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
                }.into_any(),
                Section::Projects => view! {
                    <div class="board">
                        {PROJECT_LANES
                            .iter()
                            .map(|&def| {
                                let cards = Memo::new(move |_| {
                                    project_partition
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
                                            key=|project| (project.id, project.status.clone(), project.title.clone())
                                            children=move |project| {
                                                view! { <ProjectCard project=project /> }
                                            }
                                        />
                                    </BoardLane>
                                }
                            })
                            .collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
