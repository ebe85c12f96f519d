//! Sprint Board Frontend App
//!
//! Main application component: board tabs, collection loading, and the
//! drop handler that turns drag-and-drop into status transfers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_lanedrop::{bind_global_mouseup, create_dnd_signals, DragKind as SourceKind, DragSource};
use reactive_stores::Store;

use crate::board::{DragKind, DragRef, WriteRoute};
use crate::commands;
use crate::components::{BoardsSection, SprintBoardSection};
use crate::context::AppContext;
use crate::store::{store_apply_transfer, store_load_projects, store_load_tasks, AppState};
use crate::sync::{UpdateQueue, DEBOUNCE_MS};

/// Top-level board tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoardTab {
    Boards,
    Sprint,
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (error, set_error) = signal::<Option<String>>(None);
    let (tab, set_tab) = signal(BoardTab::Boards);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (error, set_error));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // DnD signals shared by every board section
    let dnd = create_dnd_signals();
    provide_context(dnd);

    // Pending debounced writes, one per (item id, field)
    let queue = Rc::new(RefCell::new(UpdateQueue::new()));

    // Drop handler: optimistic local transfer, then the remote write
    bind_global_mouseup(dnd, {
        let queue = queue.clone();
        move |source: DragSource, lane_title: &'static str| {
            let drag = DragRef {
                kind: match source.kind {
                    SourceKind::Task => DragKind::Task,
                    SourceKind::SubTask => DragKind::SubTask,
                    SourceKind::Project => DragKind::Project,
                },
                id: source.id,
                from_task_id: source.parent_id,
            };

            let write = match store_apply_transfer(&store, drag, lane_title) {
                Ok(write) => write,
                Err(err) => {
                    ctx.report_error(err.to_string());
                    return;
                }
            };

            match write.route {
                WriteRoute::Item => {
                    let generation = queue
                        .borrow_mut()
                        .push((write.id, write.field), write.value.clone());
                    let queue = queue.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(DEBOUNCE_MS).await;
                        let pending = queue.borrow_mut().flush((write.id, write.field), generation);
                        let Some(value) = pending else {
                            // A later transfer of the same item owns the window
                            return;
                        };
                        if let Err(err) =
                            commands::update_item_field(write.id, write.field, &value).await
                        {
                            ctx.report_error(format!("Failed to update item {}: {}", write.id, err));
                            // Refetch is the rollback for the optimistic write
                            match commands::list_tasks().await {
                                Ok(tasks) => store_load_tasks(&store, tasks),
                                Err(err) => {
                                    ctx.report_error(format!("Failed to reload tasks: {}", err))
                                }
                            }
                        }
                    });
                }
                WriteRoute::Project => {
                    spawn_local(async move {
                        if let Err(err) =
                            commands::update_project_field(write.id, write.field, &write.value).await
                        {
                            ctx.report_error(format!(
                                "Failed to update project {}: {}",
                                write.id, err
                            ));
                        }
                        // Project writes always refetch, success or not
                        match commands::list_projects().await {
                            Ok(projects) => store_load_projects(&store, projects),
                            Err(err) => {
                                ctx.report_error(format!("Failed to reload projects: {}", err))
                            }
                        }
                    });
                }
            }
        }
    });

    // Load collections on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading boards, trigger={}", trigger).into());
        spawn_local(async move {
            // A failed fetch keeps the last known-good snapshot
            match commands::list_tasks().await {
                Ok(tasks) => store_load_tasks(&store, tasks),
                Err(err) => ctx.report_error(format!("Failed to load tasks: {}", err)),
            }
            match commands::list_projects().await {
                Ok(projects) => store_load_projects(&store, projects),
                Err(err) => ctx.report_error(format!("Failed to load projects: {}", err)),
            }
        });
    });

    let tab_class = move |t: BoardTab| {
        if tab.get() == t {
            "tab-btn active"
        } else {
            "tab-btn"
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Sprint Board"</h1>
                <nav class="board-tabs">
                    <button class=move || tab_class(BoardTab::Boards) on:click=move |_| set_tab.set(BoardTab::Boards)>
                        "Boards"
                    </button>
                    <button class=move || tab_class(BoardTab::Sprint) on:click=move |_| set_tab.set(BoardTab::Sprint)>
                        "Sprint"
                    </button>
                </nav>
            </header>

            // Section-level error banner
            {move || error.get().map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button on:click=move |_| ctx.clear_error()>"×"</button>
                </div>
            })}

            <main class="main-content">
                {move || match tab.get() {
                    BoardTab::Boards => view! { <BoardsSection /> }.into_any(),
                    BoardTab::Sprint => view! { <SprintBoardSection /> }.into_any(),
                }}
            </main>
        </div>
    }
}
