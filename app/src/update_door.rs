use crate::config::Config;
use crate::editor::{Editor, Panel, UpdateRequest};
use crate::routes::{DoorApi, DoorsClient};
use crate::store_models::{Door, DoorId, DoorStatus, DraftEdit};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct UpdateDoorProps {
    door: Option<Door>,
    door_id: Option<DoorId>,
}

/// Applies `f` to a copy of the editor and publishes the result.
fn update<R>(editor: &Signal<Editor>, f: impl FnOnce(&mut Editor) -> R) -> R {
    let mut next = (*editor.get_untracked()).clone();
    let out = f(&mut next);
    editor.set(next);
    out
}

/// Pushes the editor's draft back into the form after the server answered.
fn sync_form(editor: &Signal<Editor>, name: &Signal<String>, status: &Signal<String>) {
    let draft = editor.get_untracked().draft().clone();
    name.set(draft.name);
    status.set(draft.status.to_string());
}

/// Form fields seeded from the draft; every change is merged back into it.
fn bind_form<'a>(
    cx: Scope<'a>,
    editor: &'a Signal<Editor>,
) -> (&'a Signal<String>, &'a Signal<String>) {
    let draft = editor.get_untracked().draft().clone();
    let name = create_signal(cx, draft.name);
    let status = create_signal(cx, draft.status.to_string());

    create_effect(cx, move || {
        let edit = DraftEdit::Name((*name.get()).clone());
        update(editor, |editor| editor.edit(edit));
    });
    create_effect(cx, move || match status.get().parse::<DoorStatus>() {
        Ok(value) => update(editor, |editor| editor.edit(DraftEdit::Status(value))),
        Err(_) => log::warn!("Ignoring unknown door status {:?}", status.get()),
    });
    (name, status)
}

async fn fetch_into<A: DoorApi>(
    editor: &Signal<Editor>,
    name: &Signal<String>,
    status: &Signal<String>,
    api: &A,
    id: DoorId,
) {
    let result = api.fetch_door(&id).await;
    update(editor, |editor| editor.finish_fetch(result));
    sync_form(editor, name, status);
}

/// Sends the draft, then keeps the success message up for
/// `success_timeout_ms` before clearing it.
async fn submit_draft<A, S, F>(
    editor: &Signal<Editor>,
    name: &Signal<String>,
    status: &Signal<String>,
    api: &A,
    request: UpdateRequest,
    success_timeout_ms: u32,
    sleep: S,
) where
    A: DoorApi,
    S: FnOnce(u32) -> F,
    F: Future<Output = ()>,
{
    let result = api.update_door(&request.id, &request.draft).await;
    let ticket = update(editor, |editor| editor.finish_submit(result));
    sync_form(editor, name, status);
    if let Some(ticket) = ticket {
        sleep(success_timeout_ms).await;
        log::debug!("Success message expired");
        update(editor, |editor| editor.expire_success(ticket));
    }
}

#[component]
pub fn UpdateDoor<G: Html>(cx: Scope, props: UpdateDoorProps) -> View<G> {
    let config = use_context::<Config>(cx);
    let client = use_context::<DoorsClient>(cx);
    let editor = create_signal(cx, Editor::new(props.door, props.door_id));
    let (name, status) = bind_form(cx, editor);

    if let Some(id) = update(editor, Editor::begin_fetch) {
        spawn_local_scoped(cx, fetch_into(editor, name, status, client, id));
    }

    let handle_submit = move |_| {
        let Some(request) = update(editor, Editor::begin_submit) else {
            return;
        };
        spawn_local_scoped(
            cx,
            submit_draft(
                editor,
                name,
                status,
                client,
                request,
                config.success_timeout_ms,
                TimeoutFuture::new,
            ),
        );
    };

    let panel = create_selector(cx, move || editor.get().panel());
    let loading = create_selector(cx, move || editor.get().is_loading());
    let success = create_selector(cx, move || editor.get().is_success());
    let error = create_selector(cx, move || editor.get().error().map(str::to_string));
    let door_name = create_selector(cx, move || {
        editor
            .get()
            .door()
            .map(|door| door.name.clone())
            .unwrap_or_default()
    });
    let door_status = create_selector(cx, move || {
        editor
            .get()
            .door()
            .map(|door| door.status.to_string())
            .unwrap_or_default()
    });

    view! {cx,
        (match &*panel.get() {
            Panel::Loading => view! {cx,
                div(class="loading-state") {
                    p { "Loading door data..." }
                }
            },
            Panel::Failed(message) => {
                let message = format!("Error: {}", message);
                view! {cx,
                    div(class="error-state") {
                        p { (message) }
                    }
                }
            }
            Panel::Empty => view! {cx,
                div(class="no-item-state") {
                    p { "No door found." }
                }
            },
            Panel::Ready => view! {cx,
                div(class="update-item-container") {
                    h2 { "Update Door" }
                    div(class="item-details") {
                        h3 { "Current Door Details:" }
                        div(class="item-field") {
                            label { "Name:" }
                            p { (door_name.get()) }
                        }
                        div(class="item-field") {
                            label { "Status:" }
                            p { (door_status.get()) }
                        }
                    }
                    div(class="update-form") {
                        h3 { "Update Details:" }
                        div(class="form-group") {
                            label(for="name") { "New Name:" }
                            input(
                                type="text",
                                id="name",
                                name="name",
                                class="form-input",
                                placeholder="Enter new name",
                                bind:value=name
                            )
                        }
                        div(class="form-group") {
                            label(for="status") { "New Status:" }
                            select(id="status", name="status", class="form-input", bind:value=status) {
                                option(value="open", selected=*status.get() == "open") { "Open" }
                                option(value="closed", selected=*status.get() == "closed") { "Closed" }
                            }
                        }
                        button(
                            type="button",
                            class="update-button",
                            on:click=handle_submit,
                            disabled=*loading.get()
                        ) {
                            (if *loading.get() { "Updating..." } else { "Update Door" })
                        }
                    }
                    (if *success.get() {
                        view! {cx,
                            div(class="success-message") {
                                p { "Door updated successfully!" }
                            }
                        }
                    } else {
                        View::empty()
                    })
                    (match &*error.get() {
                        Some(message) => {
                            let message = message.clone();
                            view! {cx,
                                div(class="error-message") {
                                    p { (message) }
                                }
                            }
                        }
                        None => View::empty(),
                    })
                }
            },
        })
    }
}
