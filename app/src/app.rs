use crate::config::Config;
use crate::loader::{load_door, LoadState};
use crate::routes::DoorsClient;
use crate::update_door::UpdateDoor;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::{Html, Prop, ReadSignal, Scope};
use sycamore::reactive::{create_signal, provide_context, use_context};
use sycamore::view::View;
use sycamore::{component, view};

#[derive(Prop)]
pub struct LoadStateViewProps<'a> {
    state: &'a ReadSignal<LoadState>,
}

#[component]
pub fn LoadStateView<'a, G: Html>(cx: Scope<'a>, props: LoadStateViewProps<'a>) -> View<G> {
    let config = use_context::<Config>(cx);
    let state = props.state;
    view! {cx,
        (match &*state.get() {
            LoadState::Loading => view! {cx,
                div(class="loading-state") {
                    p { "Loading..." }
                }
            },
            LoadState::Failed(message) => {
                let message = format!("Error: {}", message);
                view! {cx,
                    div(class="error-state") {
                        p { (message) }
                    }
                }
            }
            LoadState::Loaded(door) => {
                let door = Some(door.clone());
                let door_id = Some(config.door_id.clone());
                view! {cx,
                    UpdateDoor(door=door, door_id=door_id)
                }
            }
        })
    }
}

/// Loads the configured door once and hands it to the editor.
#[component]
pub fn App<G: Html>(cx: Scope) -> View<G> {
    let config = use_context::<Config>(cx);
    let client = provide_context(cx, DoorsClient::new(&config.api_uri));
    let state = create_signal(cx, LoadState::Loading);

    spawn_local_scoped(cx, async move {
        state.set(load_door(client, &config.door_id).await);
    });

    view! {cx,
        header(class="container") {
            h1 { "Doors" }
        }
        main(class="container") {
            LoadStateView(state=state)
        }
    }
}
