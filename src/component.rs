use crate::classify::classify;
use crate::config::{default_accepted_mime_types, DropZoneConfig, DEFAULT_MAX_SIZE_FILE};
#[cfg(target_arch = "wasm32")]
use crate::listener::WindowListener;
use crate::notify::{ErrorResult, ProcessResult};
use crate::overlay::{OverlayEvent, Visibility};
use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::info;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

const DROPZONE_CSS: Asset = asset!("/assets/styling/dropzone.css");

pub const DEFAULT_MESSAGE: &str = "Drop files here to process them";

fn transition(mut visibility: Signal<Visibility>, event: OverlayEvent) {
    let current = *visibility.peek();
    let next = current.next(event);
    if next != current {
        visibility.set(next);
    }
}

fn allow_drag(evt: &DragEvent) {
    evt.prevent_default();
    evt.data_transfer().set_drop_effect("copy");
}

/// Full-viewport drop target. Shown as soon as a drag enters the window,
/// hidden again on leave or drop. Dropped files are checked against
/// `accepted_mime_types` and `max_size_file`; `on_process` always fires with
/// the accepted files, `on_error` only when something was rejected.
#[component]
pub fn DropZone(
    #[props(default = default_accepted_mime_types())] accepted_mime_types: Vec<String>,
    #[props(default = DEFAULT_MAX_SIZE_FILE)] max_size_file: u64,
    #[props(into, default = DEFAULT_MESSAGE.to_string())] message: String,
    #[props(default)] on_process: EventHandler<ProcessResult<FileData>>,
    #[props(default)] on_error: EventHandler<ErrorResult<FileData>>,
    children: Element,
) -> Element {
    let visibility = use_signal(Visibility::default);

    // Window dragenter subscription, released when the component unmounts.
    #[cfg(target_arch = "wasm32")]
    {
        let subscription = use_hook(|| Rc::new(RefCell::new(None::<WindowListener>)));
        {
            let subscription = subscription.clone();
            use_effect(move || {
                if subscription.borrow().is_some() {
                    return;
                }
                let runtime = Runtime::current();
                let listener = WindowListener::new("dragenter", move |_event| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    transition(visibility, OverlayEvent::WindowDragEnter);
                });
                *subscription.borrow_mut() = listener;
            });
        }
        use_drop(move || {
            subscription.borrow_mut().take();
        });
    }

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        let config = DropZoneConfig::new(accepted_mime_types.clone(), max_size_file);
        let classification = classify(evt.files(), &config);
        transition(visibility, OverlayEvent::Drop);

        info!(
            accepted = classification.accepted.len(),
            invalid_size = classification.invalid_size.len(),
            invalid_type = classification.invalid_type.len(),
            "files dropped"
        );

        let (process, error) = classification.split();
        on_process.call(process);
        if let Some(error) = error {
            on_error.call(error);
        }
    };

    rsx! {
        document::Stylesheet { href: DROPZONE_CSS }
        div {
            class: "dropzone-host",
            // Renderers without a browser window only see drags over the host.
            ondragenter: move |_| {
                if !cfg!(target_arch = "wasm32") {
                    transition(visibility, OverlayEvent::WindowDragEnter);
                }
            },
            div {
                id: "dropzone",
                class: "dropzone",
                style: visibility().style(),
                ondragenter: move |evt| allow_drag(&evt),
                ondragover: move |evt| allow_drag(&evt),
                ondragleave: move |_| transition(visibility, OverlayEvent::DragLeave),
                ondrop: on_drop,
                "{message}"
            }
            {children}
        }
    }
}
