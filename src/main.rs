use dioxus::prelude::*;
use dioxus::html::FileData;
use dropzone::{DropZone, DroppedFile, ErrorResult, ProcessResult};

fn main() {
    dioxus::launch(App);
}

#[derive(Clone, PartialEq, Default)]
struct LastDrop {
    accepted: Vec<DroppedFile>,
    invalid_size: Vec<DroppedFile>,
    invalid_type: Vec<DroppedFile>,
}

#[component]
fn App() -> Element {
    let mut last_drop = use_signal(LastDrop::default);

    rsx! {
        document::Title { "DropZone" }
        DropZone {
            on_process: move |result: ProcessResult<FileData>| {
                last_drop.set(LastDrop {
                    accepted: result.accepted_files.iter().map(DroppedFile::from).collect(),
                    ..LastDrop::default()
                });
            },
            on_error: move |result: ErrorResult<FileData>| {
                last_drop.with_mut(|drop| {
                    drop.invalid_size = result.invalid_size_files.iter().map(DroppedFile::from).collect();
                    drop.invalid_type = result.invalid_type_files.iter().map(DroppedFile::from).collect();
                });
            },
            main { style: "font-family: sans-serif; padding: 2rem;",
                h1 { "Drag a PDF or JSON file onto this window" }
                p { "Files up to 1 MB are accepted." }
                FileList { title: "Accepted", files: last_drop().accepted }
                FileList { title: "Too large", files: last_drop().invalid_size }
                FileList { title: "Wrong type", files: last_drop().invalid_type }
            }
        }
    }
}

#[component]
fn FileList(title: String, files: Vec<DroppedFile>) -> Element {
    if files.is_empty() {
        return rsx! {};
    }
    rsx! {
        section {
            h2 { "{title}" }
            ul {
                for file in files {
                    li { "{file.name} ({file.mime_type}, {file.size} bytes)" }
                }
            }
        }
    }
}
