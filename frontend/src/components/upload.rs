//! PDF upload component with drag & drop support.
//!
//! Handles file selection and hands the file to the upload service.
//! Outcomes are reported to the parent through callbacks.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::services::{submit_pdf, HttpPdfService, UploadEvents};
use crate::UploadResult;

/// Forwards upload outcomes to the parent's callbacks.
#[derive(Clone, Copy)]
struct CallbackEvents {
    on_processed: Callback<UploadResult>,
    on_error: Callback<String>,
    on_loading_change: Callback<bool>,
}

impl UploadEvents for CallbackEvents {
    fn loading_changed(&self, loading: bool) {
        self.on_loading_change.call(loading);
    }

    fn processed(&self, result: UploadResult) {
        self.on_processed.call(result);
    }

    fn failed(&self, message: String) {
        self.on_error.call(message);
    }
}

/// Nesting depth of an ongoing drag over the drop zone.
///
/// `dragenter`/`dragleave` also fire when the pointer crosses the zone's
/// children, so a single flag would flicker off over the prompt text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct DragDepth(u32);

impl DragDepth {
    fn enter(self) -> Self {
        DragDepth(self.0 + 1)
    }

    fn leave(self) -> Self {
        DragDepth(self.0.saturating_sub(1))
    }

    fn is_active(self) -> bool {
        self.0 > 0
    }
}

/// Only one file per upload.
fn first_file(files: Option<FileList>) -> Option<File> {
    let files = files?;
    if files.length() > 1 {
        log::warn!("⚠️ {} files received, only the first one is used", files.length());
    }
    files.get(0)
}

#[component]
pub fn UploadSection(
    #[prop(into)] on_processed: Callback<UploadResult>,
    #[prop(into)] on_error: Callback<String>,
    #[prop(into)] on_loading_change: Callback<bool>,
) -> impl IntoView {
    let (drag_depth, set_drag_depth) = create_signal(DragDepth::default());
    let is_drag_active = move || drag_depth.get().is_active();
    let input_ref = create_node_ref::<html::Input>();

    let events = CallbackEvents {
        on_processed,
        on_error,
        on_loading_change,
    };

    let handle_file = move |file: File| {
        spawn_local(async move {
            let service = HttpPdfService::default();
            submit_pdf(&service, file, &events).await;
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            handle_file(file);
        }
        // Picking the same file again must fire `change` again
        input.set_value("");
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_depth.update(|depth| *depth = depth.enter());
    };

    // Required for the zone to accept a drop
    let on_drag_over = move |ev: DragEvent| ev.prevent_default();

    let on_drag_leave = move |_: DragEvent| {
        set_drag_depth.update(|depth| *depth = depth.leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_depth.set(DragDepth::default());
        let files = ev.data_transfer().and_then(|dt| dt.files());
        if let Some(file) = first_file(files) {
            handle_file(file);
        }
    };

    // Clicking anywhere in the zone opens the picker
    let trigger_file_input = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="file-upload-container">
            <div
                class="dropzone"
                class:active=is_drag_active
                on:click=trigger_file_input
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    type="file"
                    accept=".pdf,application/pdf"
                    style="display:none"
                    node_ref=input_ref
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_file_change
                />
                <div class="upload-content">
                    <div class="upload-icon">"📄"</div>
                    <Show
                        when=is_drag_active
                        fallback=|| view! {
                            <h3>"Upload Past Paper PDF"</h3>
                            <p>"Drag and drop a PDF file here, or click to select"</p>
                            <button type="button" class="upload-button">"Choose File"</button>
                        }
                    >
                        <p>"Drop the PDF here..."</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_over_child_stays_active() {
        // zone, then the prompt inside it
        let depth = DragDepth::default().enter().enter();
        // leaving the zone for the child
        let depth = depth.leave();
        assert!(depth.is_active());

        let depth = depth.leave();
        assert!(!depth.is_active());
    }

    #[test]
    fn test_unmatched_leave_stays_inactive() {
        let depth = DragDepth::default().leave();
        assert_eq!(depth, DragDepth::default());
        assert!(depth.enter().is_active());
    }
}
