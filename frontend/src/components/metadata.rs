use leptos::*;

use crate::Metadata;

/// "Processing Information" panel under the results grid.
#[component]
pub fn MetadataPanel(metadata: Metadata) -> impl IntoView {
    view! {
        <div class="metadata-section">
            <h3>"Processing Information"</h3>
            <div class="metadata-grid">
                {metadata
                    .entries()
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="metadata-item">
                            <strong>{label} ":"</strong> " " {value}
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
