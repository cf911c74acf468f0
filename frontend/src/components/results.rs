//! Results view: one expandable card per extracted question.

use leptos::*;

use crate::services::download_json;
use crate::state::toggle_selection;
use crate::{MetadataPanel, QuestionCard, QuestionDetail, UploadResult};

#[component]
pub fn ResultsSection(
    result: UploadResult,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    if result.is_empty() {
        return view! {
            <div class="results-container">
                <p>"No questions found in the PDF."</p>
                <button class="reset-button" on:click=move |_| on_reset.call(())>
                    "Try Another File"
                </button>
            </div>
        }
        .into_view();
    }

    // Index of the expanded card, if any
    let (selected, set_selected) = create_signal(None::<usize>);

    let cards = result.cards();
    let total = cards.len();
    let metadata = result.metadata.clone();

    let on_download = move |_| {
        if let Err(e) = download_json(&result) {
            log::error!("❌ {}", e);
        }
    };

    view! {
        <div class="results-container">
            <div class="results-header">
                <h2>"Extracted Questions (" {total} ")"</h2>
                <div class="header-actions">
                    <button class="download-button" on:click=on_download>
                        "Download JSON"
                    </button>
                    <button class="reset-button" on:click=move |_| on_reset.call(())>
                        "Upload New File"
                    </button>
                </div>
            </div>

            <div class="questions-grid">
                {cards
                    .into_iter()
                    .map(|card| view! {
                        <QuestionCardView card=card selected=selected set_selected=set_selected/>
                    })
                    .collect_view()}
            </div>

            {metadata.map(|metadata| view! { <MetadataPanel metadata=metadata/> })}
        </div>
    }
    .into_view()
}

#[component]
fn QuestionCardView(
    card: QuestionCard,
    selected: ReadSignal<Option<usize>>,
    set_selected: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let index = card.index;
    let is_expanded = move || selected.get() == Some(index);
    let toggle_expand = move |_| set_selected.update(|current| *current = toggle_selection(*current, index));

    let question = card.question;

    view! {
        <div class="question-card" class:expanded=is_expanded on:click=toggle_expand>
            <div class="question-header">
                <h3>{card.title}</h3>
                <span class="question-type">{card.kind}</span>
            </div>

            <div class="question-preview">{card.preview}</div>

            <Show
                when=is_expanded
                fallback=|| view! { }
            >
                <QuestionDetail question=question.clone()/>
            </Show>
        </div>
    }
}
