use leptos::*;

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            <p>"Processing your PDF... This may take a few moments."</p>
        </div>
    }
}
