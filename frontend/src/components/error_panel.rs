//! Error message with a way back to the upload view.

use leptos::*;

#[component]
pub fn ErrorPanel(
    message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <h3>"Error"</h3>
            <p>{message}</p>
            <button class="reset-button" on:click=move |_| on_retry.call(())>
                "Try Again"
            </button>
        </div>
    }
}
