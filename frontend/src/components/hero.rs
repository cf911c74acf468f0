//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Past Paper Parser"</h1>
            <p class="subtitle">"Upload a PDF exam paper to extract structured questions"</p>
        </header>
    }
}
