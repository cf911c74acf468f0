//! Past Paper Parser - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading PDF exam papers to a processing
//! service and browsing the extracted questions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (root controller, one ViewState)                │
//! │  ├── Idle     → UploadSection                               │
//! │  ├── Loading  → LoadingPanel                                │
//! │  ├── Error    → ErrorPanel                                  │
//! │  └── Success  → ResultsSection                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Payload types (UploadResult, Question, Metadata) and errors
//! - [`state`] - Root view state machine
//! - [`components`] - UI components (Upload, Results, etc.)
//! - [`services`] - Upload to the processing endpoint, JSON export

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    UploadResult, Question, Metadata, Scalar,
    // Display
    QuestionCard, OptionRow,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{ViewState, Transition};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic/console hooks and mount the app.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Past Paper Parser - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Past Paper Parser"/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

/// Root controller: owns the view state and switches child views.
#[component]
fn MainContent() -> impl IntoView {
    let state = create_rw_signal(ViewState::Idle);

    let on_loading_change = Callback::new(move |loading: bool| {
        let transition = if loading { Transition::Submit } else { Transition::Settle };
        state.update(|s| s.apply(transition));
    });
    let on_processed = Callback::new(move |result: UploadResult| {
        state.update(|s| s.apply(Transition::Succeed(result)));
    });
    let on_error = Callback::new(move |message: String| {
        state.update(|s| s.apply(Transition::Fail(message)));
    });
    let on_reset = Callback::new(move |_: ()| {
        log::info!("🔄 Back to upload");
        state.update(|s| s.apply(Transition::Reset));
    });

    view! {
        <div class="container">
            <Hero/>

            <main class="app-main">
                {move || match state.get() {
                    ViewState::Idle => view! {
                        <UploadSection
                            on_processed=on_processed
                            on_error=on_error
                            on_loading_change=on_loading_change
                        />
                    }
                    .into_view(),
                    ViewState::Loading => view! { <LoadingPanel/> }.into_view(),
                    ViewState::Error(message) => view! {
                        <ErrorPanel message=message on_retry=on_reset/>
                    }
                    .into_view(),
                    ViewState::Success(result) => view! {
                        <ResultsSection result=result on_reset=on_reset/>
                    }
                    .into_view(),
                }}
            </main>
        </div>

        <Footer/>
    }
}
