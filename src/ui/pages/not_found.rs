//! Not found page component
//!
//! Rendered by the router fallback for any path other than `/`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::BRAND_NAME;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Make the server answer with 404 instead of 200
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found - {}", BRAND_NAME) />

        <div class="min-h-screen bg-[#0E1015] text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/5 rounded-full flex items-center justify-center">
                    <Icon name=icons::ZAP class="w-12 h-12 text-[#E4795A]" />
                </div>

                <h1 class="text-6xl font-bold mb-4 bg-gradient-to-r from-[#E4795A] to-[#FFBB41] bg-clip-text text-transparent">
                    "404"
                </h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-block bg-gradient-to-r from-[#E4795A] to-[#FFBB41] px-8 py-3 rounded-full font-medium hover:scale-105 transition-transform"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
