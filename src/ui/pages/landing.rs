//! Landing page component
//!
//! Single-page marketing site for AiME:
//! - SEO meta tags
//! - Fixed navigation bar that turns translucent after scrolling, with a
//!   collapsible mobile menu
//! - Hero section with a typed headline that replays whenever the hero is
//!   scrolled back into view
//! - Features grid
//! - Pricing tiers with an add-on note
//! - Closing call-to-action

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{
    ADD_ON_NOTE, ADD_ON_TITLE, BRAND_NAME, CLOSING_CTA, FEATURES, Feature, HERO_HEADLINE,
    HERO_SUBHEADING, MenuState, NAV_LINKS, PAGE_DESCRIPTION, PAGE_TITLE, PRICING_TIERS,
    PricingTier, ScrollState, navbar_class,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::typewriter::Typewriter;

const GRADIENT_BUTTON: &str = "bg-gradient-to-r from-[#E4795A] to-[#FFBB41] hover:scale-105 transition-transform";
const WHITE_BUTTON: &str = "bg-white text-[#0E1015] hover:scale-105 transition-transform";

/// Landing page component with scroll-reactive navbar and headline
#[component]
pub fn LandingPage() -> impl IntoView {
    let scroll = RwSignal::new(ScrollState::new());
    let hero_ref = NodeRef::<html::Section>::new();

    let scrolled = Memo::new(move |_| scroll.with(|s| s.is_scrolled()));
    let headline_key = Memo::new(move |_| scroll.with(|s| s.headline_key()));

    // Registered on mount, removed when the page unmounts
    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let sample = read_scroll_sample(hero_ref);
            scroll.update(|state| {
                state.apply(sample);
            });
        });

        on_cleanup(move || handle.remove());
    }

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-[#0E1015] text-white">
            <Navbar scrolled=scrolled />
            <HeroSection hero_ref=hero_ref headline_key=headline_key />
            <FeaturesSection />
            <PricingSection />
            <CtaSection />

            <LandingStyles />
        </div>
    }
}

/// Capture the geometry the scroll state needs.
///
/// The hero bounds are `None` until the section is mounted.
#[cfg(not(feature = "ssr"))]
fn read_scroll_sample(hero_ref: NodeRef<html::Section>) -> crate::core::ScrollSample {
    use crate::core::{ScrollSample, VerticalBounds};

    let window = window();
    let offset = window.scroll_y().unwrap_or_default();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();

    let hero = hero_ref.get_untracked().map(|el| {
        let rect = el.get_bounding_client_rect();
        VerticalBounds::new(rect.top(), rect.bottom())
    });

    ScrollSample {
        offset,
        viewport_height,
        hero,
    }
}

/// SEO meta tags using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        <Meta name="theme-color" content="#0E1015" />
    }
}

/// Fixed navigation bar with mobile menu
#[component]
fn Navbar(#[prop(into)] scrolled: Signal<bool>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <nav class=move || navbar_class(scrolled.get())>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <div class="flex items-center">
                        <Icon name=icons::ZAP class="w-8 h-8 text-[#E4795A]" />
                        <span class="ml-2 text-xl font-bold">{BRAND_NAME}</span>
                    </div>

                    // Desktop navigation
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS.into_iter().map(|link| view! {
                            <a href=link.href class="hover:text-[#E4795A] transition-colors">
                                {link.label}
                            </a>
                        }).collect_view()}
                        <a href="#pricing" class=format!("{} px-6 py-2 rounded-full", GRADIENT_BUTTON)>
                            "Get Started"
                        </a>
                    </div>

                    // Mobile menu button
                    <button
                        type="button"
                        class="md:hidden"
                        on:click=move |_| menu.update(MenuState::toggle)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                    >
                        {move || view! {
                            <Icon name=menu.get().toggle_icon() class="w-6 h-6" />
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <div class=move || format!(
                "md:hidden transition-all duration-300 {} overflow-hidden bg-[#0E1015]/90 backdrop-blur-sm",
                menu.get().panel_height_class()
            )>
                <div class="px-4 py-2 space-y-4">
                    {NAV_LINKS.into_iter().map(|link| view! {
                        <a
                            href=link.href
                            class="block hover:text-[#E4795A] transition-colors"
                            on:click=move |_| menu.set(MenuState::Closed)
                        >
                            {link.label}
                        </a>
                    }).collect_view()}
                    <a
                        href="#pricing"
                        class=format!("block w-full text-center {} px-6 py-2 rounded-full", GRADIENT_BUTTON)
                        on:click=move |_| menu.set(MenuState::Closed)
                    >
                        "Get Started"
                    </a>
                </div>
            </div>
        </nav>
    }
}

/// Full-viewport hero with the typed headline
#[component]
fn HeroSection(
    hero_ref: NodeRef<html::Section>,
    #[prop(into)] headline_key: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <section node_ref=hero_ref class="relative min-h-screen flex items-center justify-center px-4">
            // Background decoration
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute top-1/4 -left-1/4 w-1/2 h-1/2 bg-[#E4795A]/20 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 -right-1/4 w-1/2 h-1/2 bg-[#FFBB41]/20 rounded-full blur-3xl animate-pulse landing-delay-1000"></div>
            </div>

            <div class="max-w-4xl mx-auto text-center relative z-10">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-[#E4795A] to-[#FFBB41] bg-clip-text text-transparent">
                    // Re-runs on every key change, remounting the animation from the first character
                    {move || {
                        let key = headline_key.get();
                        view! { <Typewriter text=HERO_HEADLINE replay_key=key /> }
                    }}
                </h1>
                <p class="text-lg md:text-xl text-gray-400 mb-8">{HERO_SUBHEADING}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href="#pricing"
                        class=format!("w-full sm:w-auto text-center {} px-8 py-3 rounded-full text-lg font-medium", GRADIENT_BUTTON)
                    >
                        "Get Started"
                    </a>
                    <a
                        href="#features"
                        class="w-full sm:w-auto text-center bg-white/10 px-8 py-3 rounded-full text-lg font-medium hover:bg-white/20 transition-colors"
                    >
                        "Learn More"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">"Powerful Features"</h2>
                    <p class="text-gray-400">"Everything you need to create amazing digital experiences"</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="bg-white/5 p-6 rounded-2xl hover:bg-white/10 transition-colors">
            <div class="text-[#E4795A] mb-4">
                <Icon name=feature.icon class="w-8 h-8" />
            </div>
            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
            <p class="text-gray-400">{feature.description}</p>
        </div>
    }
}

/// Pricing section component
#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-[#E4795A]/5 to-[#FFBB41]/5" aria-hidden="true"></div>
            <div class="max-w-7xl mx-auto relative z-10">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">"Choose Your Plan"</h2>
                    <p class="text-gray-400">"Scale your outreach with our flexible pricing options"</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PRICING_TIERS.into_iter().map(|tier| view! { <PricingCard tier=tier /> }).collect_view()}
                </div>

                <div class="mt-16 text-center bg-white/5 p-8 rounded-2xl backdrop-blur-sm">
                    <h4 class="text-2xl font-bold mb-4">{ADD_ON_TITLE}</h4>
                    <p class="text-gray-400">{ADD_ON_NOTE}</p>
                </div>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(tier: PricingTier) -> impl IntoView {
    let highlighted = tier.is_highlighted();

    let card_class = if highlighted {
        "bg-gradient-to-b from-[#E4795A]/20 to-[#FFBB41]/20 p-8 rounded-2xl backdrop-blur-sm hover:scale-105 transition-all duration-300 border border-white/20 lg:scale-105"
    } else {
        "bg-white/5 p-8 rounded-2xl backdrop-blur-sm hover:bg-white/10 transition-all duration-300 border border-white/10"
    };
    let check_class = if highlighted {
        "w-5 h-5 text-[#FFBB41] mr-2"
    } else {
        "w-5 h-5 text-[#E4795A] mr-2"
    };
    let button_class = format!(
        "w-full {} px-6 py-3 rounded-full font-medium",
        if highlighted { WHITE_BUTTON } else { GRADIENT_BUTTON }
    );

    view! {
        <div class=card_class data-tier=tier.name>
            <h3 class="text-2xl font-bold mb-4">{tier.name}</h3>
            <div class="mb-6">
                <span class="text-4xl font-bold">{tier.price}</span>
                <span class="text-gray-400">{tier.period}</span>
            </div>
            <ul class="space-y-4 mb-8">
                {tier.benefits.iter().copied().map(|benefit| view! {
                    <li class="flex items-center">
                        <Icon name=icons::CHECK class=check_class />
                        <span class="text-gray-300">{benefit}</span>
                    </li>
                }).collect_view()}
            </ul>
            <button type="button" class=button_class>
                {tier.cta_label}
            </button>
        </div>
    }
}

/// Closing call-to-action banner
#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="relative py-20 px-4 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-r from-[#E4795A]/20 to-[#FFBB41]/20 blur-3xl" aria-hidden="true"></div>
            <div class="max-w-4xl mx-auto text-center relative z-10">
                <h2 class="text-4xl font-bold mb-6">{CLOSING_CTA.title}</h2>
                <p class="text-gray-400 mb-8">{CLOSING_CTA.subtitle}</p>
                <a
                    href="#pricing"
                    class=format!("inline-flex items-center {} px-8 py-3 rounded-full text-lg font-medium", WHITE_BUTTON)
                >
                    {CLOSING_CTA.button}
                    <Icon name=icons::CHEVRON_RIGHT class="inline-block ml-2 w-5 h-5" />
                </a>
            </div>
        </section>
    }
}

/// CSS for the pieces Tailwind utilities don't cover
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }

            /* Masked SVG icons tinted by the current text color */
            .icon-mask {
                display: inline-block;
                flex-shrink: 0;
                background-color: currentColor;
                -webkit-mask-repeat: no-repeat;
                mask-repeat: no-repeat;
                -webkit-mask-position: center;
                mask-position: center;
                -webkit-mask-size: contain;
                mask-size: contain;
            }

            .typewriter-cursor {
                display: inline-block;
                margin-left: 0.05em;
                color: #FFBB41;
                -webkit-text-fill-color: #FFBB41;
                animation: typewriter-blink 1s step-end infinite;
            }

            @keyframes typewriter-blink {
                0%, 100% { opacity: 1; }
                50% { opacity: 0; }
            }

            .landing-delay-1000 {
                animation-delay: 1s;
            }
            "#
        </style>
    }
}
