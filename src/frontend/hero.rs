use yew::prelude::*;

use super::dom::DocumentScroller;
use crate::site::{
    catalog::{BRAND, HERO_BACKGROUND, HERO_STATS},
    navigation::{navigate, Section},
};

#[function_component(Hero)]
pub fn hero() -> Html {
    let go_to = Callback::from(|section: Section| {
        navigate(&DocumentScroller, section);
    });

    let background = format!("background-image: url({HERO_BACKGROUND});");

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-background" style={background}>
                <div class="hero-shade"></div>
            </div>
            <div class="hero-orb hero-orb-blue" aria-hidden="true"></div>
            <div class="hero-orb hero-orb-purple" aria-hidden="true"></div>

            <div class="hero-content container">
                <div class="hero-badge enter" style="--enter-step: 0;">
                    <span aria-hidden="true">{"✦"}</span>
                    <span>{format!("Welcome to {BRAND}")}</span>
                </div>

                <h1 class="hero-title enter" style="--enter-step: 1;">
                    {"Accelerate Your"}
                    <br />
                    <span class="gradient-text">{"Digital Presence"}</span>
                </h1>

                <p class="hero-subtitle enter" style="--enter-step: 2;">
                    {"Unlock your brand's potential with cutting-edge digital marketing strategies. From branding to growth, we deliver results that matter."}
                </p>

                <div class="hero-actions enter" style="--enter-step: 3;">
                    <button
                        type="button"
                        class="btn-primary btn-large"
                        onclick={go_to.reform(|_: MouseEvent| Section::Contact)}
                    >
                        {"Start Your Project"}
                        <span class="arrow" aria-hidden="true">{"→"}</span>
                    </button>
                    <button
                        type="button"
                        class="btn-outline btn-large"
                        onclick={go_to.reform(|_: MouseEvent| Section::Services)}
                    >
                        {"View Services"}
                    </button>
                </div>

                <dl class="hero-stats enter" style="--enter-step: 4;">
                    {for HERO_STATS.iter().map(|(number, label)| html! {
                        <div class="hero-stat">
                            <dt>{*number}</dt>
                            <dd>{*label}</dd>
                        </div>
                    })}
                </dl>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <span>{"Scroll to explore"}</span>
                <span class="scroll-mouse"><span class="scroll-dot"></span></span>
            </div>
        </section>
    }
}
