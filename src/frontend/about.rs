use yew::prelude::*;

use super::{
    dom::DocumentScroller,
    motion::{AnimatedCounter, RevealOnScroll},
};
use crate::site::{
    catalog::{ABOUT_IMAGE, BENEFITS, BRAND, STATS},
    navigation::{navigate, Section},
};

#[function_component(About)]
pub fn about() -> Html {
    let on_get_in_touch = Callback::from(|_: MouseEvent| {
        navigate(&DocumentScroller, Section::Contact);
    });

    html! {
        <section id={Section::About.id()} class="section about">
            <div class="container">
                <div class="about-grid">
                    <RevealOnScroll class="about-media slide-from-left">
                        <div class="about-image">
                            <img src={ABOUT_IMAGE} alt={format!("About {BRAND}")} loading="lazy" />
                        </div>
                        <div class="floating-card">
                            <div class="floating-card-label">{"Award Winning"}</div>
                            <div class="floating-card-value">{"#1 Agency"}</div>
                        </div>
                    </RevealOnScroll>

                    <RevealOnScroll class="about-copy slide-from-right">
                        <h2>
                            {"Why Choose"}
                            <br />
                            <span class="gradient-text">{format!("{BRAND}?")}</span>
                        </h2>
                        <p>
                            {"We're not just another digital marketing agency. We're your strategic partner committed to delivering measurable results and driving your business growth."}
                        </p>

                        <ul class="benefits">
                            {for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                                <li>
                                    <RevealOnScroll class="benefit slide-from-left" delay_ms={100 * index as u32}>
                                        <span class="benefit-mark" aria-hidden="true">{"✓"}</span>
                                        <span>{*benefit}</span>
                                    </RevealOnScroll>
                                </li>
                            })}
                        </ul>

                        <button type="button" class="btn-primary" onclick={on_get_in_touch}>
                            {"Get In Touch"}
                        </button>
                    </RevealOnScroll>
                </div>

                <RevealOnScroll class="stats-grid">
                    {for STATS.iter().map(|stat| html! {
                        <div class="stat-card">
                            <div class="stat-value">
                                <AnimatedCounter target={stat.target} />
                                {stat.suffix}
                            </div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    })}
                </RevealOnScroll>
            </div>
        </section>
    }
}
