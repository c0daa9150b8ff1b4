use yew::prelude::*;

use super::motion::RevealOnScroll;
use crate::site::{catalog::SERVICES, navigation::Section};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="section services">
            <div class="container">
                <RevealOnScroll class="section-heading">
                    <h2>{"Our "}<span class="gradient-text">{"Services"}</span></h2>
                    <p>{"Comprehensive digital marketing solutions tailored to your business needs"}</p>
                </RevealOnScroll>

                <div class="card-grid">
                    {for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <RevealOnScroll class="service-card glass" delay_ms={100 * index as u32}>
                            <div class="service-icon" aria-hidden="true">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <span class="learn-more">{"Learn More →"}</span>
                        </RevealOnScroll>
                    })}
                </div>
            </div>
        </section>
    }
}
