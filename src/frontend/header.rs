use yew::prelude::*;

use super::{dom::DocumentScroller, motion::use_header_style, theme::ThemeToggle};
use crate::site::{
    catalog::BRAND,
    navigation::{navigate_then, MobileMenu, Section},
};

#[function_component(Header)]
pub fn header() -> Html {
    let style = use_header_style();
    let menu = use_state_eq(MobileMenu::default);

    let go_to = {
        let menu = menu.clone();
        Callback::from(move |section: Section| {
            let menu = menu.clone();
            navigate_then(&DocumentScroller, section, move || menu.set(MobileMenu::closed()));
        })
    };

    let on_menu_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    let nav_button = |section: Section, class: &'static str| {
        let onclick = go_to.reform(move |_: MouseEvent| section);
        html! {
            <button type="button" class={class} onclick={onclick}>{section.label()}</button>
        }
    };

    let open = menu.is_open();

    html! {
        <header class={classes!("site-header", style.class())}>
            <div class="container header-bar">
                <a class="brand gradient-text" href="#home" onclick={go_to.reform(|event: MouseEvent| {
                    event.prevent_default();
                    Section::Home
                })}>
                    {BRAND}
                </a>

                <nav class="desktop-nav" aria-label="Primary">
                    {for Section::ALL.into_iter().map(|section| nav_button(section, "nav-link"))}
                </nav>

                <div class="header-actions">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="btn-primary header-cta"
                        onclick={go_to.reform(|_: MouseEvent| Section::Contact)}
                    >
                        {"Get Started"}
                    </button>
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-label={if open { "Close menu" } else { "Open menu" }}
                        aria-expanded={open.to_string()}
                        aria-controls="mobile-nav"
                        onclick={on_menu_toggle}
                    >
                        <span aria-hidden="true">{if open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </div>

            <nav
                id="mobile-nav"
                class={classes!("mobile-nav", open.then_some("is-open"))}
                aria-label="Mobile"
                aria-hidden={(!open).to_string()}
            >
                <div class="mobile-nav-inner container">
                    {for Section::ALL.into_iter().map(|section| nav_button(section, "mobile-link"))}
                    <button
                        type="button"
                        class="btn-primary mobile-cta"
                        onclick={go_to.reform(|_: MouseEvent| Section::Contact)}
                    >
                        {"Get Started"}
                    </button>
                </div>
            </nav>
        </header>
    }
}
