use yew::prelude::*;

use super::{
    dom::{current_year, scroll_to_top},
    motion::RevealOnScroll,
};
use crate::site::catalog::{copyright, BRAND, FOOTER_LINKS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo((), |_| current_year());
    let on_scroll_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <RevealOnScroll class="footer-brand">
                        <h3 class="gradient-text">{BRAND}</h3>
                        <p>{"Your partner in digital transformation. We deliver results that matter."}</p>
                        <div class="social-links">
                            {for SOCIAL_LINKS.iter().map(|social| html! {
                                <a class="social-link" href={social.href} aria-label={social.label}>
                                    {social.short}
                                </a>
                            })}
                        </div>
                    </RevealOnScroll>

                    {for FOOTER_LINKS.iter().enumerate().map(|(index, group)| html! {
                        <RevealOnScroll class="footer-links" delay_ms={100 * index as u32}>
                            <h4>{group.title}</h4>
                            <ul>
                                {for group.links.iter().map(|link| html! {
                                    <li><a href="#">{*link}</a></li>
                                })}
                            </ul>
                        </RevealOnScroll>
                    })}
                </div>

                <div class="footer-bottom">
                    <p>{copyright(*year)}</p>
                    <button
                        type="button"
                        class="back-to-top"
                        aria-label="Back to top"
                        onclick={on_scroll_top}
                    >
                        {"↑"}
                    </button>
                </div>
            </div>
        </footer>
    }
}
