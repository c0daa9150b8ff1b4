mod about;
mod contact;
mod dom;
mod fallback;
mod footer;
mod header;
mod hero;
mod motion;
mod portfolio;
mod services;
mod theme;
mod toast;

use log::{info, Level};
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::site::theme::ThemeStore;
use about::About;
use contact::Contact;
use dom::{apply_theme, LocalStorage};
use fallback::MOUNT_ID;
use footer::Footer;
use header::Header;
use hero::Hero;
use portfolio::Portfolio;
use services::Services;
use theme::{ThemeProvider, THEME_CONFIG};
use toast::ToastProvider;

/// Every path renders the landing page; the catch-all keeps deep links and
/// typos from showing a blank screen.
#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Home /> },
    }
}

#[function_component(Home)]
fn home() -> Html {
    html! {
        <div class="page">
            <Header />
            <main id="content">
                <Hero />
                <Services />
                <Portfolio />
                <About />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider config={THEME_CONFIG}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ThemeProvider>
    }
}

pub fn run() {
    fallback::install();
    let _ = console_log::init_with_level(Level::Info);

    // Paint with the stored theme from the first frame.
    apply_theme(ThemeStore::load(LocalStorage, THEME_CONFIG).get());

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MOUNT_ID))
            .expect("missing #app mount point"),
    )
    .render();

    info!("landing page mounted");
}
