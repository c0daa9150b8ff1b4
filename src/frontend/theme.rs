use yew::prelude::*;

use super::dom::{apply_theme, apply_theme_with_transition, LocalStorage};
use crate::site::theme::{Theme, ThemeConfig, ThemeStore};

pub const THEME_CONFIG: ThemeConfig = ThemeConfig {
    default: Theme::Light,
    switchable: true,
};

/// Theme state handed to every consumer; `toggle` is the only way to change it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub switchable: bool,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub config: ThemeConfig,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let config = props.config;
    let store = use_mut_ref(|| ThemeStore::load(LocalStorage, config));
    let theme = use_state_eq(|| store.borrow().get());
    let switchable = store.borrow().switchable();

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        use_callback((), move |_: (), _| {
            let next = store.borrow_mut().toggle();
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        switchable,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let Some(context) = use_context::<ThemeContext>() else {
        return Html::default();
    };

    if !context.switchable {
        return Html::default();
    }

    let onclick = context.toggle.reform(|_: MouseEvent| ());

    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={context.theme.toggle_label()}
            aria-pressed={context.theme.is_dark().to_string()}
            onclick={onclick}
        >
            <span aria-hidden="true">{context.theme.icon()}</span>
        </button>
    }
}
