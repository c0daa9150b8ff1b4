use gloo_timers::callback::Interval;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use super::dom::{scroll_offset, ScrollSubscription, VisibilitySubscription};
use crate::site::{
    counter::{Counter, COUNTER_TICK_MS},
    scroll::{HeaderStyle, Reveal},
};

#[hook]
pub fn use_header_style() -> HeaderStyle {
    let style = use_state_eq(|| HeaderStyle::from_offset(scroll_offset()));

    {
        let style = style.clone();
        use_effect_with((), move |_| {
            let subscription =
                ScrollSubscription::attach(move |offset| style.set(HeaderStyle::from_offset(offset)));
            move || drop(subscription)
        });
    }

    *style
}

/// Fire-once visibility of the element behind `node`. Browsers without
/// `IntersectionObserver` reveal immediately.
#[hook]
pub fn use_reveal(node: NodeRef) -> Reveal {
    let reveal = use_state_eq(Reveal::default);

    {
        let reveal = reveal.clone();
        use_effect_with(node, move |node| {
            let subscription = node.cast::<Element>().and_then(|element| {
                let reveal = reveal.clone();
                VisibilitySubscription::observe_once(&element, move || reveal.set(Reveal::Seen))
            });

            if subscription.is_none() {
                reveal.set(Reveal::Seen);
            }

            move || drop(subscription)
        });
    }

    *reveal
}

#[derive(PartialEq)]
struct CounterState(Counter);

enum CounterAction {
    Start,
    Tick,
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CounterAction::Start => self.0.start(),
            CounterAction::Tick => self.0.tick(),
        };

        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

/// Counts up to `target` once `visible` turns true. The interval only exists
/// while the counter is running.
#[hook]
pub fn use_counter(target: u32, visible: bool) -> u32 {
    let counter = use_reducer_eq(|| CounterState(Counter::new(target)));

    {
        let dispatcher = counter.dispatcher();
        use_effect_with(visible, move |visible| {
            if *visible {
                dispatcher.dispatch(CounterAction::Start);
            }
            || ()
        });
    }

    {
        let dispatcher = counter.dispatcher();
        use_effect_with(counter.0.is_running(), move |running| {
            let interval = running.then(|| {
                Interval::new(COUNTER_TICK_MS, move || {
                    dispatcher.dispatch(CounterAction::Tick)
                })
            });
            move || drop(interval)
        });
    }

    counter.0.value()
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!(reveal.class(), props.class.clone())}
            style={format!("--reveal-delay: {}ms;", props.delay_ms)}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u32,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone());
    let value = use_counter(props.target, reveal.is_seen());

    html! {
        <span ref={node}>{value}</span>
    }
}
