use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::site::contact::{Notice, NoticeKind};

const TOAST_DURATION_MS: u32 = 4_000;

/// Handle for raising transient notices from anywhere under the provider.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    pub push: Callback<Notice>,
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u32,
    notice: Notice,
}

#[derive(Default, PartialEq)]
struct ToastList {
    next_id: u32,
    toasts: Vec<Toast>,
}

enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_id = self.next_id;

        match action {
            ToastAction::Push(notice) => {
                toasts.push(Toast {
                    id: next_id,
                    notice,
                });
                next_id = next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }

        Rc::new(Self { next_id, toasts })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer_eq(ToastList::default);

    let push = use_callback(list.dispatcher(), |notice: Notice, dispatcher| {
        dispatcher.dispatch(ToastAction::Push(notice));
    });
    let dismiss = use_callback(list.dispatcher(), |id: u32, dispatcher| {
        dispatcher.dispatch(ToastAction::Dismiss(id));
    });

    html! {
        <ContextProvider<Toaster> context={Toaster { push }}>
            {props.children.clone()}
            <ol class="toaster" aria-live="polite">
                {for list.toasts.iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id}
                        id={toast.id}
                        notice={toast.notice.clone()}
                        on_dismiss={dismiss.clone()}
                    />
                })}
            </ol>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let kind = match props.notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Error => "toast-error",
    };
    let role = match props.notice.kind {
        NoticeKind::Success => "status",
        NoticeKind::Error => "alert",
    };
    let onclick = {
        let id = props.id;
        props.on_dismiss.reform(move |_: MouseEvent| id)
    };

    html! {
        <li class={classes!("toast", kind)} role={role}>
            <span>{props.notice.message}</span>
            <button type="button" class="toast-close" aria-label="Dismiss" onclick={onclick}>{"×"}</button>
        </li>
    }
}
