use yew::prelude::*;

use super::motion::RevealOnScroll;
use crate::site::{
    catalog::{Project, PROJECTS},
    navigation::Section,
    portfolio::{ModalClick, Selection},
};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let selection = use_state_eq(Selection::default);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |project: &'static Project| selection.set(Selection::select(project)))
    };

    let on_modal_click = {
        let selection = selection.clone();
        Callback::from(move |target: ModalClick| selection.set((*selection).on_modal_click(target)))
    };

    html! {
        <section id={Section::Portfolio.id()} class="section portfolio">
            <div class="container">
                <RevealOnScroll class="section-heading">
                    <h2>{"Our "}<span class="gradient-text">{"Portfolio"}</span></h2>
                    <p>{"Showcase of our best work and successful client projects"}</p>
                </RevealOnScroll>

                <div class="card-grid">
                    {for PROJECTS.iter().enumerate().map(|(index, project)| {
                        let onclick = on_select.reform(move |_: MouseEvent| project);
                        html! {
                            <RevealOnScroll key={project.id} class="project-card" delay_ms={100 * index as u32}>
                                <button type="button" class="project-trigger" onclick={onclick}>
                                    <img src={project.image} alt={project.title} loading="lazy" />
                                    <span class="project-overlay">
                                        <span class="project-category">{project.category}</span>
                                        <span class="project-title">{project.title}</span>
                                        <span class="project-hint">{"Click to view details"}</span>
                                    </span>
                                </button>
                            </RevealOnScroll>
                        }
                    })}
                </div>
            </div>

            if let Some(project) = selection.selected() {
                <ProjectModal project={project} on_click={on_modal_click} />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: &'static Project,
    on_click: Callback<ModalClick>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;

    let on_backdrop = props.on_click.reform(|_: MouseEvent| ModalClick::Backdrop);
    let on_body = props.on_click.reform(|event: MouseEvent| {
        event.stop_propagation();
        ModalClick::Body
    });
    let on_close = props.on_click.reform(|event: MouseEvent| {
        event.stop_propagation();
        ModalClick::CloseButton
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                class="modal-card"
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-modal-title"
                onclick={on_body}
            >
                <button type="button" class="modal-close" aria-label="Close" onclick={on_close}>{"✕"}</button>
                <div class="modal-media">
                    <img src={project.image} alt={project.title} />
                </div>
                <div class="modal-body">
                    <div class="project-category">{project.category}</div>
                    <h3 id="project-modal-title">{project.title}</h3>
                    <p>{project.description}</p>
                    <button type="button" class="btn-primary">{"View Case Study"}</button>
                </div>
            </div>
        </div>
    }
}
