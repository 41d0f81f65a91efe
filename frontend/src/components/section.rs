use yew::prelude::*;

use crate::content::{Item, Section};

#[derive(Properties, PartialEq)]
pub struct SectionViewProps {
    pub section: Section,
    /// DOM id; defaults to the section's own id.
    #[prop_or_default]
    pub element_id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

fn item_view(item: &Item) -> Html {
    let title = match &item.link {
        Some(link) => html! {
            <a href={link.clone()} target="_blank" rel="noopener noreferrer">{&item.title}</a>
        },
        None => html! { {&item.title} },
    };

    html! {
        <li class="section-item">
            <h3>{title}</h3>
            <p>{&item.description}</p>
        </li>
    }
}

#[function_component(SectionView)]
pub fn section_view(props: &SectionViewProps) -> Html {
    let SectionViewProps { section, element_id, class } = props;
    let id = element_id
        .clone()
        .unwrap_or_else(|| AttrValue::from(section.id.clone()));

    html! {
        <section {id} class={classes!("page-section", class.clone())}>
            <h2>{&section.title}</h2>
            { for section.paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
            {
                if !section.items.is_empty() {
                    html! {
                        <ul class="section-items">
                            { for section.items.iter().map(item_view) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
