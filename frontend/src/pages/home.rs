use log::error;
use yew::prelude::*;

use crate::components::section::SectionView;
use crate::config;
use crate::content::{ContentError, Section, SiteContent};
use crate::hooks::use_slide_in;
use crate::presentation::SectionVariant;

#[derive(Properties, PartialEq)]
struct SlideInSectionProps {
    section: Section,
}

/// The one section whose look follows the scroll position.
#[function_component(SlideInSection)]
fn slide_in_section(props: &SlideInSectionProps) -> Html {
    let visible = use_slide_in(config::SLIDE_IN_ELEMENT_ID);
    let variant = SectionVariant::from(visible);

    html! {
        <SectionView
            section={props.section.clone()}
            element_id={Some(AttrValue::Static(config::SLIDE_IN_ELEMENT_ID))}
            class={classes!(variant.class())}
        />
    }
}

fn nav_href(section: &Section) -> String {
    if section.slide_in {
        format!("#{}", config::SLIDE_IN_ELEMENT_ID)
    } else {
        format!("#{}", section.id)
    }
}

fn nav_links(sections: &[Section]) -> Html {
    html! {
        <nav class="top-nav">
            { for sections.iter().map(|section| {
                let href = nav_href(section);
                html! { <a class="nav-link" {href}>{&section.title}</a> }
            }) }
        </nav>
    }
}

fn render_page(content: &Result<SiteContent, ContentError>) -> Html {
    let content = match content {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to load site content: {}", e);
            return html! {
                <div class="error-panel">
                    <p>{"Something went wrong loading this page."}</p>
                </div>
            };
        }
    };

    html! {
        <div class="home-page">
            <header class="hero">
                <h1>{&content.owner}</h1>
                <p class="hero-subtitle">{&content.tagline}</p>
                {nav_links(&content.sections)}
            </header>
            { for content.sections.iter().map(|section| {
                if section.slide_in {
                    html! { <SlideInSection section={section.clone()} /> }
                } else {
                    html! { <SectionView section={section.clone()} /> }
                }
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());
    render_page(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[function_component(BrokenContent)]
    fn broken_content() -> Html {
        render_page(&SiteContent::from_json("{"))
    }

    async fn render<C>() -> String
    where
        C: BaseComponent,
        C::Properties: Default + Send,
    {
        ServerRenderer::<C>::new().hydratable(false).render().await
    }

    /// The `<...>` tag that carries `id="{id}"`.
    fn opening_tag<'a>(html: &'a str, id: &str) -> Option<&'a str> {
        let at = html.find(&format!("id=\"{}\"", id))?;
        let start = html[..at].rfind('<')?;
        let end = at + html[at..].find('>')?;
        Some(&html[start..=end])
    }

    fn section(id: &str, slide_in: bool) -> Section {
        Section {
            id: id.to_string(),
            title: id.to_uppercase(),
            paragraphs: Vec::new(),
            items: Vec::new(),
            slide_in,
        }
    }

    #[test]
    fn nav_points_slide_in_section_at_watched_element() {
        assert_eq!(nav_href(&section("projects", true)), "#slide-in-element");
        assert_eq!(nav_href(&section("about", false)), "#about");
    }

    #[tokio::test]
    async fn only_slide_in_section_gets_watched_id() {
        let html = render::<Home>().await;

        assert_eq!(html.matches("id=\"slide-in-element\"").count(), 1);
        let tag = opening_tag(&html, "slide-in-element").unwrap();
        assert!(tag.starts_with("<section"), "{}", tag);
        assert!(!html.contains("id=\"projects\""));
    }

    #[tokio::test]
    async fn slide_in_section_starts_pending() {
        let html = render::<Home>().await;

        let tag = opening_tag(&html, "slide-in-element").unwrap();
        assert!(tag.contains("slide-section"), "{}", tag);
        assert!(tag.contains("page-section"), "{}", tag);
        assert!(!tag.contains("slide-in\""), "{}", tag);
    }

    #[tokio::test]
    async fn other_sections_keep_their_ids() {
        let html = render::<Home>().await;

        for id in ["about", "contact"] {
            let tag = opening_tag(&html, id).unwrap();
            assert!(tag.starts_with("<section"), "{}", tag);
            assert!(!tag.contains("slide-section"), "{}", tag);
        }
    }

    #[tokio::test]
    async fn nav_and_item_links_render() {
        let html = render::<Home>().await;

        assert!(html.contains("href=\"#slide-in-element\""));
        assert!(html.contains("href=\"#about\""));
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("href=\"mailto:alex@lindqvist.dev\""));
    }

    #[tokio::test]
    async fn content_error_shows_error_panel() {
        let html = render::<BrokenContent>().await;

        assert!(html.contains("error-panel"));
        assert!(!html.contains("slide-in-element"));
    }
}
