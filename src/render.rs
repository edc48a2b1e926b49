use crate::config::{CardConfig, SectionConfig};

/// Per-article values interpolated into a card
///
/// Values are inserted verbatim; nothing is escaped here. Text coming from
/// the extractor is already markup-safe.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub title: &'a str,
    pub excerpt: &'a str,
    pub image: &'a str,
    pub link: &'a str,
    pub date: &'a str,
}

/// Renders one card fragment
pub fn render_card(card: &Card<'_>, style: &CardConfig) -> String {
    let tags = style
        .tags
        .iter()
        .map(|tag| format!(r#"                        <span class="tag">{}</span>"#, tag))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
            <a href="{link}" class="blog-card">
                <div class="card-image-wrapper">
                    <img src="{image}" alt="{title}" class="card-image">
                </div>
                <div class="card-content">
                    <div class="tags-container">
{tags}
                    </div>
                    <h2 class="card-title">{title}</h2>
                    <p class="card-excerpt">
                        {excerpt}
                    </p>
                    <hr class="separator">
                    <div class="card-footer">
                        <span class="author-name">{author}</span>
                        <span class="divider">/</span>
                        <span>{date}</span>
                    </div>
                </div>
            </a>
    "#,
        link = card.link,
        image = card.image,
        title = card.title,
        excerpt = card.excerpt,
        tags = tags,
        author = style.author,
        date = card.date,
    )
}

/// Renders the listing section wrapping the concatenated cards
///
/// The wrapper carries the marker class so a later run finds it again.
pub fn render_section(cards: &str, section: &SectionConfig) -> String {
    format!(
        r#"
    <{element} class="{marker}" style="padding: 100px 10%; min-height: 80vh;">
        <div class="post-container" style="text-align: center; margin-bottom: 50px;">
            <h1 style="font-size: 3rem;">{heading}</h1>
            <p style="font-size: 1.2rem; color: var(--sub-text);">{subheading}</p>
        </div>

        <div class="container">
            <div class="blog-grid">
                {cards}
            </div>
        </div>
    </{element}>
    "#,
        element = section.element,
        marker = section.marker_class,
        heading = section.heading,
        subheading = section.subheading,
        cards = cards,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card<'a>() -> Card<'a> {
        Card {
            title: "My Title",
            excerpt: "Some excerpt",
            image: "thumbnails/article-1.png",
            link: "article-1.html",
            date: "Oct 2023",
        }
    }

    #[test]
    fn test_card_contains_all_fields() {
        let html = render_card(&sample_card(), &CardConfig::default());
        assert!(html.contains(r#"<a href="article-1.html" class="blog-card">"#));
        assert!(html.contains(r#"<img src="thumbnails/article-1.png" alt="My Title" class="card-image">"#));
        assert!(html.contains(r#"<h2 class="card-title">My Title</h2>"#));
        assert!(html.contains("Some excerpt"));
        assert!(html.contains(r#"<span class="author-name">Janiru Hansaga</span>"#));
        assert!(html.contains(r#"<span class="tag">Blog</span>"#));
        assert!(html.contains(r#"<span class="tag">Tech</span>"#));
        assert!(html.contains("<span>Oct 2023</span>"));
        assert!(html.contains(r#"<hr class="separator">"#));
    }

    #[test]
    fn test_card_accepts_empty_values() {
        let card = Card {
            title: "",
            excerpt: "",
            ..sample_card()
        };
        let html = render_card(&card, &CardConfig::default());
        assert!(html.contains(r#"<h2 class="card-title"></h2>"#));
        assert!(html.contains(r#"alt="""#));
    }

    #[test]
    fn test_card_is_not_escaped() {
        let card = Card {
            title: "A & B <i>C</i>",
            ..sample_card()
        };
        let html = render_card(&card, &CardConfig::default());
        assert!(html.contains(r#"<h2 class="card-title">A & B <i>C</i></h2>"#));
    }

    #[test]
    fn test_section_wraps_cards_with_marker() {
        let html = render_section("<!-- cards -->", &SectionConfig::default());
        assert!(html.contains(r#"<section class="post-section""#));
        assert!(html.contains("Latest Posts"));
        assert!(html.contains("Explore my latest thoughts and ideas."));
        assert!(html.contains("<!-- cards -->"));
        assert!(html.trim_end().ends_with("</section>"));
    }
}
