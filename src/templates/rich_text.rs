use maud::{html, Markup};
use serde_json::Value;

use crate::models::{Asset, RichText, RichTextNode};

/// Render a rich text document, resolving embedded block assets from its
/// links
pub fn render_rich_text(content: &RichText) -> Markup {
    render_node(&content.json, content)
}

fn render_node(node: &RichTextNode, document: &RichText) -> Markup {
    let children = html! {
        @for child in &node.content {
            (render_node(child, document))
        }
    };

    match node.node_type.as_str() {
        "text" => render_text(node),
        "paragraph" => html! { p { (children) } },
        "heading-1" => html! { h1 { (children) } },
        "heading-2" => html! { h2 { (children) } },
        "heading-3" => html! { h3 { (children) } },
        "heading-4" => html! { h4 { (children) } },
        "heading-5" => html! { h5 { (children) } },
        "heading-6" => html! { h6 { (children) } },
        "unordered-list" => html! { ul { (children) } },
        "ordered-list" => html! { ol { (children) } },
        "list-item" => html! { li { (children) } },
        "blockquote" => html! { blockquote { (children) } },
        "hr" => html! { hr; },
        "hyperlink" => {
            let uri = node.data.get("uri").and_then(Value::as_str).unwrap_or("#");
            html! {
                a href=(uri) target="_blank" rel="noopener noreferrer" { (children) }
            }
        }
        "embedded-asset-block" => {
            let asset = node
                .data
                .pointer("/target/sys/id")
                .and_then(Value::as_str)
                .and_then(|id| document.block_asset(id));

            match asset {
                Some(asset) if !asset.url.is_empty() => embedded_asset(asset),
                Some(asset) => {
                    tracing::warn!(id = %asset.sys.id, "Skipping embedded asset without a url");
                    html! {}
                }
                None => {
                    tracing::warn!("Rich text references an unresolved asset");
                    html! {}
                }
            }
        }
        // document, table cells and anything newer: just the children
        _ => children,
    }
}

fn render_text(node: &RichTextNode) -> Markup {
    let value = node.value.as_deref().unwrap_or_default();

    let mut markup = html! {
        @for (i, line) in value.split('\n').enumerate() {
            @if i > 0 { br; }
            (line)
        }
    };

    for mark in &node.marks {
        markup = match mark.mark_type.as_str() {
            "bold" => html! { strong { (markup) } },
            "italic" => html! { em { (markup) } },
            "underline" => html! { u { (markup) } },
            "code" => html! { code { (markup) } },
            _ => markup,
        };
    }

    markup
}

fn embedded_asset(asset: &Asset) -> Markup {
    let is_image = asset
        .content_type
        .as_deref()
        .map_or(true, |content_type| content_type.starts_with("image/"));
    let title = asset.title.as_deref().unwrap_or_default();

    if !is_image {
        return html! {
            p { a href=(asset.url) target="_blank" rel="noopener noreferrer" { (title) } }
        };
    }

    html! {
        figure class="my-8" {
            img
                src=(asset.url)
                alt=(asset.description.as_deref().unwrap_or(title))
                width=[asset.width]
                height=[asset.height]
                loading="lazy";
            @if let Some(description) = &asset.description {
                figcaption class="text-sm mt-2" { (description) }
            }
        }
    }
}
