use maud::{html, Markup};

use super::components::{
    artist_line, cover_url, genre_category_href, genre_tags, page_links, show_grid,
};
use super::layout::base_layout;
use super::rich_text::render_rich_text;
use crate::loaders::{RadioPage, RadioPageSingle};
use crate::models::{Page, Show};
use crate::utils::format_show_date;

pub fn radio_page(page: &RadioPage, preview: bool) -> Markup {
    base_layout(
        "Radio",
        preview,
        html! {
            @if !page.featured_shows.is_empty() {
                section class="bg-black text-white py-12" {
                    div class="container mx-auto px-4" {
                        h2 class="font-heading text-4xl mb-8 uppercase" { "Featured" }
                        (show_grid(&page.featured_shows, ""))
                    }
                }
            }

            section class="container mx-auto px-4 py-12" {
                h2 class="font-heading text-4xl mb-8 uppercase" { "Upcoming" }
                (show_grid(&page.upcoming_shows, "No upcoming shows scheduled."))
            }

            @if !page.genres.is_empty() {
                section class="container mx-auto px-4 pb-12" {
                    h2 class="font-heading text-2xl mb-4 uppercase" { "Browse by genre" }
                    ul class="flex flex-wrap gap-2" {
                        @for category in &page.genres {
                            li {
                                a href=(genre_category_href(&category.name))
                                  class="border-2 border-black rounded-full px-4 py-1 hover:bg-black hover:text-white" {
                                    (category.name)
                                }
                            }
                        }
                    }
                }
            }

            section class="container mx-auto px-4" {
                h2 class="font-heading text-4xl mb-8 uppercase" { "All Shows" }
                (show_grid(&page.past_shows, "No past shows yet."))
            }
        },
    )
}

pub fn show_page(data: &RadioPageSingle, preview: bool) -> Markup {
    let show = &data.show;

    base_layout(
        &show.title,
        preview,
        html! {
            article class="container mx-auto px-4 py-12" {
                div class="grid grid-cols-1 md:grid-cols-2 gap-12" {
                    img
                        src=(cover_url(show.cover_image.as_ref(), 1200))
                        alt=(show.cover_image.as_ref().and_then(|c| c.description.as_deref()).unwrap_or(&show.title))
                        class="w-full border-2 border-black";

                    div {
                        p class="uppercase text-sm" { (format_show_date(show.date)) }
                        h1 class="font-heading text-5xl md:text-6xl mb-4" { (show.title) }
                        (artist_line(show.artists()))
                        (genre_tags(show.genres()))

                        @if let Some(link) = &show.mixcloud_link {
                            a href=(link) target="_blank" rel="noopener noreferrer"
                              class="inline-block mt-6 border-2 border-black px-6 py-2 uppercase" {
                                "Listen on Mixcloud"
                            }
                        }

                        @if let Some(content) = &show.content {
                            section class="rich-text mt-8" {
                                (render_rich_text(content))
                            }
                        }
                    }
                }
            }

            @if !data.related_shows.is_empty() {
                section class="container mx-auto px-4" {
                    h2 class="font-heading text-4xl mb-8 uppercase" { "Related Shows" }
                    (show_grid(&data.related_shows, ""))
                }
            }
        },
    )
}

pub fn genre_category_page(
    category: &str,
    shows: &[Show],
    page: u32,
    has_next: bool,
    preview: bool,
) -> Markup {
    base_layout(
        category,
        preview,
        html! {
            section class="container mx-auto px-4 py-12" {
                a href="/radio" class="text-sm uppercase hover:underline" { "← All shows" }
                h1 class="font-heading text-5xl mt-4 mb-8" { (category) }
                (show_grid(shows, "No shows in this genre yet."))
                (page_links(&genre_category_href(category), page, has_next))
            }
        },
    )
}

pub fn about_page(page: &Page, preview: bool) -> Markup {
    base_layout(
        &page.title,
        preview,
        html! {
            @if let Some(cover) = &page.cover_image {
                div class="w-full h-96 bg-cover bg-center"
                    style=(format!("background-image: url('{}')", cover_url(Some(cover), 2000)))
                    role="img"
                    aria-label="View" {}
            }

            div class="bg-red-600 text-white py-12 mb-12" {
                div class="container max-w-4xl mx-auto px-4" {
                    h1 class="mt-6 md:mt-0 text-5xl md:text-6xl lg:text-7xl mb-4 font-heading" {
                        (page.title)
                    }
                    @if let Some(subtitle) = &page.subtitle {
                        h2 class="font-serif text-4xl lg:text-6xl" { (subtitle) }
                    }
                }
            }

            @if let Some(content) = &page.content {
                section class="container max-w-4xl mx-auto px-4 rich-text mb-24" {
                    (render_rich_text(content))
                }
            }
        },
    )
}
