use maud::{html, Markup};

use crate::models::{Artist, Asset, Genre, Show};
use crate::utils::format_show_date;

const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/600x600/000000/ffffff?text=Radio";

/// Resized cover URL through the CMS image API
pub fn cover_url(asset: Option<&Asset>, size: u32) -> String {
    match asset {
        Some(asset) if !asset.url.is_empty() => {
            format!("{}?w={size}&h={size}&fit=fill&fm=webp", asset.url)
        }
        _ => PLACEHOLDER_COVER.to_string(),
    }
}

pub fn show_href(show: &Show) -> String {
    format!("/radio/{}", urlencoding::encode(&show.slug))
}

pub fn genre_category_href(name: &str) -> String {
    format!("/radio/genres/{}", urlencoding::encode(name))
}

pub fn show_card(show: &Show) -> Markup {
    html! {
        a href=(show_href(show)) class="show-card block" {
            div class="relative aspect-square overflow-hidden border-2 border-black" {
                img
                    src=(cover_url(show.cover_image.as_ref(), 600))
                    alt=(show.title)
                    class="w-full h-full object-cover transition-transform"
                    loading="lazy";

                @if show.is_featured {
                    span class="absolute top-2 left-2 bg-black text-white text-xs uppercase px-2 py-1" {
                        "Featured"
                    }
                }
            }

            div class="mt-3" {
                p class="text-xs uppercase" { (format_show_date(show.date)) }
                h3 class="font-heading text-lg leading-tight" { (show.title) }
                (artist_line(show.artists()))
                (genre_tags(show.genres()))
            }
        }
    }
}

pub fn show_grid(shows: &[Show], empty_message: &str) -> Markup {
    html! {
        @if shows.is_empty() {
            p class="text-gray-600 py-8" { (empty_message) }
        } @else {
            div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                @for show in shows {
                    (show_card(show))
                }
            }
        }
    }
}

pub fn artist_line(artists: &[Artist]) -> Markup {
    html! {
        @if !artists.is_empty() {
            p class="text-sm" {
                @for (i, artist) in artists.iter().filter(|artist| !artist.name.is_empty()).enumerate() {
                    @if i > 0 { ", " }
                    (artist.name)
                    @if let Some(city) = &artist.city {
                        " (" (city.name) ")"
                    }
                }
            }
        }
    }
}

pub fn genre_tags(genres: &[Genre]) -> Markup {
    html! {
        @if !genres.is_empty() {
            ul class="flex flex-wrap gap-1 mt-2" {
                @for genre in genres.iter().filter(|genre| !genre.name.is_empty()) {
                    li class="border border-black rounded-full px-2 text-xs" {
                        @if let Some(category) = &genre.genre_category {
                            a href=(genre_category_href(&category.name)) { (genre.name) }
                        } @else {
                            (genre.name)
                        }
                    }
                }
            }
        }
    }
}

/// Previous/next links for the genre category listing
pub fn page_links(base_url: &str, page: u32, has_next: bool) -> Markup {
    html! {
        div class="flex justify-center items-center space-x-4 mt-12" {
            @if page > 1 {
                a href=(format!("{}?page={}", base_url, page - 1)) class="border-2 border-black px-4 py-2" {
                    "Previous"
                }
            }
            span class="px-4 py-2" { "Page " (page) }
            @if has_next {
                a href=(format!("{}?page={}", base_url, page + 1)) class="border-2 border-black px-4 py-2" {
                    "Next"
                }
            }
        }
    }
}
