use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, preview: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Radio" }

                // Compiled TailwindCSS
                link rel="stylesheet" href="/static/css/output.css";

                style {
                    r#"
                    .show-card:hover img {
                        transform: scale(1.03);
                    }
                    "#
                }
            }
            body class="h-full bg-white text-black" {
                div class="min-h-full flex flex-col" {
                    @if preview {
                        (preview_banner())
                    }

                    (nav_bar())

                    main class="flex-grow" {
                        (content)
                    }

                    (footer())
                }
            }
        }
    }
}

fn preview_banner() -> Markup {
    html! {
        div class="bg-orange-500 text-white text-center text-sm py-2" {
            "Preview mode: showing draft content"
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav class="border-b-2 border-black" {
            div class="container mx-auto px-4" {
                div class="flex justify-between items-center h-16" {
                    a href="/radio" class="text-2xl font-heading uppercase" { "Radio" }

                    div class="flex space-x-6" {
                        a href="/radio" class="uppercase text-sm hover:underline" { "Shows" }
                        a href="/about" class="uppercase text-sm hover:underline" { "About" }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="border-t-2 border-black mt-24" {
            div class="container mx-auto px-4 py-6 text-center text-sm" {
                "Independent radio, broadcast live and archived on Mixcloud"
            }
        }
    }
}
