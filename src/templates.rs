use maud::{DOCTYPE, Markup, html};

use crate::models::Movie;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const HTMX_CDN: &str = "https://unpkg.com/htmx.org@2.0.4";

pub fn index_page(movies: &[Movie]) -> String {
    page(
        "Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Movies" }
                        p class="mt-2 text-gray-600" { "Search the collection by name." }

                        form class="mt-8 flex gap-3" hx-post="/movies" hx-target="#movies" {
                            input class="w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" type="search" name="name" id="name" placeholder="Movie name" hx-post="/movies" hx-trigger="input changed delay:300ms, search" hx-target="#movies";
                            button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                        }

                        div id="movies" class="mt-8" {
                            (movie_list(movies))
                        }
                    }
                }
            }
        },
    )
}

pub fn movies_fragment(movies: &[Movie]) -> String {
    movie_list(movies).into_string()
}

pub fn error_fragment(message: &str) -> String {
    html! {
        p class="text-red-700" { (message) }
    }
    .into_string()
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
                script src=(HTMX_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_list(movies: &[Movie]) -> Markup {
    html! {
        @if movies.is_empty() {
            p class="text-gray-500" { "No movies found." }
        } @else {
            ul class="divide-y divide-gray-200" {
                @for movie in movies {
                    (movie_item(movie))
                }
            }
        }
    }
}

fn movie_item(movie: &Movie) -> Markup {
    html! {
        li class="py-3" {
            p class="font-medium text-gray-900" { "Name: " (movie.name) }
            p class="text-sm text-gray-500" { "Format: " (movie.format) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(name: &str, format: &str) -> Movie {
        Movie { id: 1, name: name.to_string(), format: format.to_string() }
    }

    #[test]
    fn fragment_lists_name_and_format() {
        let html = movies_fragment(&[movie("Dune", "4k")]);
        assert!(html.contains("Name: Dune"));
        assert!(html.contains("Format: 4k"));
    }

    #[test]
    fn fragment_escapes_names() {
        let html = movies_fragment(&[movie("<b>Heat</b>", "hd")]);
        assert!(html.contains("&lt;b&gt;Heat&lt;/b&gt;"));
    }

    #[test]
    fn empty_fragment_says_so() {
        assert!(movies_fragment(&[]).contains("No movies found."));
    }

    #[test]
    fn index_page_embeds_the_list() {
        let html = index_page(&[movie("Arrival", "hd")]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="movies""#));
        assert!(html.contains("Name: Arrival"));
    }
}
