//! Home page — greeting and featured songs.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::SongCard;
use crate::routes;
use crate::session::SessionState;

const PLACEHOLDER_COVER: &str = "/assets/cover-placeholder.svg";

/// A static entry in the featured grid.
struct SongTile {
    title: &'static str,
    artist: &'static str,
    cover: &'static str,
}

const FEATURED: &[SongTile] = &[
    SongTile {
        title: "Blue in Green",
        artist: "Miles Davis",
        cover: PLACEHOLDER_COVER,
    },
    SongTile {
        title: "Clair de Lune",
        artist: "Claude Debussy",
        cover: PLACEHOLDER_COVER,
    },
    SongTile {
        title: "Teardrop",
        artist: "Massive Attack",
        cover: PLACEHOLDER_COVER,
    },
    SongTile {
        title: "Hyperballad",
        artist: "Björk",
        cover: PLACEHOLDER_COVER,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionState>();

    let header = move || match session.session.get() {
        Some(s) => view! {
            <div class="home-header">
                <h1>"Welcome back, " {s.username}</h1>
                <button class="btn btn-ghost btn-sm" on:click=move |_| session.log_out()>
                    "Sign out"
                </button>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="home-header">
                <h1>"Sonata"</h1>
                <div class="home-actions">
                    <A href=routes::SIGN_IN attr:class="btn btn-ghost btn-sm">"Sign in"</A>
                    <A href=routes::SIGN_UP attr:class="btn btn-primary btn-sm">"Sign up"</A>
                </div>
            </div>
        }
        .into_any(),
    };

    let cards = FEATURED
        .iter()
        .map(|song| {
            view! { <SongCard src=song.cover title=song.title subtitle=song.artist /> }
        })
        .collect_view();

    view! {
        <div class="home">
            {header}
            <h2 class="section-title">"Featured"</h2>
            <div class="song-grid">{cards}</div>
        </div>
    }
}
