//! Song card — cover art with a play affordance revealed on hover.
//!
//! Hover behavior lives entirely in `style/main.css` (`.song-card:hover`,
//! `.song-play:hover`); the component holds no state.

use leptos::prelude::*;

/// Heroicons solid `play-circle`.
const PLAY_CIRCLE_PATH: &str = "M2.25 12c0-5.385 4.365-9.75 9.75-9.75s9.75 4.365 9.75 9.75-4.365 9.75-9.75 9.75S2.25 17.385 2.25 12Zm14.024-.983a1.125 1.125 0 0 1 0 1.966l-5.603 3.113A1.125 1.125 0 0 1 9 15.113V8.887c0-.857.921-1.4 1.671-.983l5.603 3.113Z";

#[component]
pub fn SongCard(
    /// Cover image URL.
    #[prop(into)]
    src: String,
    /// Caption under the cover; also used as the image's alt text.
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let alt = title.clone().unwrap_or_default();

    view! {
        <div class="song-card">
            <div class="song-cover">
                <img class="song-image" src=src alt=alt loading="lazy" />
                <svg
                    class="song-play"
                    viewBox="0 0 24 24"
                    fill="currentColor"
                    aria-hidden="true"
                >
                    <path fill-rule="evenodd" clip-rule="evenodd" d=PLAY_CIRCLE_PATH />
                </svg>
            </div>
            {title.map(|t| view! { <div class="song-title">{t}</div> })}
            {subtitle.map(|s| view! { <div class="song-subtitle">{s}</div> })}
        </div>
    }
}
