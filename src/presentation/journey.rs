use leptos::*;

use super::story_section::StorySection;
use crate::domain::career::STORIES;

/// 🧭 All story sections, each anchored by its `story-<year>` id
#[component]
pub fn Journey() -> impl IntoView {
    view! {
        <section id="journey" class="journey">
            <div class="journey-head">
                <h2>"The Journey"</h2>
                <p>"Every candle on the chart opens one of these moments."</p>
            </div>
            <div class="journey-stories">
                {STORIES
                    .iter()
                    .enumerate()
                    .map(|(index, story)| view! { <StorySection story=story index=index/> })
                    .collect_view()}
            </div>
        </section>
    }
}
