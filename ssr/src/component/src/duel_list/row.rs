use leptos::prelude::*;

use super::types::Duel;

/// One entry of the duel list: a cup badge when the local summoner won,
/// then both participants in creator-vs-target order.
#[component]
pub fn DuelRow(
    duel: Duel,
    summoner: String,
    #[prop(into)] selected: Signal<bool>,
    on_pick: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let won = duel.won_by(&summoner);

    view! {
        <li
            class="duel flex items-center gap-4 px-4 py-3 border-b border-neutral-800 cursor-pointer hover:bg-white/5 transition-colors"
            class:selected=selected
            class=("bg-pink-500/20", selected)
            on:click=move |_| on_pick()
        >
            <div class="cup w-5 h-5 text-yellow-500">
                {won
                    .then(|| {
                        view! {
                            <svg class="w-5 h-5" viewBox="0 0 24 24" fill="currentColor">
                                <path d="M5 3h14v2h3v4a5 5 0 0 1-5 5h-.35A7 7 0 0 1 13 17.92V20h4v2H7v-2h4v-2.08A7 7 0 0 1 7.35 14H7a5 5 0 0 1-5-5V5h3V3zm14 4v5a3 3 0 0 0 3-3V7h-3zM5 7H2v2a3 3 0 0 0 3 3V7z" />
                            </svg>
                        }
                    })}
            </div>
            <figure class="summoner creator flex items-center gap-2">
                <figcaption class="text-white font-medium">{duel.creator}</figcaption>
            </figure>
            <span class="vs text-xs uppercase text-neutral-400">"vs"</span>
            <figure class="summoner target flex items-center gap-2">
                <figcaption class="text-white font-medium">{duel.target}</figcaption>
            </figure>
        </li>
    }
}
