pub mod api;
pub mod row;
pub mod selection;
pub mod types;

use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};
use web_sys::KeyboardEvent;

use self::api::DuelsProvider;
use self::row::DuelRow;
use self::selection::Selection;
use self::types::Duel;

use crate::spinner::Spinner;

/// Duel history for one summoner: loads once, then renders the records as
/// a single-selection list navigable by mouse and arrow keys. Every
/// selection change reports the picked record's id through `on_selected`.
#[component]
pub fn DuelList<Prov: DuelsProvider>(
    provider: Prov,
    summoner: String,
    #[prop(into)] on_selected: Callback<u64>,
) -> impl IntoView {
    let summoner = StoredValue::new(summoner);
    let duels_res = LocalResource::new(move || {
        let provider = provider.clone();
        async move { provider.duels(&summoner.get_value()).await }
    });

    view! {
        <Suspense fallback=move || {
            view! {
                <div class="flex justify-center py-12">
                    <Spinner />
                </div>
            }
        }>
            {move || {
                duels_res
                    .get()
                    .map(|res| match res {
                        Ok(duels) => {
                            view! {
                                <LoadedDuelList
                                    duels=duels
                                    summoner=summoner.get_value()
                                    on_selected=on_selected
                                />
                            }
                                .into_any()
                        }
                        Err(e) => {
                            log::warn!("duel history load failed: {e}");
                            view! {
                                <div class="py-8 text-center text-neutral-400">
                                    "Could not load duel history"
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

/// The interactive part of the list. Only mounted after a successful load,
/// so the click and key handlers exist exactly when the data does.
#[component]
fn LoadedDuelList(
    duels: Vec<Duel>,
    summoner: String,
    #[prop(into)] on_selected: Callback<u64>,
) -> impl IntoView {
    let len = duels.len();
    if len == 0 {
        return view! { <div class="py-8 text-center text-neutral-400">"No duels yet"</div> }
            .into_any();
    }

    let ids = StoredValue::new(duels.iter().map(|d| d.id).collect::<Vec<_>>());
    let selection = RwSignal::new(Selection::default());
    let notify = move |picked: Option<usize>| {
        if let Some(idx) = picked {
            on_selected.run(ids.with_value(|ids| ids[idx]));
        }
    };

    // The document-level listener lives inside the loaded subtree:
    // registered once per instance, never before data arrives, and
    // leptos-use removes it again when the view is cleaned up.
    _ = use_event_listener(use_document(), ev::keyup, move |ev: KeyboardEvent| {
        let picked = match ev.key().as_str() {
            "ArrowDown" => selection.try_update(|s| s.next(len)).flatten(),
            "ArrowUp" => selection.try_update(|s| s.prev(len)).flatten(),
            _ => return,
        };
        notify(picked);
    });

    view! {
        <ul class="duels w-full max-w-2xl mx-auto">
            {duels
                .into_iter()
                .enumerate()
                .map(|(i, duel)| {
                    let selected = Signal::derive(move || {
                        selection.get().current() == Some(i)
                    });
                    view! {
                        <DuelRow
                            duel=duel
                            summoner=summoner.clone()
                            selected=selected
                            on_pick=move || {
                                notify(selection.try_update(|s| s.select(i, len)).flatten())
                            }
                        />
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::selection::Selection;
    use super::types::{Duel, WinnerSide};

    fn history() -> Vec<Duel> {
        vec![
            Duel {
                id: 1,
                winner: WinnerSide::Creator,
                creator: "A".into(),
                target: "B".into(),
            },
            Duel {
                id: 2,
                winner: WinnerSide::Target,
                creator: "A".into(),
                target: "C".into(),
            },
        ]
    }

    #[test]
    fn cup_only_when_the_local_summoner_won() {
        let duels = history();
        assert!(duels[0].won_by("A"));
        assert!(!duels[1].won_by("A"));
    }

    #[test]
    fn arrow_down_from_the_first_duel_reports_the_second() {
        let duels = history();
        let mut sel = Selection::default();

        sel.select(0, duels.len());
        let picked = sel.next(duels.len()).map(|i| duels[i].id);
        assert_eq!(picked, Some(2));

        // already at the last entry: neither moves nor reports
        assert_eq!(sel.next(duels.len()), None);
        assert_eq!(sel.current(), Some(1));
    }
}
