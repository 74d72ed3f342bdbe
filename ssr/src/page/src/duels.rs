use component::duel_list::{api::HttpDuelsProvider, DuelList};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{hooks::use_params, params::Params};

#[derive(Params, PartialEq, Clone)]
struct DuelsParams {
    name: Option<String>,
}

/// Duel history for the summoner named in the route. Consumes the list's
/// selection notifications into the page header.
#[component]
pub fn DuelsPage() -> impl IntoView {
    let params = use_params::<DuelsParams>();
    let summoner =
        move || params.get().ok().and_then(|p| p.name).unwrap_or_default();

    let (selected_id, set_selected_id) = signal(None::<u64>);
    let on_selected = Callback::new(move |id: u64| {
        log::info!("duel {id} selected");
        set_selected_id.set(Some(id));
    });

    view! {
        <Title text=move || format!("{} - {}", summoner(), consts::APP_TITLE) />
        <div class="min-h-screen bg-black text-white">
            <div class="flex items-center justify-between px-4 py-3 border-b border-neutral-800 max-w-2xl mx-auto">
                <span class="text-xl font-bold">{summoner}</span>
                {move || {
                    selected_id
                        .get()
                        .map(|id| {
                            view! {
                                <span class="text-sm text-neutral-400">
                                    {format!("duel #{id}")}
                                </span>
                            }
                        })
                }}
            </div>
            {move || {
                // a new summoner means a fresh view instance with its own load
                let name = summoner();
                view! {
                    <DuelList
                        provider=HttpDuelsProvider
                        summoner=name
                        on_selected=on_selected
                    />
                }
            }}
        </div>
    }
}
