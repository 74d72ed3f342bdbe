use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Landing page: type a summoner name, jump to their duel history.
#[component]
pub fn RootPage() -> impl IntoView {
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());

    let go = move || {
        let name = name.get();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        navigate(&format!("/duels/{name}"), Default::default());
    };

    view! {
        <div class="min-h-screen bg-black text-white grid place-content-center gap-6">
            <h1 class="text-4xl font-bold text-center">{consts::APP_TITLE}</h1>
            <form
                class="flex gap-2"
                on:submit=move |ev| {
                    ev.prevent_default();
                    go();
                }
            >
                <input
                    type="text"
                    class="bg-neutral-900 border border-neutral-700 rounded px-3 py-2 text-white placeholder:text-neutral-500"
                    placeholder="Summoner name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button type="submit" class="bg-pink-500 rounded px-4 py-2 font-medium">
                    "Search"
                </button>
            </form>
        </div>
    }
}
