use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use page::{duels::DuelsPage, root::RootPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/go1v1-leptos-ssr.css" />
        <Title text=consts::APP_TITLE />
        <Router>
            <main>
                <Routes fallback=|| {
                    view! { <div class="p-4 text-white">"Not found"</div> }
                }>
                    <Route path=path!("/") view=RootPage />
                    <Route path=path!("/duels/:name") view=DuelsPage />
                </Routes>
            </main>
        </Router>
    }
}
