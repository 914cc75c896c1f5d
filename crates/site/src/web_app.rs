use catalog_runtime::{
    CatalogProvider, GamesScreen, HomeScreen, MoviesScreen, NftsScreen, ProfileScreen,
    ScriptsScreen, SoftwareScreen,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Digital Hub" />
        <Meta name="description" content="Games, software, movies, and free NFTs in one mini-app." />

        <CatalogProvider host_services=build_host_services()>
            <Router>
                <main class="app">
                    <Routes>
                        <Route path="/" view=HomeScreen />
                        <Route path="/games" view=GamesScreen />
                        <Route path="/software" view=SoftwareScreen />
                        <Route path="/movies" view=MoviesScreen />
                        <Route path="/nfts" view=NftsScreen />
                        <Route path="/scripts" view=ScriptsScreen />
                        <Route path="/profile" view=ProfileScreen />
                    </Routes>
                </main>
            </Router>
        </CatalogProvider>
    }
}
