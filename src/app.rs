use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::pages::image_analysis::ImageAnalysisPage;
use crate::pages::translator::TranslatorPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=ImageAnalysisPage />
                        <Route path=path!("/translate") view=TranslatorPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
