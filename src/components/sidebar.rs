use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"MacroLingo"</h1>
                <p class="sidebar-subtitle">"Meal macros & styled translation"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Image Analysis"</a>
                </li>
                <li class="nav-item">
                    <a href="/translate" class="nav-link">"Translator"</a>
                </li>
            </ul>
        </nav>
    }
}
