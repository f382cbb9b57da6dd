use leptos::prelude::*;

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <span>"Atelier · carpets, shawls and care"</span>
        </footer>
    }
}
