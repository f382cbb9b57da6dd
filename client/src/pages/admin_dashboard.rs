//! Admin dashboard: greeting plus entry points for content management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after sign-in. Owns one `DialogState` per upload dialog;
//! opening one never touches the other.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::app::MANAGE_CONTENT_PATH;
use crate::components::blog_upload_dialog::BlogUploadDialog;
use crate::components::collection_upload_dialog::CollectionUploadDialog;
use crate::components::dashboard_card::DashboardCard;
use crate::components::page_footer::PageFooter;
use crate::components::page_header::PageHeader;
use crate::state::dialog::DialogState;
use crate::state::session::use_session;

pub const COLLECTION_DIALOG_TITLE: &str = "Add New Collection Item";
pub const BLOG_DIALOG_TITLE: &str = "Create New Blog Post";

/// Name shown in the welcome line.
pub fn greeting_name(user: Option<&str>) -> &str {
    user.filter(|u| !u.is_empty()).unwrap_or("Admin")
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();

    let collection_dialog = RwSignal::new(DialogState::default());
    let blog_dialog = RwSignal::new(DialogState::default());

    let greeting = move || {
        let user = session.current_user();
        greeting_name(user.as_deref()).to_owned()
    };

    view! {
        <div class="admin-page">
            <PageHeader session=session/>
            <main class="admin-page__main">
                <section class="admin-page__intro">
                    <h1 class="admin-page__title">
                        "Welcome, " <span class="admin-page__user">{greeting}</span> "!"
                    </h1>
                    <p class="admin-page__lead">"This is your central hub for managing the website's content."</p>
                </section>

                <div class="admin-page__cards">
                    <DashboardCard
                        icon="🖼"
                        heading="Manage Collections"
                        blurb="Add new items to your carpet and shawl collections."
                    >
                        <button
                            class="btn btn--primary"
                            on:click=move |_| collection_dialog.update(|d| d.open_with(COLLECTION_DIALOG_TITLE))
                        >
                            "⇪ Upload"
                        </button>
                    </DashboardCard>
                    <DashboardCard
                        icon="📝"
                        heading="Manage Blog Posts"
                        blurb="Create new posts to engage with your audience."
                    >
                        <button
                            class="btn btn--primary"
                            on:click=move |_| blog_dialog.update(|d| d.open_with(BLOG_DIALOG_TITLE))
                        >
                            "⇪ Upload Post"
                        </button>
                    </DashboardCard>
                    <DashboardCard
                        icon="☰"
                        heading="Manage Content"
                        blurb="Edit, update, or delete existing collections, blogs, and services."
                    >
                        <a class="btn btn--secondary" href=MANAGE_CONTENT_PATH>
                            "✎ Manage"
                        </a>
                    </DashboardCard>
                </div>
            </main>

            <CollectionUploadDialog
                open=Signal::derive(move || collection_dialog.with(|d| d.open))
                on_open_change=Callback::new(move |open| collection_dialog.update(|d| d.set_open(open)))
                title=Signal::derive(move || collection_dialog.with(|d| d.title.clone()))
            />
            <BlogUploadDialog
                open=Signal::derive(move || blog_dialog.with(|d| d.open))
                on_open_change=Callback::new(move |open| blog_dialog.update(|d| d.set_open(open)))
                title=Signal::derive(move || blog_dialog.with(|d| d.title.clone()))
            />

            <PageFooter/>
        </div>
    }
}
