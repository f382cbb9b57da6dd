//! Tabbed listing of all site content.
//!
//! Rows come from the fixture lists in `state::content`. The edit and delete
//! buttons are placeholders with no handlers; there is no content backend.

use leptos::prelude::*;

use crate::components::page_footer::PageFooter;
use crate::components::page_header::PageHeader;
use crate::state::content::{BLOGS, BadgeTone, COLLECTIONS, SERVICES};
use crate::state::session::use_session;
use crate::state::ui::ManageTab;

#[component]
pub fn ManageContentPage() -> impl IntoView {
    let session = use_session();
    let active = RwSignal::new(ManageTab::default());

    view! {
        <div class="admin-page">
            <PageHeader session=session/>
            <main class="admin-page__main admin-page__main--wide">
                <h1 class="admin-page__title">"Manage All Content"</h1>
                <div class="tabs">
                    <div class="tabs__list" role="tablist">
                        {ManageTab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        type="button"
                                        role="tab"
                                        id=format!("tab-{}", tab.value())
                                        aria-selected=move || (active.get() == tab).to_string()
                                        class=move || {
                                            if active.get() == tab { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
                                        }
                                        on:click=move |_| active.set(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="tabs__panel" role="tabpanel">
                        {move || {
                            let tab = active.get();
                            view! {
                                <table class="content-table">
                                    <thead>
                                        <tr>
                                            {tab.columns().iter().map(|col| view! { <th>{*col}</th> }).collect_view()}
                                        </tr>
                                    </thead>
                                    <tbody>{rows(tab)}</tbody>
                                </table>
                            }
                        }}
                    </div>
                </div>
            </main>
            <PageFooter/>
        </div>
    }
}

fn rows(tab: ManageTab) -> AnyView {
    match tab {
        ManageTab::Collections => COLLECTIONS
            .iter()
            .map(|item| {
                view! {
                    <tr>
                        <td class="content-table__title">{item.title}</td>
                        <td>{item.kind}</td>
                        <td><StatusBadge label=item.status.label() tone=item.status.tone()/></td>
                        <RowActions title=item.title/>
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
        ManageTab::Blogs => BLOGS
            .iter()
            .map(|post| {
                view! {
                    <tr>
                        <td class="content-table__title">{post.title}</td>
                        <td>{post.category}</td>
                        <td><StatusBadge label=post.status.label() tone=post.status.tone()/></td>
                        <RowActions title=post.title/>
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
        ManageTab::Services => SERVICES
            .iter()
            .map(|service| {
                view! {
                    <tr>
                        <td class="content-table__title">{service.title}</td>
                        <td>{service.kind}</td>
                        <RowActions title=service.title/>
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
    }
}

#[component]
fn StatusBadge(label: &'static str, tone: BadgeTone) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}

/// Edit/delete affordances. Not wired to anything yet.
#[component]
fn RowActions(title: &'static str) -> impl IntoView {
    view! {
        <td class="content-table__actions">
            <button type="button" class="icon-btn icon-btn--edit" title=format!("Edit {title}")>
                "✎"
            </button>
            <button type="button" class="icon-btn icon-btn--delete" title=format!("Delete {title}")>
                "🗑"
            </button>
        </td>
    }
}
