//! Modal form for writing a blog post.

use leptos::prelude::*;

use crate::state::content::PublishStatus;
use crate::state::dialog::{DialogKind, submit};

const KIND: DialogKind = DialogKind::Blog;

/// Blog post form. Same open/close contract as the collection dialog, but
/// its own field set.
#[component]
pub fn BlogUploadDialog(
    #[prop(into)] open: Signal<bool>,
    on_open_change: Callback<bool>,
    #[prop(into)] title: Signal<String>,
) -> impl IntoView {
    let close = move || on_open_change.run(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(KIND, &title.get_untracked(), on_open_change);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog dialog--wide"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <header class="dialog__header">
                        <h2 class="dialog__title">{move || title.get()}</h2>
                        <p class="dialog__description">{KIND.description()}</p>
                    </header>
                    <form class="dialog__form" on:submit=on_submit>
                        <div class="dialog__grid">
                            <div class="dialog__column">
                                <label class="dialog__label" for="blog-title">
                                    "Title"
                                </label>
                                <input class="dialog__input" id="blog-title" type="text" placeholder="The Art of Weaving..."/>
                                <label class="dialog__label" for="blog-slug">
                                    "Slug"
                                </label>
                                <input class="dialog__input" id="blog-slug" type="text" placeholder="the-art-of-weaving"/>
                                <label class="dialog__label" for="blog-category">
                                    "Category"
                                </label>
                                <input class="dialog__input" id="blog-category" type="text" placeholder="Craftsmanship"/>
                            </div>
                            <div class="dialog__column">
                                <label class="dialog__label" for="blog-featured-image-path">
                                    "Featured Image"
                                </label>
                                <input class="dialog__input" id="blog-featured-image-path" type="file"/>
                                <label class="dialog__label" for="blog-status">
                                    "Status"
                                </label>
                                <select class="dialog__select" id="blog-status">
                                    <option value="" disabled=true selected=true>
                                        "Select status..."
                                    </option>
                                    {PublishStatus::ALL
                                        .iter()
                                        .map(|status| view! { <option value=status.value()>{status.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>
                        <label class="dialog__label" for="blog-content">
                            "Content"
                        </label>
                        <textarea
                            class="dialog__textarea"
                            id="blog-content"
                            rows="10"
                            placeholder="Start writing your blog post here..."
                        ></textarea>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit">
                                {KIND.submit_label()}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
