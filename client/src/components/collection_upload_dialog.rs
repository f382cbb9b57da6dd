//! Modal form for adding a collection item or service.

#[cfg(all(test, feature = "ssr"))]
#[path = "collection_upload_dialog_test.rs"]
mod collection_upload_dialog_test;

use leptos::prelude::*;

use crate::state::content::StockStatus;
use crate::state::dialog::{DialogKind, submit};

const KIND: DialogKind = DialogKind::Collection;

/// Upload form for carpets, shawls and services.
///
/// Submitting logs the attempt and asks the owner to close the dialog;
/// nothing is stored. Cancel, Escape and a backdrop click close it too.
#[component]
pub fn CollectionUploadDialog(
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
                                <label class="dialog__label" for="collection-title">
                                    "Title"
                                </label>
                                <input class="dialog__input" id="collection-title" type="text" placeholder="New Modern Carpet"/>
                                <label class="dialog__label" for="collection-ref-number">
                                    "Ref. Number"
                                </label>
                                <input class="dialog__input" id="collection-ref-number" type="text" placeholder="MC-103"/>
                                <label class="dialog__label" for="collection-material">
                                    "Material"
                                </label>
                                <input class="dialog__input" id="collection-material" type="text" placeholder="Wool"/>
                                <label class="dialog__label" for="collection-price-text">
                                    "Price"
                                </label>
                                <input class="dialog__input" id="collection-price-text" type="text" placeholder="2111"/>
                                <label class="dialog__label" for="collection-colour">
                                    "Colour"
                                </label>
                                <input class="dialog__input" id="collection-colour" type="text" placeholder="Red"/>
                            </div>
                            <div class="dialog__column">
                                <label class="dialog__label" for="collection-size-feet">
                                    "Size (Feet)"
                                </label>
                                <input class="dialog__input" id="collection-size-feet" type="text" placeholder="5 x 8"/>
                                <label class="dialog__label" for="collection-size-cms">
                                    "Size (cm)"
                                </label>
                                <input class="dialog__input" id="collection-size-cms" type="text" placeholder="152 x 244"/>
                                <label class="dialog__label" for="collection-stock-status">
                                    "Stock Status"
                                </label>
                                <select class="dialog__select" id="collection-stock-status">
                                    <option value="" disabled=true selected=true>
                                        "Select status..."
                                    </option>
                                    {StockStatus::ALL
                                        .iter()
                                        .map(|status| view! { <option value=status.value()>{status.label()}</option> })
                                        .collect_view()}
                                </select>
                                <label class="dialog__label" for="collection-images">
                                    "Images"
                                </label>
                                <input class="dialog__input" id="collection-images" type="file" multiple=true/>
                            </div>
                            <div class="dialog__column dialog__column--full">
                                <label class="dialog__label" for="collection-description">
                                    "Description"
                                </label>
                                <textarea
                                    class="dialog__textarea"
                                    id="collection-description"
                                    rows="4"
                                    placeholder="Hi, this is first work..."
                                ></textarea>
                            </div>
                        </div>
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
