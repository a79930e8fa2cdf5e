//! Contacts Page Component
//!
//! Searchable contact table with add, edit and delete.

use leptos::prelude::*;

use crm_core::{contact_stats, search_contacts, Contact};

use crate::components::{ContactForm, DeleteConfirmButton, EditTarget, MetricCard};
use crate::context::use_app_context;
use crate::store::{store_remove_contact, use_app_store, AppStateStoreFields};

#[component]
fn ContactRow(contact: Contact, on_edit: Callback<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = contact.id;
    let initials: String = contact.name.split_whitespace().filter_map(|w| w.chars().next()).take(2).collect();

    view! {
        <tr>
            <td>
                <div class="contact-cell">
                    <span class="avatar">{initials}</span>
                    <div>
                        <div class="contact-name">{contact.name.clone()}</div>
                        <div class="muted">{contact.position.clone()}</div>
                    </div>
                </div>
            </td>
            <td>
                <div>{contact.email.clone()}</div>
                <div class="muted">{contact.phone.clone()}</div>
            </td>
            <td>{contact.company.clone()}</td>
            <td>
                <span class=format!("badge status-{}", contact.status.as_str())>{contact.status.label()}</span>
            </td>
            <td>{ctx.money(contact.deal_value)}</td>
            <td class="muted">{contact.last_contact.clone()}</td>
            <td class="row-actions">
                <button class="icon-btn" title="Edit" on:click=move |_| on_edit.run(id)>"✎"</button>
                <DeleteConfirmButton
                    button_class="icon-btn delete-btn"
                    on_confirm=Callback::new(move |_: ()| {
                        // failures are logged by the store helper
                        store_remove_contact(&store, id).ok();
                    })
                />
            </td>
        </tr>
    }
}

#[component]
pub fn ContactsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (term, set_term) = signal(String::new());
    let editing = RwSignal::new(None::<EditTarget>);

    let stats = Memo::new(move |_| store.contacts().with(|contacts| contact_stats(contacts.as_slice())));
    let visible = Memo::new(move |_| {
        let term = term.get();
        store
            .contacts()
            .with(|contacts| search_contacts(contacts.as_slice(), &term).into_iter().cloned().collect::<Vec<_>>())
    });

    let on_edit = Callback::new(move |id: u32| editing.set(Some(EditTarget::Existing(id))));
    let on_close = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page contacts-page">
            <div class="page-header">
                <div>
                    <h1>"Contacts"</h1>
                    <p class="page-subtitle">"Manage your customer relationships"</p>
                </div>
                <button class="primary-btn" on:click=move |_| editing.set(Some(EditTarget::New))>
                    "+ Add Contact"
                </button>
            </div>

            <div class="stat-row">
                <MetricCard
                    title="Total Contacts"
                    value=Signal::derive(move || stats.get().total.to_string())
                    icon="👥"
                />
                <MetricCard
                    title="Active Contacts"
                    value=Signal::derive(move || stats.get().active.to_string())
                    icon="✅"
                    tone="success"
                />
                <MetricCard
                    title="Pipeline Value"
                    value=Signal::derive(move || ctx.money(stats.get().pipeline_value))
                    icon="💰"
                    tone="warning"
                />
            </div>

            <div class="card">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search contacts..."
                    prop:value=move || term.get()
                    on:input=move |ev| set_term.set(event_target_value(&ev))
                />
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Contact"</th>
                            <th>"Email / Phone"</th>
                            <th>"Company"</th>
                            <th>"Status"</th>
                            <th>"Deal Value"</th>
                            <th>"Last Contact"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|contact| contact.clone()
                            children=move |contact| view! { <ContactRow contact=contact on_edit=on_edit /> }
                        />
                    </tbody>
                </table>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="empty-state">"No contacts match your search"</p>
                </Show>
            </div>

            {move || editing.get().map(|target| view! { <ContactForm target=target on_close=on_close /> })}
        </div>
    }
}
