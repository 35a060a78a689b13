//! Filterable tea catalog.

use leptos::{html, prelude::*};
use teahub_commerce::contact::{collection_message, WhatsAppLink};
use teahub_commerce::prelude::*;

use crate::browser::{reveal_class, use_reveal};
use crate::content::CATALOG_INTRO;
use crate::sections::product_card::ProductCard;
use crate::sections::use_site;

#[component]
pub fn Products() -> impl IntoView {
    let site = use_site();
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, site.config.visibility.products);

    let query = RwSignal::new(CatalogQuery::new());
    let selections = RwSignal::new(SizeSelections::new());

    let matches = Memo::new({
        let site = site.clone();
        move |_| {
            query.with(|q| {
                let results = q.run(&site.catalog);
                (results.to_owned_products(), results.summary())
            })
        }
    });
    let results = Memo::new(move |_| matches.with(|(products, _)| products.clone()));
    let summary = move || matches.with(|(_, summary)| summary.clone());

    let filter_buttons = CategoryFilter::options()
        .into_iter()
        .map(|filter| {
            view! {
                <button
                    class=move || {
                        if query.with(|q| q.category == filter) {
                            "filter-chip active"
                        } else {
                            "filter-chip"
                        }
                    }
                    on:click=move |_| query.update(|q| q.category = filter)
                >
                    {filter.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let custom_blends = WhatsAppLink::new(site.config.contact.whatsapp_number.clone())
        .with_text(collection_message(&site.config.brand.name))
        .url();

    view! {
        <section id="flavours" class="section products" node_ref=section>
            <div class="section-accent"></div>
            <div class="container">
                <div class="section-header">
                    <span class=reveal_class("eyebrow", visible)>"Our Collection"</span>
                    <h2 class=reveal_class("section-title", visible)>
                        "Exquisite " <span class="text-gradient-gold">"Flavours"</span>
                    </h2>
                    <p class=reveal_class("section-lead", visible)>{CATALOG_INTRO}</p>
                </div>

                <div class=reveal_class("catalog-toolbar", visible)>
                    <div class="filter-bar" role="group" aria-label="Filter by category">
                        <span class="filter-icon" aria-hidden="true">"\u{2637}"</span>
                        {filter_buttons}
                    </div>
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search teas..."
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                    />
                </div>

                <p class="results-summary" role="status" aria-live="polite">{summary}</p>

                <div class="product-grid">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, product)| {
                                view! {
                                    <ProductCard
                                        product=product
                                        index=index
                                        visible=visible
                                        selections=selections
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || results.with(Vec::is_empty)>
                    <div class="empty-state">
                        <p>"No teas found matching your criteria."</p>
                        <button class="btn btn-gold" on:click=move |_| query.update(CatalogQuery::clear)>
                            "Clear Filters"
                        </button>
                    </div>
                </Show>

                <div class="catalog-cta">
                    <p>"Can't find what you're looking for? We have more exclusive blends."</p>
                    <a href=custom_blends target="_blank" rel="noopener noreferrer" class="btn btn-gold btn-lg">
                        "Ask for Custom Blends"
                    </a>
                </div>
            </div>
        </section>
    }
}
