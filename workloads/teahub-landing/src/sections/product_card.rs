use leptos::prelude::*;
use teahub_commerce::contact::WhatsAppLink;
use teahub_commerce::prelude::*;

use crate::sections::{transition_delay, use_site};

/// One tea: image, badge, rating, tasting notes, size picker and price.
///
/// The "Order Now" link always names the size currently selected on this
/// card.
#[component]
pub fn ProductCard(
    product: Product,
    index: usize,
    visible: Signal<bool>,
    selections: RwSignal<SizeSelections>,
) -> impl IntoView {
    let site = use_site();
    let number = site.config.contact.whatsapp_number.clone();
    let brand = site.config.brand.name.clone();

    let name = product.name.clone();
    let image = product.image.clone();
    let alt = product.image_alt();
    let category = product.category.label();
    let description = product.description.clone();
    let notes = product.tasting_notes.clone();
    let origin = product.origin.clone();
    let rating = product.rating_display();
    let review_count = product.review_count;
    let badge = product.badge.clone();
    let size_labels: Vec<String> = product.sizes.iter().map(|s| s.label.clone()).collect();

    let product = StoredValue::new(product);
    let selected_index =
        move || product.with_value(|p| selections.with(|s| s.index_for(p)));

    let order_url = move || {
        product.with_value(|p| {
            selections.with(|s| WhatsAppLink::for_order(number.clone(), &brand, p, s.selected(p)).url())
        })
    };

    let price = move || {
        product.with_value(|p| {
            selections.with(|s| {
                s.selected(p)
                    .map(|size| {
                        (
                            size.price.display(),
                            size.original_price.map(|o| o.display()),
                            size.savings_label(),
                        )
                    })
            })
        })
    };

    let size_buttons = size_labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <button
                    class=move || if selected_index() == i { "size-chip active" } else { "size-chip" }
                    on:click=move |_| {
                        product.with_value(|p| {
                            selections.update(|s| {
                                let selected = s.select(p, i);
                                debug_assert!(selected.is_ok(), "size chip {} outside {}", i, p.id);
                            })
                        })
                    }
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article
            class=move || if visible.get() { "product-card reveal is-visible" } else { "product-card reveal" }
            style=move || transition_delay(visible.get(), 400 + index * 100)
        >
            <div class="product-media">
                <img src=image alt=alt loading="lazy"/>
                <div class="product-media-overlay"></div>
                {badge.map(|badge| view! { <span class="product-badge">{badge}</span> })}
                <div class="product-quick-action">
                    <a href=order_url target="_blank" rel="noopener noreferrer" class="btn btn-hero btn-block">
                        "\u{1f4ac} Order Now"
                    </a>
                </div>
            </div>

            <div class="product-body">
                <div class="product-meta">
                    <span class="product-category">{category}</span>
                    <span class="product-rating">
                        <span class="star filled">"\u{2605}"</span>
                        <span>{rating}</span>
                        <span class="product-review-count">{format!("({})", review_count)}</span>
                    </span>
                </div>

                <h3 class="product-name">{name}</h3>
                <p class="product-description">{description}</p>
                <p class="product-notes">{notes}</p>
                <p class="product-origin">{origin}</p>

                <div class="size-picker" role="group" aria-label="Pack size">{size_buttons}</div>

                {move || {
                    price()
                        .map(|(current, original, savings)| {
                            view! {
                                <div class="product-price">
                                    <span class="price-current">{current}</span>
                                    {original.map(|o| view! { <span class="price-original">{o}</span> })}
                                    {savings.map(|label| view! { <span class="price-savings">{label}</span> })}
                                </div>
                            }
                        })
                }}
            </div>
        </article>
    }
}
