//! Testimonial carousel, stats strip and review metadata.

use leptos::{ev, html, prelude::*};
use teahub_commerce::reviews::{Review, MAX_STARS};
use teahub_commerce::schema;
use teahub_core::Carousel;

use crate::browser::{now_ms, reveal_class, use_reveal, IntervalSlot, TimeoutSlot};
use crate::content::REVIEW_STATS;
use crate::sections::{use_site, JsonLd};

/// Arm the resume timer. If it fires before the deadline (clock skew), it
/// re-arms for the remainder.
fn schedule_resume(carousel: RwSignal<Carousel>, resume: TimeoutSlot, delay_ms: u32) {
    resume.set(delay_ms, move || {
        let now = now_ms();
        let remaining = carousel
            .try_update(|c| {
                if c.resume_if_due(now) {
                    None
                } else {
                    c.remaining_cooldown(now)
                }
            })
            .flatten();
        if let Some(ms) = remaining {
            schedule_resume(carousel, resume, u32::try_from(ms).unwrap_or(u32::MAX));
        }
    });
}

fn review_slide(review: &Review) -> impl IntoView {
    let stars = (0..MAX_STARS)
        .map(|position| {
            let class = if review.is_star_filled(position) { "star filled" } else { "star" };
            view! { <span class=class>"\u{2605}"</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="review-slide">
            <div class="review-card">
                <div class="review-stars" aria-label=format!("{} out of {} stars", review.rating, MAX_STARS)>
                    {stars}
                </div>
                <blockquote class="review-text">{format!("\u{201c}{}\u{201d}", review.text)}</blockquote>
                <div class="review-author">
                    <div class="review-avatar">{review.avatar.clone()}</div>
                    <div>
                        <div class="review-name">{review.name.clone()}</div>
                        <div class="review-location">{review.location.clone()}</div>
                    </div>
                    <div class="review-product">
                        <div>{review.product.clone()}</div>
                        <div class="review-date">{review.formatted_date()}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Reviews() -> impl IntoView {
    let site = use_site();
    let section = NodeRef::<html::Section>::new();
    let visible = use_reveal(section, site.config.visibility.reviews);
    let timing = site.config.timing;

    let carousel = RwSignal::new(Carousel::new(site.reviews.len(), timing.carousel_resume_ms));
    let auto_advance = Memo::new(move |_| carousel.with(Carousel::is_auto_advancing));
    let autoplay = IntervalSlot::new();
    let resume = TimeoutSlot::new();

    Effect::new(move || {
        if auto_advance.get() {
            autoplay.start(timing.carousel_interval_ms, move || {
                carousel.try_update(Carousel::tick);
            });
        } else {
            autoplay.stop();
        }
    });

    let after_interaction = move || schedule_resume(carousel, resume, timing.carousel_resume_ms);
    let previous = move |_: ev::MouseEvent| {
        carousel.update(|c| c.previous(now_ms()));
        after_interaction();
    };
    let next = move |_: ev::MouseEvent| {
        carousel.update(|c| c.next(now_ms()));
        after_interaction();
    };

    let slides = site.reviews.iter().map(review_slide).collect::<Vec<_>>();

    let dots = (0..site.reviews.len())
        .map(|i| {
            view! {
                <button
                    class=move || if carousel.with(|c| c.index() == i) { "carousel-dot active" } else { "carousel-dot" }
                    aria-label=format!("Go to review {}", i + 1)
                    on:click=move |_| {
                        carousel.update(|c| c.go_to(i, now_ms()));
                        after_interaction();
                    }
                ></button>
            }
        })
        .collect::<Vec<_>>();

    let stats = site.review_stats();
    let stat_items = std::iter::once((format!("{:.1}", stats.average_rating), "Average Rating"))
        .chain(REVIEW_STATS.iter().map(|(value, label)| (value.to_string(), *label)))
        .map(|(value, label)| {
            view! {
                <div class="stat">
                    <div class="stat-value">{value}</div>
                    <div class="stat-label">{label}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let metadata = schema::to_script_body(&schema::product_reviews(
        &site.config.brand.collection_name,
        &stats,
        &site.reviews,
    ))
    .map_err(|e| log::error!("review metadata: {}", e))
    .ok();

    view! {
        <section id="reviews" class="section reviews" node_ref=section>
            <div class="reviews-quote-mark left" aria-hidden="true">"\u{201c}"</div>
            <div class="reviews-quote-mark right" aria-hidden="true">"\u{201d}"</div>

            <div class="container">
                <div class="section-header">
                    <span class=reveal_class("eyebrow", visible)>"Testimonials"</span>
                    <h2 class=reveal_class("section-title", visible)>
                        "What Our " <span class="text-gradient-gold">"Customers"</span> " Say"
                    </h2>
                </div>

                <div class=reveal_class("carousel", visible)>
                    <div class="carousel-viewport">
                        <div
                            class="carousel-track"
                            style=move || {
                                format!(
                                    "transform: translateX(-{}%)",
                                    carousel.with(Carousel::track_offset_percent),
                                )
                            }
                        >
                            {slides}
                        </div>
                    </div>
                    <button class="carousel-nav prev" aria-label="Previous review" on:click=previous>
                        "\u{2039}"
                    </button>
                    <button class="carousel-nav next" aria-label="Next review" on:click=next>
                        "\u{203a}"
                    </button>
                    <div class="carousel-dots">{dots}</div>
                </div>

                <div class=reveal_class("stats", visible)>{stat_items}</div>
            </div>

            <JsonLd body=metadata/>
        </section>
    }
}
