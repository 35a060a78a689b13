//! Static marketing copy.

/// A feature card in the About section.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl Feature {
    const fn new(glyph: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            glyph,
            title,
            description,
        }
    }
}

pub const FEATURES: [Feature; 4] = [
    Feature::new(
        "\u{1f343}",
        "Single Origin",
        "Sourced directly from heritage estates in Darjeeling, Assam, and beyond.",
    ),
    Feature::new(
        "\u{1f3c5}",
        "Small Batch",
        "Handcrafted in limited quantities to ensure exceptional quality and freshness.",
    ),
    Feature::new(
        "\u{1f30d}",
        "Sustainable",
        "Ethically sourced with fair trade practices and eco-friendly packaging.",
    ),
    Feature::new(
        "\u{2665}",
        "Artisan Craft",
        "Traditional techniques perfected over generations of master tea makers.",
    ),
];

pub const HERO_TITLE: &str = "The Art of";
pub const HERO_TITLE_ACCENT: &str = "Leaf & Luxury";
pub const HERO_SUBTITLE: &str = "Where leaves come to tell their story";
pub const TRUST_BADGES: [&str; 3] = ["100% Organic", "All Over India Shipping", "Premium Quality"];

pub const ABOUT_STORY: &str = "Tea Hub was born from a simple dream: to bring the true richness \
    of Assam into every home. Growing up with the aroma of fresh chai, I learned that great tea \
    is not just a drink, but a moment of comfort, a pause in a busy day, and a connection to \
    something pure. With Tea Hub Strong Dust Tea, we honour that feeling. Every batch is \
    carefully chosen from trusted Assam estates, refined with care, and packed to preserve its \
    natural strength and aroma. My promise is simple: every cup you brew should feel warm, \
    honest, and richly satisfying.";

pub const MISSION_QUOTE: &str = "Every cup of TeaHub is a journey, from misty mountain gardens \
    to your morning ritual. We don't just sell tea; we share an experience.";

pub const CATALOG_INTRO: &str =
    "From robust Assam mornings to delicate Darjeeling afternoons, find your perfect brew.";

/// Images in the scrolling strip.
pub const STRIP_IMAGES: [(&str, &str); 5] = [
    ("/assets/products/earl-grey.jpg", "Earl Grey Tea"),
    ("/assets/hero-tea-bg.jpg", "Tea Leaves"),
    ("/assets/products/darjeeling.jpg", "Darjeeling Tea"),
    ("/assets/tea-cup-hero.jpg", "Premium Tea Cup"),
    ("/assets/products/chamomile-bliss.jpg", "Chamomile Bliss"),
];

/// Stats strip under the testimonials. The average rating comes from
/// the site config and is rendered first.
pub const REVIEW_STATS: [(&str, &str); 3] = [
    ("50+", "Happy Customers"),
    ("98%", "Would Recommend"),
    ("FSSAI", "Lic. 22425562000188"),
];

pub const FOOTER_BLURB: &str = "Curating the world's finest teas since 2009. Single-origin, \
    small-batch, crafted for connoisseurs who appreciate the art of leaf and luxury.";
