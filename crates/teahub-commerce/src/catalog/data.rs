//! The teas sold on the site.

use crate::catalog::{Category, Product, SizeOption};
use crate::money::Money;

fn size(label: &str, rupees: i64) -> SizeOption {
    SizeOption::new(label, Money::rupees(rupees))
}

fn sale(label: &str, rupees: i64, original_rupees: i64) -> SizeOption {
    size(label, rupees).with_original_price(Money::rupees(original_rupees))
}

pub(crate) fn builtin_products() -> Vec<Product> {
    vec![
        Product::new("earl-grey-reserve", "Earl Grey Reserve", Category::Classic)
            .with_image("/assets/products/earl-grey.jpg")
            .with_description("A distinguished blend with Calabrian bergamot")
            .with_tasting_notes("Citrus, floral, smooth finish with hints of lavender")
            .with_origin("Sri Lanka & Italy")
            .with_size(sale("50g", 599, 749))
            .with_size(sale("100g", 1099, 1399))
            .with_size(sale("250g", 2499, 2999))
            .with_rating(4.9, 128)
            .with_badge("Bestseller"),
        Product::new("assam-gold", "Assam Gold", Category::Premium)
            .with_image("/assets/products/assam-gold.jpg")
            .with_description("Full-bodied golden tips from Upper Assam")
            .with_tasting_notes("Malty, robust, honey sweetness with brisk character")
            .with_origin("Upper Assam, India")
            .with_size(size("50g", 799))
            .with_size(size("100g", 1499))
            .with_size(size("250g", 3399))
            .with_rating(4.8, 94)
            .with_badge("Premium"),
        Product::new("darjeeling-first-flush", "Darjeeling First Flush", Category::Premium)
            .with_image("/assets/products/darjeeling.jpg")
            .with_description("The champagne of teas, spring harvest")
            .with_tasting_notes("Muscatel, floral, delicate with bright notes")
            .with_origin("Darjeeling, India")
            .with_size(size("50g", 999))
            .with_size(size("100g", 1899))
            .with_rating(5.0, 76)
            .with_badge("Limited"),
        Product::new("masala-chai", "Masala Chai", Category::Masala)
            .with_image("/assets/products/masala-chai.jpg")
            .with_description("Traditional spiced tea with warming aromatics")
            .with_tasting_notes("Cinnamon, cardamom, ginger, clove symphony")
            .with_origin("Kerala, India")
            .with_size(sale("100g", 449, 549))
            .with_size(sale("250g", 999, 1199))
            .with_size(sale("500g", 1849, 2199))
            .with_rating(4.9, 215)
            .with_badge("Popular"),
        Product::new("organic-green", "Organic Green", Category::Herbal)
            .with_image("/assets/products/organic-green.jpg")
            .with_description("Pure, unoxidized leaves from organic gardens")
            .with_tasting_notes("Vegetal, fresh, subtle sweetness, clean finish")
            .with_origin("Nilgiris, India")
            .with_size(size("50g", 549))
            .with_size(size("100g", 999))
            .with_size(size("250g", 2299))
            .with_rating(4.7, 89),
        Product::new("chamomile-bliss", "Chamomile Bliss", Category::Herbal)
            .with_image("/assets/products/chamomile-bliss.jpg")
            .with_description("Calming herbal infusion for peaceful evenings")
            .with_tasting_notes("Honey-sweet, floral, soothing apple notes")
            .with_origin("Egypt & India")
            .with_size(size("50g", 399))
            .with_size(size("100g", 749))
            .with_rating(4.8, 67)
            .with_badge("Relaxing"),
    ]
}
