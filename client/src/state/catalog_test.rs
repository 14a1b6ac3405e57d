use std::collections::HashSet;

use super::*;

// =============================================================
// Products
// =============================================================

#[test]
fn product_ids_are_unique() {
    let ids = PRODUCTS.iter().map(|p| p.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), PRODUCTS.len());
}

#[test]
fn exactly_one_featured_product() {
    let featured = PRODUCTS.iter().filter(|p| p.featured).collect::<Vec<_>>();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, "m-70");
}

#[test]
fn order_label_includes_size_and_price() {
    let product = PRODUCTS.iter().find(|p| p.id == "s-90").unwrap();
    assert_eq!(product.order_label(), "Tandir 90 sm — 1 300 000 so'm");
    assert_eq!(product.alt_text(), "Tandir 90 sm");
}

#[test]
fn only_premium_line_has_srcset() {
    for product in PRODUCTS {
        match product.line {
            ProductLine::Premium => assert!(product.srcset().is_some(), "{}", product.id),
            ProductLine::Classic => assert!(product.srcset().is_none(), "{}", product.id),
        }
    }
}

#[test]
fn webp_srcset_strips_known_extensions() {
    assert_eq!(
        webp_srcset("/images/tandir-mosaic-60.png"),
        "/images/tandir-mosaic-60-320.webp 320w, /images/tandir-mosaic-60.webp 640w"
    );
    assert_eq!(webp_srcset("/a/b.JPG"), "/a/b-320.webp 320w, /a/b.webp 640w");
}

#[test]
fn hero_background_has_webp_sibling() {
    assert_eq!(webp_path(HERO_BACKGROUND), "/images/hero-bg.webp");
    assert_eq!(webp_path("/a/b.PNG"), "/a/b.webp");
}

#[test]
fn webp_srcset_keeps_unknown_extension_base() {
    assert_eq!(webp_srcset("/a/b.gif"), "/a/b.gif-320.webp 320w, /a/b.gif.webp 640w");
}

// =============================================================
// Other content
// =============================================================

#[test]
fn gallery_has_numbered_jpgs() {
    let images = gallery_images();
    assert_eq!(images.len(), GALLERY_SIZE);
    assert_eq!(images[0], "/images/image/1.jpg");
    assert_eq!(images[GALLERY_SIZE - 1], "/images/image/20.jpg");
}

#[test]
fn testimonial_initials() {
    let initials = TESTIMONIALS.iter().map(Testimonial::initial).collect::<Vec<_>>();
    assert_eq!(initials, ["A", "G", "B", "N"]);
}

#[test]
fn testimonial_ratings_are_in_range() {
    assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
}

#[test]
fn header_links_are_in_page_anchors() {
    assert!(HEADER_LINKS.iter().chain(FOOTER_LINKS).all(|l| l.href.starts_with('#')));
}

#[test]
fn phones_use_tel_scheme() {
    for phone in PHONES {
        assert!(phone.tel.starts_with("tel:+998"));
        let digits = phone.display.chars().filter(char::is_ascii_digit).collect::<String>();
        assert_eq!(format!("tel:+{digits}"), phone.tel);
    }
}
