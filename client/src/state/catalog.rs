//! Static storefront content: products, kit, benefits, reviews, gallery.
//!
//! DESIGN
//! ======
//! Content is plain `const` data so sections render it with
//! `iter().map(..).collect_view()` and tests can check invariants (unique
//! ids, one featured product, well-formed image paths) without a browser.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductLine {
    /// Clay body wrapped in decorative iron; ships with WebP variants.
    Premium,
    Classic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub size: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub featured: bool,
    pub line: ProductLine,
}

/// `sizes` hint paired with [`Product::srcset`].
pub const PRODUCT_IMAGE_SIZES: &str = "(max-width: 640px) 320px, 640px";

impl Product {
    /// Label carried into the order form and the Telegram message.
    #[must_use]
    pub fn order_label(&self) -> String {
        format!("Tandir {} — {} so'm", self.size, self.price)
    }

    #[must_use]
    pub fn alt_text(&self) -> String {
        format!("Tandir {}", self.size)
    }

    /// Responsive WebP candidates, available for the premium line only.
    #[must_use]
    pub fn srcset(&self) -> Option<String> {
        match self.line {
            ProductLine::Premium => Some(webp_srcset(self.image)),
            ProductLine::Classic => None,
        }
    }
}

/// Hero background; served as WebP with this JPEG as fallback.
pub const HERO_BACKGROUND: &str = "/images/hero-bg.jpg";

fn strip_raster_ext(image: &str) -> &str {
    [".png", ".jpg", ".jpeg", ".PNG", ".JPG", ".JPEG"]
        .iter()
        .find_map(|ext| image.strip_suffix(ext))
        .unwrap_or(image)
}

/// `/x/name.jpg` -> `/x/name.webp`.
#[must_use]
pub fn webp_path(image: &str) -> String {
    format!("{}.webp", strip_raster_ext(image))
}

/// `/x/name.png` -> `/x/name-320.webp 320w, /x/name.webp 640w`.
#[must_use]
pub fn webp_srcset(image: &str) -> String {
    let base = strip_raster_ext(image);
    format!("{base}-320.webp 320w, {base}.webp 640w")
}

pub const PRODUCTS: &[Product] = &[
    Product { id: "m-60", size: "60 sm", price: "2 000 000", image: "/images/tandir-mosaic-60.png", featured: false, line: ProductLine::Premium },
    Product { id: "m-70", size: "70 sm", price: "2 500 000", image: "/images/tandir-mosaic-70.png", featured: true, line: ProductLine::Premium },
    Product { id: "m-80", size: "80 sm", price: "3 000 000", image: "/images/tandir-mosaic-80.png", featured: false, line: ProductLine::Premium },
    Product { id: "s-60", size: "60 sm", price: "500 000", image: "/images/tandir-simple-60.png", featured: false, line: ProductLine::Classic },
    Product { id: "s-70", size: "70 sm", price: "800 000", image: "/images/tandir-simple-70.png", featured: false, line: ProductLine::Classic },
    Product { id: "s-80", size: "80 sm", price: "1 000 000", image: "/images/tandir-simple-80.png", featured: false, line: ProductLine::Classic },
    Product { id: "s-90", size: "90 sm", price: "1 300 000", image: "/images/tandir-simple-90.png", featured: false, line: ProductLine::Classic },
    Product { id: "s-110", size: "110 sm", price: "2 000 000", image: "/images/tandir-simple-110.png", featured: false, line: ProductLine::Classic },
];

#[derive(Clone, Copy, Debug)]
pub struct Accessory {
    pub name: &'static str,
    pub image: &'static str,
}

pub const ACCESSORIES: &[Accessory] = &[
    Accessory { name: "3 litrli kuza", image: "/images/icon-kuza.png" },
    Accessory { name: "Non yopish rapidasi", image: "/images/icon-rapida.png" },
    Accessory { name: "Somsa uzgich", image: "/images/icon-somsa-tool.png" },
    Accessory { name: "Steak va baliq dimlash setkasi", image: "/images/icon-grill.png" },
    Accessory { name: "Somsa kosalari", image: "/images/icon-plates.png" },
];

#[derive(Clone, Copy, Debug)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "1000°C texnologiya",
        description: "Zamonaviy pechlar yordamida maksimal mustahkamlik va sifat kafolati",
        image: "/images/icon-temp.png",
    },
    Benefit {
        title: "Yuqori sifat",
        description: "Qo'l bilan tayyorlangan, har bir detalga e'tibor qaratilgan",
        image: "/images/icon-quality.png",
    },
    Benefit {
        title: "Ko'chma model",
        description: "Oson ko'chirish va o'rnatish imkoniyati - xoh uyingizda, xoh bog'ingizda",
        image: "/images/icon-portable.png",
    },
    Benefit {
        title: "Uzoq muddat xizmat qiladi",
        description: "Yillar davomida ishonchli ishlash - 10 yillik kafolat",
        image: "/images/icon-durable.png",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "5000+", label: "Mamnun mijozlar" },
    Stat { value: "10", label: "Yillik tajriba" },
    Stat { value: "100%", label: "Kafolat" },
    Stat { value: "24/7", label: "Qo'llab-quvvatlash" },
];

#[derive(Clone, Copy, Debug)]
pub struct ProcessFact {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROCESS_FACTS: &[ProcessFact] = &[
    ProcessFact { label: "Harorat", value: "1000°C" },
    ProcessFact { label: "Vaqt", value: "24 soat" },
    ProcessFact { label: "Mustahkamlik", value: "100%" },
];

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// First letter of the name, used as the avatar.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Azizbek Karimov",
        location: "Toshkent",
        text: "Tandir ajoyib ishlaydi! Non juda mazali chiqdi. Yetkazib berish tez va sifatli. Katta rahmat!",
        rating: 5,
    },
    Testimonial {
        name: "Gulnora Rahimova",
        location: "Samarqand",
        text: "2 oy oldin sotib oldim, hali muammo yo'q. Issiqlikni yaxshi saqlaydi. Tavsiya qilaman!",
        rating: 5,
    },
    Testimonial {
        name: "Bobur Aliyev",
        location: "Buxoro",
        text: "Restoranim uchun 3 ta tandir oldim. Mijozlar juda mamnun. Sifatga gap yo'q!",
        rating: 5,
    },
    Testimonial {
        name: "Nodira Xusanova",
        location: "Farg'ona",
        text: "Oila davrasida juda qulay. Somsa va non ajoyib pishadi. Yetkazib berish bepul!",
        rating: 5,
    },
];

const GALLERY_BASE: &str = "/images/image";
pub const GALLERY_SIZE: usize = 20;

/// Gallery photos, numbered from 1.
#[must_use]
pub fn gallery_images() -> Vec<String> {
    (1..=GALLERY_SIZE).map(|n| format!("{GALLERY_BASE}/{n}.jpg")).collect()
}

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HEADER_LINKS: &[NavLink] = &[
    NavLink { label: "Bosh sahifa", href: "#hero" },
    NavLink { label: "Tandirlar", href: "#tandirs" },
    NavLink { label: "Jarayon", href: "#process" },
    NavLink { label: "Komplekt", href: "#komplektatsiya" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Bosh sahifa", href: "#hero" },
    NavLink { label: "Tandirlar", href: "#tandirs" },
    NavLink { label: "Komplektatsiya", href: "#komplektatsiya" },
    NavLink { label: "Buyurtma berish", href: "#order" },
];

pub const SOCIAL_LINKS: &[NavLink] = &[
    NavLink { label: "Telegram", href: "https://t.me/tandir_uz" },
    NavLink { label: "Instagram", href: "https://instagram.com/tandir.uz" },
    NavLink { label: "Facebook", href: "https://facebook.com/tandir.uz" },
];

#[derive(Clone, Copy, Debug)]
pub struct Phone {
    pub display: &'static str,
    pub tel: &'static str,
}

pub const PHONES: &[Phone] = &[
    Phone { display: "+998 99 503 93 52", tel: "tel:+998995039352" },
    Phone { display: "+998 94 503 93 52", tel: "tel:+998945039352" },
];

pub const ADDRESS_LINES: &[&str] = &[
    "Xorazm viloyati, Yangiariq tumani, Kattabog' qishlog'i,",
    "Komiljon Otaniyozov ko'chasi, 25-uy",
];

pub const MAP_EMBED_URL: &str =
    "https://yandex.ru/map-widget/v1/?ll=60.542923%2C41.390625&z=16&l=map&pt=60.542923,41.390625,pm2rdm";

pub const BRAND_NAME: &str = "ZAMONAVIY TANDIRLAR";
pub const LOGO_PATH: &str = "/images/logo.png";
