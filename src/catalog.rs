use rust_decimal::Decimal;

use crate::models::Product;

/// The static, read-only set of purchasable products.
///
/// Contract relied on by the cart and the pages: ids are unique, stable
/// integers, and every id referenced by a cart line or a related-product
/// list resolves via [`Catalog::by_id`].
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Catalog with the built-in product set.
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, name: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.category == name).collect()
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for product in &self.products {
            if !names.contains(&product.category.as_str()) {
                names.push(&product.category);
            }
        }
        names
    }

    /// The fixed related-id list of `id`, resolved against the catalog.
    /// Unresolvable ids are skipped.
    pub fn related_to(&self, id: u32) -> Vec<&Product> {
        let Some(product) = self.by_id(id) else {
            return Vec::new();
        };
        product
            .related
            .iter()
            .filter_map(|rid| self.by_id(*rid))
            .collect()
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Premium Diwali Gift Box".into(),
            category: "Gift Packs & Novelties".into(),
            price: Decimal::new(4999, 2),
            discount_pct: 10,
            image: "https://images.unsplash.com/photo-1607494628003-f4b6d5ba3886?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "A luxurious collection of hand-selected crackers packaged in traditional motifs with gold-embossed details.".into(),
            rating: 4.8,
            reviews: 124,
            stock: 50,
            features: vec![
                "Includes 10 different types of crackers".into(),
                "Elegant packaging with traditional designs".into(),
                "Safety instructions included".into(),
                "Perfect for family celebrations".into(),
            ],
            related: vec![2, 3, 5],
        },
        Product {
            id: 2,
            name: "Sparklers Pack".into(),
            category: "Sparklers".into(),
            price: Decimal::new(1299, 2),
            discount_pct: 0,
            image: "https://images.unsplash.com/photo-1604548530945-f483e0839b1a?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "20 hand-crafted sparklers producing vibrant multi-colored sparks with a full 60-second burn time.".into(),
            rating: 4.5,
            reviews: 89,
            stock: 200,
            features: vec![
                "20 sparklers per pack".into(),
                "Multiple colors available".into(),
                "60-second burn time".into(),
                "Low smoke emission".into(),
            ],
            related: vec![1, 4, 6],
        },
        Product {
            id: 3,
            name: "Ground Chakra Set".into(),
            category: "Chakkars & Spinners".into(),
            price: Decimal::new(1999, 2),
            discount_pct: 15,
            image: "https://images.unsplash.com/photo-1635168810897-9e2a8a9f6b8f?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "5 premium spinning fireworks that create dazzling circular patterns of multi-colored sparks.".into(),
            rating: 4.2,
            reviews: 56,
            stock: 75,
            features: vec![
                "5 different chakra designs".into(),
                "Spins and emits colorful sparks".into(),
                "Safe for children under adult supervision".into(),
                "Lasts for approximately 45 seconds each".into(),
            ],
            related: vec![1, 5, 8],
        },
        Product {
            id: 4,
            name: "Sky Rockets Assortment".into(),
            category: "Rockets & Aerial Fireworks".into(),
            price: Decimal::new(2999, 2),
            discount_pct: 5,
            image: "https://images.unsplash.com/photo-1498931299472-f7a63a5a1cfa?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "10 premium aerial fireworks soaring up to 100 feet, each with a unique burst pattern.".into(),
            rating: 4.7,
            reviews: 112,
            stock: 60,
            features: vec![
                "10 different rocket varieties".into(),
                "Heights ranging from 50-100 feet".into(),
                "Colorful aerial displays".into(),
                "Easy launch mechanism".into(),
            ],
            related: vec![2, 6, 9],
        },
        Product {
            id: 5,
            name: "Flower Pots Pack".into(),
            category: "Flower Pots & Fountains".into(),
            price: Decimal::new(2499, 2),
            discount_pct: 0,
            image: "https://images.unsplash.com/photo-1635168811010-2d768c20bd3a?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "8 ground fountains erupting into columns of colored sparks up to 15 feet high.".into(),
            rating: 4.4,
            reviews: 78,
            stock: 90,
            features: vec![
                "8 flower pots per pack".into(),
                "Multiple color variations".into(),
                "Fountain-like display".into(),
                "Duration of 30-45 seconds each".into(),
            ],
            related: vec![3, 7, 10],
        },
        Product {
            id: 6,
            name: "Kids Safety Crackers Set".into(),
            category: "Sound Crackers".into(),
            price: Decimal::new(1599, 2),
            discount_pct: 20,
            image: "https://images.unsplash.com/photo-1608848461950-0fe51dfc41cb?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "Low-noise crackers designed for children, with non-toxic materials and reduced smoke.".into(),
            rating: 4.9,
            reviews: 156,
            stock: 120,
            features: vec![
                "Low noise level".into(),
                "No harmful chemicals".into(),
                "Easy to use for children".into(),
                "Includes safety gloves and instructions".into(),
            ],
            related: vec![2, 4, 8],
        },
        Product {
            id: 7,
            name: "Traditional Crackers Bundle".into(),
            category: "Sound Crackers".into(),
            price: Decimal::new(3999, 2),
            discount_pct: 0,
            image: "https://images.unsplash.com/photo-1635325777353-37f3a9a07f25?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "15 time-honored varieties crafted using traditional techniques, from bijli crackers to laadi strings.".into(),
            rating: 4.6,
            reviews: 92,
            stock: 40,
            features: vec![
                "Assortment of 15 traditional varieties".into(),
                "Authentic manufacturing process".into(),
                "Classic designs and effects".into(),
                "Nostalgic experience for elders".into(),
            ],
            related: vec![1, 5, 9],
        },
        Product {
            id: 8,
            name: "Eco-Friendly Crackers Pack".into(),
            category: "Gift Packs & Novelties".into(),
            price: Decimal::new(3499, 2),
            discount_pct: 10,
            image: "https://images.unsplash.com/photo-1635325777353-37f3a9a07f25?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "Green-chemistry crackers with reduced emissions and noise, made from recycled materials.".into(),
            rating: 4.3,
            reviews: 67,
            stock: 85,
            features: vec![
                "Low pollution emission".into(),
                "Reduced noise levels".into(),
                "Made from recycled materials".into(),
                "Environmentally conscious choice".into(),
            ],
            related: vec![3, 6, 10],
        },
        Product {
            id: 9,
            name: "Aerial Shower Crackers".into(),
            category: "Rockets & Aerial Fireworks".into(),
            price: Decimal::new(2799, 2),
            discount_pct: 5,
            image: "https://images.unsplash.com/photo-1498931299472-f7a63a5a1cfa?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "A set of 6 aerial crackers that create beautiful shower effects in the night sky.".into(),
            rating: 4.5,
            reviews: 83,
            stock: 55,
            features: vec![
                "6 aerial crackers per set".into(),
                "Silver and golden shower effects".into(),
                "Height of approximately 80 feet".into(),
                "Spectacular night display".into(),
            ],
            related: vec![4, 7, 10],
        },
        Product {
            id: 10,
            name: "Celebration Complete Box".into(),
            category: "Gift Packs & Novelties".into(),
            price: Decimal::new(5999, 2),
            discount_pct: 15,
            image: "https://images.unsplash.com/photo-1607494628003-f4b6d5ba3886?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=60".into(),
            description: "A comprehensive box containing a variety of crackers for a complete celebration experience.".into(),
            rating: 4.8,
            reviews: 145,
            stock: 30,
            features: vec![
                "Contains 25+ different items".into(),
                "Mix of ground and aerial crackers".into(),
                "Includes sparklers and flower pots".into(),
                "Perfect for the entire festival period".into(),
            ],
            related: vec![1, 5, 9],
        },
    ]
}
