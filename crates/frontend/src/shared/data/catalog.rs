//! Static catalog reference data: shop products, bookable services,
//! gallery pieces and seeded forum posts. Read-only; the rest of the
//! app only ever borrows from these tables.

use contracts::domain::a001_product::Product;
use contracts::domain::a002_service::{Offering, Service};
use once_cell::sync::Lazy;

/// A finished piece shown in the gallery. Presentation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

/// A seeded community post. Presentation only; there is no backend to
/// accept new posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumPost {
    pub id: u32,
    pub author: &'static str,
    pub avatar: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub likes: u32,
    pub replies: u32,
    pub time_ago: &'static str,
}

fn product(id: &str, name: &str, price: u32, rating: f32, image: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        rating,
        image: image.to_string(),
        category: category.to_string(),
    }
}

fn offering(id: &str, title: &str, description: &str, duration: &str, price: &str) -> Offering {
    Offering {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        price: price.to_string(),
    }
}

pub static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        product(
            "w1",
            "Handcrafted Wooden Jewelry Box",
            89,
            4.8,
            "https://images.unsplash.com/photo-1584589167171-541ce45f1eea?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Wood Art",
        ),
        product(
            "w2",
            "Wooden Pendant Necklace",
            39,
            4.6,
            "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Wood Jewelry",
        ),
        product(
            "w3",
            "Basic Woodworking Course",
            149,
            4.9,
            "https://images.unsplash.com/photo-1581612129334-551ccd069e62?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Courses",
        ),
        product(
            "p1",
            "Handmade Wedding Cards Set",
            29,
            4.7,
            "https://images.unsplash.com/photo-1607344645866-009c320b63e0?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Cards",
        ),
        product(
            "p2",
            "Vintage Style Bookmarks",
            12,
            4.5,
            "https://images.unsplash.com/photo-1598067305109-9a60168d5311?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Bookmarks",
        ),
        product(
            "j1",
            "Beginner Juggling Set",
            24,
            4.6,
            "https://images.unsplash.com/photo-1576617497557-22895ee5930b?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Sets",
        ),
        product(
            "j2",
            "Party Entertainment Package",
            199,
            4.9,
            "https://images.unsplash.com/photo-1564769662533-4f00a87b4056?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Events",
        ),
        product(
            "a1",
            "Watercolor Landscape",
            299,
            4.8,
            "https://images.unsplash.com/photo-1580136579312-94651dfd596d?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Paintings",
        ),
        product(
            "a2",
            "Mixed Media Workshop",
            89,
            4.7,
            "https://images.unsplash.com/photo-1460661419201-fd4cecdf8a8b?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Lessons",
        ),
        product(
            "s1",
            "Web Development Consultation",
            149,
            5.0,
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Consulting",
        ),
        product(
            "s2",
            "Programming Basics Course",
            299,
            4.8,
            "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
            "Teaching",
        ),
    ]
});

pub static SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        Service {
            id: "wood".to_string(),
            title: "Wood Crafts".to_string(),
            description: "From delicate jewelry to custom furniture, we create unique wooden \
                          pieces with love and skill."
                .to_string(),
            offerings: vec![
                offering(
                    "wood-art",
                    "Custom wood art and decor",
                    "Unique wooden art pieces and decorative items crafted to your specifications.",
                    "2-4 weeks",
                    "Starting at $199",
                ),
                offering(
                    "wood-jewelry",
                    "Handcrafted wood jewelry",
                    "Beautiful wooden jewelry pieces including necklaces, bracelets, and earrings.",
                    "1-2 weeks",
                    "Starting at $39",
                ),
                offering(
                    "wood-course",
                    "Weekend woodworking courses",
                    "Learn the basics of woodworking in our weekend courses.",
                    "2 days",
                    "$299 per person",
                ),
            ],
            price: "Starting at $39".to_string(),
            icon: "hammer".to_string(),
        },
        Service {
            id: "paper".to_string(),
            title: "Paper Crafts".to_string(),
            description: "Discover our handmade paper creations, perfect for special occasions or \
                          as unique gifts. Custom orders welcome for personalized designs."
                .to_string(),
            offerings: vec![
                offering(
                    "paper-cards",
                    "Handmade cards and invitations",
                    "Custom designed cards and invitations for weddings, birthdays, and special \
                     events. Each piece is handcrafted with premium papers and materials.",
                    "1-2 weeks",
                    "Starting at $12",
                ),
                offering(
                    "paper-albums",
                    "Custom memory albums",
                    "Beautifully crafted photo albums and scrapbooks, perfect for preserving your \
                     precious memories. Personalized to your style and preferences.",
                    "2-3 weeks",
                    "Starting at $89",
                ),
                offering(
                    "paper-boxes",
                    "Decorative boxes and packaging",
                    "Unique gift boxes and packaging solutions for special occasions. Custom \
                     sizes and designs available.",
                    "1-2 weeks",
                    "Starting at $29",
                ),
                offering(
                    "paper-bookmarks",
                    "Artisanal bookmarks",
                    "Hand-crafted bookmarks using various paper crafting techniques. Perfect as \
                     gifts or personal accessories.",
                    "3-5 days",
                    "Starting at $15",
                ),
            ],
            price: "Starting at $12".to_string(),
            icon: "pen".to_string(),
        },
        Service {
            id: "juggling".to_string(),
            title: "Juggling".to_string(),
            description: "Learn the art of juggling or book us for your next event. We offer \
                          beginner-friendly equipment and professional entertainment services."
                .to_string(),
            offerings: vec![
                offering(
                    "juggling-sets",
                    "Beginner juggling sets",
                    "High-quality juggling equipment sets for beginners, including balls, clubs, \
                     and rings. Comes with basic instruction guide.",
                    "Immediate",
                    "Starting at $24",
                ),
                offering(
                    "juggling-lessons",
                    "Private and group lessons",
                    "Learn juggling from experienced performers. Available for all skill levels, \
                     from complete beginners to advanced practitioners.",
                    "1 hour",
                    "$49 per session",
                ),
                offering(
                    "juggling-events",
                    "Event entertainment packages",
                    "Professional juggling performances for corporate events, parties, and \
                     festivals. Customizable shows to suit your event.",
                    "1-2 hours",
                    "Starting at $299",
                ),
                offering(
                    "juggling-parties",
                    "Children's party performances",
                    "Interactive juggling shows and workshops perfect for children's parties. \
                     Includes basic juggling instruction for kids.",
                    "45-60 minutes",
                    "$199 per party",
                ),
            ],
            price: "Starting at $24".to_string(),
            icon: "scissors".to_string(),
        },
        Service {
            id: "art".to_string(),
            title: "Art & Painting".to_string(),
            description: "Express yourself through various art forms. We offer original paintings \
                          and workshops in different techniques."
                .to_string(),
            offerings: vec![
                offering(
                    "art-paintings",
                    "Original paintings",
                    "Commission unique paintings in various styles and mediums. Perfect for home \
                     decor or special gifts.",
                    "2-4 weeks",
                    "Starting at $299",
                ),
                offering(
                    "art-mixed",
                    "Mixed media artwork",
                    "Unique pieces combining different artistic mediums and techniques. Each \
                     piece tells a story through various materials.",
                    "3-5 weeks",
                    "Starting at $199",
                ),
                offering(
                    "art-workshops",
                    "Art technique workshops",
                    "Learn various painting techniques in our hands-on workshops. All materials \
                     included.",
                    "3 hours",
                    "$89 per session",
                ),
                offering(
                    "art-commission",
                    "Custom commissions",
                    "Commission custom artwork tailored to your vision and space. Consultation \
                     included.",
                    "3-6 weeks",
                    "Starting at $499",
                ),
            ],
            price: "Starting at $89".to_string(),
            icon: "palette".to_string(),
        },
        Service {
            id: "software".to_string(),
            title: "Software & Teaching".to_string(),
            description: "Get personalized guidance in software development or join our coding \
                          workshops. We specialize in making technology accessible."
                .to_string(),
            offerings: vec![
                offering(
                    "software-basics",
                    "Programming basics courses",
                    "Introduction to programming fundamentals. Perfect for beginners wanting to \
                     start their coding journey.",
                    "6 weeks",
                    "$499 per course",
                ),
                offering(
                    "software-web",
                    "Web development consulting",
                    "Expert consultation for your web development projects. Get guidance on best \
                     practices and solutions.",
                    "Flexible",
                    "$149 per hour",
                ),
                offering(
                    "software-custom",
                    "Custom software solutions",
                    "Tailored software development for your specific needs. Includes planning, \
                     development, and deployment.",
                    "Project-based",
                    "Starting at $999",
                ),
                offering(
                    "software-mentoring",
                    "One-on-one mentoring",
                    "Personalized mentoring sessions to help you achieve your programming goals.",
                    "1 hour",
                    "$99 per session",
                ),
            ],
            price: "Starting at $149".to_string(),
            icon: "code".to_string(),
        },
    ]
});

pub static GALLERY_ITEMS: Lazy<Vec<GalleryItem>> = Lazy::new(|| {
    vec![
        GalleryItem {
            id: 1,
            title: "Handcrafted Chair",
            category: "Carpentry",
            image: "https://images.unsplash.com/photo-1592078615290-033ee584e267?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        },
        GalleryItem {
            id: 2,
            title: "Mountain Landscape",
            category: "Painting",
            image: "https://images.unsplash.com/photo-1580136579312-94651dfd596d?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        },
        GalleryItem {
            id: 3,
            title: "Web Application",
            category: "Software",
            image: "https://images.unsplash.com/photo-1547658719-da2b51169166?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        },
        GalleryItem {
            id: 4,
            title: "Juggling Performance",
            category: "Juggling",
            image: "https://images.unsplash.com/photo-1564769662533-4f00a87b4056?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        },
    ]
});

pub static FORUM_POSTS: Lazy<Vec<ForumPost>> = Lazy::new(|| {
    vec![
        ForumPost {
            id: 1,
            author: "Emma W.",
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80",
            title: "Looking for woodworking tips",
            content: "Hi everyone! I'm interested in starting woodworking. Any recommendations \
                      for beginner-friendly projects?",
            likes: 12,
            replies: 5,
            time_ago: "2h ago",
        },
        ForumPost {
            id: 2,
            author: "Michael R.",
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80",
            title: "Sharing my paper craft journey",
            content: "Just finished my first handmade journal! Here's what I learned along the \
                      way...",
            likes: 24,
            replies: 8,
            time_ago: "5h ago",
        },
        ForumPost {
            id: 3,
            author: "Sarah L.",
            avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80",
            title: "Juggling workshop experience",
            content: "Just attended the beginner's juggling workshop. It was amazing! The \
                      instructors were so patient...",
            likes: 18,
            replies: 3,
            time_ago: "1d ago",
        },
    ]
});

/// Products filtered by catalog section; `None` means the whole shop.
pub fn products_in(section: Option<&str>) -> Vec<Product> {
    let prefix = match section {
        None | Some("all") => return PRODUCTS.clone(),
        Some("wood") => 'w',
        Some("paper") => 'p',
        Some("juggling") => 'j',
        Some("art") => 'a',
        Some("software") => 's',
        Some(_) => return Vec::new(),
    };
    PRODUCTS
        .iter()
        .filter(|p| p.id.starts_with(prefix))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offering_id_is_unique() {
        let mut ids: Vec<&str> = SERVICES
            .iter()
            .flat_map(|s| s.offerings.iter().map(|o| o.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn sections_partition_the_shop() {
        let sections = ["wood", "paper", "juggling", "art", "software"];
        let by_section: usize = sections
            .into_iter()
            .map(|s| products_in(Some(s)).len())
            .sum();
        assert_eq!(by_section, PRODUCTS.len());
        assert!(products_in(Some("unknown")).is_empty());
    }
}
