//! Hand-authored site content.

use crate::ids::{ProjectId, TestimonialId};
use crate::product::{ProductCategory, ProductImage};
use crate::project::Project;
use crate::testimonial::Testimonial;

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: TestimonialId(1),
        quote: "JS Hardware's specification support was exceptional on our \
                hospital project. Their understanding of fire-rated \
                requirements and anti-ligature hardware saved us significant \
                design time and ensured full compliance.",
        author: "Luke Emery",
        role: "Principal Architect",
        firm: "Emery & Associates",
        sector: "Healthcare Sector",
    },
    Testimonial {
        id: TestimonialId(2),
        quote: "The master-keying design for our school campus was complex, \
                but JS Hardware delivered a system that balanced security \
                with operational ease. Their on-site support during handover \
                was invaluable.",
        author: "Sarah Mendelsohn",
        role: "Senior Project Manager",
        firm: "NamDev Construction",
        sector: "Education Sector",
    },
    Testimonial {
        id: TestimonialId(3),
        quote: "As quantity surveyors, accuracy in ironmongery scheduling is \
                critical. JS Hardware consistently provides detailed, \
                code-compliant specifications that we can rely on for \
                tendering and procurement.",
        author: "Michael Shikongo",
        role: "Lead Quantity Surveyor",
        firm: "Shikongo QS Associates",
        sector: "Commercial Sector",
    },
];

pub static PROJECTS: [Project; 4] = [
    Project {
        id: ProjectId(1),
        title: "Windhoek Central Hospital",
        category: "Healthcare",
        description: "Complete ironmongery solution including fire-rated door \
                      hardware, master-keyed access systems, and \
                      anti-ligature fittings across 200+ doors.",
        image: "/images/project-hospital.jpg",
        specs: "200+ Doors | Master Key System | Fire-Rated Hardware",
    },
    Project {
        id: ProjectId(2),
        title: "Maerua Mall Retail Expansion",
        category: "Retail",
        description: "Automatic entrance systems, high-traffic door closers, \
                      and integrated access control for Namibia's premier \
                      retail destination.",
        image: "/images/project-retail.jpg",
        specs: "Automatic Entrances | Access Control | High-Traffic Solutions",
    },
    Project {
        id: ProjectId(3),
        title: "FNB Corporate Headquarters",
        category: "Commercial",
        description: "Premium architectural lever handles, electronic access \
                      throughout, and bespoke boardroom hardware with \
                      seamless digital integration.",
        image: "/images/project-office.jpg",
        specs: "Electronic Access | Premium Handles | Digital Integration",
    },
    Project {
        id: ProjectId(4),
        title: "Luxury Residential Estate",
        category: "Residential",
        description: "High-end brass and stainless-steel hardware package, \
                      digital smart locks with biometric access, and custom \
                      finishes for 12 luxury units.",
        image: "/images/project-residential.jpg",
        specs: "Smart Locks | Custom Finishes | Biometric Access",
    },
];

static SECURITY_PRODUCTS: [ProductImage; 4] = [
    ProductImage {
        src: "/images/digital-lock.jpg",
        label: "Smart Digital Lock",
        brand: "Assa Abloy",
    },
    ProductImage {
        src: "/images/product-yale-lock.jpg",
        label: "Touchscreen Deadbolt",
        brand: "Yale",
    },
    ProductImage {
        src: "/images/product-cylinder.jpg",
        label: "Security Cylinder",
        brand: "ABLOY",
    },
    ProductImage {
        src: "/images/product-access-panel.jpg",
        label: "Access Control Panel",
        brand: "Cisa",
    },
];

static DOOR_CONTROL_PRODUCTS: [ProductImage; 4] = [
    ProductImage {
        src: "/images/door-closer.jpg",
        label: "Overhead Door Closer",
        brand: "Geze",
    },
    ProductImage {
        src: "/images/product-floor-spring.jpg",
        label: "Floor Spring Mechanism",
        brand: "Dormakaba",
    },
    ProductImage {
        src: "/images/product-auto-door.jpg",
        label: "Automatic Sliding System",
        brand: "Geze",
    },
    ProductImage {
        src: "/images/door-closer.jpg",
        label: "Concealed Closer",
        brand: "QS",
    },
];

static ARCHITECTURAL_PRODUCTS: [ProductImage; 4] = [
    ProductImage {
        src: "/images/architectural-handles.jpg",
        label: "Lever Handle Collection",
        brand: "Hafele",
    },
    ProductImage {
        src: "/images/product-pull-handle.jpg",
        label: "Commercial Pull Handle",
        brand: "Manital",
    },
    ProductImage {
        src: "/images/product-bathroom-hardware.jpg",
        label: "Bathroom Accessories",
        brand: "Eurobrass",
    },
    ProductImage {
        src: "/images/architectural-handles.jpg",
        label: "Designer Lever Set",
        brand: "Halcast",
    },
];

pub static PRODUCT_CATEGORIES: [ProductCategory; 3] = [
    ProductCategory {
        id: "security",
        label: "Security Access",
        description: "From digital entry systems with biometric recognition \
                      to industrial-grade cylinders and master key systems. \
                      Complete access control solutions for every security \
                      requirement.",
        applications: &[
            "Digital entry systems",
            "Master key design",
            "Industrial security",
            "Biometric access",
        ],
        products: &SECURITY_PRODUCTS,
    },
    ProductCategory {
        id: "door-control",
        label: "Door Control",
        description: "Overhead door closers, floor springs, and automatic \
                      operators essential for fire safety compliance and \
                      accessibility in high-traffic commercial environments.",
        applications: &[
            "Fire safety compliance",
            "Automatic doors",
            "High-traffic commercial",
            "Accessibility systems",
        ],
        products: &DOOR_CONTROL_PRODUCTS,
    },
    ProductCategory {
        id: "architectural",
        label: "Architectural Hardware",
        description: "High-end lever handles, pull handles, and bathroom \
                      accessories. Precision-engineered components that \
                      combine aesthetic sophistication with structural \
                      durability.",
        applications: &[
            "High-end aesthetics",
            "Furniture fittings",
            "Bathroom hardware",
            "Office environments",
        ],
        products: &ARCHITECTURAL_PRODUCTS,
    },
];

/// Look up a product category by its slug.
pub fn category(id: &str) -> Option<&'static ProductCategory> {
    PRODUCT_CATEGORIES.iter().find(|category| category.id == id)
}
