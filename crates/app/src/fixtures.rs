//! Fixture data the stores are seeded with at process start.
//!
//! Mirrors the demo catalog: a small apparel product set, the baking
//! materials, and their manufacturing partners.

use chrono::{DateTime, TimeZone, Utc};

use maisonops_catalog::CatalogEntity;
use maisonops_manufacturers::{
    ContactStatus, Location, Manufacturer, ManufacturerCategory,
};
use maisonops_materials::{Material, MaterialStatus, MaterialType};
use maisonops_products::{product::margin_for, Product, ProductStatus};

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn product(
    name: &str,
    sku: &str,
    collection: &str,
    product_type: &str,
    cost_price: f64,
    retail_price: f64,
    quantity: u64,
    restock_threshold: u64,
    tags: &[&str],
) -> Product {
    let now = seeded_at();
    Product {
        id: Product::generate_id(),
        name: name.to_string(),
        sku: sku.to_string(),
        collection: Some(collection.to_string()),
        product_type: Some(product_type.to_string()),
        cost_price,
        retail_price,
        margin: margin_for(cost_price, retail_price),
        status: ProductStatus::Active,
        description: None,
        quantity: Some(quantity),
        warehouse: Some("Paris".to_string()),
        restock_threshold: Some(restock_threshold),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        notes: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("Classic Tee", "TEE-001", "Essentials", "T-shirt", 8.0, 20.0, 240, 50, &["new"]),
        product("Zip Hoodie", "HOO-001", "Essentials", "Hoodie", 22.0, 55.0, 80, 20, &[]),
        product("Monogram Cap", "CAP-001", "Summer Drop", "Hat", 6.0, 18.0, 150, 30, &["seasonal"]),
        product("Linen Shorts", "SHO-001", "Summer Drop", "Shorts", 14.0, 35.0, 60, 15, &["seasonal", "premium"]),
    ]
}

fn material(
    name: &str,
    material_type: MaterialType,
    description: &str,
    price: f64,
    quantity: f64,
    unit: &str,
    supplier: &str,
    certifications: &[&str],
) -> Material {
    let now = seeded_at();
    Material {
        id: Material::generate_id(),
        name: name.to_string(),
        material_type,
        status: MaterialStatus::Active,
        description: Some(description.to_string()),
        price: Some(price),
        quantity: Some(quantity),
        unit: Some(unit.to_string()),
        supplier: Some(supplier.to_string()),
        contact_person: None,
        email: None,
        phone: None,
        website: None,
        certifications: certifications.iter().map(|c| c.to_string()).collect(),
        archived: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn materials() -> Vec<Material> {
    vec![
        material(
            "Organic Flour",
            MaterialType::Raw,
            "High-quality organic wheat flour",
            2.5,
            1000.0,
            "kg",
            "Flour Mill Co.",
            &["Organic", "Non-GMO"],
        ),
        material(
            "Sugar",
            MaterialType::Raw,
            "Refined white sugar",
            1.8,
            500.0,
            "kg",
            "Sugar Refinery Ltd",
            &["Non-GMO"],
        ),
        material(
            "Kraft Boxes",
            MaterialType::Packaging,
            "Recyclable kraft shipping boxes",
            0.4,
            2500.0,
            "pcs",
            "BoxWorks GmbH",
            &["FSC"],
        ),
    ]
}

fn manufacturer(
    name: &str,
    category: ManufacturerCategory,
    contact_status: ContactStatus,
    moq: u64,
    certifications: &[&str],
    address: &str,
    city: &str,
    country: &str,
    contact_person: &str,
    email: &str,
    phone: &str,
    website: &str,
) -> Manufacturer {
    let now = seeded_at();
    Manufacturer {
        id: Manufacturer::generate_id(),
        name: name.to_string(),
        category,
        contact_status,
        moq,
        certifications: certifications.iter().map(|c| c.to_string()).collect(),
        location: Location {
            address: address.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        },
        contact_person: contact_person.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        website: website.to_string(),
        notes: Vec::new(),
        archived: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn manufacturers() -> Vec<Manufacturer> {
    vec![
        manufacturer(
            "Flour Mill Co.",
            ManufacturerCategory::RawMaterial,
            ContactStatus::Active,
            1000,
            &["iso_9001", "halal"],
            "123 Flour Street",
            "Paris",
            "France",
            "Jean Dupont",
            "jean@flourmill.com",
            "+33 1 23 45 67 89",
            "https://flourmill.com",
        ),
        manufacturer(
            "Sugar Refinery Ltd",
            ManufacturerCategory::RawMaterial,
            ContactStatus::Active,
            2000,
            &["iso_9001", "kosher"],
            "456 Sugar Avenue",
            "Berlin",
            "Germany",
            "Hans Schmidt",
            "hans@sugarrefinery.com",
            "+49 30 12 34 56 78",
            "https://sugarrefinery.com",
        ),
        manufacturer(
            "BoxWorks GmbH",
            ManufacturerCategory::Packaging,
            ContactStatus::Pending,
            5000,
            &["fsc"],
            "12 Carton Allee",
            "Hamburg",
            "Germany",
            "Petra Lang",
            "petra@boxworks.de",
            "+49 40 98 76 54 32",
            "https://boxworks.de",
        ),
    ]
}
