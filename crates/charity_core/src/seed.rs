//! Sample charity documents.
//!
//! Create infers fields from an existing document, so an empty store offers
//! nothing to create. Seeding puts one or two representative documents in
//! each catalog collection.

use crate::catalog::Catalog;
use crate::error::CoreResult;
use charity_store::{Document, DocumentStore, Value};
use tracing::info;

/// Inserts sample documents into every catalog collection whose label has
/// samples, returning how many were inserted.
///
/// # Errors
///
/// Returns the first store error.
pub fn seed_demo(store: &dyn DocumentStore, catalog: &Catalog) -> CoreResult<usize> {
    let mut inserted = 0;
    for entry in catalog.entries() {
        for document in sample_documents(&entry.label) {
            store.insert_one(&entry.name, document)?;
            inserted += 1;
        }
    }
    info!(inserted, "seeded sample documents");
    Ok(inserted)
}

/// Sample documents for a collection label; empty for unknown labels.
pub fn sample_documents(label: &str) -> Vec<Document> {
    match label {
        "Donors" => vec![
            donor(1, "Olena Kovalenko", "olena@example.org", "+380501112233"),
            donor(2, "Mark Levy", "mark@example.org", "+380671234567"),
        ],
        "Donations" => vec![
            Document::from_pairs([
                ("DonationID", Value::Int32(1)),
                ("Amount", Value::Int32(500)),
                ("DonationDate", Value::from("2024-03-01")),
                ("DonorID", Value::Int32(1)),
                ("ProjectID", Value::Int32(1)),
            ]),
            Document::from_pairs([
                ("DonationID", Value::Int32(2)),
                ("Amount", Value::Int32(1200)),
                ("DonationDate", Value::from("2024-03-15")),
                ("DonorID", Value::Int32(2)),
                ("ProjectID", Value::Int32(2)),
            ]),
        ],
        "Projects" => vec![
            Document::from_pairs([
                ("ProjectID", Value::Int32(1)),
                ("ProjectName", Value::from("Clean Water")),
                ("Description", Value::from("Wells for rural schools")),
                ("GoalAmount", Value::Int32(20000)),
            ]),
            Document::from_pairs([
                ("ProjectID", Value::Int32(2)),
                ("ProjectName", Value::from("Winter Shelter")),
                ("Description", Value::from("Heated shelters and blankets")),
                ("GoalAmount", Value::Int32(15000)),
            ]),
        ],
        "Volunteers" => vec![Document::from_pairs([
            ("VolunteerID", Value::Int32(1)),
            ("Name", Value::from("Iryna Shevchuk")),
            ("Email", Value::from("iryna@example.org")),
            ("Phone", Value::from("+380931234567")),
            ("Skills", Value::from(vec!["logistics", "first aid"])),
        ])],
        "VolunteerProjects" => vec![Document::from_pairs([
            ("VolunteerProjectID", Value::Int32(1)),
            ("VolunteerID", Value::Int32(1)),
            ("ProjectID", Value::Int32(2)),
            ("HoursWorked", Value::Int32(12)),
        ])],
        _ => Vec::new(),
    }
}

fn donor(id: i32, name: &str, email: &str, phone: &str) -> Document {
    Document::from_pairs([
        ("DonorID", Value::Int32(id)),
        ("Name", Value::from(name)),
        ("Email", Value::from(email)),
        ("Phone", Value::from(phone)),
    ])
}
