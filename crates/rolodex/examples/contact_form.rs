//! Example: Round-trip a contact value through an editing surface.
//!
//! Usage:
//!   cargo run --example contact_form

use std::collections::HashMap;

use serde_json::json;

use rolodex::{CellOptions, FieldSet, InputKind, Schema, Submission};

fn main() -> rolodex::Result<()> {
    let separator = "=".repeat(72);

    // A trimmed schema for the demo: two groups, a handful of labels.
    let schema = Schema::builder()
        .valid_groups(["home", "work"])
        .valid_labels(["full_name", "email", "phone", "city"])
        .concise(true)
        .build()?;

    let fields = FieldSet::new()
        .with_field("contact", schema)
        .with_label_subset("contact", ["full_name", "email", "phone"])
        .with_cell_options(
            "contact__home__email",
            CellOptions::new().with_required(true),
        )
        .with_cell_options(
            "contact__home__phone",
            CellOptions::new().with_input(InputKind::Integer),
        );

    // The blob a record currently holds, as it came out of storage.
    let stored = json!({
        "home": {"full_name": "Ada Lovelace", "email": "ada@example.org"},
        "junk": {"note": "silently dropped"}
    });

    println!("{separator}");
    println!("Editing surface");
    println!("{separator}");
    for cell in fields.cells("contact", Some(&stored)) {
        let current = cell
            .value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let marker = if cell.options.required { " (required)" } else { "" };
        println!("  {:28} {:24} [{}]{}", cell.name(), cell.label, current, marker);
    }
    println!();

    // What comes back after the user edits the form.
    let mut submission = Submission::new();
    submission.insert("contact__home__email".to_string(), "ada@lovelace.example".into());
    submission.insert("contact__work__phone".to_string(), "555".into());
    submission.insert("contact__home__full_name".to_string(), "".into());

    let missing = fields.missing_required("contact", &submission);
    println!("Missing required cells: {}", missing.len());

    let updated = fields
        .clean("contact", Some(&stored), &submission)
        .ok_or_else(|| rolodex::RolodexError::MalformedInput {
            reason: "field 'contact' is not registered".to_string(),
        })?;

    println!();
    println!("{separator}");
    println!("Updated canonical value");
    println!("{separator}");
    println!("{}", serde_json::to_string_pretty(&updated).unwrap_or_default());
    println!();

    // Render the result as display cards.
    let mut values = HashMap::new();
    values.insert("contact".to_string(), updated.to_json());

    println!("{separator}");
    println!("Contact cards");
    println!("{separator}");
    for (field, card) in fields.cards(&values, true) {
        println!("  {field}:");
        for group in card.groups() {
            let entries = match card.group(group) {
                Some(entries) if !entries.is_empty() => entries,
                _ => continue,
            };
            for entry in entries.values() {
                println!("    {:24} {}", entry.display_name, entry.value);
            }
        }
    }

    Ok(())
}
