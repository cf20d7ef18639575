//! End-to-end console flows over the in-memory store.
//!
//! Each test scripts the full menu or a single engine operation and checks
//! both the printed transcript and the resulting store contents.

use charity_core::{
    coerce, CreateOutcome, DeleteOutcome, Engine, Menu, ReadOutcome, ScriptedConsole,
    UpdateOutcome, CLOSING,
};
use charity_store::{Document, DocumentStore, FieldFilter, InMemoryStore, Value, ID_FIELD};
use charity_testkit::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Coercion
// ============================================================================

#[test]
fn coercion_examples() {
    assert_eq!(coerce("42"), Value::Integer(42));
    assert_eq!(coerce("a,b,c"), Value::from(vec!["a", "b", "c"]));
    assert_eq!(coerce("-5"), Value::from("-5"));
    assert_eq!(coerce("3.14"), Value::from("3.14"));
    assert_eq!(coerce("hello"), Value::from("hello"));
}

#[test]
fn coercion_is_stable() {
    for raw in ["42", "a,b", "", "x", "9999999999999999999999"] {
        assert_eq!(coerce(raw), coerce(raw));
    }
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn create_on_empty_collection_inserts_nothing() {
    let mut session = TestSession::new(Vec::<String>::new());
    let outcome = session.engine().create("Donors").unwrap();

    assert_eq!(outcome, CreateOutcome::EmptyCollection);
    assert_eq!(session.store.count("Donors"), 0);
    assert!(session
        .console
        .saw("The collection 'Donors' is empty. There is no document to infer fields from."));
}

#[test]
fn create_infers_fields_and_coerces() {
    let store = scenarios::name_amount_store("Donations");
    let mut session = TestSession::with_store(store, ["Alice", "100"]);
    let outcome = session.engine().create("Donations").unwrap();

    assert_eq!(outcome, CreateOutcome::Created);
    assert!(session.console.saw("Enter value for 'name': "));
    assert!(session.console.saw("Enter value for 'amount': "));
    assert!(session.console.saw("Document created successfully!"));

    let docs = session.documents("Donations");
    assert_eq!(docs.len(), 2);
    let created = &docs[1];
    assert_eq!(created.get("name"), Some(&Value::from("Alice")));
    assert_eq!(created.get("amount"), Some(&Value::Int32(100)));
    assert!(created.id().is_some());
    assert_ne!(created.id(), docs[0].id());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn create_follows_any_template(template in arb_flat_document()) {
        let store = InMemoryStore::with_documents("Any", vec![template.clone()]);
        let answers: Vec<String> = (0..template.len()).map(|i| format!("answer {i}")).collect();
        let mut session = TestSession::with_store(store, answers);
        let outcome = session.engine().create("Any").unwrap();
        prop_assert_eq!(outcome, CreateOutcome::Created);

        let created = session.documents("Any").pop().unwrap();
        let fields: Vec<&str> = created.keys().filter(|k| *k != ID_FIELD).collect();
        prop_assert_eq!(fields, template.keys().collect::<Vec<_>>());
        for (i, field) in template.keys().enumerate() {
            prop_assert_eq!(created.get(field), Some(&Value::from(format!("answer {i}"))));
        }
    }

    #[test]
    fn create_coerces_console_answers(name in arb_comma_input(), amount in arb_digit_input()) {
        let store = scenarios::name_amount_store("Donations");
        let mut session = TestSession::with_store(store, [name.clone(), amount.clone()]);
        session.engine().create("Donations").unwrap();

        let created = session.documents("Donations").pop().unwrap();
        prop_assert_eq!(created.get("name"), Some(&coerce(name.trim()).into_stored()));
        prop_assert_eq!(created.get("amount"), Some(&coerce(&amount).into_stored()));
    }
}

#[test]
fn create_uses_first_document_shape_only() {
    let store = scenarios::mixed_shape_store("People");
    let mut session = TestSession::with_store(store, ["Third"]);
    session.engine().create("People").unwrap();

    assert!(!session.console.saw("Enter value for 'Email': "));
    let created = session.documents("People").pop().unwrap();
    assert!(created.get("Email").is_none());
    assert_eq!(created.get("Name"), Some(&Value::from("Third")));
}

#[test]
fn create_stores_empty_answers_as_empty_text() {
    let store = scenarios::name_amount_store("Donations");
    let mut session = TestSession::with_store(store, ["", ""]);
    session.engine().create("Donations").unwrap();

    let created = session.documents("Donations").pop().unwrap();
    assert_eq!(created.get("name"), Some(&Value::from("")));
    assert_eq!(created.get("amount"), Some(&Value::from("")));
}

#[test]
fn create_reports_unacknowledged_insert() {
    let store = FaultyStore::new(scenarios::name_amount_store("Donations"));
    store.withhold_acknowledgement();
    let mut console = ScriptedConsole::new(["Alice", "100"]);
    let outcome = Engine::new(&store, &mut console).create("Donations").unwrap();

    assert_eq!(outcome, CreateOutcome::NotAcknowledged);
    assert!(console.saw("Failed to create document."));
}

#[test]
fn create_reports_insert_error() {
    let store = FaultyStore::new(scenarios::name_amount_store("Donations"));
    store.fail(StoreOperation::InsertOne);
    let mut console = ScriptedConsole::new(["Alice", "100"]);
    let outcome = Engine::new(&store, &mut console).create("Donations").unwrap();

    assert!(matches!(outcome, CreateOutcome::Failed(_)));
    assert!(console.transcript().iter().any(|l| l.starts_with("Error: ")));
    assert_eq!(store.inner().count("Donations"), 1);
}

// ============================================================================
// Read
// ============================================================================

#[test]
fn read_lists_every_document_in_order() {
    let store = scenarios::numbered_store("Items", 3);
    let mut session = TestSession::with_store(store, Vec::<String>::new());
    let outcome = session.engine().read("Items").unwrap();

    assert_eq!(outcome, ReadOutcome::Listed(3));
    let labels: Vec<_> = session
        .console
        .transcript()
        .iter()
        .filter(|l| l.contains("item "))
        .cloned()
        .collect();
    assert_eq!(labels.len(), 3);
    assert!(labels[0].contains("item 1"));
    assert!(labels[2].contains("item 3"));
}

#[test]
fn read_on_empty_collection_prints_only_header() {
    let mut session = TestSession::new(Vec::<String>::new());
    let outcome = session.engine().read("Donors").unwrap();

    assert_eq!(outcome, ReadOutcome::Listed(0));
    assert_eq!(session.console.transcript().len(), 1);
}

#[test]
fn read_reports_error_midway() {
    let store = FaultyStore::new(scenarios::numbered_store("Items", 3));
    store.fail(StoreOperation::IterAllMidway);
    let mut console = ScriptedConsole::new(Vec::<String>::new());
    let outcome = Engine::new(&store, &mut console).read("Items").unwrap();

    assert!(matches!(outcome, ReadOutcome::Failed(_)));
    assert!(console.saw("item 1"));
    assert!(!console.saw("item 2"));
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn update_without_match_writes_nothing() {
    let store = scenarios::numbered_store("Items", 2);
    let before = store.documents("Items");
    let mut session = TestSession::with_store(store, ["id", "7"]);
    let outcome = session.engine().update("Items").unwrap();

    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert!(session.console.saw("No document found with id = 7"));
    assert_eq!(session.documents("Items"), before);
}

#[test]
fn update_keeping_every_field_reports_failure() {
    let store = scenarios::numbered_store("Items", 2);
    let before = store.documents("Items");
    let mut session = TestSession::with_store(store, ["id", "1", "", ""]);
    let outcome = session.engine().update("Items").unwrap();

    assert_eq!(outcome, UpdateOutcome::Unchanged);
    assert!(session
        .console
        .saw("Failed to update the document with id = 1."));
    assert_eq!(session.documents("Items"), before);
}

#[test]
fn update_retyping_current_values_reports_failure() {
    let mut session = TestSession::seeded(["DonorID", "1", "1", "", "", ""]);
    let before = session.documents("Donors");
    let outcome = session.engine().update("Donors").unwrap();

    assert_eq!(outcome, UpdateOutcome::Unchanged);
    assert!(session
        .console
        .saw("Failed to update the document with DonorID = 1."));
    assert_eq!(session.documents("Donors"), before);
}

#[test]
fn update_changes_only_the_first_match() {
    let store = InMemoryStore::with_documents(
        "Volunteers2",
        vec![
            Document::from_pairs([("Name", "Dana"), ("City", "Lviv")]),
            Document::from_pairs([("Name", "Dana"), ("City", "Kyiv")]),
        ],
    );
    let mut session = TestSession::with_store(store, ["Name", "Dana", "", "Odesa"]);
    let outcome = session.engine().update("Volunteers2").unwrap();

    assert_eq!(outcome, UpdateOutcome::Updated);
    let docs = session.documents("Volunteers2");
    assert_eq!(docs[0].get("City"), Some(&Value::from("Odesa")));
    assert_eq!(docs[1].get("City"), Some(&Value::from("Kyiv")));
}

#[test]
fn update_shows_current_document_before_prompting() {
    let mut session = TestSession::seeded(["DonorID", "2", "", "", "", "+380990000000"]);
    let outcome = session.engine().update("Donors").unwrap();

    assert_eq!(outcome, UpdateOutcome::Updated);
    let transcript = session.console.transcript();
    let current = transcript
        .iter()
        .position(|l| l == "\nCurrent document:")
        .unwrap();
    assert!(transcript[current + 1].contains("Mark Levy"));

    let updated = session
        .store
        .find_one("Donors", &FieldFilter::new("DonorID", 2i64))
        .unwrap()
        .unwrap();
    assert_eq!(updated.get("Phone"), Some(&Value::from("+380990000000")));
    assert_eq!(updated.get("Name"), Some(&Value::from("Mark Levy")));
}

#[test]
fn update_reports_store_error() {
    let store = FaultyStore::new(scenarios::numbered_store("Items", 1));
    store.fail(StoreOperation::UpdateOne);
    let mut console = ScriptedConsole::new(["id", "1", "9", "renamed"]);
    let outcome = Engine::new(&store, &mut console).update("Items").unwrap();

    assert!(matches!(outcome, UpdateOutcome::Failed(_)));
    assert_eq!(
        store.inner().documents("Items")[0].get("label"),
        Some(&Value::from("item 1"))
    );
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn delete_all_requires_exact_confirmation() {
    for answer in ["n", "yes", "", "maybe"] {
        let store = scenarios::numbered_store("Items", 3);
        let mut session = TestSession::with_store(store, ["2", answer]);
        let outcome = session.engine().delete("Items").unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled, "answer {answer:?}");
        assert!(session.console.saw("Operation canceled."));
        assert_eq!(session.store.count("Items"), 3);
    }
}

#[test]
fn delete_all_removes_every_document() {
    let store = scenarios::numbered_store("Items", 5);
    let mut session = TestSession::with_store(store, ["2", "y"]);
    let outcome = session.engine().delete("Items").unwrap();

    assert_eq!(outcome, DeleteOutcome::DeletedAll(5));
    assert!(session
        .console
        .saw("Deleted 5 documents from the collection."));
    assert_eq!(session.store.count("Items"), 0);
}

#[test]
fn delete_by_field_removes_first_match() {
    let store = scenarios::numbered_store("Items", 3);
    let mut session = TestSession::with_store(store, ["1", "id", "2"]);
    let outcome = session.engine().delete("Items").unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    let remaining: Vec<_> = session
        .documents("Items")
        .iter()
        .filter_map(|d| d.get("id").cloned())
        .collect();
    assert_eq!(remaining, vec![Value::Int32(1), Value::Int32(3)]);
}

#[test]
fn delete_reports_store_error() {
    let store = FaultyStore::new(scenarios::numbered_store("Items", 2));
    store.fail(StoreOperation::DeleteAll);
    let mut console = ScriptedConsole::new(["2", "y"]);
    let outcome = Engine::new(&store, &mut console).delete("Items").unwrap();

    assert!(matches!(outcome, DeleteOutcome::Failed(_)));
    assert!(console
        .transcript()
        .iter()
        .any(|l| l.starts_with("Error during deletion: ")));
    assert_eq!(store.inner().count("Items"), 2);
}

// ============================================================================
// Menu
// ============================================================================

#[test]
fn menu_walks_through_a_full_session() {
    let mut session = TestSession::seeded([
        "3", // Projects
        "1", // Create
        "3",
        "Food Bank",
        "Weekly food parcels",
        "5000",
        "2", // Read
        "5", // Back
        "6", // Exit
    ]);
    session.run_menu();

    assert!(session.console.saw("Document created successfully!"));
    assert!(session.console.saw("Food Bank"));
    assert_eq!(session.store.count("Projects"), 3);
    assert_eq!(
        session.console.transcript().last().map(String::as_str),
        Some(CLOSING)
    );
}

#[test]
fn menu_recovers_after_store_error() {
    let store = FaultyStore::new(scenarios::charity_store());
    store.fail(StoreOperation::SampleOne);
    let catalog = charity_core::Catalog::default();
    let mut console = ScriptedConsole::new(["1", "1", "2", "6"]);
    Menu::new(&store, &mut console, &catalog).run().unwrap();

    assert!(console.transcript().iter().any(|l| l.starts_with("Error: ")));
    assert!(console.saw("Olena Kovalenko"));
    assert_eq!(console.count_of("--- CRUD menu for Donors ---"), 3);
}

#[test]
fn end_of_input_mid_prompt_closes() {
    let mut session = TestSession::seeded(["1", "3", "DonorID"]);
    session.run_menu();

    assert_eq!(
        session.console.transcript().last().map(String::as_str),
        Some("\nClosing...")
    );
    assert_eq!(session.store.count("Donors"), 2);
}
