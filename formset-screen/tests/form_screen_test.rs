//! End-to-end behaviour of the form screen over an in-memory store

mod common;

use std::sync::Arc;

use common::{stored_forms, Harness};
use formset::{
    Action, Field, FormName, KeyValueStore, MemoryStore, Record, CLEARED_MESSAGE, SAVED_MESSAGE,
};

#[tokio::test]
async fn test_submit_then_clear_scenario() {
    let store = Arc::new(MemoryStore::new());
    let mut app = Harness::mounted(store.clone()).await;

    assert_eq!(app.screen.selection(), Some(FormName::Form1));
    for field in Field::ALL {
        assert_eq!(app.field(field), "");
    }

    app.type_into(Field::FirstName, "Ada");
    app.type_into(Field::LastName, "Lovelace");
    app.press(Action::Submit).await;
    assert_eq!(app.status_line(), SAVED_MESSAGE);

    app.select(FormName::Form2).await;
    assert_eq!(app.status_line(), "");
    for field in Field::ALL {
        assert_eq!(app.field(field), "", "{:?} should be empty on Form2", field);
    }

    app.select(FormName::Form1).await;
    assert_eq!(app.field(Field::FirstName), "Ada");
    assert_eq!(app.field(Field::LastName), "Lovelace");

    app.press(Action::ClearData).await;
    for field in Field::ALL {
        assert_eq!(app.field(field), "");
    }
    assert_eq!(store.get("Form1").await.unwrap(), None);
    assert_eq!(app.screen.dialog(), Some(CLEARED_MESSAGE));
    assert!(app.screen.view().dialog.is_some());
    assert_eq!(app.status_line(), CLEARED_MESSAGE);

    app.press(Action::DismissDialog).await;
    assert!(app.screen.view().dialog.is_none());
}

#[tokio::test]
async fn test_clear_twice_matches_clear_once() {
    let store = Arc::new(MemoryStore::new());
    let mut app = Harness::mounted(store.clone()).await;
    app.type_into(Field::Email, "ada@example.com");
    app.press(Action::Submit).await;

    app.press(Action::ClearData).await;
    let forms_after_once = app.screen.forms().clone();
    let status_after_once = app.screen.status();

    app.press(Action::DismissDialog).await;
    app.press(Action::ClearData).await;

    assert_eq!(app.screen.forms(), &forms_after_once);
    assert_eq!(app.screen.status(), status_after_once);
    assert!(app.screen.current_record().unwrap().is_empty());
    assert_eq!(store.get("Form1").await.unwrap(), None);
    assert!(stored_forms(&*store).await.is_empty());
}

#[tokio::test]
async fn test_submit_survives_remount() {
    let store = Arc::new(MemoryStore::new());

    {
        let mut app = Harness::mounted(store.clone()).await;
        app.select(FormName::Form4).await;
        app.type_into(Field::FirstName, "Grace");
        app.type_into(Field::LastName, "Hopper");
        app.type_into(Field::Email, "grace@example.com");
        app.type_into(Field::Phone, "555-0199");
        app.press(Action::Submit).await;
    }

    let mut app = Harness::mounted(store.clone()).await;
    app.select(FormName::Form4).await;

    assert_eq!(
        app.screen.current_record(),
        Some(&Record {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555-0199".to_string(),
        })
    );
}

#[tokio::test]
async fn test_last_submit_wins() {
    let store = Arc::new(MemoryStore::new());
    let mut app = Harness::mounted(store.clone()).await;

    app.type_into(Field::FirstName, "Ada");
    app.press(Action::Submit).await;
    app.type_into(Field::FirstName, "Augusta");
    app.press(Action::Submit).await;

    app.select(FormName::Form2).await;
    app.select(FormName::Form1).await;
    assert_eq!(app.field(Field::FirstName), "Augusta");
}

#[tokio::test]
async fn test_editing_one_form_leaves_others_alone() {
    let store = Arc::new(MemoryStore::new());
    let mut app = Harness::mounted(store.clone()).await;
    app.type_into(Field::FirstName, "Ada");
    app.press(Action::Submit).await;

    app.select(FormName::Form2).await;
    let before: Vec<_> = app
        .screen
        .forms()
        .iter()
        .filter(|(form, _)| *form != FormName::Form2)
        .map(|(form, record)| (form, record.clone()))
        .collect();

    app.type_into(Field::FirstName, "Grace");
    app.type_into(Field::Phone, "555");

    for (form, record) in before {
        assert_eq!(app.screen.forms().get(form), &record, "{} changed", form);
    }
    assert_eq!(app.screen.forms().get(FormName::Form2).first_name, "Grace");
    assert_eq!(
        store.get("Form1").await.unwrap().as_deref(),
        Some(r#"{"firstName":"Ada","lastName":"","email":"","phone":""}"#)
    );
}

#[tokio::test]
async fn test_switching_away_discards_unsaved_edits() {
    let store = Arc::new(MemoryStore::new());
    let mut app = Harness::mounted(store.clone()).await;

    // Never saved: comes back empty
    app.type_into(Field::FirstName, "Draft");
    app.select(FormName::Form3).await;
    app.select(FormName::Form1).await;
    assert_eq!(app.field(Field::FirstName), "");

    // Saved once: comes back as saved
    app.type_into(Field::FirstName, "Ada");
    app.press(Action::Submit).await;
    app.type_into(Field::FirstName, "Unsaved");
    app.select(FormName::Form3).await;
    app.select(FormName::Form1).await;
    assert_eq!(app.field(Field::FirstName), "Ada");
}

#[tokio::test]
async fn test_status_clears_on_edit_and_selection() {
    let store = Arc::new(MemoryStore::new());
    let mut app = Harness::mounted(store).await;

    app.press(Action::Submit).await;
    assert_eq!(app.status_line(), SAVED_MESSAGE);
    app.type_into(Field::Phone, "1");
    assert_eq!(app.status_line(), "");

    app.press(Action::Submit).await;
    assert_eq!(app.status_line(), SAVED_MESSAGE);
    app.select(FormName::Form5).await;
    assert_eq!(app.status_line(), "");
}

#[tokio::test]
async fn test_each_form_has_its_own_entry() {
    let store = Arc::new(MemoryStore::new());
    let mut app = Harness::mounted(store.clone()).await;

    for form in FormName::ALL {
        app.select(form).await;
        app.type_into(Field::FirstName, form.label());
        app.press(Action::Submit).await;
    }
    assert_eq!(stored_forms(&*store).await, FormName::ALL.to_vec());

    app.select(FormName::Form3).await;
    app.press(Action::ClearData).await;
    assert_eq!(stored_forms(&*store).await.len(), 4);
    assert_eq!(store.get("Form3").await.unwrap(), None);

    for form in FormName::ALL {
        app.select(form).await;
        let expected = if form == FormName::Form3 { "" } else { form.label() };
        assert_eq!(app.field(Field::FirstName), expected);
    }
}
