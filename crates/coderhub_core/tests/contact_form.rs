use coderhub_core::testing::{ManualScheduler, MemoryForm, RecordingNotificationView, ViewEvent};
use coderhub_core::{
    ContactService, FieldName, FieldSet, NotificationManager, NotificationTiming, Severity,
    SubmissionMessages,
};
use std::rc::Rc;

struct Harness {
    form: Rc<MemoryForm>,
    view: Rc<RecordingNotificationView>,
    service: ContactService<Rc<MemoryForm>>,
}

fn harness(fields: FieldSet) -> Harness {
    let scheduler = Rc::new(ManualScheduler::new());
    let view = Rc::new(RecordingNotificationView::new());
    let notifications =
        NotificationManager::new(view.clone(), scheduler, NotificationTiming::default());
    let form = Rc::new(MemoryForm::new(fields));
    let service = ContactService::new(
        Rc::clone(&form),
        notifications,
        SubmissionMessages::default(),
    );
    Harness {
        form,
        view,
        service,
    }
}

fn filled() -> FieldSet {
    FieldSet {
        name: "Ada".to_string(),
        email: "a@b.c".to_string(),
        subject: "Hi".to_string(),
        message: "test".to_string(),
        consent: true,
    }
}

#[test]
fn empty_name_flags_only_name_and_keeps_values() {
    let mut fields = filled();
    fields.name = String::new();
    let h = harness(fields.clone());

    let result = h.service.submit();

    assert!(!result.all_valid());
    assert_eq!(h.form.invalid_fields(), vec![FieldName::Name]);
    assert_eq!(h.form.fields(), fields);
    assert_eq!(h.form.reset_count(), 0);
    let mounted = h.view.mounted();
    assert_eq!(mounted.len(), 1);
    assert_eq!(mounted[0].severity, Severity::Error);
    assert_eq!(
        mounted[0].message,
        "Por favor completa todos los campos requeridos correctamente."
    );
}

#[test]
fn valid_submission_clears_form_and_shows_success() {
    let h = harness(filled());

    let result = h.service.submit();

    assert!(result.all_valid());
    assert!(h.form.invalid_fields().is_empty());
    assert_eq!(h.form.fields(), FieldSet::default());
    assert_eq!(h.form.reset_count(), 1);
    let mounted = h.view.mounted();
    assert_eq!(mounted.len(), 1);
    assert_eq!(mounted[0].severity, Severity::Success);
}

#[test]
fn stale_highlights_are_cleared_on_next_attempt() {
    let h = harness(FieldSet::default());
    h.service.submit();
    assert_eq!(h.form.invalid_fields(), FieldName::ALL.to_vec());

    let mut fields = filled();
    fields.email = "not-an-email".to_string();
    h.form.fill(fields);
    h.service.submit();

    assert_eq!(h.form.invalid_fields(), vec![FieldName::Email]);
}

#[test]
fn repeated_failures_keep_a_single_notification() {
    let h = harness(FieldSet::default());
    h.service.submit();
    h.service.submit();

    assert_eq!(h.view.mounted().len(), 1);
    let mounts = h
        .view
        .events()
        .into_iter()
        .filter(|event| matches!(event, ViewEvent::Mounted { .. }))
        .count();
    assert_eq!(mounts, 2);
}
