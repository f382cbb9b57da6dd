use super::*;

#[test]
fn greeting_uses_signed_in_name() {
    assert_eq!(greeting_name(Some("alice")), "alice");
}

#[test]
fn greeting_falls_back_to_admin() {
    assert_eq!(greeting_name(None), "Admin");
    assert_eq!(greeting_name(Some("")), "Admin");
}

#[test]
fn dialog_titles_are_distinct() {
    assert_ne!(COLLECTION_DIALOG_TITLE, BLOG_DIALOG_TITLE);
}

#[test]
fn dashboard_triggers_keep_dialogs_separate() {
    let mut collection = DialogState::default();
    let mut blog = DialogState::default();

    collection.open_with(COLLECTION_DIALOG_TITLE);
    blog.open_with(BLOG_DIALOG_TITLE);
    blog.set_open(false);

    assert!(collection.open);
    assert_eq!(collection.title, COLLECTION_DIALOG_TITLE);
    assert!(!blog.open);
    assert_eq!(blog.title, BLOG_DIALOG_TITLE);
}
