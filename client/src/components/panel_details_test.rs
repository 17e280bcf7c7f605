use super::*;

#[test]
fn collapsed_details_have_base_class() {
    assert_eq!(details_class(false), "modal-details-section");
}

#[test]
fn expanded_details_add_show() {
    assert_eq!(details_class(true), "modal-details-section show");
}
