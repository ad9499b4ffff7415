use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Ada".to_owned());
    form.set(ContactField::Email, "ada@example.com".to_owned());
    form.set(ContactField::Subject, "Hello".to_owned());
    form.set(ContactField::Message, "Nice site".to_owned());
    form
}

#[test]
fn set_and_get_each_field() {
    let form = filled();
    assert_eq!(form.get(ContactField::Name), "Ada");
    assert_eq!(form.get(ContactField::Email), "ada@example.com");
    assert_eq!(form.get(ContactField::Subject), "Hello");
    assert_eq!(form.get(ContactField::Message), "Nice site");
}

#[test]
fn payload_copies_fields() {
    let payload = filled().payload();
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.email, "ada@example.com");
    assert_eq!(payload.subject, "Hello");
    assert_eq!(payload.message, "Nice site");
}

#[test]
fn reset_clears_fields_and_flight_flag() {
    let mut form = filled();
    form.in_flight = true;
    form.reset();
    assert_eq!(form, ContactForm::default());
}
