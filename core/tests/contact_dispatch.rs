use elfolio_core::contact::{
    compose_body, compose_subject, plan_dispatch, ChoicePrompt, ContactForm, FormField, Handoff,
    SendChannel, CHANNEL_PROMPT, CHAT_LINK, MAIL_RECIPIENT,
};

struct FixedChoice(SendChannel);

impl ChoicePrompt for FixedChoice {
    fn choose_channel(&self, prompt: &str) -> SendChannel {
        assert_eq!(prompt, CHANNEL_PROMPT);
        self.0
    }
}

fn ada_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_string(),
        email: "a@x.com".to_string(),
        company: String::new(),
        inquiry_type: String::new(),
        message: "Hi".to_string(),
    }
}

#[test]
fn subject_defaults_to_general_inquiry() {
    assert_eq!(compose_subject(&ada_form()), "General Inquiry - Ada");
}

#[test]
fn subject_uses_selected_inquiry_type() {
    let form = ada_form().with_field(FormField::InquiryType, "Web Development".to_string());
    assert_eq!(compose_subject(&form), "Web Development - Ada");
}

#[test]
fn body_lists_all_fields_with_message_last() {
    assert_eq!(
        compose_body(&ada_form()),
        "Name: Ada\nEmail: a@x.com\nCompany: \nInquiry Type: \n\nMessage:\nHi"
    );
}

#[test]
fn affirmative_choice_plans_mail_compose() {
    let handoff = plan_dispatch(&ada_form(), &FixedChoice(SendChannel::Email));
    let Handoff::ComposeMail { uri } = handoff else {
        panic!("expected mail compose, got {handoff:?}");
    };
    assert_eq!(
        uri,
        format!(
            "mailto:{MAIL_RECIPIENT}?subject=General%20Inquiry%20-%20Ada\
             &body=Name%3A%20Ada%0AEmail%3A%20a%40x.com%0ACompany%3A%20\
             %0AInquiry%20Type%3A%20%0A%0AMessage%3A%0AHi"
        )
    );
}

#[test]
fn dismissive_choice_plans_chat_tab() {
    let form = ada_form();
    let handoff = plan_dispatch(&form, &FixedChoice(SendChannel::Chat));
    let Handoff::OpenChat { uri } = handoff else {
        panic!("expected chat tab, got {handoff:?}");
    };
    let prefix = format!("{CHAT_LINK}?text=");
    let encoded = uri.strip_prefix(&prefix).expect("chat uri targets fixed phone");
    let text = urlencoding::decode(encoded).expect("valid percent encoding");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("*General Inquiry - Ada*"));
    assert_eq!(lines.next(), Some(""));
    let remainder: Vec<&str> = lines.collect();
    assert_eq!(remainder.join("\n"), compose_body(&form));
}

#[test]
fn chat_text_never_leaks_query_metacharacters() {
    let form = ada_form().with_field(FormField::Message, "A&B=C#D?E".to_string());
    let handoff = plan_dispatch(&form, &FixedChoice(SendChannel::Chat));
    let uri = handoff.uri();
    let (_, text_param) = uri.split_once("?text=").expect("text query parameter");
    assert!(!text_param.contains(['&', '=', '#', '?']));
    let decoded = urlencoding::decode(text_param).expect("valid percent encoding");
    assert!(decoded.contains("A&B=C#D?E"));
}

#[test]
fn field_mutation_leaves_other_fields_untouched() {
    let original = ContactForm {
        name: "Ada".to_string(),
        email: "a@x.com".to_string(),
        company: "Analytical Engines".to_string(),
        inquiry_type: "Data Analysis".to_string(),
        message: "Hi".to_string(),
    };
    for field in FormField::ALL {
        let mutated = original.with_field(field, "changed".to_string());
        assert_eq!(mutated.field(field), "changed");
        for other in FormField::ALL {
            if other != field {
                assert_eq!(mutated.field(other), original.field(other));
            }
        }
    }
}

#[test]
fn field_names_round_trip() {
    for field in FormField::ALL {
        assert_eq!(FormField::from_name(field.as_name()), Some(field));
    }
    assert_eq!(FormField::from_name("phone"), None);
    assert_eq!(FormField::from_name(""), None);
}
