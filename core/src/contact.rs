pub const MAIL_RECIPIENT: &str = "niwamanyaelius95@gmail.com";
pub const CHAT_LINK: &str = "https://wa.me/971552623327";
pub const DEFAULT_INQUIRY_LABEL: &str = "General Inquiry";
pub const CHANNEL_PROMPT: &str = "Choose how to send your message:\n\nOK = Email\nCancel = WhatsApp";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    InquiryType,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::InquiryType,
        FormField::Message,
    ];

    pub fn as_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::InquiryType => "inquiryType",
            FormField::Message => "message",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_name() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub inquiry_type: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::InquiryType => &self.inquiry_type,
            FormField::Message => &self.message,
        }
    }

    pub fn with_field(&self, field: FormField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Name => next.name = value,
            FormField::Email => next.email = value,
            FormField::Company => next.company = value,
            FormField::InquiryType => next.inquiry_type = value,
            FormField::Message => next.message = value,
        }
        next
    }
}

pub fn compose_subject(form: &ContactForm) -> String {
    let label = if form.inquiry_type.is_empty() {
        DEFAULT_INQUIRY_LABEL
    } else {
        &form.inquiry_type
    };
    format!("{label} - {}", form.name)
}

pub fn compose_body(form: &ContactForm) -> String {
    format!(
        "Name: {}\nEmail: {}\nCompany: {}\nInquiry Type: {}\n\nMessage:\n{}",
        form.name, form.email, form.company, form.inquiry_type, form.message
    )
}

pub fn mail_handoff_uri(subject: &str, body: &str) -> String {
    format!(
        "mailto:{MAIL_RECIPIENT}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn chat_handoff_uri(text: &str) -> String {
    format!("{CHAT_LINK}?text={}", urlencoding::encode(text))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendChannel {
    Email,
    Chat,
}

// Prompt dismissal maps to Chat; the environment's confirm primitive has no
// third outcome.
pub trait ChoicePrompt {
    fn choose_channel(&self, prompt: &str) -> SendChannel;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Handoff {
    ComposeMail { uri: String },
    OpenChat { uri: String },
}

impl Handoff {
    pub fn uri(&self) -> &str {
        match self {
            Handoff::ComposeMail { uri } => uri,
            Handoff::OpenChat { uri } => uri,
        }
    }
}

pub fn plan_dispatch(form: &ContactForm, prompt: &impl ChoicePrompt) -> Handoff {
    let subject = compose_subject(form);
    let body = compose_body(form);
    match prompt.choose_channel(CHANNEL_PROMPT) {
        SendChannel::Email => Handoff::ComposeMail {
            uri: mail_handoff_uri(&subject, &body),
        },
        SendChannel::Chat => Handoff::OpenChat {
            uri: chat_handoff_uri(&format!("*{subject}*\n\n{body}")),
        },
    }
}
