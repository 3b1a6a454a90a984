pub mod contact;
pub mod particles;
pub mod visibility;

pub use contact::{
    chat_handoff_uri, compose_body, compose_subject, mail_handoff_uri, plan_dispatch, ChoicePrompt,
    ContactForm, FormField, Handoff, SendChannel, CHANNEL_PROMPT, CHAT_LINK,
    DEFAULT_INQUIRY_LABEL, MAIL_RECIPIENT,
};
pub use particles::{
    particle_field, rand_range, rand_unit, splitmix64, ParticleSpec, PARTICLE_COUNT,
    PARTICLE_GLYPHS, PARTICLE_STYLES,
};
pub use visibility::VisibilitySet;
