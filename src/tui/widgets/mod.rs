// Widget rendering: one module per screen zone.

pub mod answer_input;
pub mod complete;
pub mod question;
pub mod status_bar;
pub mod toast;
