pub mod count_up;
pub mod result_placeholder;
pub mod risk_badge;
pub mod select_field;
pub mod stat_card;
pub mod toast;

pub use count_up::CountUp;
pub use result_placeholder::{ResultPlaceholder, Spinner};
pub use risk_badge::RiskBadge;
pub use select_field::SelectField;
pub use stat_card::StatCard;
