use super::text::finish_block;
use crate::domain::model::DealershipConfig;
use crate::utils::error::Result;

pub const HEADING: &str = "### Accepted Payment Methods and Amenities";

const NOT_SPECIFIED: &str = "Not specified";

fn join_or_default(items: &[String]) -> String {
    if items.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        items.join(", ")
    }
}

pub fn build_payments_and_amenities_section(config: &DealershipConfig) -> Result<String> {
    let (payments, amenities) = match config.service_department_information()? {
        Some(info) => (
            info.accepted_payment_methods()?,
            info.waiting_lounge_amenities()?,
        ),
        None => (Vec::new(), Vec::new()),
    };

    let lines = [
        format!("{}\n", HEADING),
        "This business accepts the following payment methods:".to_string(),
        format!("{}.\n", join_or_default(&payments)),
        "The waiting lounge offers these amenities:".to_string(),
        format!("{}.\n", join_or_default(&amenities)),
    ];

    Ok(finish_block(&lines))
}
