use super::text::{finish_block, format_transportation_name, normalize_text};
use crate::domain::model::DealershipConfig;
use crate::utils::error::Result;

pub const HEADING: &str = "### Transportation Options";

const INTRO: &str = "The transportation options the customer can choose from when booking or \
rescheduling an appointment (depending on the services they want to schedule).";

pub fn build_transportation_section(config: &DealershipConfig) -> Result<String> {
    let mut lines = vec![format!("{}\n", HEADING), format!("{}\n", INTRO)];

    for option in config.transportations()? {
        let name = format_transportation_name(option.name().unwrap_or_default());
        let scheduled = if option.is_scheduled_by_agent()? { "Yes" } else { "No" };

        lines.push(format!("#### {}\n", name));
        lines.push(format!("Scheduled by agent: {}\n", scheduled));
        lines.push("Notes:".to_string());

        let notes = normalize_text(&option.qualifications()?);
        if notes.is_empty() {
            lines.push(" No additional requirements.".to_string());
        } else {
            lines.push(String::new());
            lines.push(notes);
        }

        lines.push("\n---\n".to_string());
    }

    Ok(finish_block(&lines))
}
