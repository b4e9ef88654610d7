use super::text::{finish_block, normalize_text};
use crate::domain::model::{DealershipConfig, ServiceMapping};
use crate::domain::value::{display, integer_display};
use crate::utils::error::Result;

pub const HEADING: &str = "# Services";

const INTRO: &str = "Below are all of the services offered by the car dealership. This section \
also includes important information such as the services opCodes, valid transportation \
options, and other notes to keep in mind when booking an appointment with these services.";

const ZERO_PRICE_NOTICE: &str = "If the price of a service is 0, inform the customer that an \
advisor will provide an estimated price upon arrival to the appointment.";

const TAX_NOTICE: &str = "The listed pricing does not include tax or shop supply fees.";

pub fn build_services_section(config: &DealershipConfig) -> Result<String> {
    let mut lines = vec![
        format!("{}\n", HEADING),
        format!("{}\n", INTRO),
        format!("{}\n", ZERO_PRICE_NOTICE),
        format!("{}\n", TAX_NOTICE),
        "---\n".to_string(),
    ];

    for service in config.service_mappings()? {
        push_service(&mut lines, &service)?;
    }

    Ok(finish_block(&lines))
}

fn push_service(lines: &mut Vec<String>, service: &ServiceMapping<'_>) -> Result<()> {
    let transports = service.transportation_names()?;
    let transports = if transports.is_empty() {
        "None".to_string()
    } else {
        transports.join(", ")
    };

    lines.push(format!("## {}\n", service.name()));
    lines.push(format!("Opcode: {}", service.opcode()));
    lines.push(format!("Shop: {}", service.shop()));
    lines.push(format!("Walk-in appointment: {}", service.walk_in_appointment()));
    lines.push(format!("Starting price: {}", service.starting_price()));
    lines.push(minimum_wait_line(&service.minimum_wait_time()));

    let params = normalize_text(&service.params()?);
    if params.is_empty() {
        lines.push("Params: None specified.".to_string());
    } else {
        lines.push(format!("Params: {}", params));
    }

    lines.push(format!("\nAllowed Transportation Options: {}\n", transports));
    lines.push("---\n".to_string());
    Ok(())
}

/// Whole minutes when the value reads as an integer, otherwise the raw value.
fn minimum_wait_line(wait: &serde_json::Value) -> String {
    match integer_display(wait) {
        Some(minutes) => format!("Minimum wait time: {} minutes", minutes),
        None => format!("Minimum wait time: {}", display(wait)),
    }
}
