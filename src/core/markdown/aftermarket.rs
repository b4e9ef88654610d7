use super::text::{finish_block, normalize_text};
use crate::domain::model::DealershipConfig;
use crate::utils::error::Result;

pub const HEADING: &str = "### After-Market & Sublet Services";

pub fn build_aftermarket_section(config: &DealershipConfig) -> Result<String> {
    let mut lines = vec![format!("{}\n", HEADING)];

    for item in config.aftermarket_services()? {
        let process = normalize_text(&item.process_to_follow()?);
        let process = if process.is_empty() {
            "None specified.".to_string()
        } else {
            process
        };
        let opcode = item.opcode().unwrap_or_else(|| "N/A".to_string());

        lines.push(format!("\n## {}\n", item.name()));
        lines.push(format!("Performed by dealer: {}", item.performed_by_dealer()));
        lines.push(format!("Scheduled by DGA: {}", item.scheduled_by_dga()));
        lines.push(format!("Process to follow: {}", process));
        lines.push(format!("Opcode: {}\n", opcode));
    }

    Ok(finish_block(&lines))
}
