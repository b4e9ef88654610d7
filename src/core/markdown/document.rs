use super::{
    build_aftermarket_section, build_payments_and_amenities_section, build_services_section,
    build_transportation_section,
};
use crate::core::parser::parse_dealerships;
use crate::domain::model::{DealershipConfig, MarkdownDocument};
use crate::utils::error::Result;

/// Renders every dealership into one document. A `# Dealership N` label is
/// only added when there is more than one.
pub fn build_document(configs: &[DealershipConfig]) -> Result<MarkdownDocument> {
    let labelled = configs.len() > 1;
    let mut fragments = Vec::with_capacity(configs.len() * 5);

    for (index, config) in configs.iter().enumerate() {
        if labelled {
            fragments.push(format!("# Dealership {}\n", index + 1));
        }

        fragments.push(build_transportation_section(config)?);
        fragments.push(build_payments_and_amenities_section(config)?);
        fragments.push(build_services_section(config)?);
        fragments.push(build_aftermarket_section(config)?);

        tracing::debug!("Rendered dealership {} of {}", index + 1, configs.len());
    }

    let mut markdown = fragments.join("\n").trim_end().to_string();
    markdown.push('\n');

    Ok(MarkdownDocument {
        markdown,
        dealership_count: configs.len(),
    })
}

/// Parses a raw webhook payload and renders it.
pub fn render_markdown(raw: &str) -> Result<String> {
    let configs = parse_dealerships(raw)?;
    Ok(build_document(&configs)?.markdown)
}
