use crate::domain::value::{display, field_display, is_truthy, text_field};
use crate::utils::error::{FormatterError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Fields = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// One dealership's configuration exactly as the webhook returned it.
///
/// Fields are read lazily through the views below, so missing or oddly typed
/// keys only matter to the section that reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct DealershipConfig {
    fields: Fields,
}

impl DealershipConfig {
    pub fn new(fields: Fields) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn transportations(&self) -> Result<Vec<TransportationOption<'_>>> {
        Ok(records(&self.fields, "transportations")?
            .into_iter()
            .map(|fields| TransportationOption { fields })
            .collect())
    }

    /// Only the first department entry is ever consulted.
    pub fn service_department_information(&self) -> Result<Option<ServiceDepartmentInfo<'_>>> {
        Ok(records(&self.fields, "service_department_information")?
            .into_iter()
            .next()
            .map(|fields| ServiceDepartmentInfo { fields }))
    }

    pub fn service_mappings(&self) -> Result<Vec<ServiceMapping<'_>>> {
        Ok(records(&self.fields, "service_mappings")?
            .into_iter()
            .map(|fields| ServiceMapping { fields })
            .collect())
    }

    pub fn aftermarket_services(&self) -> Result<Vec<AftermarketService<'_>>> {
        Ok(records(&self.fields, "aftermarket_and_sublet_services")?
            .into_iter()
            .map(|fields| AftermarketService { fields })
            .collect())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TransportationOption<'a> {
    fields: &'a Fields,
}

impl<'a> TransportationOption<'a> {
    /// Raw name; `None` when the value is not a string.
    pub fn name(&self) -> Option<&'a str> {
        self.fields.get("transportation").and_then(Value::as_str)
    }

    /// Only a flag reading `YES` (any case, surrounding whitespace ignored)
    /// counts as scheduled by an agent. A falsy flag reads as not scheduled.
    pub fn is_scheduled_by_agent(&self) -> Result<bool> {
        Ok(text_field(self.fields, "schedule_by_agent")?.to_uppercase() == "YES")
    }

    pub fn qualifications(&self) -> Result<String> {
        text_field(self.fields, "qualifications_and_params")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceDepartmentInfo<'a> {
    fields: &'a Fields,
}

impl<'a> ServiceDepartmentInfo<'a> {
    pub fn accepted_payment_methods(&self) -> Result<Vec<String>> {
        string_list(self.fields, "methods_accepted_payments")
    }

    pub fn waiting_lounge_amenities(&self) -> Result<Vec<String>> {
        string_list(self.fields, "waiting_lounge_amenities")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceMapping<'a> {
    fields: &'a Fields,
}

impl<'a> ServiceMapping<'a> {
    pub fn name(&self) -> String {
        field_display(self.fields, "service", "")
    }

    pub fn opcode(&self) -> String {
        field_display(self.fields, "opcode", "")
    }

    pub fn shop(&self) -> String {
        field_display(self.fields, "shop", "")
    }

    pub fn walk_in_appointment(&self) -> String {
        field_display(self.fields, "walk_in_appointment", "")
    }

    pub fn starting_price(&self) -> String {
        field_display(self.fields, "starting_price", "0.00")
    }

    pub fn minimum_wait_time(&self) -> Value {
        self.fields
            .get("minimum_wait_time")
            .cloned()
            .unwrap_or_else(|| Value::from(0))
    }

    pub fn params(&self) -> Result<String> {
        text_field(self.fields, "params")
    }

    /// Transportation names referenced by this service, trimmed and
    /// upper-cased, de-duplicated in first-seen order. Blank names are skipped.
    pub fn transportation_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for option in records(self.fields, "transportations")? {
            let name = text_field(option, "transportation")?.to_uppercase();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AftermarketService<'a> {
    fields: &'a Fields,
}

impl<'a> AftermarketService<'a> {
    pub fn name(&self) -> String {
        field_display(self.fields, "service", "")
    }

    pub fn performed_by_dealer(&self) -> String {
        field_display(self.fields, "performed_by_dealer", "")
    }

    pub fn scheduled_by_dga(&self) -> String {
        field_display(self.fields, "scheduled_by_dga", "")
    }

    pub fn process_to_follow(&self) -> Result<String> {
        text_field(self.fields, "process_to_follow")
    }

    /// `None` for any falsy opcode, including `0` and `""`.
    pub fn opcode(&self) -> Option<String> {
        self.fields
            .get("opcode")
            .filter(|value| is_truthy(value))
            .map(display)
    }
}

/// The assembled Markdown for every dealership in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    pub markdown: String,
    pub dealership_count: usize,
}

/// Objects held by the list field `key`. Falsy values read as an empty list.
fn records<'a>(fields: &'a Fields, key: &str) -> Result<Vec<&'a Fields>> {
    match fields.get(key) {
        None => Ok(Vec::new()),
        Some(value) if !is_truthy(value) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_object().ok_or_else(|| {
                    FormatterError::schema(format!(
                        "`{}[{}]` must be an object, got {}",
                        key, index, item
                    ))
                })
            })
            .collect(),
        Some(other) => Err(FormatterError::schema(format!(
            "`{}` must be an array, got {}",
            key, other
        ))),
    }
}

fn string_list(fields: &Fields, key: &str) -> Result<Vec<String>> {
    match fields.get(key) {
        None => Ok(Vec::new()),
        Some(value) if !is_truthy(value) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(text) => Ok(text.clone()),
                other => Err(FormatterError::schema(format!(
                    "`{}[{}]` must be a string, got {}",
                    key, index, other
                ))),
            })
            .collect(),
        Some(other) => Err(FormatterError::schema(format!(
            "`{}` must be an array, got {}",
            key, other
        ))),
    }
}
