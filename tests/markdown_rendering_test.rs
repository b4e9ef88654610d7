use dealership_md::core::markdown::text::format_transportation_name;
use dealership_md::render_markdown;

/// 完整文件輸出比對
#[test]
fn test_full_document_layout() {
    let raw = r#"{
        "transportations": [{"transportation": "LOANER", "schedule_by_agent": "Yes"}],
        "service_department_information": [],
        "service_mappings": [{
            "service": "Tire Rotation",
            "opcode": "ROT",
            "shop": "Main",
            "walk_in_appointment": "No",
            "starting_price": 0,
            "minimum_wait_time": "abc"
        }],
        "aftermarket_and_sublet_services": [{"service": "Tint", "opcode": 0}]
    }"#;

    let expected = concat!(
        "### Transportation Options\n",
        "\n",
        "The transportation options the customer can choose from when booking or rescheduling ",
        "an appointment (depending on the services they want to schedule).\n",
        "\n",
        "#### Loaner\n",
        "\n",
        "Scheduled by agent: Yes\n",
        "\n",
        "Notes:\n",
        " No additional requirements.\n",
        "\n",
        "---\n",
        "\n",
        "### Accepted Payment Methods and Amenities\n",
        "\n",
        "This business accepts the following payment methods:\n",
        "Not specified.\n",
        "\n",
        "The waiting lounge offers these amenities:\n",
        "Not specified.\n",
        "\n",
        "# Services\n",
        "\n",
        "Below are all of the services offered by the car dealership. This section also includes ",
        "important information such as the services opCodes, valid transportation options, and ",
        "other notes to keep in mind when booking an appointment with these services.\n",
        "\n",
        "If the price of a service is 0, inform the customer that an advisor will provide an ",
        "estimated price upon arrival to the appointment.\n",
        "\n",
        "The listed pricing does not include tax or shop supply fees.\n",
        "\n",
        "---\n",
        "\n",
        "## Tire Rotation\n",
        "\n",
        "Opcode: ROT\n",
        "Shop: Main\n",
        "Walk-in appointment: No\n",
        "Starting price: 0\n",
        "Minimum wait time: abc\n",
        "Params: None specified.\n",
        "\n",
        "Allowed Transportation Options: None\n",
        "\n",
        "---\n",
        "\n",
        "### After-Market & Sublet Services\n",
        "\n",
        "\n",
        "## Tint\n",
        "\n",
        "Performed by dealer: \n",
        "Scheduled by DGA: \n",
        "Process to follow: None specified.\n",
        "Opcode: N/A\n",
    );

    assert_eq!(render_markdown(raw).unwrap(), expected);
}

#[test]
fn test_schedule_flag_variants() {
    for (flag, expected) in [
        ("yes", "Yes"),
        ("Yes", "Yes"),
        ("YES ", "Yes"),
        ("yEs", "Yes"),
        ("NO", "No"),
        ("", "No"),
        ("maybe", "No"),
    ] {
        let raw = serde_json::json!({
            "transportations": [{"transportation": "SHUTTLE", "schedule_by_agent": flag}]
        })
        .to_string();
        let markdown = render_markdown(&raw).unwrap();
        assert!(
            markdown.contains(&format!("Scheduled by agent: {}\n", expected)),
            "flag {flag:?}"
        );
    }
}

#[test]
fn test_transportation_name_formatting() {
    assert_eq!(format_transportation_name("NIGHT DROP SERVICE"), "Night Drop service");
}

#[test]
fn test_empty_transportations_keeps_intro() {
    let markdown = render_markdown(r#"{"transportations": []}"#).unwrap();
    assert!(markdown.starts_with("### Transportation Options\n\nThe transportation options"));
    assert!(!markdown.contains("####"));
}

#[test]
fn test_wait_time_string_fallback() {
    let markdown = render_markdown(
        r#"{"service_mappings": [{"service": "Detail", "minimum_wait_time": "abc"}]}"#,
    )
    .unwrap();
    assert!(markdown.contains("Minimum wait time: abc\n"));
}

#[test]
fn test_zero_opcode_is_na() {
    let markdown = render_markdown(
        r#"{"aftermarket_and_sublet_services": [{"service": "Tint", "opcode": 0}]}"#,
    )
    .unwrap();
    assert!(markdown.contains("Opcode: N/A"));
    assert!(!markdown.contains("Opcode: 0"));
}

#[test]
fn test_invalid_payload_is_rejected() {
    assert!(render_markdown("not json").unwrap_err().is_schema_failure());
    assert!(render_markdown("[1, 2]").unwrap_err().is_schema_failure());
}

#[test]
fn test_non_string_fields_abort_the_document() {
    for raw in [
        r#"{"transportations": [{"schedule_by_agent": true}]}"#,
        r#"{"transportations": [{"qualifications_and_params": 5}]}"#,
        r#"{"service_department_information": [{"methods_accepted_payments": [1, "Cash"]}]}"#,
        r#"{"service_mappings": [{"params": 12}]}"#,
        r#"{"aftermarket_and_sublet_services": [{"process_to_follow": ["call"]}]}"#,
    ] {
        assert!(render_markdown(raw).unwrap_err().is_schema_failure(), "{raw}");
    }
}

#[test]
fn test_falsy_free_text_keeps_defaults() {
    let markdown = render_markdown(
        r#"{
            "transportations": [{"transportation": "LOANER", "schedule_by_agent": false, "qualifications_and_params": 0}],
            "aftermarket_and_sublet_services": [{"service": "Tint", "process_to_follow": null}]
        }"#,
    )
    .unwrap();
    assert!(markdown.contains("Scheduled by agent: No\n"));
    assert!(markdown.contains("Notes:\n No additional requirements.\n"));
    assert!(markdown.contains("Process to follow: None specified.\n"));
}
