//! Grouped timezone options rendered into a complete static select element.

use blockkit_core::options::{render_option_set, resolve_initial_options};
use blockkit_core::{
    group_timezones, Element, InitialOptions, InitialSelection, OptionSet, StaticSelectElement,
    TextObject, TimezoneTable, MAX_OPTION_GROUP_SIZE,
};
use serde_json::{json, Value};

fn timezone_select(table: &TimezoneTable, initial: &str) -> Value {
    let options = render_option_set(&OptionSet::Grouped(group_timezones(table)));
    let initial = InitialOptions::Single(initial.to_owned());
    let selection = resolve_initial_options(&options, Some(&initial), false);

    let mut select = StaticSelectElement::new(TextObject::plain("Timezone"), options);
    if let Some(InitialSelection::One(option)) = selection {
        select.initial_option = Some(option);
    }
    serde_json::to_value(Element::StaticSelect(select)).expect("serialize select")
}

#[test]
fn custom_table_renders_grouped_select_with_initial_zone() {
    let table = TimezoneTable::from_json_str(
        r#"[{"zoneName":"Europe/Oslo"},{"zoneName":"Asia/Tokyo"},{"zoneName":"Europe/Rome"}]"#,
    )
    .expect("table parses");

    assert_eq!(
        timezone_select(&table, "Asia/Tokyo"),
        json!({
            "type": "static_select",
            "placeholder": { "type": "plain_text", "text": "Timezone" },
            "option_groups": [
                {
                    "label": { "type": "plain_text", "text": "Europe" },
                    "options": [
                        { "text": { "type": "plain_text", "text": "Europe/Oslo" }, "value": "Europe/Oslo" },
                        { "text": { "type": "plain_text", "text": "Europe/Rome" }, "value": "Europe/Rome" }
                    ]
                },
                {
                    "label": { "type": "plain_text", "text": "Asia" },
                    "options": [
                        { "text": { "type": "plain_text", "text": "Asia/Tokyo" }, "value": "Asia/Tokyo" }
                    ]
                }
            ],
            "initial_option": {
                "text": { "type": "plain_text", "text": "Asia/Tokyo" },
                "value": "Asia/Tokyo"
            }
        })
    );
}

#[test]
fn bundled_table_respects_group_size_limit_and_keeps_every_zone() {
    let table = TimezoneTable::bundled();
    let select = timezone_select(table, "America/Vancouver");
    let groups = select["option_groups"].as_array().expect("option groups");

    let total: usize = groups
        .iter()
        .map(|group| group["options"].as_array().map_or(0, Vec::len))
        .inspect(|size| assert!(*size <= MAX_OPTION_GROUP_SIZE))
        .sum();
    assert_eq!(total, table.len());
    assert_eq!(select["initial_option"]["value"], "America/Vancouver");
}
