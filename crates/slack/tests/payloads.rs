//! End-to-end payloads assembled from several builder namespaces.

use blockkit_slack::{accessory, blocks, button, input, view, SelectOption, View};
use serde_json::json;

fn approval_modal() -> View {
    let tiers = vec![SelectOption::new("Standard", "std"), SelectOption::new("Premium", "prem")];

    view::modal(
        view::ModalParams::new(
            "Quote review",
            vec![
                blocks::header(blocks::HeaderParams::new("Q-2031")),
                blocks::markdown(
                    blocks::MarkdownParams::new("*Acme Corp* renewal")
                        .block_id("summary")
                        .accessory(accessory::button(
                            accessory::ButtonParams::new("Open", "Q-2031").action_id("open"),
                        )),
                ),
                blocks::divider(blocks::DividerParams::new()),
                input::text(
                    input::TextParams::new("Note", "Why?").action_id("note").max_length(200),
                ),
                input::static_select(
                    input::StaticSelectParams::new("Tier", "Choose a tier", tiers)
                        .action_id("tier")
                        .initial_options("prem"),
                ),
                blocks::actions(blocks::ActionsParams::new(vec![
                    button::primary(
                        button::ButtonParams::new("Approve", "Q-2031").action_id("approve"),
                    ),
                    button::danger(
                        button::ButtonParams::new("Reject", "Q-2031").action_id("reject"),
                    ),
                ])),
            ],
            "quote.review.v1",
        )
        .submit_text("Submit")
        .metadata(json!({ "quote": "Q-2031" })),
    )
}

#[test]
fn review_modal_matches_platform_payload() {
    let payload = serde_json::to_value(approval_modal()).expect("serialize modal");

    assert_eq!(
        payload,
        json!({
            "type": "modal",
            "title": { "type": "plain_text", "text": "Quote review", "emoji": true },
            "blocks": [
                {
                    "type": "header",
                    "text": { "type": "plain_text", "text": "Q-2031" }
                },
                {
                    "type": "section",
                    "text": { "type": "mrkdwn", "text": "*Acme Corp* renewal" },
                    "block_id": "summary",
                    "accessory": {
                        "type": "button",
                        "text": { "type": "plain_text", "text": "Open", "emoji": true },
                        "value": "Q-2031",
                        "action_id": "open"
                    }
                },
                { "type": "divider" },
                {
                    "type": "input",
                    "element": {
                        "type": "plain_text_input",
                        "placeholder": { "type": "plain_text", "text": "Why?" },
                        "multiline": false,
                        "action_id": "note",
                        "max_length": 200
                    },
                    "label": { "type": "plain_text", "text": "Note", "emoji": true },
                    "optional": false,
                    "dispatch_action": false
                },
                {
                    "type": "input",
                    "element": {
                        "type": "static_select",
                        "placeholder": { "type": "plain_text", "text": "Choose a tier" },
                        "options": [
                            {
                                "text": { "type": "plain_text", "text": "Standard", "emoji": true },
                                "value": "std"
                            },
                            {
                                "text": { "type": "plain_text", "text": "Premium", "emoji": true },
                                "value": "prem"
                            }
                        ],
                        "action_id": "tier",
                        "initial_option": {
                            "text": { "type": "plain_text", "text": "Premium", "emoji": true },
                            "value": "prem"
                        }
                    },
                    "label": { "type": "plain_text", "text": "Tier", "emoji": true },
                    "optional": false,
                    "dispatch_action": false
                },
                {
                    "type": "actions",
                    "elements": [
                        {
                            "type": "button",
                            "text": { "type": "plain_text", "text": "Approve", "emoji": true },
                            "value": "Q-2031",
                            "action_id": "approve",
                            "style": "primary"
                        },
                        {
                            "type": "button",
                            "text": { "type": "plain_text", "text": "Reject", "emoji": true },
                            "value": "Q-2031",
                            "action_id": "reject",
                            "style": "danger"
                        }
                    ]
                }
            ],
            "callback_id": "quote.review.v1",
            "private_metadata": "{\"quote\":\"Q-2031\"}",
            "submit": { "type": "plain_text", "text": "Submit", "emoji": true }
        })
    );
}

#[test]
fn building_twice_yields_identical_payloads() {
    let first = serde_json::to_string(&approval_modal()).expect("serialize first");
    let second = serde_json::to_string(&approval_modal()).expect("serialize second");

    assert_eq!(first, second);
}
