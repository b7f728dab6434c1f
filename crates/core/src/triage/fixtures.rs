//! Seed data for the in-memory store.
//!
//! Eight conversations across Reverb and eBay, five tags, three agents,
//! five canned responses and the FAQ greeting.

use chrono::{DateTime, Utc};

use super::{
    Agent, CannedResponse, FaqAutoResponse, Marketplace, Message, Priority, Tag, Ticket,
    TicketStatus, FAQ_AUTO_RESPONSE_ID, UNASSIGNED,
};

const FAQ_GREETING: &str = "Thank you for your message! This is an automated response. \
We will review your inquiry and get back to you within 24 hours.";

/// Parse a fixture timestamp. Literals below are all valid RFC 3339.
fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

fn tag(id: &str, name: &str, color: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn customer(text: &str, date: &str) -> Message {
    Message {
        message: text.to_string(),
        authored: false,
        date: at(date),
        image_attachments: Vec::new(),
    }
}

fn customer_with_image(text: &str, date: &str, url: &str) -> Message {
    Message {
        image_attachments: vec![url.to_string()],
        ..customer(text, date)
    }
}

fn agent(text: &str, date: &str) -> Message {
    Message::agent_reply(text, at(date))
}

pub fn tags() -> Vec<Tag> {
    vec![
        tag("1", "WaitingOnShop", "#FF6B6B"),
        tag("2", "WaitingOnCustomer", "#4ECDC4"),
        tag("3", "AutoResponded", "#95E1D3"),
        tag("4", "WaitingOnRestock", "#FFE66D"),
        tag("5", "Urgent", "#FF0000"),
    ]
}

pub fn agents() -> Vec<Agent> {
    ["Adam", "Daniel", UNASSIGNED]
        .iter()
        .enumerate()
        .map(|(i, name)| Agent {
            id: (i + 1).to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn canned_responses() -> Vec<CannedResponse> {
    [
        "Thank you for contacting us! We will get back to you shortly.",
        "We have received your inquiry and are looking into it.",
        "Your order has been shipped and you should receive tracking information soon.",
        "We apologize for the inconvenience. Let us make this right for you.",
        "Thank you for your patience. We are currently checking on this for you.",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| CannedResponse {
        id: (i + 1).to_string(),
        response: text.to_string(),
    })
    .collect()
}

pub fn faq_auto_response() -> FaqAutoResponse {
    FaqAutoResponse {
        id: FAQ_AUTO_RESPONSE_ID.to_string(),
        faq_auto_response: FAQ_GREETING.to_string(),
    }
}

pub fn tickets() -> Vec<Ticket> {
    let tags = tags();
    let shop = &tags[0];
    let waiting_customer = &tags[1];
    let auto_responded = &tags[2];
    let restock = &tags[3];
    let photo = "https://dgsimages.s3.amazonaws.com/1FBS_1PR.jpg";

    vec![
        Ticket {
            id: "TKT-001".to_string(),
            marketplace: Marketplace::Reverb,
            marketplace_conversation_id: "RVB-CONV-98765".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            priority: Priority::High,
            ticket_status: TicketStatus::InProgress,
            assigned_to: "Adam".to_string(),
            tags: vec![shop.clone()],
            conversation_start_date: at("2025-12-01T09:30:00Z"),
            last_updated_date: at("2025-12-04T14:22:00Z"),
            messages: vec![
                customer(
                    "Hello, I ordered a guitar pedal 3 days ago and haven't received any shipping updates. Can you help?",
                    "2025-12-01T09:30:00Z",
                ),
                agent(
                    "Hi Sarah! Thanks for reaching out. Let me check on your order status right away.",
                    "2025-12-01T10:15:00Z",
                ),
                agent(
                    "I found your order! It's being prepared for shipment and should go out today. You'll receive a tracking number within 24 hours.",
                    "2025-12-01T10:18:00Z",
                ),
                customer(
                    "Thank you so much! I appreciate the quick response.",
                    "2025-12-01T11:05:00Z",
                ),
            ],
            order_history: Some(vec!["ORD-1001".to_string(), "ORD-0892".to_string()]),
            related_listing_url: Some("https://reverb.com/item/89012".to_string()),
        },
        Ticket {
            id: "TKT-002".to_string(),
            marketplace: Marketplace::Ebay,
            marketplace_conversation_id: "EBAY-MSG-54321".to_string(),
            customer_name: "Michael Chen".to_string(),
            priority: Priority::Medium,
            ticket_status: TicketStatus::InProgress,
            assigned_to: "Daniel".to_string(),
            tags: vec![waiting_customer.clone()],
            conversation_start_date: at("2025-12-02T14:20:00Z"),
            last_updated_date: at("2025-12-03T16:45:00Z"),
            messages: vec![
                customer(
                    "The amplifier I received has a slight buzz. Is this normal?",
                    "2025-12-02T14:20:00Z",
                ),
                agent(
                    "Hi Michael, thanks for letting us know. A slight buzz can sometimes be normal depending on the amp. Could you send me a video showing the issue?",
                    "2025-12-02T15:30:00Z",
                ),
                customer_with_image(
                    "Sure, here's a video of the buzz",
                    "2025-12-03T10:15:00Z",
                    photo,
                ),
                agent(
                    "Thanks for the video. That buzz doesn't sound normal. We'd like to offer you a full refund or replacement. Which would you prefer?",
                    "2025-12-03T16:45:00Z",
                ),
            ],
            order_history: Some(vec!["ORD-1023".to_string()]),
            related_listing_url: Some("https://ebay.com/itm/345678".to_string()),
        },
        Ticket {
            id: "TKT-003".to_string(),
            marketplace: Marketplace::Reverb,
            marketplace_conversation_id: "RVB-CONV-11223".to_string(),
            customer_name: "Emily Rodriguez".to_string(),
            priority: Priority::Low,
            ticket_status: TicketStatus::InProgress,
            assigned_to: "Adam".to_string(),
            tags: vec![auto_responded.clone(), restock.clone()],
            conversation_start_date: at("2025-11-28T08:15:00Z"),
            last_updated_date: at("2025-11-29T09:00:00Z"),
            messages: vec![
                customer(
                    "Do you have the vintage delay pedal in stock? The listing shows out of stock.",
                    "2025-11-28T08:15:00Z",
                ),
                agent(
                    "Thank you for your message! We're currently restocking this item. We'll notify you as soon as it's available again.",
                    "2025-11-28T08:17:00Z",
                ),
                agent(
                    "We expect to have the vintage delay pedal back in stock within 1-2 weeks. I can add you to our notification list!",
                    "2025-11-29T09:00:00Z",
                ),
            ],
            order_history: Some(vec![]),
            related_listing_url: Some("https://reverb.com/item/56789".to_string()),
        },
        Ticket {
            id: "TKT-004".to_string(),
            marketplace: Marketplace::Ebay,
            marketplace_conversation_id: "EBAY-MSG-99887".to_string(),
            customer_name: "David Thompson".to_string(),
            priority: Priority::High,
            ticket_status: TicketStatus::InProgress,
            assigned_to: "Daniel".to_string(),
            tags: vec![shop.clone()],
            conversation_start_date: at("2025-12-03T11:00:00Z"),
            last_updated_date: at("2025-12-04T13:30:00Z"),
            messages: vec![
                customer(
                    "I need to return this microphone. It's not what I expected based on the description.",
                    "2025-12-03T11:00:00Z",
                ),
                agent(
                    "I'm sorry to hear that! We want to make this right. Can you tell me what specifically didn't match the description?",
                    "2025-12-03T12:15:00Z",
                ),
                customer_with_image(
                    "The listing said it was a condenser mic but this appears to be dynamic. Here are photos.",
                    "2025-12-03T14:20:00Z",
                    photo,
                ),
                agent(
                    "You're absolutely right - that's our mistake. We'll send you a prepaid return label and process a full refund immediately. I sincerely apologize for the error.",
                    "2025-12-04T13:30:00Z",
                ),
            ],
            order_history: Some(vec!["ORD-1045".to_string()]),
            related_listing_url: Some("https://ebay.com/itm/112233".to_string()),
        },
        Ticket {
            id: "TKT-005".to_string(),
            marketplace: Marketplace::Reverb,
            marketplace_conversation_id: "RVB-CONV-44556".to_string(),
            customer_name: "Jessica Martinez".to_string(),
            priority: Priority::Medium,
            ticket_status: TicketStatus::InProgress,
            assigned_to: "Adam".to_string(),
            tags: vec![waiting_customer.clone(), auto_responded.clone()],
            conversation_start_date: at("2025-11-30T16:45:00Z"),
            last_updated_date: at("2025-12-02T10:30:00Z"),
            messages: vec![
                customer(
                    "Is the synthesizer compatible with MIDI controllers?",
                    "2025-11-30T16:45:00Z",
                ),
                agent(
                    "Thank you for your question! Let me check the specifications for you.",
                    "2025-11-30T16:47:00Z",
                ),
                agent(
                    "Yes! This synthesizer has both MIDI in and MIDI out, so it's fully compatible with MIDI controllers. It supports all standard MIDI messages.",
                    "2025-12-01T09:20:00Z",
                ),
                customer(
                    "Perfect! One more question - does it come with the power adapter?",
                    "2025-12-02T10:30:00Z",
                ),
            ],
            order_history: Some(vec![]),
            related_listing_url: Some("https://reverb.com/item/334455".to_string()),
        },
        Ticket {
            id: "TKT-006".to_string(),
            marketplace: Marketplace::Reverb,
            marketplace_conversation_id: "RVB-CONV-77889".to_string(),
            customer_name: "Robert Williams".to_string(),
            priority: Priority::Low,
            ticket_status: TicketStatus::Completed,
            assigned_to: "Daniel".to_string(),
            tags: vec![],
            conversation_start_date: at("2025-11-25T13:20:00Z"),
            last_updated_date: at("2025-11-26T14:00:00Z"),
            messages: vec![
                customer(
                    "Just received my order! Everything looks great, thank you!",
                    "2025-11-25T13:20:00Z",
                ),
                agent(
                    "That's wonderful to hear! We're so glad everything arrived in perfect condition. Thank you for your purchase and enjoy your new gear!",
                    "2025-11-26T14:00:00Z",
                ),
            ],
            order_history: Some(vec!["ORD-0956".to_string(), "ORD-0823".to_string()]),
            related_listing_url: Some("https://reverb.com/item/998877".to_string()),
        },
        Ticket {
            id: "TKT-007".to_string(),
            marketplace: Marketplace::Ebay,
            marketplace_conversation_id: "EBAY-MSG-66554".to_string(),
            customer_name: "Amanda Lee".to_string(),
            priority: Priority::High,
            ticket_status: TicketStatus::New,
            assigned_to: "Adam".to_string(),
            tags: vec![shop.clone()],
            conversation_start_date: at("2025-12-04T08:00:00Z"),
            last_updated_date: at("2025-12-04T08:05:00Z"),
            messages: vec![
                customer(
                    "I just placed an order but I need to change the shipping address! Can you help?",
                    "2025-12-04T08:00:00Z",
                ),
                agent(
                    "Absolutely! I'm looking into this right now. What's the correct shipping address?",
                    "2025-12-04T08:05:00Z",
                ),
            ],
            order_history: Some(vec!["ORD-1078".to_string()]),
            related_listing_url: None,
        },
        Ticket {
            id: "TKT-008".to_string(),
            marketplace: Marketplace::Reverb,
            marketplace_conversation_id: "RVB-CONV-22114".to_string(),
            customer_name: "Christopher Brown".to_string(),
            priority: Priority::Medium,
            ticket_status: TicketStatus::InProgress,
            assigned_to: "Daniel".to_string(),
            tags: vec![restock.clone()],
            conversation_start_date: at("2025-11-29T10:30:00Z"),
            last_updated_date: at("2025-12-01T15:45:00Z"),
            messages: vec![
                customer(
                    "Will you be getting more of the vintage tube amps in stock?",
                    "2025-11-29T10:30:00Z",
                ),
                agent(
                    "Great question! We're actively looking for more vintage tube amps. I'll add you to our notification list.",
                    "2025-11-30T09:15:00Z",
                ),
                agent(
                    "We just acquired a similar model! It's a 1965 Fender Deluxe Reverb. Would you like more details?",
                    "2025-12-01T15:45:00Z",
                ),
            ],
            order_history: Some(vec!["ORD-0734".to_string()]),
            related_listing_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ticket_ids_are_unique() {
        let tickets = tickets();
        let ids: HashSet<_> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tickets.len());
    }

    #[test]
    fn test_fixture_timestamps_parsed() {
        for ticket in tickets() {
            assert!(ticket.conversation_start_date.timestamp() > 0, "{}", ticket.id);
            assert!(ticket.last_updated_date >= ticket.conversation_start_date);
            for message in &ticket.messages {
                assert!(message.date.timestamp() > 0, "{} message date", ticket.id);
            }
        }
    }

    #[test]
    fn test_fixture_tags_are_store_copies() {
        let all = tags();
        for ticket in tickets() {
            for t in &ticket.tags {
                assert!(all.contains(t), "{} carries unknown tag {}", ticket.id, t.id);
            }
        }
    }

    #[test]
    fn test_fixture_agents_include_unassigned() {
        assert!(agents().iter().any(|a| a.name == UNASSIGNED));
        assert_eq!(faq_auto_response().id, FAQ_AUTO_RESPONSE_ID);
    }
}
