//! Fixture records shared by core integration tests

use asnalo_domain::{Activity, ActivityType, Client, Deal, DealStage};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn client() -> Client {
    Client {
        id: "c1".into(),
        name: "Taro Yamada".into(),
        email: "yamada@techinnovations.example".into(),
        phone: "03-1234-5678".into(),
        company: "Tech Innovations".into(),
        role: "CTO".into(),
        avatar_url: "https://picsum.photos/seed/c1/100/100".into(),
    }
}

pub fn deal(id: &str, stage: DealStage, amount: u64, close: NaiveDate) -> Deal {
    Deal {
        id: id.into(),
        title: format!("Deal {id}"),
        amount,
        gross_profit: amount / 4,
        stage,
        client_id: "c1".into(),
        probability: 50,
        expected_close_date: close,
        activities: vec![],
        notes: String::new(),
        next_action: None,
        next_action_date: None,
    }
}

/// Five deals spread over June and July 2024, one in each non-lost stage
/// plus a lost deal
pub fn pipeline() -> Vec<Deal> {
    let mut migration = deal("d1", DealStage::QuotePresented, 12_500_000, date(2024, 6, 25));
    migration.title = "Company-wide cloud migration".into();
    migration.activities = vec![
        Activity {
            id: "a2".into(),
            activity_type: ActivityType::Email,
            date: date(2024, 6, 2),
            content: "Sent proposal v2".into(),
        },
        Activity {
            id: "a1".into(),
            activity_type: ActivityType::Meeting,
            date: date(2024, 5, 20),
            content: "Security requirements review".into(),
        },
    ];

    vec![
        migration,
        deal("d2", DealStage::Discovery, 4_500_000, date(2024, 7, 15)),
        deal("d3", DealStage::Proposal, 8_000_000, date(2024, 6, 30)),
        deal("d4", DealStage::Won, 2_400_000, date(2024, 5, 15)),
        deal("d5", DealStage::Lost, 1_000_000, date(2024, 7, 1)),
    ]
}
