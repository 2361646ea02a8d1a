//! Seed records loaded at process start
//!
//! Four clients and five deals. Deal dates are expressed relative to the
//! current month so the dashboard always has something closing "this month".
//!
//! # Seed Data Structure
//!
//! - One deal closing last month (won)
//! - Two deals closing this month (quote presented, proposal)
//! - One deal closing next month (discovery)
//! - One deal closing in two months (first contact)

use asnalo_domain::{Activity, ActivityType, Client, Deal, DealStage};
use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

/// Date in the month `month_offset` months from `today`, on `day`
///
/// The day is clamped to the length of the target month.
pub fn relative_date(today: NaiveDate, month_offset: i32, day: u32) -> NaiveDate {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let months = Months::new(month_offset.unsigned_abs());
    let target_month = if month_offset >= 0 {
        first_of_month.checked_add_months(months)
    } else {
        first_of_month.checked_sub_months(months)
    }
    .unwrap_or(first_of_month);

    let last_day = target_month
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(28, |last| last.day());

    target_month.with_day(day.clamp(1, last_day)).unwrap_or(target_month)
}

fn client(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    company: &str,
    role: &str,
) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        company: company.to_string(),
        role: role.to_string(),
        avatar_url: format!("https://picsum.photos/seed/{id}/100/100"),
    }
}

/// Seed clients
pub fn seed_clients() -> Vec<Client> {
    vec![
        client(
            "c1",
            "Kenichi Sato",
            "k.sato@techcorp.example",
            "03-1234-5678",
            "TechCorp Inc.",
            "CTO",
        ),
        client(
            "c2",
            "Misaki Tanaka",
            "m.tanaka@innovate.example",
            "03-9876-5432",
            "Innovate Japan",
            "Head of Product Development",
        ),
        client(
            "c3",
            "Daisuke Suzuki",
            "d.suzuki@enterprise-net.example",
            "06-4567-8901",
            "Enterprise Net",
            "Director of IT",
        ),
        client(
            "c4",
            "Yuko Takahashi",
            "y.takahashi@startupscale.example",
            "090-2222-3333",
            "StartupScale",
            "CEO",
        ),
    ]
}

fn activity(id: &str, activity_type: ActivityType, date: NaiveDate, content: &str) -> Activity {
    Activity { id: id.to_string(), activity_type, date, content: content.to_string() }
}

/// Seed deals, dated relative to `today`
pub fn seed_deals(today: NaiveDate) -> Vec<Deal> {
    let on = |month_offset: i32, day: u32| relative_date(today, month_offset, day);

    let deals = vec![
        Deal {
            id: "d1".into(),
            title: "Company-wide cloud migration".into(),
            amount: 12_500_000,
            gross_profit: 5_000_000,
            stage: DealStage::QuotePresented,
            client_id: "c1".into(),
            probability: 80,
            expected_close_date: on(0, 25),
            activities: vec![
                activity("a2", ActivityType::Email, on(0, 2), "Sent proposal v2."),
                activity(
                    "a1",
                    ActivityType::Meeting,
                    on(-1, 20),
                    "Worked through the security requirements in detail.",
                ),
            ],
            notes: "Worried about downtime during the migration. Stress the zero-downtime \
                    guarantee."
                .into(),
            next_action: Some("Confirm approval of the final quote".into()),
            next_action_date: Some(on(0, 10)),
        },
        Deal {
            id: "d2".into(),
            title: "Q4 software licence renewal".into(),
            amount: 4_500_000,
            gross_profit: 900_000,
            stage: DealStage::Proposal,
            client_id: "c3".into(),
            probability: 60,
            expected_close_date: on(0, 28),
            activities: vec![activity(
                "a3",
                ActivityType::Call,
                on(0, 5),
                "Discussed a plan change to cover the growing user count.",
            )],
            notes: "Competitor X is offering 20% off. Differentiate on support quality.".into(),
            next_action: Some("Prepare and send the comparison sheet".into()),
            next_action_date: Some(on(0, 12)),
        },
        Deal {
            id: "d3".into(),
            title: "AI analytics tool rollout".into(),
            amount: 8_500_000,
            gross_profit: 3_500_000,
            stage: DealStage::Discovery,
            client_id: "c2".into(),
            probability: 40,
            expected_close_date: on(1, 15),
            activities: vec![],
            notes: "Strong interest in the predictive modelling features.".into(),
            next_action: Some("Schedule the demo".into()),
            next_action_date: Some(on(0, 20)),
        },
        Deal {
            id: "d4".into(),
            title: "FY2025 consulting contract".into(),
            amount: 2_400_000,
            gross_profit: 2_000_000,
            stage: DealStage::Won,
            client_id: "c4".into(),
            probability: 100,
            expected_close_date: on(-1, 15),
            activities: vec![],
            notes: "Contract signed. Invoice sent.".into(),
            next_action: None,
            next_action_date: None,
        },
        Deal {
            id: "d5".into(),
            title: "Custom ERP module development".into(),
            amount: 6_000_000,
            gross_profit: 2_500_000,
            stage: DealStage::FirstContact,
            client_id: "c1".into(),
            probability: 20,
            expected_close_date: on(2, 10),
            activities: vec![],
            notes: "Inbound enquiry from the web form.".into(),
            next_action: None,
            next_action_date: None,
        },
    ];

    debug!(deals = deals.len(), %today, "Seeded deals");
    deals
}

#[cfg(test)]
mod tests {
    use asnalo_domain::MonthKey;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn relative_date_shifts_months() {
        let today = date(2024, 6, 15);
        assert_eq!(relative_date(today, 0, 25), date(2024, 6, 25));
        assert_eq!(relative_date(today, -1, 20), date(2024, 5, 20));
        assert_eq!(relative_date(today, 2, 10), date(2024, 8, 10));
    }

    #[test]
    fn relative_date_crosses_year_boundaries() {
        assert_eq!(relative_date(date(2024, 12, 3), 1, 15), date(2025, 1, 15));
        assert_eq!(relative_date(date(2025, 1, 31), -1, 15), date(2024, 12, 15));
    }

    #[test]
    fn relative_date_clamps_day_to_month_length() {
        assert_eq!(relative_date(date(2025, 1, 31), 1, 30), date(2025, 2, 28));
        assert_eq!(relative_date(date(2024, 1, 31), 1, 30), date(2024, 2, 29));
    }

    #[test]
    fn seed_deals_are_valid_and_reference_seed_clients() {
        let clients = seed_clients();
        let deals = seed_deals(date(2024, 6, 15));

        assert_eq!(clients.len(), 4);
        assert_eq!(deals.len(), 5);
        for deal in &deals {
            deal.validate().expect("seed deal is valid");
            assert!(clients.iter().any(|c| c.id == deal.client_id), "{} has no client", deal.id);
        }
    }

    #[test]
    fn two_seed_deals_close_this_month() {
        let today = date(2024, 6, 15);
        let this_month = MonthKey::from(today);
        let closing: Vec<_> =
            seed_deals(today)
                .into_iter()
                .filter(|d| d.closes_in(this_month))
                .map(|d| d.id)
                .collect();
        assert_eq!(closing, vec!["d1".to_string(), "d2".to_string()]);
    }

    #[test]
    fn seed_activities_are_newest_first() {
        let deals = seed_deals(date(2024, 6, 15));
        let activities = &deals[0].activities;
        assert!(activities[0].date > activities[1].date);
    }
}
