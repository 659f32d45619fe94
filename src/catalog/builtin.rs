//! Built-in questionnaire catalog.
//!
//! 23 questions across three categories. Weights sum to 1.0; point values
//! drive both scoring and severity tiering (15-point questions are the
//! high-severity checks).

use crate::model::{Catalog, Category, Question};
use std::sync::OnceLock;

/// The built-in security posture catalog.
///
/// Constructed once on first use and shared for the process lifetime.
#[must_use]
pub fn builtin_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(build)
}

fn build() -> Catalog {
    Catalog::new(vec![technical(), human(), organizational()])
}

fn technical() -> Category {
    Category {
        key: "technical".to_string(),
        name: "Technical Security".to_string(),
        weight: 0.4,
        questions: vec![
            Question::new("t1", "Is an active firewall protecting your network?", 10),
            Question::new("t2", "Is software updated on a regular schedule?", 10),
            Question::new(
                "t3",
                "Is antivirus/antimalware installed on every machine?",
                10,
            ),
            Question::new("t4", "Are periodic backups taken?", 15),
            Question::new("t5", "Is there a disaster recovery plan?", 10),
            Question::new("t6", "Is sensitive data encrypted?", 10),
            Question::new(
                "t7",
                "Is the network monitored for suspicious activity?",
                10,
            ),
            Question::new(
                "t8",
                "Is the network segmented to isolate critical areas?",
                10,
            ),
            Question::new("t9", "Is two-factor authentication (2FA) in use?", 15),
        ],
    }
}

fn human() -> Category {
    Category {
        key: "human".to_string(),
        name: "Human Factor".to_string(),
        weight: 0.3,
        questions: vec![
            Question::new(
                "h1",
                "Are employees trained in cybersecurity at least once a year?",
                15,
            ),
            Question::new("h2", "Can employees identify phishing emails?", 15),
            Question::new(
                "h3",
                "Are there clear policies requiring strong passwords?",
                10,
            ),
            Question::new("h4", "Do employees report security incidents?", 10),
            Question::new("h5", "Is there a designated security officer?", 15),
            Question::new("h6", "Is the use of external USB devices restricted?", 10),
            Question::new("h7", "Are there policies for secure remote work?", 15),
        ],
    }
}

fn organizational() -> Category {
    Category {
        key: "organizational".to_string(),
        name: "Organizational Management".to_string(),
        weight: 0.3,
        questions: vec![
            Question::new("o1", "Is there a documented security policy?", 15),
            Question::new(
                "o2",
                "Is access to sensitive information controlled?",
                15,
            ),
            Question::new(
                "o3",
                "Is there a procedure to deprovision departing users?",
                10,
            ),
            Question::new("o4", "Are periodic security audits performed?", 10),
            Question::new(
                "o5",
                "Is there a security incident response plan?",
                15,
            ),
            Question::new(
                "o6",
                "Do you comply with applicable data protection regulations?",
                15,
            ),
            Question::new(
                "o7",
                "Is the security of external vendors assessed?",
                10,
            ),
        ],
    }
}
